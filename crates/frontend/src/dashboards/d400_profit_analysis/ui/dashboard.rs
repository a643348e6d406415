use super::detail_modal::DetailModal;
use super::filters::TableFilters;
use super::metrics::MetricCards;
use super::table::ProfitTable;
use super::toolbar::Toolbar;
use crate::dashboards::d400_profit_analysis::state::create_state;
use crate::dashboards::d400_profit_analysis::AnalysisTableController;
use crate::layout::use_notifications;
use contracts::dashboards::d400_profit_analysis::shortcuts::Shortcut;
use contracts::dashboards::d400_profit_analysis::ReportPeriod;
use contracts::shared::config::AUTO_REFRESH_INTERVAL_MS;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

/// Profit analysis dashboard
#[component]
pub fn ProfitAnalysisDashboard() -> impl IntoView {
    let state = create_state();
    let controller = AnalysisTableController::new(state, use_notifications());

    let query = use_query_map();
    let url_period = query
        .with_untracked(|q| q.get("period"))
        .and_then(|code| ReportPeriod::from_code(&code));
    controller.restore_preferences(url_period);
    controller.cache_snapshot();

    // Load metrics and charts on mount
    Effect::new(move |_| {
        controller.refresh();
    });

    // Poll while "today" is selected; dropping the Interval stops it
    let auto_refresh = StoredValue::new_local(None::<Interval>);
    let period = Memo::new(move |_| state.with(|s| s.period));
    Effect::new(move |_| {
        let timer = period.get().auto_refreshes().then(|| {
            Interval::new(AUTO_REFRESH_INTERVAL_MS, move || {
                log::debug!("auto-refresh of today's profit analysis");
                controller.refresh();
            })
        });
        auto_refresh.set_value(timer);
    });

    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        let Some(shortcut) = Shortcut::from_key(&ev.key(), ev.ctrl_key() || ev.meta_key()) else {
            return;
        };
        if shortcut.prevents_default() {
            ev.prevent_default();
        }
        controller.handle_shortcut(shortcut);
    });
    on_cleanup(move || keydown.remove());

    let is_loading = move || state.with(|s| s.is_loading);

    view! {
        <div id="d400_profit_analysis--dashboard" data-page-category="dashboard" class="page page--dashboard profit-analysis">
            <Toolbar controller=controller />

            {move || {
                if is_loading() {
                    view! {
                        <div class="profit-analysis__loading">
                            <span>"Loading data..."</span>
                        </div>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            <MetricCards controller=controller />

            <div class="profit-analysis__table-card">
                <TableFilters controller=controller />
                <ProfitTable controller=controller />
            </div>

            <DetailModal controller=controller />
        </div>
    }
}
