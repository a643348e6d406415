use crate::dashboards::d400_profit_analysis::AnalysisTableController;
use crate::shared::components::stat_card::{StatCard, StatTone};
use contracts::dashboards::d400_profit_analysis::ProfitMetrics;
use contracts::shared::number_format::{format_money, format_percent};
use leptos::prelude::*;
use rust_decimal::Decimal;

const PLACEHOLDER: &str = "—";

#[component]
pub fn MetricCards(controller: AnalysisTableController) -> impl IntoView {
    let state = controller.state();
    let metric = move |f: fn(&ProfitMetrics) -> String| {
        Signal::derive(move || {
            state.with(|s| {
                s.metrics
                    .as_ref()
                    .map(f)
                    .unwrap_or_else(|| PLACEHOLDER.to_string())
            })
        })
    };
    let profit_tone = Signal::derive(move || {
        state.with(|s| match &s.metrics {
            Some(m) => StatTone::from_sign(m.net_profit < Decimal::ZERO),
            None => StatTone::Neutral,
        })
    });

    view! {
        <div class="stat-cards">
            <StatCard
                label="Total Revenue"
                icon_name="revenue"
                value=metric(|m| format_money(m.total_revenue))
            />
            <StatCard
                label="Net Profit"
                icon_name="profit"
                value=metric(|m| format_money(m.net_profit))
                tone=profit_tone
            />
            <StatCard
                label="Profit Margin"
                icon_name="percent"
                value=metric(|m| format_percent(m.profit_margin, 1))
                tone=profit_tone
            />
            <StatCard
                label="Total Cost"
                icon_name="cost"
                value=metric(|m| format_money(m.total_cost))
            />
        </div>
    }
}
