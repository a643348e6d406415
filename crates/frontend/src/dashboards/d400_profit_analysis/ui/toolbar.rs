use crate::dashboards::d400_profit_analysis::AnalysisTableController;
use crate::layout::use_notifications;
use crate::shared::icons::icon;
use contracts::dashboards::d400_profit_analysis::export::ExportFormat;
use contracts::dashboards::d400_profit_analysis::shortcuts::SHORTCUTS_HELP;
use contracts::dashboards::d400_profit_analysis::ReportPeriod;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Toolbar(controller: AnalysisTableController) -> impl IntoView {
    let state = controller.state();
    let notifications = use_notifications();

    let period_code = RwSignal::new(state.with_untracked(|s| s.period.code().to_string()));
    Effect::new(move |_| {
        let code = period_code.get();
        if let Some(period) = ReportPeriod::from_code(&code) {
            untrack(move || controller.change_period(period));
        }
    });

    let exporting = move |format: ExportFormat| {
        Signal::derive(move || state.with(|s| s.exporting == Some(format)))
    };
    let pdf_exporting = exporting(ExportFormat::Pdf);
    let excel_exporting = exporting(ExportFormat::Excel);
    let busy = Signal::derive(move || state.with(|s| s.exporting.is_some() || s.is_loading));

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">"Profit Analysis"</h1>
                <span class="page__subtitle">{move || state.with(|s| s.period.display_name())}</span>
            </div>

            <div class="page__header-right">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Select value=period_code>
                        {ReportPeriod::all()
                            .into_iter()
                            .map(|p| view! { <option value=p.code()>{p.display_name()}</option> })
                            .collect_view()}
                    </Select>

                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| controller.refresh()
                        disabled=Signal::derive(move || state.with(|s| s.is_loading))
                    >
                        {icon("refresh")}" Refresh"
                    </Button>

                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| controller.export_report(ExportFormat::Pdf)
                        disabled=busy
                    >
                        {icon("download")}
                        {move || if pdf_exporting.get() { " Exporting..." } else { " PDF" }}
                    </Button>

                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| controller.export_report(ExportFormat::Excel)
                        disabled=busy
                    >
                        {icon("download")}
                        {move || if excel_exporting.get() { " Exporting..." } else { " Excel" }}
                    </Button>

                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| controller.print_report()>
                        {icon("print")}" Print"
                    </Button>

                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| controller.share_whatsapp()>
                        {icon("share")}" WhatsApp"
                    </Button>

                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| controller.share_email()>
                        {icon("share")}" Email"
                    </Button>

                    <Button appearance=ButtonAppearance::Transparent on_click=move |_| notifications.info(SHORTCUTS_HELP)>
                        "?"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}
