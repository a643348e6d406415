use contracts::dashboards::d400_profit_analysis::export::ExportFormat;
use contracts::dashboards::d400_profit_analysis::preferences::AnalysisPreferences;
use contracts::dashboards::d400_profit_analysis::{
    FilterState, ProfitMetrics, ReportPeriod, TableRecord, TableSnapshot,
};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct ProfitAnalysisState {
    pub period: ReportPeriod,
    /// `None` until the first successful load
    pub metrics: Option<ProfitMetrics>,
    pub snapshot: TableSnapshot,
    pub filters: FilterState,
    /// Row shown in the detail modal
    pub selected: Option<TableRecord>,
    pub is_loading: bool,
    pub exporting: Option<ExportFormat>,
}

impl ProfitAnalysisState {
    pub fn visible_rows(&self) -> Vec<TableRecord> {
        self.snapshot.query(&self.filters)
    }

    pub fn preferences(&self) -> AnalysisPreferences {
        AnalysisPreferences::capture(self.period, &self.filters)
    }
}

pub fn create_state() -> RwSignal<ProfitAnalysisState> {
    RwSignal::new(ProfitAnalysisState::default())
}
