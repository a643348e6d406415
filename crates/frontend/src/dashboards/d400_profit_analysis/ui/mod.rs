pub mod dashboard;
pub mod detail_modal;
pub mod filters;
pub mod metrics;
pub mod table;
pub mod toolbar;

pub use dashboard::ProfitAnalysisDashboard;
