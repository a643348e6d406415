pub mod api;
pub mod chart_bridge;
pub mod controller;
pub mod dom_snapshot;
pub mod state;
pub mod ui;

pub use controller::AnalysisTableController;
