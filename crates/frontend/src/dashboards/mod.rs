pub mod d400_profit_analysis;

pub use d400_profit_analysis::ui::ProfitAnalysisDashboard;
