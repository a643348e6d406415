pub mod charts;
pub mod dto;
pub mod export;
pub mod preferences;
pub mod print;
pub mod share;
pub mod shortcuts;
pub mod table;

pub use dto::{
    PeriodQuery, ProductProfitRow, ProfitAnalysisResponse, ProfitCharts, ProfitMetrics,
    ReportPeriod,
};
pub use table::{
    apply_filters, compute_stats, CategoryFilter, FilterState, ProductCategory, RenderedRow,
    SortDirection, SortField, SortKey, TableRecord, TableSnapshot, TableStats,
};
