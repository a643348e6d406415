use crate::shared::api_utils::{get_json, post_for_bytes, AJAX_HEADER, PROFIT_ANALYSIS_PATH};
use contracts::dashboards::d400_profit_analysis::export::{ExportFormat, ExportRequest};
use contracts::dashboards::d400_profit_analysis::{PeriodQuery, ProfitAnalysisResponse, ReportPeriod};
use contracts::shared::api_error::ApiError;

/// Metrics, chart series and product rows of a period
pub async fn fetch_profit_analysis(period: ReportPeriod) -> Result<ProfitAnalysisResponse, ApiError> {
    let query = serde_qs::to_string(&PeriodQuery { period })
        .map_err(|e| ApiError::Transport(format!("Failed to encode query: {}", e)))?;
    let path = format!("{}?{}", PROFIT_ANALYSIS_PATH, query);
    get_json(&path, &[AJAX_HEADER]).await
}

/// Server-rendered PDF or Excel report of a period
pub async fn export_report(format: ExportFormat, period: ReportPeriod) -> Result<Vec<u8>, ApiError> {
    post_for_bytes(format.endpoint(), &ExportRequest { period }).await
}
