use super::dto::ReportPeriod;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// File name of the client-side table export
pub const TABLE_CSV_FILENAME: &str = "profit-analysis-table.csv";

/// Server-rendered report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Excel,
}

impl ExportFormat {
    pub fn endpoint(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "/reports/export-profit-pdf/",
            ExportFormat::Excel => "/reports/export-profit-excel/",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Excel => "xlsx",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Excel => "Excel",
        }
    }

    /// `profit-analysis-2026-10-18.pdf`, dated on the day of the export
    pub fn filename(&self, export_date: NaiveDate) -> String {
        format!(
            "profit-analysis-{}.{}",
            export_date.format("%Y-%m-%d"),
            self.extension()
        )
    }
}

/// Body of both export endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub period: ReportPeriod,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filenames_use_export_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(ExportFormat::Pdf.filename(date), "profit-analysis-2026-03-07.pdf");
        assert_eq!(ExportFormat::Excel.filename(date), "profit-analysis-2026-03-07.xlsx");
    }

    #[test]
    fn test_export_request_body() {
        let body = serde_json::to_value(ExportRequest { period: ReportPeriod::Week }).unwrap();
        assert_eq!(body, json!({"period": "week"}));
        assert_eq!(ExportFormat::Excel.endpoint(), "/reports/export-profit-excel/");
    }
}
