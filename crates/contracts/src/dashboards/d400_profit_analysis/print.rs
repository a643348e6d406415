//! Stand-alone HTML page of the headline figures, written into a new window
//! and sent to the printer.

use super::share::ShareSummary;
use crate::shared::config::APP_NAME;
use chrono::{Datelike, NaiveDate};

const PRINT_STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 20px; }
.header { text-align: center; margin-bottom: 30px; }
.metrics { display: grid; grid-template-columns: repeat(2, 1fr); gap: 20px; margin-bottom: 30px; }
.metric { padding: 15px; border: 1px solid #ddd; border-radius: 8px; }
.metric-label { font-size: 14px; color: #666; margin-bottom: 5px; }
.metric-value { font-size: 24px; font-weight: bold; color: #2c3e50; }
.footer { margin-top: 30px; text-align: center; font-size: 12px; color: #666; }";

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn metric_block(label: &str, value: &str) -> String {
    format!(
        "<div class=\"metric\"><div class=\"metric-label\">{}</div><div class=\"metric-value\">{}</div></div>",
        label,
        escape_html(value)
    )
}

/// Full HTML document for the print window
pub fn printable_report(summary: &ShareSummary, generated_on: NaiveDate) -> String {
    let metrics = [
        metric_block("Total Revenue", &summary.revenue),
        metric_block("Net Profit", &summary.profit),
        metric_block("Profit Margin", &summary.margin),
        metric_block("Total Cost", &summary.cost),
    ]
    .join("\n");

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <title>{app} Profit Analysis Report</title>\n\
         <style>\n{style}\n</style>\n\
         </head>\n\
         <body>\n\
         <div class=\"header\">\n\
         <h1>{app} Profit Analysis Report</h1>\n\
         <p>Period: {period} | Generated: {date}</p>\n\
         </div>\n\
         <div class=\"metrics\">\n{metrics}\n</div>\n\
         <div class=\"footer\"><p>Generated by {app} POS System | &copy; {year}</p></div>\n\
         </body>\n\
         </html>\n",
        app = APP_NAME,
        style = PRINT_STYLE,
        period = escape_html(&summary.period),
        date = generated_on.format("%d/%m/%Y"),
        metrics = metrics,
        year = generated_on.year(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> ShareSummary {
        ShareSummary {
            period: "Month".into(),
            revenue: "Rs. 125,000.00".into(),
            profit: "Rs. 31,000.50".into(),
            cost: "Rs. 93,999.50".into(),
            margin: "24.8%".into(),
        }
    }

    #[test]
    fn test_report_lists_all_four_metrics() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let html = printable_report(&summary(), date);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>ShopCloud Profit Analysis Report</title>"));
        assert!(html.contains("Period: Month | Generated: 18/10/2026"));
        for (label, value) in [
            ("Total Revenue", "Rs. 125,000.00"),
            ("Net Profit", "Rs. 31,000.50"),
            ("Profit Margin", "24.8%"),
            ("Total Cost", "Rs. 93,999.50"),
        ] {
            assert!(html.contains(&metric_block(label, value)), "missing {}", label);
        }
        assert!(html.contains("&copy; 2026"));
    }

    #[test]
    fn test_values_are_escaped() {
        let mut s = summary();
        s.period = "<script>".into();
        let html = printable_report(&s, NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
        assert!(html.contains("Period: &lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
