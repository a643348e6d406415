//! Text summaries of a period for WhatsApp and e-mail sharing

use super::dto::{ProfitMetrics, ReportPeriod};
use crate::shared::config::APP_NAME;
use crate::shared::number_format::{format_money, format_percent};

const WHATSAPP_BASE: &str = "https://wa.me/?text=";

/// Headline figures as displayed on the metric cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSummary {
    pub period: String,
    pub revenue: String,
    pub profit: String,
    pub cost: String,
    pub margin: String,
}

impl ShareSummary {
    pub fn new(period: ReportPeriod, metrics: &ProfitMetrics) -> Self {
        Self {
            period: period.title(),
            revenue: format_money(metrics.total_revenue),
            profit: format_money(metrics.net_profit),
            cost: format_money(metrics.total_cost),
            margin: format_percent(metrics.profit_margin, 1),
        }
    }

    pub fn whatsapp_message(&self) -> String {
        format!(
            "*{app} Profit Analysis*\n\n\
             Period: {period}\n\
             Revenue: {revenue}\n\
             Profit: {profit}\n\
             Cost: {cost}\n\
             Margin: {margin}\n\n\
             Generated by {app} POS",
            app = APP_NAME,
            period = self.period,
            revenue = self.revenue,
            profit = self.profit,
            cost = self.cost,
            margin = self.margin,
        )
    }

    pub fn whatsapp_url(&self) -> String {
        whatsapp_url(&self.whatsapp_message())
    }

    pub fn email_subject(&self) -> String {
        format!("{} Profit Analysis - {}", APP_NAME, self.period)
    }

    pub fn email_body(&self) -> String {
        format!(
            "Dear Team,\n\n\
             Please find the profit analysis summary below:\n\n\
             Period: {period}\n\
             Revenue: {revenue}\n\
             Profit: {profit}\n\
             Margin: {margin}\n\n\
             For detailed analysis, please access the {app} dashboard.\n\n\
             Best regards,\n{app} System",
            app = APP_NAME,
            period = self.period,
            revenue = self.revenue,
            profit = self.profit,
            margin = self.margin,
        )
    }

    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:?subject={}&body={}",
            urlencoding::encode(&self.email_subject()),
            urlencoding::encode(&self.email_body())
        )
    }
}

/// Share link for a single product row
pub fn product_share_url(product_name: &str) -> String {
    whatsapp_url(&format!(
        "Product Analysis: {}\n\nGenerated by {} POS",
        product_name, APP_NAME
    ))
}

fn whatsapp_url(message: &str) -> String {
    format!("{}{}", WHATSAPP_BASE, urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn summary() -> ShareSummary {
        ShareSummary::new(
            ReportPeriod::Today,
            &ProfitMetrics {
                total_revenue: dec!(125000),
                net_profit: dec!(31000.5),
                profit_margin: dec!(24.8),
                total_cost: dec!(93999.5),
            },
        )
    }

    #[test]
    fn test_summary_formats_metric_cards() {
        let s = summary();
        assert_eq!(s.period, "Today");
        assert_eq!(s.revenue, "Rs. 125,000.00");
        assert_eq!(s.profit, "Rs. 31,000.50");
        assert_eq!(s.margin, "24.8%");
    }

    #[test]
    fn test_whatsapp_url_is_encoded() {
        let url = summary().whatsapp_url();
        assert!(url.starts_with("https://wa.me/?text=%2AShopCloud%20Profit%20Analysis%2A%0A%0APeriod%3A%20Today"));
        assert!(!url.contains(' '));
        assert!(!url.contains('\n'));
    }

    #[test]
    fn test_mailto_url() {
        let s = summary();
        assert_eq!(s.email_subject(), "ShopCloud Profit Analysis - Today");
        let url = s.mailto_url();
        assert!(url.starts_with("mailto:?subject=ShopCloud%20Profit%20Analysis%20-%20Today&body=Dear%20Team%2C"));
        assert!(s.email_body().contains("Margin: 24.8%"));
        assert!(!s.email_body().contains("Cost:"));
    }

    #[test]
    fn test_product_share_url() {
        assert_eq!(
            product_share_url("Lay's Chips"),
            "https://wa.me/?text=Product%20Analysis%3A%20Lay%27s%20Chips%0A%0AGenerated%20by%20ShopCloud%20POS"
        );
    }
}
