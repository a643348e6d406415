use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Reporting window understood by the profit analysis endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Today,
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl ReportPeriod {
    pub fn code(&self) -> &'static str {
        match self {
            ReportPeriod::Today => "today",
            ReportPeriod::Week => "week",
            ReportPeriod::Month => "month",
            ReportPeriod::Quarter => "quarter",
            ReportPeriod::Year => "year",
        }
    }

    /// Capitalised code, as used in shared summaries ("Today", "Month")
    pub fn title(&self) -> String {
        let code = self.code();
        let mut chars = code.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportPeriod::Today => "Today",
            ReportPeriod::Week => "This Week",
            ReportPeriod::Month => "This Month",
            ReportPeriod::Quarter => "This Quarter",
            ReportPeriod::Year => "This Year",
        }
    }

    pub fn all() -> Vec<ReportPeriod> {
        vec![
            ReportPeriod::Today,
            ReportPeriod::Week,
            ReportPeriod::Month,
            ReportPeriod::Quarter,
            ReportPeriod::Year,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "today" => Some(ReportPeriod::Today),
            "week" => Some(ReportPeriod::Week),
            "month" => Some(ReportPeriod::Month),
            "quarter" => Some(ReportPeriod::Quarter),
            "year" => Some(ReportPeriod::Year),
            _ => None,
        }
    }

    /// Only the current day's figures move fast enough to poll.
    pub fn auto_refreshes(&self) -> bool {
        matches!(self, ReportPeriod::Today)
    }
}

/// Query string of the period request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodQuery {
    pub period: ReportPeriod,
}

/// Headline figures of a period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfitMetrics {
    #[serde(default)]
    pub total_revenue: Decimal,
    #[serde(default)]
    pub net_profit: Decimal,
    /// Percent, e.g. 23.5
    #[serde(default)]
    pub profit_margin: Decimal,
    #[serde(default)]
    pub total_cost: Decimal,
}

/// Line chart: profit (and optionally revenue) per label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfitTrendSeries {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub profits: Vec<Decimal>,
    #[serde(default)]
    pub revenue: Vec<Decimal>,
}

/// Bar chart: revenue against cost per label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueCostSeries {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub revenue: Vec<Decimal>,
    #[serde(default)]
    pub cost: Vec<Decimal>,
}

/// Doughnut per category: profit against cost
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryProfit {
    pub name: String,
    #[serde(default)]
    pub profit: Decimal,
    #[serde(default)]
    pub cost: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitCharts {
    #[serde(default)]
    pub profit_trend: ProfitTrendSeries,
    #[serde(default)]
    pub revenue_cost: RevenueCostSeries,
    #[serde(default)]
    pub categories: Vec<CategoryProfit>,
}

/// One row of the product profitability table as sent by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductProfitRow {
    pub name: String,
    #[serde(default)]
    pub quantity_sold: i64,
    #[serde(default)]
    pub revenue: Decimal,
    #[serde(default)]
    pub cost: Decimal,
    #[serde(default)]
    pub profit: Decimal,
    #[serde(default)]
    pub margin: Decimal,
    /// Width of the performance bar, 0..=100
    #[serde(default)]
    pub performance: Option<Decimal>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Reply of the period request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfitAnalysisResponse {
    #[serde(default)]
    pub metrics: ProfitMetrics,
    #[serde(default)]
    pub charts: ProfitCharts,
    #[serde(default)]
    pub products: Vec<ProductProfitRow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_decode_period_response() {
        let response: ProfitAnalysisResponse = serde_json::from_value(json!({
            "metrics": {"total_revenue": 125000, "net_profit": 31000.5, "profit_margin": 24.8, "total_cost": 93999.5},
            "charts": {
                "profitTrend": {"labels": ["Mon", "Tue"], "profits": [1200, 900]},
                "revenueCost": {"labels": ["Mon", "Tue"], "revenue": [5000, 4200], "cost": [3800, 3300]}
            },
            "products": [
                {"name": "Nike Air Max", "quantity_sold": 4, "revenue": 48000, "cost": 30000,
                 "profit": 18000, "margin": 37.5, "performance": 80}
            ]
        }))
        .unwrap();

        assert_eq!(response.metrics.net_profit, dec!(31000.5));
        assert_eq!(response.charts.profit_trend.labels, vec!["Mon", "Tue"]);
        assert!(response.charts.profit_trend.revenue.is_empty());
        assert_eq!(response.charts.revenue_cost.cost, vec![dec!(3800), dec!(3300)]);
        assert!(response.charts.categories.is_empty());
        assert_eq!(response.products[0].quantity_sold, 4);
        assert_eq!(response.products[0].category, None);
    }

    #[test]
    fn test_period_codes() {
        for p in ReportPeriod::all() {
            assert_eq!(ReportPeriod::from_code(p.code()), Some(p));
        }
        assert_eq!(ReportPeriod::Today.title(), "Today");
        assert_eq!(ReportPeriod::default(), ReportPeriod::Month);
        assert!(ReportPeriod::Today.auto_refreshes());
        assert!(!ReportPeriod::Week.auto_refreshes());
        assert_eq!(
            serde_json::to_value(PeriodQuery { period: ReportPeriod::Quarter }).unwrap(),
            json!({"period": "quarter"})
        );
    }
}
