//! Dataset arrays handed to the external chart objects.
//!
//! Only labels and data arrays are replaced; colours, options and dataset
//! labels stay as the chart was configured.

use super::dto::ProfitCharts;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

/// Chart id of the profit trend line chart
pub const PROFIT_TREND_CHART: &str = "profitTrendChart";
/// Chart id of the revenue/cost bar chart
pub const REVENUE_COST_CHART: &str = "revenueCostChart";

/// Chart id of the n-th category doughnut, counted from 1
pub fn category_chart_id(position: usize) -> String {
    format!("categoryChart{}", position)
}

/// New data for one chart. `datasets[i]` replaces `chart.data.datasets[i].data`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataUpdate {
    pub chart_id: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Vec<f64>>,
}

fn to_points(values: &[Decimal]) -> Vec<f64> {
    values.iter().map(|v| v.to_f64().unwrap_or(0.0)).collect()
}

/// Updates for every chart on the dashboard, in the order they are applied.
///
/// The trend chart's second dataset (revenue) is only sent when the server
/// provides it; each category gets a `[profit, cost]` doughnut.
pub fn chart_updates(charts: &ProfitCharts) -> Vec<ChartDataUpdate> {
    let trend = &charts.profit_trend;
    let mut trend_datasets = vec![to_points(&trend.profits)];
    if !trend.revenue.is_empty() {
        trend_datasets.push(to_points(&trend.revenue));
    }

    let mut updates = vec![
        ChartDataUpdate {
            chart_id: PROFIT_TREND_CHART.to_string(),
            labels: trend.labels.clone(),
            datasets: trend_datasets,
        },
        ChartDataUpdate {
            chart_id: REVENUE_COST_CHART.to_string(),
            labels: charts.revenue_cost.labels.clone(),
            datasets: vec![
                to_points(&charts.revenue_cost.revenue),
                to_points(&charts.revenue_cost.cost),
            ],
        },
    ];
    updates.extend(charts.categories.iter().enumerate().map(|(idx, category)| {
        ChartDataUpdate {
            chart_id: category_chart_id(idx + 1),
            labels: vec!["Profit".to_string(), "Cost".to_string()],
            datasets: vec![to_points(&[category.profit, category.cost])],
        }
    }));
    updates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_profit_analysis::dto::{
        CategoryProfit, ProfitTrendSeries, RevenueCostSeries,
    };
    use rust_decimal_macros::dec;

    #[test]
    fn test_chart_updates() {
        let charts = ProfitCharts {
            profit_trend: ProfitTrendSeries {
                labels: vec!["Oct 1".into(), "Oct 2".into()],
                profits: vec![dec!(1500.5), dec!(900)],
                revenue: vec![dec!(5000), dec!(4000)],
            },
            revenue_cost: RevenueCostSeries {
                labels: vec!["Oct 2".into()],
                revenue: vec![dec!(4000)],
                cost: vec![dec!(3100)],
            },
            categories: vec![],
        };
        let updates = chart_updates(&charts);
        assert_eq!(updates.len(), 2);

        assert_eq!(updates[0].chart_id, PROFIT_TREND_CHART);
        assert_eq!(updates[0].datasets, vec![vec![1500.5, 900.0], vec![5000.0, 4000.0]]);

        assert_eq!(updates[1].chart_id, REVENUE_COST_CHART);
        assert_eq!(updates[1].labels, vec!["Oct 2"]);
        assert_eq!(updates[1].datasets, vec![vec![4000.0], vec![3100.0]]);
    }

    #[test]
    fn test_category_doughnuts_follow_server_order() {
        let charts = ProfitCharts {
            profit_trend: ProfitTrendSeries {
                labels: vec!["Oct 1".into()],
                profits: vec![dec!(10)],
                revenue: vec![],
            },
            categories: vec![
                CategoryProfit {
                    name: "Electronics".into(),
                    profit: dec!(45000),
                    cost: dec!(85000),
                },
                CategoryProfit {
                    name: "Food".into(),
                    profit: dec!(-120.5),
                    cost: dec!(600),
                },
            ],
            ..Default::default()
        };
        let updates = chart_updates(&charts);
        assert_eq!(updates.len(), 4);
        // No revenue series: the trend chart keeps its second dataset untouched
        assert_eq!(updates[0].datasets, vec![vec![10.0]]);

        assert_eq!(updates[2].chart_id, "categoryChart1");
        assert_eq!(updates[2].labels, vec!["Profit", "Cost"]);
        assert_eq!(updates[2].datasets, vec![vec![45000.0, 85000.0]]);
        assert_eq!(updates[3].chart_id, "categoryChart2");
        assert_eq!(updates[3].datasets, vec![vec![-120.5, 600.0]]);
    }
}
