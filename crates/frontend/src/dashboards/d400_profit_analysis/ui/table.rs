use crate::dashboards::d400_profit_analysis::dom_snapshot::TABLE_ID;
use crate::dashboards::d400_profit_analysis::AnalysisTableController;
use crate::shared::icons::icon;
use contracts::dashboards::d400_profit_analysis::{compute_stats, TableRecord};
use contracts::shared::number_format::{format_money, format_number_with_decimals, format_percent};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use rust_decimal::Decimal;

/// Width of the performance bar: the server's value, else the margin, in 0..=100
fn performance_width(record: &TableRecord) -> Decimal {
    record
        .performance
        .unwrap_or(record.margin_percent)
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
        .round_dp(0)
}

fn sign_class(value: Decimal) -> &'static str {
    if value < Decimal::ZERO {
        "text-negative"
    } else {
        "text-positive"
    }
}

#[component]
pub fn ProfitTable(controller: AnalysisTableController) -> impl IntoView {
    let state = controller.state();
    let rows = Memo::new(move |_| state.with(|s| s.visible_rows()));
    let stats = Memo::new(move |_| rows.with(|r| compute_stats(r)));

    view! {
        <div class="table-wrapper">
            <table id=TABLE_ID class="table profit-table">
                <thead>
                    <tr>
                        <th>"Product"</th>
                        <th class="text-right">"Qty Sold"</th>
                        <th class="text-right">"Revenue"</th>
                        <th class="text-right">"Cost"</th>
                        <th class="text-right">"Profit"</th>
                        <th class="text-right">"Margin"</th>
                        <th>"Performance"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let records = rows.get();
                        if records.is_empty() {
                            return view! {
                                <tr class="profit-table__empty">
                                    <td colspan="8">"No products match the current filters"</td>
                                </tr>
                            }
                            .into_any();
                        }
                        records
                            .into_iter()
                            .map(|record| view! { <ProfitRow controller=controller record=record /> })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>

        <div class="table-stats">
            <div class="table-stats__item">
                <span class="table-stats__label">"Products"</span>
                <span class="table-stats__value">{move || stats.get().count}</span>
            </div>
            <div class="table-stats__item">
                <span class="table-stats__label">"Revenue"</span>
                <span class="table-stats__value">{move || format_money(stats.get().total_revenue)}</span>
            </div>
            <div class="table-stats__item">
                <span class="table-stats__label">"Profit"</span>
                <span class="table-stats__value">{move || format_money(stats.get().total_profit)}</span>
            </div>
            <div class="table-stats__item">
                <span class="table-stats__label">"Avg. Margin"</span>
                <span class="table-stats__value">{move || format_percent(stats.get().avg_margin_percent, 1)}</span>
            </div>
        </div>
    }
}

#[component]
fn ProfitRow(controller: AnalysisTableController, record: TableRecord) -> impl IntoView {
    let category = record.category.code();
    let for_details = record.clone();
    let open_details = move |_: MouseEvent| controller.show_details(for_details.clone());

    // Rows captured from the server page are shown exactly as rendered there
    if let Some(markup) = record.markup.clone() {
        return view! {
            <tr class="product-row" data-category=category inner_html=markup on:click=open_details></tr>
        }
        .into_any();
    }

    let for_share = record.clone();
    let share = move |ev: MouseEvent| {
        ev.stop_propagation();
        controller.share_product(&for_share);
    };
    let bar_style = format!("width: {}%;", performance_width(&record));

    view! {
        <tr class="product-row" data-category=category on:click=open_details>
            <td>{record.name.clone()}</td>
            <td class="text-right">
                {format_number_with_decimals(Decimal::from(record.quantity_sold), 0)}
            </td>
            <td class="text-right">{format_money(record.revenue)}</td>
            <td class="text-right">{format_money(record.cost)}</td>
            <td class=format!("text-right {}", sign_class(record.profit))>{format_money(record.profit)}</td>
            <td class=format!("text-right {}", sign_class(record.margin_percent))>
                {format_percent(record.margin_percent, 1)}
            </td>
            <td>
                <div class="performance-bar">
                    <div class="performance-bar__fill" style=bar_style></div>
                </div>
            </td>
            <td>
                <button class="button button--ghost" title="Share" on:click=share>
                    {icon("share")}
                </button>
            </td>
        </tr>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d400_profit_analysis::ProductCategory;
    use rust_decimal_macros::dec;

    #[test]
    fn test_performance_width_falls_back_to_margin() {
        let mut record = TableRecord::new("Tea", 3, dec!(300), dec!(200), ProductCategory::Food);
        assert_eq!(performance_width(&record), dec!(33));

        record.performance = Some(dec!(140));
        assert_eq!(performance_width(&record), dec!(100));

        let loss = TableRecord::new("Stale bread", 1, dec!(50), dec!(80), ProductCategory::Food);
        assert_eq!(performance_width(&loss), dec!(0));
    }
}
