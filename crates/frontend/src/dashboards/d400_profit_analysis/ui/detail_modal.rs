use crate::dashboards::d400_profit_analysis::AnalysisTableController;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::dashboards::d400_profit_analysis::TableRecord;
use contracts::shared::number_format::{format_money, format_number_with_decimals, format_percent};
use leptos::prelude::*;
use rust_decimal::Decimal;

#[component]
pub fn DetailModal(controller: AnalysisTableController) -> impl IntoView {
    let state = controller.state();

    move || {
        state
            .with(|s| s.selected.clone())
            .map(|record| view! { <DetailContent controller=controller record=record /> })
    }
}

#[component]
fn DetailContent(controller: AnalysisTableController, record: TableRecord) -> impl IntoView {
    let for_share = record.clone();

    view! {
        <ModalFrame
            on_close=Callback::new(move |_| controller.close_details())
            title=record.name.clone()
            modal_class="product-detail"
        >
            <dl class="product-detail__grid">
                <dt>"Category"</dt>
                <dd>{record.category.display_name()}</dd>
                <dt>"Quantity Sold"</dt>
                <dd>{format_number_with_decimals(Decimal::from(record.quantity_sold), 0)}</dd>
                <dt>"Revenue"</dt>
                <dd>{format_money(record.revenue)}</dd>
                <dt>"Cost"</dt>
                <dd>{format_money(record.cost)}</dd>
                <dt>"Profit"</dt>
                <dd>{format_money(record.profit)}</dd>
                <dt>"Margin"</dt>
                <dd>{format_percent(record.margin_percent, 1)}</dd>
            </dl>
            <div class="product-detail__actions">
                <button class="button button--primary" on:click=move |_| controller.share_product(&for_share)>
                    {icon("share")}" Share on WhatsApp"
                </button>
            </div>
        </ModalFrame>
    }
}
