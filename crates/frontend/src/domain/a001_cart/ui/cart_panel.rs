use crate::domain::a001_cart::CartController;
use crate::shared::icons::icon;
use contracts::domain::a001_cart::{CartLineView, CartView};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CartPanel(controller: CartController) -> impl IntoView {
    let state = controller.state();
    let cart_view = Memo::new(move |_| state.with(|s| CartView::from_cart(&s.cart)));

    view! {
        <div class="cart-panel">
            <div class="cart-panel__header">
                <h2 class="cart-panel__title">{icon("cart")}" Cart"</h2>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| controller.clear()
                    disabled=Signal::derive(move || cart_view.with(|v| v.is_empty))
                >
                    "Clear"
                </Button>
            </div>

            <div class="cart-panel__items">
                {move || {
                    let view_model = cart_view.get();
                    if view_model.is_empty {
                        view! { <div class="cart-panel__empty">"Cart is empty"</div> }.into_any()
                    } else {
                        view_model
                            .lines
                            .into_iter()
                            .map(|line| view! { <CartLineRow controller=controller line=line /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>

            <div class="cart-panel__totals">
                <div class="cart-panel__total-row">
                    <span>"Subtotal"</span>
                    <span>{move || cart_view.with(|v| v.subtotal.clone())}</span>
                </div>
                <div class="cart-panel__total-row">
                    <span>"Tax"</span>
                    <span>{move || cart_view.with(|v| v.tax.clone())}</span>
                </div>
                <div class="cart-panel__total-row">
                    <span>"Discount"</span>
                    <span>{move || cart_view.with(|v| v.discount.clone())}</span>
                </div>
                <div class="cart-panel__total-row cart-panel__total-row--grand">
                    <span>"Total"</span>
                    <span>{move || cart_view.with(|v| v.total.clone())}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CartLineRow(controller: CartController, line: CartLineView) -> impl IntoView {
    let CartLineView {
        product_id,
        name,
        quantity,
        decrement_to,
        increment_to,
        unit_price,
        subtotal,
    } = line;
    let id_dec = product_id.clone();
    let id_inc = product_id.clone();

    view! {
        <div class="cart-item">
            <div class="cart-item__info">
                <div class="cart-item__name">{name}</div>
                <div class="cart-item__price">{unit_price}</div>
            </div>
            <div class="cart-item__qty">
                <button
                    class="cart-item__qty-btn"
                    title="Decrease"
                    on:click=move |_| controller.set_quantity(id_dec.clone(), decrement_to)
                >
                    {icon("minus")}
                </button>
                <span class="cart-item__qty-value">{quantity}</span>
                <button
                    class="cart-item__qty-btn"
                    title="Increase"
                    on:click=move |_| controller.set_quantity(id_inc.clone(), increment_to)
                >
                    {icon("plus")}
                </button>
            </div>
            <div class="cart-item__subtotal">{subtotal}</div>
            <button
                class="cart-item__remove"
                title="Remove"
                on:click=move |_| controller.remove(product_id.clone())
            >
                {icon("trash")}
            </button>
        </div>
    }
}
