use crate::domain::a001_cart::CartController;
use contracts::domain::a003_product::{ProductCategoryFilter, ProductSearchItem};
use contracts::shared::number_format::format_money_plain;
use leptos::prelude::*;

#[component]
pub fn ProductGrid(controller: CartController) -> impl IntoView {
    let state = controller.state();

    let select_category = move |filter: ProductCategoryFilter| {
        state.update(|s| s.category = filter);
    };

    let button_class = move |filter: ProductCategoryFilter| {
        move || {
            if state.with(|s| s.category == filter) {
                "category-btn category-btn--active"
            } else {
                "category-btn"
            }
        }
    };

    view! {
        <div class="product-grid">
            <div class="product-grid__categories">
                <button
                    class=button_class(ProductCategoryFilter::All)
                    on:click=move |_| select_category(ProductCategoryFilter::All)
                >
                    "All"
                </button>
                {move || {
                    state.with(|s| s.categories.clone())
                        .into_iter()
                        .map(|option| {
                            let filter = ProductCategoryFilter::Category(option.id);
                            let on_click_filter = filter.clone();
                            view! {
                                <button
                                    class=button_class(filter)
                                    on:click=move |_| select_category(on_click_filter.clone())
                                >
                                    {option.name}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>

            {move || {
                if state.with(|s| s.is_searching) {
                    view! { <div class="product-grid__loading">"Searching..."</div> }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            <div class="product-grid__items">
                {move || {
                    let visible: Vec<ProductSearchItem> = state.with(|s| {
                        s.category.apply(&s.products).into_iter().cloned().collect()
                    });
                    if visible.is_empty() {
                        return view! {
                            <div class="product-grid__empty">"No products found"</div>
                        }
                        .into_any();
                    }
                    visible
                        .into_iter()
                        .map(|product| view! { <ProductCard controller=controller product=product /> })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </div>
    }
}

#[component]
fn ProductCard(controller: CartController, product: ProductSearchItem) -> impl IntoView {
    let id = product.id.clone();
    let stock = product.stock.map(|s| {
        let unit = product.unit.clone().unwrap_or_default();
        format!("Stock: {} {}", s.normalize(), unit).trim_end().to_string()
    });
    let image = product.image.clone();

    view! {
        <div class="product-card" on:click=move |_| controller.add(id.clone())>
            {image.map(|src| view! { <img class="product-card__image" src=src alt="" /> })}
            <div class="product-card__name">{product.name.clone()}</div>
            <div class="product-card__price">{format_money_plain(product.price)}</div>
            {stock.map(|s| view! { <div class="product-card__stock">{s}</div> })}
        </div>
    }
}
