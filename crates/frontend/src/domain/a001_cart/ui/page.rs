use super::cart_panel::CartPanel;
use super::customer_form::CustomerForm;
use crate::domain::a001_cart::state::create_state;
use crate::domain::a001_cart::CartController;
use crate::domain::a003_product::api::initial_catalog;
use crate::domain::a003_product::ui::ProductGrid;
use crate::shared::list_utils::SearchInput;
use leptos::prelude::*;

/// Point of sale: product search on the left, cart and customer on the right
#[component]
pub fn PosPage() -> impl IntoView {
    let state = create_state();
    let catalog = initial_catalog();
    state.update(|s| {
        s.categories = catalog.category_options();
        s.products = catalog.products;
    });
    let controller = CartController::new(state);

    view! {
        <div id="a001_cart--pos" data-page-category="custom" class="page page--custom pos">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Point of Sale"</h1>
                </div>
            </div>

            <div class="page__content pos__layout">
                <section class="pos__products">
                    <SearchInput
                        placeholder="Search by name or barcode (min. 2 characters)"
                        on_change=Callback::new(move |query: String| controller.search(query))
                    />
                    <ProductGrid controller=controller />
                </section>

                <aside class="pos__sidebar">
                    <CartPanel controller=controller />
                    <CustomerForm controller=controller />
                </aside>
            </div>
        </div>
    }
}
