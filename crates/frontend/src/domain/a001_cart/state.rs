use contracts::domain::a001_cart::Cart;
use contracts::domain::a002_bill::BillDraft;
use contracts::domain::a003_product::{
    ProductCategoryFilter, ProductCategoryOption, ProductSearchItem,
};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct PosState {
    /// Last cart confirmed by the server
    pub cart: Cart,
    pub products: Vec<ProductSearchItem>,
    /// Category bar, fixed at page load; searches never change it
    pub categories: Vec<ProductCategoryOption>,
    pub category: ProductCategoryFilter,
    pub draft: BillDraft,
    pub is_searching: bool,
    pub is_submitting: bool,
}

pub fn create_state() -> RwSignal<PosState> {
    RwSignal::new(PosState::default())
}
