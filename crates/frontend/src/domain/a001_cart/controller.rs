//! Cart round trips of the POS page.
//!
//! The cart is never edited locally. Every operation asks the server and,
//! on success, replaces the whole cart with the one the server returns.
//! Mutations and bill generation go through one FIFO queue drained by a
//! single task, so each runs against the cart left by the ones before it.

use super::api;
use super::state::PosState;
use crate::domain::a002_bill::api as bill_api;
use crate::domain::a003_product::api as product_api;
use crate::shared::browser::{alert, navigate_to};
use contracts::domain::a001_cart::{reconcile, CartJob, CartJobQueue, CartMutation};
use contracts::domain::a002_bill::bill_detail_path;
use contracts::domain::a003_product::{ProductCategoryFilter, ProductSearchQuery};
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rust_decimal::Decimal;

#[derive(Clone, Copy)]
pub struct CartController {
    state: RwSignal<PosState>,
    jobs: StoredValue<CartJobQueue>,
}

impl CartController {
    pub fn new(state: RwSignal<PosState>) -> Self {
        Self {
            state,
            jobs: StoredValue::new(CartJobQueue::new()),
        }
    }

    pub fn state(&self) -> RwSignal<PosState> {
        self.state
    }

    pub fn add(&self, product_id: String) {
        self.enqueue(CartJob::Mutate(CartMutation::add(product_id)));
    }

    /// Quantities of zero or less remove the line
    pub fn set_quantity(&self, product_id: String, quantity: Decimal) {
        self.enqueue(CartJob::Mutate(CartMutation::set_quantity(product_id, quantity)));
    }

    pub fn remove(&self, product_id: String) {
        self.enqueue(CartJob::Mutate(CartMutation::remove(product_id)));
    }

    pub fn clear(&self) {
        self.enqueue(CartJob::Mutate(CartMutation::Clear));
    }

    /// Posts the bill for the cart as it stands after earlier mutations
    /// settle. An empty cart is refused without a request.
    pub fn request_bill_generation(&self) {
        self.enqueue(CartJob::GenerateBill);
    }

    fn enqueue(&self, job: CartJob) {
        let start_runner = self.jobs.try_update_value(|q| q.push(job)).unwrap_or(false);
        if !start_runner {
            return;
        }
        let state = self.state;
        let jobs = self.jobs;
        spawn_local(async move {
            while let Some(job) = jobs.try_update_value(|q| q.next()).flatten() {
                match job {
                    CartJob::Mutate(mutation) => apply_mutation(state, mutation).await,
                    CartJob::GenerateBill => generate_bill(state).await,
                }
            }
        });
    }

    /// Replaces the product grid. Short queries issue no request.
    pub fn search(&self, query: String) {
        let Some(query) = ProductSearchQuery::new(query.trim()) else {
            return;
        };
        let state = self.state;
        state.update(|s| s.is_searching = true);
        spawn_local(async move {
            let outcome = product_api::search_products(&query).await;
            state.try_update(|s| {
                s.is_searching = false;
                match outcome {
                    // Results carry no category, so a category filter would hide them all
                    Ok(products) => {
                        s.products = products;
                        s.category = ProductCategoryFilter::All;
                    }
                    Err(e) => log::error!("Product search '{}' failed: {}", query.q, e),
                }
            });
        });
    }
}

async fn apply_mutation(state: RwSignal<PosState>, mutation: CartMutation) {
    log::debug!("cart mutation: {:?}", mutation);

    let outcome = api::send_mutation(&mutation).await;
    let Some(mut cart) = state.try_with_untracked(|s| s.cart.clone()) else {
        return;
    };
    match reconcile(&mut cart, outcome) {
        Ok(()) => {
            state.try_update(|s| s.cart = cart);
        }
        Err(e) => report(&e, "Cart update failed"),
    }
}

async fn generate_bill(state: RwSignal<PosState>) {
    let Some(request) = state.try_with_untracked(|s| s.draft.to_request(&s.cart)) else {
        return;
    };
    let request = match request {
        Ok(request) => request,
        Err(e) => {
            alert(&e.user_message());
            return;
        }
    };

    state.try_update(|s| s.is_submitting = true);
    let outcome = bill_api::create_bill(&request).await;
    state.try_update(|s| s.is_submitting = false);

    match outcome {
        Ok(bill_id) => {
            log::info!("bill {} created", bill_id);
            navigate_to(&bill_detail_path(&bill_id));
        }
        Err(ApiError::Rejected(message)) => alert(&format!("Error: {}", message)),
        Err(e) => report(&e, "Bill creation failed"),
    }
}

fn report(error: &ApiError, context: &str) {
    log::error!("{}: {}", context, error);
    alert(&error.user_message());
}
