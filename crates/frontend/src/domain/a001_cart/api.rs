use crate::shared::api_utils::{post_empty, post_json};
use contracts::domain::a001_cart::{Cart, CartMutation, CartMutationResponse};
use contracts::shared::api_error::ApiError;

/// Sends one cart mutation and returns the cart the server now holds
pub async fn send_mutation(mutation: &CartMutation) -> Result<Cart, ApiError> {
    let response: CartMutationResponse = match mutation.body() {
        Some(body) => post_json(mutation.endpoint(), &body).await?,
        None => post_empty(mutation.endpoint()).await?,
    };
    response.into_cart()
}
