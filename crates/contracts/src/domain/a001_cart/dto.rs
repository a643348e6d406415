use super::aggregate::Cart;
use crate::shared::api_error::ApiError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

/// Body of add-to-cart and update-cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartQuantityRequest {
    pub product_id: String,
    #[serde(serialize_with = "serialize_quantity")]
    pub quantity: Decimal,
}

/// Whole quantities go out as integers, weighed ones as floats
fn serialize_quantity<S: Serializer>(quantity: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    match quantity.fract().is_zero().then(|| quantity.to_i64()).flatten() {
        Some(whole) => serializer.serialize_i64(whole),
        None => serializer.serialize_f64(quantity.to_f64().unwrap_or_default()),
    }
}

/// Body of remove-from-cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveFromCartRequest {
    pub product_id: String,
}

/// A cart change the client asks the server to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartMutation {
    /// One more unit of a product
    Add { product_id: String },
    /// Absolute quantity, always > 0
    SetQuantity { product_id: String, quantity: Decimal },
    Remove { product_id: String },
    Clear,
}

impl CartMutation {
    pub fn add(product_id: impl Into<String>) -> Self {
        CartMutation::Add {
            product_id: product_id.into(),
        }
    }

    /// Quantity <= 0 becomes a removal.
    pub fn set_quantity(product_id: impl Into<String>, quantity: Decimal) -> Self {
        let product_id = product_id.into();
        if quantity <= Decimal::ZERO {
            CartMutation::Remove { product_id }
        } else {
            CartMutation::SetQuantity {
                product_id,
                quantity,
            }
        }
    }

    pub fn remove(product_id: impl Into<String>) -> Self {
        CartMutation::Remove {
            product_id: product_id.into(),
        }
    }

    /// Path of the billing endpoint handling this mutation
    pub fn endpoint(&self) -> &'static str {
        match self {
            CartMutation::Add { .. } => "/billing/add-to-cart/",
            CartMutation::SetQuantity { .. } => "/billing/update-cart/",
            CartMutation::Remove { .. } => "/billing/remove-from-cart/",
            CartMutation::Clear => "/billing/clear-cart/",
        }
    }

    /// JSON body; `None` for clear-cart, which is posted without a body.
    pub fn body(&self) -> Option<serde_json::Value> {
        let value = match self {
            CartMutation::Add { product_id } => serde_json::to_value(CartQuantityRequest {
                product_id: product_id.clone(),
                quantity: Decimal::ONE,
            }),
            CartMutation::SetQuantity {
                product_id,
                quantity,
            } => serde_json::to_value(CartQuantityRequest {
                product_id: product_id.clone(),
                quantity: *quantity,
            }),
            CartMutation::Remove { product_id } => serde_json::to_value(RemoveFromCartRequest {
                product_id: product_id.clone(),
            }),
            CartMutation::Clear => return None,
        };
        value.ok()
    }

    pub fn product_id(&self) -> Option<&str> {
        match self {
            CartMutation::Add { product_id }
            | CartMutation::SetQuantity { product_id, .. }
            | CartMutation::Remove { product_id } => Some(product_id),
            CartMutation::Clear => None,
        }
    }
}

/// Reply of every cart endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartMutationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub cart: Option<Cart>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CartMutationResponse {
    /// The authoritative cart, or the server's reason for refusing.
    ///
    /// clear-cart answers `{success: true}` without a cart, which means empty.
    pub fn into_cart(self) -> Result<Cart, ApiError> {
        if !self.success {
            return Err(ApiError::rejected(self.error));
        }
        Ok(self.cart.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_set_quantity_zero_is_remove() {
        for qty in [dec!(0), dec!(-1), dec!(-20), dec!(-0.5)] {
            assert_eq!(
                CartMutation::set_quantity("42", qty),
                CartMutation::remove("42")
            );
        }
        let m = CartMutation::set_quantity("42", Decimal::ZERO);
        assert_eq!(m.endpoint(), "/billing/remove-from-cart/");
        assert_eq!(m.body(), Some(json!({"product_id": "42"})));
    }

    #[test]
    fn test_request_bodies() {
        assert_eq!(
            CartMutation::add("7").body(),
            Some(json!({"product_id": "7", "quantity": 1}))
        );
        assert_eq!(
            CartMutation::set_quantity("7", dec!(3)).body(),
            Some(json!({"product_id": "7", "quantity": 3}))
        );
        assert_eq!(
            CartMutation::set_quantity("9", dec!(1.5)).body(),
            Some(json!({"product_id": "9", "quantity": 1.5}))
        );
        assert_eq!(CartMutation::Clear.body(), None);
        assert_eq!(CartMutation::Clear.product_id(), None);
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(CartMutation::add("1").endpoint(), "/billing/add-to-cart/");
        assert_eq!(
            CartMutation::set_quantity("1", dec!(2)).endpoint(),
            "/billing/update-cart/"
        );
        assert_eq!(CartMutation::Clear.endpoint(), "/billing/clear-cart/");
    }

    #[test]
    fn test_response_into_cart() {
        let ok: CartMutationResponse = serde_json::from_value(json!({
            "success": true,
            "cart": {"5": {"name": "Pen", "price": 10, "quantity": 2}}
        }))
        .unwrap();
        let cart = ok.into_cart().unwrap();
        assert_eq!(cart.get("5").map(|l| l.quantity), Some(dec!(2)));

        // update-cart stores kg/liter quantities as floats
        let weighed: CartMutationResponse = serde_json::from_value(json!({
            "success": true,
            "cart": {
                "3": {"name": "Bread", "price": 60, "quantity": 2, "unit": "pcs"},
                "9": {"name": "Sugar", "price": 120.0, "quantity": 2.0, "unit": "kg"}
            }
        }))
        .unwrap();
        let cart = weighed.into_cart().unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get("9").map(|l| l.quantity), Some(dec!(2)));
        assert_eq!(cart.subtotal(), dec!(360));

        let cleared: CartMutationResponse =
            serde_json::from_value(json!({"success": true})).unwrap();
        assert!(cleared.into_cart().unwrap().is_empty());

        let failed: CartMutationResponse =
            serde_json::from_value(json!({"success": false, "error": "Product not found"}))
                .unwrap();
        assert_eq!(
            failed.into_cart(),
            Err(ApiError::Rejected("Product not found".into()))
        );
    }
}
