use crate::domain::a001_cart::Cart;
use crate::shared::api_error::ApiError;
use crate::shared::serde_ids::deserialize_opt_id;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shown instead of sending a bill for an empty cart
pub const EMPTY_CART_MESSAGE: &str = "Please add items to cart first!";

/// Payment methods accepted by the billing endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    #[default]
    Cash,
    Card,
    Online,
    /// Store credit
    Udhaar,
}

impl PaymentType {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentType::Cash => "cash",
            PaymentType::Card => "card",
            PaymentType::Online => "online",
            PaymentType::Udhaar => "udhaar",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentType::Cash => "Cash",
            PaymentType::Card => "Card",
            PaymentType::Online => "Online",
            PaymentType::Udhaar => "Udhaar",
        }
    }

    pub fn all() -> Vec<PaymentType> {
        vec![
            PaymentType::Cash,
            PaymentType::Card,
            PaymentType::Online,
            PaymentType::Udhaar,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "cash" => Some(PaymentType::Cash),
            "card" => Some(PaymentType::Card),
            "online" => Some(PaymentType::Online),
            "udhaar" => Some(PaymentType::Udhaar),
            _ => None,
        }
    }
}

/// Body of create-bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBillRequest {
    pub customer_name: String,
    pub customer_phone: String,
    pub payment_type: PaymentType,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

/// Customer details typed at the counter, before they are bound to a cart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillDraft {
    pub customer_name: String,
    pub customer_phone: String,
    pub payment_type: PaymentType,
}

impl BillDraft {
    /// Builds the create-bill body, with the subtotal computed exactly as
    /// the cart panel shows it. An empty cart is refused.
    pub fn to_request(&self, cart: &Cart) -> Result<CreateBillRequest, ApiError> {
        if cart.is_empty() {
            return Err(ApiError::Validation(EMPTY_CART_MESSAGE.to_string()));
        }
        let totals = cart.totals();
        Ok(CreateBillRequest {
            customer_name: self.customer_name.clone(),
            customer_phone: self.customer_phone.clone(),
            payment_type: self.payment_type,
            subtotal: totals.subtotal,
            tax: totals.tax,
            discount: totals.discount,
            total: totals.total,
        })
    }
}

/// Reply of create-bill
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBillResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub bill_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CreateBillResponse {
    pub fn into_bill_id(self) -> Result<String, ApiError> {
        match (self.success, self.bill_id) {
            (true, Some(id)) => Ok(id),
            (true, None) => Err(ApiError::Transport(
                "bill created without an identifier".to_string(),
            )),
            (false, _) => Err(ApiError::rejected(self.error)),
        }
    }
}

/// Page showing a created bill
pub fn bill_detail_path(bill_id: &str) -> String {
    format!("/billing/bill/{}/", bill_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_cart::CartLine;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn draft() -> BillDraft {
        BillDraft {
            customer_name: "Asha".into(),
            customer_phone: "9800000000".into(),
            payment_type: PaymentType::Card,
        }
    }

    #[test]
    fn test_empty_cart_is_refused() {
        let result = draft().to_request(&Cart::new());
        assert_eq!(
            result,
            Err(ApiError::Validation(EMPTY_CART_MESSAGE.to_string()))
        );
    }

    #[test]
    fn test_request_carries_cart_subtotal() {
        let cart = Cart::from_lines(vec![
            CartLine::new("A", "A", dec!(100), dec!(2)),
            CartLine::new("B", "B", dec!(250), dec!(1)),
        ]);
        let request = draft().to_request(&cart).unwrap();
        assert_eq!(request.subtotal, dec!(450));
        assert_eq!(request.total, dec!(450));
        assert_eq!(request.tax, dec!(0));
        assert_eq!(request.discount, dec!(0));

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["payment_type"], "card");
        assert_eq!(body["customer_name"], "Asha");
        assert_eq!(body["subtotal"], json!(450.0));
    }

    #[test]
    fn test_response_into_bill_id() {
        let ok: CreateBillResponse =
            serde_json::from_value(json!({"success": true, "bill_id": 57})).unwrap();
        assert_eq!(ok.into_bill_id(), Ok("57".to_string()));

        let rejected: CreateBillResponse =
            serde_json::from_value(json!({"success": false, "error": "Cart is empty"})).unwrap();
        assert_eq!(
            rejected.into_bill_id(),
            Err(ApiError::Rejected("Cart is empty".into()))
        );

        let missing: CreateBillResponse =
            serde_json::from_value(json!({"success": true})).unwrap();
        assert!(matches!(missing.into_bill_id(), Err(ApiError::Transport(_))));
    }

    #[test]
    fn test_payment_type_codes() {
        for p in PaymentType::all() {
            assert_eq!(PaymentType::from_code(p.code()), Some(p));
        }
        assert_eq!(PaymentType::from_code("cheque"), None);
        assert_eq!(bill_detail_path("57"), "/billing/bill/57/");
    }
}
