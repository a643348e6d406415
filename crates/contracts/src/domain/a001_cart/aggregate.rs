use crate::shared::api_error::ApiError;
use rust_decimal::Decimal;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One product in the cart.
///
/// `quantity` is always > 0: a line whose quantity drops to zero is removed
/// from the cart instead of being stored. Lines sold by weight or volume
/// ("kg", "liter") carry fractional quantities.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: Decimal,
    /// Stock reported by the server when the line was last touched
    pub stock: Option<Decimal>,
    /// Unit of measure ("pcs", "kg", ...)
    pub unit: Option<String>,
}

impl CartLine {
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: Decimal,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            unit_price,
            quantity,
            stock: None,
            unit: None,
        }
    }

    /// unit price x quantity
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * self.quantity
    }
}

/// Totals block of the cart. The client applies no tax or discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

impl CartTotals {
    pub fn from_subtotal(subtotal: Decimal) -> Self {
        Self {
            subtotal,
            tax: Decimal::ZERO,
            discount: Decimal::ZERO,
            total: subtotal,
        }
    }
}

/// Client mirror of the server-side cart: product id -> line.
///
/// Keys are unique and lines keep the order in which the server listed them.
/// The client never edits a cart in place; it is replaced wholesale by the
/// cart returned from each successful mutation (see [`reconcile`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from lines; a repeated product id replaces the earlier
    /// line in place and lines with quantity <= 0 are dropped.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            cart.upsert(line);
        }
        cart
    }

    fn upsert(&mut self, line: CartLine) {
        if line.quantity <= Decimal::ZERO {
            self.lines.retain(|l| l.product_id != line.product_id);
            return;
        }
        match self
            .lines
            .iter()
            .position(|l| l.product_id == line.product_id)
        {
            Some(idx) => self.lines[idx] = line,
            None => self.lines.push(line),
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.get(product_id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all line subtotals
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from_subtotal(self.subtotal())
    }
}

/// Applies the outcome of a cart mutation: a server cart replaces the current
/// one unconditionally, a failure leaves it untouched and is handed back.
pub fn reconcile(current: &mut Cart, outcome: Result<Cart, ApiError>) -> Result<(), ApiError> {
    let server_cart = outcome?;
    *current = server_cart;
    Ok(())
}

/// Wire shape of a cart entry; the product id is the map key.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CartEntryDto {
    name: String,
    price: Decimal,
    /// `2`, `2.0` and `1.5` are all accepted
    quantity: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stock: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
}

impl Serialize for Cart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.lines.len()))?;
        for line in &self.lines {
            let entry = CartEntryDto {
                name: line.name.clone(),
                price: line.unit_price,
                quantity: line.quantity,
                stock: line.stock,
                unit: line.unit.clone(),
            };
            map.serialize_entry(&line.product_id, &entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CartVisitor;

        impl<'de> Visitor<'de> for CartVisitor {
            type Value = Cart;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of product id to cart entry")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Cart, A::Error> {
                let mut lines = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((product_id, entry)) = access.next_entry::<String, CartEntryDto>()? {
                    lines.push(CartLine {
                        product_id,
                        name: entry.name,
                        unit_price: entry.price,
                        quantity: entry.quantity,
                        stock: entry.stock,
                        unit: entry.unit,
                    });
                }
                Ok(Cart::from_lines(lines))
            }
        }

        deserializer.deserialize_map(CartVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_cart() -> Cart {
        Cart::from_lines(vec![
            CartLine::new("A", "Rice 5kg", dec!(100), dec!(2)),
            CartLine::new("B", "Cooking oil", dec!(250), dec!(1)),
        ])
    }

    #[test]
    fn test_totals_match_sum_of_line_subtotals() {
        let cart = sample_cart();
        let totals = cart.totals();
        assert_eq!(totals.subtotal, dec!(450));
        assert_eq!(totals.total, dec!(450));
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.discount, Decimal::ZERO);
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let totals = Cart::new().totals();
        assert_eq!(totals, CartTotals::from_subtotal(Decimal::ZERO));
    }

    #[test]
    fn test_from_lines_drops_non_positive_quantities() {
        let cart = Cart::from_lines(vec![
            CartLine::new("A", "Tea", dec!(10), dec!(0)),
            CartLine::new("B", "Milk", dec!(5), dec!(-1)),
            CartLine::new("C", "Sugar", dec!(3), dec!(1)),
        ]);
        assert_eq!(cart.len(), 1);
        assert!(cart.contains("C"));
        assert!(!cart.contains("A"));
    }

    #[test]
    fn test_from_lines_keeps_keys_unique() {
        let cart = Cart::from_lines(vec![
            CartLine::new("A", "Tea", dec!(10), dec!(1)),
            CartLine::new("B", "Milk", dec!(5), dec!(1)),
            CartLine::new("A", "Tea", dec!(10), dec!(4)),
        ]);
        let ids: Vec<_> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
        assert_eq!(cart.get("A").map(|l| l.quantity), Some(dec!(4)));
    }

    #[test]
    fn test_deserialize_preserves_server_order() {
        let json = r#"{
            "17": {"name": "Soap", "price": 45.5, "quantity": 2, "stock": 30, "unit": "pcs"},
            "3": {"name": "Bread", "price": 60, "quantity": 1}
        }"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        let ids: Vec<_> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, vec!["17", "3"]);
        let soap = cart.get("17").unwrap();
        assert_eq!(soap.unit_price, dec!(45.5));
        assert_eq!(soap.unit.as_deref(), Some("pcs"));
        assert_eq!(cart.subtotal(), dec!(151));
    }

    #[test]
    fn test_deserialize_weighed_quantities() {
        let json = r#"{
            "3": {"name": "Bread", "price": 60, "quantity": 2},
            "9": {"name": "Sugar", "price": 120.0, "quantity": 2.0, "unit": "kg"},
            "11": {"name": "Milk", "price": 80, "quantity": 1.5, "unit": "liter"}
        }"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.len(), 3);
        assert_eq!(cart.get("9").map(|l| l.quantity), Some(dec!(2)));
        assert_eq!(cart.get("11").map(|l| l.quantity), Some(dec!(1.5)));
        assert_eq!(cart.subtotal(), dec!(480));
    }

    #[test]
    fn test_serialize_round_trips_wire_shape() {
        let cart = sample_cart();
        let value = serde_json::to_value(&cart).unwrap();
        assert_eq!(value["A"]["quantity"].as_f64(), Some(2.0));
        assert_eq!(value["B"]["name"], "Cooking oil");
        assert!(value["A"].get("stock").is_none());
    }

    #[test]
    fn test_reconcile_replaces_on_success() {
        let mut cart = sample_cart();
        let server = Cart::from_lines(vec![CartLine::new("B", "Cooking oil", dec!(250), dec!(3))]);
        reconcile(&mut cart, Ok(server.clone())).unwrap();
        assert_eq!(cart, server);
    }

    #[test]
    fn test_reconcile_keeps_state_on_failure() {
        let mut cart = sample_cart();
        let err = reconcile(&mut cart, Err(ApiError::Rejected("Insufficient stock".into())));
        assert_eq!(err, Err(ApiError::Rejected("Insufficient stock".into())));
        assert_eq!(cart, sample_cart());
    }
}
