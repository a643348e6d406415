use super::aggregate::{Cart, CartLine};
use crate::shared::number_format::{format_fixed, format_money_plain};
use crate::shared::config::CURRENCY_LABEL;
use rust_decimal::Decimal;

/// Display data for one cart line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub product_id: String,
    pub name: String,
    /// Quantity as shown, without trailing zeros
    pub quantity: String,
    /// Quantity the decrement control requests (<= 0 means remove)
    pub decrement_to: Decimal,
    /// Quantity the increment control requests
    pub increment_to: Decimal,
    pub unit_price: String,
    pub subtotal: String,
}

/// Everything the cart panel shows, derived from the cart alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub subtotal: String,
    pub tax: String,
    pub discount: String,
    pub total: String,
    pub is_empty: bool,
}

impl CartView {
    pub fn from_cart(cart: &Cart) -> Self {
        let totals = cart.totals();
        Self {
            lines: cart.lines().iter().map(line_view).collect(),
            subtotal: format_money_plain(totals.subtotal),
            tax: format_money_plain(totals.tax),
            discount: format_money_plain(totals.discount),
            total: format_money_plain(totals.total),
            is_empty: cart.is_empty(),
        }
    }
}

fn line_view(line: &CartLine) -> CartLineView {
    CartLineView {
        product_id: line.product_id.clone(),
        name: line.name.clone(),
        quantity: line.quantity.normalize().to_string(),
        decrement_to: line.quantity - Decimal::ONE,
        increment_to: line.quantity + Decimal::ONE,
        // Unit price keeps the server's own precision
        unit_price: format!("{} {}", CURRENCY_LABEL, line.unit_price.normalize()),
        subtotal: format!("{} {}", CURRENCY_LABEL, format_fixed(line.subtotal(), 2)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_cart::CartLine;
    use rust_decimal_macros::dec;

    #[test]
    fn test_two_line_scenario() {
        let cart = Cart::from_lines(vec![
            CartLine::new("A", "Product A", dec!(100), dec!(2)),
            CartLine::new("B", "Product B", dec!(250), dec!(1)),
        ]);
        let view = CartView::from_cart(&cart);

        assert_eq!(view.subtotal, "Rs. 450.00");
        assert_eq!(view.total, "Rs. 450.00");
        assert_eq!(view.tax, "Rs. 0.00");
        assert_eq!(view.discount, "Rs. 0.00");
        assert!(!view.is_empty);

        let a = &view.lines[0];
        assert_eq!(a.product_id, "A");
        assert_eq!(a.unit_price, "Rs. 100");
        assert_eq!(a.subtotal, "Rs. 200.00");
        assert_eq!(a.quantity, "2");
        assert_eq!((a.decrement_to, a.increment_to), (dec!(1), dec!(3)));
    }

    #[test]
    fn test_lines_follow_cart_order() {
        let cart = Cart::from_lines(vec![
            CartLine::new("9", "Z item", dec!(1), dec!(1)),
            CartLine::new("1", "A item", dec!(1), dec!(1)),
        ]);
        let names: Vec<_> = CartView::from_cart(&cart)
            .lines
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["Z item", "A item"]);
    }

    #[test]
    fn test_fractional_prices() {
        let cart = Cart::from_lines(vec![CartLine::new("1", "Chips", dec!(19.99), dec!(3))]);
        let view = CartView::from_cart(&cart);
        assert_eq!(view.lines[0].unit_price, "Rs. 19.99");
        assert_eq!(view.lines[0].subtotal, "Rs. 59.97");
        assert_eq!(view.total, "Rs. 59.97");
    }

    #[test]
    fn test_weighed_line() {
        let cart = Cart::from_lines(vec![CartLine::new("9", "Sugar", dec!(120), dec!(1.50))]);
        let line = &CartView::from_cart(&cart).lines[0];
        assert_eq!(line.quantity, "1.5");
        assert_eq!(line.subtotal, "Rs. 180.00");
        assert_eq!((line.decrement_to, line.increment_to), (dec!(0.5), dec!(2.5)));
    }

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::from_cart(&Cart::new());
        assert!(view.is_empty);
        assert!(view.lines.is_empty());
        assert_eq!(view.total, "Rs. 0.00");
    }
}
