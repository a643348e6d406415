//! Number formatting and parsing for money, quantity and percent cells

use crate::shared::config::CURRENCY_LABEL;
use rust_decimal::prelude::*;

/// Formats a value with a thousands separator and the given number of decimals
///
/// # Examples
///
/// ```
/// use contracts::shared::number_format::format_number_with_decimals;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let v = Decimal::from_str("1234.567").unwrap();
/// assert_eq!(format_number_with_decimals(v, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: Decimal, decimals: u32) -> String {
    let fixed = format_fixed(value, decimals);

    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let mut parts = unsigned.splitn(2, '.');
    let integer_part = parts.next().unwrap_or("0");
    let decimal_part = parts.next();

    // Insert a comma every 3 digits from the end of the integer part
    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Rounds half away from zero and pads to exactly `decimals` places, no grouping
pub fn format_fixed(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    // Rounding can leave "-0.00"
    let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
    format!("{:.prec$}", rounded, prec = decimals as usize)
}

/// Money amount with 2 decimals and thousands separators, without currency
pub fn format_amount(value: Decimal) -> String {
    format_number_with_decimals(value, 2)
}

/// `Rs. 1,234.50`
pub fn format_money(value: Decimal) -> String {
    format!("{} {}", CURRENCY_LABEL, format_amount(value))
}

/// `Rs. 1234.50`, the plain two-decimal form used by the cart
pub fn format_money_plain(value: Decimal) -> String {
    format!("{} {}", CURRENCY_LABEL, format_fixed(value, 2))
}

/// `12.5%`
pub fn format_percent(value: Decimal, decimals: u32) -> String {
    format!("{}%", format_fixed(value, decimals))
}

/// Parses a rendered money cell such as `Rs. 1,234.50`
pub fn parse_money(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    let without_currency = trimmed
        .strip_prefix(CURRENCY_LABEL)
        .or_else(|| trimmed.strip_prefix("Rs"))
        .unwrap_or(trimmed);
    let cleaned: String = without_currency
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Parses a rendered percent cell such as `12.5%`
pub fn parse_percent(text: &str) -> Option<Decimal> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '%' && *c != ',')
        .collect();
    Decimal::from_str(&cleaned).ok()
}

/// Parses a rendered integer cell such as `1,204`
pub fn parse_integer(text: &str) -> Option<i64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    cleaned.parse::<i64>().ok().or_else(|| {
        Decimal::from_str(&cleaned)
            .ok()
            .and_then(|d| d.trunc().to_i64())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(dec!(1234.56)), "Rs. 1,234.56");
        assert_eq!(format_money(dec!(1234567.89)), "Rs. 1,234,567.89");
        assert_eq!(format_money(dec!(0)), "Rs. 0.00");
        assert_eq!(format_money(dec!(-1234.56)), "Rs. -1,234.56");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(dec!(1234.567), 0), "1,235");
        assert_eq!(format_number_with_decimals(dec!(1234.567), 1), "1,234.6");
        assert_eq!(format_number_with_decimals(dec!(1234.567), 2), "1,234.57");
        assert_eq!(format_number_with_decimals(dec!(1234.567), 3), "1,234.567");
        assert_eq!(format_number_with_decimals(dec!(-999), 0), "-999");
        assert_eq!(format_number_with_decimals(dec!(-1000), 0), "-1,000");
    }

    #[test]
    fn test_format_fixed_pads_and_rounds() {
        assert_eq!(format_fixed(dec!(450), 2), "450.00");
        assert_eq!(format_fixed(dec!(2.005), 2), "2.01");
        assert_eq!(format_fixed(dec!(-0.001), 2), "0.00");
        assert_eq!(format_money_plain(dec!(1250.5)), "Rs. 1250.50");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec!(12.345), 1), "12.3%");
        assert_eq!(format_percent(dec!(0), 1), "0.0%");
    }

    #[test]
    fn test_parse_money_cells() {
        assert_eq!(parse_money("Rs. 1,234.50"), Some(dec!(1234.50)));
        assert_eq!(parse_money("  Rs 99 "), Some(dec!(99)));
        assert_eq!(parse_money("-2,000"), Some(dec!(-2000)));
        assert_eq!(parse_money("Rs."), None);
        assert_eq!(parse_money("n/a"), None);
    }

    #[test]
    fn test_parse_percent_and_integer() {
        assert_eq!(parse_percent("23.5%"), Some(dec!(23.5)));
        assert_eq!(parse_integer("1,204"), Some(1204));
        assert_eq!(parse_integer("7.0"), Some(7));
        assert_eq!(parse_integer("seven"), None);
    }
}
