//! Amount parsing for chat messages and receipts.

use std::str::FromStr;

use regex::Regex;
use rust_decimal::Decimal;

use super::patterns::{RECEIPT_CURRENCY_COST, RECEIPT_LABELED_COST};
use super::FieldExtractor;

/// Parse a cost token, turning every comma into a dot first.
///
/// `"12,50"` and `"12.50"` both give 12.50. Tokens that still contain more
/// than one separator afterwards (`"1.234,56"`) are rejected.
pub fn parse_cost(token: &str) -> Option<Decimal> {
    let normalized = token.trim().replace(',', ".");
    Decimal::from_str(&normalized).ok()
}

/// Format an amount the way replies show it (`12.50`).
pub fn format_cost(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

/// One way of locating the amount in receipt text.
pub struct CostStrategy {
    /// Short name used in logs.
    pub name: &'static str,
    pattern: &'static Regex,
}

impl CostStrategy {
    pub const fn new(name: &'static str, pattern: &'static Regex) -> Self {
        Self { name, pattern }
    }
}

impl FieldExtractor for CostStrategy {
    type Output = String;

    /// The raw amount token of the first match. Parsing is left to the
    /// caller so a malformed token is not mistaken for "no match".
    fn extract(&self, text: &str) -> Option<String> {
        let caps = self.pattern.captures(text)?;
        Some(caps[1].to_string())
    }
}

/// Receipt amount strategies in priority order: a "valor" label first,
/// then any bare `R$` amount.
pub fn receipt_cost_strategies() -> [CostStrategy; 2] {
    [
        CostStrategy::new("labeled", &*RECEIPT_LABELED_COST),
        CostStrategy::new("currency", &*RECEIPT_CURRENCY_COST),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_cost() {
        assert_eq!(parse_cost("12,50"), Some(Decimal::new(1250, 2)));
        assert_eq!(parse_cost("12.50"), Some(Decimal::new(1250, 2)));
        assert_eq!(parse_cost(" 7 "), Some(Decimal::new(7, 0)));
        assert_eq!(parse_cost("1"), Some(Decimal::ONE));
    }

    #[test]
    fn test_parse_cost_rejects_multiple_separators() {
        assert_eq!(parse_cost("1.234,56"), None);
        assert_eq!(parse_cost("1,2,3"), None);
        assert_eq!(parse_cost(""), None);
    }

    #[test]
    fn test_format_cost() {
        assert_eq!(format_cost(Decimal::new(125, 1)), "12.50");
        assert_eq!(format_cost(Decimal::new(3, 0)), "3.00");
    }

    #[test]
    fn test_strategies_in_priority_order() {
        let text = "Total R$ 99,00\nValor: 45,90";
        let [labeled, currency] = receipt_cost_strategies();

        assert_eq!(labeled.extract(text), Some("45,90".to_string()));
        assert_eq!(currency.extract(text), Some("99,00".to_string()));
        assert_eq!(labeled.extract("Total R$ 99,00"), None);
    }
}
