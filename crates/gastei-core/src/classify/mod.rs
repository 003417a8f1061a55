//! Category inference from merchant names.
//!
//! Rules are tried top to bottom and the first pattern found (as a
//! case-insensitive substring) decides the category. Order is part of the
//! contract, so the table is a list rather than a map.

mod table;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::trace;

pub use table::BUILTIN_RULES;

/// Category returned when no rule matches.
pub const DEFAULT_CATEGORY: &str = "Outros";

lazy_static! {
    static ref BUILTIN: CategoryTable = CategoryTable::builtin();
}

/// A `(pattern, category)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Merchant substring, stored lower-cased.
    pub pattern: String,
    /// Category label returned on match.
    pub category: String,
}

impl CategoryRule {
    pub fn new(pattern: &str, category: impl Into<String>) -> Self {
        Self {
            pattern: pattern.to_lowercase(),
            category: category.into(),
        }
    }

    /// Whether the rule applies to already lower-cased text.
    pub fn matches(&self, lowered: &str) -> bool {
        lowered.contains(&self.pattern)
    }
}

/// Ordered, first-match category table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTable {
    rules: Vec<CategoryRule>,
    default_category: String,
}

impl CategoryTable {
    /// Empty table returning `default_category` for everything.
    pub fn new(default_category: impl Into<String>) -> Self {
        Self {
            rules: Vec::new(),
            default_category: default_category.into(),
        }
    }

    /// The curated merchant table.
    pub fn builtin() -> Self {
        let mut table = Self::new(DEFAULT_CATEGORY);
        table.rules = BUILTIN_RULES
            .iter()
            .map(|(pattern, category)| CategoryRule::new(pattern, *category))
            .collect();
        table
    }

    /// Append a rule at the lowest priority.
    pub fn push(&mut self, rule: CategoryRule) {
        self.rules.push(rule);
    }

    /// Change the fallback category.
    pub fn with_default(mut self, default_category: impl Into<String>) -> Self {
        self.default_category = default_category.into();
        self
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    pub fn default_category(&self) -> &str {
        &self.default_category
    }

    /// The first matching rule, if any.
    pub fn find(&self, text: &str) -> Option<&CategoryRule> {
        let lowered = text.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }

    /// Category for `text`, or the default category.
    pub fn classify(&self, text: &str) -> &str {
        match self.find(text) {
            Some(rule) => {
                trace!("Matched {:?} -> {}", rule.pattern, rule.category);
                &rule.category
            }
            None => &self.default_category,
        }
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Classify `text` with the built-in table.
pub fn classify(text: &str) -> &'static str {
    BUILTIN.classify(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classify_known_merchant() {
        assert_eq!(classify("Compra no Carrefour Express"), "Mercado");
        assert_eq!(classify("PEDIDO IFOOD *LANCHONETE"), "Lanche");
        assert_eq!(classify("Corrida Uber 12/03"), "Transporte");
        assert_eq!(classify("Posto Petrobras BR-101"), "Carro");
    }

    #[test]
    fn test_classify_default() {
        assert_eq!(classify("unseen merchant xyz"), "Outros");
        assert_eq!(classify(""), "Outros");
    }

    #[test]
    fn test_classify_is_deterministic() {
        let text = "Pagamento fatura do cartão";
        let first = classify(text);
        for _ in 0..10 {
            assert_eq!(classify(text), first);
        }
        assert_eq!(first, "Cartão de crédito");
    }

    #[test]
    fn test_case_insensitive_accents() {
        assert_eq!(classify("FARMÁCIA SANTA MARIA"), "Farmácia");
        assert_eq!(classify("madeireira são josé ltda"), "Casa");
    }

    #[test]
    fn test_every_seed_pattern_classifies_to_its_own_category() {
        for (pattern, category) in BUILTIN_RULES {
            assert_eq!(classify(pattern), *category, "pattern {:?} is shadowed", pattern);
        }
    }

    #[test]
    fn test_first_match_wins() {
        let mut table = CategoryTable::new("Outros");
        table.push(CategoryRule::new("Posto", "Carro"));
        table.push(CategoryRule::new("Posto Shell", "Combustível"));

        assert_eq!(table.classify("POSTO SHELL"), "Carro");
        assert_eq!(table.find("posto shell").unwrap().pattern, "posto");
    }

    #[test]
    fn test_with_default() {
        let table = CategoryTable::builtin().with_default("Diversos");
        assert_eq!(table.classify("nada aqui"), "Diversos");
        assert_eq!(table.default_category(), "Diversos");
    }

    #[test]
    fn test_builtin_order_preserved() {
        let table = CategoryTable::builtin();
        assert_eq!(table.rules().len(), BUILTIN_RULES.len());
        assert_eq!(table.rules()[0].pattern, "compra no carrefour express");
        assert_eq!(table.rules().last().unwrap().category, "Transferência");
    }
}
