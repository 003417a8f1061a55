//! Receipt OCR text normalization.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::classify::CategoryTable;
use crate::error::ReceiptError;
use crate::models::record::ReceiptDraft;

use super::amounts::{parse_cost, receipt_cost_strategies, CostStrategy};
use super::FieldExtractor;

/// Turns raw OCR text into a [`ReceiptDraft`].
pub struct ReceiptNormalizer {
    table: CategoryTable,
    strategies: Vec<CostStrategy>,
    kind: String,
    missing_description: String,
}

impl ReceiptNormalizer {
    /// Create a normalizer with the built-in category table.
    pub fn new() -> Self {
        Self {
            table: CategoryTable::builtin(),
            strategies: receipt_cost_strategies().into(),
            kind: "Despesa".to_string(),
            missing_description: "Sem descrição".to_string(),
        }
    }

    /// Use a different category table.
    pub fn with_table(mut self, table: CategoryTable) -> Self {
        self.table = table;
        self
    }

    /// Set the transaction type assigned to receipts.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Set the description used when the text has no content.
    pub fn with_missing_description(mut self, text: impl Into<String>) -> Self {
        self.missing_description = text.into();
        self
    }

    /// Append a lower-priority cost strategy.
    pub fn with_strategy(mut self, strategy: CostStrategy) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// First non-blank line, trimmed.
    pub fn description(&self, ocr_text: &str) -> String {
        ocr_text
            .split(is_line_break)
            .map(str::trim)
            .find(|l| !l.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.missing_description.clone())
    }

    /// Amount located by the first strategy that matches.
    ///
    /// The search stops at that match: a token that does not parse is an
    /// error, not a reason to try the next strategy.
    pub fn cost(&self, ocr_text: &str) -> Result<Option<Decimal>, ReceiptError> {
        for strategy in &self.strategies {
            let Some(token) = strategy.extract(ocr_text) else {
                continue;
            };

            return match parse_cost(&token) {
                Some(amount) => {
                    debug!("Receipt cost {} found by {} strategy", amount, strategy.name);
                    Ok(Some(amount))
                }
                None => {
                    warn!("Unparseable amount {:?} found by {} strategy", token, strategy.name);
                    Err(ReceiptError::InvalidCost {
                        strategy: strategy.name,
                        token,
                    })
                }
            };
        }
        Ok(None)
    }

    /// Build a draft. A receipt with no amount at all still yields a draft
    /// with `cost: None`; an amount that cannot be read rejects the receipt.
    pub fn normalize(&self, ocr_text: &str, user: &str) -> Result<ReceiptDraft, ReceiptError> {
        info!("Normalizing receipt from {} characters of OCR text", ocr_text.len());

        let cost = self.cost(ocr_text)?;
        if cost.is_none() {
            warn!("No amount found in receipt text");
        }

        Ok(ReceiptDraft {
            kind: self.kind.clone(),
            description: self.description(ocr_text),
            category: self.table.classify(ocr_text).to_string(),
            cost,
            user: user.to_string(),
        })
    }
}

impl Default for ReceiptNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Line separators recognized when picking the description: `\n`, `\r`,
/// vertical tab, form feed, the ASCII file/group/record separators, NEL and
/// the Unicode line and paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Normalize receipt OCR text with the default settings.
pub fn normalize_receipt(ocr_text: &str, user: &str) -> Result<ReceiptDraft, ReceiptError> {
    ReceiptNormalizer::new().normalize(ocr_text, user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::CategoryRule;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_full_receipt() {
        let text = "\n   \n  SUPERMERCADO GIASSI  \nCNPJ 00.000.000/0001-00\nVALOR: R$ 87,35\n";
        let draft = normalize_receipt(text, "Ana").unwrap();

        assert_eq!(draft.kind, "Despesa");
        assert_eq!(draft.description, "SUPERMERCADO GIASSI");
        assert_eq!(draft.category, "Mercado");
        assert_eq!(draft.cost, Some(Decimal::new(8735, 2)));
        assert_eq!(draft.user, "Ana");
    }

    #[test]
    fn test_currency_fallback() {
        let text = "Posto Shell\nGasolina comum\nTOTAL R$ 150,00";
        let draft = normalize_receipt(text, "Ana").unwrap();

        assert_eq!(draft.category, "Carro");
        assert_eq!(draft.cost, Some(Decimal::new(150, 0)));
    }

    #[test]
    fn test_labeled_amount_wins_over_currency() {
        let text = "Comprovante PIX\nR$ 1,00 taxa\nValor 250,00";
        let draft = normalize_receipt(text, "Ana").unwrap();

        assert_eq!(draft.category, "Transferência");
        assert_eq!(draft.cost, Some(Decimal::new(250, 0)));
    }

    #[test]
    fn test_unparseable_label_rejects_receipt() {
        let text = "Loja\nValor: 1.234,56\nTroco R$ 0,44";
        assert_eq!(
            normalize_receipt(text, "Ana").unwrap_err(),
            ReceiptError::InvalidCost {
                strategy: "labeled",
                token: "1.234,56".to_string(),
            }
        );

        let text = "Loja\nValor: 1.234,56";
        assert!(normalize_receipt(text, "Ana").is_err());
    }

    #[test]
    fn test_unparseable_currency_amount_rejects_receipt() {
        let err = normalize_receipt("Loja\nTOTAL R$ 1,234.56", "Ana").unwrap_err();
        assert!(matches!(err, ReceiptError::InvalidCost { strategy: "currency", .. }));
    }

    #[test]
    fn test_description_splits_on_every_line_break() {
        let normalizer = ReceiptNormalizer::new();

        assert_eq!(normalizer.description("Loja A\rLoja B\nR$ 5"), "Loja A");
        assert_eq!(normalizer.description("Loja A\r\nLoja B"), "Loja A");
        assert_eq!(normalizer.description("\x0c\x0bLoja A\u{2028}Loja B"), "Loja A");
        assert_eq!(normalizer.description("  \u{85}Loja C\x1eLoja D"), "Loja C");
    }

    #[test]
    fn test_missing_cost_is_soft() {
        let text = "Padaria Pão Quente\nobrigado pela preferência";
        let draft = normalize_receipt(text, "Ana").unwrap();

        assert_eq!(draft.description, "Padaria Pão Quente");
        assert_eq!(draft.category, "Restaurante");
        assert_eq!(draft.cost, None);
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_blank_text() {
        let draft = normalize_receipt(" \n\t\n", "Ana").unwrap();

        assert_eq!(draft.description, "Sem descrição");
        assert_eq!(draft.category, "Outros");
        assert_eq!(draft.cost, None);
    }

    #[test]
    fn test_custom_table_and_kind() {
        let mut table = CategoryTable::new("Diversos");
        table.push(CategoryRule::new("feira", "Hortifruti"));

        let normalizer = ReceiptNormalizer::new()
            .with_table(table)
            .with_kind("Entrada")
            .with_missing_description("?");

        let draft = normalizer.normalize("Feira livre\nR$ 30", "Ana").unwrap();
        assert_eq!(draft.kind, "Entrada");
        assert_eq!(draft.category, "Hortifruti");
        assert_eq!(draft.cost, Some(Decimal::new(30, 0)));

        assert_eq!(normalizer.normalize("", "Ana").unwrap().description, "?");
        assert_eq!(normalizer.normalize("Mercado", "Ana").unwrap().category, "Diversos");
    }
}
