//! Records sent to the spreadsheet ledger.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shared view over anything that is POSTed to the ledger with the
/// `{type, description, category, cost, user}` shape.
pub trait LedgerRecord: Serialize {
    /// Transaction type label ("Despesa", "Entrada", ...).
    fn kind(&self) -> &str;

    /// Free-form description.
    fn description(&self) -> &str;

    /// Category label.
    fn category(&self) -> &str;

    /// Amount, if known.
    fn cost(&self) -> Option<Decimal>;

    /// Sender display name.
    fn user(&self) -> &str;
}

/// A fully extracted transaction from the text path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Transaction type, stored exactly as typed.
    #[serde(rename = "type")]
    pub kind: String,

    /// Description, trimmed.
    pub description: String,

    /// User-declared category, trimmed.
    pub category: String,

    /// Amount with the comma decimal separator normalized.
    #[serde(with = "rust_decimal::serde::float")]
    pub cost: Decimal,

    /// Display name of the sender.
    pub user: String,
}

impl LedgerRecord for TransactionRecord {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn cost(&self) -> Option<Decimal> {
        Some(self.cost)
    }

    fn user(&self) -> &str {
        &self.user
    }
}

/// A record built from receipt OCR text.
///
/// Unlike [`TransactionRecord`] the cost may be missing: OCR output is lossy
/// and the draft is still forwarded with `"cost": null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptDraft {
    #[serde(rename = "type")]
    pub kind: String,

    pub description: String,

    pub category: String,

    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub cost: Option<Decimal>,

    pub user: String,
}

impl ReceiptDraft {
    /// Whether an amount was found in the receipt text.
    pub fn is_complete(&self) -> bool {
        self.cost.is_some()
    }

    /// Promote the draft to a full record when the cost is known.
    pub fn into_record(self) -> Option<TransactionRecord> {
        let cost = self.cost?;
        Some(TransactionRecord {
            kind: self.kind,
            description: self.description,
            category: self.category,
            cost,
            user: self.user,
        })
    }
}

impl LedgerRecord for ReceiptDraft {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn cost(&self) -> Option<Decimal> {
        self.cost
    }

    fn user(&self) -> &str {
        &self.user
    }
}

/// Legacy `categoria - valor` entry, posted as `{categoria, valor}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickEntry {
    pub categoria: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub valor: Decimal,
}
