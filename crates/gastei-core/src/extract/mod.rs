//! Transaction extraction from chat messages and receipt text.

pub mod amounts;
mod fields;
pub mod patterns;
mod quick;
mod receipt;
mod splitter;

pub use amounts::{format_cost, parse_cost, CostStrategy};
pub use fields::{extract, Field, FIELDS};
pub use quick::parse_quick;
pub use receipt::{normalize_receipt, ReceiptNormalizer};
pub use splitter::{split_and_extract, MessageParser};

use crate::error::FormatError;
use crate::models::record::TransactionRecord;

/// Per-segment result of parsing a message.
pub type ParseOutcome = std::result::Result<TransactionRecord, FormatError>;

/// Trait for single-field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}
