//! Core library for chat-driven expense logging.
//!
//! This crate provides:
//! - Labelled field extraction (`Tipo:`, `Descrição:`, `Categoria:`, `Valor:`)
//! - Multi-transaction splitting of a single chat message
//! - Receipt OCR text normalization
//! - Ordered merchant-substring category rules
//! - Ledger reply interpretation and user-facing reply texts

pub mod error;
pub mod models;
pub mod extract;
pub mod classify;
pub mod ledger;
pub mod reply;

pub use error::{FormatError, FormatProblem, GasteiError, QuickEntryError, ReceiptError, Result};
pub use models::record::{LedgerRecord, QuickEntry, ReceiptDraft, TransactionRecord};
pub use models::config::GasteiConfig;
pub use extract::{
    extract, parse_quick, split_and_extract, normalize_receipt, MessageParser, ParseOutcome,
    ReceiptNormalizer,
};
pub use classify::{classify, CategoryRule, CategoryTable, DEFAULT_CATEGORY};
pub use ledger::{LedgerResponse, SubmitStatus};
