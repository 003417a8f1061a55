//! Error types for the gastei-core library.

use std::fmt;

use thiserror::Error;

/// Main error type for the gastei library.
#[derive(Error, Debug)]
pub enum GasteiError {
    /// A message segment could not be turned into a record.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// A legacy `categoria - valor` message could not be parsed.
    #[error("quick entry error: {0}")]
    QuickEntry(#[from] QuickEntryError),

    /// Receipt text could not be turned into a draft.
    #[error("receipt error: {0}")]
    Receipt(#[from] ReceiptError),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A segment that did not yield a transaction record.
///
/// Carries the raw segment so the caller can echo it back to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{problem} in segment {raw_segment:?}")]
pub struct FormatError {
    /// The trimmed segment text as it was handed to the extractor.
    pub raw_segment: String,
    /// What went wrong.
    pub problem: FormatProblem,
}

impl FormatError {
    pub fn new(raw_segment: impl Into<String>, problem: FormatProblem) -> Self {
        Self {
            raw_segment: raw_segment.into(),
            problem,
        }
    }

    /// Whether the segment was empty (e.g. a trailing delimiter).
    pub fn is_empty_segment(&self) -> bool {
        self.raw_segment.trim().is_empty()
    }
}

/// Reason a segment was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatProblem {
    /// One or more labelled fields were absent.
    MissingFields(Vec<&'static str>),
    /// The `Valor:` token did not parse as a number.
    InvalidCost(String),
}

impl fmt::Display for FormatProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatProblem::MissingFields(fields) => {
                write!(f, "missing fields: {}", fields.join(", "))
            }
            FormatProblem::InvalidCost(token) => write!(f, "invalid cost {:?}", token),
        }
    }
}

/// Errors from the legacy `categoria - valor` format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuickEntryError {
    /// The message did not split into exactly two parts.
    #[error("expected `categoria - valor`, got {parts} part(s)")]
    Format { parts: usize },

    /// The value part is not a number.
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),
}

/// Errors from receipt OCR text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReceiptError {
    /// The first amount located does not parse.
    #[error("invalid amount {token:?} found by {strategy} strategy")]
    InvalidCost {
        strategy: &'static str,
        token: String,
    },
}

/// Result type for the gastei library.
pub type Result<T> = std::result::Result<T, GasteiError>;
