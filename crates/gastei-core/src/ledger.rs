//! Spreadsheet ledger reply protocol.
//!
//! The ledger web app answers every POST with a JSON object whose `result`
//! field is `"Success"` when the row was appended.

use serde::{Deserialize, Serialize};

/// Literal `result` value meaning the record was stored.
pub const SUCCESS: &str = "Success";

/// Reply body of the ledger endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerResponse {
    #[serde(default)]
    pub result: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of one ledger submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    /// The ledger stored the record.
    Saved,
    /// JSON reply without a success marker.
    Rejected { result: Option<String> },
    /// The body was not JSON.
    Unreadable { body: String },
}

impl SubmitStatus {
    /// Interpret a reply body.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<LedgerResponse>(body) {
            Ok(response) if response.result.as_deref() == Some(SUCCESS) => SubmitStatus::Saved,
            Ok(response) => SubmitStatus::Rejected {
                result: response.result.or(response.error),
            },
            Err(_) => SubmitStatus::Unreadable {
                body: body.chars().take(200).collect(),
            },
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitStatus::Saved)
    }
}
