//! Configuration structures for the expense logger.

use serde::{Deserialize, Serialize};

use crate::error::{GasteiError, Result};

/// Environment variable that overrides [`LedgerConfig::url`].
pub const LEDGER_URL_ENV: &str = "GOOGLE_SHEET_URL";

/// Main configuration for gastei.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasteiConfig {
    /// Ledger endpoint configuration.
    pub ledger: LedgerConfig,

    /// Message parsing configuration.
    pub parsing: ParsingConfig,
}

/// Spreadsheet ledger endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Web app URL accepting JSON records. Empty means "not configured".
    pub url: String,

    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout_secs: 30,
        }
    }
}

/// Message parsing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// Separator between transactions in one message.
    pub segment_delimiter: char,

    /// Category used when no rule matches receipt text.
    pub default_category: String,

    /// Transaction type assigned to every receipt.
    pub receipt_type: String,

    /// Description used when the receipt text has no non-blank line.
    pub missing_description: String,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            segment_delimiter: '|',
            default_category: "Outros".to_string(),
            receipt_type: "Despesa".to_string(),
            missing_description: "Sem descrição".to_string(),
        }
    }
}

impl GasteiConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply environment overrides (`GOOGLE_SHEET_URL`).
    pub fn apply_env(mut self) -> Self {
        if let Ok(url) = std::env::var(LEDGER_URL_ENV) {
            if !url.trim().is_empty() {
                self.ledger.url = url.trim().to_string();
            }
        }
        self
    }

    /// Ledger URL, or a configuration error when none is set.
    pub fn ledger_url(&self) -> Result<&str> {
        if self.ledger.url.trim().is_empty() {
            return Err(GasteiError::Config(format!(
                "ledger URL is not set (use `gastei config set ledger.url <URL>` or {})",
                LEDGER_URL_ENV
            )));
        }
        Ok(&self.ledger.url)
    }
}
