//! CLI subcommands.

pub mod batch;
pub mod classify;
pub mod config;
pub mod parse;
pub mod quick;
pub mod receipt;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, warn};

use gastei_core::{reply, GasteiConfig, LedgerRecord, SubmitStatus};

use crate::ledger::LedgerClient;

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gastei")
        .join("config.json")
}

/// Load the config file (explicit path, else the default location if it
/// exists, else defaults) and apply environment overrides.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<GasteiConfig> {
    let config = match config_path {
        Some(path) => GasteiConfig::from_file(Path::new(path))
            .with_context(|| format!("failed to load config from {}", path))?,
        None => {
            let path = default_config_path();
            if path.exists() {
                GasteiConfig::from_file(&path)?
            } else {
                GasteiConfig::default()
            }
        }
    };

    Ok(config.apply_env())
}

/// Message text from the argument, a file, or stdin (`-` or nothing).
pub fn read_input(text: Option<String>, file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            debug!("Reading message from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Submit one record and build the chat reply for it.
pub async fn submit_one<R: LedgerRecord>(client: &LedgerClient, record: &R) -> (bool, String) {
    match client.submit(record).await {
        Ok(SubmitStatus::Saved) => (true, reply::added(record)),
        Ok(status) => {
            debug!("Ledger did not store {:?}: {:?}", record.description(), status);
            (false, reply::save_failed().to_string())
        }
        Err(e) => {
            warn!("Submission failed: {:#}", e);
            (false, reply::processing_failed().to_string())
        }
    }
}
