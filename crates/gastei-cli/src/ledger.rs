//! HTTP client for the spreadsheet ledger.

use std::time::Duration;

use anyhow::Context;
use serde::Serialize;
use tracing::{debug, warn};

use gastei_core::{GasteiConfig, SubmitStatus};

/// Posts records to the ledger web app.
pub struct LedgerClient {
    url: String,
    http: reqwest::Client,
}

impl LedgerClient {
    /// Build a client from the `ledger` config section.
    pub fn from_config(config: &GasteiConfig) -> anyhow::Result<Self> {
        let url = config.ledger_url()?.to_string();
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.ledger.timeout_secs))
            .user_agent(concat!("gastei/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { url, http })
    }

    /// POST one record as JSON and interpret the reply.
    ///
    /// Transport failures are errors; a reply without `"result": "Success"`
    /// is a [`SubmitStatus`] other than `Saved`.
    pub async fn submit<T: Serialize>(&self, record: &T) -> anyhow::Result<SubmitStatus> {
        debug!("Posting record to {}", self.url);

        let response = self
            .http
            .post(&self.url)
            .json(record)
            .send()
            .await
            .with_context(|| format!("failed to reach ledger at {}", self.url))?;

        let http_status = response.status();
        let body = response
            .text()
            .await
            .context("failed to read ledger reply")?;

        let status = SubmitStatus::from_body(&body);
        if !status.is_saved() {
            warn!("Ledger replied {} with {:?}", http_status, status);
        }

        Ok(status)
    }
}
