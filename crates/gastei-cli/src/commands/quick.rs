//! Quick command - legacy `categoria - valor` entries.

use clap::Args;
use tracing::warn;

use gastei_core::{parse_quick, reply, SubmitStatus};

use super::load_config;
use crate::ledger::LedgerClient;

#[derive(Args)]
pub struct QuickArgs {
    /// Message such as "mercado - 12,50"
    message: String,

    /// Send the entry to the ledger
    #[arg(long)]
    submit: bool,
}

pub async fn run(args: QuickArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let entry = match parse_quick(&args.message) {
        Ok(entry) => entry,
        Err(e) => {
            eprintln!("{}", reply::QUICK_INSTRUCTIONS);
            anyhow::bail!("Invalid quick entry: {}", e);
        }
    };

    println!("{}", serde_json::to_string(&entry)?);

    if args.submit {
        let config = load_config(config_path)?;
        let client = LedgerClient::from_config(&config)?;

        match client.submit(&entry).await {
            Ok(SubmitStatus::Saved) => println!("{}", reply::quick_added(&entry)),
            Ok(_) => {
                println!("{}", reply::save_failed());
                anyhow::bail!("Entry was not saved");
            }
            Err(e) => {
                warn!("Submission failed: {:#}", e);
                println!("{}", reply::processing_failed());
                return Err(e);
            }
        }
    }

    Ok(())
}
