//! Parse command - extract transactions from a labelled text message.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use gastei_core::{reply, MessageParser};

use super::{load_config, read_input, submit_one};
use crate::ledger::LedgerClient;
use crate::output::{emit, format_outcomes, OutputFormat};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Message text (read from --file or stdin when omitted)
    message: Option<String>,

    /// Read the message from a file (`-` for stdin)
    #[arg(short = 'F', long, conflicts_with = "message")]
    file: Option<PathBuf>,

    /// Sender display name attached to every record
    #[arg(short, long, default_value = "gastei")]
    user: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Send valid records to the ledger
    #[arg(long)]
    submit: bool,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let message = read_input(args.message, args.file.as_deref())?;
    if message.trim().is_empty() {
        eprintln!("{}", reply::PHOTO_INSTRUCTIONS);
        anyhow::bail!("Empty message");
    }

    let parser = MessageParser::new().with_delimiter(config.parsing.segment_delimiter);
    let outcomes = parser.parse(&message, &args.user);

    emit(&format_outcomes(&outcomes, args.format)?, args.output.as_deref())?;

    let records: Vec<_> = outcomes.iter().filter_map(|o| o.as_ref().ok()).collect();
    let rejected = outcomes.len() - records.len();

    if args.submit && !records.is_empty() {
        let client = LedgerClient::from_config(&config)?;
        let mut saved = 0;

        for record in &records {
            let (ok, reply) = submit_one(&client, *record).await;
            if ok {
                saved += 1;
            }
            println!("{}", reply);
        }

        info!("{} of {} record(s) saved", saved, records.len());
        if saved < records.len() {
            anyhow::bail!("{} record(s) were not saved", records.len() - saved);
        }
    }

    if records.is_empty() {
        anyhow::bail!("No valid transaction found ({} segment(s) rejected)", rejected);
    }

    if rejected > 0 {
        eprintln!(
            "{} {} of {} segment(s) rejected",
            style("⚠").yellow(),
            rejected,
            outcomes.len()
        );
    }

    Ok(())
}
