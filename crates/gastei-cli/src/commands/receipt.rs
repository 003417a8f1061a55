//! Receipt command - build a record from receipt OCR text.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{info, warn};

use gastei_core::{reply, CategoryTable, GasteiConfig, ReceiptNormalizer};

use super::{load_config, read_input, submit_one};
use crate::ledger::LedgerClient;
use crate::output::{emit, format_draft, OutputFormat};

/// Arguments for the receipt command.
#[derive(Args)]
pub struct ReceiptArgs {
    /// OCR text file (`-` for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Sender display name
    #[arg(short, long, default_value = "gastei")]
    user: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Send the record to the ledger
    #[arg(long)]
    submit: bool,

    /// Fail instead of sending a record without an amount
    #[arg(long)]
    require_cost: bool,
}

/// Normalizer configured from the `parsing` section.
pub fn normalizer_from_config(config: &GasteiConfig) -> ReceiptNormalizer {
    ReceiptNormalizer::new()
        .with_table(CategoryTable::builtin().with_default(config.parsing.default_category.clone()))
        .with_kind(config.parsing.receipt_type.clone())
        .with_missing_description(config.parsing.missing_description.clone())
}

pub async fn run(args: ReceiptArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let text = match read_input(None, Some(&args.input)) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{}", reply::image_failed());
            return Err(e);
        }
    };

    info!("Processing receipt text: {}", args.input.display());

    let draft = match normalizer_from_config(&config).normalize(&text, &args.user) {
        Ok(draft) => draft,
        Err(e) => {
            eprintln!("{}", reply::image_failed());
            anyhow::bail!("Receipt rejected: {}", e);
        }
    };

    if !draft.is_complete() {
        if args.require_cost {
            anyhow::bail!("No amount found in {}", args.input.display());
        }
        warn!("Receipt has no amount; the record will carry a null cost");
        eprintln!("{} Valor não encontrado", style("⚠").yellow());
    }

    emit(&format_draft(&draft, args.format)?, args.output.as_deref())?;

    if args.submit {
        eprintln!("{}", reply::processing_image());
        let client = LedgerClient::from_config(&config)?;
        let (ok, reply) = submit_one(&client, &draft).await;
        println!("{}", reply);
        if !ok {
            anyhow::bail!("Receipt was not saved");
        }
    }

    Ok(())
}
