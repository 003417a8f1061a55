//! CLI front end for chat-driven expense logging.

mod commands;
mod ledger;
mod output;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, classify, config, parse, quick, receipt};

/// Log expenses from chat-style messages to a spreadsheet ledger
#[derive(Parser)]
#[command(name = "gastei")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a labelled text message (one or more `|`-separated transactions)
    Parse(parse::ParseArgs),

    /// Build a record from receipt OCR text
    Receipt(receipt::ReceiptArgs),

    /// Process many receipt OCR text files
    Batch(batch::BatchArgs),

    /// Show the category inferred for some text
    Classify(classify::ClassifyArgs),

    /// Parse a legacy `categoria - valor` message
    Quick(quick::QuickArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Parse(args) => parse::run(args, cli.config.as_deref()).await,
        Commands::Receipt(args) => receipt::run(args, cli.config.as_deref()).await,
        Commands::Batch(args) => batch::run(args, cli.config.as_deref()).await,
        Commands::Classify(args) => classify::run(args, cli.config.as_deref()),
        Commands::Quick(args) => quick::run(args, cli.config.as_deref()).await,
        Commands::Config(args) => config::run(args, cli.config.as_deref()),
    }
}
