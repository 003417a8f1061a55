//! Classify command - show the category for some text.

use clap::Args;
use console::style;

use gastei_core::CategoryTable;

use super::load_config;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Text to classify (words are joined with spaces)
    #[arg(required = true)]
    text: Vec<String>,

    /// Also print the rule that matched
    #[arg(long)]
    explain: bool,
}

pub fn run(args: ClassifyArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let text = args.text.join(" ");
    let table = CategoryTable::builtin().with_default(config.parsing.default_category);

    println!("{}", table.classify(&text));

    if args.explain {
        match table.find(&text) {
            Some(rule) => eprintln!(
                "{} matched rule {:?}",
                style("ℹ").blue(),
                rule.pattern
            ),
            None => eprintln!("{} no rule matched, using default", style("ℹ").blue()),
        }
    }

    Ok(())
}
