//! Batch command - normalize many receipt OCR text files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use gastei_core::extract::format_cost;
use gastei_core::{ReceiptDraft, ReceiptNormalizer};

use super::receipt::normalizer_from_config;
use super::{load_config, submit_one};
use crate::ledger::LedgerClient;
use crate::output::{format_draft, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (`.txt` OCR dumps)
    #[arg(required = true)]
    input: String,

    /// Sender display name
    #[arg(short, long, default_value = "gastei")]
    user: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Send every record to the ledger
    #[arg(long)]
    submit: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    draft: Option<ReceiptDraft>,
    saved: bool,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("txt")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let client = if args.submit {
        Some(LedgerClient::from_config(&config)?)
    } else {
        None
    };

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let normalizer = normalizer_from_config(&config);
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();

        match process_single_file(&path, &normalizer, &args.user) {
            Ok(draft) => {
                let mut saved = false;
                if let Some(client) = &client {
                    let (ok, reply) = submit_one(client, &draft).await;
                    pb.println(format!("{}: {}", path.display(), reply));
                    saved = ok;
                }

                results.push(ProcessResult {
                    path,
                    draft: Some(draft),
                    saved,
                    error: None,
                    processing_time_ms: file_start.elapsed().as_millis() as u64,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if !args.continue_on_error {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    pb.abandon();
                    anyhow::bail!("Processing failed: {}", error_msg);
                }

                warn!("Failed to process {}: {}", path.display(), error_msg);
                results.push(ProcessResult {
                    path,
                    draft: None,
                    saved: false,
                    error: Some(error_msg),
                    processing_time_ms: file_start.elapsed().as_millis() as u64,
                });
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    let successful: Vec<_> = results.iter().filter(|r| r.draft.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();
    let incomplete = successful
        .iter()
        .filter(|r| r.draft.as_ref().is_some_and(|d| !d.is_complete()))
        .count();

    if let Some(output_dir) = &args.output_dir {
        for result in &successful {
            if let Some(draft) = &result.draft {
                let output_name = result
                    .path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("receipt");
                let output_path =
                    output_dir.join(format!("{}.{}", output_name, args.format.extension()));

                fs::write(&output_path, format_draft(draft, args.format)?)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful ({} without amount), {} failed",
        style(successful.len()).green(),
        style(incomplete).yellow(),
        style(failed.len()).red()
    );

    if client.is_some() {
        let saved = results.iter().filter(|r| r.saved).count();
        println!("   {} saved to the ledger", style(saved).green());
    }

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn process_single_file(
    path: &Path,
    normalizer: &ReceiptNormalizer,
    user: &str,
) -> anyhow::Result<ReceiptDraft> {
    let text = fs::read_to_string(path)?;
    if text.trim().is_empty() {
        anyhow::bail!("No text in file");
    }

    Ok(normalizer.normalize(&text, user)?)
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "type",
        "description",
        "category",
        "cost",
        "saved",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result.path.file_name().and_then(|s| s.to_str()).unwrap_or("");

        if let Some(draft) = &result.draft {
            wtr.write_record([
                filename,
                if draft.is_complete() { "success" } else { "incomplete" },
                &draft.kind,
                &draft.description,
                &draft.category,
                &draft.cost.map(format_cost).unwrap_or_default(),
                if result.saved { "yes" } else { "no" },
                &result.processing_time_ms.to_string(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                "no",
                &result.processing_time_ms.to_string(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_process_single_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shell.txt");
        fs::write(&path, "Posto Shell\nTotal R$ 80,00").unwrap();

        let draft = process_single_file(&path, &ReceiptNormalizer::new(), "Ana").unwrap();
        assert_eq!(draft.description, "Posto Shell");
        assert_eq!(draft.category, "Carro");
        assert!(draft.is_complete());
    }

    #[test]
    fn test_blank_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blank.txt");
        fs::write(&path, "  \n").unwrap();

        assert!(process_single_file(&path, &ReceiptNormalizer::new(), "Ana").is_err());
    }

    #[test]
    fn test_unreadable_amount_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("troco.txt");
        fs::write(&path, "Loja\nValor: 1.234,56\nTroco R$ 0,44").unwrap();

        let err = process_single_file(&path, &ReceiptNormalizer::new(), "Ana").unwrap_err();
        assert!(err.to_string().contains("1.234,56"));
    }

    #[test]
    fn test_write_summary() {
        let dir = tempdir().unwrap();
        let summary = dir.path().join("summary.csv");
        let results = vec![
            ProcessResult {
                path: PathBuf::from("a.txt"),
                draft: Some(gastei_core::normalize_receipt("Drogaria Pacheco Centro", "Ana").unwrap()),
                saved: false,
                error: None,
                processing_time_ms: 3,
            },
            ProcessResult {
                path: PathBuf::from("b.txt"),
                draft: None,
                saved: false,
                error: Some("No text in file".to_string()),
                processing_time_ms: 1,
            },
        ];

        write_summary(&summary, &results).unwrap();
        let content = fs::read_to_string(&summary).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "a.txt,incomplete,Despesa,Drogaria Pacheco Centro,Farmácia,,no,3,"
        );
        assert_eq!(lines[2], "b.txt,error,,,,,no,1,No text in file");
    }
}
