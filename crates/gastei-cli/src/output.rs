//! Output formatting for parse outcomes and receipt drafts.

use std::fs;
use std::path::Path;

use console::style;
use serde_json::json;

use gastei_core::extract::{format_cost, ParseOutcome};
use gastei_core::{reply, LedgerRecord, ReceiptDraft};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Chat-style replies
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

const CSV_HEADER: [&str; 8] = [
    "segment",
    "status",
    "type",
    "description",
    "category",
    "cost",
    "user",
    "error",
];

pub fn format_outcomes(outcomes: &[ParseOutcome], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let items: Vec<serde_json::Value> = outcomes
                .iter()
                .enumerate()
                .map(|(i, outcome)| match outcome {
                    Ok(record) => json!({ "segment": i + 1, "ok": true, "record": record }),
                    Err(e) => json!({
                        "segment": i + 1,
                        "ok": false,
                        "error": e.problem.to_string(),
                        "raw_segment": e.raw_segment,
                    }),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&items)?)
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            wtr.write_record(CSV_HEADER)?;

            for (i, outcome) in outcomes.iter().enumerate() {
                let segment = (i + 1).to_string();
                match outcome {
                    Ok(record) => wtr.write_record([
                        segment.as_str(),
                        "ok",
                        &record.kind,
                        &record.description,
                        &record.category,
                        &format_cost(record.cost),
                        &record.user,
                        "",
                    ])?,
                    Err(e) => wtr.write_record([
                        segment.as_str(),
                        "error",
                        "",
                        &e.raw_segment,
                        "",
                        "",
                        "",
                        &e.problem.to_string(),
                    ])?,
                }
            }

            Ok(String::from_utf8(wtr.into_inner()?)?)
        }
        OutputFormat::Text => {
            let lines: Vec<String> = outcomes
                .iter()
                .map(|outcome| match outcome {
                    Ok(record) => preview(record),
                    Err(e) => reply::format_error(Some(e)),
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

pub fn format_draft(draft: &ReceiptDraft, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(draft)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            wtr.write_record(CSV_HEADER)?;
            let cost = draft.cost.map(format_cost).unwrap_or_default();
            wtr.write_record([
                "1",
                if draft.is_complete() { "ok" } else { "incomplete" },
                &draft.kind,
                &draft.description,
                &draft.category,
                &cost,
                &draft.user,
                "",
            ])?;
            Ok(String::from_utf8(wtr.into_inner()?)?)
        }
        OutputFormat::Text => Ok(preview(draft)),
    }
}

/// One-line summary of a record before it is sent.
fn preview<R: LedgerRecord>(record: &R) -> String {
    let cost = record
        .cost()
        .map(|c| format!("R${}", format_cost(c)))
        .unwrap_or_else(|| "sem valor".to_string());
    format!(
        "{} | {} ({}) - {} [{}]",
        record.kind(),
        record.description(),
        record.category(),
        cost,
        record.user()
    )
}

/// Write to a file or stdout.
pub fn emit(content: &str, output: Option<&Path>) -> anyhow::Result<()> {
    if let Some(output_path) = output {
        fs::write(output_path, content)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", content);
    }
    Ok(())
}
