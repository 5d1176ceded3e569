//! Output formatting for parse outcomes.

use option_schema_core::{ParseOutcome, ParsedValue};

/// Supported output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}

/// Formats a parse outcome in the requested output format.
pub fn format_outcome(outcome: &ParseOutcome, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(outcome)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(outcome).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Table => Ok(outcome_to_table(outcome)),
    }
}

fn outcome_to_table(outcome: &ParseOutcome) -> String {
    let mut out = String::new();

    if !outcome.options.is_empty() {
        out.push_str("Options:\n");
        let max_name = outcome.options.keys().map(String::len).max().unwrap_or(4);
        for (name, value) in &outcome.options {
            out.push_str(&format!("  {name:<max_name$}  {}\n", value_cell(value)));
        }
    }

    if !outcome.positional.is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str("Positional:\n");
        for arg in &outcome.positional {
            out.push_str(&format!("  {arg}\n"));
        }
    }

    if out.is_empty() {
        out.push_str("(nothing parsed)\n");
    }
    out
}

fn value_cell(value: &ParsedValue) -> String {
    match value {
        ParsedValue::Flag(set) => set.to_string(),
        ParsedValue::Scalar(value) => value.clone(),
        ParsedValue::Count(count) => count.to_string(),
        ParsedValue::Values(values) => values.join(", "),
    }
}
