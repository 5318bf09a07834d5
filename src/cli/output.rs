use crate::{ParseReport, Signature};
use anyhow::{Context, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonOutcome<'a> {
    origin: &'a str,
    input: &'a str,
    signature: Option<&'a Signature>,
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    parsed: usize,
    errors: usize,
    results: Vec<JsonOutcome<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonSplit<'a> {
    source: &'a str,
    delimiters: &'a [String],
    fragments: &'a [String],
}

pub fn render_report(report: &ParseReport, colored_output: bool, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text_report(report, colored_output)),
        OutputFormat::Json => render_json_report(report),
    }
}

fn render_text_report(report: &ParseReport, colored_output: bool) -> String {
    let mut out = String::new();

    for outcome in &report.outcomes {
        let origin = if colored_output {
            outcome.origin.blue().bold().to_string()
        } else {
            outcome.origin.clone()
        };

        match &outcome.result {
            Ok(sig) => {
                let _ = writeln!(out, "{}  {}", origin, sig);
                let _ = write!(out, "{}", render_fields(sig, colored_output));
            }
            Err(e) => {
                if colored_output {
                    let _ = writeln!(out, "{}  {} {}", origin, "✗".red().bold(), e.to_string().red());
                } else {
                    let _ = writeln!(out, "{}  ✗ {}", origin, e);
                }
            }
        }
    }

    out
}

fn render_fields(sig: &Signature, colored_output: bool) -> String {
    let modifier = sig
        .access_modifier()
        .map(|m| m.to_string())
        .unwrap_or_else(|| "-".to_string());
    let arguments = if sig.arguments().is_empty() {
        "-".to_string()
    } else {
        sig.arguments()
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let rows = [
        ("access modifier", modifier),
        ("return type", sig.return_type().to_string()),
        ("method name", sig.method_name().to_string()),
        ("arguments", arguments),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        let label = format!("{:<16}", format!("{}:", label));
        if colored_output {
            let _ = writeln!(out, "    {} {}", label.dimmed(), value.green());
        } else {
            let _ = writeln!(out, "    {} {}", label, value);
        }
    }
    out
}

fn render_json_report(report: &ParseReport) -> Result<String> {
    let results = report
        .outcomes
        .iter()
        .map(|o| JsonOutcome {
            origin: &o.origin,
            input: &o.input,
            signature: o.result.as_ref().ok(),
            error: o.result.as_ref().err().map(|e| e.to_string()),
        })
        .collect();

    let output = JsonReport {
        parsed: report.parsed_count(),
        errors: report.error_count(),
        results,
    };

    serde_json::to_string_pretty(&output)
        .map(|json| json + "\n")
        .context("Failed to serialize report")
}

pub fn render_split(
    source: &str,
    delimiters: &[String],
    fragments: &[String],
    colored_output: bool,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for (i, fragment) in fragments.iter().enumerate() {
                let index = format!("{:>3}", i);
                if colored_output {
                    let _ = writeln!(out, "{} {}", index.dimmed(), fragment.green());
                } else {
                    let _ = writeln!(out, "{} {}", index, fragment);
                }
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let output = JsonSplit {
                source,
                delimiters,
                fragments,
            };
            serde_json::to_string_pretty(&output)
                .map(|json| json + "\n")
                .context("Failed to serialize split result")
        }
    }
}

pub fn print_summary(report: &ParseReport, colored: bool) {
    println!();
    let total = report.outcomes.len();
    let errors = report.error_count();
    let noun = if total == 1 { "signature" } else { "signatures" };

    if errors == 0 {
        let msg = format!("✓ {} {} parsed", total, noun);
        if colored {
            println!("{}", msg.green().bold());
        } else {
            println!("{}", msg);
        }
    } else {
        let error_word = if errors == 1 { "error" } else { "errors" };
        if colored {
            println!(
                "{} {} {} in {} {}",
                "✗".red().bold(),
                errors.to_string().red().bold(),
                error_word,
                total,
                noun
            );
        } else {
            println!("✗ {} {} in {} {}", errors, error_word, total, noun);
        }
    }
}
