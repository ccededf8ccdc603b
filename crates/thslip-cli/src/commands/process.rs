//! Process command - extract a transaction from a single OCR text file.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use thslip_core::{ProcessedSlip, SlipProcessor, TransactionKind};

use super::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// OCR text file, or "-" for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Transaction type: income or expense (default from config)
    #[arg(short, long)]
    kind: Option<TransactionKind>,

    /// Show processing time
    #[arg(long)]
    show_timing: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    let text = read_input(&args.input)?;
    if text.trim().is_empty() {
        anyhow::bail!("Input contains no OCR text: {}", args.input.display());
    }

    info!("Processing slip text: {}", args.input.display());

    let kind = args.kind.unwrap_or(config.output.default_kind);
    let processor = SlipProcessor::new(config);
    let slip = processor.process(&text, kind)?;

    // Format output
    let output = format_slip(&slip, args.format)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_timing {
        println!();
        println!(
            "{} Processing time: {}ms",
            style("ℹ").blue(),
            slip.processing_time_ms
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn read_input(input: &Path) -> anyhow::Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    Ok(fs::read_to_string(input)?)
}

pub fn format_slip(slip: &ProcessedSlip, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(slip)?),
        OutputFormat::Csv => format_csv(slip),
        OutputFormat::Text => Ok(format_text(slip)),
    }
}

fn format_csv(slip: &ProcessedSlip) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    let tx = &slip.transaction;

    // Write header
    wtr.write_record([
        "type",
        "amount",
        "date",
        "time",
        "reference",
        "bank",
        "sender",
        "receiver",
        "category",
        "subscription",
    ])?;

    // Write data
    let amount = tx.amount.to_string();
    wtr.write_record([
        tx.kind.as_str(),
        amount.as_str(),
        tx.date.as_str(),
        tx.time.as_str(),
        tx.reference.as_str(),
        tx.bank.as_str(),
        tx.sender.as_str(),
        tx.receiver.as_str(),
        tx.category.as_str(),
        slip.subscription.as_ref().map_or("", |s| s.name.as_str()),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(slip: &ProcessedSlip) -> String {
    let tx = &slip.transaction;
    let mut output = String::new();

    output.push_str(&format!("Bank: {}\n", tx.bank));
    output.push_str(&format!("Type: {}\n", tx.kind));
    output.push_str(&format!("Amount: {:.2} THB\n", tx.amount));
    output.push_str(&format!("Date: {}\n", tx.date));
    if !tx.time.is_empty() {
        output.push_str(&format!("Time: {}\n", tx.time));
    }
    if !tx.reference.is_empty() {
        output.push_str(&format!("Reference: {}\n", tx.reference));
    }
    if !tx.sender.is_empty() {
        output.push_str(&format!("From: {}\n", tx.sender));
    }
    if !tx.receiver.is_empty() {
        output.push_str(&format!("To: {}\n", tx.receiver));
    }

    if let Some(sub) = &slip.subscription {
        output.push('\n');
        output.push_str(&format!(
            "Subscription: {} ({}, {})\n",
            sub.name,
            sub.category,
            sub.billing_cycle.as_str()
        ));
        if let Some(next) = &sub.next_billing_date {
            output.push_str(&format!("Next billing: {}\n", next));
        }
    }

    output
}
