//! One-shot reports over a saved ledger file.
//!
//! # Usage
//!
//! ```bash
//! lotledger status ledger.json
//! lotledger summary ledger.json --format json
//! ```

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io;
use std::path::PathBuf;

use crate::report;

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// JSON output for tooling
    Json,
}

/// Print the current inventory from a saved ledger.
#[derive(clap::Args, Debug)]
pub struct StatusArgs {
    /// The ledger file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text", value_enum)]
    pub format: OutputFormat,
}

/// Print the sales summary from a saved ledger.
#[derive(clap::Args, Debug)]
pub struct SummaryArgs {
    /// The ledger file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text", value_enum)]
    pub format: OutputFormat,
}

/// Run the status report.
pub fn status(args: &StatusArgs) -> Result<()> {
    let ledger = lotledger_store::load(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;
    tracing::debug!(batches = ledger.batches().len(), "ledger loaded");

    let mut stdout = io::stdout();
    match args.format {
        OutputFormat::Text => {
            report::write_inventory(ledger.batches(), &ledger.inventory_status(), &mut stdout)?;
        }
        OutputFormat::Json => {
            report::write_inventory_json(&ledger.inventory_status(), &mut stdout)?;
        }
    }
    Ok(())
}

/// Run the summary report.
pub fn summary(args: &SummaryArgs) -> Result<()> {
    let ledger = lotledger_store::load(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;
    tracing::debug!(sales = ledger.sales().len(), "ledger loaded");

    let mut stdout = io::stdout();
    match args.format {
        OutputFormat::Text => {
            report::write_summary(&ledger.sales_summary(), &mut stdout)?;
        }
        OutputFormat::Json => {
            report::write_summary_json(&ledger.sales_summary(), &mut stdout)?;
        }
    }
    Ok(())
}
