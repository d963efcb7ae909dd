//! lotledger - FIFO inventory ledger.
//!
//! Tracks inventory lots with their own buy/sell price pairs and disposes
//! of them oldest-first, recording per-sale profit.

use clap::{Parser, Subcommand};
use lotledger::cmd::{demo, report_cmd, shell};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// FIFO inventory ledger with per-sale profit tracking.
#[derive(Parser, Debug)]
#[command(name = "lotledger")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive ledger shell (the default)
    Shell(shell::Args),
    /// Print current inventory from a saved ledger
    Status(report_cmd::StatusArgs),
    /// Print the sales summary from a saved ledger
    Summary(report_cmd::SummaryArgs),
    /// Run the scripted FIFO walkthrough
    Demo,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout is for reports.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => shell::run(&shell::Args::default()),
        Some(Command::Shell(args)) => shell::run(&args),
        Some(Command::Status(args)) => report_cmd::status(&args),
        Some(Command::Summary(args)) => report_cmd::summary(&args),
        Some(Command::Demo) => demo::run(&mut io::stdout()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
