//! Interactive ledger shell.
//!
//! The primary way to drive a ledger: a rustyline REPL with word commands
//! for the ledger operations and dot-commands for shell utilities.
//!
//! # Usage
//!
//! ```bash
//! lotledger shell              # start with an empty ledger
//! lotledger shell ledger.json  # load a saved ledger first
//! ```

use anyhow::{Context, Result};
use lotledger_core::{BatchId, Decimal, Ledger};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{DefaultEditor, Editor};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::cmd::demo;
use crate::report;

/// Start the interactive shell.
#[derive(clap::Args, Debug, Default)]
pub struct Args {
    /// Ledger file to load on startup and use as the default save target
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    Add {
        product: String,
        quantity: u32,
        buy_price: Decimal,
        sell_price: Decimal,
    },
    Sell {
        product: String,
        quantity: u32,
    },
    Status,
    Summary,
    Save {
        path: Option<PathBuf>,
    },
    Load {
        path: Option<PathBuf>,
    },
    Demo,
    Help,
    Stats,
    Exit,
}

/// Parse one input line into a shell command.
///
/// Product names may contain spaces, so numeric arguments are taken from
/// the END of the line: `add HP EliteBook 5 100 150` reads as product
/// `HP EliteBook`, quantity 5, buy 100, sell 150.
fn parse_command(line: &str) -> Result<ShellCommand, String> {
    if let Some(cmd) = line.strip_prefix('.') {
        return match cmd.trim() {
            "help" => Ok(ShellCommand::Help),
            "exit" | "quit" => Ok(ShellCommand::Exit),
            "stats" => Ok(ShellCommand::Stats),
            other => Err(format!("unknown command \".{other}\"")),
        };
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&command, args)) = tokens.split_first() else {
        return Err("empty command".to_string());
    };

    match command {
        "add" => {
            let Some((numeric, product)) = split_trailing(args, 3) else {
                return Err("usage: add <product> <quantity> <buy-price> <sell-price>".to_string());
            };
            Ok(ShellCommand::Add {
                product,
                quantity: parse_quantity(numeric[0])?,
                buy_price: parse_price(numeric[1], "buy price")?,
                sell_price: parse_price(numeric[2], "sell price")?,
            })
        }
        "sell" => {
            let Some((numeric, product)) = split_trailing(args, 1) else {
                return Err("usage: sell <product> <quantity>".to_string());
            };
            Ok(ShellCommand::Sell {
                product,
                quantity: parse_quantity(numeric[0])?,
            })
        }
        "status" | "inventory" => Ok(ShellCommand::Status),
        "summary" => Ok(ShellCommand::Summary),
        "save" => Ok(ShellCommand::Save {
            path: args.first().map(PathBuf::from),
        }),
        "load" => Ok(ShellCommand::Load {
            path: args.first().map(PathBuf::from),
        }),
        "demo" => Ok(ShellCommand::Demo),
        "help" => Ok(ShellCommand::Help),
        "exit" | "quit" => Ok(ShellCommand::Exit),
        other => Err(format!("unknown command \"{other}\" (try .help)")),
    }
}

/// Split `args` into its last `n` tokens and the joined rest.
///
/// Returns `None` when there is no product name left over.
fn split_trailing<'a>(args: &'a [&'a str], n: usize) -> Option<(&'a [&'a str], String)> {
    if args.len() < n + 1 {
        return None;
    }
    let (product, numeric) = args.split_at(args.len() - n);
    Some((numeric, product.join(" ")))
}

fn parse_quantity(token: &str) -> Result<u32, String> {
    match token.parse::<i64>() {
        Ok(n) if n > 0 => u32::try_from(n).map_err(|_| format!("quantity {n} is too large")),
        Ok(n) => Err(format!("quantity must be positive (got {n})")),
        Err(_) => Err(format!("\"{token}\" is not a valid quantity")),
    }
}

fn parse_price(token: &str, what: &str) -> Result<Decimal, String> {
    match token.parse::<Decimal>() {
        Ok(price) if price > Decimal::ZERO => Ok(price),
        Ok(price) => Err(format!("{what} must be positive (got {price})")),
        Err(_) => Err(format!("\"{token}\" is not a valid {what}")),
    }
}

/// Get the history file path.
fn get_history_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("lotledger").join("history"))
}

/// Run the interactive shell.
pub fn run(args: &Args) -> Result<()> {
    let mut ledger = match &args.file {
        Some(path) if path.exists() => lotledger_store::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        _ => Ledger::new(),
    };

    let mut rl: Editor<(), DefaultHistory> = DefaultEditor::new()?;

    if let Some(history_path) = get_history_path() {
        if let Some(parent) = history_path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let _ = rl.load_history(&history_path);
    }

    match &args.file {
        Some(path) if path.exists() => {
            println!("Loaded ledger from \"{}\"", path.display());
        }
        Some(path) => println!(
            "Starting empty ledger (\"{}\" does not exist yet)",
            path.display()
        ),
        None => println!("Starting empty ledger"),
    }
    println!(
        "Ready with {} batches and {} sale records. Type .help for commands.",
        ledger.batches().len(),
        ledger.sales().len()
    );
    println!();

    let mut default_file = args.file.clone();

    loop {
        let readline = rl.readline("lotledger> ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                let command = match parse_command(line) {
                    Ok(command) => command,
                    Err(message) => {
                        eprintln!("error: {message}");
                        continue;
                    }
                };

                if matches!(command, ShellCommand::Exit) {
                    println!("exit");
                    break;
                }
                if let Err(e) = execute(command, &mut ledger, &mut default_file) {
                    eprintln!("error: {e:#}");
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("(interrupted)");
            }
            Err(ReadlineError::Eof) => {
                println!("exit");
                break;
            }
            Err(err) => {
                eprintln!("error: {err}");
                break;
            }
        }
    }

    if let Some(history_path) = get_history_path() {
        let _ = rl.save_history(&history_path);
    }

    Ok(())
}

/// Execute a parsed command against the live ledger.
fn execute(
    command: ShellCommand,
    ledger: &mut Ledger,
    default_file: &mut Option<PathBuf>,
) -> Result<()> {
    let mut stdout = io::stdout();

    match command {
        ShellCommand::Add {
            product,
            quantity,
            buy_price,
            sell_price,
        } => {
            let id = ledger.add_batch(product, quantity, buy_price, sell_price)?;
            tracing::debug!(%id, "batch added");
            if let Some(batch) = ledger.batches().last() {
                println!("Added {batch}");
            }
        }
        ShellCommand::Sell { product, quantity } => {
            let outcome = ledger.sell(&product, quantity)?;
            for record in &outcome.records {
                println!("Sold {record}");
            }
            if outcome.shortfall > 0 {
                println!(
                    "warning: could not sell {} units - insufficient stock",
                    outcome.shortfall
                );
            }
            if !outcome.records.is_empty() {
                println!("Sale complete. Total profit: {}", outcome.total_profit());
            }
        }
        ShellCommand::Status => {
            report::write_inventory(ledger.batches(), &ledger.inventory_status(), &mut stdout)?;
        }
        ShellCommand::Summary => {
            report::write_summary(&ledger.sales_summary(), &mut stdout)?;
        }
        ShellCommand::Save { path } => {
            let Some(target) = path.or_else(|| default_file.clone()) else {
                anyhow::bail!("no file given (usage: save <file>)");
            };
            lotledger_store::save(&target, ledger)
                .with_context(|| format!("failed to save {}", target.display()))?;
            *default_file = Some(target.clone());
            println!("Saved ledger to \"{}\"", target.display());
        }
        ShellCommand::Load { path } => {
            let Some(target) = path.or_else(|| default_file.clone()) else {
                anyhow::bail!("no file given (usage: load <file>)");
            };
            // Build the new ledger first; the live one is replaced only on
            // a fully successful load.
            let loaded = lotledger_store::load(&target)
                .with_context(|| format!("failed to load {}", target.display()))?;
            *ledger = loaded;
            *default_file = Some(target.clone());
            println!(
                "Loaded {} batches and {} sale records from \"{}\"",
                ledger.batches().len(),
                ledger.sales().len(),
                target.display()
            );
        }
        ShellCommand::Demo => {
            demo::run(&mut stdout)?;
        }
        ShellCommand::Help => print_help(),
        ShellCommand::Stats => {
            println!("Batches in stock: {}", ledger.batches().len());
            println!("Sale records: {}", ledger.sales().len());
            println!(
                "Next batch id: {}",
                BatchId::from_seq(ledger.next_batch_seq())
            );
        }
        // Exit is handled by the loop before execute is called.
        ShellCommand::Exit => {}
    }

    stdout.flush()?;
    Ok(())
}

fn print_help() {
    println!("Ledger commands:");
    println!("  add <product> <qty> <buy> <sell>   Add a new batch");
    println!("  sell <product> <qty>               Sell units, oldest batch first");
    println!("  status                             Show current inventory");
    println!("  summary                            Show sales summary");
    println!("  save [FILE]                        Save the ledger as JSON");
    println!("  load [FILE]                        Load a ledger from JSON");
    println!("  demo                               Run the scripted walkthrough");
    println!();
    println!("Shell utility commands (prefix with .):");
    println!("  .help            Show this help");
    println!("  .stats           Show ledger statistics");
    println!("  .exit, .quit     Exit the shell");
    println!();
}
