//! Scripted walkthrough of the FIFO ledger.
//!
//! Builds a fresh ledger, restocks the same product twice at different
//! cost bases, then sells through the batch boundary so the per-batch
//! profit decomposition is visible. The three sales drain the stock
//! exactly.

use anyhow::Result;
use lotledger_core::Ledger;
use rust_decimal::Decimal;
use std::io::Write;

use crate::report;

const PRODUCT: &str = "HP EliteBook";

/// Run the walkthrough, writing narration and reports to `writer`.
pub fn run<W: Write>(writer: &mut W) -> Result<()> {
    let mut ledger = Ledger::new();

    writeln!(writer, "FIFO ledger walkthrough: {PRODUCT}")?;
    writeln!(writer)?;

    writeln!(writer, "Restocking: 5 units bought at 100.00, asking 150.00")?;
    ledger.add_batch(PRODUCT, 5, price(100), price(150))?;
    writeln!(writer, "Restocking: 5 units bought at 120.00, asking 170.00")?;
    ledger.add_batch(PRODUCT, 5, price(120), price(170))?;
    writeln!(writer)?;
    report::write_inventory(ledger.batches(), &ledger.inventory_status(), writer)?;
    writeln!(writer)?;

    for quantity in [3u32, 4, 3] {
        writeln!(writer, "Customer buys {quantity} x {PRODUCT}")?;
        let outcome = ledger.sell(PRODUCT, quantity)?;
        for record in &outcome.records {
            writeln!(writer, "  Sold {record}")?;
        }
        if outcome.shortfall > 0 {
            writeln!(
                writer,
                "  warning: could not sell {} units - insufficient stock",
                outcome.shortfall
            )?;
        }
        writeln!(writer, "  Profit on this sale: {}", outcome.total_profit())?;
        writeln!(writer)?;
    }

    report::write_inventory(ledger.batches(), &ledger.inventory_status(), writer)?;
    writeln!(writer)?;
    report::write_summary(&ledger.sales_summary(), writer)?;

    Ok(())
}

/// Whole-unit price with two decimal places, e.g. `price(100)` is 100.00.
fn price(units: i64) -> Decimal {
    Decimal::new(units * 100, 2)
}
