//! Console rendering of ledger reports.
//!
//! All renderers write into an [`io::Write`] so tests can capture output.

use std::io::{self, Write};

use lotledger_core::{Batch, InventoryStatus, SalesSummary};

const RULE_WIDTH: usize = 60;

fn rule<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", "=".repeat(RULE_WIDTH))
}

/// Render the FIFO queue and per-product breakdown as text.
pub fn write_inventory<W: Write>(
    batches: &[Batch],
    status: &InventoryStatus,
    writer: &mut W,
) -> io::Result<()> {
    rule(writer)?;
    writeln!(writer, "CURRENT INVENTORY (FIFO order)")?;
    rule(writer)?;

    if batches.is_empty() {
        writeln!(writer, "No items in inventory")?;
        return Ok(());
    }

    for (i, batch) in batches.iter().enumerate() {
        writeln!(writer, "{}. {batch}", i + 1)?;
    }

    for product in &status.products {
        writeln!(writer)?;
        writeln!(writer, "{}:", product.product)?;
        writeln!(writer, "  Units: {}", product.total_quantity)?;
        writeln!(writer, "  Buy value: {}", product.total_buy_value)?;
        writeln!(writer, "  Potential revenue: {}", product.potential_revenue)?;
        writeln!(writer, "  Expected profit: {}", product.expected_profit())?;
        for batch in &product.batches {
            writeln!(
                writer,
                "    {}  {} @ {} -> {}  (added {})",
                batch.id,
                batch.quantity,
                batch.buy_price,
                batch.sell_price,
                batch.created_at.format("%Y-%m-%d %H:%M"),
            )?;
        }
    }

    writeln!(writer)?;
    writeln!(writer, "Total units: {}", status.total_units)?;
    writeln!(writer, "Total buy value: {}", status.total_buy_value)?;
    writeln!(
        writer,
        "Total potential revenue: {}",
        status.total_potential_revenue
    )?;
    rule(writer)
}

/// Render the sales summary as text.
pub fn write_summary<W: Write>(summary: &SalesSummary, writer: &mut W) -> io::Result<()> {
    rule(writer)?;
    writeln!(writer, "SALES SUMMARY")?;
    rule(writer)?;
    writeln!(writer, "Units sold: {}", summary.units_sold)?;
    writeln!(writer, "Sales records: {}", summary.sales_count)?;
    writeln!(writer, "Total revenue: {}", summary.total_revenue)?;
    writeln!(writer, "Total cost: {}", summary.total_cost)?;
    writeln!(writer, "Total profit: {}", summary.total_profit)?;
    writeln!(
        writer,
        "Profit margin: {}%",
        summary.profit_margin.round_dp(2)
    )?;
    rule(writer)
}

/// Render the inventory status as pretty JSON.
pub fn write_inventory_json<W: Write>(status: &InventoryStatus, writer: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, status)?;
    writeln!(writer)
}

/// Render the sales summary as pretty JSON.
pub fn write_summary_json<W: Write>(summary: &SalesSummary, writer: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, summary)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotledger_core::{FixedClock, Ledger};
    use rust_decimal_macros::dec;

    fn ledger() -> Ledger<FixedClock> {
        let mut l = Ledger::with_clock(FixedClock::epoch());
        l.add_batch("HP EliteBook", 5, dec!(100.00), dec!(150.00)).unwrap();
        l.add_batch("ThinkPad", 3, dec!(80.00), dec!(110.00)).unwrap();
        l
    }

    #[test]
    fn test_inventory_lists_queue_in_order() {
        let l = ledger();
        let mut out = Vec::new();
        write_inventory(l.batches(), &l.inventory_status(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("1. BATCH-0001: 5 x HP EliteBook @ 100.00 -> 150.00"));
        assert!(text.contains("2. BATCH-0002: 3 x ThinkPad @ 80.00 -> 110.00"));
        assert!(text.contains("Total units: 8"));
        assert!(text.contains("Expected profit: 250.00"));
    }

    #[test]
    fn test_empty_inventory() {
        let l: Ledger = Ledger::new();
        let mut out = Vec::new();
        write_inventory(l.batches(), &l.inventory_status(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("No items in inventory"));
    }

    #[test]
    fn test_summary_includes_margin_percentage() {
        let mut l = ledger();
        l.sell("HP EliteBook", 5).unwrap();

        let mut out = Vec::new();
        write_summary(&l.sales_summary(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Units sold: 5"));
        assert!(text.contains("Total revenue: 750.00"));
        assert!(text.contains("Total profit: 250.00"));
        // 250/750 = 33.33%
        assert!(text.contains("Profit margin: 33.33%"));
    }

    #[test]
    fn test_json_output_parses_back() {
        let l = ledger();
        let mut out = Vec::new();
        write_inventory_json(&l.inventory_status(), &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["total_units"], 8);
        assert_eq!(value["products"][0]["product"], "HP EliteBook");
    }
}
