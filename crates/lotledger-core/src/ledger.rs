//! The FIFO ledger.
//!
//! A [`Ledger`] owns an ordered queue of [`Batch`]es (arrival order), an
//! append-only log of [`SaleRecord`]s, and the counter for the next batch
//! id. All mutation goes through [`Ledger::add_batch`] and [`Ledger::sell`];
//! everything else is a read.
//!
//! The queue invariant: batches appear in arrival order, and a batch with
//! zero remaining units is never stored. Selling rebuilds the queue so that
//! every surviving batch — matching or not — keeps its original relative
//! position.

use rust_decimal::Decimal;

use crate::clock::{Clock, SystemClock};
use crate::error::LedgerError;
use crate::summary::{InventoryStatus, SalesSummary};
use crate::{Batch, BatchId, ProductName, SaleRecord};

/// Result of a sell call.
///
/// Carries the sale records created by the call in consumption order
/// (oldest batch first). A `shortfall` greater than zero means the request
/// exceeded the available stock of that product; the partial sale is still
/// committed — this is a signaled outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleOutcome {
    /// Records created by this call, oldest consumed batch first.
    pub records: Vec<SaleRecord>,
    /// Units originally requested.
    pub requested: u32,
    /// Units that could not be fulfilled.
    pub shortfall: u32,
}

impl SaleOutcome {
    /// Units actually sold by this call.
    #[must_use]
    pub const fn quantity_sold(&self) -> u32 {
        self.requested - self.shortfall
    }

    /// Whether the full requested quantity was fulfilled.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.shortfall == 0
    }

    /// Total profit across the records of this call.
    #[must_use]
    pub fn total_profit(&self) -> Decimal {
        self.records.iter().map(|r| r.total_profit).sum()
    }
}

/// A FIFO inventory ledger.
///
/// Generic over its [`Clock`] so tests can pin timestamps; production
/// ledgers use the [`SystemClock`] default.
///
/// # Examples
///
/// ```
/// use lotledger_core::Ledger;
/// use rust_decimal_macros::dec;
///
/// let mut ledger = Ledger::new();
/// ledger.add_batch("HP EliteBook", 5, dec!(100.00), dec!(150.00)).unwrap();
/// ledger.add_batch("HP EliteBook", 5, dec!(120.00), dec!(170.00)).unwrap();
///
/// // FIFO: the 7 units come from the oldest batch first.
/// let outcome = ledger.sell("HP EliteBook", 7).unwrap();
/// assert_eq!(outcome.records.len(), 2);
/// assert_eq!(outcome.records[0].quantity_sold, 5);
/// assert_eq!(outcome.records[1].quantity_sold, 2);
/// assert_eq!(outcome.total_profit(), dec!(350.00));
///
/// // The partially consumed batch stays at the front with 3 units left.
/// assert_eq!(ledger.units("HP EliteBook"), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Ledger<C = SystemClock> {
    batches: Vec<Batch>,
    sales: Vec<SaleRecord>,
    next_batch_seq: u64,
    clock: C,
}

impl Ledger {
    /// Create an empty ledger on the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Restore a ledger from persisted state, on the system clock.
    ///
    /// See [`Ledger::from_parts_with_clock`] for the validation rules.
    pub fn from_parts(
        batches: Vec<Batch>,
        sales: Vec<SaleRecord>,
        next_batch_seq: u64,
    ) -> Result<Self, LedgerError> {
        Self::from_parts_with_clock(batches, sales, next_batch_seq, SystemClock)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Ledger<C> {
    /// Create an empty ledger with an explicit clock.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            batches: Vec::new(),
            sales: Vec::new(),
            next_batch_seq: 1,
            clock,
        }
    }

    /// Restore a ledger from persisted state.
    ///
    /// The state is validated before anything is constructed, so a rejected
    /// snapshot never produces a half-built ledger:
    /// - every batch must hold at least one unit at positive prices,
    /// - batch ids must be unique,
    /// - every sale record must cover at least one unit,
    /// - the id counter must be beyond every id it has already handed out.
    pub fn from_parts_with_clock(
        batches: Vec<Batch>,
        sales: Vec<SaleRecord>,
        next_batch_seq: u64,
        clock: C,
    ) -> Result<Self, LedgerError> {
        for batch in &batches {
            if batch.quantity == 0 {
                return Err(LedgerError::CorruptState {
                    reason: format!("batch {} has zero quantity", batch.id),
                });
            }
            if batch.buy_price <= Decimal::ZERO || batch.sell_price <= Decimal::ZERO {
                return Err(LedgerError::CorruptState {
                    reason: format!("batch {} has a non-positive price", batch.id),
                });
            }
            if batches.iter().filter(|b| b.id == batch.id).count() > 1 {
                return Err(LedgerError::CorruptState {
                    reason: format!("duplicate batch id {}", batch.id),
                });
            }
        }

        for record in &sales {
            if record.quantity_sold == 0 {
                return Err(LedgerError::CorruptState {
                    reason: format!("sale from {} covers zero units", record.batch_id),
                });
            }
        }

        let max_seq = batches
            .iter()
            .map(|b| &b.id)
            .chain(sales.iter().map(|r| &r.batch_id))
            .filter_map(BatchId::sequence)
            .max()
            .unwrap_or(0);
        if next_batch_seq <= max_seq {
            return Err(LedgerError::CorruptState {
                reason: format!(
                    "next batch sequence {next_batch_seq} is not beyond highest issued id {max_seq}"
                ),
            });
        }

        Ok(Self {
            batches,
            sales,
            next_batch_seq,
            clock,
        })
    }

    /// Add a new batch to the back of the queue.
    ///
    /// Rejects non-positive quantities and prices with
    /// [`LedgerError::InvalidBatch`]; nothing is recorded on rejection.
    /// Returns the id assigned to the batch.
    pub fn add_batch(
        &mut self,
        product: impl Into<ProductName>,
        quantity: u32,
        buy_price: Decimal,
        sell_price: Decimal,
    ) -> Result<BatchId, LedgerError> {
        if quantity == 0 {
            return Err(LedgerError::InvalidBatch {
                field: "quantity",
                value: quantity.to_string(),
            });
        }
        if buy_price <= Decimal::ZERO {
            return Err(LedgerError::InvalidBatch {
                field: "buy_price",
                value: buy_price.to_string(),
            });
        }
        if sell_price <= Decimal::ZERO {
            return Err(LedgerError::InvalidBatch {
                field: "sell_price",
                value: sell_price.to_string(),
            });
        }

        let id = BatchId::from_seq(self.next_batch_seq);
        self.next_batch_seq += 1;
        self.batches.push(Batch::new(
            product,
            quantity,
            buy_price,
            sell_price,
            id.clone(),
            self.clock.now(),
        ));
        Ok(id)
    }

    /// Sell `quantity` units of `product`, consuming batches oldest-first.
    ///
    /// The queue is scanned from the front. Batches of other products are
    /// set aside without consuming anything from the request; matching
    /// batches give up `min(batch.quantity, remaining)` units each, one
    /// sale record per batch touched. A batch drained to zero is dropped; a
    /// batch with units left goes back in front of the unscanned region —
    /// it still holds the oldest stock. Finally the set-aside batches are
    /// restored ahead of everything not yet scanned, so the surviving queue
    /// reads exactly like the original arrival order.
    ///
    /// A request that exceeds the available stock commits the partial sale
    /// and reports the unfilled remainder as [`SaleOutcome::shortfall`].
    /// Selling a product the ledger has never seen is just a full
    /// shortfall. Only a zero quantity is an error, detected before any
    /// mutation.
    pub fn sell(&mut self, product: &str, quantity: u32) -> Result<SaleOutcome, LedgerError> {
        if quantity == 0 {
            return Err(LedgerError::InvalidQuantity);
        }

        let sold_at = self.clock.now();
        let mut remaining = quantity;
        let mut records = Vec::new();

        // Rebuild the queue in one pass: non-matching batches are set aside
        // in order, the partial remainder (if any) and the unscanned tail
        // follow them. Concatenation restores arrival order.
        let previous = std::mem::take(&mut self.batches);
        let mut set_aside: Vec<Batch> = Vec::new();
        let mut rest: Vec<Batch> = Vec::new();

        let mut queue = previous.into_iter();
        for mut batch in queue.by_ref() {
            if batch.product != *product {
                set_aside.push(batch);
                continue;
            }

            let taken = batch.quantity.min(remaining);
            records.push(SaleRecord::from_batch(&batch, taken, sold_at));
            remaining -= taken;
            batch.quantity -= taken;

            if !batch.is_depleted() {
                rest.push(batch);
            }
            if remaining == 0 {
                break;
            }
        }
        rest.extend(queue);

        self.batches = set_aside;
        self.batches.append(&mut rest);
        self.sales.extend(records.iter().cloned());

        Ok(SaleOutcome {
            records,
            requested: quantity,
            shortfall: remaining,
        })
    }

    /// The batch queue, oldest first.
    #[must_use]
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    /// The sales log, in commit order.
    #[must_use]
    pub fn sales(&self) -> &[SaleRecord] {
        &self.sales
    }

    /// The sequence number the next batch id will be minted from.
    #[must_use]
    pub const fn next_batch_seq(&self) -> u64 {
        self.next_batch_seq
    }

    /// Whether the ledger holds no stock.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Total units of a product currently in stock.
    #[must_use]
    pub fn units(&self, product: &str) -> u64 {
        self.batches
            .iter()
            .filter(|b| b.product == *product)
            .map(|b| u64::from(b.quantity))
            .sum()
    }

    /// Snapshot of the current stock, grouped by product.
    #[must_use]
    pub fn inventory_status(&self) -> InventoryStatus {
        InventoryStatus::collect(&self.batches)
    }

    /// Totals over the full sales log.
    #[must_use]
    pub fn sales_summary(&self) -> SalesSummary {
        SalesSummary::collect(&self.sales)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedClock;
    use rust_decimal_macros::dec;

    fn ledger() -> Ledger<FixedClock> {
        Ledger::with_clock(FixedClock::epoch())
    }

    #[test]
    fn test_add_batch_assigns_sequential_ids() {
        let mut l = ledger();
        let a = l.add_batch("X", 5, dec!(100), dec!(150)).unwrap();
        let b = l.add_batch("Y", 3, dec!(10), dec!(20)).unwrap();

        assert_eq!(a.as_str(), "BATCH-0001");
        assert_eq!(b.as_str(), "BATCH-0002");
        assert_eq!(l.next_batch_seq(), 3);
        assert_eq!(l.batches().len(), 2);
    }

    #[test]
    fn test_add_batch_rejects_non_positive_input() {
        let mut l = ledger();

        let err = l.add_batch("X", 0, dec!(100), dec!(150)).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidBatch { field: "quantity", .. }));

        let err = l.add_batch("X", 5, dec!(0), dec!(150)).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidBatch { field: "buy_price", .. }));

        let err = l.add_batch("X", 5, dec!(100), dec!(-1)).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidBatch { field: "sell_price", .. }));

        // Rejections consume nothing: no batch stored, no id burned.
        assert!(l.is_empty());
        assert_eq!(l.next_batch_seq(), 1);
    }

    #[test]
    fn test_sell_spanning_two_batches() {
        let mut l = ledger();
        l.add_batch("X", 5, dec!(100), dec!(150)).unwrap();
        l.add_batch("X", 5, dec!(120), dec!(170)).unwrap();

        let outcome = l.sell("X", 7).unwrap();

        assert!(outcome.is_complete());
        assert_eq!(outcome.records.len(), 2);

        let first = &outcome.records[0];
        assert_eq!(first.quantity_sold, 5);
        assert_eq!(first.buy_price, dec!(100));
        assert_eq!(first.sell_price, dec!(150));
        assert_eq!(first.total_profit, dec!(250));

        let second = &outcome.records[1];
        assert_eq!(second.quantity_sold, 2);
        assert_eq!(second.buy_price, dec!(120));
        assert_eq!(second.sell_price, dec!(170));
        assert_eq!(second.total_profit, dec!(100));

        assert_eq!(outcome.total_profit(), dec!(350));

        // One batch left: 3 x X @ 120 -> 170.
        assert_eq!(l.batches().len(), 1);
        assert_eq!(l.batches()[0].quantity, 3);
        assert_eq!(l.batches()[0].buy_price, dec!(120));
    }

    #[test]
    fn test_sell_exact_batch_consumes_only_that_batch() {
        let mut l = ledger();
        l.add_batch("X", 5, dec!(100), dec!(150)).unwrap();
        l.add_batch("X", 5, dec!(120), dec!(170)).unwrap();

        let outcome = l.sell("X", 5).unwrap();

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].quantity_sold, 5);
        assert_eq!(l.batches().len(), 1);
        assert_eq!(l.batches()[0].id.as_str(), "BATCH-0002");
        assert_eq!(l.batches()[0].quantity, 5);
    }

    #[test]
    fn test_sell_one_more_than_oldest_spans_two() {
        let mut l = ledger();
        l.add_batch("X", 5, dec!(100), dec!(150)).unwrap();
        l.add_batch("X", 5, dec!(120), dec!(170)).unwrap();

        let outcome = l.sell("X", 6).unwrap();

        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[0].quantity_sold, 5);
        assert_eq!(outcome.records[1].quantity_sold, 1);
    }

    #[test]
    fn test_sell_shortfall_commits_partial() {
        let mut l = ledger();
        l.add_batch("X", 5, dec!(10), dec!(20)).unwrap();

        let outcome = l.sell("X", 10).unwrap();

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].quantity_sold, 5);
        assert_eq!(outcome.shortfall, 5);
        assert_eq!(outcome.quantity_sold(), 5);
        assert!(!outcome.is_complete());

        // All matching stock is gone, and the partial sale is on the log.
        assert_eq!(l.units("X"), 0);
        assert!(l.is_empty());
        assert_eq!(l.sales().len(), 1);
    }

    #[test]
    fn test_sell_unknown_product_is_full_shortfall() {
        let mut l = ledger();
        l.add_batch("X", 5, dec!(10), dec!(20)).unwrap();

        let outcome = l.sell("Nonesuch", 3).unwrap();

        assert!(outcome.records.is_empty());
        assert_eq!(outcome.shortfall, 3);
        assert_eq!(l.units("X"), 5);
        assert!(l.sales().is_empty());
    }

    #[test]
    fn test_sell_zero_quantity_rejected_before_scanning() {
        let mut l = ledger();
        l.add_batch("X", 5, dec!(10), dec!(20)).unwrap();

        let err = l.sell("X", 0).unwrap_err();
        assert_eq!(err, LedgerError::InvalidQuantity);

        assert_eq!(l.units("X"), 5);
        assert!(l.sales().is_empty());
    }

    #[test]
    fn test_sell_preserves_interleaved_order() {
        let mut l = ledger();
        l.add_batch("X", 3, dec!(10), dec!(20)).unwrap(); // BATCH-0001
        l.add_batch("Y", 3, dec!(10), dec!(20)).unwrap(); // BATCH-0002
        l.add_batch("X", 3, dec!(10), dec!(20)).unwrap(); // BATCH-0003

        l.sell("Y", 3).unwrap();

        let ids: Vec<&str> = l.batches().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["BATCH-0001", "BATCH-0003"]);
        assert_eq!(l.batches()[0].quantity, 3);
        assert_eq!(l.batches()[1].quantity, 3);
    }

    #[test]
    fn test_partial_batch_stays_in_front_of_skipped_region() {
        let mut l = ledger();
        l.add_batch("Y", 2, dec!(10), dec!(20)).unwrap(); // BATCH-0001
        l.add_batch("X", 5, dec!(10), dec!(20)).unwrap(); // BATCH-0002
        l.add_batch("X", 5, dec!(10), dec!(20)).unwrap(); // BATCH-0003
        l.add_batch("Y", 2, dec!(10), dec!(20)).unwrap(); // BATCH-0004

        // Consumes BATCH-0002 fully, BATCH-0003 partially. BATCH-0004 is
        // never scanned.
        l.sell("X", 7).unwrap();

        let ids: Vec<&str> = l.batches().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["BATCH-0001", "BATCH-0003", "BATCH-0004"]);
        assert_eq!(l.batches()[1].quantity, 3);
    }

    #[test]
    fn test_sell_appends_to_sales_log_in_order() {
        let mut l = ledger();
        l.add_batch("X", 5, dec!(100), dec!(150)).unwrap();
        l.add_batch("X", 5, dec!(120), dec!(170)).unwrap();

        l.sell("X", 7).unwrap();
        l.sell("X", 3).unwrap();

        let log = l.sales();
        assert_eq!(log.len(), 3);
        assert_eq!(log[0].batch_id.as_str(), "BATCH-0001");
        assert_eq!(log[1].batch_id.as_str(), "BATCH-0002");
        assert_eq!(log[2].batch_id.as_str(), "BATCH-0002");
        assert_eq!(log[2].quantity_sold, 3);
    }

    #[test]
    fn test_depleted_batch_id_not_reused() {
        let mut l = ledger();
        l.add_batch("X", 5, dec!(10), dec!(20)).unwrap();
        l.sell("X", 5).unwrap();

        let id = l.add_batch("X", 5, dec!(10), dec!(20)).unwrap();
        assert_eq!(id.as_str(), "BATCH-0002");
    }

    #[test]
    fn test_from_parts_roundtrip() {
        let mut l = ledger();
        l.add_batch("X", 5, dec!(100), dec!(150)).unwrap();
        l.add_batch("Y", 2, dec!(10), dec!(20)).unwrap();
        l.sell("X", 3).unwrap();

        let restored = Ledger::from_parts(
            l.batches().to_vec(),
            l.sales().to_vec(),
            l.next_batch_seq(),
        )
        .unwrap();

        assert_eq!(restored.batches(), l.batches());
        assert_eq!(restored.sales(), l.sales());
        assert_eq!(restored.next_batch_seq(), l.next_batch_seq());
    }

    #[test]
    fn test_from_parts_rejects_zero_quantity_batch() {
        let batch = Batch::new(
            "X",
            0,
            dec!(10),
            dec!(20),
            BatchId::from_seq(1),
            chrono::DateTime::UNIX_EPOCH,
        );
        let err = Ledger::from_parts(vec![batch], Vec::new(), 2).unwrap_err();
        assert!(matches!(err, LedgerError::CorruptState { .. }));
    }

    #[test]
    fn test_from_parts_rejects_stale_counter() {
        let batch = Batch::new(
            "X",
            5,
            dec!(10),
            dec!(20),
            BatchId::from_seq(7),
            chrono::DateTime::UNIX_EPOCH,
        );
        let err = Ledger::from_parts(vec![batch], Vec::new(), 7).unwrap_err();
        assert!(matches!(err, LedgerError::CorruptState { .. }));
    }

    #[test]
    fn test_from_parts_rejects_duplicate_ids() {
        let mk = |seq| {
            Batch::new(
                "X",
                5,
                dec!(10),
                dec!(20),
                BatchId::from_seq(seq),
                chrono::DateTime::UNIX_EPOCH,
            )
        };
        let mut dup = mk(2);
        dup.id = BatchId::from_seq(1);
        let err = Ledger::from_parts(vec![mk(1), dup], Vec::new(), 3).unwrap_err();
        assert!(matches!(err, LedgerError::CorruptState { .. }));
    }

    #[test]
    fn test_counter_survives_depletion_through_parts() {
        let mut l = ledger();
        l.add_batch("X", 5, dec!(10), dec!(20)).unwrap();
        l.sell("X", 5).unwrap();

        // The only trace of BATCH-0001 is the sales log; the counter must
        // still be forced beyond it.
        let err = Ledger::from_parts(Vec::new(), l.sales().to_vec(), 1).unwrap_err();
        assert!(matches!(err, LedgerError::CorruptState { .. }));

        let restored = Ledger::from_parts(Vec::new(), l.sales().to_vec(), 2).unwrap();
        assert_eq!(restored.next_batch_seq(), 2);
    }
}
