//! Sale record type.
//!
//! A [`SaleRecord`] captures the consumption of units from a single batch:
//! the quantity taken, the batch's price pair at the time of sale, and the
//! profit decomposition derived from them. Records are append-only — once a
//! sale is committed the record never changes, even if the source batch is
//! later depleted and removed from the ledger.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Batch, BatchId, ProductName};

/// One batch's contribution to a sale.
///
/// A sell request that spans multiple batches produces one record per batch
/// consumed. `batch_id` is a weak reference: the batch it names may have
/// been fully consumed and dropped from the ledger since.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Id of the batch the units were drawn from.
    pub batch_id: BatchId,
    /// The product sold.
    pub product: ProductName,
    /// Units drawn from the batch.
    pub quantity_sold: u32,
    /// The batch's acquisition cost per unit, snapshotted at sale time.
    pub buy_price: Decimal,
    /// The batch's asking price per unit, snapshotted at sale time.
    pub sell_price: Decimal,
    /// `sell_price - buy_price`.
    pub profit_per_unit: Decimal,
    /// `quantity_sold x profit_per_unit`.
    pub total_profit: Decimal,
    /// When the sale was committed.
    pub sold_at: DateTime<Utc>,
}

impl SaleRecord {
    /// Record the consumption of `quantity_sold` units from `batch`.
    ///
    /// Prices are copied out of the batch so the record stays valid after
    /// the batch is gone.
    #[must_use]
    pub fn from_batch(batch: &Batch, quantity_sold: u32, sold_at: DateTime<Utc>) -> Self {
        let profit_per_unit = batch.profit_per_unit();
        Self {
            batch_id: batch.id.clone(),
            product: batch.product.clone(),
            quantity_sold,
            buy_price: batch.buy_price,
            sell_price: batch.sell_price,
            profit_per_unit,
            total_profit: Decimal::from(quantity_sold) * profit_per_unit,
            sold_at,
        }
    }

    /// Revenue from this record: `quantity_sold x sell_price`.
    #[must_use]
    pub fn revenue(&self) -> Decimal {
        Decimal::from(self.quantity_sold) * self.sell_price
    }

    /// Cost of goods for this record: `quantity_sold x buy_price`.
    #[must_use]
    pub fn cost(&self) -> Decimal {
        Decimal::from(self.quantity_sold) * self.buy_price
    }
}

impl fmt::Display for SaleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {} from {} @ {} (bought @ {})",
            self.quantity_sold, self.product, self.batch_id, self.sell_price, self.buy_price
        )
    }
}
