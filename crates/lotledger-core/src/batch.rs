//! Batch type representing an inventory lot.
//!
//! A [`Batch`] is a discrete lot of a product acquired at one point in time
//! with its own buy/sell price pair. Batches queue up in arrival order and
//! are consumed oldest-first when the product is sold.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ProductName;

/// The printable prefix of every batch id.
pub const BATCH_ID_PREFIX: &str = "BATCH-";

/// A batch identifier.
///
/// Ids are assigned monotonically in creation order and formatted as the
/// fixed prefix plus a zero-padded sequence number: `BATCH-0001`,
/// `BATCH-0042`. Sequence numbers past 9999 widen naturally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchId(String);

impl BatchId {
    /// Create a batch id from its sequence number.
    #[must_use]
    pub fn from_seq(seq: u64) -> Self {
        Self(format!("{BATCH_ID_PREFIX}{seq:04}"))
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Recover the sequence number this id was created from.
    ///
    /// Returns `None` for ids that do not carry the expected prefix and a
    /// numeric suffix (e.g. hand-edited persistence files).
    #[must_use]
    pub fn sequence(&self) -> Option<u64> {
        self.0.strip_prefix(BATCH_ID_PREFIX)?.parse().ok()
    }
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A batch of items with a specific buy and sell price.
///
/// `quantity` is the only mutable field: it decreases as the batch is
/// consumed by sales, and the ledger removes the batch once it reaches zero.
/// Both prices are fixed at batch creation and never updated.
///
/// # Examples
///
/// ```
/// use lotledger_core::{Batch, BatchId};
/// use rust_decimal_macros::dec;
/// use chrono::Utc;
///
/// let batch = Batch::new(
///     "HP EliteBook",
///     5,
///     dec!(100.00),
///     dec!(150.00),
///     BatchId::from_seq(1),
///     Utc::now(),
/// );
///
/// assert_eq!(batch.buy_value(), dec!(500.00));
/// assert_eq!(batch.profit_per_unit(), dec!(50.00));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// The product this batch holds.
    pub product: ProductName,
    /// Units remaining in this batch.
    pub quantity: u32,
    /// Acquisition cost per unit.
    pub buy_price: Decimal,
    /// Asking price per unit.
    pub sell_price: Decimal,
    /// Unique id, assigned in creation order.
    pub id: BatchId,
    /// When the batch was added to the ledger.
    pub created_at: DateTime<Utc>,
}

impl Batch {
    /// Create a new batch.
    #[must_use]
    pub fn new(
        product: impl Into<ProductName>,
        quantity: u32,
        buy_price: Decimal,
        sell_price: Decimal,
        id: BatchId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            product: product.into(),
            quantity,
            buy_price,
            sell_price,
            id,
            created_at,
        }
    }

    /// Total acquisition cost of the remaining units.
    #[must_use]
    pub fn buy_value(&self) -> Decimal {
        Decimal::from(self.quantity) * self.buy_price
    }

    /// Revenue if all remaining units sold at the asking price.
    #[must_use]
    pub fn potential_revenue(&self) -> Decimal {
        Decimal::from(self.quantity) * self.sell_price
    }

    /// Margin per unit at the asking price.
    #[must_use]
    pub fn profit_per_unit(&self) -> Decimal {
        self.sell_price - self.buy_price
    }

    /// Check whether this batch has been fully consumed.
    #[must_use]
    pub const fn is_depleted(&self) -> bool {
        self.quantity == 0
    }
}

impl fmt::Display for Batch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} x {} @ {} -> {}",
            self.id, self.quantity, self.product, self.buy_price, self.sell_price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn batch(quantity: u32) -> Batch {
        Batch::new(
            "Widget",
            quantity,
            dec!(100.00),
            dec!(150.00),
            BatchId::from_seq(7),
            Utc::now(),
        )
    }

    #[test]
    fn test_id_format() {
        assert_eq!(BatchId::from_seq(1).as_str(), "BATCH-0001");
        assert_eq!(BatchId::from_seq(42).as_str(), "BATCH-0042");
        assert_eq!(BatchId::from_seq(12345).as_str(), "BATCH-12345");
    }

    #[test]
    fn test_id_sequence_roundtrip() {
        assert_eq!(BatchId::from_seq(42).sequence(), Some(42));
        assert_eq!(BatchId::from_seq(12345).sequence(), Some(12345));
    }

    #[test]
    fn test_id_sequence_rejects_foreign_ids() {
        let id: BatchId = serde_json::from_str("\"LOT-12\"").unwrap();
        assert_eq!(id.sequence(), None);
    }

    #[test]
    fn test_values() {
        let b = batch(5);
        assert_eq!(b.buy_value(), dec!(500.00));
        assert_eq!(b.potential_revenue(), dec!(750.00));
        assert_eq!(b.profit_per_unit(), dec!(50.00));
        assert!(!b.is_depleted());
    }

    #[test]
    fn test_depleted() {
        assert!(batch(0).is_depleted());
    }

    #[test]
    fn test_display() {
        let s = format!("{}", batch(5));
        assert_eq!(s, "BATCH-0007: 5 x Widget @ 100.00 -> 150.00");
    }
}
