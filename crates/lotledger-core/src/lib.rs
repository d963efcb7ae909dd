//! Core types for lotledger
//!
//! This crate provides the fundamental types of the lotledger project:
//!
//! - [`Batch`] - An inventory lot with its own buy/sell price pair
//! - [`BatchId`] - Monotonically assigned batch identifier
//! - [`SaleRecord`] - Append-only profit decomposition of one consumption
//! - [`Ledger`] - The FIFO queue, sales log, and id counter
//! - [`InventoryStatus`] / [`SalesSummary`] - Aggregate read-only views
//! - [`Clock`] - Injectable time source
//!
//! # Example
//!
//! ```
//! use lotledger_core::Ledger;
//! use rust_decimal_macros::dec;
//!
//! let mut ledger = Ledger::new();
//!
//! // Two lots of the same product at different cost bases.
//! ledger.add_batch("HP EliteBook", 5, dec!(100.00), dec!(150.00)).unwrap();
//! ledger.add_batch("HP EliteBook", 5, dec!(120.00), dec!(170.00)).unwrap();
//!
//! // Selling 7 drains the oldest lot and takes 2 from the next.
//! let outcome = ledger.sell("HP EliteBook", 7).unwrap();
//! assert_eq!(outcome.records.len(), 2);
//! assert_eq!(outcome.total_profit(), dec!(350.00));
//!
//! // 3 units remain, all from the newer lot.
//! assert_eq!(ledger.units("HP EliteBook"), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod batch;
pub mod clock;
pub mod error;
pub mod ledger;
pub mod product;
pub mod sale;
pub mod summary;

pub use batch::{Batch, BatchId, BATCH_ID_PREFIX};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::LedgerError;
pub use ledger::{Ledger, SaleOutcome};
pub use product::ProductName;
pub use sale::SaleRecord;
pub use summary::{InventoryStatus, ProductStatus, SalesSummary};

// Re-export commonly used external types
pub use chrono::{DateTime, Utc};
pub use rust_decimal::Decimal;
