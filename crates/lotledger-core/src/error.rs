//! Ledger error taxonomy.

use thiserror::Error;

/// Errors that can occur during ledger operations.
///
/// Insufficient stock on a sale is deliberately NOT an error: the sale
/// commits whatever could be fulfilled and the shortfall is reported on
/// [`SaleOutcome`](crate::SaleOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A batch was submitted with a non-positive quantity or price.
    #[error("invalid batch: {field} must be positive (got {value})")]
    InvalidBatch {
        /// The offending field.
        field: &'static str,
        /// The rejected value, as entered.
        value: String,
    },

    /// A sale was requested for zero units.
    #[error("invalid sell quantity: must be positive")]
    InvalidQuantity,

    /// Persisted state violates a ledger invariant and cannot be restored.
    #[error("corrupt ledger state: {reason}")]
    CorruptState {
        /// What was wrong with the state.
        reason: String,
    },
}
