//! JSON persistence for lotledger ledgers.
//!
//! This crate round-trips a [`Ledger`] through a JSON file: the current
//! batch queue, the full sales log, and the next-batch-id counter.
//! Timestamps serialize as RFC 3339 / ISO-8601 strings via chrono.
//!
//! Loading never touches a live ledger: [`load`] reads, parses, and
//! validates into a brand-new [`Ledger`], and the caller swaps it in only
//! on success. A missing or malformed file therefore cannot leave the
//! running ledger partially mutated.
//!
//! # Example
//!
//! ```ignore
//! use lotledger_store::{load, save};
//!
//! save(Path::new("ledger.json"), &ledger)?;
//! let restored = load(Path::new("ledger.json"))?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};

use lotledger_core::{Batch, Clock, Ledger, LedgerError, SaleRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while persisting or restoring a ledger.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error reading or writing the ledger file.
    #[error("failed to access {path}: {source}")]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a valid ledger snapshot.
    #[error("malformed ledger file {path}: {source}")]
    Malformed {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The snapshot parsed but violates a ledger invariant.
    #[error("invalid ledger state in {path}: {source}")]
    Corrupt {
        /// The file holding the rejected state.
        path: PathBuf,
        /// The rejected invariant.
        #[source]
        source: LedgerError,
    },
}

/// On-disk shape of a ledger.
///
/// The field set is the persistence contract: current batches with all
/// their fields, the full sales log, and the id counter. Restoring a
/// snapshot reconstructs ledger state exactly, including queue order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// The batch queue, oldest first.
    pub batches: Vec<Batch>,
    /// The sales log, in commit order.
    pub sales: Vec<SaleRecord>,
    /// The sequence number the next batch id will be minted from.
    pub next_batch_seq: u64,
}

impl LedgerSnapshot {
    /// Capture the persistent state of a ledger.
    #[must_use]
    pub fn capture<C: Clock>(ledger: &Ledger<C>) -> Self {
        Self {
            batches: ledger.batches().to_vec(),
            sales: ledger.sales().to_vec(),
            next_batch_seq: ledger.next_batch_seq(),
        }
    }

    /// Rebuild a ledger from this snapshot, validating the invariants.
    pub fn restore(self) -> Result<Ledger, LedgerError> {
        Ledger::from_parts(self.batches, self.sales, self.next_batch_seq)
    }
}

/// Write a ledger to `path` as pretty-printed JSON.
pub fn save<C: Clock>(path: &Path, ledger: &Ledger<C>) -> Result<(), StoreError> {
    let snapshot = LedgerSnapshot::capture(ledger);
    let file = fs::File::create(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer_pretty(file, &snapshot).map_err(|source| StoreError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a ledger from `path`.
///
/// Builds and validates a brand-new ledger; the caller replaces its live
/// ledger only when this returns `Ok`.
pub fn load(path: &Path) -> Result<Ledger, StoreError> {
    let contents = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot: LedgerSnapshot =
        serde_json::from_str(&contents).map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
    snapshot.restore().map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}
