//! FIFO inventory ledger CLI.
//!
//! This crate provides the `lotledger` command-line tool:
//!
//! - `lotledger shell [FILE]`: interactive ledger shell (the default)
//! - `lotledger status FILE`: print current inventory from a saved ledger
//! - `lotledger summary FILE`: print the sales summary from a saved ledger
//! - `lotledger demo`: scripted walkthrough of FIFO consumption
//!
//! # Example Usage
//!
//! ```bash
//! lotledger shell stock.json
//! lotledger status stock.json --format json
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
pub mod report;
