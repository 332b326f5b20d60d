//! Price ledger module
//!
//! Ordered, in-memory collection of timestamped price records with
//! first-match lookup semantics, in-place sorting, and summary statistics

mod stats;
mod store;
mod types;

pub use stats::PriceSummary;
pub use store::PriceLedger;
pub use types::{LedgerError, SortDirection, SortKey};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single timestamped price observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Observation timestamp (seconds, caller-defined epoch)
    pub timestamp: i64,
    /// Observed price
    pub price: Decimal,
}
