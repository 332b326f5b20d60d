//! Ledger lookup signals and sort selectors

use thiserror::Error;

/// Lookup signals returned by ledger operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    /// No record matches the given timestamp
    #[error("no record found for timestamp {0}")]
    NotFound(i64),
    /// Ledger holds no records
    #[error("ledger is empty")]
    Empty,
}

/// Field a sort orders the ledger by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Timestamp,
    Price,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Timestamp => write!(f, "timestamp"),
            SortKey::Price => write!(f, "price"),
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
        }
    }
}
