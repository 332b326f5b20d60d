//! tickbook: interactive ledger of timestamped stock prices
//!
//! This library provides the core components for:
//! - An ordered in-memory ledger of (timestamp, price) records
//! - First-match lookup, update, and delete over the ledger
//! - In-place sorting by timestamp or price, either direction
//! - Summary statistics (max, min, average, range, stddev)
//! - An interactive menu shell and one-shot stats CLI

pub mod cli;
pub mod config;
pub mod ledger;
pub mod telemetry;
