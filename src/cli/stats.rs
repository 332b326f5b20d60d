//! Stats command implementation
//!
//! One-shot summary over `timestamp,price` lines from a file or stdin.

use crate::config::Config;
use crate::ledger::PriceLedger;
use anyhow::Context;
use clap::Args;
use rust_decimal::Decimal;
use std::io::Read;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Input file of `timestamp,price` lines (reads stdin when omitted)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output format: json or table
    #[arg(long, default_value = "table")]
    pub format: String,
}

impl StatsArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let content = match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let ledger = parse_records(&content)?;
        let summary = ledger
            .statistics()
            .map_err(|_| anyhow::anyhow!("no records in input"))?;

        match self.format.as_str() {
            "json" => println!("{}", serde_json::to_string_pretty(&summary)?),
            "table" => println!("{}", summary.format_table(&config.display.currency)),
            other => anyhow::bail!("unknown format '{}' (expected json or table)", other),
        }
        Ok(())
    }
}

/// Parse `timestamp,price` lines into a ledger
///
/// Blank lines and `#` comments are skipped; malformed rows fail with
/// their line number.
pub fn parse_records(content: &str) -> anyhow::Result<PriceLedger> {
    let mut ledger = PriceLedger::new();
    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (timestamp, price) = line
            .split_once(',')
            .with_context(|| format!("line {}: expected `timestamp,price`", index + 1))?;
        let timestamp: i64 = timestamp
            .trim()
            .parse()
            .with_context(|| format!("line {}: bad timestamp '{}'", index + 1, timestamp.trim()))?;
        let price: Decimal = price
            .trim()
            .parse()
            .with_context(|| format!("line {}: bad price '{}'", index + 1, price.trim()))?;
        ledger.insert(timestamp, price);
    }
    Ok(ledger)
}
