//! Interactive shell command implementation
//!
//! The numbered menu loop that drives a single [`PriceLedger`]. All
//! user-facing text lives here; the ledger itself only returns signals.

use crate::config::{Config, DisplayConfig};
use crate::ledger::{LedgerError, PriceLedger, PriceRecord, SortDirection, SortKey};
use clap::Args;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

#[derive(Args, Debug)]
pub struct ShellArgs {}

impl ShellArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        run_shell(&mut stdin.lock(), &mut stdout.lock(), config)
    }
}

const MENU: &str = r#"
=============== Stock Price Tracker ===============
 1. Add price record
 2. Update price by timestamp
 3. Delete record by timestamp
 4. Search price by timestamp
 5. List all records
 6. Count records
 7. Sort by timestamp
 8. Sort by price
 9. Show statistics
10. Clear all records
11. Exit
===================================================
Your choice: "#;

/// Run the menu loop until the user exits or input reaches EOF
///
/// Generic over the reader and writer so tests can drive it with byte
/// buffers.
pub fn run_shell(
    input: &mut impl BufRead,
    out: &mut impl Write,
    config: &Config,
) -> anyhow::Result<()> {
    let mut ledger = PriceLedger::new();
    let display = &config.display;

    loop {
        write!(out, "{}", MENU)?;
        out.flush()?;
        let Some(choice) = read_line(input)? else {
            break;
        };

        match choice.trim() {
            "1" => add_record(input, out, &mut ledger, display)?,
            "2" => update_record(input, out, &mut ledger, display)?,
            "3" => delete_record(input, out, &mut ledger)?,
            "4" => search_record(input, out, &ledger, display)?,
            "5" => list_records(out, &ledger, display)?,
            "6" => writeln!(out, "Total records: {}", ledger.len())?,
            "7" => sort_records(input, out, &mut ledger, SortKey::Timestamp)?,
            "8" => sort_records(input, out, &mut ledger, SortKey::Price)?,
            "9" => show_statistics(out, &ledger, display)?,
            "10" => {
                ledger.clear();
                writeln!(out, "All records cleared.")?;
            }
            "11" => {
                writeln!(out, "Goodbye.")?;
                break;
            }
            other => writeln!(out, "Invalid option '{}'. Please try again.", other)?,
        }
    }

    Ok(())
}

fn add_record(
    input: &mut impl BufRead,
    out: &mut impl Write,
    ledger: &mut PriceLedger,
    display: &DisplayConfig,
) -> anyhow::Result<()> {
    let Some(timestamp) = prompt_timestamp(input, out)? else {
        return Ok(());
    };
    let Some(price) = prompt_price(input, out)? else {
        return Ok(());
    };
    let record = ledger.insert(timestamp, price);
    writeln!(out, "New entry added: {}", fmt_record(&record, display))?;
    Ok(())
}

fn update_record(
    input: &mut impl BufRead,
    out: &mut impl Write,
    ledger: &mut PriceLedger,
    display: &DisplayConfig,
) -> anyhow::Result<()> {
    let Some(timestamp) = prompt_timestamp(input, out)? else {
        return Ok(());
    };
    let Some(price) = prompt_price(input, out)? else {
        return Ok(());
    };
    match ledger.update(timestamp, price) {
        Ok(()) => writeln!(
            out,
            "Price at timestamp {} updated to {}.",
            timestamp,
            fmt_price(price, display)
        )?,
        Err(LedgerError::NotFound(_)) => {
            writeln!(out, "No record found for timestamp {}.", timestamp)?
        }
        Err(LedgerError::Empty) => writeln!(out, "There are no records yet.")?,
    }
    Ok(())
}

fn delete_record(
    input: &mut impl BufRead,
    out: &mut impl Write,
    ledger: &mut PriceLedger,
) -> anyhow::Result<()> {
    if ledger.is_empty() {
        writeln!(out, "There is no data to delete.")?;
        return Ok(());
    }
    let Some(timestamp) = prompt_timestamp(input, out)? else {
        return Ok(());
    };
    match ledger.delete(timestamp) {
        Ok(_) => writeln!(out, "Entry at timestamp {} removed.", timestamp)?,
        Err(LedgerError::NotFound(_)) => {
            writeln!(out, "No entry found for timestamp {}.", timestamp)?
        }
        Err(LedgerError::Empty) => writeln!(out, "There is no data to delete.")?,
    }
    Ok(())
}

fn search_record(
    input: &mut impl BufRead,
    out: &mut impl Write,
    ledger: &PriceLedger,
    display: &DisplayConfig,
) -> anyhow::Result<()> {
    let Some(timestamp) = prompt_timestamp(input, out)? else {
        return Ok(());
    };
    match ledger.search(timestamp) {
        Ok(record) => writeln!(
            out,
            "Found: price at timestamp {} is {}.",
            timestamp,
            fmt_price(record.price, display)
        )?,
        Err(_) => writeln!(out, "No data found for timestamp {}.", timestamp)?,
    }
    Ok(())
}

fn list_records(
    out: &mut impl Write,
    ledger: &PriceLedger,
    display: &DisplayConfig,
) -> anyhow::Result<()> {
    match ledger.list() {
        Ok(records) => {
            writeln!(out, "\nCurrent price records:")?;
            writeln!(out, "----------------------")?;
            for record in records {
                writeln!(out, "{}", fmt_record(record, display))?;
            }
        }
        Err(_) => writeln!(out, "No records to show.")?,
    }
    Ok(())
}

fn sort_records(
    input: &mut impl BufRead,
    out: &mut impl Write,
    ledger: &mut PriceLedger,
    key: SortKey,
) -> anyhow::Result<()> {
    let Some(direction) = prompt_direction(input, out)? else {
        return Ok(());
    };
    ledger.sort_by(key, direction);
    writeln!(out, "Sorted by {} in {} order.", key, direction)?;
    Ok(())
}

fn show_statistics(
    out: &mut impl Write,
    ledger: &PriceLedger,
    display: &DisplayConfig,
) -> anyhow::Result<()> {
    match ledger.statistics() {
        Ok(summary) => writeln!(out, "{}", summary.format_table(&display.currency))?,
        Err(_) => writeln!(out, "No data available for statistics.")?,
    }
    Ok(())
}

fn prompt_timestamp(
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<Option<i64>> {
    write!(out, "Enter timestamp: ")?;
    out.flush()?;
    let Some(line) = read_line(input)? else {
        return Ok(None);
    };
    match line.trim().parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            writeln!(out, "Not a valid timestamp: '{}'", line.trim())?;
            Ok(None)
        }
    }
}

fn prompt_price(
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<Option<Decimal>> {
    write!(out, "Enter price: ")?;
    out.flush()?;
    let Some(line) = read_line(input)? else {
        return Ok(None);
    };
    match line.trim().parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            writeln!(out, "Not a valid price: '{}'", line.trim())?;
            Ok(None)
        }
    }
}

fn prompt_direction(
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<Option<SortDirection>> {
    write!(out, "Direction [asc/desc] (default asc): ")?;
    out.flush()?;
    let Some(line) = read_line(input)? else {
        return Ok(None);
    };
    match line.trim() {
        "" | "asc" => Ok(Some(SortDirection::Ascending)),
        "desc" => Ok(Some(SortDirection::Descending)),
        other => {
            writeln!(out, "Unknown direction '{}'.", other)?;
            Ok(None)
        }
    }
}

/// Read one line, returning `None` at EOF
fn read_line(input: &mut impl BufRead) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    let n = input.read_line(&mut line)?;
    if n == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

fn fmt_record(record: &PriceRecord, display: &DisplayConfig) -> String {
    format!(
        "[timestamp {} | price {}]",
        fmt_timestamp(record.timestamp, display),
        fmt_price(record.price, display)
    )
}

fn fmt_price(price: Decimal, display: &DisplayConfig) -> String {
    format!(
        "{}{:.prec$}",
        display.currency,
        price,
        prec = display.price_precision as usize
    )
}

fn fmt_timestamp(timestamp: i64, display: &DisplayConfig) -> String {
    if display.human_time {
        if let Some(dt) = chrono::DateTime::from_timestamp(timestamp, 0) {
            return format!("{} ({})", timestamp, dt.format("%Y-%m-%d %H:%M:%S UTC"));
        }
    }
    timestamp.to_string()
}
