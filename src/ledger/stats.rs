//! Summary statistics over ledger prices

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate statistics computed over all prices in the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceSummary {
    /// Highest price
    pub max: Decimal,
    /// Lowest price
    pub min: Decimal,
    /// Arithmetic mean
    pub average: Decimal,
    /// max − min
    pub range: Decimal,
    /// Population standard deviation
    pub std_dev: Decimal,
}

impl PriceSummary {
    /// Format as table for CLI output
    pub fn format_table(&self, currency: &str) -> String {
        format!(
            r#"
══════════════════════════════════════
         PRICE SUMMARY
══════════════════════════════════════
Highest Price:  {cur}{max:.2}
Lowest Price:   {cur}{min:.2}
Average Price:  {cur}{avg:.2}
Price Range:    {cur}{range:.2}
Std Deviation:  {std:.4}
══════════════════════════════════════
"#,
            cur = currency,
            max = self.max,
            min = self.min,
            avg = self.average,
            range = self.range,
            std = self.std_dev,
        )
    }
}
