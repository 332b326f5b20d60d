//! Ledger state and operations

use super::{LedgerError, PriceRecord, PriceSummary, SortDirection, SortKey};
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Ordered collection of price records
///
/// Records stay in insertion order until a sort rearranges them in place.
/// Duplicate timestamps are permitted; lookups act on the first match in
/// current order.
#[derive(Debug, Clone, Default)]
pub struct PriceLedger {
    records: Vec<PriceRecord>,
}

impl PriceLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self { records: vec![] }
    }

    /// Append a record at the end of the ledger
    ///
    /// No uniqueness or range validation; always succeeds. Returns the
    /// inserted record.
    pub fn insert(&mut self, timestamp: i64, price: Decimal) -> PriceRecord {
        let record = PriceRecord { timestamp, price };
        self.records.push(record);
        tracing::debug!(timestamp, %price, "record inserted");
        record
    }

    /// Replace the price of the first record matching `timestamp`
    pub fn update(&mut self, timestamp: i64, new_price: Decimal) -> Result<(), LedgerError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.timestamp == timestamp)
            .ok_or(LedgerError::NotFound(timestamp))?;
        record.price = new_price;
        tracing::debug!(timestamp, %new_price, "record updated");
        Ok(())
    }

    /// Remove the first record matching `timestamp`
    ///
    /// Distinguishes an empty ledger (`Empty`) from a missing timestamp
    /// (`NotFound`). Returns the removed record.
    pub fn delete(&mut self, timestamp: i64) -> Result<PriceRecord, LedgerError> {
        if self.records.is_empty() {
            return Err(LedgerError::Empty);
        }
        let index = self
            .records
            .iter()
            .position(|r| r.timestamp == timestamp)
            .ok_or(LedgerError::NotFound(timestamp))?;
        let removed = self.records.remove(index);
        tracing::debug!(timestamp, "record deleted");
        Ok(removed)
    }

    /// Find the first record matching `timestamp` without mutating state
    pub fn search(&self, timestamp: i64) -> Result<PriceRecord, LedgerError> {
        self.records
            .iter()
            .find(|r| r.timestamp == timestamp)
            .copied()
            .ok_or(LedgerError::NotFound(timestamp))
    }

    /// All records in current order; `Empty` when there are none
    pub fn list(&self) -> Result<&[PriceRecord], LedgerError> {
        if self.records.is_empty() {
            return Err(LedgerError::Empty);
        }
        Ok(&self.records)
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the ledger holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sort records in place by the chosen key
    ///
    /// Pairwise compare-and-swap over every (i, j) pair, swapping whole
    /// records on strict inequality against the requested direction. Not
    /// stable; ties keep whatever order the swap sequence yields. No-op
    /// for fewer than two records.
    pub fn sort_by(&mut self, key: SortKey, direction: SortDirection) {
        let n = self.records.len();
        if n < 2 {
            return;
        }
        for i in 0..n - 1 {
            for j in i + 1..n {
                if self.out_of_order(i, j, key, direction) {
                    self.records.swap(i, j);
                }
            }
        }
        tracing::debug!(%key, %direction, "ledger sorted");
    }

    fn out_of_order(&self, i: usize, j: usize, key: SortKey, direction: SortDirection) -> bool {
        let ordering = match key {
            SortKey::Timestamp => self.records[i].timestamp.cmp(&self.records[j].timestamp),
            SortKey::Price => self.records[i].price.cmp(&self.records[j].price),
        };
        match direction {
            SortDirection::Ascending => ordering == Ordering::Greater,
            SortDirection::Descending => ordering == Ordering::Less,
        }
    }

    /// Summary statistics over all prices; `Empty` when there are none
    ///
    /// First pass collects max, min, and sum; average is exact Decimal
    /// division. The second pass computes population variance, with the
    /// square root taken through f64.
    pub fn statistics(&self) -> Result<PriceSummary, LedgerError> {
        let first = self.records.first().ok_or(LedgerError::Empty)?;

        let mut max = first.price;
        let mut min = first.price;
        let mut sum = Decimal::ZERO;
        for record in &self.records {
            max = max.max(record.price);
            min = min.min(record.price);
            sum += record.price;
        }

        let count = self.records.len();
        let average = sum / Decimal::from(count);

        let mean: f64 = average.try_into().unwrap_or(0.0);
        let variance = self
            .records
            .iter()
            .map(|r| {
                let price: f64 = r.price.try_into().unwrap_or(0.0);
                (price - mean).powi(2)
            })
            .sum::<f64>()
            / count as f64;
        let std_dev = Decimal::try_from(variance.sqrt()).unwrap_or(Decimal::ZERO);

        Ok(PriceSummary {
            max,
            min,
            average,
            range: max - min,
            std_dev,
        })
    }

    /// Remove all records, resetting the ledger to its empty state
    pub fn clear(&mut self) {
        let dropped = self.records.len();
        self.records.clear();
        tracing::debug!(dropped, "ledger cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = PriceLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
    }

    #[test]
    fn test_insert_appends_in_order() {
        let mut ledger = PriceLedger::new();
        ledger.insert(100, dec!(50.0));
        ledger.insert(200, dec!(60.0));
        ledger.insert(150, dec!(55.0));

        let records = ledger.list().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].timestamp, 100);
        assert_eq!(records[1].timestamp, 200);
        assert_eq!(records[2].timestamp, 150);
    }

    #[test]
    fn test_insert_returns_record() {
        let mut ledger = PriceLedger::new();
        let record = ledger.insert(100, dec!(50.0));
        assert_eq!(record.timestamp, 100);
        assert_eq!(record.price, dec!(50.0));
    }

    #[test]
    fn test_insert_allows_duplicate_timestamps() {
        let mut ledger = PriceLedger::new();
        ledger.insert(100, dec!(50.0));
        ledger.insert(100, dec!(55.0));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_search_finds_inserted_record() {
        let mut ledger = PriceLedger::new();
        ledger.insert(100, dec!(50.0));
        let found = ledger.search(100).unwrap();
        assert_eq!(found.price, dec!(50.0));
    }

    #[test]
    fn test_search_first_match_wins() {
        let mut ledger = PriceLedger::new();
        ledger.insert(100, dec!(50.0));
        ledger.insert(100, dec!(55.0));
        assert_eq!(ledger.search(100).unwrap().price, dec!(50.0));
    }

    #[test]
    fn test_search_not_found() {
        let mut ledger = PriceLedger::new();
        ledger.insert(100, dec!(50.0));
        assert_eq!(ledger.search(999), Err(LedgerError::NotFound(999)));
    }

    #[test]
    fn test_search_does_not_mutate() {
        let mut ledger = PriceLedger::new();
        ledger.insert(100, dec!(50.0));
        let _ = ledger.search(100);
        let _ = ledger.search(999);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_update_existing() {
        let mut ledger = PriceLedger::new();
        ledger.insert(100, dec!(50.0));
        ledger.update(100, dec!(75.5)).unwrap();
        assert_eq!(ledger.search(100).unwrap().price, dec!(75.5));
    }

    #[test]
    fn test_update_only_first_match() {
        let mut ledger = PriceLedger::new();
        ledger.insert(100, dec!(50.0));
        ledger.insert(100, dec!(55.0));
        ledger.update(100, dec!(99.0)).unwrap();

        let records = ledger.list().unwrap();
        assert_eq!(records[0].price, dec!(99.0));
        assert_eq!(records[1].price, dec!(55.0));
    }

    #[test]
    fn test_update_not_found_leaves_records_unchanged() {
        let mut ledger = PriceLedger::new();
        ledger.insert(100, dec!(50.0));
        assert_eq!(ledger.update(999, dec!(1.0)), Err(LedgerError::NotFound(999)));
        assert_eq!(ledger.search(100).unwrap().price, dec!(50.0));
    }

    #[test]
    fn test_delete_empty_ledger() {
        let mut ledger = PriceLedger::new();
        assert_eq!(ledger.delete(100), Err(LedgerError::Empty));
    }

    #[test]
    fn test_delete_not_found() {
        let mut ledger = PriceLedger::new();
        ledger.insert(100, dec!(50.0));
        assert_eq!(ledger.delete(999), Err(LedgerError::NotFound(999)));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_delete_head_record() {
        let mut ledger = PriceLedger::new();
        ledger.insert(100, dec!(50.0));
        ledger.insert(200, dec!(60.0));

        let removed = ledger.delete(100).unwrap();
        assert_eq!(removed.price, dec!(50.0));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.list().unwrap()[0].timestamp, 200);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut ledger = PriceLedger::new();
        ledger.insert(100, dec!(50.0));
        ledger.insert(200, dec!(60.0));
        ledger.insert(100, dec!(55.0));

        ledger.delete(100).unwrap();
        assert_eq!(ledger.len(), 2);
        // Second originally-matching record is now the first match
        assert_eq!(ledger.search(100).unwrap().price, dec!(55.0));
    }

    #[test]
    fn test_sort_by_timestamp_ascending() {
        let mut ledger = PriceLedger::new();
        ledger.insert(300, dec!(10.0));
        ledger.insert(100, dec!(30.0));
        ledger.insert(200, dec!(20.0));

        ledger.sort_by(SortKey::Timestamp, SortDirection::Ascending);

        let timestamps: Vec<i64> = ledger.list().unwrap().iter().map(|r| r.timestamp).collect();
        assert_eq!(timestamps, vec![100, 200, 300]);
    }

    #[test]
    fn test_sort_by_timestamp_descending() {
        let mut ledger = PriceLedger::new();
        ledger.insert(100, dec!(30.0));
        ledger.insert(300, dec!(10.0));
        ledger.insert(200, dec!(20.0));

        ledger.sort_by(SortKey::Timestamp, SortDirection::Descending);

        let timestamps: Vec<i64> = ledger.list().unwrap().iter().map(|r| r.timestamp).collect();
        assert_eq!(timestamps, vec![300, 200, 100]);
    }

    #[test]
    fn test_sort_by_price_descending() {
        let mut ledger = PriceLedger::new();
        ledger.insert(100, dec!(20.0));
        ledger.insert(200, dec!(40.0));
        ledger.insert(300, dec!(30.0));

        ledger.sort_by(SortKey::Price, SortDirection::Descending);

        let prices: Vec<_> = ledger.list().unwrap().iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![dec!(40.0), dec!(30.0), dec!(20.0)]);
    }

    #[test]
    fn test_sort_swaps_whole_records() {
        let mut ledger = PriceLedger::new();
        ledger.insert(200, dec!(10.0));
        ledger.insert(100, dec!(20.0));

        ledger.sort_by(SortKey::Timestamp, SortDirection::Ascending);

        let records = ledger.list().unwrap();
        assert_eq!(records[0], PriceRecord { timestamp: 100, price: dec!(20.0) });
        assert_eq!(records[1], PriceRecord { timestamp: 200, price: dec!(10.0) });
    }

    #[test]
    fn test_sort_noop_on_empty_and_single() {
        let mut ledger = PriceLedger::new();
        ledger.sort_by(SortKey::Price, SortDirection::Ascending);
        assert!(ledger.is_empty());

        ledger.insert(100, dec!(50.0));
        ledger.sort_by(SortKey::Price, SortDirection::Descending);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_statistics_empty() {
        let ledger = PriceLedger::new();
        assert_eq!(ledger.statistics(), Err(LedgerError::Empty));
    }

    #[test]
    fn test_statistics_known_values() {
        let mut ledger = PriceLedger::new();
        ledger.insert(1, dec!(10));
        ledger.insert(2, dec!(20));
        ledger.insert(3, dec!(30));

        let summary = ledger.statistics().unwrap();
        assert_eq!(summary.max, dec!(30));
        assert_eq!(summary.min, dec!(10));
        assert_eq!(summary.average, dec!(20));
        assert_eq!(summary.range, dec!(20));

        // stddev = sqrt((100 + 0 + 100) / 3) ≈ 8.165
        let std_dev: f64 = summary.std_dev.try_into().unwrap();
        assert!((std_dev - 8.1649658).abs() < 1e-6);
    }

    #[test]
    fn test_statistics_single_record() {
        let mut ledger = PriceLedger::new();
        ledger.insert(1, dec!(42.5));

        let summary = ledger.statistics().unwrap();
        assert_eq!(summary.max, dec!(42.5));
        assert_eq!(summary.min, dec!(42.5));
        assert_eq!(summary.average, dec!(42.5));
        assert_eq!(summary.range, dec!(0));
        assert_eq!(summary.std_dev, dec!(0));
    }

    #[test]
    fn test_clear_resets_to_empty() {
        let mut ledger = PriceLedger::new();
        ledger.insert(100, dec!(50.0));
        ledger.insert(200, dec!(60.0));

        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.list(), Err(LedgerError::Empty));
    }

    #[test]
    fn test_clear_on_empty_ledger() {
        let mut ledger = PriceLedger::new();
        ledger.clear();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_count_tracks_inserts_and_deletes() {
        let mut ledger = PriceLedger::new();
        for i in 0..5 {
            ledger.insert(i, dec!(1.0));
        }
        assert_eq!(ledger.len(), 5);

        ledger.delete(2).unwrap();
        ledger.delete(4).unwrap();
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_list_empty() {
        let ledger = PriceLedger::new();
        assert_eq!(ledger.list(), Err(LedgerError::Empty));
    }
}
