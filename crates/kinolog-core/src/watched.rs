//! The in-memory watched list and its derived statistics.
//!
//! Pure data structure — persistence lives in [`crate::storage`]. Records
//! keep insertion order, which is also the order of the persisted file.

use crate::models::{WatchedAggregates, WatchedRecord};

/// Ordered list of watched records, at most one per movie id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WatchedList {
    records: Vec<WatchedRecord>,
}

impl WatchedList {
    pub fn new(records: Vec<WatchedRecord>) -> Self {
        Self { records }
    }

    /// Append a record. An id already present is a no-op; returns whether
    /// the list changed.
    pub fn add(&mut self, record: WatchedRecord) -> bool {
        if self.contains(&record.id) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Remove the record with this id; returns whether one was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&WatchedRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn records(&self) -> &[WatchedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Arithmetic means over all records. An empty list yields all zeros
    /// so display code stays total.
    pub fn aggregates(&self) -> WatchedAggregates {
        let count = self.records.len();
        if count == 0 {
            return WatchedAggregates::default();
        }
        let n = count as f64;
        WatchedAggregates {
            count,
            mean_external_rating: self.records.iter().map(|r| r.external_rating).sum::<f64>() / n,
            mean_user_rating: self
                .records
                .iter()
                .map(|r| f64::from(r.user_rating))
                .sum::<f64>()
                / n,
            mean_runtime_minutes: self
                .records
                .iter()
                .map(|r| f64::from(r.runtime_minutes))
                .sum::<f64>()
                / n,
        }
    }
}
