//! File-backed watched list with write-through persistence.
//!
//! Every mutation that changes the list rewrites the whole JSON array
//! before returning. Save failures are logged and never roll back the
//! in-memory change; a missing or corrupt file on load starts empty.

use std::path::PathBuf;

use crate::error::KinologError;
use crate::models::{WatchedAggregates, WatchedRecord};
use crate::watched::WatchedList;

#[derive(Debug)]
pub struct WatchedStore {
    list: WatchedList,
    path: PathBuf,
}

impl WatchedStore {
    /// Open the store at `path`, reading any existing list.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let list = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<WatchedRecord>>(&content) {
                Ok(records) => WatchedList::new(records),
                Err(e) => {
                    tracing::warn!("ignoring corrupt watched list at {}: {e}", path.display());
                    WatchedList::default()
                }
            },
            Err(_) => WatchedList::default(),
        };
        Self { list, path }
    }

    /// Add a record and persist. A duplicate id is a no-op and does not
    /// touch the file; returns whether the list changed.
    pub fn add(&mut self, record: WatchedRecord) -> bool {
        let added = self.list.add(record);
        if added {
            if let Err(e) = self.persist() {
                tracing::warn!("failed to save watched list: {e}");
            }
        }
        added
    }

    /// Remove by id and persist; returns whether a record was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let removed = self.list.remove(id);
        if removed {
            if let Err(e) = self.persist() {
                tracing::warn!("failed to save watched list: {e}");
            }
        }
        removed
    }

    pub fn contains(&self, id: &str) -> bool {
        self.list.contains(id)
    }

    pub fn get(&self, id: &str) -> Option<&WatchedRecord> {
        self.list.get(id)
    }

    pub fn records(&self) -> &[WatchedRecord] {
        self.list.records()
    }

    pub fn aggregates(&self) -> WatchedAggregates {
        self.list.aggregates()
    }

    fn persist(&self) -> Result<(), KinologError> {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let json = serde_json::to_string_pretty(self.list.records())
            .map_err(|e| KinologError::Storage(e.to_string()))?;
        std::fs::write(&self.path, json)
            .map_err(|e| KinologError::Storage(format!("write {}: {e}", self.path.display())))?;
        Ok(())
    }
}
