use std::sync::{Arc, RwLock};

use anyhow::Context;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::eid::Eid;
use crate::storage::StorageManager;

const HISTORY_KEY: &str = "history.json";

pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Eid,
    pub query: String,
    /// Unix milliseconds.
    pub searched_at: i64,
}

/// Search history, newest first. Re-running the most recent query
/// refreshes its timestamp instead of stacking duplicates, and the
/// list is capped so it never grows unbounded.
pub struct HistoryStore {
    storage: Arc<dyn StorageManager>,
    list: RwLock<Vec<HistoryEntry>>,
    limit: usize,
}

impl HistoryStore {
    pub fn load(storage: Arc<dyn StorageManager>, limit: usize) -> anyhow::Result<Self> {
        let list = if storage.exists(HISTORY_KEY) {
            let raw = storage.get(HISTORY_KEY)?;
            serde_json::from_slice(&raw).context("history store is malformed")?
        } else {
            vec![]
        };

        Ok(HistoryStore {
            storage,
            list: RwLock::new(list),
            limit: limit.max(1),
        })
    }

    pub fn list(&self) -> Vec<HistoryEntry> {
        self.list.read().unwrap().clone()
    }

    pub fn record(&self, query: &str) -> anyhow::Result<HistoryEntry> {
        let now = Utc::now().timestamp_millis();
        let mut list = self.list.write().unwrap();

        // Consecutive duplicate: refresh in place.
        if let Some(first) = list.first_mut() {
            if first.query == query {
                first.searched_at = now;
                let entry = first.clone();
                drop(list);
                self.save()?;
                return Ok(entry);
            }
        }

        let entry = HistoryEntry {
            id: Eid::new(),
            query: query.to_string(),
            searched_at: now,
        };
        list.insert(0, entry.clone());
        list.truncate(self.limit);
        drop(list);

        self.save()?;
        Ok(entry)
    }

    /// Returns false when no entry had the given id.
    pub fn remove(&self, id: &Eid) -> anyhow::Result<bool> {
        let mut list = self.list.write().unwrap();
        let before = list.len();
        list.retain(|e| &e.id != id);
        let removed = list.len() < before;
        drop(list);

        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    pub fn clear(&self) -> anyhow::Result<usize> {
        let mut list = self.list.write().unwrap();
        let count = list.len();
        list.clear();
        drop(list);

        self.save()?;
        Ok(count)
    }

    fn save(&self) -> anyhow::Result<()> {
        let list = self.list.read().unwrap();
        let raw = serde_json::to_vec_pretty(&*list)?;
        self.storage
            .set(HISTORY_KEY, &raw)
            .context("failed to persist history")
    }
}
