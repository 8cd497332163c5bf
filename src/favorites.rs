use std::sync::{Arc, RwLock};

use anyhow::Context;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::eid::Eid;
use crate::storage::StorageManager;

const FAVORITES_KEY: &str = "favorites.json";

/// A named, saved query string. The query core only ever consumes the
/// `query` field; everything else is bookkeeping for the list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteQuery {
    pub id: Eid,
    pub name: String,
    pub query: String,
    /// Unix milliseconds.
    pub created_at: i64,
    pub updated_at: i64,
}

/// Favorites live as one JSON array under a fixed storage key. The
/// whole array is rewritten on every mutation; the backing store's
/// temp-file rename keeps that safe.
pub struct FavoriteStore {
    storage: Arc<dyn StorageManager>,
    list: RwLock<Vec<FavoriteQuery>>,
}

impl FavoriteStore {
    pub fn load(storage: Arc<dyn StorageManager>) -> anyhow::Result<Self> {
        let list = if storage.exists(FAVORITES_KEY) {
            let raw = storage.get(FAVORITES_KEY)?;
            serde_json::from_slice(&raw).context("favorites store is malformed")?
        } else {
            vec![]
        };

        Ok(FavoriteStore {
            storage,
            list: RwLock::new(list),
        })
    }

    pub fn list(&self) -> Vec<FavoriteQuery> {
        self.list.read().unwrap().clone()
    }

    pub fn find(&self, id: &Eid) -> Option<FavoriteQuery> {
        self.list.read().unwrap().iter().find(|f| &f.id == id).cloned()
    }

    pub fn add(&self, name: &str, query: &str) -> anyhow::Result<FavoriteQuery> {
        let now = Utc::now().timestamp_millis();
        let favorite = FavoriteQuery {
            id: Eid::new(),
            name: name.to_string(),
            query: query.to_string(),
            created_at: now,
            updated_at: now,
        };

        self.list.write().unwrap().push(favorite.clone());
        self.save()?;

        log::debug!("saved favorite {} ({})", favorite.id, favorite.name);
        Ok(favorite)
    }

    /// Returns false when no favorite had the given id.
    pub fn remove(&self, id: &Eid) -> anyhow::Result<bool> {
        let mut list = self.list.write().unwrap();
        let before = list.len();
        list.retain(|f| &f.id != id);
        let removed = list.len() < before;
        drop(list);

        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    pub fn update(
        &self,
        id: &Eid,
        name: Option<String>,
        query: Option<String>,
    ) -> anyhow::Result<Option<FavoriteQuery>> {
        let mut list = self.list.write().unwrap();

        let Some(favorite) = list.iter_mut().find(|f| &f.id == id) else {
            return Ok(None);
        };

        if let Some(name) = name {
            favorite.name = name;
        }
        if let Some(query) = query {
            favorite.query = query;
        }
        favorite.updated_at = Utc::now().timestamp_millis();

        let result = favorite.clone();
        drop(list);

        self.save()?;
        Ok(Some(result))
    }

    fn save(&self) -> anyhow::Result<()> {
        let list = self.list.read().unwrap();
        let raw = serde_json::to_vec_pretty(&*list)?;
        self.storage
            .set(FAVORITES_KEY, &raw)
            .context("failed to persist favorites")
    }
}
