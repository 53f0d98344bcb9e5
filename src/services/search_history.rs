use std::sync::Arc;

use super::kv_store::KeyValueStore;

pub const SEARCH_HISTORY_KEY: &str = "searchHistory";
pub const DEFAULT_SEARCH_HISTORY_LIMIT: usize = 10;

/// Most-recent-first list of planner searches, kept in a [`KeyValueStore`].
pub struct SearchHistory {
    store: Arc<dyn KeyValueStore>,
    limit: usize,
}

impl SearchHistory {
    pub fn new(store: Arc<dyn KeyValueStore>, limit: usize) -> Self {
        Self {
            store,
            limit: limit.max(1),
        }
    }

    pub fn list(&self) -> Vec<String> {
        let Some(raw) = self.store.get(SEARCH_HISTORY_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(items) => items,
            Err(err) => {
                log::warn!("Discarding unreadable search history: {}", err);
                Vec::new()
            }
        }
    }

    /// Put `query` at the front. Blank queries are ignored, repeats move up.
    pub fn record(&self, query: &str) -> Vec<String> {
        let query = query.trim();
        let mut items = self.list();
        if query.is_empty() {
            return items;
        }

        items.retain(|item| item != query);
        items.insert(0, query.to_string());
        items.truncate(self.limit);

        self.save(&items);
        items
    }

    pub fn clear(&self) {
        self.store.remove(SEARCH_HISTORY_KEY);
    }

    fn save(&self, items: &[String]) {
        match serde_json::to_string(items) {
            Ok(raw) => self.store.set(SEARCH_HISTORY_KEY, raw),
            Err(err) => log::error!("Failed to store search history: {}", err),
        }
    }
}
