#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};

use trip_planner_api::{
    config::AppConfig,
    services::{kv_store::MemoryStore, trip_store::InMemoryTripStore},
    AppState,
};

pub struct TestApp {
    pub trip_store: Arc<InMemoryTripStore>,
    pub kv_store: Arc<MemoryStore>,
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let trip_store = Arc::new(InMemoryTripStore::new());
        let kv_store = Arc::new(MemoryStore::new());
        let state = AppState::new(config, trip_store.clone(), kv_store.clone());

        Self {
            trip_store,
            kv_store,
            state,
        }
    }
}

pub fn entry(day: u32, place: &str) -> Value {
    json!({ "day": day, "place": place, "time": "", "details": "" })
}

pub fn days_of(schedule: &Value) -> Vec<u64> {
    schedule
        .as_array()
        .expect("schedule should be an array")
        .iter()
        .map(|entry| entry["day"].as_u64().expect("day should be a number"))
        .collect()
}
