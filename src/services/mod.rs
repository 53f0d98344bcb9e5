pub mod kv_store;
pub mod search_history;
pub mod trip_service;
pub mod trip_store;
