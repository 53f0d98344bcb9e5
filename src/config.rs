use std::env;

use crate::services::search_history::DEFAULT_SEARCH_HISTORY_LIMIT;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub search_history_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            environment: "development".to_string(),
            search_history_limit: DEFAULT_SEARCH_HISTORY_LIMIT,
        }
    }
}

impl AppConfig {
    /// Read settings from the environment. Unset or unparsable values fall back
    /// to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|port| port.parse().ok())
                .unwrap_or(defaults.port),
            environment: lookup("RUST_ENV").unwrap_or(defaults.environment),
            search_history_limit: lookup("SEARCH_HISTORY_LIMIT")
                .and_then(|limit| limit.parse().ok())
                .unwrap_or(defaults.search_history_limit),
        }
    }
}
