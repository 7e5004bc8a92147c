//! App Configuration
//!
//! Defaults suit a page served by the same origin as the API. Overrides can
//! be stored as JSON under `healthUtilConfig`; missing fields keep defaults.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::debounce::DEFAULT_DEBOUNCE_MS;
use crate::error::{AppError, AppResult};
use crate::storage::{KeyValueStore, CONFIG_KEY};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for `/api/...` paths; empty means same origin
    pub api_base: String,
    pub debounce_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load overrides from the store. Malformed JSON is an error so the
    /// caller can log it once logging is up.
    pub fn load(store: &impl KeyValueStore) -> AppResult<Self> {
        let Some(raw) = store.get(CONFIG_KEY) else {
            return Ok(Self::default());
        };
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| AppError::Decode(format!("{}: {}", CONFIG_KEY, e)))?;
        Ok(config.normalized())
    }

    /// A zero delay would fire on every keystroke; fall back to the default
    fn normalized(mut self) -> Self {
        if self.debounce_ms == 0 {
            self.debounce_ms = DEFAULT_DEBOUNCE_MS;
        }
        self
    }

    pub fn level_filter(&self) -> LevelFilter {
        console_logger::parse_level(&self.log_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    #[test]
    fn test_defaults_when_absent() {
        let config = AppConfig::load(&MemoryStore::new()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_override() {
        let store = MemoryStore::with_value(CONFIG_KEY, r#"{"api_base":"https://health.example.org","log_level":"debug"}"#);
        let config = AppConfig::load(&store).unwrap();

        assert_eq!(config.api_base, "https://health.example.org");
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
    }

    #[test]
    fn test_zero_debounce_falls_back() {
        let store = MemoryStore::with_value(CONFIG_KEY, r#"{"debounce_ms":0}"#);
        let config = AppConfig::load(&store).unwrap();
        assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
    }

    #[test]
    fn test_poll_period_is_not_configurable() {
        let store = MemoryStore::with_value(CONFIG_KEY, r#"{"poll_interval_ms":30000}"#);
        let config = AppConfig::load(&store).unwrap();

        assert_eq!(config, AppConfig::default());
        let saved = serde_json::to_string(&config).unwrap();
        assert!(!saved.contains("poll_interval_ms"));
    }

    #[test]
    fn test_malformed_config_is_reported() {
        let store = MemoryStore::with_value(CONFIG_KEY, "[1, 2");
        assert!(matches!(AppConfig::load(&store), Err(AppError::Decode(_))));
    }
}
