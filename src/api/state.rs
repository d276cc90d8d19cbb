//! Application state for the mini-job engine API.

use std::sync::Arc;

use crate::config::{ConfigLoader, MinijobConfig};

/// Shared application state.
///
/// Holds the loaded configuration. Handlers keep no other state; every
/// request carries the ledger data and events it needs.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &MinijobConfig {
        self.config.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_state_exposes_loaded_config() {
        let state = AppState::new(ConfigLoader::from_config(MinijobConfig::reference()));
        assert_eq!(state.config(), &MinijobConfig::reference());
    }
}
