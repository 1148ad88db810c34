//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a [`PlaybackEngine`](crate::PlaybackEngine).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How many upcoming source items to preload while one plays. The
    /// default of 1 hides one item's fetch/decode latency; 0 disables
    /// preloading. Only graph sessions preload through the buffer cache.
    pub preload_ahead: usize,

    /// Start with the element backend forced on, even when a graph is
    /// available. Equivalent to calling
    /// [`set_force_fallback_backend(true)`](crate::PlaybackEngine::set_force_fallback_backend)
    /// right after construction.
    pub force_element_backend: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            preload_ahead: 1,
            force_element_backend: false,
        }
    }
}

impl EngineConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        // Anything beyond a handful of items ahead defeats the cache's
        // explicit-invalidation contract by racing far-future loads.
        if self.preload_ahead > 8 {
            return Err(format!(
                "preload_ahead {} is unreasonably large (max 8)",
                self.preload_ahead
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.preload_ahead, 1);
        assert!(!config.force_element_backend);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn oversized_preload_is_rejected() {
        let config = EngineConfig {
            preload_ahead: 64,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
