//! Application configuration.
//!
//! Defaults cover the normal page load. The browser build can override the
//! simulated API latency through the page query string:
//! - `latency_ms`: delay before the simulated post call resolves (default 800)
//!
//! Unknown query keys are ignored.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use thiserror::Error;

use crate::net::api::SIMULATED_LATENCY;

const LATENCY_KEY: &str = "latency_ms";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid latency_ms value: {0:?}")]
    InvalidLatency(String),
}

/// Runtime settings provided to the component tree via context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Delay applied by the simulated post call.
    pub api_latency: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { api_latency: SIMULATED_LATENCY }
    }
}

impl AppConfig {
    /// Build config from a URL query string, with or without the leading `?`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLatency`] if `latency_ms` is present but
    /// not an unsigned integer.
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut config = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if key == LATENCY_KEY {
                let ms = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidLatency(value.to_string()))?;
                config.api_latency = Duration::from_millis(ms);
            }
        }
        Ok(config)
    }

    /// Build config from the current page URL. Native builds get defaults.
    ///
    /// # Errors
    ///
    /// Propagates [`ConfigError`] from [`AppConfig::from_query`].
    pub fn from_location() -> Result<Self, ConfigError> {
        #[cfg(feature = "csr")]
        {
            let search = web_sys::window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            Self::from_query(&search)
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(Self::default())
        }
    }
}
