//! Configuration module

use std::time::Duration;

use crate::constants;

/// View core configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    /// Scanner API base URL (no trailing slash)
    pub api_base: String,

    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,

    /// Simulation tick cadence
    pub tick_interval: Duration,

    /// Payload flash restore delay
    pub flash_delay: Duration,

    /// Chart data transition length
    pub chart_transition: Duration,

    /// Max indicator cards per result
    pub max_indicators: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            api_base: constants::DEFAULT_API_BASE.to_string(),
            request_timeout_secs: constants::DEFAULT_REQUEST_TIMEOUT_SECS,
            tick_interval: constants::SIMULATION_TICK,
            flash_delay: constants::FLASH_DELAY,
            chart_transition: constants::CHART_TRANSITION,
            max_indicators: constants::MAX_INDICATORS,
        }
    }
}

impl ViewConfig {
    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// Only the transport settings come from the environment; playback and
    /// chart timing stay at their fixed defaults.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }

        Self {
            api_base: constants::get_api_base(),
            request_timeout_secs: constants::get_request_timeout(),
            ..Self::default()
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Full URL for an API path such as `/scan/file`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}
