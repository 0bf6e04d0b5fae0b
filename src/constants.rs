//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default scanner API, only edit this file.

use std::time::Duration;

/// Default scanner API base URL
///
/// Fallback when `CORTEX_API_BASE` is not set.
/// The demo backend listens on http://127.0.0.1:5000
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// Default request timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Simulation tick cadence. Independent of each step's `time` label.
pub const SIMULATION_TICK: Duration = Duration::from_secs(1);

/// Delay before a payload flash restores desktop opacity
pub const FLASH_DELAY: Duration = Duration::from_millis(200);

/// Chart update transition length
pub const CHART_TRANSITION: Duration = Duration::from_millis(500);

/// Indicator cards shown per result; the rest are dropped silently
pub const MAX_INDICATORS: usize = 3;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "CortexShield";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get scanner API base URL from environment or use default
pub fn get_api_base() -> String {
    std::env::var("CORTEX_API_BASE")
        .map(|s| s.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}

/// Get request timeout from environment or use default
pub fn get_request_timeout() -> u64 {
    std::env::var("CORTEX_REQUEST_TIMEOUT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
}
