//! Veo client configuration.

use std::time::Duration;

/// Veo client configuration.
///
/// There is deliberately no deadline or maximum poll count: generation
/// runs for minutes and the loop is unbounded by default. Callers that
/// need a bound wrap the `generate` future in `tokio::time::timeout`.
#[derive(Debug, Clone)]
pub struct VeoConfig {
    /// Base URL of the generative language API
    pub base_url: String,
    /// Model identifier to submit jobs against
    pub model: String,
    /// Output resolution tier
    pub resolution: String,
    /// Delay between status polls
    pub poll_interval: Duration,
}

impl Default for VeoConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "veo-3.1-fast-generate-preview".to_string(),
            resolution: "720p".to_string(),
            poll_interval: Duration::from_secs(10),
        }
    }
}

impl VeoConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("VEO_BASE_URL").unwrap_or(defaults.base_url),
            model: std::env::var("VEO_MODEL").unwrap_or(defaults.model),
            resolution: std::env::var("VEO_RESOLUTION").unwrap_or(defaults.resolution),
            poll_interval: Duration::from_secs(
                std::env::var("VEO_POLL_INTERVAL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
        }
    }
}
