//! Runtime switches for logging and error output.

use serde::Deserialize;

/// Switches read from `TRUST_ASSESSMENT__FEATURES__*`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub json_logs: bool,

    /// Add the `details` map (item index, counts) to HTTP error bodies
    #[serde(default)]
    pub verbose_errors: bool,

    /// Wrap the router in a `TraceLayer`
    #[serde(default = "default_enable_tracing")]
    pub enable_tracing: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            json_logs: false,
            verbose_errors: false,
            enable_tracing: default_enable_tracing(),
        }
    }
}

fn default_enable_tracing() -> bool {
    true
}
