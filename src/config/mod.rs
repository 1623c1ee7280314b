//! Runtime settings for the scoring service.
//!
//! Settings come from `TRUST_ASSESSMENT__<SECTION>__<KEY>` environment
//! variables, optionally seeded from a local `.env` file. Nothing is
//! required: an empty environment yields a development server on port 8080
//! with a 30 second request timeout and permissive CORS.
//!
//! ```no_run
//! use trust_assessment::config::AppConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! config.validate()?;
//! let addr = config.server.socket_addr()?;
//! # let _ = addr;
//! # Ok(())
//! # }
//! ```

mod error;
mod features;
mod server;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Prefix shared by every setting's environment variable.
const ENV_PREFIX: &str = "TRUST_ASSESSMENT";

/// Everything the binary needs to start serving.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Listener, CORS and timeout settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging and error-detail switches
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Reads settings from the process environment.
    ///
    /// `TRUST_ASSESSMENT__SERVER__REQUEST_TIMEOUT_SECS=10` sets
    /// `server.request_timeout_secs`; `TRUST_ASSESSMENT__FEATURES__VERBOSE_ERRORS=true`
    /// turns on error details in HTTP responses.
    ///
    /// # Errors
    ///
    /// `ConfigError` when a variable does not parse into its field's type.
    /// Range checks happen separately in [`AppConfig::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Rejects settings the server cannot start with.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
