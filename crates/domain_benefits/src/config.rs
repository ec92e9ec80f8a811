//! Pricing configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use core_kernel::Currency;

/// Pricing configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricingConfig {
    /// Currency quotes are surfaced in
    #[serde(default)]
    pub currency: Currency,
    /// Log level used by [`PricingConfig::env_filter`] when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Reject inconsistent selections before pricing
    #[serde(default = "default_validate_selections")]
    pub validate_selections: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_validate_selections() -> bool {
    true
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            log_level: default_log_level(),
            validate_selections: default_validate_selections(),
        }
    }
}

impl PricingConfig {
    /// Loads configuration from `PRICING_*` environment variables
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_env_with_prefix("PRICING")
    }

    /// Loads configuration from environment variables with a custom prefix
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        config::Config::builder()
            .add_source(config::Environment::with_prefix(prefix).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Builds the tracing filter for hosts that initialise a subscriber
    ///
    /// `RUST_LOG` wins when set; otherwise `log_level` is used, falling back
    /// to `info` if it does not parse.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }
}
