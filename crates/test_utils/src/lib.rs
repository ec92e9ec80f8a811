//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! benefits pricing test suite.
//!
//! # Modules
//!
//! - `fixtures`: Reference products, employee and catalog document
//! - `builders`: Builder patterns for test data construction
//! - `assertions`: Custom assertion helpers for prices and quotes
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;

use std::sync::Once;

use domain_benefits::PricingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static TRACING: Once = Once::new();

/// Initializes a test tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`, defaulting to `warn` so test output stays quiet.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let config = PricingConfig {
            log_level: "warn".to_string(),
            ..PricingConfig::default()
        };

        let _ = tracing_subscriber::registry()
            .with(config.env_filter())
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
    });
}
