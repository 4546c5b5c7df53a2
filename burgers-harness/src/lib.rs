pub mod client;
pub mod error;
pub mod scenario;
pub mod stub;
pub mod telemetry;
pub mod utils;

pub use client::{ApiClient, ValidatableResponse};
pub use error::HarnessError;
pub use scenario::Scenario;

use stellar_burgers_core::HarnessConfig;

/// Harness configuration from the user config file and environment.
pub fn load_config() -> error::Result<HarnessConfig> {
    stellar_burgers_core::config::load_config().map_err(HarnessError::Config)
}
