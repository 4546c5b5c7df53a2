pub mod config;
pub mod fixtures;
pub mod types;

pub use config::{HarnessConfig, Target};
pub use types::*;
