//! Shared setup for the scenario suites.
//!
//! Scenarios run against the stand-in backend by default. Set
//! `STELLAR_BURGERS_TARGET=live` (or `STELLAR_BURGERS_BASE_URL`) to run them
//! against a deployed service instead.

mod backend;

pub use backend::TestBackend;
