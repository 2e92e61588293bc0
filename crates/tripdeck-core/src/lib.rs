//! Shared foundation for the Tripdeck workspace.
//!
//! Defines the top-level error type, the TOML application configuration,
//! and currency formatting used across crates.

pub mod config;
pub mod error;
pub mod money;

pub use config::TripdeckConfig;
pub use error::{Result, TripdeckError};
