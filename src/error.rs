//! Custom error types for the application.
//!
//! This module defines the primary error type, `ScanError`, for the entire
//! application. Using the `thiserror` crate, it provides a centralized and
//! consistent way to handle the different kinds of failures a scan can hit,
//! from configuration problems to mid-scan motion faults.
//!
//! ## Error Hierarchy
//!
//! - **`Config`**: Wraps errors from the `config` crate, typically file
//!   parsing or format issues in a settings file.
//! - **`Configuration`**: Semantic errors in the configuration that pass
//!   parsing but are logically invalid, such as a bounding rectangle with
//!   `min > max`. These are caught during the validation step before any
//!   point is sampled.
//! - **`Motion`**: An actuator move failed mid-scan. The sequencer stops
//!   issuing further moves as soon as one of these surfaces.
//! - **`Recovery`**: An actuator reset failed during error recovery. These
//!   are absorbed at the controller boundary rather than propagated, so the
//!   controller always returns to a ready condition.
//! - **`Io`**: Wraps standard `std::io::Error` for file access around
//!   settings loading.
//!
//! By using `#[from]`, `ScanError` can be seamlessly created from underlying
//! error types, simplifying error handling throughout the crate with the `?`
//! operator. Note that none of these escape the controller's `start()` or
//! `reset()` actions; callers observe failures only through the scan state
//! and status message.

use thiserror::Error;

/// Convenience alias for results using the application error type.
pub type AppResult<T> = std::result::Result<T, ScanError>;

/// Application-wide error type for the scan controller.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Settings file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Settings parsed but are semantically invalid.
    #[error("Configuration validation error: {0}")]
    Configuration(String),

    /// An actuator move invocation failed mid-scan.
    #[error("Motion error: {0}")]
    Motion(String),

    /// An actuator reset failed during error recovery.
    #[error("Recovery error: {0}")]
    Recovery(String),

    /// I/O failure around settings loading.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
