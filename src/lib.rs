//! Core library for the rust_scan application.
//!
//! This library contains the configuration, error types, hardware capability
//! traits, and the scan pipeline (point generation, path optimization,
//! motion sequencing, controller state machine) for a two-axis random scan
//! system. It is used by the demo binary and by integration tests driving
//! mock hardware.

pub mod config;
pub mod error;
pub mod hardware;
pub mod scan;

pub use config::ScanSettings;
pub use error::{AppResult, ScanError};
pub use hardware::{Axis, MockAxis};
pub use scan::{ScanController, ScanState, ScanSummary};
