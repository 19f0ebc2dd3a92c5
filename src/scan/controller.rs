//! Scan controller state machine.
//!
//! `ScanController` orchestrates one random scan at a time: generate points,
//! optimize the visiting order, then sequence the motion. It owns the
//! device-wide [`ScanState`] and a free-text status message, which are the
//! only externally visible signals of progress and failure.
//!
//! Every failure inside `start` is contained at the controller boundary and
//! translated into the `Error` state plus a status message; neither `start`
//! nor `reset` ever surfaces an error to the caller.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::ScanSettings;
use crate::error::{AppResult, ScanError};
use crate::hardware::capabilities::Axis;
use crate::scan::generator::generate_points;
use crate::scan::optimizer::optimal_path;
use crate::scan::sequencer::run_sequence;

/// Operational state of the scan controller.
///
/// Exactly one value at a time; transitions happen only inside `start` and
/// `reset`:
///
/// ```text
/// Ready --start--> Processing --> Moving --> Ready
///                      |            |
///                      +--> Error <-+
///                            |
///                          reset --> Ready
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanState {
    /// Idle and accepting a new scan.
    Ready,
    /// Generating points and optimizing the path.
    Processing,
    /// Sequencing motion through the optimized path.
    Moving,
    /// Halted after a failure; terminal until an explicit reset.
    Error,
}

impl fmt::Display for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScanState::Ready => "Ready",
            ScanState::Processing => "Processing",
            ScanState::Moving => "Moving",
            ScanState::Error => "Error",
        };
        f.write_str(name)
    }
}

/// Record of one completed scan.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScanSummary {
    /// UTC time the scan was started.
    pub started_at: DateTime<Utc>,
    /// UTC time the final waypoint was reached.
    pub finished_at: DateTime<Utc>,
    /// Number of waypoints visited.
    pub num_points: usize,
    /// Total travel distance of the optimized path.
    pub path_length: f64,
}

/// Drives two axes through randomly sampled points under a guarded state
/// machine. Settings are fixed at construction; `ScanState` is the only
/// memory carried across scans.
pub struct ScanController {
    settings: ScanSettings,
    x_axis: Arc<dyn Axis>,
    y_axis: Arc<dyn Axis>,
    rng: Box<dyn RngCore + Send>,
    state: ScanState,
    status: String,
    last_summary: Option<ScanSummary>,
}

impl ScanController {
    /// Create a controller with an entropy-seeded random source.
    pub fn new(settings: ScanSettings, x_axis: Arc<dyn Axis>, y_axis: Arc<dyn Axis>) -> Self {
        Self::with_rng(settings, x_axis, y_axis, Box::new(StdRng::from_entropy()))
    }

    /// Create a controller with an injected random source, e.g. a seeded
    /// `StdRng` for reproducible scans.
    pub fn with_rng(
        settings: ScanSettings,
        x_axis: Arc<dyn Axis>,
        y_axis: Arc<dyn Axis>,
        rng: Box<dyn RngCore + Send>,
    ) -> Self {
        Self {
            settings,
            x_axis,
            y_axis,
            rng,
            state: ScanState::Ready,
            status: String::new(),
            last_summary: None,
        }
    }

    /// Current operational state.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Free-text status reflecting the last significant event.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Record of the most recently completed scan, if any.
    pub fn last_summary(&self) -> Option<&ScanSummary> {
        self.last_summary.as_ref()
    }

    /// Controller settings.
    pub fn settings(&self) -> &ScanSettings {
        &self.settings
    }

    /// Run one scan: generate, optimize, move.
    ///
    /// Rejected with no state change and no side effect unless the
    /// controller is `Ready`. Never returns an error; the outcome is
    /// observable through [`state`](Self::state) and
    /// [`status`](Self::status) only.
    pub async fn start(&mut self) {
        if self.state != ScanState::Ready {
            log::warn!("Scan start rejected: controller is {}", self.state);
            return;
        }

        self.state = ScanState::Processing;
        log::info!(
            "Scan started: {} points in [{}, {}] x [{}, {}]",
            self.settings.num_points,
            self.settings.x_min,
            self.settings.x_max,
            self.settings.y_min,
            self.settings.y_max
        );

        match self.run_scan().await {
            Ok(summary) => {
                log::info!(
                    "Scan complete: {} waypoints, path length {:.4}",
                    summary.num_points,
                    summary.path_length
                );
                self.last_summary = Some(summary);
                self.status = "Scan complete".to_string();
                self.state = ScanState::Ready;
            }
            Err(e) => {
                log::error!("Scan error: {}", e);
                self.status = format!("Error during scan: {}", e);
                self.state = ScanState::Error;
            }
        }
    }

    /// Recover from `Error` back to `Ready`.
    ///
    /// Rejected with no state change and no side effect unless the
    /// controller is `Error`. Both axes get a best-effort reset; reset
    /// failures are logged and swallowed, so recovery always completes.
    pub async fn reset(&mut self) {
        if self.state != ScanState::Error {
            log::warn!("Reset rejected: controller is {}", self.state);
            return;
        }

        self.state = ScanState::Ready;
        self.status.clear();
        log::info!("Controller reset to Ready");

        for (name, axis) in [("x", &self.x_axis), ("y", &self.y_axis)] {
            if let Err(e) = axis.reset().await {
                // Absorbed: recovery always completes.
                let err = ScanError::Recovery(format!("{} axis: {}", name, e));
                log::warn!("{}", err);
            }
        }
    }

    async fn run_scan(&mut self) -> AppResult<ScanSummary> {
        let started_at = Utc::now();

        let points = generate_points(&self.settings, &mut *self.rng)?;
        let (path, path_length) = optimal_path(&points);

        self.status = "Starting scan".to_string();
        self.state = ScanState::Moving;
        run_sequence(&path, self.x_axis.as_ref(), self.y_axis.as_ref()).await?;

        Ok(ScanSummary {
            started_at,
            finished_at: Utc::now(),
            num_points: path.len(),
            path_length,
        })
    }
}
