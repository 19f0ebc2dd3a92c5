//! Random scan pipeline: point generation, path optimization, motion
//! sequencing, and the controller state machine that ties them together.
//!
//! Data flows strictly downward:
//!
//! ```text
//! ScanController -> PointGenerator -> PathOptimizer -> MotionSequencer -> axes
//! ```

pub mod controller;
pub mod generator;
pub mod optimizer;
pub mod point;
pub mod sequencer;

pub use controller::{ScanController, ScanState, ScanSummary};
pub use generator::generate_points;
pub use optimizer::{optimal_path, path_length};
pub use point::Point;
pub use sequencer::run_sequence;
