//! Hardware abstraction layer for motion axes.
//!
//! The controller never talks to a concrete stage type; it holds axes only
//! through the [`Axis`](capabilities::Axis) capability trait. `mock` provides
//! a simulated stage for tests and the demo binary.

pub mod capabilities;
pub mod mock;

pub use capabilities::Axis;
pub use mock::MockAxis;
