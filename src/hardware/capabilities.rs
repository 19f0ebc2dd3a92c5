//! Capability traits for position-controllable hardware.
//!
//! Any concrete axis driver that can accept a target position, execute a
//! move, and attempt a reset can be driven by the scan controller. The
//! controller depends only on this interface, never on a concrete type.

use anyhow::Result;
use async_trait::async_trait;

/// Capability for a single position-controllable axis.
///
/// All methods are suspension points: real drivers write registers or
/// commands over a transport, so even `set_target` may await I/O.
#[async_trait]
pub trait Axis: Send + Sync {
    /// Record the desired position. Carries no completion semantics by
    /// itself; the axis does not start moving until [`execute_move`]
    /// is invoked.
    ///
    /// [`execute_move`]: Axis::execute_move
    async fn set_target(&self, position: f64) -> Result<()>;

    /// Perform the move to the last recorded target, suspending until the
    /// axis is physically in position or the move has failed.
    async fn execute_move(&self) -> Result<()>;

    /// Best-effort return to a ready condition. Used only during error
    /// recovery; callers must tolerate failure.
    async fn reset(&self) -> Result<()>;
}
