//! Sequential motion execution over an ordered path.

use crate::error::{AppResult, ScanError};
use crate::hardware::capabilities::Axis;
use crate::scan::point::Point;

/// Drive both axes through `path`, one waypoint at a time.
///
/// For each waypoint the X axis receives its target and moves to completion,
/// then the Y axis does the same; no two moves are ever in flight at once.
/// The first failed operation aborts the remainder of the path and surfaces
/// as [`ScanError::Motion`] with the waypoint index. Partially completed
/// motion (X moved, Y not yet issued) is left as-is; there is no rollback.
pub async fn run_sequence(
    path: &[Point],
    x_axis: &dyn Axis,
    y_axis: &dyn Axis,
) -> AppResult<()> {
    for (index, point) in path.iter().enumerate() {
        log::debug!(
            "Waypoint {}/{}: moving to ({:.4}, {:.4})",
            index + 1,
            path.len(),
            point.x,
            point.y
        );

        x_axis
            .set_target(point.x)
            .await
            .map_err(|e| motion_error(index, "x", e))?;
        x_axis
            .execute_move()
            .await
            .map_err(|e| motion_error(index, "x", e))?;

        y_axis
            .set_target(point.y)
            .await
            .map_err(|e| motion_error(index, "y", e))?;
        y_axis
            .execute_move()
            .await
            .map_err(|e| motion_error(index, "y", e))?;
    }
    Ok(())
}

fn motion_error(waypoint: usize, axis: &str, source: anyhow::Error) -> ScanError {
    ScanError::Motion(format!("waypoint {} ({} axis): {}", waypoint, axis, source))
}
