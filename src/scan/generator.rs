//! Random point generation inside the configured bounding rectangle.

use rand::Rng;

use crate::config::ScanSettings;
use crate::error::AppResult;
use crate::scan::point::Point;

/// Sample `settings.num_points` points, each coordinate drawn independently
/// and uniformly from the inclusive range of its axis.
///
/// The random source is injected so callers can seed a `StdRng` for
/// reproducible scans. Bounds are validated before any sampling occurs;
/// `num_points == 0` yields an empty set.
pub fn generate_points<R: Rng + ?Sized>(
    settings: &ScanSettings,
    rng: &mut R,
) -> AppResult<Vec<Point>> {
    settings.validate()?;

    let points = (0..settings.num_points)
        .map(|_| {
            Point::new(
                rng.gen_range(settings.x_min..=settings.x_max),
                rng.gen_range(settings.y_min..=settings.y_max),
            )
        })
        .collect();
    Ok(points)
}
