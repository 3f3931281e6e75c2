//! Map a progress percentage onto a physical point along a route.

use geo::{Coord, LineString};
use tracing::debug;

use crate::spatial::measure::{HaversineWalker, PathMeasure};

/// Position at `progress` percent of the way along `route`, walking cumulative
/// geodesic arc length so markers stay on the road through sharp turns.
pub fn point_at_progress(route: &LineString, progress: f64) -> Coord {
    point_at_progress_with(&HaversineWalker, route, progress)
}

/// [`point_at_progress`] with a caller-chosen [`PathMeasure`].
pub fn point_at_progress_with<M: PathMeasure + ?Sized>(
    measure: &M,
    route: &LineString,
    progress: f64,
) -> Coord {
    let coords = route.0.as_slice();
    let progress = if progress.is_finite() { progress } else { 0.0 };

    let (first, last) = match (coords.first(), coords.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Coord { x: 0.0, y: 0.0 },
    };

    if coords.len() < 2 || progress <= 0.0 {
        return first;
    }
    if progress >= 100.0 {
        return last;
    }

    let geodesic = measure
        .path_length(coords)
        .filter(|length| *length > 0.0)
        .and_then(|length| measure.point_at_distance(coords, progress / 100.0 * length));

    match geodesic {
        Some(point) => point,
        None => {
            debug!(points = coords.len(), progress, "geodesic walk failed; using vertex fallback");
            vertex_at_progress(coords, progress)
        }
    }
}

/// Index-proportional vertex pick. Coarse, but cannot fail.
fn vertex_at_progress(coords: &[Coord], progress: f64) -> Coord {
    let last_index = coords.len().saturating_sub(1);
    let index = ((progress / 100.0) * last_index as f64).floor();
    let index = if index.is_finite() && index > 0.0 {
        (index as usize).min(last_index)
    } else {
        0
    };
    coords.get(index).copied().unwrap_or(Coord { x: 0.0, y: 0.0 })
}
