//! Great-circle arcs for routes without real geometry.
//!
//! Long air and sea legs drawn as straight lines on a web-mercator map cut across
//! land, so synthetic routes follow the sphere instead.

use geo::{Coord, LineString};

/// Resolution used when the caller does not pick one.
pub const DEFAULT_ARC_POINTS: usize = 100;

/// Angular distance (radians) below which two points are treated as the same place.
const ARC_EPSILON: f64 = 1e-6;

/// Evenly spaced points along the shortest spherical path from `origin` to
/// `destination`, both included exactly.
///
/// Returns `num_points + 1` coordinates (`num_points` of zero is treated as one).
/// Coincident or antipodal endpoints, where the interpolation is undefined,
/// yield just `[origin, destination]`.
pub fn great_circle_arc(origin: Coord, destination: Coord, num_points: usize) -> Vec<Coord> {
    let segments = num_points.max(1);

    let (lon1, lat1) = (origin.x.to_radians(), origin.y.to_radians());
    let (lon2, lat2) = (destination.x.to_radians(), destination.y.to_radians());

    let h = ((lat2 - lat1) / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * ((lon2 - lon1) / 2.0).sin().powi(2);
    let d = 2.0 * h.sqrt().min(1.0).asin();
    let sin_d = d.sin();

    if !d.is_finite() || d < ARC_EPSILON || sin_d.abs() < ARC_EPSILON {
        return vec![origin, destination];
    }

    let mut points = Vec::with_capacity(segments + 1);
    points.push(origin);

    for i in 1..segments {
        let f = i as f64 / segments as f64;
        let a = ((1.0 - f) * d).sin() / sin_d;
        let b = (f * d).sin() / sin_d;

        let x = a * lat1.cos() * lon1.cos() + b * lat2.cos() * lon2.cos();
        let y = a * lat1.cos() * lon1.sin() + b * lat2.cos() * lon2.sin();
        let z = a * lat1.sin() + b * lat2.sin();

        points.push(Coord {
            x: y.atan2(x).to_degrees(),
            y: z.atan2((x * x + y * y).sqrt()).to_degrees(),
        });
    }

    points.push(destination);
    points
}

/// [`great_circle_arc`] as a `LineString`.
pub fn great_circle_line(origin: Coord, destination: Coord, num_points: usize) -> LineString {
    LineString::new(great_circle_arc(origin, destination, num_points))
}
