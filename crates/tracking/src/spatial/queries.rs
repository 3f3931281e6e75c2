//! Distance helpers on Earth's surface.
//!
//! Uses the Haversine formula via `geo`. Coordinates are `(x = lon, y = lat)`.

use geo::{Coord, HaversineDistance, HaversineIntermediate, Point};

/// Haversine distance between two coordinates in meters
pub fn haversine_distance(a: Coord, b: Coord) -> f64 {
    Point::from(a).haversine_distance(&Point::from(b))
}

/// Point a fraction `f` (0..=1) of the way from `a` to `b` along the great circle
pub fn haversine_intermediate(a: Coord, b: Coord, f: f64) -> Coord {
    Point::from(a).haversine_intermediate(&Point::from(b), f).into()
}

pub(crate) fn is_finite_coord(c: &Coord) -> bool {
    c.x.is_finite() && c.y.is_finite()
}
