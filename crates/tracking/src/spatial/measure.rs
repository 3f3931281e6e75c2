//! Path measurement seam.
//!
//! The interpolator only needs a path length and a point-at-distance primitive.
//! Any geodesic backend can be plugged in behind [`PathMeasure`].

use geo::Coord;

use crate::spatial::queries::{haversine_distance, haversine_intermediate, is_finite_coord};

/// Length and arc-length lookup over a polyline, in meters.
///
/// Implementations return `None` when they cannot produce a usable answer;
/// callers treat that as a signal to fall back, never as an error.
pub trait PathMeasure {
    fn path_length(&self, path: &[Coord]) -> Option<f64>;

    /// Point `distance_m` meters along `path`, measured from its first coordinate.
    fn point_at_distance(&self, path: &[Coord], distance_m: f64) -> Option<Coord>;
}

/// Haversine walker: sums great-circle segment lengths and interpolates inside
/// the segment that contains the target distance.
#[derive(Clone, Copy, Debug, Default)]
pub struct HaversineWalker;

impl PathMeasure for HaversineWalker {
    fn path_length(&self, path: &[Coord]) -> Option<f64> {
        if path.len() < 2 || !path.iter().all(is_finite_coord) {
            return None;
        }

        let length: f64 = path
            .windows(2)
            .map(|pair| haversine_distance(pair[0], pair[1]))
            .sum();

        length.is_finite().then_some(length)
    }

    fn point_at_distance(&self, path: &[Coord], distance_m: f64) -> Option<Coord> {
        if path.len() < 2 || !distance_m.is_finite() || !path.iter().all(is_finite_coord) {
            return None;
        }

        let mut travelled = 0.0;
        for pair in path.windows(2) {
            let segment = haversine_distance(pair[0], pair[1]);
            if !segment.is_finite() {
                return None;
            }

            if travelled + segment >= distance_m {
                if segment <= 0.0 {
                    return Some(pair[0]);
                }
                let fraction = ((distance_m - travelled) / segment).clamp(0.0, 1.0);
                let point = haversine_intermediate(pair[0], pair[1], fraction);
                return is_finite_coord(&point).then_some(point);
            }

            travelled += segment;
        }

        // Past the end (or rounding just short of it)
        path.last().copied()
    }
}
