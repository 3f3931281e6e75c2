//! Geodesic measurement, great-circle arcs and route interpolation.

pub mod arc;
pub mod interpolate;
pub mod measure;
pub mod queries;

pub use arc::{great_circle_arc, great_circle_line, DEFAULT_ARC_POINTS};
pub use interpolate::{point_at_progress, point_at_progress_with};
pub use measure::{HaversineWalker, PathMeasure};
pub use queries::{haversine_distance, haversine_intermediate};
