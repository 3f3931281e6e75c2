//! Pluggable road-routing trait.
//!
//! External crates implement this to provide real route geometry (OSRM, Mapbox, ...).

use std::future::Future;
use std::pin::Pin;

use geo::{Coord, LineString};

use crate::models::types::Result;

/// A route as returned by a road-routing service
#[derive(Clone, Debug, PartialEq)]
pub struct RoadRoute {
    pub geometry: LineString,
    pub distance_m: f64,
    pub duration_s: f64,
}

/// Fetch a road route between two `(lon, lat)` coordinates
pub trait RoadRouter: Send + Sync {
    fn route<'a>(
        &'a self,
        origin: Coord,
        destination: Coord,
    ) -> Pin<Box<dyn Future<Output = Result<RoadRoute>> + Send + 'a>>;
}
