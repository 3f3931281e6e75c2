//! Route resolution: real road geometry when available, a great-circle estimate otherwise.

use geo::{Coord, LineString};
use tracing::{debug, warn};

use crate::models::types::{Result, TrackingError};
use crate::network::traits::{RoadRoute, RoadRouter};
use crate::spatial::{great_circle_line, haversine_distance, DEFAULT_ARC_POINTS};

/// Assumptions used to estimate synthetic routes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SyntheticRouteConfig {
    /// Straight-line distance above which the leg is assumed to fly.
    pub air_threshold_m: f64,
    /// ~800 km/h
    pub air_speed_mps: f64,
    /// ~30 km/h, surface or sea freight
    pub surface_speed_mps: f64,
    pub arc_points: usize,
}

impl Default for SyntheticRouteConfig {
    fn default() -> Self {
        Self {
            air_threshold_m: 2_000_000.0,
            air_speed_mps: 222.0,
            surface_speed_mps: 8.3,
            arc_points: DEFAULT_ARC_POINTS,
        }
    }
}

impl SyntheticRouteConfig {
    fn speed_for(&self, distance_m: f64) -> f64 {
        if distance_m > self.air_threshold_m {
            self.air_speed_mps
        } else {
            self.surface_speed_mps
        }
    }
}

/// Route geometry plus distance and duration, tagged with where it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedRoute {
    pub geometry: LineString,
    pub distance_m: f64,
    pub duration_s: f64,
    /// `true` for estimated great-circle routes, `false` for real road geometry.
    pub is_synthetic: bool,
}

/// Great-circle route with haversine distance and speed-based duration.
pub fn synthetic_route(origin: Coord, destination: Coord, config: &SyntheticRouteConfig) -> ResolvedRoute {
    let distance_m = haversine_distance(origin, destination);
    let distance_m = if distance_m.is_finite() { distance_m } else { 0.0 };
    let speed = config.speed_for(distance_m);
    let duration_s = if speed > 0.0 { distance_m / speed } else { 0.0 };

    ResolvedRoute {
        geometry: great_circle_line(origin, destination, config.arc_points),
        distance_m,
        duration_s,
        is_synthetic: true,
    }
}

/// Use the routed result if it carries a real path, otherwise fall back.
pub fn resolve_route(
    routed: Result<RoadRoute>,
    origin: Coord,
    destination: Coord,
    config: &SyntheticRouteConfig,
) -> ResolvedRoute {
    let routed = routed.and_then(|route| {
        let points = route.geometry.0.len();
        if points <= 2 {
            Err(TrackingError::DegenerateRoute { points })
        } else {
            Ok(route)
        }
    });

    match routed {
        Ok(route) => ResolvedRoute {
            geometry: route.geometry,
            distance_m: route.distance_m,
            duration_s: route.duration_s,
            is_synthetic: false,
        },
        Err(err) => {
            debug!("falling back to great-circle route: {err}");
            synthetic_route(origin, destination, config)
        }
    }
}

/// Ask `router` for a road route and fall back to a synthetic one on any failure.
///
/// Never fails: a missing router or a routing error is an expected condition.
pub async fn route_or_fallback(
    router: Option<&dyn RoadRouter>,
    origin: Coord,
    destination: Coord,
    config: &SyntheticRouteConfig,
) -> ResolvedRoute {
    let routed = match router {
        Some(router) => router.route(origin, destination).await,
        None => Err(TrackingError::Routing("no road router configured".into())),
    };

    if let Err(err) = &routed {
        if router.is_some() {
            warn!("road routing failed: {err}");
        }
    }

    resolve_route(routed, origin, destination, config)
}
