//! OSRM-backed road router.

use std::future::Future;
use std::pin::Pin;

use aura_tracking::{Result, RoadRoute, RoadRouter, TrackingError};
use geo::{Coord, LineString};
use serde::Deserialize;

/// Public demo server; fine for a handful of lookups, not for production polling.
pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";

#[derive(Debug, Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

impl OsrmResponse {
    fn into_road_route(self) -> Result<RoadRoute> {
        if self.code != "Ok" {
            return Err(TrackingError::Routing(format!(
                "OSRM returned {}: {}",
                self.code,
                self.message.unwrap_or_default()
            )));
        }

        let route = self
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| TrackingError::Routing("OSRM returned no routes".into()))?;

        let coords: Vec<Coord> = route
            .geometry
            .coordinates
            .into_iter()
            .map(|[x, y]| Coord { x, y })
            .collect();

        Ok(RoadRoute {
            geometry: LineString::new(coords),
            distance_m: route.distance,
            duration_s: route.duration,
        })
    }
}

pub struct OsrmRouter {
    client: reqwest::Client,
    base_url: String,
}

impl OsrmRouter {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn route_url(&self, origin: Coord, destination: Coord) -> String {
        format!(
            "{}/route/v1/driving/{},{};{},{}?overview=full&geometries=geojson",
            self.base_url, origin.x, origin.y, destination.x, destination.y
        )
    }
}

impl RoadRouter for OsrmRouter {
    fn route<'a>(
        &'a self,
        origin: Coord,
        destination: Coord,
    ) -> Pin<Box<dyn Future<Output = Result<RoadRoute>> + Send + 'a>> {
        Box::pin(async move {
            let url = self.route_url(origin, destination);
            tracing::debug!("requesting road route: {url}");

            let response = self
                .client
                .get(&url)
                .send()
                .await
                .and_then(|r| r.error_for_status())
                .map_err(|e| TrackingError::Routing(e.to_string()))?;

            let body: OsrmResponse = response
                .json()
                .await
                .map_err(|e| TrackingError::Routing(e.to_string()))?;

            body.into_road_route()
        })
    }
}
