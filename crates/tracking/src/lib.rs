//! # aura-tracking
//!
//! Live shipment progress and position estimation.
//!
//! ## Features
//!
//! - **Pause-aware progress**: percentage of active (non-paused) time against the schedule
//! - **Remaining time**: human-readable ETA with defined placeholder states
//! - **Route interpolation**: marker position by geodesic arc length along a polyline
//! - **Synthetic routes**: great-circle arcs when no road route is available
//! - **Pluggable routing**: implement [`RoadRouter`] for your directions service
//!
//! Every estimator takes `now` explicitly and never fails; missing or inconsistent
//! data maps to a fallback value instead of an error.
//!
//! ## Example
//!
//! ```
//! use aura_tracking::prelude::*;
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use geo::LineString;
//!
//! let state = ShipmentTimeState::new(ShipmentStatus::InTransit).with_schedule(
//!     Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(), // due by 23:59:59 UTC
//! );
//! let now = Utc.with_ymd_and_hms(2025, 1, 16, 11, 59, 59).unwrap();
//!
//! assert_eq!(compute_progress(&state, now), 50.0);
//! assert_eq!(compute_remaining(&state, now), "1d 12h remaining");
//!
//! let route = LineString::from(vec![(-74.0060, 40.7128), (-77.0369, 38.9072)]);
//! let marker = point_at_progress(&route, 100.0);
//! assert_eq!(marker, route.0[1]);
//! ```

pub mod format;
pub mod identifiers;
pub mod models;
pub mod network;
pub mod progress;
pub mod spatial;
pub mod transport;

// Re-exports for convenience
pub mod prelude {
    pub use crate::format::{format_distance, format_duration};
    pub use crate::identifiers::*;
    pub use crate::models::{record::*, shipment::*, types::*};
    pub use crate::network::{
        resolve_route, route_or_fallback, synthetic_route, ResolvedRoute, RoadRoute, RoadRouter,
        SyntheticRouteConfig,
    };
    pub use crate::progress::{
        compute_progress, compute_remaining, remaining_time, LiveEstimate, RemainingTime,
    };
    pub use crate::spatial::{
        great_circle_arc, great_circle_line, haversine_distance, point_at_progress,
        point_at_progress_with, HaversineWalker, PathMeasure, DEFAULT_ARC_POINTS,
    };
    pub use crate::transport::{
        classify_transport_labels, classify_transport_modes, CargoType, TransportMode,
    };
}

pub use prelude::*;
