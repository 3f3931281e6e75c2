//! Road-routing abstraction and route resolution.

pub mod resolve;
pub mod traits;

pub use resolve::{resolve_route, route_or_fallback, synthetic_route, ResolvedRoute, SyntheticRouteConfig};
pub use traits::{RoadRoute, RoadRouter};
