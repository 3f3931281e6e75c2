//! GeoJSON snapshot for map renderers.

use anyhow::{Context, Result};
use aura_tracking::{format_distance, LiveEstimate, ResolvedRoute};
use geo::LineString;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};
use std::path::Path;

fn line_string_to_geojson(ls: &LineString<f64>) -> Value {
    Value::LineString(ls.coords().map(|c| vec![c.x, c.y]).collect())
}

fn route_feature(route: &ResolvedRoute) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("feature_type".to_string(), serde_json::json!("route"));
    properties.insert("synthetic".to_string(), serde_json::json!(route.is_synthetic));
    properties.insert("distance_m".to_string(), serde_json::json!(route.distance_m));
    properties.insert("distance".to_string(), serde_json::json!(format_distance(route.distance_m)));
    properties.insert("duration_s".to_string(), serde_json::json!(route.duration_s));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(line_string_to_geojson(&route.geometry))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn marker_feature(estimate: &LiveEstimate) -> Option<Feature> {
    let position = estimate.position?;

    let mut properties = JsonObject::new();
    properties.insert("feature_type".to_string(), serde_json::json!("marker"));
    properties.insert("progress".to_string(), serde_json::json!(estimate.progress));
    properties.insert("remaining".to_string(), serde_json::json!(estimate.remaining.to_string()));

    Some(Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![position.x, position.y]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    })
}

/// Route line plus the current marker (when a position is known).
pub fn snapshot_collection(route: &ResolvedRoute, estimate: &LiveEstimate) -> FeatureCollection {
    let mut features = vec![route_feature(route)];
    features.extend(marker_feature(estimate));

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

pub fn write_snapshot_geojson(
    route: &ResolvedRoute,
    estimate: &LiveEstimate,
    output_path: &Path,
) -> Result<()> {
    tracing::info!("Writing route snapshot to {}", output_path.display());

    let geojson = GeoJson::from(snapshot_collection(route, estimate));
    let json_string = serde_json::to_string_pretty(&geojson)
        .context("Failed to serialize GeoJSON")?;

    std::fs::write(output_path, json_string)
        .with_context(|| format!("Failed to write GeoJSON to {}", output_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_tracking::RemainingTime;
    use geo::Coord;

    fn route() -> ResolvedRoute {
        ResolvedRoute {
            geometry: LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]),
            distance_m: 157_000.0,
            duration_s: 18_900.0,
            is_synthetic: true,
        }
    }

    #[test]
    fn test_snapshot_has_route_and_marker() {
        let estimate = LiveEstimate {
            progress: 25.0,
            remaining: RemainingTime::ArrivingNow,
            position: Some(Coord { x: 0.25, y: 0.25 }),
        };

        let collection = snapshot_collection(&route(), &estimate);
        assert_eq!(collection.features.len(), 2);

        let route_props = collection.features[0].properties.as_ref().unwrap();
        assert_eq!(route_props["synthetic"], serde_json::json!(true));
        assert_eq!(route_props["distance"], serde_json::json!("157.0 km"));

        let marker_props = collection.features[1].properties.as_ref().unwrap();
        assert_eq!(marker_props["remaining"], serde_json::json!("Arriving now"));
        assert!(matches!(
            collection.features[1].geometry.as_ref().unwrap().value,
            Value::Point(ref p) if p == &vec![0.25, 0.25]
        ));
    }

    #[test]
    fn test_snapshot_without_position() {
        let estimate = LiveEstimate {
            progress: 0.0,
            remaining: RemainingTime::Calculating,
            position: None,
        };
        assert_eq!(snapshot_collection(&route(), &estimate).features.len(), 1);
    }

    #[test]
    fn test_write_snapshot() {
        let estimate = LiveEstimate {
            progress: 50.0,
            remaining: RemainingTime::Delivered,
            position: Some(Coord { x: 0.5, y: 0.5 }),
        };
        let path = std::env::temp_dir()
            .join(format!("aura-track-snapshot-{}.geojson", std::process::id()));

        write_snapshot_geojson(&route(), &estimate, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert!(written.contains("FeatureCollection"));
        assert!(written.contains("\"synthetic\": true"));
    }
}
