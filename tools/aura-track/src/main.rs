use anyhow::{bail, Context, Result};
use aura_tracking::prelude::*;
use chrono::{DateTime, TimeDelta, Utc};
use clap::Parser;
use geo::Coord;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::Level;

mod osrm;
mod output;

use osrm::{OsrmRouter, DEFAULT_OSRM_URL};
use output::write_snapshot_geojson;

/// Matches the dashboard's refresh cadence.
const POLL_INTERVAL: Duration = Duration::from_secs(2);

#[derive(Parser, Debug)]
#[command(
    name = "aura-track",
    author,
    version,
    about = "Estimate live shipment progress, ETA and map position",
    long_about = "Reads a shipment record (JSON, as served by the shipment backend) and prints \
                  its pause-aware progress percentage and remaining time.\n\n\
                  With --origin and --destination the shipment is also placed on a route: \
                  a road route from OSRM when --osrm-url is given and reachable, otherwise a \
                  synthetic great-circle arc with an estimated distance and duration."
)]
struct Args {
    /// Shipment record JSON file
    #[arg(short, long)]
    shipment: PathBuf,

    /// Evaluate at this instant (RFC 3339) instead of the system clock
    #[arg(long)]
    now: Option<String>,

    /// Route origin as "lon,lat"
    #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
    origin: Option<Coord>,

    /// Route destination as "lon,lat"
    #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
    destination: Option<Coord>,

    /// OSRM base URL for road routing (pass without a value for the public server)
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_OSRM_URL)]
    osrm_url: Option<String>,

    /// Cargo type for transport-mode classification (fragile, hazardous, perishable, express)
    #[arg(long, default_value = "")]
    cargo_type: String,

    /// Write a GeoJSON snapshot (route line and marker) to this file
    #[arg(long)]
    geojson: Option<PathBuf>,

    /// Keep re-estimating every 2 seconds
    #[arg(short, long)]
    watch: bool,

    /// Stop watching after this many ticks
    #[arg(long, default_value = "30")]
    ticks: u32,

    /// Resolution of synthetic great-circle routes
    #[arg(long, default_value_t = DEFAULT_ARC_POINTS)]
    arc_points: usize,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn parse_coordinate(s: &str) -> std::result::Result<Coord, String> {
    let (lon, lat) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"lon,lat\", got {s:?}"))?;

    let x: f64 = lon.trim().parse().map_err(|e| format!("bad longitude {lon:?}: {e}"))?;
    let y: f64 = lat.trim().parse().map_err(|e| format!("bad latitude {lat:?}: {e}"))?;

    if !(-180.0..=180.0).contains(&x) || !(-90.0..=90.0).contains(&y) {
        return Err(format!("coordinate out of range: {s}"));
    }

    Ok(Coord { x, y })
}

fn load_shipment(path: &Path) -> Result<ShipmentRecord> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read shipment record {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse shipment record {}", path.display()))
}

fn describe(record: &ShipmentRecord, state: &ShipmentTimeState, estimate: &LiveEstimate) -> String {
    let label = record
        .tracking_number
        .as_ref()
        .map(|t| t.to_string())
        .unwrap_or_else(|| "(untracked)".to_string());

    let mut line = format!(
        "{label}  {}  {:.2}%  {}",
        state.status, estimate.progress, estimate.remaining
    );
    if let Some(position) = estimate.position {
        line.push_str(&format!("  @ {:.5}, {:.5}", position.y, position.x));
    }
    line
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let record = load_shipment(&args.shipment)?;
    let state = record.to_time_state();

    let start: DateTime<Utc> = match &args.now {
        Some(raw) => parse_timestamp(raw).with_context(|| format!("Invalid --now value {raw:?}"))?,
        None => Utc::now(),
    };

    let route = match (args.origin, args.destination) {
        (Some(origin), Some(destination)) => {
            let router = args.osrm_url.as_deref().map(OsrmRouter::new);
            let config = SyntheticRouteConfig {
                arc_points: args.arc_points,
                ..SyntheticRouteConfig::default()
            };

            let route = route_or_fallback(
                router.as_ref().map(|r| r as &dyn RoadRouter),
                origin,
                destination,
                &config,
            )
            .await;

            tracing::info!(
                "Route: {} ({}, ~{}){}",
                format_distance(route.distance_m),
                if route.is_synthetic { "estimated" } else { "road" },
                format_duration(route.duration_s),
                if route.is_synthetic { " great-circle fallback" } else { "" }
            );
            let modes = classify_transport_labels(route.distance_m, &args.cargo_type);
            tracing::info!("Transport: {}", modes.join(" -> "));

            Some(route)
        }
        (None, None) => None,
        _ => bail!("--origin and --destination must be given together"),
    };

    let geometry = route.as_ref().map(|r| &r.geometry);
    let mut estimate = LiveEstimate::compute(&state, geometry, start);
    println!("{}", describe(&record, &state, &estimate));

    if args.watch && !state.status.is_terminal() {
        let started = Instant::now();
        let mut interval = tokio::time::interval(POLL_INTERVAL);
        interval.tick().await; // first tick fires immediately

        for _ in 0..args.ticks {
            interval.tick().await;
            let now = start + TimeDelta::from_std(started.elapsed()).unwrap_or(TimeDelta::zero());
            estimate = LiveEstimate::compute(&state, geometry, now);
            println!("{}", describe(&record, &state, &estimate));
        }
    }

    if let Some(path) = &args.geojson {
        match &route {
            Some(route) => write_snapshot_geojson(route, &estimate, path)?,
            None => tracing::warn!("--geojson needs --origin and --destination; nothing written"),
        }
    }

    Ok(())
}
