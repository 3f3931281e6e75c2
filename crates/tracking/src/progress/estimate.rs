//! One polling tick's worth of estimates.

use chrono::{DateTime, Utc};
use geo::{Coord, LineString};

use crate::models::shipment::ShipmentTimeState;
use crate::progress::calculator::{compute_progress, remaining_time, RemainingTime};
use crate::spatial::point_at_progress;

/// Progress, remaining time and marker position for a single instant.
#[derive(Clone, Debug, PartialEq)]
pub struct LiveEstimate {
    pub progress: f64,
    pub remaining: RemainingTime,
    /// `None` when no route geometry was supplied.
    pub position: Option<Coord>,
}

impl LiveEstimate {
    pub fn compute(state: &ShipmentTimeState, route: Option<&LineString>, now: DateTime<Utc>) -> Self {
        let progress = compute_progress(state, now);
        Self {
            progress,
            remaining: remaining_time(state, now),
            position: route.map(|route| point_at_progress(route, progress)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::ShipmentStatus;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn test_estimate_combines_progress_and_position() {
        let state = ShipmentTimeState::new(ShipmentStatus::InTransit).with_schedule(
            Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(),
        );
        let route = LineString::from(vec![(13.4050, 52.5200), (11.5820, 48.1351)]);
        let now = Utc.with_ymd_and_hms(2025, 1, 14, 0, 0, 0).unwrap();

        let estimate = LiveEstimate::compute(&state, Some(&route), now);
        assert_eq!(estimate.progress, 0.0);
        assert_eq!(estimate.position, Some(route.0[0]));
        assert_eq!(estimate.remaining.to_string(), "3d 23h remaining");

        let delivered = ShipmentTimeState::new(ShipmentStatus::Delivered);
        let estimate = LiveEstimate::compute(&delivered, Some(&route), now);
        assert_eq!(estimate.position, Some(route.0[1]));
        assert_eq!(estimate.remaining, RemainingTime::Delivered);
    }

    #[test]
    fn test_estimate_without_route() {
        let state = ShipmentTimeState::new(ShipmentStatus::Pending);
        let estimate = LiveEstimate::compute(&state, None, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());

        assert_eq!(estimate.position, None);
        assert_eq!(estimate.remaining, RemainingTime::AwaitingPickup);
    }
}
