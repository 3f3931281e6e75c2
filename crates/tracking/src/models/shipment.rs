//! Shipment time snapshot consumed by the progress calculator.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::models::types::*;

/// Naive layouts the backend has been seen to emit. Read as UTC.
const NAIVE_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Scheduled arrival, either a bare calendar day or an exact instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeliveryTarget {
    /// Arrival due by the end of this day (23:59:59 UTC).
    Date(NaiveDate),
    Instant(DateTime<Utc>),
}

impl DeliveryTarget {
    /// Resolve to the instant the delivery window closes.
    pub fn resolve(&self) -> DateTime<Utc> {
        match self {
            Self::Date(date) => date.and_time(end_of_day()).and_utc(),
            Self::Instant(instant) => *instant,
        }
    }
}

impl FromStr for DeliveryTarget {
    type Err = TrackingError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(Self::Date(date));
        }
        parse_timestamp(trimmed).map(Self::Instant)
    }
}

impl From<NaiveDate> for DeliveryTarget {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<DateTime<Utc>> for DeliveryTarget {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::Instant(instant)
    }
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN)
}

/// Parse a backend timestamp: RFC 3339, or a naive date-time taken as UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    let trimmed = s.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc));
    }

    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(trimmed, layout).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TrackingError::InvalidTimestamp(s.to_string()))
}

/// Snapshot of a shipment's lifecycle timestamps.
///
/// Supplied fresh by the caller on every tick; nothing here is retained between calls.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipmentTimeState {
    pub status: ShipmentStatus,
    pub departed_at: Option<DateTime<Utc>>,
    pub estimated_delivery: Option<DeliveryTarget>,
    pub is_paused: bool,
    /// Start of the current pause. Only meaningful while `is_paused`.
    pub paused_at: Option<DateTime<Utc>>,
    /// Milliseconds spent in earlier, finished pauses. Excludes the current pause.
    pub total_paused_ms: u64,
    /// Last progress value reported by the backend, used when the schedule is unusable.
    pub computed_progress: Option<f64>,
}

impl ShipmentTimeState {
    pub fn new(status: ShipmentStatus) -> Self {
        Self {
            status,
            departed_at: None,
            estimated_delivery: None,
            is_paused: false,
            paused_at: None,
            total_paused_ms: 0,
            computed_progress: None,
        }
    }

    pub fn with_schedule(
        mut self,
        departed_at: DateTime<Utc>,
        estimated_delivery: impl Into<DeliveryTarget>,
    ) -> Self {
        self.departed_at = Some(departed_at);
        self.estimated_delivery = Some(estimated_delivery.into());
        self
    }

    pub fn paused_since(mut self, paused_at: DateTime<Utc>) -> Self {
        self.is_paused = true;
        self.paused_at = Some(paused_at);
        self
    }

    pub fn with_prior_pauses(mut self, total_paused_ms: u64) -> Self {
        self.total_paused_ms = total_paused_ms;
        self
    }

    pub fn with_computed_progress(mut self, progress: f64) -> Self {
        self.computed_progress = Some(progress);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_target_resolves_to_end_of_day() {
        let target: DeliveryTarget = "2025-01-17".parse().unwrap();
        assert_eq!(
            target.resolve(),
            Utc.with_ymd_and_hms(2025, 1, 17, 23, 59, 59).unwrap()
        );
    }

    #[test]
    fn test_instant_target_is_kept() {
        let target: DeliveryTarget = "2025-01-17T10:30:00+02:00".parse().unwrap();
        assert_eq!(
            target.resolve(),
            Utc.with_ymd_and_hms(2025, 1, 17, 8, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_timestamp_layouts() {
        let expected = Utc.with_ymd_and_hms(2025, 1, 15, 6, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2025-01-15T06:00:00Z").unwrap(), expected);
        assert_eq!(parse_timestamp("2025-01-15T06:00:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2025-01-15 06:00:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2025-01-15T06:00:00.000").unwrap(), expected);

        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(TrackingError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_builder() {
        let departed = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
        let paused = Utc.with_ymd_and_hms(2025, 1, 16, 0, 0, 0).unwrap();
        let state = ShipmentTimeState::new(ShipmentStatus::Paused)
            .with_schedule(departed, NaiveDate::from_ymd_opt(2025, 1, 17).unwrap())
            .paused_since(paused)
            .with_prior_pauses(60_000);

        assert!(state.is_paused);
        assert_eq!(state.paused_at, Some(paused));
        assert_eq!(state.total_paused_ms, 60_000);
        assert!(matches!(state.estimated_delivery, Some(DeliveryTarget::Date(_))));
    }
}
