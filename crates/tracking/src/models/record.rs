//! Wire-level shipment record as delivered by the REST backend.
//!
//! Every field is optional and loosely typed. Conversion into [`ShipmentTimeState`]
//! never fails: unreadable values are dropped and the estimator degrades instead.
//! With the `serde` feature, off-type JSON values are dropped the same way at
//! deserialization time rather than rejecting the record.

use tracing::{debug, warn};

use crate::identifiers::TrackingNumber;
use crate::models::shipment::{parse_timestamp, DeliveryTarget, ShipmentTimeState};
use crate::models::types::ShipmentStatus;
#[cfg(feature = "serde")]
use crate::models::wire;

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShipmentRecord {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "wire::loose_tracking_number"))]
    pub tracking_number: Option<TrackingNumber>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "wire::loose_string"))]
    pub status: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "wire::loose_string"))]
    pub departed_at: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "wire::loose_string"))]
    pub estimated_delivery: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "wire::loose_bool"))]
    pub is_paused: Option<bool>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "wire::loose_string"))]
    pub paused_at: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "wire::loose_u64"))]
    pub total_paused_ms: Option<u64>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "wire::loose_f64"))]
    pub computed_progress: Option<f64>,
}

impl ShipmentRecord {
    pub fn to_time_state(&self) -> ShipmentTimeState {
        let status = match self.status.as_deref() {
            Some(raw) => ShipmentStatus::from_wire(raw).unwrap_or_else(|err| {
                warn!(tracking_number = ?self.tracking_number, "{err}; treating as in-transit");
                ShipmentStatus::InTransit
            }),
            None => {
                warn!(tracking_number = ?self.tracking_number, "missing status; treating as in-transit");
                ShipmentStatus::InTransit
            }
        };

        ShipmentTimeState {
            status,
            departed_at: lenient("departed_at", self.departed_at.as_deref(), parse_timestamp),
            estimated_delivery: lenient(
                "estimated_delivery",
                self.estimated_delivery.as_deref(),
                |s| s.parse::<DeliveryTarget>(),
            ),
            is_paused: self.is_paused.unwrap_or(false),
            paused_at: lenient("paused_at", self.paused_at.as_deref(), parse_timestamp),
            total_paused_ms: self.total_paused_ms.unwrap_or(0),
            computed_progress: self.computed_progress.filter(|p| p.is_finite()),
        }
    }
}

impl From<&ShipmentRecord> for ShipmentTimeState {
    fn from(record: &ShipmentRecord) -> Self {
        record.to_time_state()
    }
}

fn lenient<T, E: std::fmt::Display>(
    field: &str,
    raw: Option<&str>,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> Option<T> {
    let raw = raw.filter(|s| !s.trim().is_empty())?;
    match parse(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(field, "dropping unreadable value: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn record() -> ShipmentRecord {
        ShipmentRecord {
            tracking_number: Some("AURA-2001".into()),
            status: Some("in-transit".into()),
            departed_at: Some("2025-01-15T00:00:00Z".into()),
            estimated_delivery: Some("2025-01-17".into()),
            is_paused: Some(false),
            paused_at: None,
            total_paused_ms: Some(1_000),
            computed_progress: Some(12.5),
        }
    }

    #[test]
    fn test_well_formed_record() {
        let state = record().to_time_state();

        assert_eq!(state.status, ShipmentStatus::InTransit);
        assert_eq!(
            state.departed_at,
            Some(Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(
            state.estimated_delivery,
            Some(DeliveryTarget::Date(NaiveDate::from_ymd_opt(2025, 1, 17).unwrap()))
        );
        assert_eq!(state.total_paused_ms, 1_000);
        assert_eq!(state.computed_progress, Some(12.5));
    }

    #[test]
    fn test_malformed_fields_become_absent() {
        let rec = ShipmentRecord {
            departed_at: Some("not a date".into()),
            estimated_delivery: Some("".into()),
            paused_at: Some("2025-13-45".into()),
            computed_progress: Some(f64::NAN),
            ..record()
        };
        let state = ShipmentTimeState::from(&rec);

        assert_eq!(state.departed_at, None);
        assert_eq!(state.estimated_delivery, None);
        assert_eq!(state.paused_at, None);
        assert_eq!(state.computed_progress, None);
    }

    #[test]
    fn test_unknown_or_missing_status_is_active() {
        let unknown = ShipmentRecord {
            status: Some("lost-at-sea".into()),
            ..record()
        };
        assert_eq!(unknown.to_time_state().status, ShipmentStatus::InTransit);

        let missing = ShipmentRecord::default();
        let state = missing.to_time_state();
        assert_eq!(state.status, ShipmentStatus::InTransit);
        assert!(!state.is_paused);
        assert_eq!(state.total_paused_ms, 0);
    }

    #[cfg(feature = "serde")]
    mod json {
        use super::*;

        #[test]
        fn test_deserialize_full_record() {
            let rec: ShipmentRecord = serde_json::from_str(
                r#"{
                    "tracking_number": " AURA-2001 ",
                    "status": "in-transit",
                    "departed_at": "2025-01-15T00:00:00Z",
                    "estimated_delivery": "2025-01-17",
                    "is_paused": false,
                    "paused_at": null,
                    "total_paused_ms": 1000,
                    "computed_progress": 12.5
                }"#,
            )
            .unwrap();

            assert_eq!(rec, record());
        }

        #[test]
        fn test_missing_and_null_fields_default() {
            let rec: ShipmentRecord =
                serde_json::from_str(r#"{"status": "pending", "paused_at": null}"#).unwrap();

            assert_eq!(rec.tracking_number, None);
            assert_eq!(rec.paused_at, None);
            assert_eq!(rec.total_paused_ms, None);
            assert_eq!(rec.to_time_state().status, ShipmentStatus::Pending);
        }

        #[test]
        fn test_stringly_typed_numbers_are_read() {
            let rec: ShipmentRecord = serde_json::from_str(
                r#"{
                    "tracking_number": 20417,
                    "is_paused": "true",
                    "total_paused_ms": "3600000",
                    "computed_progress": "48.25"
                }"#,
            )
            .unwrap();

            assert_eq!(rec.tracking_number, Some(TrackingNumber::new("20417")));
            assert_eq!(rec.is_paused, Some(true));
            assert_eq!(rec.total_paused_ms, Some(3_600_000));
            assert_eq!(rec.computed_progress, Some(48.25));
        }

        #[test]
        fn test_float_counter_is_rounded() {
            let rec: ShipmentRecord =
                serde_json::from_str(r#"{"total_paused_ms": 1500.0, "is_paused": 1}"#).unwrap();

            assert_eq!(rec.total_paused_ms, Some(1_500));
            assert_eq!(rec.is_paused, Some(true));
        }

        #[test]
        fn test_off_type_fields_become_absent() {
            let rec: ShipmentRecord = serde_json::from_str(
                r#"{
                    "status": "delivered",
                    "departed_at": 12345,
                    "estimated_delivery": {"date": "2025-01-17"},
                    "is_paused": "maybe",
                    "paused_at": [2025, 1, 16],
                    "total_paused_ms": -40,
                    "computed_progress": "n/a"
                }"#,
            )
            .unwrap();

            assert_eq!(rec.estimated_delivery, None);
            assert_eq!(rec.is_paused, None);
            assert_eq!(rec.paused_at, None);
            assert_eq!(rec.total_paused_ms, None);
            assert_eq!(rec.computed_progress, None);

            let state = rec.to_time_state();
            assert_eq!(state.status, ShipmentStatus::Delivered);
            assert_eq!(state.departed_at, None);
            assert_eq!(state.total_paused_ms, 0);
        }
    }
}
