//! Time-based progress and remaining-time estimation.
//!
//! Progress is active (non-paused) elapsed time over the scheduled window. Both
//! entry points are total: missing or inconsistent schedules map to sentinel values.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::format::format_duration;
use crate::models::shipment::ShipmentTimeState;
use crate::models::types::ShipmentStatus;

/// Where a shipment stands against its schedule at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Schedule {
    Terminal,
    Pending,
    /// Schedule missing, non-positive, or paused without a known start.
    Unknown,
    Active { total_ms: i64, elapsed_active_ms: i64 },
}

fn evaluate(state: &ShipmentTimeState, now: DateTime<Utc>) -> Schedule {
    if state.status.is_terminal() {
        return Schedule::Terminal;
    }
    if state.status == ShipmentStatus::Pending {
        return Schedule::Pending;
    }

    let (Some(departed_at), Some(target)) = (state.departed_at, state.estimated_delivery) else {
        return Schedule::Unknown;
    };

    let total_ms = (target.resolve() - departed_at).num_milliseconds();
    if total_ms <= 0 {
        debug!(total_ms, "non-positive delivery window");
        return Schedule::Unknown;
    }

    let current_pause_ms = if state.is_paused {
        match state.paused_at {
            Some(paused_at) => (now - paused_at).num_milliseconds().max(0),
            None => {
                debug!("paused without a pause start");
                return Schedule::Unknown;
            }
        }
    } else {
        0
    };

    let prior_pauses_ms = i64::try_from(state.total_paused_ms).unwrap_or(i64::MAX);
    let elapsed_active_ms = (now - departed_at)
        .num_milliseconds()
        .saturating_sub(prior_pauses_ms)
        .saturating_sub(current_pause_ms);

    Schedule::Active {
        total_ms,
        elapsed_active_ms,
    }
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn fallback_progress(state: &ShipmentTimeState) -> f64 {
    state
        .computed_progress
        .filter(|p| p.is_finite())
        .map(|p| p.clamp(0.0, 100.0))
        .unwrap_or(0.0)
}

/// Progress percentage in `0..=100`, rounded to two decimals.
pub fn compute_progress(state: &ShipmentTimeState, now: DateTime<Utc>) -> f64 {
    match evaluate(state, now) {
        Schedule::Terminal => 100.0,
        Schedule::Pending => 0.0,
        Schedule::Unknown => fallback_progress(state),
        Schedule::Active {
            total_ms,
            elapsed_active_ms,
        } => {
            let ratio = elapsed_active_ms as f64 / total_ms as f64;
            round_hundredths((ratio * 100.0).clamp(0.0, 100.0))
        }
    }
}

/// Remaining time, as shown next to the progress bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemainingTime {
    Delivered,
    AwaitingPickup,
    Calculating,
    ArrivingNow,
    Remaining(Duration),
}

impl fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delivered => write!(f, "Delivered"),
            Self::AwaitingPickup => write!(f, "Awaiting pickup"),
            Self::Calculating => write!(f, "Calculating..."),
            Self::ArrivingNow => write!(f, "Arriving now"),
            Self::Remaining(left) => {
                write!(f, "{} remaining", format_duration(left.as_secs_f64()))
            }
        }
    }
}

pub fn remaining_time(state: &ShipmentTimeState, now: DateTime<Utc>) -> RemainingTime {
    match evaluate(state, now) {
        Schedule::Terminal => RemainingTime::Delivered,
        Schedule::Pending => RemainingTime::AwaitingPickup,
        Schedule::Unknown => RemainingTime::Calculating,
        Schedule::Active {
            total_ms,
            elapsed_active_ms,
        } => {
            let remaining_ms = total_ms.saturating_sub(elapsed_active_ms).max(0);
            if remaining_ms == 0 {
                RemainingTime::ArrivingNow
            } else {
                RemainingTime::Remaining(Duration::from_millis(remaining_ms as u64))
            }
        }
    }
}

/// [`remaining_time`] rendered as text.
pub fn compute_remaining(state: &ShipmentTimeState, now: DateTime<Utc>) -> String {
    remaining_time(state, now).to_string()
}
