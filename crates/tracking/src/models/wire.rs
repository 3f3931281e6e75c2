//! Forgiving field deserializers for backend records.
//!
//! The backend is not strict about JSON types: BIGINT/NUMERIC columns arrive as
//! strings, integer counters come back as `1500.0`, flags as `"true"` or `1`.
//! Each helper accepts whatever shape shows up and maps anything unreadable to
//! `None` instead of rejecting the whole record.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::identifiers::TrackingNumber;

/// Any JSON scalar, or something we ignore.
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
    #[allow(dead_code)]
    Other(IgnoredAny),
}

fn loose<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Loose>, D::Error> {
    Option::<Loose>::deserialize(deserializer)
}

pub fn loose_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match loose(deserializer)? {
        Some(Loose::Text(s)) => Some(s),
        Some(Loose::Unsigned(n)) => Some(n.to_string()),
        Some(Loose::Signed(n)) => Some(n.to_string()),
        Some(Loose::Float(n)) => Some(n.to_string()),
        Some(Loose::Bool(_)) | Some(Loose::Other(_)) => {
            debug!("dropping non-scalar value where text was expected");
            None
        }
        None => None,
    })
}

pub fn loose_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    let from_float = |n: f64| (n.is_finite() && n >= 0.0).then(|| n.round() as u64);

    let value = match loose(deserializer)? {
        Some(Loose::Unsigned(n)) => Some(n),
        Some(Loose::Float(n)) => from_float(n),
        Some(Loose::Text(s)) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(from_float))
        }
        Some(Loose::Signed(_)) | Some(Loose::Bool(_)) | Some(Loose::Other(_)) => None,
        None => return Ok(None),
    };

    if value.is_none() {
        debug!("dropping unreadable unsigned integer");
    }
    Ok(value)
}

pub fn loose_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = match loose(deserializer)? {
        Some(Loose::Unsigned(n)) => Some(n as f64),
        Some(Loose::Signed(n)) => Some(n as f64),
        Some(Loose::Float(n)) => Some(n),
        Some(Loose::Text(s)) => s.trim().parse::<f64>().ok(),
        Some(Loose::Bool(_)) | Some(Loose::Other(_)) => None,
        None => return Ok(None),
    };

    let value = value.filter(|n| n.is_finite());
    if value.is_none() {
        debug!("dropping unreadable number");
    }
    Ok(value)
}

pub fn loose_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    let value = match loose(deserializer)? {
        Some(Loose::Bool(b)) => Some(b),
        Some(Loose::Unsigned(0)) => Some(false),
        Some(Loose::Unsigned(1)) => Some(true),
        Some(Loose::Text(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        Some(_) => None,
        None => return Ok(None),
    };

    if value.is_none() {
        debug!("dropping unreadable flag");
    }
    Ok(value)
}

/// Tracking numbers are sometimes serialized as bare integers.
pub fn loose_tracking_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<TrackingNumber>, D::Error> {
    Ok(loose_string(deserializer)?
        .filter(|s| !s.trim().is_empty())
        .map(TrackingNumber::new))
}
