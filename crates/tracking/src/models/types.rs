//! Core data types and enums for shipment tracking.

use strum::{Display, EnumString, IntoStaticStr};

// ============================================================================
// Enums
// ============================================================================

/// Lifecycle status reported by the shipment backend.
///
/// Wire form is kebab-case (`in-transit`, `out-for-delivery`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ShipmentStatus {
    Pending,
    PickedUp,
    InTransit,
    OutForDelivery,
    Delivered,
    Returned,
    Paused,
}

impl ShipmentStatus {
    /// Parse a backend status string. Accepts `_` in place of `-`.
    pub fn from_wire(value: &str) -> Result<Self> {
        let normalized = value.trim().replace('_', "-");
        normalized
            .parse()
            .map_err(|_| TrackingError::UnknownStatus(value.to_string()))
    }

    /// Delivered and returned shipments are complete regardless of timestamps.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Returned)
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TrackingError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Unknown shipment status: {0}")]
    UnknownStatus(String),

    #[error("Routing failed: {0}")]
    Routing(String),

    #[error("Degenerate route with {points} point(s)")]
    DegenerateRoute { points: usize },
}

pub type Result<T> = std::result::Result<T, TrackingError>;
