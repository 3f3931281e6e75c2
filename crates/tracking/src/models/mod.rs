//! Shipment data models and types.

pub mod record;
pub mod shipment;
pub mod types;
#[cfg(feature = "serde")]
pub mod wire;

// Re-exports for convenience
pub use record::ShipmentRecord;
pub use shipment::{parse_timestamp, DeliveryTarget, ShipmentTimeState};
pub use types::{Result, ShipmentStatus, TrackingError};
