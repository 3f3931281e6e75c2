//! Type-safe identifiers for shipment entities.
//!
//! Identifiers use Arc<str> so snapshots can be cloned every polling tick for free.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Carrier-facing shipment identifier, stored trimmed.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String"))]
pub struct TrackingNumber(Arc<str>);

impl TrackingNumber {
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().trim().into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for TrackingNumber {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for TrackingNumber {}

impl Hash for TrackingNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TrackingNumber {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for TrackingNumber {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
