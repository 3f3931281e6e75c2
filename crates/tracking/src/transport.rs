//! Transport-mode classification from distance and cargo type.

use strum::{Display, EnumString};

/// Handling and transport legs shown on a quote or shipment summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum TransportMode {
    #[strum(to_string = "Air Freight")]
    AirFreight,
    #[strum(to_string = "Ground Transport")]
    GroundTransport,
    #[strum(to_string = "Long-Haul Trucking")]
    LongHaulTrucking,
    #[strum(to_string = "Interstate Trucking")]
    InterstateTrucking,
    #[strum(to_string = "Regional Van")]
    RegionalVan,
    #[strum(to_string = "Local Courier")]
    LocalCourier,
    #[strum(to_string = "Fragile Handling")]
    FragileHandling,
    #[strum(to_string = "HazMat Certified")]
    HazMatCertified,
    #[strum(to_string = "Cold Chain")]
    ColdChain,
    #[strum(to_string = "Priority Express")]
    PriorityExpress,
    #[strum(to_string = "Last-Mile Delivery")]
    LastMileDelivery,
}

/// Cargo categories that need an extra handling leg.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum CargoType {
    Fragile,
    #[strum(serialize = "hazardous", serialize = "hazmat")]
    Hazardous,
    Perishable,
    Express,
}

impl CargoType {
    fn handling(&self) -> TransportMode {
        match self {
            Self::Fragile => TransportMode::FragileHandling,
            Self::Hazardous => TransportMode::HazMatCertified,
            Self::Perishable => TransportMode::ColdChain,
            Self::Express => TransportMode::PriorityExpress,
        }
    }
}

/// Ordered transport legs for a shipment.
///
/// Distance picks the main leg, known cargo types add a handling leg, and every
/// shipment ends with last-mile delivery. Unrecognized cargo adds nothing.
pub fn classify_transport_modes(distance_m: f64, cargo_type: &str) -> Vec<TransportMode> {
    let km = if distance_m.is_finite() { distance_m / 1000.0 } else { 0.0 };

    let mut modes = if km > 5000.0 {
        vec![TransportMode::AirFreight, TransportMode::GroundTransport]
    } else if km > 1000.0 {
        vec![TransportMode::LongHaulTrucking]
    } else if km > 200.0 {
        vec![TransportMode::InterstateTrucking]
    } else if km > 50.0 {
        vec![TransportMode::RegionalVan]
    } else {
        vec![TransportMode::LocalCourier]
    };

    if let Ok(cargo) = cargo_type.trim().parse::<CargoType>() {
        modes.push(cargo.handling());
    }

    modes.push(TransportMode::LastMileDelivery);
    modes
}

/// [`classify_transport_modes`] as display labels.
pub fn classify_transport_labels(distance_m: f64, cargo_type: &str) -> Vec<String> {
    classify_transport_modes(distance_m, cargo_type)
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_haul_hazardous() {
        let labels = classify_transport_labels(6_500_000.0, "Hazardous");

        assert_eq!(
            labels,
            vec!["Air Freight", "Ground Transport", "HazMat Certified", "Last-Mile Delivery"]
        );
    }

    #[test]
    fn test_distance_thresholds() {
        let main_leg = |m: f64| classify_transport_modes(m, "")[0];

        assert_eq!(main_leg(5_000_001.0), TransportMode::AirFreight);
        assert_eq!(main_leg(5_000_000.0), TransportMode::LongHaulTrucking);
        assert_eq!(main_leg(1_000_000.0), TransportMode::InterstateTrucking);
        assert_eq!(main_leg(200_000.0), TransportMode::RegionalVan);
        assert_eq!(main_leg(50_000.0), TransportMode::LocalCourier);
        assert_eq!(main_leg(0.0), TransportMode::LocalCourier);
        assert_eq!(main_leg(f64::NAN), TransportMode::LocalCourier);
    }

    #[test]
    fn test_cargo_add_ons() {
        assert_eq!(
            classify_transport_modes(10_000.0, "fragile"),
            vec![TransportMode::LocalCourier, TransportMode::FragileHandling, TransportMode::LastMileDelivery]
        );
        assert!(classify_transport_modes(10_000.0, "PERISHABLE").contains(&TransportMode::ColdChain));
        assert!(classify_transport_modes(10_000.0, " Express ").contains(&TransportMode::PriorityExpress));
        assert!(classify_transport_modes(10_000.0, "hazmat").contains(&TransportMode::HazMatCertified));
    }

    #[test]
    fn test_unknown_cargo_adds_nothing() {
        assert_eq!(
            classify_transport_labels(300_000.0, "Furniture"),
            vec!["Interstate Trucking", "Last-Mile Delivery"]
        );
    }
}
