//! Geography key resolution
//!
//! Builds the lane string a shipment is looked up under, for a given geography
//! scheme. Resolution never fails: a scheme name that cannot be parsed yields
//! a sentinel lane that matches nothing in any price list.

use crate::domain::model::{GeographyScheme, ShipmentRecord};

/// Sentinel lane for unrecognized scheme names
pub const UNKNOWN_LANE: &str = "UNKNOWN";

/// Lane for a shipment under a known scheme:
/// `{source field at scheme.source}-{destination field at scheme.destination}`
pub fn lane_for_scheme(shipment: &ShipmentRecord, scheme: GeographyScheme) -> String {
    format!(
        "{}-{}",
        shipment.source.field(scheme.source),
        shipment.destination.field(scheme.destination)
    )
}

/// Lane for a shipment under a raw scheme name, typically the shipment's own
/// Rate Geography cell. Malformed names resolve to [`UNKNOWN_LANE`].
pub fn lane_for_name(shipment: &ShipmentRecord, name: &str) -> String {
    match GeographyScheme::parse(name) {
        Some(scheme) => lane_for_scheme(shipment, scheme),
        None => UNKNOWN_LANE.to_string(),
    }
}
