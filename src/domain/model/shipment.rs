//! Historical shipment records
//!
//! One record per shipped load, taken from the 23-column historic cost table.
//! Records are immutable once loaded; the cost basis and the adjusted cost
//! category are derived once at ingestion and never recomputed.

use serde::{Deserialize, Serialize};

use super::geography::Granularity;

/// Cost type value that triggers the truck-type substitution
pub const EQUIPMENT_COST_TYPE: &str = "EQUIPMENT";

/// How a shipment's cost is computed from a unit price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostBasis {
    /// Cost = traveled distance x unit price (cost type `KM`)
    Distance,
    /// Cost = weight x unit price (cost type `KG`)
    Weight,
    /// Cost = unit price as-is (any other cost type, including `EQUIPMENT`)
    Flat,
}

impl CostBasis {
    /// Derive the basis from a raw Cost Type cell
    pub fn from_cost_type(cost_type: &str) -> Self {
        match cost_type {
            "KM" => CostBasis::Distance,
            "KG" => CostBasis::Weight,
            _ => CostBasis::Flat,
        }
    }
}

/// Category a price lookup matches on.
///
/// Equipment-priced rows are distinguished by their truck type rather than the
/// literal `EQUIPMENT` cost type; everything else matches on the cost type
/// itself. The same rule applies to shipments and price-list entries.
pub fn adjusted_cost_category(cost_type: &str, truck_type: &str) -> String {
    if cost_type == EQUIPMENT_COST_TYPE {
        truck_type.to_string()
    } else {
        cost_type.to_string()
    }
}

/// One side of a shipment at all four geography granularities
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Endpoint {
    pub location: String,
    pub city: String,
    pub postal: String,
    pub region: String,
}

impl Endpoint {
    /// Field value at the given granularity
    pub fn field(&self, granularity: Granularity) -> &str {
        match granularity {
            Granularity::Location => &self.location,
            Granularity::City => &self.city,
            Granularity::Postal => &self.postal,
            Granularity::Region => &self.region,
        }
    }
}

/// A historical shipment, as loaded from the historic cost table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentRecord {
    pub shipment_id: String,
    /// Pass-through; the engine never computes on the date
    pub shipment_date: String,
    pub carrier: String,
    pub mode: String,
    pub movement: String,
    pub source: Endpoint,
    pub destination: Endpoint,
    pub weight: f64,
    pub volume: Option<f64>,
    pub loading_meters: Option<f64>,
    pub truck_type: String,
    pub traveled_distance: f64,
    /// Historical total cost the recalculation is compared against
    pub total_cost: f64,
    /// Declared geography scheme, raw as provided (e.g. `CITY-CITY`)
    pub rate_geography: String,
    /// Raw cost type cell (e.g. `KM`, `KG`, `EQUIPMENT`)
    pub cost_type: String,
    pub remarks: String,
    pub own_reference: String,
    /// Derived from `cost_type` at ingestion
    pub cost_basis: CostBasis,
    /// Derived from `cost_type`/`truck_type` at ingestion
    pub adjusted_cost_category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_basis_from_cost_type() {
        assert_eq!(CostBasis::from_cost_type("KM"), CostBasis::Distance);
        assert_eq!(CostBasis::from_cost_type("KG"), CostBasis::Weight);
        assert_eq!(CostBasis::from_cost_type("EQUIPMENT"), CostBasis::Flat);
        assert_eq!(CostBasis::from_cost_type("FTL"), CostBasis::Flat);
        assert_eq!(CostBasis::from_cost_type(""), CostBasis::Flat);
        // Case-sensitive as provided
        assert_eq!(CostBasis::from_cost_type("km"), CostBasis::Flat);
    }

    #[test]
    fn adjusted_category_substitutes_truck_type_for_equipment() {
        assert_eq!(adjusted_cost_category("EQUIPMENT", "MEGA"), "MEGA");
        assert_eq!(adjusted_cost_category("KM", "MEGA"), "KM");
        assert_eq!(adjusted_cost_category("KG", ""), "KG");
    }

    #[test]
    fn endpoint_field_by_granularity() {
        let endpoint = Endpoint {
            location: "DE001".to_string(),
            city: "Hamburg".to_string(),
            postal: "20095".to_string(),
            region: "DE-North".to_string(),
        };
        assert_eq!(endpoint.field(Granularity::Location), "DE001");
        assert_eq!(endpoint.field(Granularity::City), "Hamburg");
        assert_eq!(endpoint.field(Granularity::Postal), "20095");
        assert_eq!(endpoint.field(Granularity::Region), "DE-North");
    }
}
