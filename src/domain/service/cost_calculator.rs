//! Cost calculation
//!
//! Turns a matched price entry into a monetary cost according to the
//! shipment's cost basis. The basis never varies with the geography scheme
//! being tried; only the lane lookup does.

use crate::domain::model::{CostBasis, GeographyScheme, PriceListEntry, ShipmentRecord};
use crate::domain::service::lane_resolver::{lane_for_name, lane_for_scheme};
use crate::domain::service::rate_matcher::find_rate;

/// A priced shipment: the computed cost and the unit price behind it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub cost: f64,
    pub price: f64,
}

/// Cost of a shipment at a matched price entry
pub fn calculate_cost(shipment: &ShipmentRecord, entry: &PriceListEntry) -> f64 {
    match shipment.cost_basis {
        CostBasis::Distance => shipment.traveled_distance * entry.price,
        CostBasis::Weight => shipment.weight * entry.price,
        CostBasis::Flat => entry.price,
    }
}

/// Resolve, match, and price a shipment under a known scheme.
///
/// None when the price list has no entry for the shipment's lane and adjusted
/// cost category.
pub fn quote(
    shipment: &ShipmentRecord,
    scheme: GeographyScheme,
    entries: &[PriceListEntry],
) -> Option<Quote> {
    let lane = lane_for_scheme(shipment, scheme);
    quote_lane(shipment, &lane, entries)
}

/// Same as [`quote`], but for a raw scheme name such as the shipment's own
/// Rate Geography cell. Malformed names fall through to the sentinel lane and
/// therefore quote nothing.
pub fn quote_for_name(
    shipment: &ShipmentRecord,
    name: &str,
    entries: &[PriceListEntry],
) -> Option<Quote> {
    let lane = lane_for_name(shipment, name);
    quote_lane(shipment, &lane, entries)
}

fn quote_lane(shipment: &ShipmentRecord, lane: &str, entries: &[PriceListEntry]) -> Option<Quote> {
    let entry = find_rate(entries, lane, &shipment.adjusted_cost_category)?;
    Some(Quote {
        cost: calculate_cost(shipment, entry),
        price: entry.price,
    })
}
