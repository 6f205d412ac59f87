//! Per-shipment recalculation pass
//!
//! For each carrier price list, in upload order: price every shipment under
//! its own declared geography scheme, then under the whole simulation scheme
//! set, keeping only the cheapest simulated quote. A failed lookup is not an
//! error; it leaves the affected cost fields absent and the shipment in place.
//!
//! Percentage differences are computed unguarded: a zero historical cost
//! produces a non-finite value that is carried through to the output instead
//! of being masked.

use serde::{Deserialize, Serialize};

use crate::domain::model::{
    CarrierOutcome, GeographyScheme, PriceList, ShipmentRecord, SIMULATION_SCHEMES,
};
use crate::domain::service::cost_calculator::{quote, quote_for_name, Quote};

/// All outcomes for one carrier, parallel to the shipment table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierRecalculation {
    pub carrier: String,
    /// One outcome per shipment, in shipment order
    pub outcomes: Vec<CarrierOutcome>,
}

/// Run the pass for every carrier, in upload order
pub fn recalculate_all(
    shipments: &[ShipmentRecord],
    price_lists: &[PriceList],
) -> Vec<CarrierRecalculation> {
    price_lists
        .iter()
        .map(|price_list| recalculate_carrier(shipments, price_list))
        .collect()
}

/// Run the pass for a single carrier
pub fn recalculate_carrier(
    shipments: &[ShipmentRecord],
    price_list: &PriceList,
) -> CarrierRecalculation {
    let outcomes = shipments
        .iter()
        .map(|shipment| recalculate_shipment(shipment, price_list))
        .collect();
    CarrierRecalculation {
        carrier: price_list.label.clone(),
        outcomes,
    }
}

/// Declared-scheme quote plus minimum-simulation reduction for one shipment
pub fn recalculate_shipment(shipment: &ShipmentRecord, price_list: &PriceList) -> CarrierOutcome {
    let entries = &price_list.entries;

    let declared = quote_for_name(shipment, &shipment.rate_geography, entries);
    let (recalculated_cost, recalculated_price) = split(declared);
    let (difference, recalculated_percentage) = differences(recalculated_cost, shipment.total_cost);

    // Single reduction over the scheme set; strict `<` keeps the first scheme
    // on ties at the minimum.
    let mut best: Option<(Quote, GeographyScheme)> = None;
    for scheme in SIMULATION_SCHEMES {
        if let Some(quoted) = quote(shipment, scheme, entries) {
            let improves = match &best {
                Some((current, _)) => quoted.cost < current.cost,
                None => true,
            };
            if improves {
                best = Some((quoted, scheme));
            }
        }
    }

    let minimum_simulation_cost = best.as_ref().map(|(q, _)| q.cost);
    let minimum_simulation_price = best.as_ref().map(|(q, _)| q.price);
    let minimum_rate_geography = best.as_ref().map(|(_, scheme)| *scheme);
    let (simulation_difference, simulation_percentage) =
        differences(minimum_simulation_cost, shipment.total_cost);

    CarrierOutcome {
        recalculated_cost,
        recalculated_price,
        difference,
        recalculated_percentage,
        minimum_simulation_cost,
        minimum_simulation_price,
        minimum_rate_geography,
        simulation_difference,
        simulation_percentage,
    }
}

fn split(quote: Option<Quote>) -> (Option<f64>, Option<f64>) {
    match quote {
        Some(q) => (Some(q.cost), Some(q.price)),
        None => (None, None),
    }
}

/// Signed difference and percentage against the historical cost.
///
/// Division by a zero historical cost yields inf or NaN on purpose.
fn differences(cost: Option<f64>, historic: f64) -> (Option<f64>, Option<f64>) {
    match cost {
        Some(cost) => {
            let difference = cost - historic;
            (Some(difference), Some(difference / historic * 100.0))
        }
        None => (None, None),
    }
}
