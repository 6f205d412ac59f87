//! Carrier price lists
//!
//! A price list is an ordered collection of entries at one geography
//! granularity per file. Lookups are by (lane, adjusted cost category) and are
//! not required to be unique; entry order is load order and governs which of
//! several matching entries wins.

use serde::{Deserialize, Serialize};

use super::shipment::adjusted_cost_category;

/// One priced lane of a carrier's tariff
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceListEntry {
    pub source: String,
    pub destination: String,
    pub truck_type: String,
    pub cost_type: String,
    pub price: f64,
    /// Derived at load: `{source}-{destination}`
    pub lane: String,
    /// Derived at load, same rule as shipments
    pub adjusted_cost_category: String,
}

impl PriceListEntry {
    /// Build an entry, deriving the lane and the adjusted cost category
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        truck_type: impl Into<String>,
        cost_type: impl Into<String>,
        price: f64,
    ) -> Self {
        let source = source.into();
        let destination = destination.into();
        let truck_type = truck_type.into();
        let cost_type = cost_type.into();
        let lane = format!("{}-{}", source, destination);
        let adjusted_cost_category = adjusted_cost_category(&cost_type, &truck_type);
        Self {
            source,
            destination,
            truck_type,
            cost_type,
            price,
            lane,
            adjusted_cost_category,
        }
    }
}

/// A labelled carrier price list, entries in load order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceList {
    /// Sequential label in upload order: carrier1, carrier2, ...
    pub label: String,
    pub entries: Vec<PriceListEntry>,
}

impl PriceList {
    pub fn new(label: impl Into<String>, entries: Vec<PriceListEntry>) -> Self {
        Self {
            label: label.into(),
            entries,
        }
    }
}
