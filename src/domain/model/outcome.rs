//! Per-shipment carrier outcomes and summary rows
//!
//! These are the records that survive the recalculation pass; per-scheme
//! simulation intermediates are folded away before they get here. Percentages
//! against a zero historical cost are carried as IEEE non-finite values rather
//! than masked.

use serde::{Deserialize, Serialize};

use super::geography::GeographyScheme;

/// Everything derived for one carrier on one shipment.
///
/// All cost fields are absent when no price matched; no shipment is ever
/// dropped because of a failed lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarrierOutcome {
    /// Cost under the shipment's own declared geography scheme
    pub recalculated_cost: Option<f64>,
    /// Unit price behind `recalculated_cost`
    pub recalculated_price: Option<f64>,
    /// `recalculated_cost` minus historical total cost
    pub difference: Option<f64>,
    /// `difference` over historical cost, in percent; non-finite when the
    /// historical cost is zero
    pub recalculated_percentage: Option<f64>,
    /// Cheapest cost over the simulated scheme set
    pub minimum_simulation_cost: Option<f64>,
    /// Unit price behind the minimum
    pub minimum_simulation_price: Option<f64>,
    /// Scheme that produced the minimum; first in set order on ties
    pub minimum_rate_geography: Option<GeographyScheme>,
    /// `minimum_simulation_cost` minus historical total cost
    pub simulation_difference: Option<f64>,
    /// Non-finite when the historical cost is zero
    pub simulation_percentage: Option<f64>,
}

/// Which per-shipment cost a summary aggregates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostMetric {
    Recalculated,
    MinimumSimulation,
}

impl CostMetric {
    /// Extract the metric from an outcome
    pub fn of(&self, outcome: &CarrierOutcome) -> Option<f64> {
        match self {
            CostMetric::Recalculated => outcome.recalculated_cost,
            CostMetric::MinimumSimulation => outcome.minimum_simulation_cost,
        }
    }
}

/// Dimension a summary is broken down by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grouping {
    Overall,
    Mode,
    Movement,
}

/// One ranked carrier line within a summary group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub carrier: String,
    /// Sum of the chosen metric over the group's shipments; absent costs are
    /// excluded from the sum
    pub total_cost: f64,
    /// `total_cost` minus the group's historical total
    pub total_difference: f64,
    /// Non-finite when the group's historical total is zero
    pub percentage_difference: f64,
    /// 1 = cheapest within the group
    pub rank: u32,
}

/// All carriers ranked within one group (the whole dataset, or one mode, or
/// one movement)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryGroup {
    /// None for the overall view, otherwise the mode/movement value
    pub key: Option<String>,
    pub total_historic_cost: f64,
    pub rows: Vec<SummaryRow>,
}

/// One of the six comparison views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub metric: CostMetric,
    pub grouping: Grouping,
    /// Groups in first-seen shipment order
    pub groups: Vec<SummaryGroup>,
}
