//! Domain models

pub mod geography;
pub mod outcome;
pub mod price_list;
pub mod shipment;

pub use geography::{Granularity, GeographyScheme, SIMULATION_SCHEMES};
pub use outcome::{CarrierOutcome, CostMetric, Grouping, Summary, SummaryGroup, SummaryRow};
pub use price_list::{PriceList, PriceListEntry};
pub use shipment::{adjusted_cost_category, CostBasis, Endpoint, ShipmentRecord};
