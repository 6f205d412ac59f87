//! Domain services
//!
//! The rate-resolution and cost-simulation engine: lane resolution, price
//! matching, cost calculation, the per-shipment recalculation pass, and the
//! summary aggregator. Everything here is pure over read-only inputs.

pub mod cost_calculator;
pub mod lane_resolver;
pub mod rate_matcher;
pub mod recalculation;
pub mod summary;

pub use cost_calculator::{quote, quote_for_name, Quote};
pub use lane_resolver::{lane_for_name, lane_for_scheme, UNKNOWN_LANE};
pub use rate_matcher::{find_ambiguous_rate, find_rate, AmbiguousRatePolicy};
pub use recalculation::{recalculate_all, recalculate_carrier, CarrierRecalculation};
pub use summary::{build_all_summaries, build_summary};
