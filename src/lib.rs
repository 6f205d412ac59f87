//! Freight Recalc Library
//!
//! Recalculates historical freight-shipment costs against candidate carrier
//! price lists, simulates every supported geography-matching scheme to find the
//! cheapest achievable rate, and produces ranked carrier comparison reports.

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod infrastructure;
pub mod logging;
pub mod output;
