//! Geography granularities and matching schemes
//!
//! A scheme pairs a source granularity with a destination granularity and is
//! written `SOURCE-DESTINATION`, e.g. `CITY-POSTAL`. Shipments declare one
//! scheme in their Rate Geography field; the simulation pass tries all of them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Level at which a shipment endpoint is matched against a price list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    Location,
    City,
    Postal,
    Region,
}

impl Granularity {
    /// Uppercase name as used inside Rate Geography values
    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Location => "LOCATION",
            Granularity::City => "CITY",
            Granularity::Postal => "POSTAL",
            Granularity::Region => "REGION",
        }
    }

    /// Parse an uppercase granularity name
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "LOCATION" => Some(Granularity::Location),
            "CITY" => Some(Granularity::City),
            "POSTAL" => Some(Granularity::Postal),
            "REGION" => Some(Granularity::Region),
            _ => None,
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A (source granularity, destination granularity) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeographyScheme {
    pub source: Granularity,
    pub destination: Granularity,
}

impl GeographyScheme {
    pub const fn new(source: Granularity, destination: Granularity) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Parse a `SOURCE-DESTINATION` scheme name, e.g. `POSTAL-CITY`.
    ///
    /// Returns None for anything that is not exactly two recognized
    /// granularity names joined by a single dash.
    pub fn parse(name: &str) -> Option<Self> {
        let (source, destination) = name.split_once('-')?;
        Some(Self {
            source: Granularity::parse(source)?,
            destination: Granularity::parse(destination)?,
        })
    }
}

impl fmt::Display for GeographyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.destination)
    }
}

/// The fixed scheme set tried by the simulation pass.
///
/// Every source/destination pairing is simulated, LOCATION-REGION included.
/// The order matters: when two schemes quote the same minimum cost, the first
/// one listed here wins, so LOCATION-REGION sits last and the remaining
/// fifteen keep their long-standing order.
pub const SIMULATION_SCHEMES: [GeographyScheme; 16] = [
    GeographyScheme::new(Granularity::City, Granularity::City),
    GeographyScheme::new(Granularity::Postal, Granularity::Postal),
    GeographyScheme::new(Granularity::Region, Granularity::Region),
    GeographyScheme::new(Granularity::Location, Granularity::Location),
    GeographyScheme::new(Granularity::City, Granularity::Postal),
    GeographyScheme::new(Granularity::City, Granularity::Region),
    GeographyScheme::new(Granularity::City, Granularity::Location),
    GeographyScheme::new(Granularity::Postal, Granularity::City),
    GeographyScheme::new(Granularity::Postal, Granularity::Region),
    GeographyScheme::new(Granularity::Postal, Granularity::Location),
    GeographyScheme::new(Granularity::Region, Granularity::City),
    GeographyScheme::new(Granularity::Region, Granularity::Postal),
    GeographyScheme::new(Granularity::Region, Granularity::Location),
    GeographyScheme::new(Granularity::Location, Granularity::City),
    GeographyScheme::new(Granularity::Location, Granularity::Postal),
    GeographyScheme::new(Granularity::Location, Granularity::Region),
];
