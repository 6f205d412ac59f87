//! Price entry matching
//!
//! Finds the applicable price entry for a (lane, adjusted cost category) pair.
//! Matching is exact string equality on both fields, case- and
//! whitespace-sensitive as provided. Price lists are not required to be
//! unique on that pair: the first entry in load order wins. The `reject`
//! policy lets callers refuse ambiguous lists at load time instead.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::domain::model::PriceListEntry;

/// What to do with price lists that carry duplicate (lane, category) pairs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AmbiguousRatePolicy {
    /// Keep the first entry in load order (documented tie-break)
    #[default]
    FirstMatch,
    /// Fail the load when any pair occurs more than once
    Reject,
}

impl fmt::Display for AmbiguousRatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmbiguousRatePolicy::FirstMatch => write!(f, "first-match"),
            AmbiguousRatePolicy::Reject => write!(f, "reject"),
        }
    }
}

/// First entry whose lane and adjusted cost category both match exactly
pub fn find_rate<'a>(
    entries: &'a [PriceListEntry],
    lane: &str,
    category: &str,
) -> Option<&'a PriceListEntry> {
    entries
        .iter()
        .find(|entry| entry.lane == lane && entry.adjusted_cost_category == category)
}

/// First (lane, category) pair that occurs more than once, if any
pub fn find_ambiguous_rate(entries: &[PriceListEntry]) -> Option<(&str, &str)> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert((entry.lane.as_str(), entry.adjusted_cost_category.as_str())) {
            return Some((entry.lane.as_str(), entry.adjusted_cost_category.as_str()));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<PriceListEntry> {
        vec![
            PriceListEntry::new("Hamburg", "Munich", "STANDARD", "KM", 1.10),
            PriceListEntry::new("Hamburg", "Munich", "STANDARD", "KM", 1.35),
            PriceListEntry::new("Hamburg", "Munich", "MEGA", "EQUIPMENT", 900.0),
            PriceListEntry::new("20095", "80331", "STANDARD", "KG", 0.08),
        ]
    }

    #[test]
    fn first_match_in_load_order_wins() {
        let entries = entries();
        let hit = find_rate(&entries, "Hamburg-Munich", "KM").unwrap();
        assert_eq!(hit.price, 1.10);
    }

    #[test]
    fn matches_on_both_lane_and_category() {
        let entries = entries();
        let hit = find_rate(&entries, "Hamburg-Munich", "MEGA").unwrap();
        assert_eq!(hit.price, 900.0);
        assert!(find_rate(&entries, "Hamburg-Munich", "KG").is_none());
        assert!(find_rate(&entries, "20095-80331", "KG").is_some());
    }

    #[test]
    fn matching_is_exact_and_case_sensitive() {
        let entries = entries();
        assert!(find_rate(&entries, "hamburg-Munich", "KM").is_none());
        assert!(find_rate(&entries, "Hamburg-Munich ", "KM").is_none());
        assert!(find_rate(&entries, "Hamburg-Munich", "km").is_none());
    }

    #[test]
    fn ambiguity_detection() {
        let entries = entries();
        assert_eq!(find_ambiguous_rate(&entries), Some(("Hamburg-Munich", "KM")));

        let unique = vec![
            PriceListEntry::new("A", "B", "STANDARD", "KM", 1.0),
            PriceListEntry::new("A", "B", "STANDARD", "KG", 1.0),
        ];
        assert_eq!(find_ambiguous_rate(&unique), None);
    }
}
