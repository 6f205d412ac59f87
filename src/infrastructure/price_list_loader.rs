//! Price list loader
//!
//! Price list tables are matched by column name: SOURCE, DESTINATION,
//! Truck Type, Cost Type, Price. Each file carries one carrier's tariff at a
//! single geography granularity; lane and adjusted cost category are derived
//! here, once per entry, in load order.

use std::path::Path;

use crate::domain::model::{PriceList, PriceListEntry};
use crate::domain::service::rate_matcher::{find_ambiguous_rate, AmbiguousRatePolicy};

use super::table_reader::{parse_number, read_rows};
use super::LoadError;

const SOURCE: &str = "SOURCE";
const DESTINATION: &str = "DESTINATION";
const TRUCK_TYPE: &str = "Truck Type";
const COST_TYPE: &str = "Cost Type";
const PRICE: &str = "Price";

/// Load one carrier price list under the given ambiguity policy
pub fn load_price_list(
    path: &Path,
    label: &str,
    policy: AmbiguousRatePolicy,
) -> Result<PriceList, LoadError> {
    let mut rows = read_rows(path)?.into_iter();

    let header = rows
        .next()
        .ok_or_else(|| LoadError::EmptyTable(path.display().to_string()))?;
    let column = |name: &str| -> Result<usize, LoadError> {
        header
            .iter()
            .position(|cell| cell.trim() == name)
            .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
    };
    let source_col = column(SOURCE)?;
    let destination_col = column(DESTINATION)?;
    let truck_type_col = column(TRUCK_TYPE)?;
    let cost_type_col = column(COST_TYPE)?;
    let price_col = column(PRICE)?;

    let mut entries = Vec::new();
    for (index, row) in rows.enumerate() {
        let cell = |col: usize| row.get(col).cloned().unwrap_or_default();
        let price = parse_number(&cell(price_col), index + 2, PRICE)?;
        entries.push(PriceListEntry::new(
            cell(source_col),
            cell(destination_col),
            cell(truck_type_col),
            cell(cost_type_col),
            price,
        ));
    }

    if entries.is_empty() {
        return Err(LoadError::EmptyTable(path.display().to_string()));
    }

    if policy == AmbiguousRatePolicy::Reject {
        if let Some((lane, category)) = find_ambiguous_rate(&entries) {
            return Err(LoadError::AmbiguousRate {
                lane: lane.to_string(),
                category: category.to_string(),
            });
        }
    }

    Ok(PriceList::new(label, entries))
}
