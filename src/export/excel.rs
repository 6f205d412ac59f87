//! Excel workbook export
//!
//! Writes the single output artifact: the shipment table augmented with
//! carrier-prefixed outcome columns, followed by the six scenario summary
//! sheets. Non-finite percentages cannot be stored in a worksheet cell and
//! are written as blanks; the in-memory values stay untouched.

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

use crate::domain::model::{CostMetric, Grouping, ShipmentRecord, Summary};
use crate::domain::service::recalculation::CarrierRecalculation;
use crate::error::Result;

/// Default name of the generated report
pub const DEFAULT_OUTPUT_NAME: &str = "Final_Historic_Cost_per_Carrier_with_Prices.xlsx";

const SHIPMENT_HEADERS: [&str; 23] = [
    "Shipment ID",
    "Shipment Date",
    "Carrier",
    "Mode",
    "Movement",
    "Source Location",
    "Source City",
    "Source Postal",
    "Source Region",
    "Destination Location",
    "Destination City",
    "Destination Postal",
    "Destination Region",
    "Weight",
    "Volume",
    "Loading Meters",
    "Truck Type",
    "Traveled Distance",
    "Total Cost",
    "Rate Geography",
    "Cost Type",
    "Remarks",
    "User Own Reference",
];

const CARRIER_COLUMNS: [&str; 9] = [
    "Recalculated_Cost",
    "Recalculated_Price",
    "Difference",
    "Recalculated_Percentage",
    "Minimum_Simulation_Cost",
    "Simulation_Difference",
    "Simulation_Percentage",
    "Minimum_Simulation_Price",
    "Minimum_Rate_Geography",
];

/// Write the full report workbook
pub fn export_workbook(
    path: &Path,
    shipments: &[ShipmentRecord],
    carriers: &[CarrierRecalculation],
    summaries: &[Summary],
) -> Result<()> {
    let mut workbook = Workbook::new();

    let main_sheet = workbook.add_worksheet();
    write_recalculation_sheet(main_sheet, shipments, carriers)?;

    for summary in summaries {
        let sheet = workbook.add_worksheet();
        write_summary_sheet(sheet, summary)?;
    }

    workbook.save(path)?;
    Ok(())
}

fn write_recalculation_sheet(
    sheet: &mut Worksheet,
    shipments: &[ShipmentRecord],
    carriers: &[CarrierRecalculation],
) -> Result<()> {
    sheet.set_name("Recalculation")?;

    let header_format = Format::new().set_bold();

    for (col, header) in SHIPMENT_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }
    sheet.write_string_with_format(0, 23, "Adjusted Cost Type", &header_format)?;

    let carrier_base = |index: usize| 24 + (index * CARRIER_COLUMNS.len()) as u16;
    for (index, carrier) in carriers.iter().enumerate() {
        for (offset, column) in CARRIER_COLUMNS.iter().enumerate() {
            sheet.write_string_with_format(
                0,
                carrier_base(index) + offset as u16,
                format!("{}_{}", carrier.carrier, column),
                &header_format,
            )?;
        }
    }

    for (row_index, shipment) in shipments.iter().enumerate() {
        let row = (row_index + 1) as u32;

        sheet.write_string(row, 0, &shipment.shipment_id)?;
        sheet.write_string(row, 1, &shipment.shipment_date)?;
        sheet.write_string(row, 2, &shipment.carrier)?;
        sheet.write_string(row, 3, &shipment.mode)?;
        sheet.write_string(row, 4, &shipment.movement)?;
        sheet.write_string(row, 5, &shipment.source.location)?;
        sheet.write_string(row, 6, &shipment.source.city)?;
        sheet.write_string(row, 7, &shipment.source.postal)?;
        sheet.write_string(row, 8, &shipment.source.region)?;
        sheet.write_string(row, 9, &shipment.destination.location)?;
        sheet.write_string(row, 10, &shipment.destination.city)?;
        sheet.write_string(row, 11, &shipment.destination.postal)?;
        sheet.write_string(row, 12, &shipment.destination.region)?;
        sheet.write_number(row, 13, shipment.weight)?;
        write_optional_number(sheet, row, 14, shipment.volume)?;
        write_optional_number(sheet, row, 15, shipment.loading_meters)?;
        sheet.write_string(row, 16, &shipment.truck_type)?;
        sheet.write_number(row, 17, shipment.traveled_distance)?;
        sheet.write_number(row, 18, shipment.total_cost)?;
        sheet.write_string(row, 19, &shipment.rate_geography)?;
        sheet.write_string(row, 20, &shipment.cost_type)?;
        sheet.write_string(row, 21, &shipment.remarks)?;
        sheet.write_string(row, 22, &shipment.own_reference)?;
        sheet.write_string(row, 23, &shipment.adjusted_cost_category)?;

        for (index, carrier) in carriers.iter().enumerate() {
            let outcome = &carrier.outcomes[row_index];
            let base = carrier_base(index);
            write_optional_number(sheet, row, base, outcome.recalculated_cost)?;
            write_optional_number(sheet, row, base + 1, outcome.recalculated_price)?;
            write_optional_number(sheet, row, base + 2, outcome.difference)?;
            write_optional_number(sheet, row, base + 3, outcome.recalculated_percentage)?;
            write_optional_number(sheet, row, base + 4, outcome.minimum_simulation_cost)?;
            write_optional_number(sheet, row, base + 5, outcome.simulation_difference)?;
            write_optional_number(sheet, row, base + 6, outcome.simulation_percentage)?;
            write_optional_number(sheet, row, base + 7, outcome.minimum_simulation_price)?;
            if let Some(scheme) = outcome.minimum_rate_geography {
                sheet.write_string(row, base + 8, scheme.to_string())?;
            }
        }
    }

    sheet.set_column_width(0, 14)?;
    sheet.set_column_width(1, 12)?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, summary: &Summary) -> Result<()> {
    sheet.set_name(sheet_name(summary))?;

    match summary.grouping {
        Grouping::Overall => write_overall_summary(sheet, summary),
        Grouping::Mode | Grouping::Movement => write_grouped_summary(sheet, summary),
    }
}

/// Historical sheet names for the six views
fn sheet_name(summary: &Summary) -> &'static str {
    match (summary.grouping, summary.metric) {
        (Grouping::Overall, CostMetric::Recalculated) => "Scenario1-Best_Carrier",
        (Grouping::Overall, CostMetric::MinimumSimulation) => "Scenario2-BC_Simulation",
        (Grouping::Mode, CostMetric::Recalculated) => "Scenario3-Best_Mode",
        (Grouping::Mode, CostMetric::MinimumSimulation) => "Scenario4-BM_Simulation",
        (Grouping::Movement, CostMetric::Recalculated) => "Scenario5-Best_Movement",
        (Grouping::Movement, CostMetric::MinimumSimulation) => "Scenario6-BMV_Simulation",
    }
}

fn metric_label(metric: CostMetric) -> &'static str {
    match metric {
        CostMetric::Recalculated => "Total Recalculated Cost",
        CostMetric::MinimumSimulation => "Minimum Simulation Cost",
    }
}

/// Layout kept from the historical reports: content starts at column B.
fn write_overall_summary(sheet: &mut Worksheet, summary: &Summary) -> Result<()> {
    let header_format = Format::new().set_bold();

    sheet.write_string_with_format(0, 1, "Total Historic Cost", &header_format)?;
    sheet.write_string_with_format(0, 2, "Carrier Name", &header_format)?;
    sheet.write_string_with_format(0, 3, metric_label(summary.metric), &header_format)?;
    sheet.write_string_with_format(0, 4, "Total Difference", &header_format)?;
    sheet.write_string_with_format(0, 5, "Rank", &header_format)?;
    sheet.write_string_with_format(0, 6, "% Difference", &header_format)?;

    if let Some(group) = summary.groups.first() {
        sheet.write_number(1, 1, group.total_historic_cost)?;
        for (index, row) in group.rows.iter().enumerate() {
            let sheet_row = (index + 1) as u32;
            sheet.write_string(sheet_row, 2, &row.carrier)?;
            sheet.write_number(sheet_row, 3, row.total_cost)?;
            sheet.write_number(sheet_row, 4, row.total_difference)?;
            sheet.write_number(sheet_row, 5, row.rank as f64)?;
            write_finite_number(sheet, sheet_row, 6, row.percentage_difference)?;
        }
    }

    Ok(())
}

fn write_grouped_summary(sheet: &mut Worksheet, summary: &Summary) -> Result<()> {
    let header_format = Format::new().set_bold();
    let group_label = match summary.grouping {
        Grouping::Mode => "Mode",
        Grouping::Movement => "Movement",
        Grouping::Overall => unreachable!(),
    };

    sheet.write_string_with_format(0, 1, group_label, &header_format)?;
    sheet.write_string_with_format(0, 2, "Total Historic Cost", &header_format)?;
    sheet.write_string_with_format(0, 3, "Carrier Name", &header_format)?;
    sheet.write_string_with_format(0, 4, metric_label(summary.metric), &header_format)?;
    sheet.write_string_with_format(0, 5, "Total Difference", &header_format)?;
    sheet.write_string_with_format(0, 6, "Rank", &header_format)?;
    sheet.write_string_with_format(0, 7, "% Difference", &header_format)?;

    let mut sheet_row: u32 = 1;
    for group in &summary.groups {
        for (index, row) in group.rows.iter().enumerate() {
            // Group label and historic total only on the block's first row
            if index == 0 {
                if let Some(key) = &group.key {
                    sheet.write_string(sheet_row, 1, key)?;
                }
                sheet.write_number(sheet_row, 2, group.total_historic_cost)?;
            }
            sheet.write_string(sheet_row, 3, &row.carrier)?;
            sheet.write_number(sheet_row, 4, row.total_cost)?;
            sheet.write_number(sheet_row, 5, row.total_difference)?;
            sheet.write_number(sheet_row, 6, row.rank as f64)?;
            write_finite_number(sheet, sheet_row, 7, row.percentage_difference)?;
            sheet_row += 1;
        }
    }

    Ok(())
}

fn write_optional_number(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<f64>,
) -> Result<()> {
    if let Some(value) = value {
        write_finite_number(sheet, row, col, value)?;
    }
    Ok(())
}

/// xlsx cells cannot hold inf/NaN; those stay blank
fn write_finite_number(sheet: &mut Worksheet, row: u32, col: u16, value: f64) -> Result<()> {
    if value.is_finite() {
        sheet.write_number(row, col, value)?;
    }
    Ok(())
}
