//! Historic cost table loader
//!
//! The shipment table has a fixed 23-column positional layout; the header row
//! is present but only its column count is checked. Ingestion derives the
//! cost basis and the adjusted cost category once, here.

use std::path::Path;

use crate::domain::model::{adjusted_cost_category, CostBasis, Endpoint, ShipmentRecord};

use super::table_reader::{parse_number, parse_optional_number, read_rows};
use super::LoadError;

/// Fixed width of the historic cost table
pub const SHIPMENT_COLUMNS: usize = 23;

/// Load the full shipment table
pub fn load_shipments(path: &Path) -> Result<Vec<ShipmentRecord>, LoadError> {
    let mut rows = read_rows(path)?.into_iter();

    let header = rows
        .next()
        .ok_or_else(|| LoadError::EmptyTable(path.display().to_string()))?;
    if header.len() != SHIPMENT_COLUMNS {
        return Err(LoadError::ColumnCount {
            expected: SHIPMENT_COLUMNS,
            found: header.len(),
        });
    }

    let mut shipments = Vec::new();
    for (index, row) in rows.enumerate() {
        // 1-based file row, header included
        shipments.push(parse_shipment_row(&row, index + 2)?);
    }

    if shipments.is_empty() {
        return Err(LoadError::EmptyTable(path.display().to_string()));
    }
    Ok(shipments)
}

fn parse_shipment_row(row: &[String], row_number: usize) -> Result<ShipmentRecord, LoadError> {
    if row.len() > SHIPMENT_COLUMNS {
        return Err(LoadError::ColumnCount {
            expected: SHIPMENT_COLUMNS,
            found: row.len(),
        });
    }
    let cell = |index: usize| row.get(index).cloned().unwrap_or_default();

    let truck_type = cell(16);
    let cost_type = cell(20);
    let cost_basis = CostBasis::from_cost_type(&cost_type);
    let adjusted = adjusted_cost_category(&cost_type, &truck_type);

    Ok(ShipmentRecord {
        shipment_id: cell(0),
        shipment_date: cell(1),
        carrier: cell(2),
        mode: cell(3),
        movement: cell(4),
        source: Endpoint {
            location: cell(5),
            city: cell(6),
            postal: cell(7),
            region: cell(8),
        },
        destination: Endpoint {
            location: cell(9),
            city: cell(10),
            postal: cell(11),
            region: cell(12),
        },
        weight: parse_number(&cell(13), row_number, "Weight")?,
        volume: parse_optional_number(&cell(14), row_number, "Volume")?,
        loading_meters: parse_optional_number(&cell(15), row_number, "Loading Meters")?,
        truck_type,
        traveled_distance: parse_number(&cell(17), row_number, "Traveled Distance")?,
        total_cost: parse_number(&cell(18), row_number, "Total Cost")?,
        rate_geography: cell(19),
        cost_type,
        remarks: cell(21),
        own_reference: cell(22),
        cost_basis,
        adjusted_cost_category: adjusted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Shipment ID,Shipment Date,Carrier,Mode,Movement,\
Source Location,Source City,Source Postal,Source Region,\
Destination Location,Destination City,Destination Postal,Destination Region,\
Weight,Volume,Loading Meters,Truck Type,Traveled Distance,Total Cost,\
Rate Geography,Cost Type,Remarks,User Own Reference";

    fn table(rows: &[&str]) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file
    }

    #[test]
    fn loads_and_derives_fields() {
        let file = table(&[
            "S1,2024-03-01,Legacy,ROAD,DOMESTIC,DE001,Hamburg,20095,DE-North,\
DE002,Munich,80331,DE-South,1000,10.5,2.4,MEGA,780,950,CITY-CITY,KM,ok,REF1",
            "S2,2024-03-02,Legacy,ROAD,EXPORT,DE001,Hamburg,20095,DE-North,\
FR001,Lyon,69001,FR-East,500,,,JUMBO,900,1200,POSTAL-POSTAL,EQUIPMENT,,REF2",
        ]);

        let shipments = load_shipments(file.path()).unwrap();
        assert_eq!(shipments.len(), 2);

        let first = &shipments[0];
        assert_eq!(first.shipment_id, "S1");
        assert_eq!(first.source.city, "Hamburg");
        assert_eq!(first.destination.postal, "80331");
        assert_eq!(first.weight, 1000.0);
        assert_eq!(first.volume, Some(10.5));
        assert_eq!(first.total_cost, 950.0);
        assert_eq!(first.cost_basis, CostBasis::Distance);
        assert_eq!(first.adjusted_cost_category, "KM");

        let second = &shipments[1];
        assert_eq!(second.volume, None);
        assert_eq!(second.cost_basis, CostBasis::Flat);
        // EQUIPMENT substitutes the truck type
        assert_eq!(second.adjusted_cost_category, "JUMBO");
    }

    #[test]
    fn wrong_column_count_is_fatal() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "Only,Three,Columns").unwrap();
        writeln!(file, "a,b,c").unwrap();

        let err = load_shipments(file.path()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::ColumnCount {
                expected: 23,
                found: 3
            }
        ));
    }

    #[test]
    fn bad_numeric_cell_is_fatal_with_position() {
        let file = table(&[
            "S1,2024-03-01,Legacy,ROAD,DOMESTIC,DE001,Hamburg,20095,DE-North,\
DE002,Munich,80331,DE-South,heavy,10.5,2.4,MEGA,780,950,CITY-CITY,KM,,",
        ]);

        let err = load_shipments(file.path()).unwrap_err();
        match err {
            LoadError::InvalidNumber { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Weight");
                assert_eq!(value, "heavy");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn header_only_table_is_empty() {
        let file = table(&[]);
        let err = load_shipments(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::EmptyTable(_)));
    }
}
