//! Output formatting module
//!
//! Terminal rendering of the carrier rankings. The table view shows the two
//! overall scenarios; the JSON view dumps every summary.

use crate::cli::OutputFormat;
use crate::domain::model::{CostMetric, Grouping, Summary};
use crate::error::Result;

pub fn output_rankings(output_format: OutputFormat, summaries: &[Summary]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(summaries)?;
        println!("{}", content);
        return Ok(());
    }

    for summary in summaries
        .iter()
        .filter(|s| s.grouping == Grouping::Overall)
    {
        let title = match summary.metric {
            CostMetric::Recalculated => "Carrier ranking (declared rate geography)",
            CostMetric::MinimumSimulation => "Carrier ranking (best-case simulation)",
        };
        println!("\n{}", title);
        println!("{}", "=".repeat(title.len()));

        let Some(group) = summary.groups.first() else {
            continue;
        };
        println!("Total historic cost: {:.2}", group.total_historic_cost);
        println!(
            "{:<6} {:<12} {:>16} {:>16} {:>12}",
            "Rank", "Carrier", "Total Cost", "Difference", "% Diff"
        );
        for row in &group.rows {
            println!(
                "{:<6} {:<12} {:>16.2} {:>16.2} {:>12.2}",
                row.rank, row.carrier, row.total_cost, row.total_difference,
                row.percentage_difference
            );
        }
    }

    Ok(())
}
