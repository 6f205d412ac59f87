//! Summary aggregation
//!
//! Reduces per-shipment carrier outcomes into the six ranked comparison
//! views: (recalculated | minimum simulated) x (overall | by mode | by
//! movement). Groups appear in first-seen shipment order; carriers are ranked
//! by a stable ascending sort on the summed metric, so ties keep upload order.

use crate::domain::model::{
    CostMetric, Grouping, ShipmentRecord, Summary, SummaryGroup, SummaryRow,
};
use crate::domain::service::recalculation::CarrierRecalculation;

/// Build all six views in scenario order
pub fn build_all_summaries(
    shipments: &[ShipmentRecord],
    carriers: &[CarrierRecalculation],
) -> Vec<Summary> {
    let views = [
        (Grouping::Overall, CostMetric::Recalculated),
        (Grouping::Overall, CostMetric::MinimumSimulation),
        (Grouping::Mode, CostMetric::Recalculated),
        (Grouping::Mode, CostMetric::MinimumSimulation),
        (Grouping::Movement, CostMetric::Recalculated),
        (Grouping::Movement, CostMetric::MinimumSimulation),
    ];
    views
        .into_iter()
        .map(|(grouping, metric)| build_summary(shipments, carriers, metric, grouping))
        .collect()
}

/// Build one ranked view
pub fn build_summary(
    shipments: &[ShipmentRecord],
    carriers: &[CarrierRecalculation],
    metric: CostMetric,
    grouping: Grouping,
) -> Summary {
    let groups = partition(shipments, grouping)
        .into_iter()
        .map(|(key, members)| build_group(shipments, carriers, metric, key, &members))
        .collect();
    Summary {
        metric,
        grouping,
        groups,
    }
}

/// Shipment indices per group, groups in first-seen order
fn partition(shipments: &[ShipmentRecord], grouping: Grouping) -> Vec<(Option<String>, Vec<usize>)> {
    if grouping == Grouping::Overall {
        return vec![(None, (0..shipments.len()).collect())];
    }

    let mut groups: Vec<(Option<String>, Vec<usize>)> = Vec::new();
    for (index, shipment) in shipments.iter().enumerate() {
        let value = match grouping {
            Grouping::Mode => &shipment.mode,
            Grouping::Movement => &shipment.movement,
            Grouping::Overall => unreachable!(),
        };
        match groups
            .iter_mut()
            .find(|(key, _)| key.as_deref() == Some(value.as_str()))
        {
            Some((_, members)) => members.push(index),
            None => groups.push((Some(value.clone()), vec![index])),
        }
    }
    groups
}

fn build_group(
    shipments: &[ShipmentRecord],
    carriers: &[CarrierRecalculation],
    metric: CostMetric,
    key: Option<String>,
    members: &[usize],
) -> SummaryGroup {
    let total_historic_cost: f64 = members.iter().map(|&i| shipments[i].total_cost).sum();

    let mut rows: Vec<SummaryRow> = carriers
        .iter()
        .map(|carrier| {
            // Absent costs are excluded from the sum; a carrier with no
            // matches in the group totals zero.
            let total_cost: f64 = members
                .iter()
                .filter_map(|&i| metric.of(&carrier.outcomes[i]))
                .sum();
            let total_difference = total_cost - total_historic_cost;
            SummaryRow {
                carrier: carrier.carrier.clone(),
                total_cost,
                total_difference,
                percentage_difference: total_difference / total_historic_cost * 100.0,
                rank: 0,
            }
        })
        .collect();

    // Stable: equal totals keep carrier upload order.
    rows.sort_by(|a, b| a.total_cost.total_cmp(&b.total_cost));
    for (index, row) in rows.iter_mut().enumerate() {
        row.rank = (index + 1) as u32;
    }

    SummaryGroup {
        key,
        total_historic_cost,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CarrierOutcome, CostBasis, Endpoint};

    fn shipment(id: &str, mode: &str, movement: &str, total_cost: f64) -> ShipmentRecord {
        ShipmentRecord {
            shipment_id: id.to_string(),
            shipment_date: "2024-03-01".to_string(),
            carrier: "Legacy Carrier".to_string(),
            mode: mode.to_string(),
            movement: movement.to_string(),
            source: Endpoint::default(),
            destination: Endpoint::default(),
            weight: 0.0,
            volume: None,
            loading_meters: None,
            truck_type: String::new(),
            traveled_distance: 0.0,
            total_cost,
            rate_geography: "CITY-CITY".to_string(),
            cost_type: "FTL".to_string(),
            remarks: String::new(),
            own_reference: String::new(),
            cost_basis: CostBasis::Flat,
            adjusted_cost_category: "FTL".to_string(),
        }
    }

    fn outcome(recalculated: Option<f64>, simulated: Option<f64>) -> CarrierOutcome {
        CarrierOutcome {
            recalculated_cost: recalculated,
            minimum_simulation_cost: simulated,
            ..CarrierOutcome::default()
        }
    }

    fn carrier(label: &str, outcomes: Vec<CarrierOutcome>) -> CarrierRecalculation {
        CarrierRecalculation {
            carrier: label.to_string(),
            outcomes,
        }
    }

    #[test]
    fn ranks_carriers_ascending_by_total() {
        // Carriers totalling 95 and 80: the cheaper one ranks 1.
        let shipments = vec![shipment("S1", "ROAD", "DOMESTIC", 100.0)];
        let carriers = vec![
            carrier("carrier1", vec![outcome(Some(95.0), None)]),
            carrier("carrier2", vec![outcome(Some(80.0), None)]),
        ];

        let summary = build_summary(
            &shipments,
            &carriers,
            CostMetric::Recalculated,
            Grouping::Overall,
        );
        let rows = &summary.groups[0].rows;
        assert_eq!(rows[0].carrier, "carrier2");
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].total_cost, 80.0);
        assert_eq!(rows[0].total_difference, -20.0);
        assert_eq!(rows[0].percentage_difference, -20.0);
        assert_eq!(rows[1].carrier, "carrier1");
        assert_eq!(rows[1].rank, 2);
    }

    #[test]
    fn ranks_are_a_permutation_and_totals_non_decreasing() {
        let shipments = vec![
            shipment("S1", "ROAD", "DOMESTIC", 50.0),
            shipment("S2", "ROAD", "DOMESTIC", 70.0),
        ];
        let carriers = vec![
            carrier("carrier1", vec![outcome(Some(60.0), None), outcome(Some(10.0), None)]),
            carrier("carrier2", vec![outcome(Some(30.0), None), outcome(None, None)]),
            carrier("carrier3", vec![outcome(Some(60.0), None), outcome(Some(10.0), None)]),
        ];

        let summary = build_summary(
            &shipments,
            &carriers,
            CostMetric::Recalculated,
            Grouping::Overall,
        );
        let rows = &summary.groups[0].rows;

        let mut ranks: Vec<u32> = rows.iter().map(|r| r.rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert!(rows.windows(2).all(|w| w[0].total_cost <= w[1].total_cost));
        // Equal totals (carrier1 and carrier3) keep upload order.
        assert_eq!(rows[1].carrier, "carrier1");
        assert_eq!(rows[2].carrier, "carrier3");
    }

    #[test]
    fn groups_follow_first_seen_order() {
        let shipments = vec![
            shipment("S1", "ROAD", "DOMESTIC", 10.0),
            shipment("S2", "AIR", "EXPORT", 20.0),
            shipment("S3", "ROAD", "IMPORT", 30.0),
            shipment("S4", "SEA", "DOMESTIC", 40.0),
        ];
        let outcomes: Vec<CarrierOutcome> =
            (0..4).map(|_| outcome(Some(1.0), Some(1.0))).collect();
        let carriers = vec![carrier("carrier1", outcomes)];

        let by_mode = build_summary(
            &shipments,
            &carriers,
            CostMetric::Recalculated,
            Grouping::Mode,
        );
        let keys: Vec<_> = by_mode
            .groups
            .iter()
            .map(|g| g.key.clone().unwrap())
            .collect();
        assert_eq!(keys, vec!["ROAD", "AIR", "SEA"]);
        assert_eq!(by_mode.groups[0].total_historic_cost, 40.0);

        let by_movement = build_summary(
            &shipments,
            &carriers,
            CostMetric::MinimumSimulation,
            Grouping::Movement,
        );
        let keys: Vec<_> = by_movement
            .groups
            .iter()
            .map(|g| g.key.clone().unwrap())
            .collect();
        assert_eq!(keys, vec!["DOMESTIC", "EXPORT", "IMPORT"]);
    }

    #[test]
    fn zero_historic_group_yields_non_finite_percentage_without_panicking() {
        let shipments = vec![shipment("S1", "ROAD", "DOMESTIC", 0.0)];
        let carriers = vec![carrier("carrier1", vec![outcome(Some(50.0), Some(40.0))])];

        let summary = build_summary(
            &shipments,
            &carriers,
            CostMetric::Recalculated,
            Grouping::Overall,
        );
        let row = &summary.groups[0].rows[0];
        assert!(!row.percentage_difference.is_finite());
    }

    #[test]
    fn all_six_views_in_scenario_order() {
        let shipments = vec![shipment("S1", "ROAD", "DOMESTIC", 100.0)];
        let carriers = vec![carrier("carrier1", vec![outcome(Some(90.0), Some(70.0))])];

        let summaries = build_all_summaries(&shipments, &carriers);
        assert_eq!(summaries.len(), 6);
        let shape: Vec<_> = summaries
            .iter()
            .map(|s| (s.grouping, s.metric))
            .collect();
        assert_eq!(
            shape,
            vec![
                (Grouping::Overall, CostMetric::Recalculated),
                (Grouping::Overall, CostMetric::MinimumSimulation),
                (Grouping::Mode, CostMetric::Recalculated),
                (Grouping::Mode, CostMetric::MinimumSimulation),
                (Grouping::Movement, CostMetric::Recalculated),
                (Grouping::Movement, CostMetric::MinimumSimulation),
            ]
        );
        // The simulated metric is picked up by the second view.
        assert_eq!(summaries[1].groups[0].rows[0].total_cost, 70.0);
    }
}
