use cav_stations::{AnomalyRecord, Dataset, StationDbId, StationRecord};
use std::collections::HashMap;

/// Records shown on the data layer.
///
/// Baseline and monthly selections borrow the input slice unchanged; the
/// anomaly selection is derived.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayRecords<'a> {
    Stations(&'a [StationRecord]),
    Anomalies(Vec<AnomalyRecord>),
}

impl DisplayRecords<'_> {
    pub fn len(&self) -> usize {
        match self {
            DisplayRecords::Stations(records) => records.len(),
            DisplayRecords::Anomalies(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Select or derive the records for `dataset`.
pub fn compute_display_records<'a>(
    dataset: Dataset,
    baseline: &'a [StationRecord],
    monthly: &'a [StationRecord],
) -> DisplayRecords<'a> {
    match dataset {
        Dataset::Baseline => DisplayRecords::Stations(baseline),
        Dataset::Monthly => DisplayRecords::Stations(monthly),
        Dataset::Anomaly => DisplayRecords::Anomalies(compute_anomalies(baseline, monthly)),
    }
}

/// Inner join of monthly onto baseline by `station_db_id`, in baseline order.
///
/// When a station appears more than once in `monthly`, its first entry is
/// used. Pairs missing `datum` or `statistic` are dropped with a warning.
pub fn compute_anomalies(baseline: &[StationRecord], monthly: &[StationRecord]) -> Vec<AnomalyRecord> {
    let mut monthly_by_id: HashMap<StationDbId, &StationRecord> = HashMap::with_capacity(monthly.len());
    for record in monthly {
        monthly_by_id.entry(record.station_db_id).or_insert(record);
    }

    baseline
        .iter()
        .filter_map(|base| {
            let month = monthly_by_id.get(&base.station_db_id)?;
            match (month.statistic, base.datum) {
                (Some(statistic), Some(datum)) => Some(AnomalyRecord {
                    station_name: base.station_name.clone(),
                    lat: base.lat,
                    lon: base.lon,
                    elevation: base.elevation,
                    anomaly: statistic - datum,
                }),
                (statistic, datum) => {
                    log::warn!(
                        "station {} ({}): cannot compute anomaly, statistic={:?} datum={:?}",
                        base.station_db_id,
                        base.station_name,
                        statistic,
                        datum
                    );
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: StationDbId, name: &str) -> StationRecord {
        StationRecord::new(id, name).with_location(49.0 + id as f64, -123.0)
    }

    #[test]
    fn anomaly_of_matching_pair() {
        let baseline = vec![StationRecord::new(1, "A")
            .with_location(49.0, -123.0)
            .with_elevation(10.0)
            .with_datum(5.0)];
        let monthly = vec![StationRecord::new(1, "").with_statistic(7.5)];

        let result = compute_display_records(Dataset::Anomaly, &baseline, &monthly);
        assert_eq!(
            result,
            DisplayRecords::Anomalies(vec![AnomalyRecord {
                station_name: "A".to_string(),
                lat: Some(49.0),
                lon: Some(-123.0),
                elevation: Some(10.0),
                anomaly: 2.5,
            }])
        );
    }

    #[test]
    fn anomaly_with_empty_monthly_is_empty() {
        let baseline = vec![station(1, "A").with_datum(5.0)];
        let result = compute_display_records(Dataset::Anomaly, &baseline, &[]);
        assert_eq!(result, DisplayRecords::Anomalies(Vec::new()));
        assert!(result.is_empty());
    }

    #[test]
    fn disjoint_ids_produce_no_anomalies() {
        let baseline: Vec<_> = (1..=5).map(|id| station(id, "b").with_datum(1.0)).collect();
        let monthly: Vec<_> = (6..=9).map(|id| station(id, "m").with_statistic(2.0)).collect();
        assert!(compute_anomalies(&baseline, &monthly).is_empty());
    }

    #[test]
    fn anomaly_is_exact_difference_in_baseline_order() {
        let baseline = vec![
            station(3, "C").with_datum(0.1),
            station(1, "A").with_datum(-4.25),
            station(2, "B").with_datum(100.0),
        ];
        let monthly = vec![
            station(1, "A").with_statistic(3.3),
            station(3, "C").with_statistic(0.3),
        ];
        let anomalies = compute_anomalies(&baseline, &monthly);
        let names: Vec<_> = anomalies.iter().map(|a| a.station_name.as_str()).collect();
        assert_eq!(names, vec!["C", "A"]);
        assert_eq!(anomalies[0].anomaly, 0.3 - 0.1);
        assert_eq!(anomalies[1].anomaly, 3.3 - -4.25);
        assert!(anomalies.len() <= baseline.len().min(monthly.len()));
    }

    #[test]
    fn first_monthly_entry_wins() {
        let baseline = vec![station(1, "A").with_datum(1.0)];
        let monthly = vec![
            station(1, "A").with_statistic(4.0),
            station(1, "A").with_statistic(9.0),
        ];
        assert_eq!(compute_anomalies(&baseline, &monthly)[0].anomaly, 3.0);
    }

    #[test]
    fn pairs_missing_values_are_dropped() {
        let baseline = vec![station(1, "A"), station(2, "B").with_datum(1.0)];
        let monthly = vec![station(1, "A").with_statistic(2.0), station(2, "B")];
        assert!(compute_anomalies(&baseline, &monthly).is_empty());
    }

    #[test]
    fn baseline_and_monthly_pass_through_same_slice() {
        let baseline = vec![station(1, "A").with_datum(1.0)];
        let monthly = vec![station(2, "B").with_statistic(2.0)];

        match compute_display_records(Dataset::Baseline, &baseline, &monthly) {
            DisplayRecords::Stations(records) => assert!(std::ptr::eq(records, baseline.as_slice())),
            other => panic!("expected stations, got {:?}", other),
        }
        match compute_display_records(Dataset::Monthly, &baseline, &monthly) {
            DisplayRecords::Stations(records) => assert!(std::ptr::eq(records, monthly.as_slice())),
            other => panic!("expected stations, got {:?}", other),
        }
    }

    #[test]
    fn computation_is_repeatable() {
        let baseline = vec![station(1, "A").with_datum(1.5), station(2, "B").with_datum(2.0)];
        let monthly = vec![station(2, "B").with_statistic(2.25), station(1, "A").with_statistic(0.5)];
        let first = compute_display_records(Dataset::Anomaly, &baseline, &monthly);
        let second = compute_display_records(Dataset::Anomaly, &baseline, &monthly);
        assert_eq!(first, second);
        assert_eq!(baseline[0].datum, Some(1.5));
    }
}
