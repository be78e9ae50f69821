use cav_stations::{Dataset, StationRecord};
use std::rc::Rc;

/// The inputs that decide what the map draws.
///
/// Record arrays are shared with the loader that produced them and are
/// replaced wholesale on every load, never edited in place.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSnapshot {
    pub dataset: Dataset,
    pub baseline: Rc<[StationRecord]>,
    pub monthly: Rc<[StationRecord]>,
}

impl DataSnapshot {
    pub fn new(
        dataset: Dataset,
        baseline: impl Into<Rc<[StationRecord]>>,
        monthly: impl Into<Rc<[StationRecord]>>,
    ) -> Self {
        Self {
            dataset,
            baseline: baseline.into(),
            monthly: monthly.into(),
        }
    }

    pub fn empty(dataset: Dataset) -> Self {
        Self::new(dataset, Vec::new(), Vec::new())
    }
}

/// True iff the dataset selector or either record array differs by value.
///
/// Arrays that are the same allocation are equal without a scan. Records
/// holding NaN never compare equal, which only costs an extra redraw.
pub fn should_refresh(previous: &DataSnapshot, current: &DataSnapshot) -> bool {
    previous.dataset != current.dataset
        || !same_records(&previous.baseline, &current.baseline)
        || !same_records(&previous.monthly, &current.monthly)
}

fn same_records(a: &Rc<[StationRecord]>, b: &Rc<[StationRecord]>) -> bool {
    Rc::ptr_eq(a, b) || a[..] == b[..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> Vec<StationRecord> {
        vec![StationRecord::new(1, "A")
            .with_location(49.0, -123.0)
            .with_elevation(10.0)
            .with_datum(5.0)]
    }

    fn monthly() -> Vec<StationRecord> {
        vec![StationRecord::new(1, "A").with_statistic(7.5)]
    }

    #[test]
    fn identical_snapshot_does_not_refresh() {
        let s = DataSnapshot::new(Dataset::Anomaly, baseline(), monthly());
        assert!(!should_refresh(&s, &s));
        assert!(!should_refresh(&s, &s.clone()));
    }

    #[test]
    fn equal_values_in_new_allocations_do_not_refresh() {
        let a = DataSnapshot::new(Dataset::Anomaly, baseline(), monthly());
        let b = DataSnapshot::new(Dataset::Anomaly, baseline(), monthly());
        assert!(!Rc::ptr_eq(&a.baseline, &b.baseline));
        assert!(!should_refresh(&a, &b));
    }

    #[test]
    fn dataset_change_alone_refreshes() {
        let a = DataSnapshot::new(Dataset::Anomaly, baseline(), monthly());
        let b = DataSnapshot {
            dataset: Dataset::Baseline,
            ..a.clone()
        };
        assert!(should_refresh(&a, &b));
    }

    #[test]
    fn record_value_change_refreshes() {
        let a = DataSnapshot::new(Dataset::Monthly, baseline(), monthly());
        let b = DataSnapshot::new(
            Dataset::Monthly,
            baseline(),
            vec![StationRecord::new(1, "A").with_statistic(7.6)],
        );
        assert!(should_refresh(&a, &b));

        let c = DataSnapshot::new(Dataset::Monthly, Vec::new(), monthly());
        assert!(should_refresh(&a, &c));
    }

    #[test]
    fn nan_values_refresh_unless_shared() {
        let nan = vec![StationRecord::new(1, "A").with_datum(f64::NAN)];
        let a = DataSnapshot::new(Dataset::Baseline, nan.clone(), Vec::new());
        let b = DataSnapshot::new(Dataset::Baseline, nan, Vec::new());
        assert!(should_refresh(&a, &b));
        assert!(!should_refresh(&a, &a.clone()));
    }
}
