//! Test data sources for the viewer.
//!
//! Both loaders answer a [`LoadRequest`] with whole baseline and monthly
//! arrays, the way the anomaly data service's `/baseline` and `/monthly`
//! endpoints do.

use cav_stations::columns::CsvColumns;
use cav_stations::{StationDbId, StationRecord, Variable};
use cav_utils::dates;
use csv::{ReaderBuilder, StringRecord};
use std::f64::consts::PI;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    pub variable: Variable,
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedData {
    pub baseline: Rc<[StationRecord]>,
    pub monthly: Rc<[StationRecord]>,
}

pub trait DataLoader {
    fn name(&self) -> &'static str;

    fn load(&self, request: &LoadRequest) -> anyhow::Result<LoadedData>;
}

// ---------------------------------------------------------------------------
// Fake data
// ---------------------------------------------------------------------------

struct FakeStation {
    id: StationDbId,
    name: &'static str,
    lat: f64,
    lon: f64,
    elevation: f64,
    in_baseline: bool,
    in_monthly: bool,
}

/// British Columbia stations used for synthetic data. A few report to only
/// one of the datasets so the anomaly join has something to drop.
static FAKE_STATIONS: &[FakeStation] = &[
    FakeStation { id: 1101, name: "Vancouver Intl A", lat: 49.195, lon: -123.184, elevation: 4.0, in_baseline: true, in_monthly: true },
    FakeStation { id: 1102, name: "Victoria Gonzales", lat: 48.413, lon: -123.325, elevation: 69.0, in_baseline: true, in_monthly: true },
    FakeStation { id: 1103, name: "Abbotsford A", lat: 49.025, lon: -122.360, elevation: 59.0, in_baseline: true, in_monthly: true },
    FakeStation { id: 1104, name: "Hope Slide", lat: 49.275, lon: -121.236, elevation: 673.0, in_baseline: true, in_monthly: false },
    FakeStation { id: 1105, name: "Kamloops A", lat: 50.702, lon: -120.442, elevation: 345.0, in_baseline: true, in_monthly: true },
    FakeStation { id: 1106, name: "Kelowna A", lat: 49.957, lon: -119.378, elevation: 429.0, in_baseline: true, in_monthly: true },
    FakeStation { id: 1107, name: "Cranbrook A", lat: 49.612, lon: -115.782, elevation: 940.0, in_baseline: true, in_monthly: true },
    FakeStation { id: 1108, name: "Prince George A", lat: 53.889, lon: -122.679, elevation: 691.0, in_baseline: true, in_monthly: true },
    FakeStation { id: 1109, name: "Prince Rupert A", lat: 54.286, lon: -130.445, elevation: 35.0, in_baseline: true, in_monthly: false },
    FakeStation { id: 1110, name: "Smithers A", lat: 54.825, lon: -127.183, elevation: 522.0, in_baseline: true, in_monthly: true },
    FakeStation { id: 1111, name: "Fort St John A", lat: 56.238, lon: -120.740, elevation: 695.0, in_baseline: true, in_monthly: true },
    FakeStation { id: 1112, name: "Fort Nelson A", lat: 58.836, lon: -122.597, elevation: 382.0, in_baseline: true, in_monthly: true },
    FakeStation { id: 1113, name: "Tofino A", lat: 49.082, lon: -125.773, elevation: 24.0, in_baseline: false, in_monthly: true },
    FakeStation { id: 1114, name: "Dease Lake", lat: 58.428, lon: -130.010, elevation: 807.0, in_baseline: false, in_monthly: true },
];

/// Deterministic synthetic data: a seasonal climatology per station, and
/// monthly values offset from it by a pseudo-random amount fixed by
/// station, year and month.
#[derive(Debug, Default, Clone, Copy)]
pub struct FakeDataLoader;

impl FakeDataLoader {
    fn datum(variable: Variable, station: &FakeStation, month: u32) -> f64 {
        // -1 in January, +1 in July
        let season = -(2.0 * PI * (month as f64 - 1.0) / 12.0).cos();
        let lapse = station.elevation / 150.0;
        let value = match variable {
            Variable::Precip => {
                let wetness = 1.0 + (station.lon + 130.0).abs().recip().min(1.0) * 2.0;
                (90.0 - 45.0 * season) * wetness
            }
            Variable::Tmin => -2.0 + 9.0 * season - lapse - (station.lat - 49.0) * 0.8,
            Variable::Tmax => 8.0 + 12.0 * season - lapse - (station.lat - 49.0) * 0.6,
        };
        round1(value)
    }

    fn offset(variable: Variable, station: &FakeStation, year: i32, month: u32) -> f64 {
        let spread = match variable {
            Variable::Precip => 40.0,
            Variable::Tmin | Variable::Tmax => 3.0,
        };
        spread * unit_noise(station.id, year, month)
    }
}

impl DataLoader for FakeDataLoader {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn load(&self, request: &LoadRequest) -> anyhow::Result<LoadedData> {
        dates::period_start(request.year, request.month)?;

        let record = |s: &FakeStation| {
            StationRecord::new(s.id, s.name)
                .with_location(s.lat, s.lon)
                .with_elevation(s.elevation)
        };
        let baseline: Vec<StationRecord> = FAKE_STATIONS
            .iter()
            .filter(|s| s.in_baseline)
            .map(|s| record(s).with_datum(Self::datum(request.variable, s, request.month)))
            .collect();
        let monthly: Vec<StationRecord> = FAKE_STATIONS
            .iter()
            .filter(|s| s.in_monthly)
            .map(|s| {
                let mut value = Self::datum(request.variable, s, request.month)
                    + Self::offset(request.variable, s, request.year, request.month);
                if request.variable == Variable::Precip {
                    value = value.max(0.0);
                }
                record(s).with_statistic(round1(value))
            })
            .collect();

        log::info!(
            "fake data for {} {}-{:02}: {} baseline, {} monthly",
            request.variable,
            request.year,
            request.month,
            baseline.len(),
            monthly.len()
        );
        Ok(LoadedData {
            baseline: baseline.into(),
            monthly: monthly.into(),
        })
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A value in [-1, 1) fixed by its inputs.
fn unit_noise(id: StationDbId, year: i32, month: u32) -> f64 {
    let mut x = (id as u64)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add((year as u64) << 8)
        .wrapping_add(month as u64);
    x ^= x >> 33;
    x = x.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    x ^= x >> 33;
    (x % 2000) as f64 / 1000.0 - 1.0
}

// ---------------------------------------------------------------------------
// Fixture data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct FixtureRow {
    variable: Variable,
    year: Option<i32>,
    month: u32,
    record: StationRecord,
}

/// Serves records parsed from baseline and monthly fixture CSVs.
///
/// # CSV Formats
///
/// - **Baseline**: `variable,station_db_id,station_name,lat,lon,elevation,month,datum`
/// - **Monthly**: `variable,station_db_id,station_name,lat,lon,elevation,year,month,statistic`
#[derive(Debug, Clone)]
pub struct FixtureDataLoader {
    baseline: Vec<FixtureRow>,
    monthly: Vec<FixtureRow>,
}

impl FixtureDataLoader {
    pub fn from_csv(baseline_csv: &str, monthly_csv: &str) -> anyhow::Result<Self> {
        let baseline = parse_fixture(baseline_csv, false)?;
        let monthly = parse_fixture(monthly_csv, true)?;
        log::info!(
            "fixture loader: {} baseline rows, {} monthly rows",
            baseline.len(),
            monthly.len()
        );
        Ok(Self { baseline, monthly })
    }
}

impl DataLoader for FixtureDataLoader {
    fn name(&self) -> &'static str {
        "fixture"
    }

    fn load(&self, request: &LoadRequest) -> anyhow::Result<LoadedData> {
        dates::period_start(request.year, request.month)?;

        let baseline: Vec<StationRecord> = self
            .baseline
            .iter()
            .filter(|r| r.variable == request.variable && r.month == request.month)
            .map(|r| r.record.clone())
            .collect();
        let monthly: Vec<StationRecord> = self
            .monthly
            .iter()
            .filter(|r| {
                r.variable == request.variable
                    && r.month == request.month
                    && r.year == Some(request.year)
            })
            .map(|r| r.record.clone())
            .collect();
        Ok(LoadedData {
            baseline: baseline.into(),
            monthly: monthly.into(),
        })
    }
}

fn parse_fixture(csv_data: &str, with_year: bool) -> anyhow::Result<Vec<FixtureRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());
    let columns = CsvColumns::from_headers(rdr.headers()?);
    let required: &[&str] = if with_year {
        &["variable", "station_db_id", "year", "month"]
    } else {
        &["variable", "station_db_id", "month"]
    };
    if let Some(missing) = required.iter().find(|name| !columns.contains(name)) {
        anyhow::bail!("fixture CSV has no '{}' column", missing);
    }

    let mut rows = Vec::new();
    let mut skipped = 0u32;
    for result in rdr.records() {
        let r = result?;
        let row = fixture_row(&columns, &r, with_year);
        match row {
            Ok(row) => rows.push(row),
            Err(e) => {
                log::warn!("skipping fixture row: {}", e);
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        log::warn!("skipped {} malformed fixture rows", skipped);
    }
    Ok(rows)
}

fn fixture_row(columns: &CsvColumns, r: &StringRecord, with_year: bool) -> anyhow::Result<FixtureRow> {
    let variable: Variable = columns.require::<String>(r, "variable")?.parse()?;
    let year: Option<i32> = if with_year {
        Some(columns.require(r, "year")?)
    } else {
        None
    };
    Ok(FixtureRow {
        variable,
        year,
        month: columns.require(r, "month")?,
        record: columns.station_record(r)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::compute_anomalies;

    fn request(variable: Variable) -> LoadRequest {
        LoadRequest {
            variable,
            year: 2000,
            month: 1,
        }
    }

    #[test]
    fn fake_loader_is_deterministic() {
        let a = FakeDataLoader.load(&request(Variable::Tmax)).unwrap();
        let b = FakeDataLoader.load(&request(Variable::Tmax)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn fake_loader_has_unmatched_stations() {
        let data = FakeDataLoader.load(&request(Variable::Precip)).unwrap();
        assert_eq!(data.baseline.len(), 12);
        assert_eq!(data.monthly.len(), 12);
        let anomalies = compute_anomalies(&data.baseline, &data.monthly);
        assert_eq!(anomalies.len(), 10);
        assert!(data.monthly.iter().all(|r| r.statistic.unwrap() >= 0.0));
    }

    #[test]
    fn fake_loader_varies_with_period() {
        let jan = FakeDataLoader.load(&request(Variable::Tmin)).unwrap();
        let jul = FakeDataLoader
            .load(&LoadRequest {
                month: 7,
                ..request(Variable::Tmin)
            })
            .unwrap();
        assert!(jul.baseline[0].datum.unwrap() > jan.baseline[0].datum.unwrap());
    }

    #[test]
    fn loaders_reject_invalid_month() {
        let bad = LoadRequest {
            month: 13,
            ..request(Variable::Precip)
        };
        assert!(FakeDataLoader.load(&bad).is_err());
        let fixtures = FixtureDataLoader::from_csv(
            "variable,station_db_id,month,datum\n",
            "variable,station_db_id,year,month,statistic\n",
        ).unwrap();
        assert!(fixtures.load(&bad).is_err());
    }

    #[test]
    fn fixture_without_key_column_is_rejected() {
        let err = FixtureDataLoader::from_csv(
            "variable,station_db_id,month,datum\n",
            "variable,station_db_id,month,statistic\n",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "fixture CSV has no 'year' column");
    }

    #[test]
    fn noise_stays_in_unit_range() {
        for id in 0..50 {
            for month in 1..=12 {
                let n = unit_noise(id, 1990 + id as i32, month);
                assert!((-1.0..1.0).contains(&n));
            }
        }
    }

    #[test]
    fn fixture_loader_filters_by_request() {
        let baseline_csv = "\
variable,station_db_id,station_name,lat,lon,elevation,month,datum
precip,1,A,49.0,-123.0,10,1,5.0
precip,1,A,49.0,-123.0,10,2,6.0
tmin,1,A,49.0,-123.0,10,1,-3.0
snow,1,A,49.0,-123.0,10,1,0.0
";
        let monthly_csv = "\
variable,station_db_id,station_name,lat,lon,elevation,year,month,statistic
precip,1,A,49.0,-123.0,10,2000,1,7.5
precip,1,A,49.0,-123.0,10,2001,1,9.0
precip,2,B,50.0,-121.0,,2000,1,1.0
";
        let loader = FixtureDataLoader::from_csv(baseline_csv, monthly_csv).unwrap();
        let data = loader.load(&request(Variable::Precip)).unwrap();
        assert_eq!(data.baseline.len(), 1);
        assert_eq!(data.baseline[0].datum, Some(5.0));
        assert_eq!(data.monthly.len(), 2);
        assert_eq!(data.monthly[0].statistic, Some(7.5));
        assert_eq!(data.monthly[1].elevation, None);

        let anomalies = compute_anomalies(&data.baseline, &data.monthly);
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].anomaly, 2.5);
    }
}
