//! Output rendering for the CLI commands.

use crate::OutputFormat;
use cav_data::{build_marker_set, compute_display_records, should_refresh, DataSnapshot, DisplayRecords};
use std::io::Write;

const STATION_COLUMNS: [&str; 7] = [
    "station_db_id",
    "station_name",
    "lat",
    "lon",
    "elevation",
    "datum",
    "statistic",
];

const ANOMALY_COLUMNS: [&str; 5] = ["station_name", "lat", "lon", "elevation", "anomaly"];

fn cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write the records the data layer would show.
pub fn write_display<W: Write>(out: &mut W, snapshot: &DataSnapshot, format: OutputFormat) -> anyhow::Result<()> {
    let records = compute_display_records(snapshot.dataset, &snapshot.baseline, &snapshot.monthly);
    match format {
        OutputFormat::Json => {
            match &records {
                DisplayRecords::Stations(stations) => serde_json::to_writer_pretty(&mut *out, stations)?,
                DisplayRecords::Anomalies(anomalies) => serde_json::to_writer_pretty(&mut *out, anomalies)?,
            }
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(&mut *out);
            // Headers are written up front so an empty result is still a
            // CSV table.
            match &records {
                DisplayRecords::Stations(stations) => {
                    wtr.write_record(STATION_COLUMNS)?;
                    for s in stations.iter() {
                        wtr.write_record([
                            s.station_db_id.to_string(),
                            s.station_name.clone(),
                            cell(s.lat),
                            cell(s.lon),
                            cell(s.elevation),
                            cell(s.datum),
                            cell(s.statistic),
                        ])?;
                    }
                }
                DisplayRecords::Anomalies(anomalies) => {
                    wtr.write_record(ANOMALY_COLUMNS)?;
                    for a in anomalies {
                        wtr.write_record([
                            a.station_name.clone(),
                            cell(a.lat),
                            cell(a.lon),
                            cell(a.elevation),
                            a.anomaly.to_string(),
                        ])?;
                    }
                }
            }
            wtr.flush()?;
        }
    }
    log::info!("{} {} records", records.len(), snapshot.dataset);
    Ok(())
}

/// Write one line per map layer: marker count and style.
pub fn write_markers<W: Write>(out: &mut W, snapshot: &DataSnapshot, variable: &str) -> anyhow::Result<()> {
    let set = build_marker_set(snapshot, variable);
    for layer in &set.layers {
        writeln!(
            out,
            "{:<18} {:>5} markers  color {} radius {}{}",
            layer.layer.name(),
            layer.markers.len(),
            layer.style.color,
            layer.style.radius,
            if layer.layer.visible_by_default() { "" } else { "  (hidden)" },
        )?;
    }
    if set.skipped > 0 {
        writeln!(out, "{} records without a usable position were skipped", set.skipped)?;
    }
    Ok(())
}

pub fn write_diff<W: Write>(out: &mut W, previous: &DataSnapshot, current: &DataSnapshot) -> anyhow::Result<()> {
    if should_refresh(previous, current) {
        let mut reasons = Vec::new();
        if previous.dataset != current.dataset {
            reasons.push(format!("dataset {} -> {}", previous.dataset, current.dataset));
        }
        if previous.baseline != current.baseline {
            reasons.push("baseline records".to_string());
        }
        if previous.monthly != current.monthly {
            reasons.push("monthly records".to_string());
        }
        writeln!(out, "refresh: {}", reasons.join(", "))?;
    } else {
        writeln!(out, "unchanged")?;
    }
    Ok(())
}
