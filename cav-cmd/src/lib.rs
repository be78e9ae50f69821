//! Command implementations for the climate anomaly viewer CLI.
//!
//! Runs the station-data reconciler over baseline and monthly record files
//! (`.csv` or `.json`) and prints what the map would show.

use cav_stations::Dataset;
use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod input;
pub mod report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the records the data layer shows for a dataset
    Display {
        /// baseline, monthly or anomaly
        #[arg(short, long, default_value = "anomaly")]
        dataset: Dataset,

        /// Baseline records file
        #[arg(short, long)]
        baseline: PathBuf,

        /// Monthly records file
        #[arg(short, long)]
        monthly: PathBuf,

        #[arg(short, long, value_enum, default_value = "csv")]
        format: OutputFormat,
    },

    /// Summarize the markers each map layer would draw
    Markers {
        #[arg(short, long, default_value = "anomaly")]
        dataset: Dataset,

        /// Variable key, selects the data marker colour
        #[arg(short, long, default_value = "precip")]
        variable: String,

        #[arg(short, long)]
        baseline: PathBuf,

        #[arg(short, long)]
        monthly: PathBuf,
    },

    /// Report whether moving between two inputs would redraw the map
    Diff {
        #[arg(long, default_value = "anomaly")]
        previous_dataset: Dataset,

        #[arg(long)]
        previous_baseline: PathBuf,

        #[arg(long)]
        previous_monthly: PathBuf,

        /// Defaults to the previous dataset
        #[arg(long)]
        current_dataset: Option<Dataset>,

        #[arg(long)]
        current_baseline: PathBuf,

        #[arg(long)]
        current_monthly: PathBuf,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Display {
            dataset,
            baseline,
            monthly,
            format,
        } => {
            let snapshot = input::read_snapshot(dataset, &baseline, &monthly)?;
            report::write_display(&mut out, &snapshot, format)
        }
        Command::Markers {
            dataset,
            variable,
            baseline,
            monthly,
        } => {
            let snapshot = input::read_snapshot(dataset, &baseline, &monthly)?;
            report::write_markers(&mut out, &snapshot, &variable)
        }
        Command::Diff {
            previous_dataset,
            previous_baseline,
            previous_monthly,
            current_dataset,
            current_baseline,
            current_monthly,
        } => {
            let previous = input::read_snapshot(previous_dataset, &previous_baseline, &previous_monthly)?;
            let current = input::read_snapshot(
                current_dataset.unwrap_or(previous_dataset),
                &current_baseline,
                &current_monthly,
            )?;
            report::write_diff(&mut out, &previous, &current)
        }
    }
}
