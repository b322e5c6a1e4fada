use clap::Subcommand;
use convene_core::{
    index::IndexSummary,
    report::SolutionReport,
    solver::{self, Co2Unit},
};
use std::{fs::File, io::BufWriter};

use crate::app::{
    config_ops::{self, ConfigOverrides},
    flight_csv, scenario_file, AppError,
};

#[derive(Debug, Clone, Subcommand)]
pub enum ConveneOperation {
    /// choose a meeting location for the attendees in a scenario file
    Solve {
        /// scenario JSON with attendees, availability_window and event_duration
        scenario_file: String,
        /// flight connection CSV, one row per scheduled leg
        flights_file: String,
        /// TOML file layered over the default configuration
        #[arg(long)]
        config: Option<String>,
        #[arg(long)]
        duration_weight: Option<f64>,
        #[arg(long)]
        emission_weight: Option<f64>,
        /// host metric weight as KEY=VALUE, repeatable. replaces the configured weights
        #[arg(long, value_parser = config_ops::parse_host_weight)]
        host_weight: Vec<(String, f64)>,
        /// number of runner-up hosts to report
        #[arg(long)]
        alternatives: Option<usize>,
        #[arg(long)]
        parallelism: Option<usize>,
        #[arg(long, value_enum)]
        co2_unit: Option<Co2Unit>,
        /// count the mirrored return flight in hours and emissions
        #[arg(long)]
        round_trip: bool,
        /// rank hosts some groups cannot reach when no host suits everyone
        #[arg(long)]
        allow_partial_hosts: bool,
        /// write the JSON report here instead of stdout
        #[arg(short, long)]
        output_file: Option<String>,
    },
    /// summarize a flight connection file
    Summary {
        flights_file: String,
    },
}

impl ConveneOperation {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            ConveneOperation::Solve {
                scenario_file,
                flights_file,
                config,
                duration_weight,
                emission_weight,
                host_weight,
                alternatives,
                parallelism,
                co2_unit,
                round_trip,
                allow_partial_hosts,
                output_file,
            } => {
                let overrides = ConfigOverrides {
                    duration_weight: *duration_weight,
                    emission_weight: *emission_weight,
                    host_weights: host_weight.clone(),
                    alternatives: *alternatives,
                    parallelism: *parallelism,
                    co2_unit: *co2_unit,
                    round_trip: *round_trip,
                    allow_partial_hosts: *allow_partial_hosts,
                };
                let engine_config = config_ops::load_engine_config(config.as_deref(), &overrides)?;
                let scenario = scenario_file::read_scenario(scenario_file)?;
                let index = flight_csv::read_flight_index(flights_file)?;
                let solution = solver::solve(&index, &scenario, &engine_config)?;
                let report = SolutionReport::new(&solution, engine_config.co2_unit);
                write_report(&report, output_file.as_deref())
            }
            ConveneOperation::Summary { flights_file } => {
                let index = flight_csv::read_flight_index(flights_file)?;
                for (row, error) in index.load_report().skipped.iter() {
                    log::info!("row {row}: {error}");
                }
                println!("{}", IndexSummary::HEADER);
                println!("{}", index.summary());
                Ok(())
            }
        }
    }
}

fn write_report(report: &SolutionReport, output_file: Option<&str>) -> Result<(), AppError> {
    match output_file {
        None => {
            let json = serde_json::to_string_pretty(report).map_err(|e| AppError::JsonError {
                filepath: String::from("<stdout>"),
                source: e,
            })?;
            println!("{json}");
        }
        Some(filepath) => {
            let file = File::create(filepath).map_err(|e| AppError::IoError {
                filepath: filepath.to_string(),
                source: e,
            })?;
            serde_json::to_writer_pretty(BufWriter::new(file), report).map_err(|e| {
                AppError::JsonError {
                    filepath: filepath.to_string(),
                    source: e,
                }
            })?;
            log::info!("wrote report to '{filepath}'");
        }
    }
    Ok(())
}
