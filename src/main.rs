use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::Context;
use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use crate::{
    lorry_run::RawTable,
    schedule::{
        clock::{Clock, FixedClock, LocalClock},
        ScheduleTable,
    },
    transform::transform,
};
mod error;
mod lorry_run;
mod schedule;
mod transform;

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(about = "Clean a LorryRunDetails export into a per-route stop schedule")]
struct Args {
    /// Path to the LorryRunDetails CSV
    input: PathBuf,
    /// Where to write the cleaned schedule
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Format of the cleaned schedule
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,
    /// Date stamped on depot departures, defaults to today
    #[arg(long)]
    run_date: Option<NaiveDate>,
    /// Skip the preview and only log warnings
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn output_path(&self) -> PathBuf {
        match (&self.output, self.format) {
            (Some(path), _) => path.clone(),
            (None, Format::Csv) => PathBuf::from("Cleaned_LorryRunDetails.csv"),
            (None, Format::Json) => PathBuf::from("Cleaned_LorryRunDetails.json"),
        }
    }

    fn clock(&self) -> Box<dyn Clock> {
        match self.run_date {
            Some(date) => Box::new(FixedClock(date.and_time(NaiveTime::MIN))),
            None => Box::new(LocalClock),
        }
    }
}

/// Renders the whole schedule before touching the file, so a failed export
/// never leaves a truncated file behind.
fn write_output(schedule: &ScheduleTable, format: Format, path: &Path) -> anyhow::Result<()> {
    let mut buf = vec![];
    match format {
        Format::Csv => schedule.write_csv(&mut buf)?,
        Format::Json => schedule.write_json(&mut buf)?,
    }

    fs::write(path, buf).with_context(|| format!("Failed to write {:?}", path))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new().with_level(level).env().init()?;

    let now = Instant::now();
    let table = RawTable::read(&args.input)?;
    log::info!(
        "Read {} rows from {:?} in {:?}",
        table.rows.len(),
        args.input,
        now.elapsed()
    );

    let schedule = transform(&table, args.clock().as_ref())?;

    if schedule.is_empty() {
        log::warn!("No routes matched a depot, the cleaned file will only hold a header");
    }

    if !args.quiet {
        for route in schedule.routes() {
            println!(
                "{}: {} stops for {} from {}",
                route.route_name, route.stops, route.driver_username, route.depot
            );
        }
    }

    let output_path = args.output_path();
    write_output(&schedule, args.format, &output_path)?;

    log::info!("Wrote {} rows to {:?}", schedule.rows.len(), output_path);

    Ok(())
}
