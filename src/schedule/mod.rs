pub mod clock;

use std::io::Write;

use itertools::Itertools;
use serde::Serialize;

use crate::lorry_run::{route::Depot, stop::StopRecord};

/// Column names of the cleaned export, in output order.
pub const HEADER: [&str; 11] = [
    "Route Name",
    "Assigned Driver Username",
    "Assigned Vehicle Name",
    "Stop Name",
    "Stop Arrival Time",
    "Stop Departure Time",
    "Stop Notes",
    "Address Name",
    "Full Address",
    "Latitude",
    "Longitude",
];

/// One line of the cleaned export. Unused fields are written as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    #[serde(rename = "Route Name")]
    pub route_name: String,
    #[serde(rename = "Assigned Driver Username")]
    pub driver_username: String,
    #[serde(rename = "Assigned Vehicle Name")]
    pub vehicle_name: String,
    #[serde(rename = "Stop Name")]
    pub stop_name: String,
    #[serde(rename = "Stop Arrival Time")]
    pub arrival_time: String,
    #[serde(rename = "Stop Departure Time")]
    pub departure_time: String,
    #[serde(rename = "Stop Notes")]
    pub notes: String,
    #[serde(rename = "Address Name")]
    pub address_name: String,
    #[serde(rename = "Full Address")]
    pub full_address: String,
    #[serde(rename = "Latitude")]
    pub latitude: String,
    #[serde(rename = "Longitude")]
    pub longitude: String,
}

impl ScheduleRow {
    pub fn depot(route_name: &str, driver: &str, depot: Depot, departure_time: &str) -> Self {
        Self {
            route_name: route_name.to_owned(),
            driver_username: driver.to_owned(),
            stop_name: depot.name().to_owned(),
            address_name: depot.name().to_owned(),
            departure_time: departure_time.to_owned(),
            ..Default::default()
        }
    }

    pub fn stop(route_name: &str, driver: &str, stop: &StopRecord) -> Self {
        Self {
            route_name: route_name.to_owned(),
            driver_username: driver.to_owned(),
            stop_name: stop.name.clone(),
            address_name: stop.name.clone(),
            ..Default::default()
        }
    }
}

/// Per-route overview shown before the file is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    pub route_name: String,
    pub driver_username: String,
    pub depot: String,
    pub stops: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleTable {
    pub rows: Vec<ScheduleRow>,
}

impl ScheduleTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> anyhow::Result<()> {
        // Header is written by hand so an empty schedule still carries it.
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        wtr.write_record(HEADER)?;
        for row in self.rows.iter() {
            wtr.serialize(row)?;
        }
        wtr.flush()?;

        Ok(())
    }

    pub fn write_json<W: Write>(&self, mut writer: W) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut writer, &self.rows)?;
        writer.flush()?;
        Ok(())
    }

    /// Depot start and end rows bracket every route, so each run of equal
    /// route names is one route.
    pub fn routes(&self) -> Vec<RouteSummary> {
        self.rows
            .iter()
            .chunk_by(|row| row.route_name.clone())
            .into_iter()
            .map(|(route_name, rows)| {
                let rows = rows.collect::<Vec<_>>();
                RouteSummary {
                    route_name,
                    driver_username: rows[0].driver_username.clone(),
                    depot: rows[0].stop_name.clone(),
                    stops: rows.len().saturating_sub(2),
                }
            })
            .collect()
    }
}
