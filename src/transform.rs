use itertools::Itertools;

use crate::{
    error::TransformError,
    lorry_run::{columns::MIN_COLUMNS, stop::StopRecord, RawTable},
    schedule::{
        clock::{departure_stamp, Clock},
        ScheduleRow, ScheduleTable,
    },
};

/// Turns the data rows of a lorry run export into a per-route stop schedule.
///
/// Every route that maps to a depot is emitted as a depot start row, its
/// stops in file order and a depot end row. Routes with no depot are dropped
/// entirely. The clock is read once and the same departure stamp is used on
/// every start row.
pub fn transform(table: &RawTable, clock: &dyn Clock) -> Result<ScheduleTable, TransformError> {
    let width = table.width();
    if width < MIN_COLUMNS {
        return Err(TransformError::MissingColumns { found: width });
    }

    let stops = table
        .rows
        .iter()
        .map(StopRecord::from_row)
        .filter(|stop| !stop.is_run_header())
        .unique_by(|stop| stop.name.clone())
        .collect::<Vec<_>>();

    let route_order = stops.iter().map(|stop| stop.route.clone()).unique().collect::<Vec<_>>();
    let mut stops_by_route = stops.into_iter().into_group_map_by(|stop| stop.route.clone());

    let departure_time = departure_stamp(clock);

    let mut rows = vec![];
    for route in route_order {
        let Some(members) = stops_by_route.remove(&route) else {
            continue;
        };

        let driver = members[0].driver.as_str();
        if members.iter().any(|stop| stop.driver != driver) {
            log::debug!("{route} lists more than one driver, using {driver:?}");
        }

        let Some(depot) = route.depot() else {
            log::info!(
                "Skipping {route}: route number {:?} is not served by any depot",
                route.number()
            );
            continue;
        };

        rows.push(ScheduleRow::depot(route.name(), driver, depot, &departure_time));
        rows.extend(
            members
                .iter()
                .map(|stop| ScheduleRow::stop(route.name(), driver, stop)),
        );
        rows.push(ScheduleRow::depot(route.name(), driver, depot, ""));
    }

    log::info!("Built schedule with {} rows", rows.len());

    Ok(ScheduleTable { rows })
}
