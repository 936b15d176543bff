use chrono::{Local, NaiveDateTime};

/// Source of the "now" used to stamp depot departures.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local time zone.
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Departure stamp for the depot start row. Only the date comes from the clock.
pub fn departure_stamp(clock: &dyn Clock) -> String {
    clock.now().format("%m/%d/%y 4:00").to_string()
}
