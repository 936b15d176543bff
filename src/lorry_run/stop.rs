use lazy_static::lazy_static;
use regex::Regex;

use crate::lorry_run::{columns, route::RouteKey, RawRow};

lazy_static! {
    static ref POSTCODE_PREFIX: Regex = Regex::new(r"^\[.*?\]\s*").unwrap();
}

/// Removes a leading `[...]` tag, and the whitespace after it, from a stop label.
pub fn strip_postcode(label: &str) -> &str {
    match POSTCODE_PREFIX.find(label) {
        Some(m) => &label[m.end()..],
        None => label,
    }
}

/// One data row of the export, reduced to the fields the schedule needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopRecord {
    pub route: RouteKey,
    pub driver: String,
    pub name: String,
}

impl StopRecord {
    pub fn from_row(row: &RawRow) -> Self {
        Self {
            route: RouteKey::new(
                row.get(columns::ROUTE_PART_A),
                row.get(columns::ROUTE_PART_B),
            ),
            driver: row.get(columns::DRIVER_USERNAME).to_owned(),
            name: strip_postcode(row.get(columns::STOP_LABEL)).to_owned(),
        }
    }

    /// Summary lines in the export repeat the run title in the stop column.
    pub fn is_run_header(&self) -> bool {
        self.name.starts_with("Run:")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> RawRow {
        RawRow::new(cells.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn strips_bracketed_postcode() {
        assert_eq!(strip_postcode("[AB1 2CD] High Street"), "High Street");
        assert_eq!(strip_postcode("[LS1]High Street"), "High Street");
        assert_eq!(strip_postcode("[AB1 2CD]   \tHigh Street"), "High Street");
    }

    #[test]
    fn leaves_unbracketed_labels_alone() {
        assert_eq!(strip_postcode("High Street"), "High Street");
        assert_eq!(strip_postcode(" [AB1] High Street"), " [AB1] High Street");
        assert_eq!(strip_postcode("High [AB1] Street"), "High [AB1] Street");
        assert_eq!(strip_postcode("[unclosed High Street"), "[unclosed High Street");
    }

    #[test]
    fn stops_at_first_closing_bracket() {
        assert_eq!(strip_postcode("[A] [B] Yard"), "[B] Yard");
    }

    #[test]
    fn builds_record_from_positions() {
        let record = StopRecord::from_row(&row(&[
            "[BD1 1AA] Depot Road",
            "",
            "",
            "",
            "",
            "",
            "",
            "12",
            "3.0",
            "",
            "",
            "",
            "jsmith",
        ]));

        assert_eq!(record.name, "Depot Road");
        assert_eq!(record.driver, "jsmith");
        assert_eq!(record.route.name(), "Run 12 3:0");
        assert!(!record.is_run_header());
    }

    #[test]
    fn short_rows_read_missing_cells_as_empty() {
        let record = StopRecord::from_row(&row(&["Run: Summary"]));
        assert_eq!(record.driver, "");
        assert_eq!(record.route.name(), "Run  ");
        assert!(record.is_run_header());
    }
}
