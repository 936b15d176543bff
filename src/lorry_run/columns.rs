//! Positions of the fields we read from a lorry run export.
//!
//! The export has no usable header row, so every field is addressed by its
//! zero-based column index.

/// Stop label, optionally prefixed with a bracketed postcode.
pub const STOP_LABEL: usize = 0;
/// First half of the route key.
pub const ROUTE_PART_A: usize = 7;
/// Second half of the route key.
pub const ROUTE_PART_B: usize = 8;
/// Username of the driver assigned to the run.
pub const DRIVER_USERNAME: usize = 12;

/// Physical rows at the top of the file holding the report title.
pub const PREAMBLE_ROWS: usize = 2;

/// Narrowest table that contains every position above.
pub const MIN_COLUMNS: usize = DRIVER_USERNAME + 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_columns_covers_every_field() {
        assert_eq!(MIN_COLUMNS, 13);
        for position in [STOP_LABEL, ROUTE_PART_A, ROUTE_PART_B, DRIVER_USERNAME] {
            assert!(position < MIN_COLUMNS);
        }
    }
}
