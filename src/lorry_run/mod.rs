pub mod columns;
pub mod route;
pub mod stop;

use std::{fs::File, io::Read, path::Path};

use anyhow::Context;

use crate::error::TransformError;

/// A data row of the export, addressed by column position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow(Vec<String>);

impl RawRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self(cells)
    }

    /// Cell at `position`, or an empty string when the row is shorter than that.
    pub fn get(&self, position: usize) -> &str {
        self.0.get(position).map(String::as_str).unwrap_or("")
    }

    pub fn width(&self) -> usize {
        self.0.len()
    }
}

/// The data rows of a lorry run export, with the title preamble removed.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn read<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let f = File::open(&path)
            .with_context(|| format!("Failed to open {:?}", path.as_ref()))?;
        Ok(Self::from_reader(f)?)
    }

    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, TransformError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(rdr);

        let mut rows = vec![];
        for record in reader.byte_records() {
            let record = record.map_err(|e| TransformError::Processing(e.into()))?;

            // Blank lines produce no record, so the preamble is counted in physical lines.
            let in_preamble = record
                .position()
                .map_or(false, |p| p.line() <= columns::PREAMBLE_ROWS as u64);
            if in_preamble {
                continue;
            }

            let record = csv::StringRecord::from_byte_record(record)
                .map_err(|e| TransformError::Processing(e.into()))?;
            rows.push(RawRow::new(record.iter().map(str::to_owned).collect()));
        }

        log::debug!("Read {} data rows", rows.len());

        Ok(Self { rows })
    }

    /// Number of columns in the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(RawRow::width).max().unwrap_or(0)
    }
}
