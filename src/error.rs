use thiserror::Error;

use crate::lorry_run::columns::MIN_COLUMNS;

/// Reasons a lorry run export could not be turned into a schedule.
///
/// Both variants abort the whole file; no partial schedule is produced.
#[derive(Error, Debug)]
pub enum TransformError {
    #[error(
        "CSV file does not contain the required columns: expected at least {}, found {found}",
        MIN_COLUMNS
    )]
    MissingColumns { found: usize },

    #[error("An error occurred while processing the lorry run: {0}")]
    Processing(#[source] anyhow::Error),
}
