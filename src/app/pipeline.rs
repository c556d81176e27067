//! Batch workflow shared by the `batch` command.
//!
//! CSV ingest -> per-row scoring -> records ready for printing or export.

use std::path::Path;

use crate::error::AppError;
use crate::io::{IngestedProfiles, PredictionRecord, RowError, load_profiles};

/// All computed outputs of a single batch run.
#[derive(Debug, Clone)]
pub struct BatchOutput {
    pub records: Vec<PredictionRecord>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Load a profile CSV and classify every valid row.
pub fn run_batch(path: &Path) -> Result<BatchOutput, AppError> {
    let ingest = load_profiles(path)?;
    Ok(classify_ingested(ingest))
}

pub fn classify_ingested(ingest: IngestedProfiles) -> BatchOutput {
    let records = ingest
        .rows
        .into_iter()
        .map(|row| {
            let prediction = row.profile.predict();
            PredictionRecord {
                line: row.line,
                profile: row.profile,
                prediction,
            }
        })
        .collect();

    BatchOutput {
        records,
        row_errors: ingest.row_errors,
        rows_read: ingest.rows_read,
    }
}
