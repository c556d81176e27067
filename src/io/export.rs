//! Export batch predictions to CSV or JSON.
//!
//! Both exports echo the input attributes next to the prediction so the file
//! is readable on its own in a spreadsheet or downstream script.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::domain::{Prediction, Profile};
use crate::error::AppError;

/// One classified input row.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionRecord {
    pub line: usize,
    pub profile: Profile,
    pub prediction: Prediction,
}

/// Flat CSV row; nested structs cannot be written by `csv` directly.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    line: usize,
    age: i32,
    education: &'a str,
    occupation: &'a str,
    experience: i32,
    hours: i32,
    industry: &'a str,
    city_tier: &'a str,
    score: u32,
    bracket: &'static str,
    confidence: String,
}

impl<'a> From<&'a PredictionRecord> for CsvRow<'a> {
    fn from(r: &'a PredictionRecord) -> Self {
        Self {
            line: r.line,
            age: r.profile.age,
            education: &r.profile.education,
            occupation: &r.profile.occupation,
            experience: r.profile.experience,
            hours: r.profile.hours,
            industry: &r.profile.industry,
            city_tier: &r.profile.city_tier,
            score: r.prediction.score,
            bracket: r.prediction.bracket.label(),
            confidence: format!("{:.4}", r.prediction.confidence),
        }
    }
}

pub fn write_predictions_csv(path: &Path, records: &[PredictionRecord]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_predictions_csv_to(file, records)
}

pub fn write_predictions_csv_to<W: Write>(writer: W, records: &[PredictionRecord]) -> Result<(), AppError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for r in records {
        wtr.serialize(CsvRow::from(r))
            .map_err(|e| AppError::input(format!("Failed to write export CSV row: {e}")))?;
    }
    wtr.flush()
        .map_err(|e| AppError::input(format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}

pub fn write_predictions_json(path: &Path, records: &[PredictionRecord]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create export JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, records)
        .map_err(|e| AppError::input(format!("Failed to write export JSON: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PredictionRecord {
        let profile = Profile::default();
        let prediction = profile.predict();
        PredictionRecord {
            line: 2,
            profile,
            prediction,
        }
    }

    #[test]
    fn csv_quotes_labels_with_commas() {
        let mut buf = Vec::new();
        write_predictions_csv_to(&mut buf, &[record()]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "line,age,education,occupation,experience,hours,industry,city_tier,score,bracket,confidence"
        );
        let row = lines.next().unwrap();
        assert!(row.contains("\"Tier 1 (Mumbai, Delhi, Bangalore, etc.)\""));
        assert!(row.ends_with("123,>5 Lakhs,0.9500"));
    }

    #[test]
    fn json_record_shape() {
        let value = serde_json::to_value(record()).unwrap();
        assert_eq!(value["line"], 2);
        assert_eq!(value["profile"]["age"], 28);
        assert_eq!(value["prediction"]["bracket"], ">5 Lakhs");
        assert_eq!(value["prediction"]["breakdown"]["education"], 25);
    }
}
