//! Batch CSV ingest of profiles.
//!
//! Expected header (any order, case-insensitive):
//! `age,education,occupation,experience,hours,industry,city_tier`.
//!
//! Numeric columns are parsed and range-checked here, the same way the form
//! bounds its sliders. Categorical columns are taken as-is; unknown labels
//! are not an error because the scorer has defaults for them. A bad row is
//! recorded and skipped, never fatal.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{AGE_RANGE, EXPERIENCE_RANGE, HOURS_RANGE, Profile};
use crate::error::AppError;

pub const PROFILE_COLUMNS: [&str; 7] = [
    "age",
    "education",
    "occupation",
    "experience",
    "hours",
    "industry",
    "city_tier",
];

/// A row-level error encountered during ingest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based line number in the file (header is line 1).
    pub line: usize,
    pub message: String,
}

/// A parsed profile plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRow {
    pub line: usize,
    pub profile: Profile,
}

#[derive(Debug, Clone, Default)]
pub struct IngestedProfiles {
    pub rows: Vec<ProfileRow>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Load profiles from a CSV file.
pub fn load_profiles(path: &Path) -> Result<IngestedProfiles, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open CSV '{}': {e}", path.display())))?;
    load_profiles_from_reader(file)
}

pub fn load_profiles_from_reader<R: Read>(reader: R) -> Result<IngestedProfiles, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    let missing: Vec<&str> = PROFILE_COLUMNS
        .iter()
        .copied()
        .filter(|c| !header_map.contains_key(*c))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::input(format!(
            "Missing required column(s): {}",
            missing.join(", ")
        )));
    }

    let mut out = IngestedProfiles::default();

    for (idx, result) in reader.records().enumerate() {
        // records() starts after the header, which is line 1.
        let line = idx + 2;
        out.rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                let message = format!("CSV parse error: {e}");
                tracing::warn!(line, %message, "skipping profile row");
                out.row_errors.push(RowError { line, message });
                continue;
            }
        };

        match parse_row(&record, &header_map) {
            Ok(profile) => out.rows.push(ProfileRow { line, profile }),
            Err(message) => {
                tracing::warn!(line, %message, "skipping profile row");
                out.row_errors.push(RowError { line, message });
            }
        }
    }

    tracing::info!(
        rows_read = out.rows_read,
        rows_used = out.rows.len(),
        rows_skipped = out.row_errors.len(),
        "loaded profiles"
    );

    Ok(out)
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports often prefix the first header with a UTF-8 BOM.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn parse_row(record: &StringRecord, header_map: &HashMap<String, usize>) -> Result<Profile, String> {
    Ok(Profile {
        age: parse_bounded(record, header_map, "age", AGE_RANGE)?,
        education: get_required(record, header_map, "education")?.to_string(),
        occupation: get_required(record, header_map, "occupation")?.to_string(),
        experience: parse_bounded(record, header_map, "experience", EXPERIENCE_RANGE)?,
        hours: parse_bounded(record, header_map, "hours", HOURS_RANGE)?,
        industry: get_required(record, header_map, "industry")?.to_string(),
        city_tier: get_required(record, header_map, "city_tier")?.to_string(),
    })
}

fn parse_bounded(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
    (lo, hi): (i32, i32),
) -> Result<i32, String> {
    let raw = get_required(record, header_map, name)?;
    let value: i32 = raw
        .parse()
        .map_err(|_| format!("Invalid `{name}` value '{raw}' (expected a whole number)."))?;
    if !(lo..=hi).contains(&value) {
        return Err(format!("`{name}`={value} is outside {lo}-{hi}."));
    }
    Ok(value)
}

fn get_required<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Result<&'a str, String> {
    let idx = header_map
        .get(name)
        .ok_or_else(|| format!("Missing required column: `{name}`"))?;
    record
        .get(*idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing required value: `{name}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "age,education,occupation,experience,hours,industry,city_tier\n";

    #[test]
    fn loads_valid_rows_with_quoted_labels() {
        let csv = format!(
            "{HEADER}28,Bachelor's Degree,Software Engineer/IT,5,45,Information Technology,\"Tier 1 (Mumbai, Delhi, Bangalore, etc.)\"\n"
        );
        let data = load_profiles_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(data.rows_read, 1);
        assert!(data.row_errors.is_empty());
        let row = &data.rows[0];
        assert_eq!(row.line, 2);
        assert_eq!(row.profile.city_tier, "Tier 1 (Mumbai, Delhi, Bangalore, etc.)");
        assert_eq!(row.profile.predict().score, 123);
    }

    #[test]
    fn bad_rows_are_skipped_with_line_numbers() {
        let csv = format!(
            "{HEADER}\
             abc,Diploma,Banking/Finance,3,40,Consulting,Tier 2\n\
             30,Diploma,Banking/Finance,3,40,Consulting,Tier 2\n\
             30,Diploma,Banking/Finance,3,90,Consulting,Tier 2\n\
             30,,Banking/Finance,3,40,Consulting,Tier 2\n"
        );
        let data = load_profiles_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(data.rows_read, 4);
        assert_eq!(data.rows.len(), 1);
        assert_eq!(data.rows[0].line, 3);

        let lines: Vec<usize> = data.row_errors.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![2, 4, 5]);
        assert!(data.row_errors[0].message.contains("age"));
        assert!(data.row_errors[1].message.contains("outside 20-80"));
        assert!(data.row_errors[2].message.contains("education"));
    }

    #[test]
    fn undecodable_rows_are_skipped_and_reading_continues() {
        let mut csv = HEADER.as_bytes().to_vec();
        csv.extend_from_slice(b"30,Diploma,Banking/Finance,3,40,Consulting,Tier 2\n");
        csv.extend_from_slice(b"30,Diploma\xff,Banking/Finance,3,40,Consulting,Tier 2\n");
        csv.extend_from_slice(b"31,Diploma,Banking/Finance,3,40,Consulting,Tier 2\n");

        let data = load_profiles_from_reader(csv.as_slice()).unwrap();
        assert_eq!(data.rows_read, 3);
        let lines: Vec<usize> = data.rows.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![2, 4]);
        assert_eq!(data.row_errors.len(), 1);
        assert_eq!(data.row_errors[0].line, 3);
        assert!(data.row_errors[0].message.starts_with("CSV parse error"));
    }

    #[test]
    fn unknown_labels_are_not_errors() {
        let csv = format!("{HEADER}40,Self-taught,Digital Marketing,12,50,Media,Metro\n");
        let data = load_profiles_from_reader(csv.as_bytes()).unwrap();
        assert!(data.row_errors.is_empty());
        let pred = data.rows[0].profile.predict();
        // 25 + 10 + 15 + 25 + 10 + 5
        assert_eq!(pred.score, 90);
    }

    #[test]
    fn headers_are_case_insensitive_and_reorderable() {
        let csv = "\u{feff}City_Tier,AGE,Education,Occupation,Experience,Hours,Industry\n\
                   Tier 3,50,Diploma,Sales Professional,1,30,Other\n";
        let data = load_profiles_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(data.rows.len(), 1);
        assert_eq!(data.rows[0].profile.age, 50);
        assert_eq!(data.rows[0].profile.city_tier, "Tier 3");
    }

    #[test]
    fn missing_columns_fail_fast() {
        let err = load_profiles_from_reader("age,education\n30,Diploma\n".as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("occupation"));
        assert!(err.message().contains("city_tier"));
    }
}
