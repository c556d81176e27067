//! Command-line parsing for the salary-bracket estimator.
//!
//! Argument parsing and range validation live here; the scorer itself never
//! checks bounds. Categorical flags take free text so custom labels go
//! through the scoring defaults instead of being rejected.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::{
    AGE_RANGE, CityTier, Choice, DEFAULT_AGE, DEFAULT_EXPERIENCE, DEFAULT_HOURS, EXPERIENCE_RANGE, Education,
    HOURS_RANGE, Industry, Occupation, Profile,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "salary",
    version,
    about = "Heuristic salary-bracket estimator for the Indian job market"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify one profile and print the predicted bracket.
    Classify(ClassifyArgs),
    /// Classify every profile in a CSV file.
    Batch(BatchArgs),
    /// List the known choices for each field with their points.
    Options,
    /// Launch the interactive form.
    ///
    /// Profile flags seed the form's initial values.
    Tui(ProfileArgs),
}

/// Output format for single classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// The seven scorer inputs.
#[derive(Debug, Parser, Clone)]
pub struct ProfileArgs {
    /// Age in years (18-65).
    #[arg(long, default_value_t = DEFAULT_AGE, value_parser = clap::value_parser!(i32).range(AGE_RANGE.0 as i64..=AGE_RANGE.1 as i64))]
    pub age: i32,

    /// Highest education level, e.g. "Master's Degree".
    #[arg(long, default_value_t = Education::default().label().to_string())]
    pub education: String,

    /// Primary occupation, e.g. "Banking/Finance".
    #[arg(long, default_value_t = Occupation::default().label().to_string())]
    pub occupation: String,

    /// Years of experience (0-40).
    #[arg(long, default_value_t = DEFAULT_EXPERIENCE, value_parser = clap::value_parser!(i32).range(EXPERIENCE_RANGE.0 as i64..=EXPERIENCE_RANGE.1 as i64))]
    pub experience: i32,

    /// Hours worked per week (20-80). Shown in the summary only.
    #[arg(long, default_value_t = DEFAULT_HOURS, value_parser = clap::value_parser!(i32).range(HOURS_RANGE.0 as i64..=HOURS_RANGE.1 as i64))]
    pub hours: i32,

    /// Industry sector, e.g. "Consulting".
    #[arg(long, default_value_t = Industry::default().label().to_string())]
    pub industry: String,

    /// City tier description; matched on "Tier 1" / "Tier 2".
    #[arg(long = "city-tier", default_value_t = CityTier::default().label().to_string())]
    pub city_tier: String,
}

impl ProfileArgs {
    pub fn to_profile(&self) -> Profile {
        Profile {
            age: self.age,
            education: self.education.clone(),
            occupation: self.occupation.clone(),
            experience: self.experience,
            hours: self.hours,
            industry: self.industry.clone(),
            city_tier: self.city_tier.clone(),
        }
    }
}

#[derive(Debug, Parser, Clone)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Output format (defaults to SALARY_FORMAT, else text).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Include the per-attribute point table.
    #[arg(long)]
    pub breakdown: bool,

    /// Include the profile summary and career tips.
    #[arg(long)]
    pub tips: bool,
}

#[derive(Debug, Parser, Clone)]
pub struct BatchArgs {
    /// Profile CSV with columns age,education,occupation,experience,hours,industry,city_tier.
    #[arg(short = 'i', long, value_name = "CSV")]
    pub input: PathBuf,

    /// Write predictions to CSV.
    #[arg(short = 'o', long, value_name = "CSV")]
    pub output: Option<PathBuf>,

    /// Write predictions to pretty JSON.
    #[arg(long, value_name = "JSON")]
    pub json: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_defaults_match_form() {
        let cli = Cli::try_parse_from(["salary", "classify"]).unwrap();
        let Command::Classify(args) = cli.command else {
            panic!("expected classify");
        };
        assert_eq!(args.profile.to_profile(), Profile::default());
        assert_eq!(args.format, None);
    }

    #[test]
    fn age_range_enforced_at_parse_time() {
        assert!(Cli::try_parse_from(["salary", "classify", "--age", "17"]).is_err());
        assert!(Cli::try_parse_from(["salary", "classify", "--age", "66"]).is_err());
        assert!(Cli::try_parse_from(["salary", "classify", "--age", "65"]).is_ok());
        assert!(Cli::try_parse_from(["salary", "classify", "--hours", "81"]).is_err());
        assert!(Cli::try_parse_from(["salary", "classify", "--experience", "41"]).is_err());
    }

    #[test]
    fn free_text_categories_are_accepted() {
        let cli = Cli::try_parse_from([
            "salary",
            "classify",
            "--education",
            "Self-taught",
            "--city-tier",
            "Tier 2 town",
            "--format",
            "json",
        ])
        .unwrap();
        let Command::Classify(args) = cli.command else {
            panic!("expected classify");
        };
        assert_eq!(args.profile.education, "Self-taught");
        assert_eq!(args.profile.city_tier, "Tier 2 town");
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn batch_requires_input() {
        assert!(Cli::try_parse_from(["salary", "batch"]).is_err());
        assert!(Cli::try_parse_from(["salary", "batch", "-i", "profiles.csv"]).is_ok());
    }
}
