//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads `.env` configuration and installs logging
//! - dispatches to the classify / batch / options / TUI front-ends

use clap::Parser;
use serde::Serialize;

use crate::cli::{BatchArgs, ClassifyArgs, Command, OutputFormat, ProfileArgs};
use crate::config::AppConfig;
use crate::domain::{CityTier, Choice, Education, Industry, Occupation, Prediction, Profile};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `salary` binary.
pub fn run() -> Result<(), AppError> {
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    let config = AppConfig::from_env()?;
    crate::logging::init(&config)?;

    match cli.command {
        Command::Classify(args) => handle_classify(args, &config),
        Command::Batch(args) => handle_batch(args),
        Command::Options => {
            println!("{}", crate::report::format_options());
            Ok(())
        }
        Command::Tui(args) => handle_tui(args),
    }
}

#[derive(Serialize)]
struct ClassifyOutput<'a> {
    profile: &'a Profile,
    prediction: &'a Prediction,
}

fn handle_classify(args: ClassifyArgs, config: &AppConfig) -> Result<(), AppError> {
    let profile = args.profile.to_profile();
    warn_on_unlisted_labels(&profile);
    let prediction = profile.predict();

    print!("{}", render_classify(&args, config, &profile, &prediction)?);
    Ok(())
}

/// `--format` wins; otherwise `SALARY_FORMAT` (text when unset).
fn output_format(args: &ClassifyArgs, config: &AppConfig) -> OutputFormat {
    args.format.unwrap_or(config.default_format)
}

fn render_classify(
    args: &ClassifyArgs,
    config: &AppConfig,
    profile: &Profile,
    prediction: &Prediction,
) -> Result<String, AppError> {
    let mut out = String::new();
    match output_format(args, config) {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&ClassifyOutput { profile, prediction })
                .map_err(|e| AppError::runtime(format!("Failed to encode JSON: {e}")))?;
            out.push_str(&json);
            out.push('\n');
        }
        OutputFormat::Text => {
            let mut sections = vec![crate::report::format_prediction(prediction)];
            if args.breakdown {
                sections.push(crate::report::format_score_breakdown(prediction));
            }
            if args.tips {
                sections.push(crate::report::format_profile_summary(profile));
                sections.push(crate::report::format_career_tips(profile));
            }
            for section in sections {
                out.push_str(&section);
                out.push('\n');
            }
        }
    }
    Ok(out)
}

fn handle_batch(args: BatchArgs) -> Result<(), AppError> {
    let out = pipeline::run_batch(&args.input)?;

    println!("{}", crate::report::format_batch_summary(&out));

    if let Some(path) = &args.output {
        crate::io::write_predictions_csv(path, &out.records)?;
        tracing::info!(path = %path.display(), "wrote predictions CSV");
    }
    if let Some(path) = &args.json {
        crate::io::write_predictions_json(path, &out.records)?;
        tracing::info!(path = %path.display(), "wrote predictions JSON");
    }
    Ok(())
}

fn handle_tui(args: ProfileArgs) -> Result<(), AppError> {
    crate::tui::run(args.to_profile())
}

/// Labels outside the choice lists are legal but score through defaults.
fn warn_on_unlisted_labels(profile: &Profile) {
    if Education::from_label(&profile.education).is_none() {
        tracing::warn!(education = %profile.education, "unlisted education level; scoring with default");
    }
    if Occupation::from_label(&profile.occupation).is_none() {
        tracing::warn!(occupation = %profile.occupation, "unlisted occupation; scoring as non-premium");
    }
    if Industry::from_label(&profile.industry).is_none() {
        tracing::warn!(industry = %profile.industry, "unlisted industry; scoring as non-premium");
    }
    if CityTier::from_label(&profile.city_tier).is_none() {
        tracing::debug!(
            city_tier = %profile.city_tier,
            resolved = ?CityTier::resolve(&profile.city_tier),
            "city tier matched by substring"
        );
    }
}

/// Rewrite argv so `salary` defaults to `salary tui`.
///
/// Rules:
/// - `salary`                     -> `salary tui`
/// - `salary --age 30 ...`        -> `salary tui --age 30 ...`
/// - `salary --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "classify" | "batch" | "options" | "tui");
    if is_subcommand {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_opens_tui() {
        assert_eq!(rewrite_args(argv(&["salary"])), argv(&["salary", "tui"]));
    }

    #[test]
    fn leading_flags_go_to_tui() {
        assert_eq!(
            rewrite_args(argv(&["salary", "--age", "40"])),
            argv(&["salary", "tui", "--age", "40"])
        );
    }

    #[test]
    fn subcommands_and_help_untouched() {
        assert_eq!(
            rewrite_args(argv(&["salary", "classify", "--age", "40"])),
            argv(&["salary", "classify", "--age", "40"])
        );
        assert_eq!(rewrite_args(argv(&["salary", "--help"])), argv(&["salary", "--help"]));
        assert_eq!(rewrite_args(argv(&["salary", "options"])), argv(&["salary", "options"]));
    }

    fn classify_args(args: &[&str]) -> ClassifyArgs {
        let cli = crate::cli::Cli::parse_from(argv(args));
        let Command::Classify(args) = cli.command else {
            panic!("expected classify");
        };
        args
    }

    fn json_config() -> AppConfig {
        AppConfig {
            default_format: OutputFormat::Json,
            ..AppConfig::default()
        }
    }

    #[test]
    fn format_flag_overrides_environment_default() {
        let args = classify_args(&["salary", "classify"]);
        assert_eq!(output_format(&args, &AppConfig::default()), OutputFormat::Text);
        assert_eq!(output_format(&args, &json_config()), OutputFormat::Json);

        let args = classify_args(&["salary", "classify", "--format", "text"]);
        assert_eq!(output_format(&args, &json_config()), OutputFormat::Text);
    }

    #[test]
    fn classify_json_nests_profile_and_prediction() {
        let args = classify_args(&["salary", "classify"]);
        let profile = args.profile.to_profile();
        let prediction = profile.predict();
        let out = render_classify(&args, &json_config(), &profile, &prediction).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["profile"]["age"], 28);
        assert_eq!(value["profile"]["education"], "Bachelor's Degree");
        assert_eq!(value["prediction"]["bracket"], ">5 Lakhs");
        assert_eq!(value["prediction"]["score"], 123);
        assert_eq!(value["prediction"]["confidence"], 0.95);
        assert_eq!(value["prediction"]["breakdown"]["industry"], 18);
    }

    #[test]
    fn classify_text_sections_follow_flags() {
        let args = classify_args(&["salary", "classify", "--breakdown"]);
        let profile = args.profile.to_profile();
        let prediction = profile.predict();
        let out = render_classify(&args, &AppConfig::default(), &profile, &prediction).unwrap();
        assert!(out.starts_with("=== Higher Salary Range ==="));
        assert!(out.contains("total       123"));
        assert!(!out.contains("Your Profile Summary"));
    }

    #[test]
    fn rewritten_flags_parse_as_tui() {
        let cli = crate::cli::Cli::parse_from(rewrite_args(argv(&["salary", "--experience", "12"])));
        let Command::Tui(args) = cli.command else {
            panic!("expected tui");
        };
        assert_eq!(args.experience, 12);
    }
}
