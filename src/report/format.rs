//! Formatted terminal output for predictions and profiles.
//!
//! The TUI and the `classify` command both render through these functions
//! so wording stays identical across front-ends.

use crate::app::pipeline::BatchOutput;
use crate::domain::{Prediction, Profile, SalaryBracket};

/// Headline and tagline for a bracket.
pub fn bracket_copy(bracket: SalaryBracket) -> (&'static str, &'static str) {
    match bracket {
        SalaryBracket::Higher => ("Higher Salary Range", "Above average for Indian market!"),
        SalaryBracket::Standard => ("Standard Salary Range", "Good foundation with growth potential!"),
    }
}

/// Confidence as a percentage with one decimal, e.g. `95.0%`.
pub fn fmt_percent(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// The prediction "box".
pub fn format_prediction(prediction: &Prediction) -> String {
    let (headline, tagline) = bracket_copy(prediction.bracket);
    let mut out = String::new();
    out.push_str(&format!("=== {headline} ===\n"));
    out.push_str(&format!("Predicted: {}\n", prediction.bracket.range_label()));
    out.push_str(&format!("Bracket: {}\n", prediction.bracket));
    out.push_str(&format!("Confidence: {}\n", fmt_percent(prediction.confidence)));
    out.push_str(tagline);
    out.push('\n');
    out
}

/// One summary metric: label and value.
pub type SummaryItem = (&'static str, String);

/// Profile summary metrics in display order.
pub fn profile_summary(profile: &Profile) -> Vec<SummaryItem> {
    vec![
        ("Age", format!("{} years", profile.age)),
        ("Education", profile.education.clone()),
        ("Experience", format!("{} years", profile.experience)),
        ("Work Hours", format!("{}/week", profile.hours)),
        ("Industry", first_word(&profile.industry).to_string()),
        ("Location", first_word(&profile.city_tier).to_string()),
    ]
}

pub fn format_profile_summary(profile: &Profile) -> String {
    let mut out = String::from("Your Profile Summary:\n");
    for (label, value) in profile_summary(profile) {
        out.push_str(&format!("  {label:<11} {value}\n"));
    }
    out
}

/// Career guidance text. Only age, experience, and industry vary.
pub fn format_career_tips(profile: &Profile) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Based on your profile ({} years, {} years exp):\n\n",
        profile.age, profile.experience
    ));
    out.push_str("Immediate Focus:\n");
    out.push_str(&format!("  - Skill development in {}\n", profile.industry.to_lowercase()));
    out.push_str("  - Professional networking and certifications\n");
    out.push_str("  - Performance optimization in current role\n\n");
    out.push_str("Growth Strategy:\n");
    out.push_str("  - Consider opportunities in Tier 1 cities (+30-40% salary)\n");
    out.push_str("  - Explore high-demand skills like AI/ML, Cloud, Data Science\n");
    out.push_str("  - Build leadership and communication skills\n\n");
    out.push_str("Salary Enhancement:\n");
    out.push_str("  - Job switching every 2-3 years (typical 30-50% increase)\n");
    out.push_str("  - Specialization in niche, high-demand areas\n");
    out.push_str("  - Consider startups for equity opportunities\n");
    out
}

pub fn format_score_breakdown(prediction: &Prediction) -> String {
    let b = &prediction.breakdown;
    let rows = [
        ("age", b.age),
        ("education", b.education),
        ("occupation", b.occupation),
        ("experience", b.experience),
        ("industry", b.industry),
        ("city tier", b.city_tier),
    ];

    let mut out = String::from("Score breakdown:\n");
    for (label, points) in rows {
        out.push_str(&format!("  {label:<11} {points:>3}\n"));
    }
    out.push_str(&format!("  {:<11} {:>3}\n", "total", prediction.score));
    out
}

/// Per-row table for a batch run, followed by skipped rows.
pub fn format_batch_summary(out: &BatchOutput) -> String {
    let mut s = String::new();
    let higher = out
        .records
        .iter()
        .filter(|r| r.prediction.bracket == SalaryBracket::Higher)
        .count();

    s.push_str(&format!(
        "Rows: read={} classified={} skipped={} | >5 Lakhs: {} | ≤5 Lakhs: {}\n\n",
        out.rows_read,
        out.records.len(),
        out.row_errors.len(),
        higher,
        out.records.len() - higher,
    ));

    s.push_str(&format!(
        "{:>5}  {:>4}  {:<3}  {:<10}  {:>10}\n",
        "line", "age", "exp", "bracket", "confidence"
    ));
    for r in &out.records {
        s.push_str(&format!(
            "{:>5}  {:>4}  {:<3}  {:<10}  {:>10}\n",
            r.line,
            r.profile.age,
            r.profile.experience,
            r.prediction.bracket.label(),
            fmt_percent(r.prediction.confidence),
        ));
    }

    if !out.row_errors.is_empty() {
        s.push_str("\nSkipped rows:\n");
        for e in &out.row_errors {
            s.push_str(&format!("  line {}: {}\n", e.line, e.message));
        }
    }
    s
}

fn first_word(s: &str) -> &str {
    s.split_whitespace().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> Profile {
        Profile {
            age: 28,
            education: "Bachelor's Degree".to_string(),
            occupation: "Software Engineer/IT".to_string(),
            experience: 5,
            hours: 45,
            industry: "Information Technology".to_string(),
            city_tier: "Tier 1 (Mumbai, Delhi, Bangalore, etc.)".to_string(),
        }
    }

    #[test]
    fn higher_bracket_box() {
        let pred = sample_profile().predict();
        let text = format_prediction(&pred);
        assert!(text.contains("Higher Salary Range"));
        assert!(text.contains("₹5+ Lakhs annually"));
        assert!(text.contains("Confidence: 95.0%"));
        assert!(text.contains("Above average"));
    }

    #[test]
    fn standard_bracket_box() {
        let profile = Profile {
            age: 20,
            education: "10th Pass".to_string(),
            occupation: "Retail/Customer Service".to_string(),
            experience: 1,
            hours: 40,
            industry: "Other".to_string(),
            city_tier: "Rural/Remote areas".to_string(),
        };
        let text = format_prediction(&profile.predict());
        assert!(text.contains("Standard Salary Range"));
        assert!(text.contains("₹2-5 Lakhs annually"));
        assert!(text.contains("Confidence: 60.0%"));
    }

    #[test]
    fn summary_uses_first_words() {
        let items = profile_summary(&sample_profile());
        assert_eq!(items[0], ("Age", "28 years".to_string()));
        assert_eq!(items[3], ("Work Hours", "45/week".to_string()));
        assert_eq!(items[4], ("Industry", "Information".to_string()));
        assert_eq!(items[5], ("Location", "Tier".to_string()));

        let mut p = sample_profile();
        p.city_tier = "Rural/Remote areas".to_string();
        p.industry = String::new();
        let items = profile_summary(&p);
        assert_eq!(items[4].1, "");
        assert_eq!(items[5].1, "Rural/Remote");
    }

    #[test]
    fn tips_mention_lowercased_industry() {
        let tips = format_career_tips(&sample_profile());
        assert!(tips.starts_with("Based on your profile (28 years, 5 years exp)"));
        assert!(tips.contains("Skill development in information technology"));
    }

    #[test]
    fn breakdown_ends_with_total() {
        let text = format_score_breakdown(&sample_profile().predict());
        assert!(text.trim_end().ends_with("total       123"));
    }

    #[test]
    fn batch_summary_counts_and_lists_skips() {
        use crate::io::{PredictionRecord, RowError};

        let profile = sample_profile();
        let prediction = profile.predict();
        let out = BatchOutput {
            records: vec![PredictionRecord {
                line: 2,
                profile,
                prediction,
            }],
            row_errors: vec![RowError {
                line: 3,
                message: "Invalid `age` value 'x' (expected a whole number).".to_string(),
            }],
            rows_read: 2,
        };
        let text = format_batch_summary(&out);
        assert!(text.starts_with("Rows: read=2 classified=1 skipped=1 | >5 Lakhs: 1 | ≤5 Lakhs: 0"));
        assert!(text.contains("95.0%"));
        assert!(text.contains("line 3: Invalid `age`"));
    }

    #[test]
    fn percent_rounds_to_one_decimal() {
        assert_eq!(fmt_percent(0.7), "70.0%");
        assert_eq!(fmt_percent(0.95), "95.0%");
        assert_eq!(fmt_percent(0.8583), "85.8%");
    }
}
