//! Reporting utilities: the `options` listing plus formatted output.

pub mod format;

pub use format::*;

use crate::domain::{CityTier, Choice, Education, Industry, Occupation};
use crate::scoring::{city_tier_points, education_points, industry_points, occupation_points};
use crate::scoring::tables::DEFAULT_EDUCATION_POINTS;

/// List every known choice with the points it contributes.
pub fn format_options() -> String {
    let mut out = String::new();

    out.push_str("Education:\n");
    push_choices(&mut out, Education::ALL, education_points);
    out.push_str(&format!("  {:<42} {:>3}\n", "(anything else)", DEFAULT_EDUCATION_POINTS));

    out.push_str("\nOccupation:\n");
    push_choices(&mut out, Occupation::ALL, occupation_points);

    out.push_str("\nIndustry:\n");
    push_choices(&mut out, Industry::ALL, industry_points);

    out.push_str("\nCity tier (matched on \"Tier 1\", then \"Tier 2\"):\n");
    push_choices(&mut out, CityTier::ALL, city_tier_points);

    out.push_str("\nAge: 25-35 → 20, 36-45 → 25, over 45 → 15, otherwise 10\n");
    out.push_str("Experience: 10+ → 25, 5+ → 20, 2+ → 15, otherwise 5\n");
    out.push_str("Hours: not scored\n");
    out
}

fn push_choices<C: Choice>(out: &mut String, choices: &[C], points: fn(&str) -> u32) {
    for &choice in choices {
        out.push_str(&format!("  {:<42} {:>3}\n", choice.label(), points(choice.label())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_list_every_education_level() {
        let text = format_options();
        for &edu in Education::ALL {
            assert!(text.contains(edu.label()));
        }
        assert!(text.contains("(anything else)"));
        assert!(text.contains("Hours: not scored"));
    }
}
