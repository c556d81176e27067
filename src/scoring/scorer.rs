//! Point scoring, confidence, and bracket classification.
//!
//! Every attribute maps to a fixed number of points; the total decides the
//! bracket and is scaled into a clamped confidence. The scorer never rejects
//! input: unknown labels fall through to the table defaults and numeric
//! values outside the form's ranges are scored as-is.

use crate::domain::{CityTier, Prediction, Profile, SalaryBracket, ScoreBreakdown};

use super::tables::*;

/// Age bands. Ordering matters: 35 is caught by the first band.
pub fn age_points(age: i32) -> u32 {
    if (25..=35).contains(&age) {
        20
    } else if (36..=45).contains(&age) {
        25
    } else if age > 45 {
        15
    } else {
        10
    }
}

pub fn education_points(education: &str) -> u32 {
    EDUCATION_POINTS
        .iter()
        .find(|(label, _)| *label == education)
        .map(|&(_, points)| points)
        .unwrap_or(DEFAULT_EDUCATION_POINTS)
}

pub fn occupation_points(occupation: &str) -> u32 {
    if HIGH_PAYING_OCCUPATIONS.contains(&occupation) {
        HIGH_PAYING_OCCUPATION_POINTS
    } else {
        OTHER_OCCUPATION_POINTS
    }
}

pub fn experience_points(experience: i32) -> u32 {
    match experience {
        e if e >= 10 => 25,
        e if e >= 5 => 20,
        e if e >= 2 => 15,
        _ => 5,
    }
}

pub fn industry_points(industry: &str) -> u32 {
    if TOP_INDUSTRIES.contains(&industry) {
        TOP_INDUSTRY_POINTS
    } else {
        OTHER_INDUSTRY_POINTS
    }
}

/// City tier points, resolved by substring (see [`CityTier::resolve`]).
pub fn city_tier_points(city_tier: &str) -> u32 {
    match CityTier::resolve(city_tier) {
        CityTier::Tier1 => TIER1_POINTS,
        CityTier::Tier2 => TIER2_POINTS,
        CityTier::Tier3 | CityTier::Rural => OTHER_TIER_POINTS,
    }
}

/// Per-attribute points for a profile. `hours` is intentionally not scored.
pub fn score_breakdown(profile: &Profile) -> ScoreBreakdown {
    ScoreBreakdown {
        age: age_points(profile.age),
        education: education_points(&profile.education),
        occupation: occupation_points(&profile.occupation),
        experience: experience_points(profile.experience),
        industry: industry_points(&profile.industry),
        city_tier: city_tier_points(&profile.city_tier),
    }
}

/// `clamp(score / 120, 0.6, 0.95)`.
pub fn confidence_from_score(score: u32) -> f64 {
    (score as f64 / CONFIDENCE_DIVISOR).clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
}

/// Threshold is inclusive on the higher bracket.
pub fn bracket_for_score(score: u32) -> SalaryBracket {
    if score >= HIGHER_BRACKET_THRESHOLD {
        SalaryBracket::Higher
    } else {
        SalaryBracket::Standard
    }
}

/// Score a profile and return the full prediction.
pub fn predict(profile: &Profile) -> Prediction {
    let breakdown = score_breakdown(profile);
    let score = breakdown.total();
    let prediction = Prediction {
        bracket: bracket_for_score(score),
        confidence: confidence_from_score(score),
        score,
        breakdown,
    };
    tracing::debug!(
        score,
        bracket = %prediction.bracket,
        confidence = prediction.confidence,
        ?breakdown,
        "scored profile"
    );
    prediction
}

/// Classify the seven raw attributes into `(bracket, confidence)`.
///
/// `hours` is accepted for interface completeness and has no effect.
#[allow(clippy::too_many_arguments)]
pub fn classify(
    age: i32,
    education: &str,
    occupation: &str,
    experience: i32,
    hours: i32,
    industry: &str,
    city_tier: &str,
) -> (SalaryBracket, f64) {
    let profile = Profile {
        age,
        education: education.to_string(),
        occupation: occupation.to_string(),
        experience,
        hours,
        industry: industry.to_string(),
        city_tier: city_tier.to_string(),
    };
    let prediction = predict(&profile);
    (prediction.bracket, prediction.confidence)
}

impl Profile {
    pub fn predict(&self) -> Prediction {
        predict(self)
    }
}
