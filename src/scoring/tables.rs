//! Fixed scoring tables and thresholds.
//!
//! All of these are compile-time constants; nothing here is mutated at runtime.

/// Points per education level. Labels not listed here score
/// [`DEFAULT_EDUCATION_POINTS`].
pub const EDUCATION_POINTS: [(&str, u32); 7] = [
    ("PhD/Doctorate", 35),
    ("Master's Degree", 30),
    ("Bachelor's Degree", 25),
    ("Professional Certification", 22),
    ("Diploma", 15),
    ("12th Pass", 10),
    ("10th Pass", 5),
];

/// Unrecognized education labels. Note this is more than `10th Pass`.
pub const DEFAULT_EDUCATION_POINTS: u32 = 10;

pub const HIGH_PAYING_OCCUPATIONS: [&str; 4] = [
    "Software Engineer/IT",
    "Management/Executive",
    "Healthcare Professional",
    "Banking/Finance",
];
pub const HIGH_PAYING_OCCUPATION_POINTS: u32 = 25;
pub const OTHER_OCCUPATION_POINTS: u32 = 15;

pub const TOP_INDUSTRIES: [&str; 3] = [
    "Information Technology",
    "Banking & Financial Services",
    "Consulting",
];
pub const TOP_INDUSTRY_POINTS: u32 = 18;
pub const OTHER_INDUSTRY_POINTS: u32 = 10;

pub const TIER1_POINTS: u32 = 15;
pub const TIER2_POINTS: u32 = 10;
/// Tier 3 and rural/remote.
pub const OTHER_TIER_POINTS: u32 = 5;

/// Score at or above which a profile lands in the higher bracket.
pub const HIGHER_BRACKET_THRESHOLD: u32 = 70;

/// Fixed normalization constant. Not the maximum achievable score.
pub const CONFIDENCE_DIVISOR: f64 = 120.0;
pub const CONFIDENCE_FLOOR: f64 = 0.6;
pub const CONFIDENCE_CEILING: f64 = 0.95;
