//! Shared domain types.
//!
//! The form collects a handful of categorical attributes. Each one has a fixed
//! choice list (used by the TUI and the `options` listing), but the scorer
//! itself takes plain strings so that custom or unexpected values still score
//! through the documented defaults.

use serde::{Deserialize, Serialize};

/// A fixed, ordered choice list backing one form field.
pub trait Choice: Copy + PartialEq + Sized + 'static {
    /// Every choice, in form order.
    const ALL: &'static [Self];

    /// Label shown in the form and passed to the scorer.
    fn label(self) -> &'static str;

    /// Exact label lookup.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&c| c == self).unwrap_or(0)
    }

    /// Next choice, wrapping around.
    fn next(self) -> Self {
        let i = self.index();
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Previous choice, wrapping around.
    fn prev(self) -> Self {
        let i = self.index();
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Education {
    TenthPass,
    TwelfthPass,
    Diploma,
    #[default]
    Bachelors,
    Masters,
    Doctorate,
    ProfessionalCertification,
}

impl Choice for Education {
    const ALL: &'static [Self] = &[
        Education::TenthPass,
        Education::TwelfthPass,
        Education::Diploma,
        Education::Bachelors,
        Education::Masters,
        Education::Doctorate,
        Education::ProfessionalCertification,
    ];

    fn label(self) -> &'static str {
        match self {
            Education::TenthPass => "10th Pass",
            Education::TwelfthPass => "12th Pass",
            Education::Diploma => "Diploma",
            Education::Bachelors => "Bachelor's Degree",
            Education::Masters => "Master's Degree",
            Education::Doctorate => "PhD/Doctorate",
            Education::ProfessionalCertification => "Professional Certification",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occupation {
    #[default]
    SoftwareEngineer,
    Management,
    Sales,
    Teaching,
    Healthcare,
    BankingFinance,
    Manufacturing,
    Transportation,
    Retail,
    /// Unlisted job roles; the form asks for a free-text profession.
    OtherServices,
}

impl Choice for Occupation {
    const ALL: &'static [Self] = &[
        Occupation::SoftwareEngineer,
        Occupation::Management,
        Occupation::Sales,
        Occupation::Teaching,
        Occupation::Healthcare,
        Occupation::BankingFinance,
        Occupation::Manufacturing,
        Occupation::Transportation,
        Occupation::Retail,
        Occupation::OtherServices,
    ];

    fn label(self) -> &'static str {
        match self {
            Occupation::SoftwareEngineer => "Software Engineer/IT",
            Occupation::Management => "Management/Executive",
            Occupation::Sales => "Sales Professional",
            Occupation::Teaching => "Teaching/Education",
            Occupation::Healthcare => "Healthcare Professional",
            Occupation::BankingFinance => "Banking/Finance",
            Occupation::Manufacturing => "Manufacturing/Production",
            Occupation::Transportation => "Transportation/Logistics",
            Occupation::Retail => "Retail/Customer Service",
            Occupation::OtherServices => "Other Services",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Industry {
    #[default]
    InformationTechnology,
    BankingFinancialServices,
    Manufacturing,
    Healthcare,
    Education,
    Government,
    Retail,
    Consulting,
    Telecommunications,
    Other,
}

impl Choice for Industry {
    const ALL: &'static [Self] = &[
        Industry::InformationTechnology,
        Industry::BankingFinancialServices,
        Industry::Manufacturing,
        Industry::Healthcare,
        Industry::Education,
        Industry::Government,
        Industry::Retail,
        Industry::Consulting,
        Industry::Telecommunications,
        Industry::Other,
    ];

    fn label(self) -> &'static str {
        match self {
            Industry::InformationTechnology => "Information Technology",
            Industry::BankingFinancialServices => "Banking & Financial Services",
            Industry::Manufacturing => "Manufacturing",
            Industry::Healthcare => "Healthcare & Pharmaceuticals",
            Industry::Education => "Education",
            Industry::Government => "Government/Public Sector",
            Industry::Retail => "Retail & E-commerce",
            Industry::Consulting => "Consulting",
            Industry::Telecommunications => "Telecommunications",
            Industry::Other => "Other",
        }
    }
}

/// Informal city classification used as a scoring proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CityTier {
    #[default]
    Tier1,
    Tier2,
    Tier3,
    Rural,
}

impl CityTier {
    /// Resolve a free-form tier description by substring.
    ///
    /// First match wins: `"Tier 1"`, then `"Tier 2"`, then `"Tier 3"`.
    /// Anything else is treated as rural/remote.
    pub fn resolve(label: &str) -> Self {
        if label.contains("Tier 1") {
            CityTier::Tier1
        } else if label.contains("Tier 2") {
            CityTier::Tier2
        } else if label.contains("Tier 3") {
            CityTier::Tier3
        } else {
            CityTier::Rural
        }
    }
}

impl Choice for CityTier {
    const ALL: &'static [Self] = &[CityTier::Tier1, CityTier::Tier2, CityTier::Tier3, CityTier::Rural];

    fn label(self) -> &'static str {
        match self {
            CityTier::Tier1 => "Tier 1 (Mumbai, Delhi, Bangalore, etc.)",
            CityTier::Tier2 => "Tier 2 (Pune, Hyderabad, Chennai, etc.)",
            CityTier::Tier3 => "Tier 3 (Smaller cities)",
            CityTier::Rural => "Rural/Remote areas",
        }
    }
}

/// Form-only field; never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Female,
    Male,
}

impl Choice for Gender {
    const ALL: &'static [Self] = &[Gender::Female, Gender::Male];

    fn label(self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }
}

/// Form-only field; never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Relationship {
    #[default]
    Single,
    Married,
    LiveIn,
    Undisclosed,
}

impl Choice for Relationship {
    const ALL: &'static [Self] = &[
        Relationship::Single,
        Relationship::Married,
        Relationship::LiveIn,
        Relationship::Undisclosed,
    ];

    fn label(self) -> &'static str {
        match self {
            Relationship::Single => "Single",
            Relationship::Married => "Married",
            Relationship::LiveIn => "Live-in Partner",
            Relationship::Undisclosed => "Prefer not to say",
        }
    }
}

/// Form-only field; never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Country {
    #[default]
    India,
    UnitedStates,
    UnitedKingdom,
    Canada,
    Australia,
    Germany,
    France,
    Japan,
    Singapore,
    Uae,
    Bangladesh,
    Pakistan,
    SriLanka,
    Nepal,
    Other,
}

impl Choice for Country {
    const ALL: &'static [Self] = &[
        Country::India,
        Country::UnitedStates,
        Country::UnitedKingdom,
        Country::Canada,
        Country::Australia,
        Country::Germany,
        Country::France,
        Country::Japan,
        Country::Singapore,
        Country::Uae,
        Country::Bangladesh,
        Country::Pakistan,
        Country::SriLanka,
        Country::Nepal,
        Country::Other,
    ];

    fn label(self) -> &'static str {
        match self {
            Country::India => "India",
            Country::UnitedStates => "United States",
            Country::UnitedKingdom => "United Kingdom",
            Country::Canada => "Canada",
            Country::Australia => "Australia",
            Country::Germany => "Germany",
            Country::France => "France",
            Country::Japan => "Japan",
            Country::Singapore => "Singapore",
            Country::Uae => "UAE",
            Country::Bangladesh => "Bangladesh",
            Country::Pakistan => "Pakistan",
            Country::SriLanka => "Sri Lanka",
            Country::Nepal => "Nepal",
            Country::Other => "Other",
        }
    }
}

/// Inclusive bounds the form enforces on numeric inputs.
///
/// The scorer does not check these; they belong to whoever collects input.
pub const AGE_RANGE: (i32, i32) = (18, 65);
pub const EXPERIENCE_RANGE: (i32, i32) = (0, 40);
pub const HOURS_RANGE: (i32, i32) = (20, 80);

pub const DEFAULT_AGE: i32 = 28;
pub const DEFAULT_EXPERIENCE: i32 = 5;
pub const DEFAULT_HOURS: i32 = 45;

/// The seven attributes handed to the scorer.
///
/// Categorical fields are strings on purpose: a label outside the choice
/// lists is still valid input and scores through the table defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub age: i32,
    pub education: String,
    pub occupation: String,
    pub experience: i32,
    /// Weekly hours. Collected and echoed, but worth no points.
    pub hours: i32,
    pub industry: String,
    pub city_tier: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            education: Education::default().label().to_string(),
            occupation: Occupation::default().label().to_string(),
            experience: DEFAULT_EXPERIENCE,
            hours: DEFAULT_HOURS,
            industry: Industry::default().label().to_string(),
            city_tier: CityTier::default().label().to_string(),
        }
    }
}

/// Salary bracket in Lakhs per annum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SalaryBracket {
    #[serde(rename = "≤5 Lakhs")]
    Standard,
    #[serde(rename = ">5 Lakhs")]
    Higher,
}

impl SalaryBracket {
    pub fn label(self) -> &'static str {
        match self {
            SalaryBracket::Standard => "≤5 Lakhs",
            SalaryBracket::Higher => ">5 Lakhs",
        }
    }

    /// Annual range shown in the result box.
    pub fn range_label(self) -> &'static str {
        match self {
            SalaryBracket::Standard => "₹2-5 Lakhs annually",
            SalaryBracket::Higher => "₹5+ Lakhs annually",
        }
    }
}

impl std::fmt::Display for SalaryBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Points contributed by each scored attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub age: u32,
    pub education: u32,
    pub occupation: u32,
    pub experience: u32,
    pub industry: u32,
    pub city_tier: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.age + self.education + self.occupation + self.experience + self.industry + self.city_tier
    }
}

/// Scorer output for one profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub bracket: SalaryBracket,
    /// Heuristic confidence in `[0.6, 0.95]`; not a calibrated probability.
    pub confidence: f64,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}
