//! Form state for the interactive estimator.
//!
//! Pure state + key-driven edits, no rendering, so it can be tested without a
//! terminal.

use crate::domain::{
    AGE_RANGE, CityTier, Choice, Country, EXPERIENCE_RANGE, Education, Gender, HOURS_RANGE, Industry, Occupation,
    Profile, Relationship,
};

/// Longest accepted custom profession.
const CUSTOM_PROFESSION_MAX: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Age,
    Gender,
    Relationship,
    Country,
    Education,
    Occupation,
    CustomProfession,
    Experience,
    Hours,
    Industry,
    CityTier,
    Predict,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::Relationship => "Relationship Status",
            Field::Country => "Native Country",
            Field::Education => "Education Level",
            Field::Occupation => "Primary Occupation",
            Field::CustomProfession => "Specify profession",
            Field::Experience => "Years of Experience",
            Field::Hours => "Hours per week",
            Field::Industry => "Industry Sector",
            Field::CityTier => "City Tier",
            Field::Predict => "[ Predict My Salary ]",
        }
    }

    /// Section heading the field is grouped under.
    pub fn section(self) -> &'static str {
        match self {
            Field::Age | Field::Gender | Field::Relationship | Field::Country => "Personal Information",
            Field::Education | Field::Occupation | Field::CustomProfession => "Professional Details",
            Field::Experience | Field::Hours | Field::Industry | Field::CityTier => "Experience & Compensation",
            Field::Predict => "Salary Prediction",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub age: i32,
    pub gender: Gender,
    pub relationship: Relationship,
    pub country: Country,
    pub education: Education,
    pub occupation: Occupation,
    /// Only collected when occupation is "Other Services". Not scored.
    pub custom_profession: String,
    pub experience: i32,
    pub hours: i32,
    pub industry: Industry,
    pub city_tier: CityTier,
    /// Seeded labels that are not an exact choice. They are scored as typed
    /// until the user cycles the field.
    pub education_label: Option<String>,
    pub occupation_label: Option<String>,
    pub industry_label: Option<String>,
    pub city_tier_label: Option<String>,
}

impl Form {
    /// Seed the form from a profile. Numbers are clamped to the slider ranges;
    /// unlisted labels are kept verbatim so the form scores what was typed.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            age: profile.age.clamp(AGE_RANGE.0, AGE_RANGE.1),
            gender: Gender::default(),
            relationship: Relationship::default(),
            country: Country::default(),
            education: Education::from_label(&profile.education).unwrap_or_default(),
            occupation: Occupation::from_label(&profile.occupation).unwrap_or_default(),
            custom_profession: String::new(),
            experience: profile.experience.clamp(EXPERIENCE_RANGE.0, EXPERIENCE_RANGE.1),
            hours: profile.hours.clamp(HOURS_RANGE.0, HOURS_RANGE.1),
            industry: Industry::from_label(&profile.industry).unwrap_or_default(),
            city_tier: CityTier::from_label(&profile.city_tier)
                .unwrap_or_else(|| CityTier::resolve(&profile.city_tier)),
            education_label: unlisted::<Education>(&profile.education),
            occupation_label: unlisted::<Occupation>(&profile.occupation),
            industry_label: unlisted::<Industry>(&profile.industry),
            city_tier_label: unlisted::<CityTier>(&profile.city_tier),
        }
    }

    /// Choice fields currently holding an unlisted seeded label.
    pub fn unlisted_fields(&self) -> Vec<Field> {
        [
            (Field::Education, &self.education_label),
            (Field::Occupation, &self.occupation_label),
            (Field::Industry, &self.industry_label),
            (Field::CityTier, &self.city_tier_label),
        ]
        .into_iter()
        .filter(|(_, label)| label.is_some())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn to_profile(&self) -> Profile {
        Profile {
            age: self.age,
            education: label_or(&self.education_label, self.education),
            occupation: label_or(&self.occupation_label, self.occupation),
            experience: self.experience,
            hours: self.hours,
            industry: label_or(&self.industry_label, self.industry),
            city_tier: label_or(&self.city_tier_label, self.city_tier),
        }
    }

    /// Fields currently shown, in navigation order.
    pub fn visible_fields(&self) -> Vec<Field> {
        let mut fields = vec![
            Field::Age,
            Field::Gender,
            Field::Relationship,
            Field::Country,
            Field::Education,
            Field::Occupation,
        ];
        if self.occupation == Occupation::OtherServices {
            fields.push(Field::CustomProfession);
        }
        fields.extend([
            Field::Experience,
            Field::Hours,
            Field::Industry,
            Field::CityTier,
            Field::Predict,
        ]);
        fields
    }

    /// Step a slider or choice field. Returns whether anything changed.
    ///
    /// The first step on a field holding an unlisted label drops the label and
    /// shows the choice it was snapped to; later steps cycle as usual.
    pub fn adjust(&mut self, field: Field, delta: i32) -> bool {
        let before = self.clone();
        let forward = delta >= 0;
        match field {
            Field::Age => self.age = step(self.age, delta, AGE_RANGE),
            Field::Experience => self.experience = step(self.experience, delta, EXPERIENCE_RANGE),
            Field::Hours => self.hours = step(self.hours, delta, HOURS_RANGE),
            Field::Gender => self.gender = cycle(self.gender, forward),
            Field::Relationship => self.relationship = cycle(self.relationship, forward),
            Field::Country => self.country = cycle(self.country, forward),
            Field::Education => self.education = cycle_or_take(self.education, &mut self.education_label, forward),
            Field::Occupation => {
                self.occupation = cycle_or_take(self.occupation, &mut self.occupation_label, forward)
            }
            Field::Industry => self.industry = cycle_or_take(self.industry, &mut self.industry_label, forward),
            Field::CityTier => self.city_tier = cycle_or_take(self.city_tier, &mut self.city_tier_label, forward),
            Field::CustomProfession | Field::Predict => {}
        }
        *self != before
    }

    pub fn push_custom_char(&mut self, c: char) {
        if !c.is_control() && self.custom_profession.chars().count() < CUSTOM_PROFESSION_MAX {
            self.custom_profession.push(c);
        }
    }

    pub fn pop_custom_char(&mut self) {
        self.custom_profession.pop();
    }

    /// Display value for a field row.
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Age => format!("{}", self.age),
            Field::Gender => self.gender.label().to_string(),
            Field::Relationship => self.relationship.label().to_string(),
            Field::Country => self.country.label().to_string(),
            Field::Education => label_or(&self.education_label, self.education),
            Field::Occupation => label_or(&self.occupation_label, self.occupation),
            Field::CustomProfession => {
                if self.custom_profession.is_empty() {
                    "(e.g., Digital Marketing, Content Writing)".to_string()
                } else {
                    self.custom_profession.clone()
                }
            }
            Field::Experience => format!("{}", self.experience),
            Field::Hours => format!("{}", self.hours),
            Field::Industry => label_or(&self.industry_label, self.industry),
            Field::CityTier => label_or(&self.city_tier_label, self.city_tier),
            Field::Predict => String::new(),
        }
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::from_profile(&Profile::default())
    }
}

fn step(value: i32, delta: i32, (lo, hi): (i32, i32)) -> i32 {
    value.saturating_add(delta).clamp(lo, hi)
}

fn cycle<C: Choice>(c: C, forward: bool) -> C {
    if forward { c.next() } else { c.prev() }
}

fn cycle_or_take<C: Choice>(c: C, label: &mut Option<String>, forward: bool) -> C {
    if label.take().is_some() { c } else { cycle(c, forward) }
}

fn unlisted<C: Choice>(label: &str) -> Option<String> {
    C::from_label(label).is_none().then(|| label.to_string())
}

fn label_or<C: Choice>(label: &Option<String>, c: C) -> String {
    label.clone().unwrap_or_else(|| c.label().to_string())
}
