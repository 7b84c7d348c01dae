/// Age in years below which pediatric dosing applies
pub const PEDIATRIC_AGE_LIMIT: f64 = 12.0;

/// Whether a patient of the given age is dosed as a child
pub fn is_pediatric(age: f64) -> bool {
    age < PEDIATRIC_AGE_LIMIT
}

/// How a tabulated medication dose is derived from the patient
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DoseRule {
    /// Weight × `per_kg`, rounded to `places` decimals
    WeightScaled { per_kg: f64, places: u32 },

    /// Weight-scaled for children, a fixed `adult` dose otherwise
    Pediatric { per_kg: f64, places: u32, adult: f64 },

    /// Fixed range regardless of the patient
    Range { min: f64, max: f64 },

    /// Free-text instruction
    Text(&'static str),
}
