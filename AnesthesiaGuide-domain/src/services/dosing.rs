use anesthesia_guide_data::DoseRule;

use crate::entities::{Dose, PatientProfile};

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Resolve a tabulated dose rule for a patient
pub fn resolve_rule(rule: &DoseRule, profile: &PatientProfile) -> Dose {
    match *rule {
        DoseRule::WeightScaled { per_kg, places } => Dose::Fixed(round_to(profile.weight * per_kg, places)),
        DoseRule::Pediatric { per_kg, places, adult } => {
            if profile.is_pediatric() {
                Dose::Fixed(round_to(profile.weight * per_kg, places))
            } else {
                Dose::Fixed(adult)
            }
        }
        DoseRule::Range { min, max } => Dose::Range(min, max),
        DoseRule::Text(text) => Dose::Text(text.to_string()),
    }
}
