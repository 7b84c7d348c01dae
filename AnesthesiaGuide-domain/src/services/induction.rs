use tracing::{debug, warn};

use crate::entities::{Dose, DoseEntry, DoseTable, PatientProfile, Technique};
use crate::errors::CalculationError;
use crate::services::dosing::round_to;

/// Propofol induction range in mg. Bounds are unrounded products of the weight.
pub fn propofol_induction_range(age: f64, weight: f64) -> Dose {
    if age >= 65.0 {
        Dose::Range(weight, 1.75 * weight)
    } else if age <= 2.0 {
        Dose::Range(2.5 * weight, 3.5 * weight)
    } else {
        Dose::Range(weight, 2.5 * weight)
    }
}

/// Thiopental induction range in mg. Bounds are unrounded products of the weight.
pub fn thiopental_induction_range(age: f64, weight: f64) -> Dose {
    if age >= 65.0 {
        Dose::Range(2.0 * weight, 3.0 * weight)
    } else if age <= 12.0 {
        Dose::Range(5.0 * weight, 6.0 * weight)
    } else {
        Dose::Range(3.0 * weight, 5.0 * weight)
    }
}

pub fn calculate_induction_doses(profile: &PatientProfile, technique: Technique) -> DoseTable {
    let weight = profile.weight;
    let pediatric = profile.is_pediatric();

    let mut doses = DoseTable::new();
    match technique {
        Technique::Tiva => {
            doses.insert(
                "propofol".to_string(),
                DoseEntry::new("Propofol", propofol_induction_range(profile.age, weight), "mg", "IV"),
            );
            doses.insert(
                "thiopental".to_string(),
                DoseEntry::new("Thiopental", thiopental_induction_range(profile.age, weight), "mg", "IV"),
            );
            doses.insert(
                "fentanyl".to_string(),
                DoseEntry::new("Fentanyl", Dose::Fixed(round_to(weight * 2.0, 1)), "mcg", "IV"),
            );
            doses.insert(
                "rocuronium".to_string(),
                DoseEntry::new("Rocuronium", Dose::Fixed(round_to(weight * 0.6, 1)), "mg", "IV"),
            );
        }
        Technique::General => {
            let per_kg = if pediatric { 6.0 } else { 5.0 };
            doses.insert(
                "thiopental".to_string(),
                DoseEntry::new("Thiopental", Dose::Fixed(round_to(weight * per_kg, 1)), "mg", "IV"),
            );
            let per_kg = if pediatric { 2.0 } else { 1.5 };
            doses.insert(
                "succinylcholine".to_string(),
                DoseEntry::new("Succinylcholine", Dose::Fixed(round_to(weight * per_kg, 1)), "mg", "IV"),
            );
        }
        Technique::Spinal => {
            let dose = if pediatric { round_to(weight * 0.3, 1) } else { 15.0 };
            doses.insert(
                "bupivacaine".to_string(),
                DoseEntry::new("Bupivacaine 0.5%", Dose::Fixed(dose), "mg", "Intrathecal"),
            );
        }
    }

    debug!(technique = %technique, count = doses.len(), "Calculated induction doses");
    doses
}

/// Induction doses for a technique key coming from the UI
pub fn calculate_induction_doses_for_key(profile: &PatientProfile, key: &str) -> Result<DoseTable, CalculationError> {
    let technique = key.parse::<Technique>().inspect_err(|_| warn!(key, "Unknown induction technique"))?;
    Ok(calculate_induction_doses(profile, technique))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Sex;
    use test_case::test_case;

    #[test_case(70.0, 80.0, 80.0, 140.0 ; "elderly")]
    #[test_case(2.0, 12.0, 30.0, 42.0 ; "two years is the infant band")]
    #[test_case(30.0, 70.0, 70.0, 175.0 ; "adult")]
    fn test_propofol_range(age: f64, weight: f64, min: f64, max: f64) {
        assert_eq!(propofol_induction_range(age, weight), Dose::Range(min, max));
    }

    #[test_case(65.0, 60.0, 120.0, 180.0 ; "sixty five is elderly")]
    #[test_case(12.0, 40.0, 200.0, 240.0 ; "twelve is still pediatric")]
    #[test_case(40.0, 70.0, 210.0, 350.0 ; "adult")]
    fn test_thiopental_range(age: f64, weight: f64, min: f64, max: f64) {
        assert_eq!(thiopental_induction_range(age, weight), Dose::Range(min, max));
    }

    #[test]
    fn test_ranges_are_not_rounded() {
        let dose = propofol_induction_range(30.0, 7.3);
        assert_eq!(dose, Dose::Range(7.3, 2.5 * 7.3));
    }

    #[test]
    fn test_elderly_propofol_renders_as_range() {
        let doses = calculate_induction_doses(&PatientProfile::new(70.0, Sex::Male, 80.0), Technique::Tiva);
        assert_eq!(doses["propofol"].dose.to_string(), "80-140");
    }

    #[test]
    fn test_tiva_entries() {
        let doses = calculate_induction_doses(&PatientProfile::new(30.0, Sex::Female, 65.0), Technique::Tiva);
        let keys: Vec<&str> = doses.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["propofol", "thiopental", "fentanyl", "rocuronium"]);
        assert_eq!(doses["fentanyl"].dose, Dose::Fixed(130.0));
        assert_eq!(doses["fentanyl"].unit, "mcg");
        assert_eq!(doses["rocuronium"].dose, Dose::Fixed(39.0));
    }

    #[test_case(8.0, 25.0, 150.0, 50.0 ; "child")]
    #[test_case(30.0, 70.0, 350.0, 105.0 ; "adult")]
    fn test_general_entries(age: f64, weight: f64, thiopental: f64, succinylcholine: f64) {
        let doses = calculate_induction_doses(&PatientProfile::new(age, Sex::Male, weight), Technique::General);
        assert_eq!(doses.len(), 2);
        assert_eq!(doses["thiopental"].dose, Dose::Fixed(thiopental));
        assert_eq!(doses["succinylcholine"].dose, Dose::Fixed(succinylcholine));
    }

    #[test_case(6.0, 21.0, 6.3 ; "child")]
    #[test_case(50.0, 90.0, 15.0 ; "adult fixed dose")]
    fn test_spinal_bupivacaine(age: f64, weight: f64, expected: f64) {
        let doses = calculate_induction_doses(&PatientProfile::new(age, Sex::Female, weight), Technique::Spinal);
        let entry = &doses["bupivacaine"];
        assert_eq!(entry.name, "Bupivacaine 0.5%");
        assert_eq!(entry.route, "Intrathecal");
        assert_eq!(entry.dose, Dose::Fixed(expected));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let profile = PatientProfile::new(30.0, Sex::Male, 70.0);
        assert_eq!(
            calculate_induction_doses_for_key(&profile, "regional"),
            Err(CalculationError::UnknownTechnique("regional".to_string()))
        );
        assert_eq!(calculate_induction_doses_for_key(&profile, "spinal").unwrap().len(), 1);
    }
}
