use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use anesthesia_guide_data::is_pediatric;

use crate::errors::{describe_validation_errors, CalculationError};

/// Patient sex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// Validated patient record that every calculator reads from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    /// Age in years
    pub age: f64,

    pub sex: Sex,

    /// Weight in kilograms
    pub weight: f64,

    /// Hematocrit in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hematocrit: Option<f64>,

    /// Hemoglobin in g/dL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hemoglobin: Option<f64>,
}

impl PatientProfile {
    /// Create a profile without laboratory values
    pub fn new(age: f64, sex: Sex, weight: f64) -> Self {
        Self {
            age,
            sex,
            weight,
            hematocrit: None,
            hemoglobin: None,
        }
    }

    pub fn with_hematocrit(mut self, hematocrit: f64) -> Self {
        self.hematocrit = Some(hematocrit);
        self
    }

    pub fn with_hemoglobin(mut self, hemoglobin: f64) -> Self {
        self.hemoglobin = Some(hemoglobin);
        self
    }

    /// Whether pediatric (age < 12) dosing applies
    pub fn is_pediatric(&self) -> bool {
        is_pediatric(self.age)
    }
}

/// Raw patient form input, validated before any calculation runs
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_lab_values"))]
pub struct PatientIntake {
    /// Age in years
    #[validate(required(message = "Age is required and must be positive"), custom = "validate_age")]
    pub age: Option<f64>,

    #[validate(required(message = "Sex is required"))]
    pub sex: Option<Sex>,

    /// Weight in kilograms
    #[validate(required(message = "Weight is required and must be positive"), custom = "validate_weight")]
    pub weight: Option<f64>,

    /// Hematocrit in percent
    #[validate(custom = "validate_hematocrit")]
    pub hematocrit: Option<f64>,

    /// Hemoglobin in g/dL
    #[validate(custom = "validate_hemoglobin")]
    pub hemoglobin: Option<f64>,
}

impl PatientIntake {
    /// Validate the form and turn it into a calculation-ready profile
    pub fn into_profile(self) -> Result<PatientProfile, CalculationError> {
        if let Err(validation_errors) = self.validate() {
            return Err(CalculationError::Validation(describe_validation_errors(&validation_errors)));
        }

        match (self.age, self.sex, self.weight) {
            (Some(age), Some(sex), Some(weight)) => Ok(PatientProfile {
                age,
                sex,
                weight,
                hematocrit: self.hematocrit,
                hemoglobin: self.hemoglobin,
            }),
            _ => Err(CalculationError::Validation("Incomplete patient record".to_string())),
        }
    }
}

impl From<PatientProfile> for PatientIntake {
    fn from(profile: PatientProfile) -> Self {
        Self {
            age: Some(profile.age),
            sex: Some(profile.sex),
            weight: Some(profile.weight),
            hematocrit: profile.hematocrit,
            hemoglobin: profile.hemoglobin,
        }
    }
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

// NaN fails every comparison, so `!(x > 0.0)` also rejects it
fn validate_age(age: f64) -> Result<(), ValidationError> {
    if !(age > 0.0) || age.is_infinite() {
        return Err(field_error("age", "Age is required and must be positive"));
    }
    Ok(())
}

fn validate_weight(weight: f64) -> Result<(), ValidationError> {
    if !(weight > 0.0) || weight.is_infinite() {
        return Err(field_error("weight", "Weight is required and must be positive"));
    }
    Ok(())
}

fn validate_hematocrit(hematocrit: f64) -> Result<(), ValidationError> {
    if !(hematocrit > 0.0 && hematocrit <= 100.0) {
        return Err(field_error("hematocrit", "Hematocrit must be between 1-100%"));
    }
    Ok(())
}

fn validate_hemoglobin(hemoglobin: f64) -> Result<(), ValidationError> {
    if !(hemoglobin > 0.0 && hemoglobin <= 25.0) {
        return Err(field_error("hemoglobin", "Hemoglobin must be between 1-25 g/dL"));
    }
    Ok(())
}

fn validate_lab_values(intake: &PatientIntake) -> Result<(), ValidationError> {
    if intake.hematocrit.is_none() && intake.hemoglobin.is_none() {
        return Err(field_error("lab_values", "Hematocrit or hemoglobin is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_intake() -> PatientIntake {
        PatientIntake {
            age: Some(30.0),
            sex: Some(Sex::Male),
            weight: Some(70.0),
            hematocrit: Some(40.0),
            hemoglobin: None,
        }
    }

    #[test]
    fn test_valid_intake_becomes_profile() {
        let profile = base_intake().into_profile().unwrap();
        assert_eq!(profile.age, 30.0);
        assert_eq!(profile.sex, Sex::Male);
        assert_eq!(profile.weight, 70.0);
        assert_eq!(profile.hematocrit, Some(40.0));
        assert_eq!(profile.hemoglobin, None);
    }

    #[test]
    fn test_missing_age_is_rejected() {
        let intake = PatientIntake { age: None, ..base_intake() };
        let err = intake.into_profile().unwrap_err();
        assert!(err.to_string().contains("Age is required"));
    }

    #[test]
    fn test_non_positive_weight_is_rejected() {
        let intake = PatientIntake { weight: Some(0.0), ..base_intake() };
        let err = intake.into_profile().unwrap_err();
        assert!(err.to_string().contains("Weight is required"));

        let intake = PatientIntake { weight: Some(f64::NAN), ..base_intake() };
        assert!(intake.into_profile().is_err());
    }

    #[test]
    fn test_field_validators_take_values() {
        assert!(validate_age(0.5).is_ok());
        assert!(validate_age(f64::INFINITY).is_err());
        assert!(validate_weight(-3.0).is_err());
        assert!(validate_hematocrit(100.0).is_ok());
        assert!(validate_hematocrit(f64::NAN).is_err());
        assert!(validate_hemoglobin(25.0).is_ok());
        assert!(validate_hemoglobin(0.0).is_err());
    }

    #[test]
    fn test_missing_sex_is_rejected() {
        let intake = PatientIntake { sex: None, ..base_intake() };
        let err = intake.into_profile().unwrap_err();
        assert!(err.to_string().contains("Sex is required"));
    }

    #[test]
    fn test_hematocrit_out_of_range() {
        let intake = PatientIntake { hematocrit: Some(120.0), ..base_intake() };
        let err = intake.into_profile().unwrap_err();
        assert!(err.to_string().contains("Hematocrit must be between 1-100%"));
    }

    #[test]
    fn test_hemoglobin_out_of_range() {
        let intake = PatientIntake {
            hematocrit: None,
            hemoglobin: Some(30.0),
            ..base_intake()
        };
        let err = intake.into_profile().unwrap_err();
        assert!(err.to_string().contains("Hemoglobin must be between 1-25 g/dL"));
    }

    #[test]
    fn test_one_lab_value_is_required() {
        let intake = PatientIntake {
            hematocrit: None,
            hemoglobin: None,
            ..base_intake()
        };
        let err = intake.into_profile().unwrap_err();
        assert!(err.to_string().contains("Hematocrit or hemoglobin is required"));
    }

    #[test]
    fn test_hemoglobin_alone_is_enough() {
        let intake = PatientIntake {
            hematocrit: None,
            hemoglobin: Some(12.0),
            ..base_intake()
        };
        assert!(intake.into_profile().is_ok());
    }

    #[test]
    fn test_profile_round_trips_into_intake() {
        let profile = PatientProfile::new(6.0, Sex::Female, 20.0).with_hemoglobin(11.0);
        let intake = PatientIntake::from(profile.clone());
        assert_eq!(intake.into_profile().unwrap(), profile);
    }

    #[test]
    fn test_pediatric_boundary() {
        assert!(PatientProfile::new(11.5, Sex::Male, 35.0).is_pediatric());
        assert!(!PatientProfile::new(12.0, Sex::Male, 40.0).is_pediatric());
    }

    #[test]
    fn test_profile_deserializes_without_labs() {
        let profile: PatientProfile =
            serde_json::from_str(r#"{"age": 45, "sex": "female", "weight": 62.5}"#).unwrap();
        assert_eq!(profile.sex, Sex::Female);
        assert_eq!(profile.hematocrit, None);
    }
}
