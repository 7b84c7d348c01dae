// Patient fixtures shared by unit and integration tests
// This module is only available in tests or when the "fixtures" feature is enabled

use crate::entities::{PatientProfile, Sex};

/// 30 year old, 70 kg, normal laboratory values
pub fn adult_patient() -> PatientProfile {
    PatientProfile::new(30.0, Sex::Male, 70.0)
        .with_hematocrit(40.0)
        .with_hemoglobin(13.0)
}

/// 70 year old, 80 kg
pub fn elderly_patient() -> PatientProfile {
    PatientProfile::new(70.0, Sex::Female, 80.0).with_hematocrit(36.0)
}

/// 6 year old, 20 kg
pub fn child_patient() -> PatientProfile {
    PatientProfile::new(6.0, Sex::Male, 20.0).with_hemoglobin(11.5)
}

/// Six month old, 7 kg
pub fn infant_patient() -> PatientProfile {
    PatientProfile::new(0.5, Sex::Female, 7.0).with_hematocrit(33.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_age_bands() {
        assert!(!adult_patient().is_pediatric());
        assert!(!elderly_patient().is_pediatric());
        assert!(child_patient().is_pediatric());
        assert!(infant_patient().is_pediatric());
    }
}
