use tracing::{debug, info};

use crate::entities::{PatientProfile, TransfusionAnalysis, TransfusionReason};
use crate::services::dosing::round_to;
use crate::settings::CalculatorSettings;

const MAJOR_LOSS_PERCENT: f64 = 20.0;
const SIGNIFICANT_LOSS_PERCENT: f64 = 15.0;
const CRITICAL_HEMATOCRIT: f64 = 25.0;
const CRITICAL_HEMOGLOBIN: f64 = 8.0;
const LOW_HEMATOCRIT: f64 = 30.0;
const LOW_HEMOGLOBIN: f64 = 10.0;

/// Decide whether an intra-operative blood loss calls for transfusion
pub fn analyze_transfusion(profile: &PatientProfile, blood_loss_ml: f64) -> TransfusionAnalysis {
    analyze_transfusion_with(profile, blood_loss_ml, &CalculatorSettings::default())
}

pub fn analyze_transfusion_with(
    profile: &PatientProfile,
    blood_loss_ml: f64,
    settings: &CalculatorSettings,
) -> TransfusionAnalysis {
    let ebv = profile.weight * settings.blood_volume_ml_per_kg;
    let percentage = blood_loss_ml / ebv * 100.0;

    let reason = transfusion_reason(percentage, profile.hematocrit, profile.hemoglobin);

    let analysis = TransfusionAnalysis {
        transfusion_needed: reason.is_some(),
        reason,
        blood_loss_percentage: round_to(percentage, 1),
        estimated_blood_volume: ebv.round(),
    };

    match analysis.reason {
        Some(reason) => info!(
            blood_loss_ml,
            percentage = analysis.blood_loss_percentage,
            reason = %reason,
            "Transfusion indicated"
        ),
        None => debug!(blood_loss_ml, percentage = analysis.blood_loss_percentage, "No transfusion needed"),
    }

    analysis
}

// First matching rule wins; decided on the unrounded percentage
fn transfusion_reason(percentage: f64, hematocrit: Option<f64>, hemoglobin: Option<f64>) -> Option<TransfusionReason> {
    let below = |value: Option<f64>, limit: f64| value.is_some_and(|v| v < limit);

    if percentage > MAJOR_LOSS_PERCENT {
        Some(TransfusionReason::BloodLossOverTwentyPercent)
    } else if below(hematocrit, CRITICAL_HEMATOCRIT) {
        Some(TransfusionReason::LowHematocrit)
    } else if below(hemoglobin, CRITICAL_HEMOGLOBIN) {
        Some(TransfusionReason::LowHemoglobin)
    } else if percentage > SIGNIFICANT_LOSS_PERCENT
        && (below(hematocrit, LOW_HEMATOCRIT) || below(hemoglobin, LOW_HEMOGLOBIN))
    {
        Some(TransfusionReason::SignificantLossWithLowCounts)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Sex;
    use test_case::test_case;

    fn patient() -> PatientProfile {
        PatientProfile::new(30.0, Sex::Male, 70.0)
    }

    #[test]
    fn test_major_loss() {
        let analysis = analyze_transfusion(&patient(), 1225.0);
        assert!(analysis.transfusion_needed);
        assert_eq!(analysis.reason, Some(TransfusionReason::BloodLossOverTwentyPercent));
        assert_eq!(analysis.blood_loss_percentage, 25.0);
        assert_eq!(analysis.estimated_blood_volume, 4900.0);
    }

    #[test]
    fn test_low_hematocrit_with_small_loss() {
        let analysis = analyze_transfusion(&patient().with_hematocrit(20.0), 490.0);
        assert_eq!(analysis.reason, Some(TransfusionReason::LowHematocrit));
        assert_eq!(analysis.blood_loss_percentage, 10.0);
    }

    #[test]
    fn test_loss_takes_priority_over_counts() {
        let profile = patient().with_hematocrit(20.0).with_hemoglobin(6.0);
        let analysis = analyze_transfusion(&profile, 1500.0);
        assert_eq!(analysis.reason, Some(TransfusionReason::BloodLossOverTwentyPercent));
    }

    #[test]
    fn test_hematocrit_before_hemoglobin() {
        let profile = patient().with_hematocrit(22.0).with_hemoglobin(7.0);
        assert_eq!(analyze_transfusion(&profile, 0.0).reason, Some(TransfusionReason::LowHematocrit));

        let profile = patient().with_hematocrit(35.0).with_hemoglobin(7.0);
        assert_eq!(analyze_transfusion(&profile, 0.0).reason, Some(TransfusionReason::LowHemoglobin));
    }

    #[test_case(Some(28.0), None, true ; "low hematocrit")]
    #[test_case(None, Some(9.0), true ; "low hemoglobin")]
    #[test_case(Some(35.0), Some(12.0), false ; "normal counts")]
    #[test_case(None, None, false ; "counts absent")]
    fn test_significant_loss_needs_low_counts(hct: Option<f64>, hgb: Option<f64>, needed: bool) {
        let mut profile = patient();
        profile.hematocrit = hct;
        profile.hemoglobin = hgb;

        // 18% of 4900 mL
        let analysis = analyze_transfusion(&profile, 882.0);
        assert_eq!(analysis.blood_loss_percentage, 18.0);
        assert_eq!(analysis.transfusion_needed, needed);
        if needed {
            assert_eq!(analysis.reason, Some(TransfusionReason::SignificantLossWithLowCounts));
        } else {
            assert_eq!(analysis.reason, None);
            assert_eq!(analysis.reason_text(), "");
        }
    }

    #[test]
    fn test_exactly_fifteen_percent_is_not_significant() {
        // 735 mL is exactly 15% of 4900 mL
        let analysis = analyze_transfusion(&patient().with_hematocrit(28.0), 735.0);
        assert_eq!(analysis.blood_loss_percentage, 15.0);
        assert!(!analysis.transfusion_needed);
        assert_eq!(analysis.reason, None);
    }

    #[test]
    fn test_decision_uses_unrounded_percentage() {
        // 980.2 mL is 20.004% which rounds to 20.0 but still exceeds the limit
        let analysis = analyze_transfusion(&patient(), 980.2);
        assert_eq!(analysis.blood_loss_percentage, 20.0);
        assert_eq!(analysis.reason, Some(TransfusionReason::BloodLossOverTwentyPercent));
    }

    #[test]
    fn test_exactly_twenty_percent_is_not_major() {
        let analysis = analyze_transfusion(&patient(), 980.0);
        assert_eq!(analysis.blood_loss_percentage, 20.0);
        assert!(!analysis.transfusion_needed);
    }

    #[test]
    fn test_blood_volume_factor_from_settings() {
        let settings = CalculatorSettings { blood_volume_ml_per_kg: 80.0, ..CalculatorSettings::default() };
        let analysis = analyze_transfusion_with(&PatientProfile::new(4.0, Sex::Female, 15.0), 300.0, &settings);
        assert_eq!(analysis.estimated_blood_volume, 1200.0);
        assert_eq!(analysis.blood_loss_percentage, 25.0);
        assert!(analysis.transfusion_needed);
    }
}
