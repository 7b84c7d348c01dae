use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a transfusion was recommended, in decision priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransfusionReason {
    /// Blood loss above 20% of the estimated blood volume
    BloodLossOverTwentyPercent,
    /// Hematocrit under 25%
    LowHematocrit,
    /// Hemoglobin under 8 g/dL
    LowHemoglobin,
    /// Loss above 15% together with Hct < 30% or Hgb < 10 g/dL
    SignificantLossWithLowCounts,
}

impl TransfusionReason {
    pub const fn message(self) -> &'static str {
        match self {
            TransfusionReason::BloodLossOverTwentyPercent => "Blood loss > 20% of estimated blood volume",
            TransfusionReason::LowHematocrit => "Hematocrit < 25%",
            TransfusionReason::LowHemoglobin => "Hemoglobin < 8 g/dL",
            TransfusionReason::SignificantLossWithLowCounts => "Significant blood loss with low Hct/Hgb",
        }
    }
}

impl fmt::Display for TransfusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of the intra-operative blood loss assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransfusionAnalysis {
    pub transfusion_needed: bool,

    /// Present exactly when `transfusion_needed` is true
    pub reason: Option<TransfusionReason>,

    /// Loss as a percentage of EBV, one decimal
    pub blood_loss_percentage: f64,

    /// EBV in mL, whole number
    pub estimated_blood_volume: f64,
}

impl TransfusionAnalysis {
    /// Reason for display; empty when no transfusion is needed
    pub fn reason_text(&self) -> &'static str {
        self.reason.map(TransfusionReason::message).unwrap_or("")
    }
}
