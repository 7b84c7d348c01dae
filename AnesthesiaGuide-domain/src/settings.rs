//! Calculator settings
//!
//! Settings are plain values handed to [`AnesthesiaService`](crate::services::AnesthesiaService);
//! nothing here reads global or process state.

use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crate::errors::{describe_validation_errors, CalculationError};

/// Drops per mL of a standard adult giving set
pub const DEFAULT_DROPS_PER_ML: f64 = 20.0;

/// Estimated blood volume per kg of body weight
pub const DEFAULT_BLOOD_VOLUME_ML_PER_KG: f64 = 70.0;

/// Tunable constants of the fluid and blood-volume formulas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculatorSettings {
    /// Drop factor of the giving set used for drip rates
    #[validate(range(min = 1.0, max = 100.0, message = "Drops per mL must be between 1 and 100"))]
    pub drops_per_ml: f64,

    /// mL of blood per kg used for EBV
    #[validate(range(min = 40.0, max = 120.0, message = "Blood volume must be between 40 and 120 mL/kg"))]
    pub blood_volume_ml_per_kg: f64,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            drops_per_ml: DEFAULT_DROPS_PER_ML,
            blood_volume_ml_per_kg: DEFAULT_BLOOD_VOLUME_ML_PER_KG,
        }
    }
}

impl CalculatorSettings {
    /// Parse and validate settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, CalculationError> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| CalculationError::Configuration(e.to_string()))?;

        settings
            .validate()
            .map_err(|e| CalculationError::Configuration(describe_validation_errors(&e)))?;

        info!(
            drops_per_ml = settings.drops_per_ml,
            blood_volume_ml_per_kg = settings.blood_volume_ml_per_kg,
            "Loaded calculator settings"
        );

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CalculatorSettings::default();
        assert_eq!(settings.drops_per_ml, 20.0);
        assert_eq!(settings.blood_volume_ml_per_kg, 70.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let settings = CalculatorSettings::from_json(r#"{"dropsPerMl": 60}"#).unwrap();
        assert_eq!(settings.drops_per_ml, 60.0);
        assert_eq!(settings.blood_volume_ml_per_kg, DEFAULT_BLOOD_VOLUME_ML_PER_KG);

        let settings = CalculatorSettings::from_json("{}").unwrap();
        assert_eq!(settings, CalculatorSettings::default());
    }

    #[test]
    fn test_from_json_rejects_out_of_range_values() {
        let err = CalculatorSettings::from_json(r#"{"bloodVolumeMlPerKg": 500}"#).unwrap_err();
        assert!(err.to_string().contains("Blood volume must be between 40 and 120 mL/kg"));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = CalculatorSettings::from_json("not json").unwrap_err();
        assert!(matches!(err, CalculationError::Configuration(_)));
    }
}
