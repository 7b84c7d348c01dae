use tracing::debug;

use crate::entities::{FluidTherapy, FluidType, PatientProfile};
use crate::settings::CalculatorSettings;

/// Children younger than this get dextrose-containing maintenance fluid
pub const DEXTROSE_AGE_LIMIT: f64 = 2.0;

/// Holliday-Segar maintenance requirement in mL per 24 h.
///
/// 100 mL/kg for the first 10 kg, 50 mL/kg for the next 10 kg,
/// 20 mL/kg for every kg above 20.
pub fn maintenance_rate(weight: f64) -> f64 {
    if weight <= 10.0 {
        weight * 100.0
    } else if weight <= 20.0 {
        1000.0 + (weight - 10.0) * 50.0
    } else {
        1500.0 + (weight - 20.0) * 20.0
    }
}

/// Maintenance fluid plan with the default 20 drops/mL giving set
pub fn calculate_serum_therapy(profile: &PatientProfile) -> FluidTherapy {
    calculate_serum_therapy_with(profile, &CalculatorSettings::default())
}

pub fn calculate_serum_therapy_with(profile: &PatientProfile, settings: &CalculatorSettings) -> FluidTherapy {
    let rate = maintenance_rate(profile.weight);
    let drops_per_minute = (rate / 24.0 / 60.0 * settings.drops_per_ml).round();

    let recommended_fluid = if profile.age < DEXTROSE_AGE_LIMIT {
        FluidType::Dextrose5
    } else {
        FluidType::NormalSaline
    };

    debug!(rate, drops_per_minute, fluid = %recommended_fluid, "Calculated maintenance fluids");

    FluidTherapy {
        maintenance_rate: rate.round() as u32,
        drops_per_minute: drops_per_minute as u32,
        recommended_fluid,
    }
}
