use tracing::{instrument, warn};

use crate::entities::{
    AnesthesiaPlan, DoseTable, EmergencyProtocol, EquipmentSizes, FluidTherapy, PatientIntake, PatientProfile,
    ProtocolKey, Technique, TransfusionAnalysis,
};
use crate::errors::CalculationError;
use crate::services::{emergency, equipment, fluids, induction, maintenance, premedication, recovery, transfusion};
use crate::settings::CalculatorSettings;

/// Trait for the per-phase anesthesia calculations
pub trait AnesthesiaServiceTrait {
    /// Settings the fluid and blood-volume formulas run with
    fn settings(&self) -> &CalculatorSettings;

    /// Validate a patient form and convert it to a profile
    fn validate_patient(&self, intake: PatientIntake) -> Result<PatientProfile, CalculationError>;

    /// Premedication doses
    fn premedication(&self, profile: &PatientProfile) -> DoseTable;

    /// Maintenance fluid plan
    fn serum_therapy(&self, profile: &PatientProfile) -> FluidTherapy;

    /// Induction doses for a technique
    fn induction(&self, profile: &PatientProfile, technique: Technique) -> DoseTable;

    /// Induction doses for a technique key such as "tiva"
    fn induction_for_key(&self, profile: &PatientProfile, key: &str) -> Result<DoseTable, CalculationError>;

    /// Airway equipment sizes
    fn equipment(&self, profile: &PatientProfile) -> EquipmentSizes;

    /// Maintenance doses for a technique
    fn maintenance(&self, profile: &PatientProfile, technique: Technique) -> DoseTable;

    /// Maintenance doses for a technique key
    fn maintenance_for_key(&self, profile: &PatientProfile, key: &str) -> Result<DoseTable, CalculationError>;

    /// Transfusion assessment for a measured blood loss in mL
    fn transfusion(&self, profile: &PatientProfile, blood_loss_ml: f64) -> Result<TransfusionAnalysis, CalculationError>;

    /// All emergency protocols in catalogue order
    fn emergency_protocols(&self, profile: &PatientProfile) -> Vec<EmergencyProtocol>;

    /// One emergency protocol by key, e.g. "cardiacArrest"
    fn emergency_protocol(&self, profile: &PatientProfile, key: &str) -> Result<EmergencyProtocol, CalculationError>;

    /// Reversal agents for emergence
    fn reversal_agents(&self, profile: &PatientProfile) -> DoseTable;

    /// Every phase for one patient
    fn plan(&self, profile: &PatientProfile, induction: Technique, maintenance: Technique) -> AnesthesiaPlan;
}

/// Anesthesia service for domain logic
#[derive(Debug, Clone, Default)]
pub struct AnesthesiaService {
    settings: CalculatorSettings,
}

impl AnesthesiaService {
    /// Create a service with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: CalculatorSettings) -> Self {
        Self { settings }
    }
}

impl AnesthesiaServiceTrait for AnesthesiaService {
    fn settings(&self) -> &CalculatorSettings {
        &self.settings
    }

    #[instrument(skip(self, intake))]
    fn validate_patient(&self, intake: PatientIntake) -> Result<PatientProfile, CalculationError> {
        intake.into_profile().inspect_err(|e| warn!(error = %e, "Rejected patient intake"))
    }

    #[instrument(skip(self, profile), fields(age = profile.age, weight = profile.weight))]
    fn premedication(&self, profile: &PatientProfile) -> DoseTable {
        premedication::calculate_premedication(profile)
    }

    #[instrument(skip(self, profile), fields(age = profile.age, weight = profile.weight))]
    fn serum_therapy(&self, profile: &PatientProfile) -> FluidTherapy {
        fluids::calculate_serum_therapy_with(profile, &self.settings)
    }

    #[instrument(skip(self, profile), fields(age = profile.age, weight = profile.weight))]
    fn induction(&self, profile: &PatientProfile, technique: Technique) -> DoseTable {
        induction::calculate_induction_doses(profile, technique)
    }

    #[instrument(skip(self, profile), fields(age = profile.age, weight = profile.weight))]
    fn induction_for_key(&self, profile: &PatientProfile, key: &str) -> Result<DoseTable, CalculationError> {
        induction::calculate_induction_doses_for_key(profile, key)
    }

    #[instrument(skip(self, profile), fields(age = profile.age))]
    fn equipment(&self, profile: &PatientProfile) -> EquipmentSizes {
        equipment::calculate_equipment_sizes(profile)
    }

    #[instrument(skip(self, profile), fields(age = profile.age, weight = profile.weight))]
    fn maintenance(&self, profile: &PatientProfile, technique: Technique) -> DoseTable {
        maintenance::calculate_maintenance_doses(profile, technique)
    }

    #[instrument(skip(self, profile), fields(age = profile.age, weight = profile.weight))]
    fn maintenance_for_key(&self, profile: &PatientProfile, key: &str) -> Result<DoseTable, CalculationError> {
        maintenance::calculate_maintenance_doses_for_key(profile, key)
    }

    #[instrument(skip(self, profile), fields(weight = profile.weight))]
    fn transfusion(&self, profile: &PatientProfile, blood_loss_ml: f64) -> Result<TransfusionAnalysis, CalculationError> {
        if !blood_loss_ml.is_finite() || blood_loss_ml < 0.0 {
            warn!(blood_loss_ml, "Rejected blood loss");
            return Err(CalculationError::InvalidBloodLoss(blood_loss_ml));
        }

        Ok(transfusion::analyze_transfusion_with(profile, blood_loss_ml, &self.settings))
    }

    #[instrument(skip(self, profile), fields(age = profile.age, weight = profile.weight))]
    fn emergency_protocols(&self, profile: &PatientProfile) -> Vec<EmergencyProtocol> {
        emergency::emergency_protocols(profile)
    }

    #[instrument(skip(self, profile), fields(age = profile.age, weight = profile.weight))]
    fn emergency_protocol(&self, profile: &PatientProfile, key: &str) -> Result<EmergencyProtocol, CalculationError> {
        let key = key.parse::<ProtocolKey>().inspect_err(|_| warn!(key, "Unknown emergency protocol"))?;
        Ok(emergency::emergency_protocol(profile, key))
    }

    #[instrument(skip(self, profile), fields(weight = profile.weight))]
    fn reversal_agents(&self, profile: &PatientProfile) -> DoseTable {
        recovery::calculate_reversal_agents(profile)
    }

    #[instrument(skip(self, profile), fields(age = profile.age, weight = profile.weight))]
    fn plan(&self, profile: &PatientProfile, induction: Technique, maintenance: Technique) -> AnesthesiaPlan {
        AnesthesiaPlan {
            premedication: self.premedication(profile),
            fluid_therapy: self.serum_therapy(profile),
            induction_technique: induction,
            induction: self.induction(profile, induction),
            equipment: self.equipment(profile),
            maintenance_technique: maintenance,
            maintenance: self.maintenance(profile, maintenance),
            reversal_agents: self.reversal_agents(profile),
            emergency_protocols: self.emergency_protocols(profile),
        }
    }
}

/// Create the anesthesia service with default settings
pub fn create_default_anesthesia_service() -> impl AnesthesiaServiceTrait + Send + Sync {
    AnesthesiaService::new()
}
