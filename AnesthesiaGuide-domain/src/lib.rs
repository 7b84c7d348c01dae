// Anesthesia Guide Domain
// This crate contains the dosing, fluid, equipment, transfusion and emergency calculations

// Calculators and the service facade
pub mod services;

// Domain entities
pub mod entities;

// Error types
pub mod errors;

// Calculator settings
pub mod settings;

// Re-export the static reference tables for convenience
pub use anesthesia_guide_data as tables;

// Patient fixtures - available to unit tests and with the fixtures feature
#[cfg(any(test, feature = "fixtures"))]
pub mod testing;

pub use entities::{
    AnesthesiaPlan, ChecklistProgress, Dose, DoseEntry, DoseTable, EmergencyProtocol, EquipmentSizes, FluidTherapy,
    FluidType, PatientIntake, PatientProfile, ProtocolKey, Severity, SeverityPalette, Sex, Technique,
    TransfusionAnalysis, TransfusionReason,
};
pub use errors::CalculationError;
pub use services::{create_default_anesthesia_service, AnesthesiaService, AnesthesiaServiceTrait};
pub use settings::CalculatorSettings;
