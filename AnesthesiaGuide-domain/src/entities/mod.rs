// Domain entities and value objects
pub mod dose;
pub mod emergency;
pub mod equipment;
pub mod fluid;
pub mod patient;
pub mod plan;
pub mod recovery;
pub mod technique;
pub mod transfusion;

// Re-export common types for easier imports
pub use dose::{Dose, DoseEntry, DoseTable};
pub use emergency::{EmergencyProtocol, ProtocolKey, Severity, SeverityPalette};
pub use equipment::EquipmentSizes;
pub use fluid::{FluidTherapy, FluidType};
pub use patient::{PatientIntake, PatientProfile, Sex};
pub use plan::AnesthesiaPlan;
pub use recovery::ChecklistProgress;
pub use technique::Technique;
pub use transfusion::{TransfusionAnalysis, TransfusionReason};
