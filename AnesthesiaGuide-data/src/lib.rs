// AnesthesiaGuide Data
// This crate holds the fixed reference tables the calculations read from

// Lookup errors
pub mod errors;

// Static reference tables (protocols, palettes, fluids, recovery)
pub mod tables;

// Re-export commonly used types
pub use errors::TableError;
pub use tables::{
    dose_rule::{is_pediatric, DoseRule, PEDIATRIC_AGE_LIMIT},
    emergency::{protocol_template, MedicationTemplate, ProtocolKey, ProtocolTemplate, Severity, EMERGENCY_PROTOCOLS},
    fluids::FluidType,
    palette::SeverityPalette,
    recovery::{checklist_items, ChecklistCategory, ChecklistItem, ReversalAgentTemplate, RECOVERY_CHECKLIST, REVERSAL_AGENTS},
};
