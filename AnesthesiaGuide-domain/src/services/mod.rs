pub mod anesthesia;
pub mod dosing;
pub mod emergency;
pub mod equipment;
pub mod fluids;
pub mod induction;
pub mod maintenance;
pub mod premedication;
pub mod recovery;
pub mod transfusion;

// Domain services
// Each phase of the anesthesia workflow has its own calculator module.

// Re-export service traits and factory functions
pub use anesthesia::{create_default_anesthesia_service, AnesthesiaService, AnesthesiaServiceTrait};

// Re-export the calculators
pub use dosing::{resolve_rule, round_to};
pub use emergency::{emergency_protocol, emergency_protocols, severity_palette, severity_palette_for_label};
pub use equipment::calculate_equipment_sizes;
pub use fluids::{calculate_serum_therapy, calculate_serum_therapy_with, maintenance_rate, DEXTROSE_AGE_LIMIT};
pub use induction::{
    calculate_induction_doses, calculate_induction_doses_for_key, propofol_induction_range,
    thiopental_induction_range,
};
pub use maintenance::{calculate_maintenance_doses, calculate_maintenance_doses_for_key};
pub use premedication::calculate_premedication;
pub use recovery::{calculate_reversal_agents, checklist_progress};
pub use transfusion::{analyze_transfusion, analyze_transfusion_with};
