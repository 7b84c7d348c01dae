use serde::{Deserialize, Serialize};

use crate::entities::{
    dose::DoseTable, emergency::EmergencyProtocol, equipment::EquipmentSizes, fluid::FluidTherapy,
    technique::Technique,
};

/// Everything the workflow screens show for one patient, phase by phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnesthesiaPlan {
    pub premedication: DoseTable,
    pub fluid_therapy: FluidTherapy,
    pub induction_technique: Technique,
    pub induction: DoseTable,
    pub equipment: EquipmentSizes,
    pub maintenance_technique: Technique,
    pub maintenance: DoseTable,
    pub reversal_agents: DoseTable,
    pub emergency_protocols: Vec<EmergencyProtocol>,
}
