use serde::{Deserialize, Serialize};

/// Airway equipment sizes for the induction screen.
/// Values are display strings: sizes, ranges or blade codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentSizes {
    /// Internal diameter in mm
    pub endotracheal_tube: String,
    pub laryngoscope_blade: String,
    pub oral_airway: String,
    pub nasal_airway: String,
}
