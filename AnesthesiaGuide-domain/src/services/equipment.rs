use tracing::debug;

use crate::entities::{EquipmentSizes, PatientProfile};
use crate::services::dosing::round_to;

/// Age-based airway equipment sizes
pub fn calculate_equipment_sizes(profile: &PatientProfile) -> EquipmentSizes {
    let age = profile.age;

    let (endotracheal_tube, laryngoscope_blade) = if age < 1.0 {
        ("3.0-3.5".to_string(), "Miller 0-1")
    } else if age < 2.0 {
        ("3.5-4.0".to_string(), "Miller 1")
    } else if age < 8.0 {
        (round_to(age / 4.0 + 4.0, 1).to_string(), "Miller 1-2")
    } else {
        (round_to((age + 16.0) / 4.0, 1).to_string(), "Macintosh 2-3")
    };

    let (oral_airway, nasal_airway) = if profile.is_pediatric() {
        (((age + 6.0) / 3.0).round().to_string(), ((age + 15.0) / 2.0).round().to_string())
    } else {
        ("4-5".to_string(), "7-8".to_string())
    };

    debug!(age, tube = %endotracheal_tube, "Calculated equipment sizes");

    EquipmentSizes {
        endotracheal_tube,
        laryngoscope_blade: laryngoscope_blade.to_string(),
        oral_airway,
        nasal_airway,
    }
}
