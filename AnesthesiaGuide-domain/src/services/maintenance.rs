use tracing::{debug, warn};

use crate::entities::{Dose, DoseEntry, DoseTable, PatientProfile, Technique};
use crate::errors::CalculationError;
use crate::services::dosing::round_to;

pub fn calculate_maintenance_doses(profile: &PatientProfile, technique: Technique) -> DoseTable {
    let weight = profile.weight;

    let mut doses = DoseTable::new();
    match technique {
        Technique::Tiva => {
            // infusion bounds stay unrounded
            doses.insert(
                "propofolInfusion".to_string(),
                DoseEntry::new("Propofol Infusion", Dose::Range(weight * 100.0, weight * 200.0), "mcg/min", "IV"),
            );
            doses.insert(
                "remifentanil".to_string(),
                DoseEntry::new("Remifentanil", Dose::Fixed(round_to(weight * 0.25, 2)), "mcg/kg/min", "IV"),
            );
        }
        Technique::General => {
            let mac = if profile.is_pediatric() {
                Dose::Range(2.0, 3.0)
            } else {
                Dose::Range(1.5, 2.5)
            };
            doses.insert(
                "sevoflurane".to_string(),
                DoseEntry::new("Sevoflurane", mac, "MAC", "Inhalation"),
            );
            doses.insert(
                "fentanyl".to_string(),
                DoseEntry::new("Fentanyl", Dose::Fixed(round_to(weight, 1)), "mcg/kg/h", "IV"),
            );
        }
        Technique::Spinal => {
            doses.insert(
                "monitoring".to_string(),
                DoseEntry::new(
                    "Spinal Block Monitoring",
                    Dose::Text("T6-T10".to_string()),
                    "Level",
                    "Assessment",
                ),
            );
        }
    }

    debug!(technique = %technique, count = doses.len(), "Calculated maintenance doses");
    doses
}

pub fn calculate_maintenance_doses_for_key(profile: &PatientProfile, key: &str) -> Result<DoseTable, CalculationError> {
    let technique = key.parse::<Technique>().inspect_err(|_| warn!(key, "Unknown maintenance technique"))?;
    Ok(calculate_maintenance_doses(profile, technique))
}
