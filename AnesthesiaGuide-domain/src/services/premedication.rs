use tracing::debug;

use crate::entities::{Dose, DoseEntry, DoseTable, PatientProfile};
use crate::services::dosing::round_to;

/// Sedative, antisialagogue and antiemetic doses given before induction
pub fn calculate_premedication(profile: &PatientProfile) -> DoseTable {
    let weight = profile.weight;
    let pediatric = profile.is_pediatric();

    let mut doses = DoseTable::new();

    doses.insert(
        "midazolam".to_string(),
        DoseEntry::new("Midazolam", Dose::Fixed(round_to(weight * 0.05, 1)), "mg", "IV")
            .with_notes("Anxiolysis and sedation"),
    );

    let atropine = if pediatric {
        round_to(weight * 0.02, 2)
    } else {
        round_to(weight * 0.01, 2)
    };
    doses.insert(
        "atropine".to_string(),
        DoseEntry::new("Atropine", Dose::Fixed(atropine), "mg", "IV/IM")
            .with_notes("Antisialagogue, prevent bradycardia"),
    );

    let ondansetron = if pediatric { round_to(weight * 0.15, 1) } else { 4.0 };
    doses.insert(
        "ondansetron".to_string(),
        DoseEntry::new("Ondansetron", Dose::Fixed(ondansetron), "mg", "IV").with_notes("Antiemetic"),
    );

    debug!(age = profile.age, weight, "Calculated premedication doses");
    doses
}
