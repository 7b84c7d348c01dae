use std::collections::HashSet;

use anesthesia_guide_data::{checklist_items, REVERSAL_AGENTS};
use tracing::debug;

use crate::entities::{ChecklistProgress, DoseEntry, DoseTable, PatientProfile};
use crate::services::dosing::resolve_rule;

/// Reversal agents for emergence, scaled to the patient
pub fn calculate_reversal_agents(profile: &PatientProfile) -> DoseTable {
    let doses: DoseTable = REVERSAL_AGENTS
        .iter()
        .map(|agent| {
            let entry = DoseEntry::new(agent.name, resolve_rule(&agent.rule, profile), agent.unit, agent.route)
                .with_indication(agent.indication)
                .with_notes(agent.notes);
            (agent.key.to_string(), entry)
        })
        .collect();

    debug!(weight = profile.weight, "Calculated reversal agents");
    doses
}

/// Count ticked discharge checklist items.
///
/// Keys that are not on the checklist are ignored and duplicates count once.
pub fn checklist_progress<'a>(checked: impl IntoIterator<Item = &'a str>) -> ChecklistProgress {
    let checked: HashSet<&str> = checked.into_iter().collect();

    let total = checklist_items().count();
    let completed = checklist_items().filter(|item| checked.contains(item.key)).count();

    ChecklistProgress { completed, total, ready: completed == total }
}
