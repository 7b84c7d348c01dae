use crate::tables::dose_rule::DoseRule;

/// One checkbox of the recovery-room discharge checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistItem {
    /// Stable key, unique across the whole checklist
    pub key: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistCategory {
    pub title: &'static str,
    pub items: &'static [ChecklistItem],
}

pub static RECOVERY_CHECKLIST: [ChecklistCategory; 4] = [
    ChecklistCategory {
        title: "Airway Management",
        items: &[
            ChecklistItem { key: "airway_patent", text: "Airway patent and clear" },
            ChecklistItem { key: "breathing_adequate", text: "Adequate spontaneous breathing" },
            ChecklistItem { key: "oxygen_saturation", text: "Oxygen saturation > 95%" },
            ChecklistItem { key: "extubation_criteria", text: "Extubation criteria met (if applicable)" },
        ],
    },
    ChecklistCategory {
        title: "Cardiovascular",
        items: &[
            ChecklistItem { key: "bp_stable", text: "Blood pressure stable" },
            ChecklistItem { key: "heart_rate", text: "Heart rate within normal limits" },
            ChecklistItem { key: "perfusion", text: "Adequate peripheral perfusion" },
            ChecklistItem { key: "ecg_normal", text: "ECG rhythm normal" },
        ],
    },
    ChecklistCategory {
        title: "Neurological",
        items: &[
            ChecklistItem { key: "consciousness", text: "Appropriate level of consciousness" },
            ChecklistItem { key: "motor_function", text: "Motor function returning" },
            ChecklistItem { key: "pain_controlled", text: "Pain adequately controlled" },
            ChecklistItem { key: "nausea_vomiting", text: "No nausea or vomiting" },
        ],
    },
    ChecklistCategory {
        title: "Temperature & Fluids",
        items: &[
            ChecklistItem { key: "temperature", text: "Core temperature > 36°C" },
            ChecklistItem { key: "fluid_balance", text: "Fluid balance appropriate" },
            ChecklistItem { key: "urine_output", text: "Adequate urine output" },
            ChecklistItem { key: "bleeding", text: "No excessive bleeding" },
        ],
    },
];

/// Iterate every checklist item across all categories
pub fn checklist_items() -> impl Iterator<Item = &'static ChecklistItem> {
    RECOVERY_CHECKLIST.iter().flat_map(|category| category.items.iter())
}

/// A reversal agent line, before patient scaling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReversalAgentTemplate {
    pub key: &'static str,
    pub name: &'static str,
    pub rule: DoseRule,
    pub unit: &'static str,
    pub route: &'static str,
    pub indication: &'static str,
    pub notes: &'static str,
}

pub static REVERSAL_AGENTS: [ReversalAgentTemplate; 4] = [
    ReversalAgentTemplate {
        key: "neostigmine",
        name: "Neostigmine",
        rule: DoseRule::WeightScaled { per_kg: 0.05, places: 1 },
        unit: "mg",
        route: "IV",
        indication: "Reverse neuromuscular blockade",
        notes: "Give with atropine or glycopyrrolate",
    },
    ReversalAgentTemplate {
        key: "sugammadex",
        name: "Sugammadex",
        rule: DoseRule::WeightScaled { per_kg: 2.0, places: 1 },
        unit: "mg",
        route: "IV",
        indication: "Reverse rocuronium/vecuronium",
        notes: "Rapid reversal, expensive",
    },
    ReversalAgentTemplate {
        key: "flumazenil",
        name: "Flumazenil",
        rule: DoseRule::Range { min: 0.2, max: 1.0 },
        unit: "mg",
        route: "IV",
        indication: "Reverse benzodiazepines",
        notes: "Use cautiously, short duration",
    },
    ReversalAgentTemplate {
        key: "naloxone",
        name: "Naloxone",
        rule: DoseRule::Range { min: 0.04, max: 0.4 },
        unit: "mg",
        route: "IV",
        indication: "Reverse opioids",
        notes: "May cause pain, hypertension",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_checklist_has_sixteen_unique_keys() {
        let keys: HashSet<&str> = checklist_items().map(|item| item.key).collect();
        assert_eq!(keys.len(), 16);
        assert_eq!(checklist_items().count(), 16);
    }

    #[test]
    fn test_every_category_has_four_items() {
        for category in RECOVERY_CHECKLIST.iter() {
            assert_eq!(category.items.len(), 4, "{}", category.title);
        }
    }

    #[test]
    fn test_reversal_agent_keys_are_unique() {
        let keys: HashSet<&str> = REVERSAL_AGENTS.iter().map(|agent| agent.key).collect();
        assert_eq!(keys.len(), REVERSAL_AGENTS.len());
    }
}
