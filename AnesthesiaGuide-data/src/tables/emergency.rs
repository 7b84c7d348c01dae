use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TableError;
use crate::tables::dose_rule::DoseRule;

/// Key of one of the fixed emergency scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProtocolKey {
    Laryngospasm,
    CardiacArrest,
    Anaphylaxis,
    MalignantHyperthermia,
    Bronchospasm,
    Hypotension,
}

impl ProtocolKey {
    /// All keys, in catalogue order
    pub const ALL: [ProtocolKey; 6] = [
        ProtocolKey::Laryngospasm,
        ProtocolKey::CardiacArrest,
        ProtocolKey::Anaphylaxis,
        ProtocolKey::MalignantHyperthermia,
        ProtocolKey::Bronchospasm,
        ProtocolKey::Hypotension,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ProtocolKey::Laryngospasm => "laryngospasm",
            ProtocolKey::CardiacArrest => "cardiacArrest",
            ProtocolKey::Anaphylaxis => "anaphylaxis",
            ProtocolKey::MalignantHyperthermia => "malignantHyperthermia",
            ProtocolKey::Bronchospasm => "bronchospasm",
            ProtocolKey::Hypotension => "hypotension",
        }
    }
}

impl fmt::Display for ProtocolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtocolKey {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProtocolKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s.trim())
            .ok_or_else(|| TableError::UnknownProtocol(s.to_string()))
    }
}

/// Triage severity of an emergency protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Immediately life-threatening
    Critical,
    /// Threatens the airway or circulation if untreated
    High,
    /// Needs prompt treatment but is not immediately fatal
    Moderate,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Moderate => "moderate",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "critical" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "moderate" => Ok(Severity::Moderate),
            other => Err(TableError::UnknownSeverity(other.to_string())),
        }
    }
}

/// A medication line of an emergency protocol, before patient scaling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MedicationTemplate {
    pub name: &'static str,
    pub rule: DoseRule,
    pub unit: &'static str,
    pub route: &'static str,
    pub indication: &'static str,
}

/// Static part of an emergency protocol
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProtocolTemplate {
    pub key: ProtocolKey,
    pub title: &'static str,
    pub icon: &'static str,
    pub severity: Severity,
    /// Ordered treatment steps
    pub steps: &'static [&'static str],
    pub medications: &'static [MedicationTemplate],
}

/// Look up the template for a protocol key
pub fn protocol_template(key: ProtocolKey) -> &'static ProtocolTemplate {
    // EMERGENCY_PROTOCOLS is laid out in ProtocolKey declaration order
    &EMERGENCY_PROTOCOLS[key as usize]
}

/// The emergency catalogue, in the order the protocols are presented
pub static EMERGENCY_PROTOCOLS: [ProtocolTemplate; 6] = [
    ProtocolTemplate {
        key: ProtocolKey::Laryngospasm,
        title: "Laryngospasm",
        icon: "🫁",
        severity: Severity::High,
        steps: &[
            "1. Remove stimulus, apply 100% O2 with positive pressure",
            "2. Deepen anesthesia if inadequate",
            "3. Apply larson maneuver (pressure behind angle of mandible)",
            "4. If persistent: Succinylcholine 0.1-0.5 mg/kg IV",
            "5. Consider emergency cricothyrotomy if complete obstruction",
        ],
        medications: &[
            MedicationTemplate {
                name: "Succinylcholine",
                rule: DoseRule::WeightScaled { per_kg: 0.5, places: 1 },
                unit: "mg",
                route: "IV",
                indication: "If laryngospasm persists",
            },
            MedicationTemplate {
                name: "Propofol",
                rule: DoseRule::WeightScaled { per_kg: 1.0, places: 1 },
                unit: "mg",
                route: "IV",
                indication: "Deepen anesthesia",
            },
        ],
    },
    ProtocolTemplate {
        key: ProtocolKey::CardiacArrest,
        title: "Cardiac Arrest",
        icon: "💔",
        severity: Severity::Critical,
        steps: &[
            "1. Call for help, start CPR immediately",
            "2. Check rhythm, defibrillate if VF/VT",
            "3. Epinephrine 1 mg IV every 3-5 minutes",
            "4. Consider reversible causes (4 Hs and 4 Ts)",
            "5. Continue ACLS protocol",
        ],
        medications: &[
            MedicationTemplate {
                name: "Epinephrine",
                rule: DoseRule::Pediatric { per_kg: 0.01, places: 2, adult: 1.0 },
                unit: "mg",
                route: "IV",
                indication: "Every 3-5 minutes during CPR",
            },
            MedicationTemplate {
                name: "Amiodarone",
                rule: DoseRule::Pediatric { per_kg: 5.0, places: 1, adult: 300.0 },
                unit: "mg",
                route: "IV",
                indication: "For VF/VT",
            },
        ],
    },
    ProtocolTemplate {
        key: ProtocolKey::Anaphylaxis,
        title: "Anaphylaxis",
        icon: "⚠️",
        severity: Severity::Critical,
        steps: &[
            "1. Stop suspected trigger, call for help",
            "2. Epinephrine IM immediately",
            "3. High flow oxygen, IV fluids",
            "4. H1 and H2 antihistamines",
            "5. Corticosteroids",
            "6. Consider vasopressors if hypotensive",
        ],
        medications: &[
            MedicationTemplate {
                name: "Epinephrine",
                rule: DoseRule::Pediatric { per_kg: 0.01, places: 2, adult: 0.5 },
                unit: "mg",
                route: "IM",
                indication: "First line treatment",
            },
            MedicationTemplate {
                name: "Diphenhydramine",
                rule: DoseRule::Pediatric { per_kg: 1.0, places: 1, adult: 50.0 },
                unit: "mg",
                route: "IV",
                indication: "H1 antihistamine",
            },
            MedicationTemplate {
                name: "Ranitidine",
                rule: DoseRule::Pediatric { per_kg: 1.0, places: 1, adult: 50.0 },
                unit: "mg",
                route: "IV",
                indication: "H2 antihistamine",
            },
            MedicationTemplate {
                name: "Hydrocortisone",
                rule: DoseRule::Pediatric { per_kg: 4.0, places: 1, adult: 200.0 },
                unit: "mg",
                route: "IV",
                indication: "Corticosteroid",
            },
        ],
    },
    ProtocolTemplate {
        key: ProtocolKey::MalignantHyperthermia,
        title: "Malignant Hyperthermia",
        icon: "🌡️",
        severity: Severity::Critical,
        steps: &[
            "1. Discontinue triggering agents immediately",
            "2. Hyperventilate with 100% O2",
            "3. Dantrolene 2.5 mg/kg IV, repeat as needed",
            "4. Cool patient aggressively",
            "5. Treat hyperkalemia and acidosis",
            "6. Monitor for complications",
        ],
        medications: &[
            MedicationTemplate {
                name: "Dantrolene",
                rule: DoseRule::WeightScaled { per_kg: 2.5, places: 1 },
                unit: "mg",
                route: "IV",
                indication: "Initial dose, repeat as needed",
            },
            MedicationTemplate {
                name: "Sodium Bicarbonate",
                rule: DoseRule::WeightScaled { per_kg: 1.0, places: 1 },
                unit: "mEq",
                route: "IV",
                indication: "For acidosis",
            },
            MedicationTemplate {
                name: "Insulin + Glucose",
                rule: DoseRule::Text("10 units regular insulin + 50 mL D50W"),
                unit: "",
                route: "IV",
                indication: "For hyperkalemia",
            },
        ],
    },
    ProtocolTemplate {
        key: ProtocolKey::Bronchospasm,
        title: "Bronchospasm",
        icon: "🫁",
        severity: Severity::Moderate,
        steps: &[
            "1. Deepen anesthesia, 100% O2",
            "2. Albuterol via ETT or mask",
            "3. Consider epinephrine if severe",
            "4. Steroids if persistent",
            "5. Rule out other causes",
        ],
        medications: &[
            MedicationTemplate {
                name: "Albuterol",
                rule: DoseRule::Range { min: 2.5, max: 5.0 },
                unit: "mg",
                route: "Nebulized",
                indication: "Bronchodilator",
            },
            MedicationTemplate {
                name: "Epinephrine",
                rule: DoseRule::Pediatric { per_kg: 0.01, places: 3, adult: 0.1 },
                unit: "mg",
                route: "IV",
                indication: "If severe bronchospasm",
            },
            MedicationTemplate {
                name: "Methylprednisolone",
                rule: DoseRule::Pediatric { per_kg: 1.0, places: 1, adult: 60.0 },
                unit: "mg",
                route: "IV",
                indication: "Anti-inflammatory",
            },
        ],
    },
    ProtocolTemplate {
        key: ProtocolKey::Hypotension,
        title: "Hypotension",
        icon: "📉",
        severity: Severity::Moderate,
        steps: &[
            "1. Check depth of anesthesia",
            "2. IV fluid bolus",
            "3. Vasopressors if needed",
            "4. Rule out bleeding, cardiac causes",
            "5. Consider inotropes if poor contractility",
        ],
        medications: &[
            MedicationTemplate {
                name: "Ephedrine",
                rule: DoseRule::Pediatric { per_kg: 0.1, places: 1, adult: 5.0 },
                unit: "mg",
                route: "IV",
                indication: "Mixed alpha/beta agonist",
            },
            MedicationTemplate {
                name: "Phenylephrine",
                rule: DoseRule::Pediatric { per_kg: 1.0, places: 1, adult: 100.0 },
                unit: "mcg",
                route: "IV",
                indication: "Pure alpha agonist",
            },
            MedicationTemplate {
                name: "Normal Saline",
                rule: DoseRule::Pediatric { per_kg: 10.0, places: 1, adult: 500.0 },
                unit: "mL",
                route: "IV",
                indication: "Fluid resuscitation",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_catalogue_order_matches_keys() {
        for (index, key) in ProtocolKey::ALL.iter().enumerate() {
            assert_eq!(EMERGENCY_PROTOCOLS[index].key, *key);
            assert_eq!(protocol_template(*key).key, *key);
        }
    }

    #[test_case(ProtocolKey::Laryngospasm, Severity::High)]
    #[test_case(ProtocolKey::CardiacArrest, Severity::Critical)]
    #[test_case(ProtocolKey::Anaphylaxis, Severity::Critical)]
    #[test_case(ProtocolKey::MalignantHyperthermia, Severity::Critical)]
    #[test_case(ProtocolKey::Bronchospasm, Severity::Moderate)]
    #[test_case(ProtocolKey::Hypotension, Severity::Moderate)]
    fn test_protocol_severity(key: ProtocolKey, expected: Severity) {
        assert_eq!(protocol_template(key).severity, expected);
    }

    #[test]
    fn test_every_protocol_has_steps_and_medications() {
        for template in EMERGENCY_PROTOCOLS.iter() {
            assert!(!template.steps.is_empty(), "{} has no steps", template.key);
            assert!(!template.medications.is_empty(), "{} has no medications", template.key);
        }
    }

    #[test]
    fn test_protocol_key_round_trips_through_str() {
        for key in ProtocolKey::ALL {
            assert_eq!(key.as_str().parse::<ProtocolKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_unknown_protocol_key_is_rejected() {
        let result = "stroke".parse::<ProtocolKey>();
        assert_eq!(result, Err(TableError::UnknownProtocol("stroke".to_string())));
    }

    #[test]
    fn test_protocol_key_serializes_camel_case() {
        let json = serde_json::to_string(&ProtocolKey::MalignantHyperthermia).unwrap();
        assert_eq!(json, "\"malignantHyperthermia\"");
    }

    #[test]
    fn test_severity_parsing() {
        assert_eq!("critical".parse::<Severity>().unwrap(), Severity::Critical);
        assert_eq!("moderate".parse::<Severity>().unwrap(), Severity::Moderate);
        assert!("low".parse::<Severity>().is_err());
    }
}
