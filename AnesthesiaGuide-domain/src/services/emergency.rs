use anesthesia_guide_data::{protocol_template, ProtocolTemplate, EMERGENCY_PROTOCOLS};
use tracing::debug;

use crate::entities::{DoseEntry, EmergencyProtocol, PatientProfile, ProtocolKey, Severity, SeverityPalette};
use crate::services::dosing::resolve_rule;

/// Every emergency protocol scaled to the patient, in catalogue order
pub fn emergency_protocols(profile: &PatientProfile) -> Vec<EmergencyProtocol> {
    let protocols: Vec<EmergencyProtocol> = EMERGENCY_PROTOCOLS
        .iter()
        .map(|template| scale_protocol(template, profile))
        .collect();

    debug!(count = protocols.len(), pediatric = profile.is_pediatric(), "Generated emergency protocols");
    protocols
}

pub fn emergency_protocol(profile: &PatientProfile, key: ProtocolKey) -> EmergencyProtocol {
    scale_protocol(protocol_template(key), profile)
}

pub fn severity_palette(severity: Severity) -> SeverityPalette {
    SeverityPalette::for_severity(severity)
}

/// Palette for an untyped severity label; unknown labels get the neutral palette
pub fn severity_palette_for_label(label: &str) -> SeverityPalette {
    SeverityPalette::for_label(label)
}

fn scale_protocol(template: &ProtocolTemplate, profile: &PatientProfile) -> EmergencyProtocol {
    let medications = template
        .medications
        .iter()
        .map(|medication| {
            DoseEntry::new(
                medication.name,
                resolve_rule(&medication.rule, profile),
                medication.unit,
                medication.route,
            )
            .with_indication(medication.indication)
        })
        .collect();

    EmergencyProtocol {
        key: template.key,
        title: template.title.to_string(),
        icon: template.icon.to_string(),
        severity: template.severity,
        steps: template.steps.iter().map(|step| step.to_string()).collect(),
        medications,
    }
}
