use serde::{Deserialize, Serialize};

pub use anesthesia_guide_data::{ProtocolKey, Severity, SeverityPalette};

use crate::entities::dose::DoseEntry;

/// An emergency protocol scaled to the current patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyProtocol {
    pub key: ProtocolKey,
    pub title: String,
    pub icon: String,
    pub severity: Severity,
    /// Treatment steps in the order they are performed
    pub steps: Vec<String>,
    pub medications: Vec<DoseEntry>,
}

impl EmergencyProtocol {
    pub fn palette(&self) -> SeverityPalette {
        self.severity.palette()
    }
}
