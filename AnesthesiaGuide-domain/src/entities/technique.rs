use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalculationError;

/// Anesthetic technique selected on the induction / maintenance screens.
///
/// Serializes as the lowercase key. Deserializing goes through [`FromStr`],
/// so JSON accepts the same keys as the string entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Technique {
    /// Total intravenous anesthesia
    Tiva,
    /// Inhalational general anesthesia, also keyed "inhalational"
    General,
    /// Spinal (subarachnoid) block
    Spinal,
}

impl Technique {
    pub const ALL: [Technique; 3] = [Technique::Tiva, Technique::General, Technique::Spinal];

    pub const fn as_str(self) -> &'static str {
        match self {
            Technique::Tiva => "tiva",
            Technique::General => "general",
            Technique::Spinal => "spinal",
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Technique {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tiva" => Ok(Technique::Tiva),
            "general" | "inhalational" => Ok(Technique::General),
            "spinal" => Ok(Technique::Spinal),
            _ => Err(CalculationError::UnknownTechnique(s.to_string())),
        }
    }
}

impl TryFrom<String> for Technique {
    type Error = CalculationError;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        key.parse()
    }
}
