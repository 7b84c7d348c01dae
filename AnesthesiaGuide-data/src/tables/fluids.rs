use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TableError;

/// Crystalloid fluids offered for maintenance therapy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FluidType {
    NormalSaline,
    RingerLactate,
    Dextrose5,
}

impl FluidType {
    pub const ALL: [FluidType; 3] = [FluidType::NormalSaline, FluidType::RingerLactate, FluidType::Dextrose5];

    /// Key used by the renderer
    pub const fn key(self) -> &'static str {
        match self {
            FluidType::NormalSaline => "normalSaline",
            FluidType::RingerLactate => "ringerLactate",
            FluidType::Dextrose5 => "dextrose5",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            FluidType::NormalSaline => "Normal Saline",
            FluidType::RingerLactate => "Ringer Lactate",
            FluidType::Dextrose5 => "Dextrose 5%",
        }
    }

    pub const fn composition(self) -> &'static str {
        match self {
            FluidType::NormalSaline => "NaCl 0.9%",
            FluidType::RingerLactate => "Ringer Lactate",
            FluidType::Dextrose5 => "D5W",
        }
    }
}

impl fmt::Display for FluidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for FluidType {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FluidType::ALL
            .iter()
            .copied()
            .find(|fluid| fluid.key() == s.trim())
            .ok_or_else(|| TableError::UnknownFluid(s.to_string()))
    }
}
