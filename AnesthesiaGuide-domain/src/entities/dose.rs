use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A dose value.
///
/// Renderers receive `Fixed` as a JSON number and the other two as strings,
/// which is the shape the mobile screens already display. `Range` bounds are
/// kept as raw products where the source formula does not round.
#[derive(Debug, Clone, PartialEq)]
pub enum Dose {
    /// Single amount
    Fixed(f64),
    /// Inclusive range, rendered as "min-max"
    Range(f64, f64),
    /// Instruction or non-numeric value (e.g. a dermatome level)
    Text(String),
}

impl Dose {
    pub fn as_fixed(&self) -> Option<f64> {
        match self {
            Dose::Fixed(value) => Some(*value),
            _ => None,
        }
    }

    /// Lower and upper bound; a fixed dose is its own range
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self {
            Dose::Fixed(value) => Some((*value, *value)),
            Dose::Range(min, max) => Some((*min, *max)),
            Dose::Text(_) => None,
        }
    }

    /// Interpret a renderer string: "a-b" with numeric halves is a range
    fn parse_text(text: String) -> Self {
        if let Some((min, max)) = text.split_once('-') {
            if let (Ok(min), Ok(max)) = (min.trim().parse::<f64>(), max.trim().parse::<f64>()) {
                return Dose::Range(min, max);
            }
        }
        Dose::Text(text)
    }
}

impl fmt::Display for Dose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dose::Fixed(value) => write!(f, "{}", value),
            Dose::Range(min, max) => write!(f, "{}-{}", min, max),
            Dose::Text(text) => f.write_str(text),
        }
    }
}

impl Serialize for Dose {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Dose::Fixed(value) => serializer.serialize_f64(*value),
            _ => serializer.collect_str(self),
        }
    }
}

impl<'de> Deserialize<'de> for Dose {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawDose {
            Number(f64),
            Text(String),
        }

        Ok(match RawDose::deserialize(deserializer)? {
            RawDose::Number(value) => Dose::Fixed(value),
            RawDose::Text(text) => Dose::parse_text(text),
        })
    }
}

/// One drug line as displayed on a screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoseEntry {
    /// Display name of the drug
    pub name: String,

    pub dose: Dose,

    /// Unit of `dose` (mg, mcg/kg/min, MAC, ...)
    pub unit: String,

    /// Route of administration
    pub route: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When to give it (emergency and recovery tables)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indication: Option<String>,
}

impl DoseEntry {
    pub fn new(name: impl Into<String>, dose: Dose, unit: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dose,
            unit: unit.into(),
            route: route.into(),
            notes: None,
            indication: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_indication(mut self, indication: impl Into<String>) -> Self {
        self.indication = Some(indication.into());
        self
    }
}

/// Drug key → dose, in display order
pub type DoseTable = IndexMap<String, DoseEntry>;
