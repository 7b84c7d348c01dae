use serde::Serialize;

use crate::tables::emergency::Severity;

/// Display colours for a protocol severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityPalette {
    /// Foreground / accent colour
    pub color: &'static str,
    /// Card background colour
    pub background_color: &'static str,
}

impl SeverityPalette {
    pub const CRITICAL: SeverityPalette = SeverityPalette { color: "#dc2626", background_color: "#fef2f2" };
    pub const HIGH: SeverityPalette = SeverityPalette { color: "#ea580c", background_color: "#fff7ed" };
    pub const MODERATE: SeverityPalette = SeverityPalette { color: "#d97706", background_color: "#fffbeb" };
    /// Used for any label outside the severity set
    pub const NEUTRAL: SeverityPalette = SeverityPalette { color: "#64748b", background_color: "#f8fafc" };

    pub const fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Critical => Self::CRITICAL,
            Severity::High => Self::HIGH,
            Severity::Moderate => Self::MODERATE,
        }
    }

    /// Palette for a raw severity label, falling back to neutral grey
    pub fn for_label(label: &str) -> Self {
        label
            .parse::<Severity>()
            .map(Self::for_severity)
            .unwrap_or(Self::NEUTRAL)
    }
}

impl Severity {
    pub const fn palette(self) -> SeverityPalette {
        SeverityPalette::for_severity(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Severity::Critical, "#dc2626", "#fef2f2")]
    #[test_case(Severity::High, "#ea580c", "#fff7ed")]
    #[test_case(Severity::Moderate, "#d97706", "#fffbeb")]
    fn test_palette_per_severity(severity: Severity, color: &str, background: &str) {
        let palette = severity.palette();
        assert_eq!(palette.color, color);
        assert_eq!(palette.background_color, background);
    }

    #[test]
    fn test_unknown_label_falls_back_to_neutral() {
        assert_eq!(SeverityPalette::for_label("unknown"), SeverityPalette::NEUTRAL);
        assert_eq!(SeverityPalette::for_label(""), SeverityPalette::NEUTRAL);
        assert_eq!(SeverityPalette::for_label("high"), SeverityPalette::HIGH);
    }

    #[test]
    fn test_palette_serializes_camel_case() {
        let json = serde_json::to_value(SeverityPalette::CRITICAL).unwrap();
        assert_eq!(json["backgroundColor"], "#fef2f2");
    }
}
