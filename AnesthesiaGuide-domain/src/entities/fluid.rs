use serde::{Deserialize, Serialize};

pub use anesthesia_guide_data::FluidType;

/// Maintenance fluid plan (Holliday-Segar)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluidTherapy {
    /// mL per 24 hours
    pub maintenance_rate: u32,
    /// Gravity drip rate for the configured giving set
    pub drops_per_minute: u32,
    pub recommended_fluid: FluidType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_fluid_key() {
        let therapy = FluidTherapy {
            maintenance_rate: 1000,
            drops_per_minute: 14,
            recommended_fluid: FluidType::Dextrose5,
        };
        let value = serde_json::to_value(&therapy).unwrap();
        assert_eq!(value["maintenanceRate"], 1000);
        assert_eq!(value["recommendedFluid"], "dextrose5");
    }
}
