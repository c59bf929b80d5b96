//! # Distribution Calculations
//!
//! This module contains the engineering calculations. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! All calculations are stateless, synchronous and deterministic, safe for
//! unlimited parallel invocation.
//!
//! ## Available Calculations
//!
//! - [`voltage_drop`] - Conductor voltage drop and compliance (NBR 5410)
//! - [`mechanical_stress`] - Pole wind/weight/tension loading (NBR 8458/8798)

pub mod mechanical_stress;
pub mod voltage_drop;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use mechanical_stress::{MechanicalStressInput, MechanicalStressResult};
pub use voltage_drop::{VoltageDropInput, VoltageDropResult};

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Conductor voltage drop check
    VoltageDrop(VoltageDropInput),
    /// Pole mechanical loading check
    MechanicalStress(MechanicalStressInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::VoltageDrop(v) => &v.label,
            CalculationItem::MechanicalStress(m) => &m.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::VoltageDrop(_) => "VoltageDrop",
            CalculationItem::MechanicalStress(_) => "MechanicalStress",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conductors::ConductorType;
    use crate::standards::VoltageLevel;

    #[test]
    fn test_item_tagged_serialization() {
        let item = CalculationItem::VoltageDrop(VoltageDropInput {
            label: "Trecho A-B".to_string(),
            current_a: 100.0,
            length_m: 500.0,
            conductor_type: ConductorType::Ca,
            cross_section_mm2: 50.0,
            power_factor: 0.92,
            phases: 3,
            nominal_voltage_v: 220.0,
            voltage_level: VoltageLevel::Bt,
        });

        assert_eq!(item.label(), "Trecho A-B");
        assert_eq!(item.calc_type(), "VoltageDrop");

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"VoltageDrop\""));
        let roundtrip: CalculationItem = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.label(), "Trecho A-B");
    }
}
