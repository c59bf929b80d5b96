//! # Regulatory Constants
//!
//! Voltage-drop limits and pole-loading constants per the governing
//! Brazilian standards.
//!
//! ## Overview
//!
//! Two families of constants live here:
//!
//! ```text
//! drop_pct <= limit_pct(voltage level)      NBR 5410 / PRODIST
//! pole safety factor >= 2.5                 NBR 8458 / NBR 8798
//! ```
//!
//! ## Limit Summary
//!
//! | Level | Description            | Limit  |
//! |-------|------------------------|--------|
//! | BT    | Low voltage (baixa)    | 7.0 %  |
//! | MT    | Medium voltage (média) | 5.0 %  |
//! | AT    | High voltage (alta)    | 3.0 %  |
//!
//! All values are regulatory citations, kept as literals so they stay
//! auditable against the published standards rather than being derived
//! at runtime.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Standard Citation References
// ============================================================================

/// ABNT / ANEEL code references for the implemented checks.
///
/// These constants provide traceable references to the standards each
/// calculation follows.
pub mod nbr_ref {
    /// Voltage drop limits for low-voltage installations
    pub const VOLTAGE_DROP: &str = "ABNT NBR 5410";
    /// Voltage drop limits for medium-voltage distribution (ANEEL)
    pub const MV_DROP_LIMITS: &str = "PRODIST Modulo 8";
    /// Concrete pole loading and strength requirements
    pub const POLE_LOADING: &str = "ABNT NBR 8458/8798";
    /// Conductor resistance/reactance datasheet basis
    pub const CONDUCTOR_DATA: &str = "ABNT NBR 5410 / manufacturer datasheets";
}

// ============================================================================
// Physical Constants
// ============================================================================

/// Standard gravity (m/s²)
pub const GRAVITY_M_S2: f64 = 9.80665;

/// Drag coefficient Cf for a cylindrical conductor
pub const DRAG_COEFF_CONDUCTOR: f64 = 1.2;

/// Dynamic pressure factor ½ρ for standard air density (ρ = 1.225 kg/m³),
/// giving q = 0.613 · V² in pascals
pub const AIR_DENSITY_FACTOR: f64 = 0.613;

/// Minimum pole safety factor mandated by NBR 8458/8798.
///
/// This is a citation value returned alongside computed loads, not a
/// quantity derived from inputs.
pub const POLE_SAFETY_FACTOR: f64 = 2.5;

// ============================================================================
// Voltage Levels
// ============================================================================

/// Distribution voltage level, determining the regulatory drop limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VoltageLevel {
    /// Baixa tensão (low voltage, ≤ 1 kV): limit 7.0 % per NBR 5410
    #[default]
    #[serde(rename = "BT")]
    Bt,

    /// Média tensão (medium voltage, 1-69 kV): limit 5.0 % per PRODIST
    #[serde(rename = "MT")]
    Mt,

    /// Alta tensão (high voltage, > 69 kV): limit 3.0 %
    #[serde(rename = "AT")]
    At,
}

impl VoltageLevel {
    /// All voltage level variants for UI selection
    pub const ALL: [VoltageLevel; 3] = [VoltageLevel::Bt, VoltageLevel::Mt, VoltageLevel::At];

    /// Maximum allowed voltage drop (%) for this level
    pub fn limit_pct(&self) -> f64 {
        match self {
            VoltageLevel::Bt => 7.0,
            VoltageLevel::Mt => 5.0,
            VoltageLevel::At => 3.0,
        }
    }

    /// Get the code string (e.g., "BT", "MT")
    pub fn code(&self) -> &'static str {
        match self {
            VoltageLevel::Bt => "BT",
            VoltageLevel::Mt => "MT",
            VoltageLevel::At => "AT",
        }
    }

    /// The standard that defines this level's drop limit
    pub fn standard(&self) -> &'static str {
        match self {
            VoltageLevel::Bt => nbr_ref::VOLTAGE_DROP,
            VoltageLevel::Mt | VoltageLevel::At => nbr_ref::MV_DROP_LIMITS,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "BT" | "BAIXA" | "LV" => Ok(VoltageLevel::Bt),
            "MT" | "MEDIA" | "MÉDIA" | "MV" => Ok(VoltageLevel::Mt),
            "AT" | "ALTA" | "HV" => Ok(VoltageLevel::At),
            _ => Err(CalcError::invalid_input(
                "voltage_level",
                s,
                "Expected BT, MT or AT",
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            VoltageLevel::Bt => "Baixa Tensão (BT)",
            VoltageLevel::Mt => "Média Tensão (MT)",
            VoltageLevel::At => "Alta Tensão (AT)",
        }
    }
}

impl std::fmt::Display for VoltageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bt_limit_is_7pct() {
        assert_eq!(VoltageLevel::Bt.limit_pct(), 7.0);
    }

    #[test]
    fn test_mt_limit_is_5pct() {
        assert_eq!(VoltageLevel::Mt.limit_pct(), 5.0);
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!(VoltageLevel::from_str_flexible("bt").unwrap(), VoltageLevel::Bt);
        assert_eq!(VoltageLevel::from_str_flexible("MT").unwrap(), VoltageLevel::Mt);
        assert!(VoltageLevel::from_str_flexible("XT").is_err());
    }

    #[test]
    fn test_level_serde_codes() {
        let json = serde_json::to_string(&VoltageLevel::Bt).unwrap();
        assert_eq!(json, "\"BT\"");
        let roundtrip: VoltageLevel = serde_json::from_str("\"MT\"").unwrap();
        assert_eq!(roundtrip, VoltageLevel::Mt);
    }

    #[test]
    fn test_safety_factor_constant() {
        assert_eq!(POLE_SAFETY_FACTOR, 2.5);
    }

    #[test]
    fn test_dynamic_pressure_factor() {
        // q = ½ρV² with ρ = 1.225 kg/m³
        assert!((AIR_DENSITY_FACTOR - 0.5 * 1.225).abs() < 1e-3);
    }
}
