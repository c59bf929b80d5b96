//! # Voltage Drop Calculation
//!
//! Evaluates the voltage drop along a conductor run per ABNT NBR 5410 and
//! classifies compliance against the regulatory limit for the voltage level.
//!
//! ## Formula
//!
//! ```text
//! 3-phase: ΔV = √3 × I × L_km × (R·cosφ + X·sinφ)
//! 1-phase: ΔV = 2  × I × L_km × (R·cosφ + X·sinφ)
//! ΔV%     = (ΔV / Vn) × 100
//! ```
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use grid_core::calculations::voltage_drop::{VoltageDropInput, calculate};
//! use grid_core::conductors::ConductorType;
//! use grid_core::standards::VoltageLevel;
//!
//! let input = VoltageDropInput {
//!     label: "Trecho A-B".to_string(),
//!     current_a: 100.0,
//!     length_m: 500.0,
//!     conductor_type: ConductorType::Ca,
//!     cross_section_mm2: 50.0,
//!     power_factor: 0.92,
//!     phases: 3,
//!     nominal_voltage_v: 220.0,
//!     voltage_level: VoltageLevel::Bt,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("ΔV = {:.2} V ({:.2} %)", result.drop_v, result.drop_pct);
//! println!("Compliant: {}", result.compliant);
//! ```

use serde::{Deserialize, Serialize};

use crate::conductors::{ConductorProperties, ConductorType};
use crate::errors::{CalcError, CalcResult};
use crate::standards::VoltageLevel;
use crate::units::{Kilometers, Meters};

/// Input parameters for a voltage drop check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Trecho A-B",
///   "current_a": 100.0,
///   "length_m": 500.0,
///   "conductor_type": "CA",
///   "cross_section_mm2": 50.0,
///   "power_factor": 0.92,
///   "phases": 3,
///   "nominal_voltage_v": 220.0,
///   "voltage_level": "BT"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoltageDropInput {
    /// User label for this run (e.g., "Trecho A-B")
    pub label: String,

    /// Load current in amperes
    pub current_a: f64,

    /// Run length in meters (zero is allowed and yields zero drop)
    pub length_m: f64,

    /// Conductor type (CA, CAA, ACSR)
    pub conductor_type: ConductorType,

    /// Conductor cross-section in mm²
    pub cross_section_mm2: f64,

    /// Power factor cosφ, between 0 and 1
    pub power_factor: f64,

    /// Number of phases: 1 or 3
    pub phases: u8,

    /// Nominal voltage in volts
    pub nominal_voltage_v: f64,

    /// Voltage level determining the regulatory drop limit
    pub voltage_level: VoltageLevel,
}

impl VoltageDropInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.current_a <= 0.0 {
            return Err(CalcError::invalid_input(
                "current_a",
                self.current_a.to_string(),
                "Current must be positive",
            ));
        }
        if self.length_m < 0.0 {
            return Err(CalcError::invalid_input(
                "length_m",
                self.length_m.to_string(),
                "Length cannot be negative",
            ));
        }
        if !(0.0..=1.0).contains(&self.power_factor) {
            return Err(CalcError::invalid_input(
                "power_factor",
                self.power_factor.to_string(),
                "Power factor must be between 0 and 1",
            ));
        }
        if self.phases != 1 && self.phases != 3 {
            return Err(CalcError::invalid_input(
                "phases",
                self.phases.to_string(),
                "Phases must be 1 or 3",
            ));
        }
        if self.nominal_voltage_v <= 0.0 {
            return Err(CalcError::invalid_input(
                "nominal_voltage_v",
                self.nominal_voltage_v.to_string(),
                "Nominal voltage must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from a voltage drop check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "drop_v": 64.84,
///   "drop_pct": 29.47,
///   "limit_pct": 7.0,
///   "compliant": false,
///   "resistance_ohm_km": 0.641,
///   "reactance_ohm_km": 0.300,
///   "standard": "ABNT NBR 5410"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoltageDropResult {
    /// Absolute voltage drop (V)
    pub drop_v: f64,

    /// Voltage drop as a percentage of nominal voltage
    pub drop_pct: f64,

    /// Regulatory limit (%) for the requested voltage level
    pub limit_pct: f64,

    /// Whether the drop is within the regulatory limit
    pub compliant: bool,

    /// Conductor resistance used (Ω/km)
    pub resistance_ohm_km: f64,

    /// Conductor reactance used (Ω/km)
    pub reactance_ohm_km: f64,

    /// The standard governing the limit
    pub standard: String,
}

/// Calculate voltage drop and compliance.
///
/// Fails with a lookup error if the conductor cross-section is outside the
/// tabulated range, or with `InvalidInput` for out-of-domain parameters.
pub fn calculate(input: &VoltageDropInput) -> CalcResult<VoltageDropResult> {
    input.validate()?;

    let props = ConductorProperties::lookup(input.conductor_type, input.cross_section_mm2)?;

    let cos_phi = input.power_factor;
    // Clamp guards against cosφ = 1 plus floating error
    let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();

    let phase_factor = if input.phases == 3 { 3.0_f64.sqrt() } else { 2.0 };

    let length_km: Kilometers = Meters(input.length_m).into();
    let impedance_factor =
        props.resistance_ohm_km * cos_phi + props.reactance_ohm_km * sin_phi;

    let drop_v = phase_factor * input.current_a * length_km.value() * impedance_factor;
    let drop_pct = drop_v / input.nominal_voltage_v * 100.0;
    let limit_pct = input.voltage_level.limit_pct();

    Ok(VoltageDropResult {
        drop_v,
        drop_pct,
        limit_pct,
        compliant: drop_pct <= limit_pct,
        resistance_ohm_km: props.resistance_ohm_km,
        reactance_ohm_km: props.reactance_ohm_km,
        standard: input.voltage_level.standard().to_string(),
    })
}
