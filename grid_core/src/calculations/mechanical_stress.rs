//! # Pole Mechanical Stress Calculation
//!
//! Evaluates the combined wind, weight and tension loads on a distribution
//! pole per ABNT NBR 8458/8798, and the resulting bending moment at the
//! base.
//!
//! ## Load Model
//!
//! ```text
//! q  = 0.613 × V²                 dynamic wind pressure (Pa)
//! Fw = 1.2 × q × d × L            wind load per conductor (N)
//! Wc = (w / 1000) × g × L         weight load per conductor (N)
//! H  = √(Fw² + T²) × n            total horizontal force (N)
//! M  = H × h_attach               bending moment at base (N·m)
//! ```
//!
//! The required safety factor (2.5) is the standard-mandated minimum and
//! is reported alongside the loads, not derived from them.
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use grid_core::calculations::mechanical_stress::{MechanicalStressInput, calculate};
//!
//! let input = MechanicalStressInput {
//!     label: "P-42".to_string(),
//!     wind_speed_m_s: 25.0,
//!     conductor_diameter_mm: 14.4,
//!     span_length_m: 60.0,
//!     conductor_weight_kg_km: 407.0,
//!     conductor_tension_n: 5000.0,
//!     pole_height_m: 11.0,
//!     attachment_height_m: 10.0,
//!     num_conductors: 3,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("M = {:.0} N·m", result.moment_nm);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::standards::{
    nbr_ref, AIR_DENSITY_FACTOR, DRAG_COEFF_CONDUCTOR, GRAVITY_M_S2, POLE_SAFETY_FACTOR,
};
use crate::units::{Meters, Millimeters};

/// Input parameters for a pole loading check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "P-42",
///   "wind_speed_m_s": 25.0,
///   "conductor_diameter_mm": 14.4,
///   "span_length_m": 60.0,
///   "conductor_weight_kg_km": 407.0,
///   "conductor_tension_n": 5000.0,
///   "pole_height_m": 11.0,
///   "attachment_height_m": 10.0,
///   "num_conductors": 3
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MechanicalStressInput {
    /// User label for this pole (e.g., "P-42")
    pub label: String,

    /// Design wind speed in m/s
    pub wind_speed_m_s: f64,

    /// Conductor outer diameter in mm
    pub conductor_diameter_mm: f64,

    /// Wind span (half-sum of adjacent spans) in meters
    pub span_length_m: f64,

    /// Conductor linear weight in kg/km
    pub conductor_weight_kg_km: f64,

    /// Mechanical tension in the conductor at the attachment point, in N
    pub conductor_tension_n: f64,

    /// Total pole height in meters
    pub pole_height_m: f64,

    /// Height of the conductor attachment point above ground, in meters
    pub attachment_height_m: f64,

    /// Number of conductors carried by the pole
    pub num_conductors: u32,
}

impl MechanicalStressInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.wind_speed_m_s <= 0.0 {
            return Err(CalcError::invalid_input(
                "wind_speed_m_s",
                self.wind_speed_m_s.to_string(),
                "Wind speed must be positive",
            ));
        }
        if self.conductor_diameter_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "conductor_diameter_mm",
                self.conductor_diameter_mm.to_string(),
                "Conductor diameter must be positive",
            ));
        }
        if self.span_length_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "span_length_m",
                self.span_length_m.to_string(),
                "Span must be positive",
            ));
        }
        if self.conductor_weight_kg_km <= 0.0 {
            return Err(CalcError::invalid_input(
                "conductor_weight_kg_km",
                self.conductor_weight_kg_km.to_string(),
                "Conductor weight must be positive",
            ));
        }
        if self.conductor_tension_n <= 0.0 {
            return Err(CalcError::invalid_input(
                "conductor_tension_n",
                self.conductor_tension_n.to_string(),
                "Conductor tension must be positive",
            ));
        }
        if self.pole_height_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "pole_height_m",
                self.pole_height_m.to_string(),
                "Pole height must be positive",
            ));
        }
        if self.attachment_height_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "attachment_height_m",
                self.attachment_height_m.to_string(),
                "Attachment height must be positive",
            ));
        }
        if self.attachment_height_m > self.pole_height_m {
            return Err(CalcError::invalid_input(
                "attachment_height_m",
                self.attachment_height_m.to_string(),
                "Attachment height cannot exceed pole height",
            ));
        }
        if self.num_conductors < 1 {
            return Err(CalcError::invalid_input(
                "num_conductors",
                self.num_conductors.to_string(),
                "At least one conductor is required",
            ));
        }
        Ok(())
    }
}

/// Results from a pole loading check. All forces in newtons, moment in N·m.
///
/// ## JSON Example
///
/// ```json
/// {
///   "wind_load_per_conductor_n": 397.0,
///   "weight_load_per_conductor_n": 239.5,
///   "tension_load_n": 5000.0,
///   "total_resultant_n": 15082.3,
///   "moment_nm": 150475.4,
///   "safety_factor_required": 2.5,
///   "standard": "ABNT NBR 8458/8798"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MechanicalStressResult {
    /// Wind load per conductor (N), acting horizontally
    pub wind_load_per_conductor_n: f64,

    /// Weight load per conductor (N), acting vertically
    pub weight_load_per_conductor_n: f64,

    /// Horizontal pull from conductor tension (N)
    pub tension_load_n: f64,

    /// Vector resultant of all conductor loads on the pole (N)
    pub total_resultant_n: f64,

    /// Bending moment at the pole base (N·m)
    pub moment_nm: f64,

    /// Minimum safety factor mandated by the standard
    pub safety_factor_required: f64,

    /// The standard governing this check
    pub standard: String,
}

/// Calculate pole loading per NBR 8458/8798.
///
/// At a dead-end or angle pole the resultant tension is the cable tension
/// itself; the horizontal pull at the attachment is modeled as the given
/// tension.
pub fn calculate(input: &MechanicalStressInput) -> CalcResult<MechanicalStressResult> {
    input.validate()?;

    // Dynamic wind pressure (Pa)
    let q = AIR_DENSITY_FACTOR * input.wind_speed_m_s * input.wind_speed_m_s;

    let diameter: Meters = Millimeters(input.conductor_diameter_mm).into();

    // Wind load per conductor (N)
    let wind = DRAG_COEFF_CONDUCTOR * q * diameter.value() * input.span_length_m;

    // Weight load per conductor (N)
    let weight_n_per_m = input.conductor_weight_kg_km / 1000.0 * GRAVITY_M_S2;
    let weight = weight_n_per_m * input.span_length_m;

    let tension = input.conductor_tension_n;
    let n = f64::from(input.num_conductors);

    // Wind and tension are orthogonal horizontal components at the attachment
    let horizontal_per_conductor = (wind * wind + tension * tension).sqrt();
    let total_horizontal = horizontal_per_conductor * n;
    let total_vertical = weight * n;

    let total_resultant =
        (total_horizontal * total_horizontal + total_vertical * total_vertical).sqrt();

    // Horizontal loads govern bending at the base
    let moment_nm = total_horizontal * input.attachment_height_m;

    Ok(MechanicalStressResult {
        wind_load_per_conductor_n: wind,
        weight_load_per_conductor_n: weight,
        tension_load_n: tension,
        total_resultant_n: total_resultant,
        moment_nm,
        safety_factor_required: POLE_SAFETY_FACTOR,
        standard: nbr_ref::POLE_LOADING.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input() -> MechanicalStressInput {
        MechanicalStressInput {
            label: "test".to_string(),
            wind_speed_m_s: 25.0,
            conductor_diameter_mm: 14.4,
            span_length_m: 60.0,
            conductor_weight_kg_km: 407.0,
            conductor_tension_n: 5000.0,
            pole_height_m: 11.0,
            attachment_height_m: 10.0,
            num_conductors: 3,
        }
    }

    #[test]
    fn test_all_outputs_positive() {
        let result = calculate(&base_input()).unwrap();
        assert!(result.wind_load_per_conductor_n > 0.0);
        assert!(result.weight_load_per_conductor_n > 0.0);
        assert!(result.tension_load_n > 0.0);
        assert!(result.total_resultant_n > 0.0);
        assert!(result.moment_nm > 0.0);
    }

    #[test]
    fn test_wind_load_formula() {
        // Fw = 1.2 × (0.613 × V²) × d × L
        let result = calculate(&base_input()).unwrap();
        let q = 0.613 * 25.0 * 25.0;
        let expected = 1.2 * q * 0.0144 * 60.0;
        assert!((result.wind_load_per_conductor_n - expected).abs() < 1e-9);
    }

    #[test]
    fn test_weight_load_formula() {
        // Wc = (w / 1000) × g × L
        let result = calculate(&base_input()).unwrap();
        let expected = 407.0 / 1000.0 * 9.80665 * 60.0;
        assert!((result.weight_load_per_conductor_n - expected).abs() < 1e-9);
    }

    #[test]
    fn test_tension_passes_through() {
        let result = calculate(&base_input()).unwrap();
        assert_eq!(result.tension_load_n, 5000.0);
    }

    #[test]
    fn test_moment_scales_with_attachment_height() {
        let full = calculate(&base_input()).unwrap();
        let half = calculate(&MechanicalStressInput {
            attachment_height_m: 5.0,
            ..base_input()
        })
        .unwrap();
        assert!((full.moment_nm - 2.0 * half.moment_nm).abs() < 1e-6);
    }

    #[test]
    fn test_more_conductors_higher_resultant() {
        let three = calculate(&base_input()).unwrap();
        let one = calculate(&MechanicalStressInput {
            num_conductors: 1,
            ..base_input()
        })
        .unwrap();
        assert!(three.total_resultant_n > one.total_resultant_n);
    }

    #[test]
    fn test_higher_wind_higher_load() {
        let low = calculate(&MechanicalStressInput {
            wind_speed_m_s: 10.0,
            ..base_input()
        })
        .unwrap();
        let high = calculate(&MechanicalStressInput {
            wind_speed_m_s: 40.0,
            ..base_input()
        })
        .unwrap();
        assert!(high.wind_load_per_conductor_n > low.wind_load_per_conductor_n);
    }

    #[test]
    fn test_safety_factor_is_constant() {
        let small = calculate(&MechanicalStressInput {
            wind_speed_m_s: 1.0,
            conductor_tension_n: 10.0,
            ..base_input()
        })
        .unwrap();
        let large = calculate(&MechanicalStressInput {
            wind_speed_m_s: 50.0,
            conductor_tension_n: 50_000.0,
            ..base_input()
        })
        .unwrap();
        assert_eq!(small.safety_factor_required, 2.5);
        assert_eq!(large.safety_factor_required, 2.5);
    }

    #[test]
    fn test_standard_label() {
        let result = calculate(&base_input()).unwrap();
        assert_eq!(result.standard, "ABNT NBR 8458/8798");
    }

    #[test]
    fn test_resultant_combines_components() {
        let result = calculate(&base_input()).unwrap();
        let n = 3.0;
        let h = (result.wind_load_per_conductor_n.powi(2)
            + result.tension_load_n.powi(2))
        .sqrt()
            * n;
        let v = result.weight_load_per_conductor_n * n;
        let expected = (h * h + v * v).sqrt();
        assert!((result.total_resultant_n - expected).abs() < 1e-6);
    }

    #[test]
    fn test_attachment_above_pole_rejected() {
        let err = calculate(&MechanicalStressInput {
            attachment_height_m: 12.0,
            ..base_input()
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_zero_conductors_rejected() {
        assert!(calculate(&MechanicalStressInput {
            num_conductors: 0,
            ..base_input()
        })
        .is_err());
    }

    #[test]
    fn test_non_positive_dimensions_rejected() {
        assert!(calculate(&MechanicalStressInput {
            wind_speed_m_s: 0.0,
            ..base_input()
        })
        .is_err());
        assert!(calculate(&MechanicalStressInput {
            span_length_m: -1.0,
            ..base_input()
        })
        .is_err());
        assert!(calculate(&MechanicalStressInput {
            conductor_diameter_mm: 0.0,
            ..base_input()
        })
        .is_err());
    }

    #[test]
    fn test_result_serde_roundtrip() {
        let result = calculate(&base_input()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: MechanicalStressResult = serde_json::from_str(&json).unwrap();
        assert!((result.moment_nm - roundtrip.moment_nm).abs() < 1e-9);
        assert_eq!(roundtrip.safety_factor_required, 2.5);
    }
}
