//! # Conductor Database
//!
//! Electrical properties for overhead distribution conductors: resistance
//! and reactance per kilometer, keyed by conductor type and cross-section.
//!
//! Values are fixed literals from ABNT NBR 5410 and manufacturer datasheets,
//! kept enumerated (not computed) so they stay auditable against the source
//! tables. Intermediate cross-sections within the tabulated range are
//! linearly interpolated; sections outside the range are an error.
//!
//! ## Example
//!
//! ```rust
//! use grid_core::conductors::{ConductorType, ConductorProperties};
//!
//! let props = ConductorProperties::lookup(ConductorType::Ca, 50.0).unwrap();
//! assert_eq!(props.resistance_ohm_km, 0.641);
//! assert_eq!(props.reactance_ohm_km, 0.300);
//! ```

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Overhead conductor types supported by the database
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConductorType {
    /// Cabo de alumínio (all-aluminium conductor)
    #[serde(rename = "CA")]
    Ca,
    /// Cabo de alumínio com alma de aço (aluminium conductor, steel core)
    #[serde(rename = "CAA")]
    Caa,
    /// Aluminium conductor steel reinforced (international designation)
    #[serde(rename = "ACSR")]
    Acsr,
}

impl ConductorType {
    /// All conductor type variants for UI selection
    pub const ALL: [ConductorType; 3] =
        [ConductorType::Ca, ConductorType::Caa, ConductorType::Acsr];

    /// Get the code string (e.g., "CA", "CAA")
    pub fn code(&self) -> &'static str {
        match self {
            ConductorType::Ca => "CA",
            ConductorType::Caa => "CAA",
            ConductorType::Acsr => "ACSR",
        }
    }

    /// Parse from common string representations (case-insensitive)
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "CA" => Ok(ConductorType::Ca),
            "CAA" => Ok(ConductorType::Caa),
            "ACSR" => Ok(ConductorType::Acsr),
            _ => Err(CalcError::conductor_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ConductorType::Ca => "CA (alumínio)",
            ConductorType::Caa => "CAA (alumínio com alma de aço)",
            ConductorType::Acsr => "ACSR",
        }
    }
}

impl std::fmt::Display for ConductorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Standard tabulated cross-sections (mm²), in increasing order
pub const STANDARD_SECTIONS_MM2: [f64; 10] =
    [16.0, 25.0, 35.0, 50.0, 70.0, 95.0, 120.0, 150.0, 185.0, 240.0];

/// Per-kilometer electrical properties of a conductor.
///
/// ## JSON Example
///
/// ```json
/// {
///   "resistance_ohm_km": 0.641,
///   "reactance_ohm_km": 0.300
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConductorProperties {
    /// Resistance (Ω/km)
    pub resistance_ohm_km: f64,
    /// Reactance (Ω/km)
    pub reactance_ohm_km: f64,
}

// Rows are (cross-section mm², R Ω/km, X Ω/km), sorted by section.
// CAA and ACSR carry the same datasheet values under both designations.
const CA_ROWS: [(f64, f64, f64); 10] = [
    (16.0, 1.915, 0.335),
    (25.0, 1.200, 0.320),
    (35.0, 0.868, 0.310),
    (50.0, 0.641, 0.300),
    (70.0, 0.443, 0.290),
    (95.0, 0.320, 0.280),
    (120.0, 0.253, 0.275),
    (150.0, 0.206, 0.270),
    (185.0, 0.164, 0.265),
    (240.0, 0.125, 0.260),
];

const CAA_ROWS: [(f64, f64, f64); 10] = [
    (16.0, 1.900, 0.340),
    (25.0, 1.190, 0.325),
    (35.0, 0.860, 0.315),
    (50.0, 0.630, 0.305),
    (70.0, 0.435, 0.295),
    (95.0, 0.315, 0.285),
    (120.0, 0.248, 0.278),
    (150.0, 0.200, 0.272),
    (185.0, 0.160, 0.268),
    (240.0, 0.122, 0.262),
];

static CONDUCTOR_TABLE: Lazy<BTreeMap<ConductorType, &'static [(f64, f64, f64)]>> =
    Lazy::new(|| {
        let mut table: BTreeMap<ConductorType, &'static [(f64, f64, f64)]> = BTreeMap::new();
        table.insert(ConductorType::Ca, &CA_ROWS);
        table.insert(ConductorType::Caa, &CAA_ROWS);
        table.insert(ConductorType::Acsr, &CAA_ROWS);
        table
    });

impl ConductorProperties {
    /// Look up (R, X) for a conductor type and cross-section.
    ///
    /// Exact tabulated sections return the literal datasheet values.
    /// Intermediate sections are linearly interpolated between the two
    /// adjacent tabulated rows. Sections outside the tabulated range
    /// return [`CalcError::SectionOutOfRange`].
    pub fn lookup(conductor_type: ConductorType, cross_section_mm2: f64) -> CalcResult<Self> {
        let rows = CONDUCTOR_TABLE
            .get(&conductor_type)
            .ok_or_else(|| CalcError::conductor_not_found(conductor_type.code()))?;

        if let Some(&(_, r, x)) = rows.iter().find(|(s, _, _)| *s == cross_section_mm2) {
            return Ok(ConductorProperties {
                resistance_ohm_km: r,
                reactance_ohm_km: x,
            });
        }

        let (min, _, _) = rows[0];
        let (max, _, _) = rows[rows.len() - 1];
        if cross_section_mm2 < min || cross_section_mm2 > max {
            return Err(CalcError::section_out_of_range(
                conductor_type.code(),
                cross_section_mm2,
                min,
                max,
            ));
        }

        for pair in rows.windows(2) {
            let (s_lo, r_lo, x_lo) = pair[0];
            let (s_hi, r_hi, x_hi) = pair[1];
            if s_lo <= cross_section_mm2 && cross_section_mm2 <= s_hi {
                let t = (cross_section_mm2 - s_lo) / (s_hi - s_lo);
                return Ok(ConductorProperties {
                    resistance_ohm_km: r_lo + t * (r_hi - r_lo),
                    reactance_ohm_km: x_lo + t * (x_hi - x_lo),
                });
            }
        }

        Err(CalcError::Internal {
            message: format!("interpolation failed for section {cross_section_mm2} mm²"),
        })
    }
}
