//! # Unit Types
//!
//! Type-safe wrappers for the SI units used across the distribution
//! calculations. These provide compile-time safety against unit confusion
//! while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Distribution engineering here uses a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Units (Primary)
//!
//! Gridline uses SI units internally, matching the ABNT standards the
//! calculations implement:
//! - Length: meters (m), kilometers (km), millimeters (mm)
//! - Force: newtons (N), kilonewtons (kN)
//! - Moment: newton-meters (N·m)
//! - Electrical: volts (V), amperes (A)
//!
//! ## Example
//!
//! ```rust
//! use grid_core::units::{Meters, Kilometers, Newtons};
//!
//! let span = Meters(500.0);
//! let span_km: Kilometers = span.into();
//! assert_eq!(span_km.0, 0.5);
//!
//! let pull = Newtons(5000.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in kilometers
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilometers(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Kilometers {
    fn from(m: Meters) -> Self {
        Kilometers(m.0 / 1000.0)
    }
}

impl From<Kilometers> for Meters {
    fn from(km: Kilometers) -> Self {
        Meters(km.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons (1 kN = 1000 N)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

impl From<Newtons> for KiloNewtons {
    fn from(n: Newtons) -> Self {
        KiloNewtons(n.0 / 1000.0)
    }
}

impl From<KiloNewtons> for Newtons {
    fn from(kn: KiloNewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in newton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMeters(pub f64);

// ============================================================================
// Electrical Units
// ============================================================================

/// Electrical potential in volts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volts(pub f64);

/// Electrical current in amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amperes(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Kilometers);
impl_arithmetic!(Millimeters);
impl_arithmetic!(Newtons);
impl_arithmetic!(KiloNewtons);
impl_arithmetic!(NewtonMeters);
impl_arithmetic!(Volts);
impl_arithmetic!(Amperes);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_kilometers() {
        let m = Meters(500.0);
        let km: Kilometers = m.into();
        assert_eq!(km.0, 0.5);
    }

    #[test]
    fn test_millimeters_to_meters() {
        let mm = Millimeters(14.4);
        let m: Meters = mm.into();
        assert_eq!(m.0, 0.0144);
    }

    #[test]
    fn test_kilonewtons_to_newtons() {
        let kn = KiloNewtons(1.5);
        let n: Newtons = kn.into();
        assert_eq!(n.0, 1500.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(10.0);
        let b = Meters(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let v = Volts(220.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "220.0");

        let roundtrip: Volts = serde_json::from_str(&json).unwrap();
        assert_eq!(v, roundtrip);
    }
}
