//! # grid_core - Electrical Distribution Calculation Engine
//!
//! `grid_core` is the computational heart of Gridline, providing the
//! distribution-network engineering calculations with a clean, LLM-friendly
//! API. All inputs and outputs are JSON-serializable, making it ideal for
//! use behind an HTTP layer or for integration with AI assistants.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Auditable**: Regulatory limits and datasheet values are literals,
//!   traceable to the cited ABNT standards
//!
//! ## Quick Start
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
//! assert!(result.drop_v > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Voltage drop and pole loading calculations
//! - [`conductors`] - Conductor resistance/reactance database
//! - [`standards`] - Regulatory limits and physical constants
//! - [`geo`] - Haversine distance and coordinate helpers
//! - [`units`] - Type-safe SI unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod conductors;
pub mod errors;
pub mod geo;
pub mod standards;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    MechanicalStressInput, MechanicalStressResult, VoltageDropInput, VoltageDropResult,
};
pub use conductors::{ConductorProperties, ConductorType};
pub use errors::{CalcError, CalcResult};
pub use geo::{haversine_distance, GeoPoint};
pub use standards::VoltageLevel;
