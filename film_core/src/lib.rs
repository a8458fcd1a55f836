//! # film_core - Film Roll Calculation Engine
//!
//! `film_core` is the computational heart of FilmCalc, converting the
//! physical description of a flexible-packaging film roll (BOPP, PET,
//! PE, PP) into linear meters of film, and planning the slitting of a
//! mother roll into narrower daughter rolls. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Incomplete is not an error**: blank or zero inputs yield an
//!   absent result (`Ok(None)`), never a failure
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types for contract violations
//!
//! ## Quick Start
//!
//! ```rust
//! use film_core::calculations::length::{calculate, LengthInput};
//! use film_core::materials::FilmMaterial;
//!
//! let input = LengthInput {
//!     material: FilmMaterial::Bopp,
//!     thickness_microns: Some(20.0),
//!     width_mm: Some(1000.0),
//!     weight_kg: Some(500.0),
//! };
//!
//! let result = calculate(&input).unwrap().unwrap();
//! println!("{:.0} meters of film", result.length_meters);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Length and slitting calculations
//! - [`materials`] - The film material catalog
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{LengthInput, LengthResult, ProductionPlan, SlitInput, SlitResult};
pub use errors::{CalcError, CalcResult};
pub use materials::FilmMaterial;
