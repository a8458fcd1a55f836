//! # Film Roll Calculations
//!
//! This module contains the roll calculation types. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - A pure function returning `CalcResult<Option<*Result>>`
//!
//! The `Option` layer encodes "incomplete input": fields the user has
//! not filled in (or typed something unparseable into) arrive as `None`,
//! and any missing or zero-valued field makes the whole calculation
//! yield `Ok(None)` rather than an error. The caller renders that as a
//! neutral empty state. `Err` is reserved for contract violations such
//! as an off-catalog thickness.
//!
//! ## Available Calculations
//!
//! - [`length`] - Linear meters of film on a roll
//! - [`slitting`] - Mother-roll slitting plan (cut count, trim, production)

pub mod length;
pub mod slitting;

// Re-export commonly used types
pub use length::{LengthInput, LengthResult};
pub use slitting::{ProductionPlan, SlitInput, SlitResult};

/// Unit-reconciliation constant: mm · µm · (g/cm³) → kg/m needs a
/// division by 1e6 (equivalently, kg → g is ×1000 and the remaining
/// geometric factors contribute another 1000).
pub(crate) const UNIT_FACTOR: f64 = 1_000_000.0;

/// Mass of one linear meter of film, in kilograms.
///
/// This is the single formula both calculations are built on: the
/// length calculation divides roll weight by it, and the slitting plan
/// multiplies meters by it (at daughter and mother widths).
pub fn weight_per_meter_kg(width_mm: f64, thickness_microns: f64, density_g_cm3: f64) -> f64 {
    (width_mm * thickness_microns * density_g_cm3) / UNIT_FACTOR
}
