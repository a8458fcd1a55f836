//! # Slitting Plan Calculation
//!
//! Simulates slitting a wide "mother" roll into narrower "daughter"
//! rolls: how many full-width cuts fit, how much edge trim is wasted,
//! and — when a production order weight is given — how many meters must
//! run and how much of the mother roll that consumes.
//!
//! ## Assumptions
//!
//! - All daughter strips run simultaneously off the same mother pass,
//!   so order weight accumulates at `cut_count` strips per meter.
//! - The mother roll is consumed at its full width regardless of how
//!   the slit widths divide it; trim is waste, not savings.
//! - An order that needs more material than the mother roll holds is a
//!   valid, fully-computed result with a negative remaining weight,
//!   flagged rather than clamped.
//!
//! ## Example
//!
//! ```rust
//! use film_core::calculations::slitting::{plan, SlitInput};
//!
//! let input = SlitInput {
//!     mother_width_mm: Some(1400.0),
//!     mother_weight_kg: Some(1000.0),
//!     target_width_mm: Some(700.0),
//!     thickness_microns: 20.0,
//!     density_g_cm3: 0.91,
//!     target_order_weight_kg: Some(150.0),
//! };
//!
//! let result = plan(&input).unwrap().unwrap();
//! assert_eq!(result.cut_count, 2);
//! assert!(result.is_exact_fit);
//!
//! let production = result.production.unwrap();
//! assert_eq!(production.weight_per_roll_kg, 75.0);
//! assert!(production.is_feasible());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::weight_per_meter_kg;
use crate::errors::{CalcError, CalcResult};

/// Input parameters for a slitting plan.
///
/// Mother-roll fields and the target width are `Option` for the same
/// reason as [`LengthInput`](crate::calculations::length::LengthInput):
/// they mirror text inputs, and a blank field suppresses the result.
/// Thickness and density are plain values because they arrive from an
/// already-validated length calculation, not from free-form input.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mother_width_mm": 1400.0,
///   "mother_weight_kg": 1000.0,
///   "target_width_mm": 700.0,
///   "thickness_microns": 20.0,
///   "density_g_cm3": 0.91,
///   "target_order_weight_kg": 150.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlitInput {
    /// Width of the source roll in millimeters
    pub mother_width_mm: Option<f64>,

    /// Weight of the source roll in kilograms
    pub mother_weight_kg: Option<f64>,

    /// Width of each daughter roll in millimeters
    pub target_width_mm: Option<f64>,

    /// Film thickness in micrometers (from the validated length step)
    pub thickness_microns: f64,

    /// Film density in g/cm³ (from the validated length step)
    pub density_g_cm3: f64,

    /// Total weight ordered across all daughter rolls; `None` or ≤ 0
    /// means geometry only
    pub target_order_weight_kg: Option<f64>,
}

/// Production portion of a slitting plan, present only when an order
/// weight was given and at least one cut fits.
///
/// ## JSON Example
///
/// ```json
/// {
///   "meters_to_run": 5886.8,
///   "weight_per_roll_kg": 75.0,
///   "mother_consumption_kg": 150.0,
///   "mother_remaining_kg": 850.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionPlan {
    /// Meters of mother roll to run to fulfill the order
    pub meters_to_run: f64,

    /// Order weight split evenly across daughter rolls (kg)
    pub weight_per_roll_kg: f64,

    /// Mother-roll material consumed, at full mother width (kg)
    pub mother_consumption_kg: f64,

    /// Mother weight minus consumption (kg). Negative means the order
    /// cannot be fulfilled from this roll; the value is reported as
    /// computed, never clamped.
    pub mother_remaining_kg: f64,
}

impl ProductionPlan {
    /// True when the mother roll holds enough material for the order.
    pub fn is_feasible(&self) -> bool {
        self.mother_remaining_kg >= 0.0
    }
}

/// Results from the slitting plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlitResult {
    /// Whole daughter rolls the mother width yields. Zero when the
    /// target width exceeds the mother width - a computed answer,
    /// distinct from incomplete input.
    pub cut_count: u32,

    /// Leftover mother width not covered by any whole cut (mm)
    pub trim_waste_mm: f64,

    /// True when the cuts consume the mother width exactly
    pub is_exact_fit: bool,

    /// Production figures; present only when an order weight > 0 was
    /// given and `cut_count > 0`
    pub production: Option<ProductionPlan>,
}

/// Compute a slitting plan for a mother roll.
///
/// # Returns
///
/// * `Ok(Some(SlitResult))` - plan computed (possibly with zero cuts,
///   possibly with an infeasible production block)
/// * `Ok(None)` - incomplete input (mother width/weight or target
///   width missing, non-finite, or zero)
/// * `Err(CalcError)` - contract violation: negative input, or
///   non-positive thickness/density
///
/// # Example
///
/// ```rust
/// use film_core::calculations::slitting::{plan, SlitInput};
///
/// let input = SlitInput {
///     mother_width_mm: Some(1450.0),
///     mother_weight_kg: Some(800.0),
///     target_width_mm: Some(700.0),
///     thickness_microns: 20.0,
///     density_g_cm3: 0.91,
///     target_order_weight_kg: None,
/// };
///
/// let result = plan(&input).unwrap().unwrap();
/// assert_eq!(result.cut_count, 2);
/// assert_eq!(result.trim_waste_mm, 50.0);
/// assert!(result.production.is_none());
/// ```
pub fn plan(input: &SlitInput) -> CalcResult<Option<SlitResult>> {
    let (mother_width, mother_weight, target_width) = match (
        input.mother_width_mm,
        input.mother_weight_kg,
        input.target_width_mm,
    ) {
        (Some(w), Some(m), Some(t)) => (w, m, t),
        _ => return Ok(None),
    };

    if !mother_width.is_finite() || !mother_weight.is_finite() || !target_width.is_finite() {
        return Ok(None);
    }

    for (name, value) in [
        ("mother_width_mm", mother_width),
        ("mother_weight_kg", mother_weight),
        ("target_width_mm", target_width),
    ] {
        if value < 0.0 {
            return Err(CalcError::invalid_input(
                name,
                value.to_string(),
                "Value must not be negative",
            ));
        }
    }

    if mother_width == 0.0 || mother_weight == 0.0 || target_width == 0.0 {
        return Ok(None);
    }

    // Thickness and density come from the length step; zero or negative
    // here means the caller skipped that validation.
    for (name, value) in [
        ("thickness_microns", input.thickness_microns),
        ("density_g_cm3", input.density_g_cm3),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(CalcError::invalid_input(
                name,
                value.to_string(),
                "Value must be positive",
            ));
        }
    }

    // Integer floor division over reals: partial strips never count.
    let cut_count = (mother_width / target_width).floor() as u32;
    let trim_waste_mm = mother_width % target_width;
    let is_exact_fit = trim_waste_mm == 0.0;

    let order_weight = input.target_order_weight_kg.unwrap_or(0.0);
    let production = if order_weight > 0.0 && cut_count > 0 {
        let per_meter_one = weight_per_meter_kg(
            target_width,
            input.thickness_microns,
            input.density_g_cm3,
        );
        // All daughter strips run off the same pass, each adding its
        // own mass per meter.
        let per_meter_total = per_meter_one * cut_count as f64;
        let meters_to_run = order_weight / per_meter_total;
        let weight_per_roll_kg = order_weight / cut_count as f64;

        // Consumption is at full mother width: the mother unwinds whole
        // even when part of it becomes trim.
        let mother_consumption_kg = meters_to_run
            * weight_per_meter_kg(mother_width, input.thickness_microns, input.density_g_cm3);
        let mother_remaining_kg = mother_weight - mother_consumption_kg;

        Some(ProductionPlan {
            meters_to_run,
            weight_per_roll_kg,
            mother_consumption_kg,
            mother_remaining_kg,
        })
    } else {
        None
    };

    Ok(Some(SlitResult {
        cut_count,
        trim_waste_mm,
        is_exact_fit,
        production,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input() -> SlitInput {
        SlitInput {
            mother_width_mm: Some(1400.0),
            mother_weight_kg: Some(1000.0),
            target_width_mm: Some(700.0),
            thickness_microns: 20.0,
            density_g_cm3: 0.91,
            target_order_weight_kg: None,
        }
    }

    #[test]
    fn test_exact_fit_geometry() {
        let result = plan(&base_input()).unwrap().unwrap();
        assert_eq!(result.cut_count, 2);
        assert_eq!(result.trim_waste_mm, 0.0);
        assert!(result.is_exact_fit);
        assert!(result.production.is_none());
    }

    #[test]
    fn test_trim_waste_geometry() {
        let mut input = base_input();
        input.mother_width_mm = Some(1450.0);
        let result = plan(&input).unwrap().unwrap();
        assert_eq!(result.cut_count, 2);
        assert!((result.trim_waste_mm - 50.0).abs() < 1e-9);
        assert!(!result.is_exact_fit);
    }

    #[test]
    fn test_trim_always_less_than_target() {
        let widths = [333.0, 497.5, 700.0, 1399.9];
        for target in widths {
            let mut input = base_input();
            input.target_width_mm = Some(target);
            let result = plan(&input).unwrap().unwrap();
            assert!(result.trim_waste_mm >= 0.0);
            assert!(result.trim_waste_mm < target);
        }
    }

    #[test]
    fn test_incomplete_input_yields_none() {
        let mut input = base_input();
        input.target_width_mm = None;
        assert!(plan(&input).unwrap().is_none());

        let mut input = base_input();
        input.mother_weight_kg = Some(0.0);
        assert!(plan(&input).unwrap().is_none());

        let mut input = base_input();
        input.mother_width_mm = Some(f64::NAN);
        assert!(plan(&input).unwrap().is_none());
    }

    #[test]
    fn test_zero_cuts_is_a_result_not_none() {
        // Target wider than mother: computed answer with zero cuts,
        // distinct from the incomplete-input state.
        let mut input = base_input();
        input.target_width_mm = Some(1600.0);
        input.target_order_weight_kg = Some(150.0);
        let result = plan(&input).unwrap().unwrap();
        assert_eq!(result.cut_count, 0);
        assert_eq!(result.trim_waste_mm, 1400.0);
        assert!(!result.is_exact_fit);
        // No production block without at least one cut
        assert!(result.production.is_none());
    }

    #[test]
    fn test_production_reference_example() {
        let mut input = base_input();
        input.target_order_weight_kg = Some(150.0);
        let result = plan(&input).unwrap().unwrap();
        assert_eq!(result.cut_count, 2);

        let production = result.production.unwrap();
        // per-meter one daughter: (700 * 20 * 0.91) / 1e6 = 0.01274
        // total across 2 cuts: 0.02548; 150 / 0.02548 = 5886.97...
        assert!((production.meters_to_run - 150.0 / 0.02548).abs() < 1e-6);
        assert_eq!(production.weight_per_roll_kg, 75.0);
        // Mother is exactly 2x target width, so consumption equals the order
        assert!((production.mother_consumption_kg - 150.0).abs() < 1e-9);
        assert!((production.mother_remaining_kg - 850.0).abs() < 1e-9);
        assert!(production.is_feasible());
    }

    #[test]
    fn test_geometry_only_when_order_weight_absent_or_zero() {
        let mut input = base_input();
        input.target_order_weight_kg = Some(0.0);
        let result = plan(&input).unwrap().unwrap();
        assert!(result.production.is_none());

        input.target_order_weight_kg = Some(-5.0);
        let result = plan(&input).unwrap().unwrap();
        assert!(result.production.is_none());
    }

    #[test]
    fn test_infeasible_order_reports_negative_remainder() {
        let mut input = base_input();
        input.mother_weight_kg = Some(100.0);
        input.target_order_weight_kg = Some(150.0);
        let result = plan(&input).unwrap().unwrap();

        let production = result.production.unwrap();
        assert!(production.mother_consumption_kg > 100.0);
        assert!(production.mother_remaining_kg < 0.0);
        assert!(!production.is_feasible());
        // Not clamped: remainder mirrors the overdraw exactly
        assert!(
            (production.mother_remaining_kg - (100.0 - production.mother_consumption_kg)).abs()
                < 1e-12
        );
    }

    #[test]
    fn test_consumption_uses_mother_width() {
        // 1450 mm mother with 700 mm cuts: consumption runs at 1450 mm,
        // so trim makes the order cost more mother material than the
        // daughters weigh.
        let mut input = base_input();
        input.mother_width_mm = Some(1450.0);
        input.target_order_weight_kg = Some(150.0);
        let result = plan(&input).unwrap().unwrap();

        let production = result.production.unwrap();
        assert!(production.mother_consumption_kg > 150.0);
    }

    #[test]
    fn test_negative_input_is_error() {
        let mut input = base_input();
        input.target_width_mm = Some(-700.0);
        let err = plan(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_unvalidated_thickness_is_error() {
        let mut input = base_input();
        input.thickness_microns = 0.0;
        assert!(plan(&input).is_err());

        let mut input = base_input();
        input.density_g_cm3 = -0.91;
        assert!(plan(&input).is_err());
    }

    #[test]
    fn test_idempotence() {
        let mut input = base_input();
        input.target_order_weight_kg = Some(150.0);
        let a = plan(&input).unwrap().unwrap();
        let b = plan(&input).unwrap().unwrap();
        assert_eq!(a, b);
        let (pa, pb) = (a.production.unwrap(), b.production.unwrap());
        assert_eq!(pa.meters_to_run.to_bits(), pb.meters_to_run.to_bits());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut input = base_input();
        input.target_order_weight_kg = Some(150.0);
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: SlitInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);

        let result = plan(&input).unwrap().unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("cut_count"));
        assert!(json.contains("mother_remaining_kg"));
        let roundtrip: SlitResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
