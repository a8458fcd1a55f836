//! # Roll Length Calculation
//!
//! Converts a film roll's physical description (material, thickness,
//! width, weight) into linear meters of film on the roll.
//!
//! ## Formula
//!
//! ```text
//! length (m) = weight (kg) × 1,000,000 / (width (mm) × thickness (µm) × density (g/cm³))
//! ```
//!
//! Weight in kg becomes grams via ×1000; dividing by the cross-section
//! mass per unit length and reconciling mm · µm · g/cm³ into meters
//! contributes the rest of the 1e6 factor. The engine never rounds;
//! rounding to whole meters is a display concern.
//!
//! ## Example
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
//! assert!((result.length_meters - 27_472.527).abs() < 0.001);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::UNIT_FACTOR;
use crate::errors::{CalcError, CalcResult};
use crate::materials::FilmMaterial;

/// Input parameters for the roll length calculation.
///
/// The numeric fields are `Option` because they mirror free-form text
/// inputs: a blank or unparseable field is `None`. Any `None` (or zero)
/// field makes the calculation report "no result" instead of failing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "material": "BOPP",
///   "thickness_microns": 20.0,
///   "width_mm": 1000.0,
///   "weight_kg": 500.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthInput {
    /// Film material (selects density and the allowed thickness list)
    pub material: FilmMaterial,

    /// Film thickness in micrometers; must be in the material's catalog
    pub thickness_microns: Option<f64>,

    /// Roll width in millimeters
    pub width_mm: Option<f64>,

    /// Roll weight in kilograms
    pub weight_kg: Option<f64>,
}

impl LengthInput {
    /// Create an empty input for a material, thickness preselected to
    /// the material's default gauge.
    pub fn new(material: FilmMaterial) -> Self {
        LengthInput {
            material,
            thickness_microns: Some(material.default_thickness_microns()),
            width_mm: None,
            weight_kg: None,
        }
    }

    /// True when every field is present, finite, and nonzero.
    pub fn is_complete(&self) -> bool {
        [self.thickness_microns, self.width_mm, self.weight_kg]
            .iter()
            .all(|v| matches!(v, Some(x) if x.is_finite() && *x != 0.0))
    }
}

/// Results from the length calculation.
///
/// Echoes the material and its density so the caller can display them
/// alongside the length without another catalog lookup.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_meters": 27472.527472527472,
///   "material": "BOPP",
///   "density_g_cm3": 0.91
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthResult {
    /// Linear meters of film on the roll (unrounded)
    pub length_meters: f64,

    /// Material the calculation used
    pub material: FilmMaterial,

    /// Density the calculation used (g/cm³)
    pub density_g_cm3: f64,
}

/// Calculate linear meters of film on a roll.
///
/// # Returns
///
/// * `Ok(Some(LengthResult))` - all inputs present and valid
/// * `Ok(None)` - incomplete input (a field is missing, non-finite, or
///   zero); the caller renders an empty state
/// * `Err(CalcError)` - contract violation: negative value, or a
///   thickness outside the material's catalog
///
/// # Example
///
/// ```rust
/// use film_core::calculations::length::{calculate, LengthInput};
/// use film_core::materials::FilmMaterial;
///
/// let mut input = LengthInput::new(FilmMaterial::Pet);
/// assert!(calculate(&input).unwrap().is_none()); // width/weight missing
///
/// input.width_mm = Some(800.0);
/// input.weight_kg = Some(250.0);
/// let result = calculate(&input).unwrap().unwrap();
/// assert!(result.length_meters > 0.0);
/// ```
pub fn calculate(input: &LengthInput) -> CalcResult<Option<LengthResult>> {
    let (thickness, width, weight) = match (input.thickness_microns, input.width_mm, input.weight_kg)
    {
        (Some(t), Some(w), Some(m)) => (t, w, m),
        _ => return Ok(None),
    };

    // Non-finite values come from degenerate parses; treat like blanks.
    if !thickness.is_finite() || !width.is_finite() || !weight.is_finite() {
        return Ok(None);
    }

    for (name, value) in [
        ("thickness_microns", thickness),
        ("width_mm", width),
        ("weight_kg", weight),
    ] {
        if value < 0.0 {
            return Err(CalcError::invalid_input(
                name,
                value.to_string(),
                "Value must not be negative",
            ));
        }
    }

    // Zero anywhere means "not filled in yet", not an error.
    if thickness == 0.0 || width == 0.0 || weight == 0.0 {
        return Ok(None);
    }

    if !input.material.is_thickness_allowed(thickness) {
        return Err(CalcError::thickness_not_allowed(
            input.material.code(),
            thickness,
            input.material.allowed_thicknesses_microns(),
        ));
    }

    let density = input.material.density_g_cm3();

    // Exact constant and operation order kept for numeric parity.
    let length_meters = (weight * UNIT_FACTOR) / (width * thickness * density);

    Ok(Some(LengthResult {
        length_meters,
        material: input.material,
        density_g_cm3: density,
    }))
}
