//! # Film Material Catalog
//!
//! Static catalog of flexible-packaging film materials and their
//! physical data: density and the thickness gauges each material is
//! commercially supplied in.
//!
//! ## Materials
//!
//! - **BOPP**: Biaxially Oriented Polypropylene, 0.91 g/cm³
//! - **PET**: Polyester, 1.40 g/cm³ (single 12 µm gauge)
//! - **PE**: Polyethylene, 0.92 g/cm³
//! - **PP**: Cast Polypropylene, 0.90 g/cm³
//!
//! ## Example
//!
//! ```rust
//! use film_core::materials::FilmMaterial;
//!
//! let material = FilmMaterial::Bopp;
//! assert_eq!(material.density_g_cm3(), 0.91);
//! assert_eq!(material.allowed_thicknesses_microns()[0], 17.0);
//! ```
//!
//! The selection contract: the UI offers only thicknesses from
//! `allowed_thicknesses_microns()`, and when the material changes it
//! must reset any now-invalid thickness to `default_thickness_microns()`
//! of the new material. That reconciliation lives in the caller; the
//! catalog only supplies the data.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::GramsPerCubicCm;

/// Flexible-packaging film materials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilmMaterial {
    /// Biaxially Oriented Polypropylene
    #[serde(rename = "BOPP")]
    Bopp,
    /// Polyester
    #[serde(rename = "PET")]
    Pet,
    /// Polyethylene
    #[serde(rename = "PE")]
    Pe,
    /// Cast Polypropylene
    #[serde(rename = "PP")]
    Pp,
}

impl FilmMaterial {
    /// All materials, in display order, for UI selection
    pub const ALL: [FilmMaterial; 4] = [
        FilmMaterial::Bopp,
        FilmMaterial::Pet,
        FilmMaterial::Pe,
        FilmMaterial::Pp,
    ];

    /// Get the industry code string (e.g., "BOPP", "PET")
    pub fn code(&self) -> &'static str {
        match self {
            FilmMaterial::Bopp => "BOPP",
            FilmMaterial::Pet => "PET",
            FilmMaterial::Pe => "PE",
            FilmMaterial::Pp => "PP",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "BOPP" => Ok(FilmMaterial::Bopp),
            "PET" | "POLYESTER" => Ok(FilmMaterial::Pet),
            "PE" | "POLYETHYLENE" => Ok(FilmMaterial::Pe),
            "PP" | "CPP" => Ok(FilmMaterial::Pp),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FilmMaterial::Bopp => "BOPP",
            FilmMaterial::Pet => "PET",
            FilmMaterial::Pe => "PE",
            FilmMaterial::Pp => "PP",
        }
    }

    /// Film density
    pub fn density(&self) -> GramsPerCubicCm {
        match self {
            FilmMaterial::Bopp => GramsPerCubicCm(0.91),
            FilmMaterial::Pet => GramsPerCubicCm(1.40),
            FilmMaterial::Pe => GramsPerCubicCm(0.92),
            FilmMaterial::Pp => GramsPerCubicCm(0.90),
        }
    }

    /// Film density as a raw g/cm³ value, for the calculation fields
    pub fn density_g_cm3(&self) -> f64 {
        self.density().value()
    }

    /// Commercially available thickness gauges in micrometers, ascending
    pub fn allowed_thicknesses_microns(&self) -> &'static [f64] {
        match self {
            FilmMaterial::Bopp => &[17.0, 20.0, 25.0, 30.0],
            FilmMaterial::Pet => &[12.0],
            FilmMaterial::Pe => &[20.0, 25.0, 30.0, 40.0, 50.0, 60.0, 80.0, 100.0],
            FilmMaterial::Pp => &[20.0, 25.0, 30.0, 35.0, 40.0],
        }
    }

    /// First gauge in the allowed list.
    ///
    /// The caller resets the selected thickness to this value whenever a
    /// material change invalidates the previous selection.
    pub fn default_thickness_microns(&self) -> f64 {
        self.allowed_thicknesses_microns()[0]
    }

    /// Check whether a thickness is in this material's catalog
    pub fn is_thickness_allowed(&self, thickness_microns: f64) -> bool {
        self.allowed_thicknesses_microns()
            .iter()
            .any(|&t| t == thickness_microns)
    }
}

impl Default for FilmMaterial {
    fn default() -> Self {
        FilmMaterial::Bopp
    }
}

impl std::fmt::Display for FilmMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_densities() {
        assert_eq!(FilmMaterial::Bopp.density_g_cm3(), 0.91);
        assert_eq!(FilmMaterial::Pet.density_g_cm3(), 1.40);
        assert_eq!(FilmMaterial::Pe.density_g_cm3(), 0.92);
        assert_eq!(FilmMaterial::Pp.density_g_cm3(), 0.90);
    }

    #[test]
    fn test_typed_density_matches_raw() {
        for material in FilmMaterial::ALL {
            assert_eq!(material.density(), GramsPerCubicCm(material.density_g_cm3()));
        }
    }

    #[test]
    fn test_catalog_invariants() {
        for material in FilmMaterial::ALL {
            let gauges = material.allowed_thicknesses_microns();
            assert!(!gauges.is_empty(), "{} has no gauges", material);
            assert!(material.density_g_cm3() > 0.0);
            for &t in gauges {
                assert!(t > 0.0);
                assert_eq!(t.fract(), 0.0, "gauges are whole microns");
            }
            // Ascending, no duplicates
            for pair in gauges.windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
    }

    #[test]
    fn test_pet_single_gauge() {
        assert_eq!(FilmMaterial::Pet.allowed_thicknesses_microns(), &[12.0]);
        assert_eq!(FilmMaterial::Pet.default_thickness_microns(), 12.0);
    }

    #[test]
    fn test_thickness_membership() {
        assert!(FilmMaterial::Bopp.is_thickness_allowed(20.0));
        assert!(!FilmMaterial::Bopp.is_thickness_allowed(12.0));
        assert!(!FilmMaterial::Pet.is_thickness_allowed(20.0));
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(
            FilmMaterial::from_str_flexible("bopp").unwrap(),
            FilmMaterial::Bopp
        );
        assert_eq!(
            FilmMaterial::from_str_flexible(" PET ").unwrap(),
            FilmMaterial::Pet
        );
        assert!(FilmMaterial::from_str_flexible("PVC").is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&FilmMaterial::Bopp).unwrap();
        assert_eq!(json, "\"BOPP\"");
        let parsed: FilmMaterial = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, FilmMaterial::Bopp);
    }

    #[test]
    fn test_default() {
        assert_eq!(FilmMaterial::default(), FilmMaterial::Bopp);
    }
}
