//! # Project Dimensions
//!
//! Measurement inputs for both pricing models. Every field is optional: an
//! absent measurement contributes zero area, it never errors. The charge-rate
//! model additionally tolerates a legacy field layout from older saved
//! estimates, normalized by [`ChargeDimensions::into_canonical`].
//!
//! ## JSON Example (area model)
//!
//! ```json
//! {
//!   "length_ft": 12.0,
//!   "width_ft": 15.0,
//!   "height_ft": 9.0,
//!   "door_count": 2,
//!   "window_count": 3
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Room or building measurements for the area-based calculator.
///
/// Which fields are read depends on the project type and the selected
/// surfaces; a selected surface whose measurements are absent simply
/// contributes zero area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDimensions {
    /// Floor plan length in feet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_ft: Option<f64>,

    /// Floor plan width in feet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_ft: Option<f64>,

    /// Wall height in feet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_ft: Option<f64>,

    /// Soffit area in square feet (exterior)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soffit_sqft: Option<f64>,

    /// Fascia run in linear feet (exterior)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fascia_linear_ft: Option<f64>,

    /// Floor area in square feet (commercial epoxy work)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_sqft: Option<f64>,

    /// Number of doors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door_count: Option<u32>,

    /// Number of windows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_count: Option<u32>,

    /// Number of cabinets (cabinet refinishing jobs)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cabinet_count: Option<u32>,
}

impl ProjectDimensions {
    /// Floor plan perimeter `2 * (L + W)`, if both measurements are present.
    pub fn perimeter_ft(&self) -> Option<f64> {
        match (self.length_ft, self.width_ft) {
            (Some(l), Some(w)) => Some(2.0 * (l + w)),
            _ => None,
        }
    }

    /// All present numeric measurements, for validation sweeps.
    pub(crate) fn present_fields(&self) -> Vec<(&'static str, f64)> {
        let mut fields = Vec::new();
        if let Some(v) = self.length_ft {
            fields.push(("length_ft", v));
        }
        if let Some(v) = self.width_ft {
            fields.push(("width_ft", v));
        }
        if let Some(v) = self.height_ft {
            fields.push(("height_ft", v));
        }
        if let Some(v) = self.soffit_sqft {
            fields.push(("soffit_sqft", v));
        }
        if let Some(v) = self.fascia_linear_ft {
            fields.push(("fascia_linear_ft", v));
        }
        if let Some(v) = self.floor_sqft {
            fields.push(("floor_sqft", v));
        }
        fields
    }
}

/// Which surfaces a quote covers. Unselected surfaces are skipped even when
/// their measurements are present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSelection {
    #[serde(default)]
    pub walls: bool,
    #[serde(default)]
    pub ceiling: bool,
    #[serde(default)]
    pub trim: bool,
    #[serde(default)]
    pub doors: bool,
    #[serde(default)]
    pub windows: bool,
    #[serde(default)]
    pub siding: bool,
    #[serde(default)]
    pub soffit: bool,
    #[serde(default)]
    pub fascia: bool,
    #[serde(default)]
    pub floors: bool,
}

impl SurfaceSelection {
    /// True if no surface is selected at all.
    pub fn is_empty(&self) -> bool {
        !(self.walls
            || self.ceiling
            || self.trim
            || self.doors
            || self.windows
            || self.siding
            || self.soffit
            || self.fascia
            || self.floors)
    }
}

/// Quantities for the charge-rate calculator, one field per billable line.
///
/// Older saved estimates used a different field layout (`wall_linear_feet` +
/// `ceiling_height` instead of `wall_sqft`, `number_of_doors` instead of
/// `interior_doors`, ...). Those legacy fields deserialize here too and are
/// folded into the canonical fields by [`ChargeDimensions::into_canonical`],
/// which must run before calculation.
///
/// ## JSON Example (legacy layout)
///
/// ```json
/// {
///   "wall_linear_feet": 120.0,
///   "ceiling_height": 9.0,
///   "ceiling_area": 800.0,
///   "number_of_doors": 4,
///   "number_of_windows": 6
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChargeDimensions {
    // === Canonical interior quantities ===
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_sqft: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceiling_sqft: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseboard_linear_feet: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crown_molding_linear_feet: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interior_doors: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interior_windows: Option<u32>,

    // === Canonical exterior quantities ===
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exterior_wall_sqft: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soffit_sqft: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fascia_linear_feet: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exterior_doors: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exterior_windows: Option<u32>,

    // === Legacy fields from older saved estimates ===
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_linear_feet: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceiling_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceiling_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_doors: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_windows: Option<u32>,
}

impl ChargeDimensions {
    /// Fold legacy fields into their canonical counterparts.
    ///
    /// Idempotent: a canonical field that is already set is never
    /// overwritten, so applying this twice equals applying it once.
    ///
    /// - `wall_sqft` ← `wall_linear_feet * ceiling_height` when absent
    /// - `ceiling_sqft` ← `ceiling_area` when absent
    /// - `interior_doors` ← `number_of_doors` when absent
    /// - `interior_windows` ← `number_of_windows` when absent
    /// - `baseboard_linear_feet` ← `wall_linear_feet` when absent
    ///   (baseboard runs the same length as the walls it meets)
    pub fn into_canonical(mut self) -> Self {
        if self.wall_sqft.is_none() {
            if let (Some(lf), Some(h)) = (self.wall_linear_feet, self.ceiling_height) {
                self.wall_sqft = Some(lf * h);
            }
        }
        if self.ceiling_sqft.is_none() {
            self.ceiling_sqft = self.ceiling_area;
        }
        if self.interior_doors.is_none() {
            self.interior_doors = self.number_of_doors;
        }
        if self.interior_windows.is_none() {
            self.interior_windows = self.number_of_windows;
        }
        if self.baseboard_linear_feet.is_none() {
            self.baseboard_linear_feet = self.wall_linear_feet;
        }
        self
    }

    /// All present numeric quantities, for validation sweeps.
    pub(crate) fn present_fields(&self) -> Vec<(&'static str, f64)> {
        let mut fields = Vec::new();
        let pairs = [
            ("wall_sqft", self.wall_sqft),
            ("ceiling_sqft", self.ceiling_sqft),
            ("baseboard_linear_feet", self.baseboard_linear_feet),
            ("crown_molding_linear_feet", self.crown_molding_linear_feet),
            ("exterior_wall_sqft", self.exterior_wall_sqft),
            ("soffit_sqft", self.soffit_sqft),
            ("fascia_linear_feet", self.fascia_linear_feet),
            ("wall_linear_feet", self.wall_linear_feet),
            ("ceiling_height", self.ceiling_height),
            ("ceiling_area", self.ceiling_area),
        ];
        for (name, value) in pairs {
            if let Some(v) = value {
                fields.push((name, v));
            }
        }
        fields
    }
}

/// Normalize legacy charge dimensions. Free-function form of
/// [`ChargeDimensions::into_canonical`] for callers holding a reference.
pub fn convert_legacy_dimensions(dims: &ChargeDimensions) -> ChargeDimensions {
    dims.clone().into_canonical()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perimeter() {
        let dims = ProjectDimensions {
            length_ft: Some(12.0),
            width_ft: Some(15.0),
            ..Default::default()
        };
        assert_eq!(dims.perimeter_ft(), Some(54.0));

        let partial = ProjectDimensions {
            length_ft: Some(12.0),
            ..Default::default()
        };
        assert_eq!(partial.perimeter_ft(), None);
    }

    #[test]
    fn test_empty_selection() {
        assert!(SurfaceSelection::default().is_empty());
        let walls_only = SurfaceSelection {
            walls: true,
            ..Default::default()
        };
        assert!(!walls_only.is_empty());
    }

    #[test]
    fn test_legacy_wall_sqft_derivation() {
        let legacy = ChargeDimensions {
            wall_linear_feet: Some(120.0),
            ceiling_height: Some(9.0),
            ..Default::default()
        };
        let canonical = legacy.into_canonical();
        assert_eq!(canonical.wall_sqft, Some(1080.0));
        // Same-length assumption for baseboards
        assert_eq!(canonical.baseboard_linear_feet, Some(120.0));
    }

    #[test]
    fn test_legacy_field_mapping() {
        let legacy = ChargeDimensions {
            ceiling_area: Some(800.0),
            number_of_doors: Some(4),
            number_of_windows: Some(6),
            ..Default::default()
        };
        let canonical = legacy.into_canonical();
        assert_eq!(canonical.ceiling_sqft, Some(800.0));
        assert_eq!(canonical.interior_doors, Some(4));
        assert_eq!(canonical.interior_windows, Some(6));
    }

    #[test]
    fn test_explicit_values_never_overwritten() {
        let mixed = ChargeDimensions {
            wall_sqft: Some(500.0),
            wall_linear_feet: Some(120.0),
            ceiling_height: Some(9.0),
            ceiling_sqft: Some(300.0),
            ceiling_area: Some(800.0),
            ..Default::default()
        };
        let canonical = mixed.into_canonical();
        assert_eq!(canonical.wall_sqft, Some(500.0));
        assert_eq!(canonical.ceiling_sqft, Some(300.0));
    }

    #[test]
    fn test_conversion_is_idempotent() {
        let legacy = ChargeDimensions {
            wall_linear_feet: Some(100.0),
            ceiling_height: Some(8.0),
            ceiling_area: Some(640.0),
            number_of_doors: Some(3),
            number_of_windows: Some(5),
            ..Default::default()
        };
        let once = convert_legacy_dimensions(&legacy);
        let twice = convert_legacy_dimensions(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_serde_roundtrip_skips_absent_fields() {
        let dims = ChargeDimensions {
            wall_sqft: Some(1000.0),
            ..Default::default()
        };
        let json = serde_json::to_string(&dims).unwrap();
        assert_eq!(json, r#"{"wall_sqft":1000.0}"#);
        let roundtrip: ChargeDimensions = serde_json::from_str(&json).unwrap();
        assert_eq!(dims, roundtrip);
    }
}
