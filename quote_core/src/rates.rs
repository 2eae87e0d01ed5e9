//! # Rate Book
//!
//! Every pricing constant the calculators use lives here: opening deductions,
//! per-surface production rates, paint tier prices, prep fractions, margin
//! percentages, and the simplified per-sqft rate table. Keeping the numbers
//! in one serde-round-trippable structure lets a shop recalibrate for its
//! market by shipping a JSON rate book instead of editing code, and lets
//! tests pin exact expected outputs.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::rates::RateBook;
//!
//! let book = RateBook::default();
//! assert_eq!(book.coverage.sqft_per_gallon, 350.0);
//!
//! // Ship a regional rate book as JSON
//! let json = serde_json::to_string_pretty(&book).unwrap();
//! let regional: RateBook = serde_json::from_str(&json).unwrap();
//! assert_eq!(regional.tier_prices.standard_per_gallon, 47.5);
//! ```

use serde::{Deserialize, Serialize};

/// Current rate book revision. Bump when published numbers change.
pub const RATE_BOOK_VERSION: &str = "2025.1";

/// Root container for all pricing constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateBook {
    /// Rate book revision (for auditing saved quotes against the book used)
    pub version: String,

    /// Coverage and area-conversion constants
    pub coverage: CoverageRates,

    /// Average paint price per gallon by quality tier
    pub tier_prices: TierPrices,

    /// Production rates in sqft-equivalent per labor hour
    pub throughput: ThroughputRates,

    /// Prep time as a fraction of painting time, per project type
    pub prep_fractions: PrepFractions,

    /// Margin, supplies, and scheduling constants
    pub margins: Margins,

    /// Labor/materials split for bundled charge rates
    pub splits: LaborMaterialsSplit,

    /// Constants for the simplified context-driven quote
    pub simplified: SimplifiedRates,
}

impl Default for RateBook {
    fn default() -> Self {
        RateBook {
            version: RATE_BOOK_VERSION.to_string(),
            coverage: CoverageRates::default(),
            tier_prices: TierPrices::default(),
            throughput: ThroughputRates::default(),
            prep_fractions: PrepFractions::default(),
            margins: Margins::default(),
            splits: LaborMaterialsSplit::default(),
            simplified: SimplifiedRates::default(),
        }
    }
}

/// Coverage and geometry constants for the area model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageRates {
    /// Square feet one gallon covers per coat
    pub sqft_per_gallon: f64,

    /// Interior wall factor deducting door/window openings
    pub wall_opening_deduction: f64,

    /// Exterior siding factor deducting openings and gables
    pub siding_opening_deduction: f64,

    /// Sqft-equivalent of one linear foot of trim or fascia
    pub trim_sqft_per_linear_ft: f64,

    /// Paintable sqft per door, by project type
    pub door_sqft: DoorAreas,

    /// Paintable sqft per window (frame and sash)
    pub window_sqft: WindowAreas,

    /// Flat sqft estimate per cabinet, doors and drawers included
    pub cabinet_sqft_each: f64,
}

impl Default for CoverageRates {
    fn default() -> Self {
        CoverageRates {
            sqft_per_gallon: 350.0,
            wall_opening_deduction: 0.90,
            siding_opening_deduction: 0.85,
            trim_sqft_per_linear_ft: 0.5,
            door_sqft: DoorAreas::default(),
            window_sqft: WindowAreas::default(),
            cabinet_sqft_each: 30.0,
        }
    }
}

/// Door face area by project type. Exterior doors include the frame;
/// commercial assumes double doors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorAreas {
    pub interior: f64,
    pub exterior: f64,
    pub commercial: f64,
}

impl Default for DoorAreas {
    fn default() -> Self {
        DoorAreas {
            interior: 21.0,
            exterior: 28.0,
            commercial: 42.0,
        }
    }
}

/// Window frame/sash area by project type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowAreas {
    pub interior: f64,
    pub exterior: f64,
    pub commercial: f64,
}

impl Default for WindowAreas {
    fn default() -> Self {
        WindowAreas {
            interior: 15.0,
            exterior: 20.0,
            commercial: 20.0,
        }
    }
}

/// Average paint price per gallon by quality tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierPrices {
    pub economy_per_gallon: f64,
    pub standard_per_gallon: f64,
    pub premium_per_gallon: f64,
}

impl Default for TierPrices {
    fn default() -> Self {
        TierPrices {
            economy_per_gallon: 32.5,
            standard_per_gallon: 47.5,
            premium_per_gallon: 62.5,
        }
    }
}

/// Production rates: sqft-equivalent one painter covers in an hour.
///
/// Floors use roll-on epoxy rates, which run much faster than brush work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThroughputRates {
    pub walls: f64,
    pub ceilings: f64,
    pub trim: f64,
    pub doors: f64,
    pub windows: f64,
    pub siding: f64,
    pub soffits: f64,
    pub fascia: f64,
    pub floors: f64,
    pub cabinets: f64,
}

impl Default for ThroughputRates {
    fn default() -> Self {
        ThroughputRates {
            walls: 150.0,
            ceilings: 120.0,
            trim: 50.0,
            doors: 20.0,
            windows: 15.0,
            siding: 125.0,
            soffits: 100.0,
            fascia: 40.0,
            floors: 400.0,
            cabinets: 15.0,
        }
    }
}

/// Prep time as a fraction of painting time, fixed per project type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepFractions {
    pub interior: f64,
    pub exterior: f64,
    pub commercial: f64,
    pub cabinet: f64,
}

impl Default for PrepFractions {
    fn default() -> Self {
        PrepFractions {
            interior: 0.20,
            exterior: 0.30,
            commercial: 0.10,
            cabinet: 0.50,
        }
    }
}

/// Margin and scheduling constants for the area model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    /// Supplies (tape, plastic, brushes) as a fraction of paint cost
    pub supplies_pct_of_paint: f64,

    /// Overhead as a fraction of subtotal
    pub overhead_pct: f64,

    /// Profit as a fraction of subtotal
    pub profit_pct: f64,

    /// Default crew labor rate when the input doesn't override it
    pub default_labor_rate_per_hour: f64,

    /// Working hours per crew day
    pub hours_per_day: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Margins {
            supplies_pct_of_paint: 0.15,
            overhead_pct: 0.15,
            profit_pct: 0.25,
            default_labor_rate_per_hour: 50.0,
            hours_per_day: 8.0,
        }
    }
}

/// How a bundled charge rate splits into labor and materials.
///
/// Invariant: `labor + materials == 1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaborMaterialsSplit {
    pub labor: f64,
    pub materials: f64,
}

impl Default for LaborMaterialsSplit {
    fn default() -> Self {
        LaborMaterialsSplit {
            labor: 0.30,
            materials: 0.70,
        }
    }
}

/// Constants for the simplified context-driven quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifiedRates {
    /// Base $/sqft by quality tier and interior/exterior
    pub base_rates: SimplifiedBaseRates,

    /// Interior weight when blending rates for whole-house jobs
    /// (exterior weight is the complement)
    pub both_interior_weight: f64,

    /// Total-cost multipliers by prep level; prep cost is
    /// `(multiplier - 1) * base`
    pub prep_multipliers: PrepMultipliers,

    /// Multipliers applied to the post-markup subtotal by timeline
    pub timeline_multipliers: TimelineMultipliers,

    /// Informational labor share of the base cost
    pub labor_pct: f64,

    /// Informational materials share of the base cost
    pub materials_pct: f64,

    /// Markup on base + prep
    pub markup_pct: f64,
}

impl Default for SimplifiedRates {
    fn default() -> Self {
        SimplifiedRates {
            base_rates: SimplifiedBaseRates::default(),
            both_interior_weight: 0.6,
            prep_multipliers: PrepMultipliers::default(),
            timeline_multipliers: TimelineMultipliers::default(),
            labor_pct: 0.45,
            materials_pct: 0.35,
            markup_pct: 0.20,
        }
    }
}

/// Base $/sqft for the simplified model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifiedBaseRates {
    pub basic_interior: f64,
    pub basic_exterior: f64,
    pub premium_interior: f64,
    pub premium_exterior: f64,
    pub luxury_interior: f64,
    pub luxury_exterior: f64,
}

impl Default for SimplifiedBaseRates {
    fn default() -> Self {
        SimplifiedBaseRates {
            basic_interior: 2.00,
            basic_exterior: 2.50,
            premium_interior: 3.25,
            premium_exterior: 3.75,
            luxury_interior: 4.50,
            luxury_exterior: 5.25,
        }
    }
}

/// Total-cost multipliers by prep level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepMultipliers {
    pub minimal: f64,
    pub standard: f64,
    pub extensive: f64,
}

impl Default for PrepMultipliers {
    fn default() -> Self {
        PrepMultipliers {
            minimal: 1.10,
            standard: 1.25,
            extensive: 1.50,
        }
    }
}

/// Schedule-pressure multipliers by timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineMultipliers {
    pub rush: f64,
    pub standard: f64,
    pub flexible: f64,
}

impl Default for TimelineMultipliers {
    fn default() -> Self {
        TimelineMultipliers {
            rush: 1.35,
            standard: 1.00,
            flexible: 0.95,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_published_numbers() {
        let book = RateBook::default();
        assert_eq!(book.version, RATE_BOOK_VERSION);
        assert_eq!(book.coverage.sqft_per_gallon, 350.0);
        assert_eq!(book.coverage.wall_opening_deduction, 0.90);
        assert_eq!(book.coverage.siding_opening_deduction, 0.85);
        assert_eq!(book.coverage.cabinet_sqft_each, 30.0);
        assert_eq!(book.tier_prices.standard_per_gallon, 47.5);
        assert_eq!(book.margins.overhead_pct, 0.15);
        assert_eq!(book.margins.profit_pct, 0.25);
        assert_eq!(book.margins.default_labor_rate_per_hour, 50.0);
        assert_eq!(book.splits.labor, 0.30);
        assert_eq!(book.splits.materials, 0.70);
        assert_eq!(book.simplified.base_rates.premium_interior, 3.25);
        assert_eq!(book.simplified.markup_pct, 0.20);
    }

    #[test]
    fn test_split_sums_to_one() {
        let split = LaborMaterialsSplit::default();
        assert!((split.labor + split.materials - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_prep_fractions_by_project_type() {
        let prep = PrepFractions::default();
        assert_eq!(prep.interior, 0.20);
        assert_eq!(prep.exterior, 0.30);
        assert_eq!(prep.commercial, 0.10);
        assert_eq!(prep.cabinet, 0.50);
    }

    #[test]
    fn test_serde_roundtrip() {
        let book = RateBook::default();
        let json = serde_json::to_string_pretty(&book).unwrap();
        let roundtrip: RateBook = serde_json::from_str(&json).unwrap();
        assert_eq!(book, roundtrip);
    }

    #[test]
    fn test_sparse_json_fills_defaults() {
        // A regional book only has to name what it changes
        let book: RateBook =
            serde_json::from_str(r#"{"tier_prices": {"premium_per_gallon": 71.0}}"#).unwrap();
        assert_eq!(book.tier_prices.premium_per_gallon, 71.0);
        assert_eq!(book.tier_prices.standard_per_gallon, 47.5);
        assert_eq!(book.coverage.sqft_per_gallon, 350.0);
    }

    #[test]
    fn test_regional_override() {
        let mut book = RateBook::default();
        book.tier_prices.premium_per_gallon = 71.0;
        book.margins.default_labor_rate_per_hour = 65.0;

        let json = serde_json::to_string(&book).unwrap();
        let regional: RateBook = serde_json::from_str(&json).unwrap();
        assert_eq!(regional.tier_prices.premium_per_gallon, 71.0);
        assert_eq!(regional.margins.default_labor_rate_per_hour, 65.0);
        // Untouched constants keep their published defaults
        assert_eq!(regional.coverage.sqft_per_gallon, 350.0);
    }
}
