//! # Area-Based Quote Calculation
//!
//! Prices a paint job from measured areas: each selected surface converts to
//! square footage with a fixed formula, square footage converts to gallons
//! and labor hours, and the cost stack (paint, labor, supplies, overhead,
//! profit) is built on top.
//!
//! ## Assumptions
//!
//! - Interior wall area deducts 10% for door/window openings
//! - Exterior siding deducts 15% for openings and gables
//! - Trim and fascia are priced as sqft-equivalents of linear footage
//! - Cabinet jobs use a flat per-cabinet area, ignoring room geometry
//! - Commercial floors use roll-on epoxy production rates
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use quote_core::calculations::area::{calculate, PaintCalculationInput, PaintQuality, ProjectType};
//! use quote_core::dimensions::{ProjectDimensions, SurfaceSelection};
//! use quote_core::rates::RateBook;
//!
//! let input = PaintCalculationInput {
//!     label: "Main floor repaint".to_string(),
//!     project_type: ProjectType::Interior,
//!     dimensions: ProjectDimensions {
//!         length_ft: Some(12.0),
//!         width_ft: Some(15.0),
//!         height_ft: Some(9.0),
//!         ..Default::default()
//!     },
//!     surfaces: SurfaceSelection { walls: true, ..Default::default() },
//!     paint_quality: PaintQuality::Standard,
//!     coats: 2,
//!     labor_rate_per_hour: None,
//!     coverage_sqft_per_gallon: None,
//! };
//!
//! let result = calculate(&input, &RateBook::default()).unwrap();
//!
//! println!("Area: {:.1} sqft", result.total_area_sqft);
//! println!("Gallons: {}", result.paint.gallons);
//! println!("Total: ${:.2}", result.costs.total);
//! ```

use serde::{Deserialize, Serialize};

use crate::dimensions::{ProjectDimensions, SurfaceSelection};
use crate::errors::{QuoteError, QuoteResult};
use crate::rates::{PrepFractions, RateBook, ThroughputRates, TierPrices};
use crate::recommendations::{recommend, Recommendations};

/// Kind of paint job. Drives which surfaces are measurable, the door/window
/// area constants, and the prep fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    Interior,
    Exterior,
    Commercial,
    Cabinet,
}

impl ProjectType {
    /// All project types in menu order
    pub const ALL: [ProjectType; 4] = [
        ProjectType::Interior,
        ProjectType::Exterior,
        ProjectType::Commercial,
        ProjectType::Cabinet,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::Interior => "Interior",
            ProjectType::Exterior => "Exterior",
            ProjectType::Commercial => "Commercial",
            ProjectType::Cabinet => "Cabinet refinishing",
        }
    }

    /// Prep time as a fraction of painting time for this job kind
    pub fn prep_fraction(&self, fractions: &PrepFractions) -> f64 {
        match self {
            ProjectType::Interior => fractions.interior,
            ProjectType::Exterior => fractions.exterior,
            ProjectType::Commercial => fractions.commercial,
            ProjectType::Cabinet => fractions.cabinet,
        }
    }
}

/// Paint quality tier for the area model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaintQuality {
    Economy,
    Standard,
    Premium,
}

impl PaintQuality {
    /// All tiers in ascending price order
    pub const ALL: [PaintQuality; 3] = [
        PaintQuality::Economy,
        PaintQuality::Standard,
        PaintQuality::Premium,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            PaintQuality::Economy => "Economy",
            PaintQuality::Standard => "Standard",
            PaintQuality::Premium => "Premium",
        }
    }

    /// Average price per gallon for this tier
    pub fn price_per_gallon(&self, prices: &TierPrices) -> f64 {
        match self {
            PaintQuality::Economy => prices.economy_per_gallon,
            PaintQuality::Standard => prices.standard_per_gallon,
            PaintQuality::Premium => prices.premium_per_gallon,
        }
    }
}

/// A billable surface in the per-surface breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    Walls,
    Ceiling,
    Trim,
    Doors,
    Windows,
    Siding,
    Soffit,
    Fascia,
    Floors,
    Cabinets,
}

impl SurfaceKind {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            SurfaceKind::Walls => "Walls",
            SurfaceKind::Ceiling => "Ceiling",
            SurfaceKind::Trim => "Trim",
            SurfaceKind::Doors => "Doors",
            SurfaceKind::Windows => "Windows",
            SurfaceKind::Siding => "Siding",
            SurfaceKind::Soffit => "Soffit",
            SurfaceKind::Fascia => "Fascia",
            SurfaceKind::Floors => "Floors",
            SurfaceKind::Cabinets => "Cabinets",
        }
    }

    /// Sqft-equivalent one painter covers per hour on this surface
    fn throughput(&self, rates: &ThroughputRates) -> f64 {
        match self {
            SurfaceKind::Walls => rates.walls,
            SurfaceKind::Ceiling => rates.ceilings,
            SurfaceKind::Trim => rates.trim,
            SurfaceKind::Doors => rates.doors,
            SurfaceKind::Windows => rates.windows,
            SurfaceKind::Siding => rates.siding,
            SurfaceKind::Soffit => rates.soffits,
            SurfaceKind::Fascia => rates.fascia,
            SurfaceKind::Floors => rates.floors,
            SurfaceKind::Cabinets => rates.cabinets,
        }
    }
}

/// Input parameters for an area-based quote.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Main floor repaint",
///   "project_type": "Interior",
///   "dimensions": { "length_ft": 12.0, "width_ft": 15.0, "height_ft": 9.0 },
///   "surfaces": { "walls": true, "ceiling": true },
///   "paint_quality": "Standard",
///   "coats": 2
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaintCalculationInput {
    /// User label for this quote entry (e.g., "Main floor repaint")
    #[serde(default)]
    pub label: String,

    /// Kind of paint job
    pub project_type: ProjectType,

    /// Room or building measurements
    pub dimensions: ProjectDimensions,

    /// Which surfaces the quote covers
    pub surfaces: SurfaceSelection,

    /// Paint quality tier
    pub paint_quality: PaintQuality,

    /// Number of coats (1 to 5)
    pub coats: u32,

    /// Crew labor rate in $/hour; rate book default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labor_rate_per_hour: Option<f64>,

    /// Coverage override in sqft/gallon; rate book default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage_sqft_per_gallon: Option<f64>,
}

impl PaintCalculationInput {
    /// Validate input parameters. `calculate` runs this first; callers that
    /// want a form-style error list should use [`validation_errors`] instead.
    pub fn validate(&self) -> QuoteResult<()> {
        if !(1..=5).contains(&self.coats) {
            return Err(QuoteError::invalid_input(
                "coats",
                self.coats.to_string(),
                "Number of coats must be between 1 and 5",
            ));
        }
        if self.project_type != ProjectType::Cabinet && self.surfaces.is_empty() {
            return Err(QuoteError::invalid_input(
                "surfaces",
                "none selected",
                "Select at least one surface to paint",
            ));
        }
        for (field, value) in self.dimensions.present_fields() {
            if !value.is_finite() || value < 0.0 {
                return Err(QuoteError::invalid_input(
                    field,
                    value.to_string(),
                    "Measurements must be finite and non-negative",
                ));
            }
        }
        if let Some(rate) = self.labor_rate_per_hour {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(QuoteError::invalid_input(
                    "labor_rate_per_hour",
                    rate.to_string(),
                    "Labor rate must be positive",
                ));
            }
        }
        if let Some(coverage) = self.coverage_sqft_per_gallon {
            if !coverage.is_finite() || coverage <= 0.0 {
                return Err(QuoteError::invalid_input(
                    "coverage_sqft_per_gallon",
                    coverage.to_string(),
                    "Coverage must be positive",
                ));
            }
        }
        Ok(())
    }

    /// Advisory form-validation: human-readable problems, one string each.
    ///
    /// Unlike [`PaintCalculationInput::validate`] this also flags inputs that
    /// would calculate to a degenerate zero-area quote, which a form should
    /// surface before the customer sees a $0 estimate.
    pub fn validation_errors(&self, book: &RateBook) -> Vec<String> {
        let mut errors = Vec::new();
        if !(1..=5).contains(&self.coats) {
            errors.push("Number of coats must be between 1 and 5".to_string());
        }
        if self.project_type != ProjectType::Cabinet && self.surfaces.is_empty() {
            errors.push("Select at least one surface to paint".to_string());
        }
        for (field, value) in self.dimensions.present_fields() {
            if !value.is_finite() || value < 0.0 {
                errors.push(format!("{} must be a non-negative number", field));
            }
        }
        if errors.is_empty() && collect_surfaces(self, book).is_empty() {
            errors.push(
                "No selected surface has measurements; the quote would be $0".to_string(),
            );
        }
        errors
    }
}

/// Paint quantity summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintNeeded {
    /// Whole gallons to buy: `ceil(area * coats / coverage)`
    pub gallons: u32,

    /// Coats the gallon count assumes
    pub coats: u32,

    /// Coverage used, in sqft per gallon per coat
    pub coverage_sqft_per_gallon: f64,
}

/// Cost stack for an area-based quote.
///
/// Invariants: `subtotal = paint + labor + supplies` and
/// `total = subtotal + overhead + profit`. No tax in this model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub paint_cost: f64,
    pub labor_cost: f64,
    pub supplies_cost: f64,
    pub subtotal: f64,
    pub overhead: f64,
    pub profit: f64,
    pub total: f64,
}

/// Crew time summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEstimate {
    /// Masking, patching, sanding hours
    pub prep_hours: f64,

    /// Brush/roll/spray hours
    pub painting_hours: f64,

    /// prep + painting
    pub total_hours: f64,

    /// Crew days at the rate book's hours/day, rounded up
    pub total_days: u32,
}

/// One surface's share of the job.
///
/// `cost` covers the surface's paint and labor share only; supplies,
/// overhead, and profit are carried at the quote level, so line costs do not
/// sum to `costs.total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceBreakdown {
    pub surface: SurfaceKind,
    pub area_sqft: f64,
    pub gallons: f64,
    pub hours: f64,
    pub cost: f64,
}

/// Results from an area-based quote calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "total_area_sqft": 437.4,
///   "paint": { "gallons": 3, "coats": 2, "coverage_sqft_per_gallon": 350.0 },
///   "costs": {
///     "paint_cost": 142.5,
///     "labor_cost": 174.96,
///     "supplies_cost": 21.38,
///     "subtotal": 338.84,
///     "overhead": 50.83,
///     "profit": 84.71,
///     "total": 474.37
///   },
///   "time": { "prep_hours": 0.58, "painting_hours": 2.92, "total_hours": 3.5, "total_days": 1 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaintCalculationResult {
    /// Sum of all billable surface areas (sqft-equivalent)
    pub total_area_sqft: f64,

    /// Gallons to buy and the assumptions behind the count
    pub paint: PaintNeeded,

    /// Cost stack
    pub costs: CostBreakdown,

    /// Crew time
    pub time: TimeEstimate,

    /// Per-surface shares
    pub surfaces: Vec<SurfaceBreakdown>,

    /// Product guidance for the sales side
    pub recommendations: Recommendations,
}

/// Gather (surface, area) pairs for every selected surface that has enough
/// measurements. Missing measurements contribute nothing; they never error.
fn collect_surfaces(input: &PaintCalculationInput, book: &RateBook) -> Vec<(SurfaceKind, f64)> {
    let dims = &input.dimensions;
    let sel = &input.surfaces;
    let cov = &book.coverage;
    let mut out = Vec::new();

    // Cabinet jobs are counted, not measured.
    if input.project_type == ProjectType::Cabinet {
        if let Some(count) = dims.cabinet_count {
            if count > 0 {
                out.push((SurfaceKind::Cabinets, count as f64 * cov.cabinet_sqft_each));
            }
        }
        return out;
    }

    let perimeter = dims.perimeter_ft();
    let plan_area = match (dims.length_ft, dims.width_ft) {
        (Some(l), Some(w)) => Some(l * w),
        _ => None,
    };

    match input.project_type {
        ProjectType::Interior | ProjectType::Commercial => {
            if sel.walls {
                if let (Some(p), Some(h)) = (perimeter, dims.height_ft) {
                    out.push((SurfaceKind::Walls, p * h * cov.wall_opening_deduction));
                }
            }
            if sel.ceiling {
                if let Some(a) = plan_area {
                    out.push((SurfaceKind::Ceiling, a));
                }
            }
            if sel.trim {
                if let Some(p) = perimeter {
                    out.push((SurfaceKind::Trim, p * cov.trim_sqft_per_linear_ft));
                }
            }
            if sel.floors && input.project_type == ProjectType::Commercial {
                if let Some(a) = dims.floor_sqft {
                    out.push((SurfaceKind::Floors, a));
                }
            }
        }
        ProjectType::Exterior => {
            if sel.siding {
                if let (Some(p), Some(h)) = (perimeter, dims.height_ft) {
                    out.push((SurfaceKind::Siding, p * h * cov.siding_opening_deduction));
                }
            }
            if sel.soffit {
                if let Some(a) = dims.soffit_sqft {
                    out.push((SurfaceKind::Soffit, a));
                }
            }
            if sel.fascia {
                if let Some(lf) = dims.fascia_linear_ft {
                    out.push((SurfaceKind::Fascia, lf * cov.trim_sqft_per_linear_ft));
                }
            }
            if sel.trim {
                if let Some(p) = perimeter {
                    out.push((SurfaceKind::Trim, p * cov.trim_sqft_per_linear_ft));
                }
            }
        }
        ProjectType::Cabinet => unreachable!("handled above"),
    }

    let (door_sqft, window_sqft) = match input.project_type {
        ProjectType::Interior => (cov.door_sqft.interior, cov.window_sqft.interior),
        ProjectType::Exterior => (cov.door_sqft.exterior, cov.window_sqft.exterior),
        ProjectType::Commercial => (cov.door_sqft.commercial, cov.window_sqft.commercial),
        ProjectType::Cabinet => unreachable!("handled above"),
    };
    if sel.doors {
        if let Some(count) = dims.door_count {
            if count > 0 {
                out.push((SurfaceKind::Doors, count as f64 * door_sqft));
            }
        }
    }
    if sel.windows {
        if let Some(count) = dims.window_count {
            if count > 0 {
                out.push((SurfaceKind::Windows, count as f64 * window_sqft));
            }
        }
    }

    out
}

/// Calculate an area-based quote.
///
/// This is a pure function suitable for LLM invocation.
///
/// # Arguments
///
/// * `input` - Project type, measurements, surface selection, quality, coats
/// * `book` - Rate book with coverage, throughput, and margin constants
///
/// # Returns
///
/// * `Ok(PaintCalculationResult)` - Area, gallons, costs, time, breakdown
/// * `Err(QuoteError)` - Structured error if inputs are invalid
///
/// # Example
///
/// ```rust
/// use quote_core::calculations::area::{calculate, PaintCalculationInput, PaintQuality, ProjectType};
/// use quote_core::dimensions::{ProjectDimensions, SurfaceSelection};
/// use quote_core::rates::RateBook;
///
/// let input = PaintCalculationInput {
///     label: "Bedroom".to_string(),
///     project_type: ProjectType::Interior,
///     dimensions: ProjectDimensions {
///         length_ft: Some(10.0),
///         width_ft: Some(12.0),
///         height_ft: Some(8.0),
///         ..Default::default()
///     },
///     surfaces: SurfaceSelection { walls: true, ceiling: true, ..Default::default() },
///     paint_quality: PaintQuality::Premium,
///     coats: 2,
///     labor_rate_per_hour: None,
///     coverage_sqft_per_gallon: None,
/// };
///
/// let result = calculate(&input, &RateBook::default()).expect("valid input");
/// assert!(result.total_area_sqft > 0.0);
/// assert_eq!(result.costs.total, result.costs.subtotal + result.costs.overhead + result.costs.profit);
/// ```
pub fn calculate(
    input: &PaintCalculationInput,
    book: &RateBook,
) -> QuoteResult<PaintCalculationResult> {
    input.validate()?;

    let coverage = input
        .coverage_sqft_per_gallon
        .unwrap_or(book.coverage.sqft_per_gallon);
    let labor_rate = input
        .labor_rate_per_hour
        .unwrap_or(book.margins.default_labor_rate_per_hour);
    let price_per_gallon = input.paint_quality.price_per_gallon(&book.tier_prices);

    // === Areas and painting hours ===
    let surfaces = collect_surfaces(input, book);
    let total_area_sqft: f64 = surfaces.iter().map(|(_, a)| a).sum();
    let painting_hours: f64 = surfaces
        .iter()
        .map(|(kind, area)| area / kind.throughput(&book.throughput))
        .sum();

    // === Time ===
    let prep_hours = painting_hours * input.project_type.prep_fraction(&book.prep_fractions);
    let total_hours = prep_hours + painting_hours;
    let total_days = (total_hours / book.margins.hours_per_day).ceil() as u32;

    // === Paint ===
    let gallons = (total_area_sqft * input.coats as f64 / coverage).ceil() as u32;

    // === Costs ===
    let paint_cost = gallons as f64 * price_per_gallon;
    let labor_cost = total_hours * labor_rate;
    let supplies_cost = paint_cost * book.margins.supplies_pct_of_paint;
    let subtotal = paint_cost + labor_cost + supplies_cost;
    let overhead = subtotal * book.margins.overhead_pct;
    let profit = subtotal * book.margins.profit_pct;
    let total = subtotal + overhead + profit;

    // === Per-surface breakdown ===
    // Paint and labor are apportioned by area and hours; supplies and margin
    // stay at the quote level, so line costs do not sum to the total.
    let breakdown = surfaces
        .iter()
        .map(|(kind, area)| {
            let hours = area / kind.throughput(&book.throughput);
            let gallon_share = if total_area_sqft > 0.0 {
                area / total_area_sqft * gallons as f64
            } else {
                0.0
            };
            let labor_share = if painting_hours > 0.0 {
                hours / painting_hours * labor_cost
            } else {
                0.0
            };
            SurfaceBreakdown {
                surface: *kind,
                area_sqft: *area,
                gallons: gallon_share,
                hours,
                cost: gallon_share * price_per_gallon + labor_share,
            }
        })
        .collect();

    Ok(PaintCalculationResult {
        total_area_sqft,
        paint: PaintNeeded {
            gallons,
            coats: input.coats,
            coverage_sqft_per_gallon: coverage,
        },
        costs: CostBreakdown {
            paint_cost,
            labor_cost,
            supplies_cost,
            subtotal,
            overhead,
            profit,
            total,
        },
        time: TimeEstimate {
            prep_hours,
            painting_hours,
            total_hours,
            total_days,
        },
        surfaces: breakdown,
        recommendations: recommend(input.project_type, input.paint_quality),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interior_walls_input() -> PaintCalculationInput {
        PaintCalculationInput {
            label: "Test room".to_string(),
            project_type: ProjectType::Interior,
            dimensions: ProjectDimensions {
                length_ft: Some(12.0),
                width_ft: Some(15.0),
                height_ft: Some(9.0),
                ..Default::default()
            },
            surfaces: SurfaceSelection {
                walls: true,
                ..Default::default()
            },
            paint_quality: PaintQuality::Standard,
            coats: 2,
            labor_rate_per_hour: None,
            coverage_sqft_per_gallon: None,
        }
    }

    #[test]
    fn test_interior_wall_area() {
        let result = calculate(&interior_walls_input(), &RateBook::default()).unwrap();
        // 2 * (12 + 15) * 9 * 0.9 = 437.4
        assert!((result.total_area_sqft - 437.4).abs() < 1e-9);
    }

    #[test]
    fn test_gallons_and_paint_cost() {
        let result = calculate(&interior_walls_input(), &RateBook::default()).unwrap();
        // ceil(437.4 * 2 / 350) = ceil(2.499) = 3
        assert_eq!(result.paint.gallons, 3);
        // 3 * 47.50 = 142.50
        assert!((result.costs.paint_cost - 142.5).abs() < 1e-9);
    }

    #[test]
    fn test_cost_stack_invariant() {
        let result = calculate(&interior_walls_input(), &RateBook::default()).unwrap();
        let c = &result.costs;
        assert!((c.subtotal - (c.paint_cost + c.labor_cost + c.supplies_cost)).abs() < 1e-9);
        assert!((c.total - (c.subtotal + c.overhead + c.profit)).abs() < 1e-9);
    }

    #[test]
    fn test_time_estimate() {
        let result = calculate(&interior_walls_input(), &RateBook::default()).unwrap();
        // 437.4 sqft at 150 sqft/hr = 2.916 painting hours
        assert!((result.time.painting_hours - 2.916).abs() < 1e-9);
        // Interior prep is 20% of painting time
        assert!((result.time.prep_hours - 0.5832).abs() < 1e-9);
        assert_eq!(result.time.total_days, 1);
    }

    #[test]
    fn test_gallons_formula_across_surface_combinations() {
        let book = RateBook::default();
        let combos: [SurfaceSelection; 4] = [
            SurfaceSelection {
                walls: true,
                ..Default::default()
            },
            SurfaceSelection {
                walls: true,
                ceiling: true,
                ..Default::default()
            },
            SurfaceSelection {
                walls: true,
                ceiling: true,
                trim: true,
                ..Default::default()
            },
            SurfaceSelection {
                walls: true,
                ceiling: true,
                trim: true,
                doors: true,
                windows: true,
                ..Default::default()
            },
        ];
        for surfaces in combos {
            let mut input = interior_walls_input();
            input.surfaces = surfaces;
            input.dimensions.door_count = Some(2);
            input.dimensions.window_count = Some(3);
            let result = calculate(&input, &book).unwrap();
            let expected =
                (result.total_area_sqft * input.coats as f64 / 350.0).ceil() as u32;
            assert_eq!(result.paint.gallons, expected);
        }
    }

    #[test]
    fn test_no_surfaces_fails_closed() {
        let mut input = interior_walls_input();
        input.surfaces = SurfaceSelection::default();
        let result = calculate(&input, &RateBook::default());
        assert!(matches!(result, Err(QuoteError::InvalidInput { .. })));
    }

    #[test]
    fn test_selected_surface_with_missing_dims_contributes_zero() {
        let mut input = interior_walls_input();
        input.surfaces.doors = true; // no door_count given
        let with_doors = calculate(&input, &RateBook::default()).unwrap();
        let without = calculate(&interior_walls_input(), &RateBook::default()).unwrap();
        assert_eq!(with_doors.total_area_sqft, without.total_area_sqft);
    }

    #[test]
    fn test_coats_out_of_range() {
        let mut input = interior_walls_input();
        input.coats = 0;
        assert!(calculate(&input, &RateBook::default()).is_err());
        input.coats = 6;
        assert!(calculate(&input, &RateBook::default()).is_err());
    }

    #[test]
    fn test_negative_dimension_rejected() {
        let mut input = interior_walls_input();
        input.dimensions.length_ft = Some(-12.0);
        assert!(calculate(&input, &RateBook::default()).is_err());
    }

    #[test]
    fn test_cabinet_flat_area() {
        let input = PaintCalculationInput {
            label: "Kitchen cabinets".to_string(),
            project_type: ProjectType::Cabinet,
            dimensions: ProjectDimensions {
                // Room geometry present but ignored for cabinet jobs
                length_ft: Some(40.0),
                width_ft: Some(40.0),
                height_ft: Some(20.0),
                cabinet_count: Some(14),
                ..Default::default()
            },
            surfaces: SurfaceSelection::default(),
            paint_quality: PaintQuality::Premium,
            coats: 2,
            labor_rate_per_hour: None,
            coverage_sqft_per_gallon: None,
        };
        let result = calculate(&input, &RateBook::default()).unwrap();
        // 14 cabinets * 30 sqft flat estimate
        assert!((result.total_area_sqft - 420.0).abs() < 1e-9);
        // Cabinet prep runs 50% of painting time
        assert!(
            (result.time.prep_hours - result.time.painting_hours * 0.5).abs() < 1e-9
        );
    }

    #[test]
    fn test_commercial_floor_throughput() {
        let input = PaintCalculationInput {
            label: "Warehouse".to_string(),
            project_type: ProjectType::Commercial,
            dimensions: ProjectDimensions {
                floor_sqft: Some(4000.0),
                ..Default::default()
            },
            surfaces: SurfaceSelection {
                floors: true,
                ..Default::default()
            },
            paint_quality: PaintQuality::Standard,
            coats: 1,
            labor_rate_per_hour: None,
            coverage_sqft_per_gallon: None,
        };
        let result = calculate(&input, &RateBook::default()).unwrap();
        // Epoxy rolls at 400 sqft/hr: 4000 / 400 = 10 painting hours
        assert!((result.time.painting_hours - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_exterior_siding_deduction() {
        let input = PaintCalculationInput {
            label: "House exterior".to_string(),
            project_type: ProjectType::Exterior,
            dimensions: ProjectDimensions {
                length_ft: Some(40.0),
                width_ft: Some(30.0),
                height_ft: Some(18.0),
                ..Default::default()
            },
            surfaces: SurfaceSelection {
                siding: true,
                ..Default::default()
            },
            paint_quality: PaintQuality::Standard,
            coats: 2,
            labor_rate_per_hour: None,
            coverage_sqft_per_gallon: None,
        };
        let result = calculate(&input, &RateBook::default()).unwrap();
        // 2 * (40 + 30) * 18 * 0.85 = 2142
        assert!((result.total_area_sqft - 2142.0).abs() < 1e-9);
    }

    #[test]
    fn test_labor_rate_and_coverage_overrides() {
        let mut input = interior_walls_input();
        input.labor_rate_per_hour = Some(75.0);
        input.coverage_sqft_per_gallon = Some(300.0);
        let result = calculate(&input, &RateBook::default()).unwrap();
        assert_eq!(result.paint.coverage_sqft_per_gallon, 300.0);
        // ceil(437.4 * 2 / 300) = 3
        assert_eq!(result.paint.gallons, 3);
        assert!((result.costs.labor_cost - result.time.total_hours * 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_surface_breakdown_shares() {
        let mut input = interior_walls_input();
        input.surfaces.ceiling = true;
        let result = calculate(&input, &RateBook::default()).unwrap();
        assert_eq!(result.surfaces.len(), 2);
        let gallon_sum: f64 = result.surfaces.iter().map(|s| s.gallons).sum();
        assert!((gallon_sum - result.paint.gallons as f64).abs() < 1e-9);
        let hour_sum: f64 = result.surfaces.iter().map(|s| s.hours).sum();
        assert!((hour_sum - result.time.painting_hours).abs() < 1e-9);
    }

    #[test]
    fn test_validation_errors_advisory() {
        let book = RateBook::default();
        let mut input = interior_walls_input();
        input.coats = 9;
        input.surfaces = SurfaceSelection::default();
        let errors = input.validation_errors(&book);
        assert_eq!(errors.len(), 2);

        // Selected surfaces but no measurements: advisory flags the $0 quote
        let degenerate = PaintCalculationInput {
            label: String::new(),
            project_type: ProjectType::Interior,
            dimensions: ProjectDimensions::default(),
            surfaces: SurfaceSelection {
                walls: true,
                ..Default::default()
            },
            paint_quality: PaintQuality::Economy,
            coats: 1,
            labor_rate_per_hour: None,
            coverage_sqft_per_gallon: None,
        };
        let errors = degenerate.validation_errors(&book);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("$0"));
    }

    #[test]
    fn test_recommendations_attached() {
        let result = calculate(&interior_walls_input(), &RateBook::default()).unwrap();
        assert!(result.recommendations.paint_type.contains("latex"));
        assert!(!result.recommendations.brands.is_empty());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = interior_walls_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: PaintCalculationInput = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.coats, 2);
        assert_eq!(roundtrip.project_type, ProjectType::Interior);

        let result = calculate(&input, &RateBook::default()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("total_area_sqft"));
        assert!(json.contains("paint_cost"));
        let back: PaintCalculationResult = serde_json::from_str(&json).unwrap();
        assert!((back.costs.total - result.costs.total).abs() < 1e-9);
    }
}
