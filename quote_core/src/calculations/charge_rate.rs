//! # Charge-Rate Quote Calculation
//!
//! Prices a job from a contractor's own per-unit charge rates: eleven fixed
//! line items (six interior, five exterior), each a `quantity * rate` total
//! split 30/70 into labor and materials, then the business layer (overhead,
//! markup, tax) on top.
//!
//! Charge rates bundle labor and materials into one number, which is how
//! most residential painters actually price; the 30/70 split exists so the
//! books can report the two components separately.
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use quote_core::calculations::charge_rate::{calculate, BusinessSettings, ChargeRateInput, ChargeRates};
//! use quote_core::dimensions::ChargeDimensions;
//! use quote_core::rates::RateBook;
//!
//! let input = ChargeRateInput {
//!     label: "Whole-interior repaint".to_string(),
//!     dimensions: ChargeDimensions {
//!         wall_sqft: Some(1000.0),
//!         ..Default::default()
//!     },
//!     rates: ChargeRates {
//!         wall_rate_per_sqft: 2.50,
//!         ..Default::default()
//!     },
//!     settings: BusinessSettings::default(),
//! };
//!
//! let quote = calculate(&input, &RateBook::default()).unwrap();
//! assert!((quote.total_charge - 2500.0).abs() < 1e-9);
//! assert!((quote.final_price - 3593.75).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::dimensions::ChargeDimensions;
use crate::errors::{QuoteError, QuoteResult};
use crate::rates::RateBook;

/// The eleven billable lines, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChargeSurface {
    Walls,
    Ceilings,
    Baseboards,
    CrownMolding,
    InteriorDoors,
    InteriorWindows,
    ExteriorWalls,
    Soffits,
    Fascia,
    ExteriorDoors,
    ExteriorWindows,
}

impl ChargeSurface {
    /// All line items in report order
    pub const ALL: [ChargeSurface; 11] = [
        ChargeSurface::Walls,
        ChargeSurface::Ceilings,
        ChargeSurface::Baseboards,
        ChargeSurface::CrownMolding,
        ChargeSurface::InteriorDoors,
        ChargeSurface::InteriorWindows,
        ChargeSurface::ExteriorWalls,
        ChargeSurface::Soffits,
        ChargeSurface::Fascia,
        ChargeSurface::ExteriorDoors,
        ChargeSurface::ExteriorWindows,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            ChargeSurface::Walls => "Walls",
            ChargeSurface::Ceilings => "Ceilings",
            ChargeSurface::Baseboards => "Baseboards",
            ChargeSurface::CrownMolding => "Crown molding",
            ChargeSurface::InteriorDoors => "Interior doors",
            ChargeSurface::InteriorWindows => "Interior windows",
            ChargeSurface::ExteriorWalls => "Exterior walls",
            ChargeSurface::Soffits => "Soffits",
            ChargeSurface::Fascia => "Fascia",
            ChargeSurface::ExteriorDoors => "Exterior doors",
            ChargeSurface::ExteriorWindows => "Exterior windows",
        }
    }

    /// Whether the line rolls into the interior subtotal
    pub fn is_interior(&self) -> bool {
        matches!(
            self,
            ChargeSurface::Walls
                | ChargeSurface::Ceilings
                | ChargeSurface::Baseboards
                | ChargeSurface::CrownMolding
                | ChargeSurface::InteriorDoors
                | ChargeSurface::InteriorWindows
        )
    }
}

/// Per-unit charge rates: $/sqft for areas, $/linear-ft for runs, $/each for
/// counted items. Each rate bundles labor and materials. Lines a contractor
/// doesn't price can be left out of the JSON; they deserialize as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeRates {
    pub wall_rate_per_sqft: f64,
    pub ceiling_rate_per_sqft: f64,
    pub baseboard_rate_per_lf: f64,
    pub crown_molding_rate_per_lf: f64,
    pub interior_door_rate_each: f64,
    pub interior_window_rate_each: f64,
    pub exterior_wall_rate_per_sqft: f64,
    pub soffit_rate_per_sqft: f64,
    pub fascia_rate_per_lf: f64,
    pub exterior_door_rate_each: f64,
    pub exterior_window_rate_each: f64,
}

impl ChargeRates {
    fn rate_for(&self, surface: ChargeSurface) -> f64 {
        match surface {
            ChargeSurface::Walls => self.wall_rate_per_sqft,
            ChargeSurface::Ceilings => self.ceiling_rate_per_sqft,
            ChargeSurface::Baseboards => self.baseboard_rate_per_lf,
            ChargeSurface::CrownMolding => self.crown_molding_rate_per_lf,
            ChargeSurface::InteriorDoors => self.interior_door_rate_each,
            ChargeSurface::InteriorWindows => self.interior_window_rate_each,
            ChargeSurface::ExteriorWalls => self.exterior_wall_rate_per_sqft,
            ChargeSurface::Soffits => self.soffit_rate_per_sqft,
            ChargeSurface::Fascia => self.fascia_rate_per_lf,
            ChargeSurface::ExteriorDoors => self.exterior_door_rate_each,
            ChargeSurface::ExteriorWindows => self.exterior_window_rate_each,
        }
    }

    fn all_rates(&self) -> [(&'static str, f64); 11] {
        [
            ("wall_rate_per_sqft", self.wall_rate_per_sqft),
            ("ceiling_rate_per_sqft", self.ceiling_rate_per_sqft),
            ("baseboard_rate_per_lf", self.baseboard_rate_per_lf),
            ("crown_molding_rate_per_lf", self.crown_molding_rate_per_lf),
            ("interior_door_rate_each", self.interior_door_rate_each),
            ("interior_window_rate_each", self.interior_window_rate_each),
            ("exterior_wall_rate_per_sqft", self.exterior_wall_rate_per_sqft),
            ("soffit_rate_per_sqft", self.soffit_rate_per_sqft),
            ("fascia_rate_per_lf", self.fascia_rate_per_lf),
            ("exterior_door_rate_each", self.exterior_door_rate_each),
            ("exterior_window_rate_each", self.exterior_window_rate_each),
        ]
    }
}

/// Company-level pricing settings for the business layer.
///
/// Percentages are whole numbers (15.0 means 15%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessSettings {
    /// Overhead percentage applied to the charge subtotal
    pub overhead_percentage: f64,

    /// Markup percentage applied after overhead
    pub markup_percentage: f64,

    /// Tax percentage
    pub tax_rate: f64,

    /// Tax only the materials portion instead of the whole price
    pub tax_on_materials_only: bool,

    /// Label to print next to the tax line (e.g., "GST", "Sales Tax")
    pub tax_label: String,
}

impl Default for BusinessSettings {
    fn default() -> Self {
        BusinessSettings {
            overhead_percentage: 15.0,
            markup_percentage: 25.0,
            tax_rate: 0.0,
            tax_on_materials_only: false,
            tax_label: "Tax".to_string(),
        }
    }
}

/// Input for a charge-rate quote.
///
/// Legacy dimension layouts are accepted; normalization runs inside
/// [`calculate`] and is idempotent, so pre-normalized input is fine too.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Nguyen residence interior",
///   "dimensions": { "wall_linear_feet": 120.0, "ceiling_height": 9.0, "number_of_doors": 4 },
///   "rates": { "wall_rate_per_sqft": 2.5, "interior_door_rate_each": 125.0 },
///   "settings": { "overhead_percentage": 15.0, "markup_percentage": 25.0,
///                 "tax_rate": 8.25, "tax_on_materials_only": true, "tax_label": "Sales Tax" }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeRateInput {
    /// User label for this quote entry
    #[serde(default)]
    pub label: String,

    /// Quantities per line (canonical or legacy layout)
    pub dimensions: ChargeDimensions,

    /// The contractor's per-unit rate table
    pub rates: ChargeRates,

    /// Overhead, markup, and tax settings
    pub settings: BusinessSettings,
}

impl ChargeRateInput {
    /// Validate input parameters.
    pub fn validate(&self) -> QuoteResult<()> {
        for (field, value) in self.dimensions.present_fields() {
            if !value.is_finite() || value < 0.0 {
                return Err(QuoteError::invalid_input(
                    field,
                    value.to_string(),
                    "Quantities must be finite and non-negative",
                ));
            }
        }
        for (field, value) in self.rates.all_rates() {
            if !value.is_finite() || value < 0.0 {
                return Err(QuoteError::invalid_input(
                    field,
                    value.to_string(),
                    "Charge rates must be finite and non-negative",
                ));
            }
        }
        let s = &self.settings;
        for (field, value) in [
            ("overhead_percentage", s.overhead_percentage),
            ("markup_percentage", s.markup_percentage),
            ("tax_rate", s.tax_rate),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(QuoteError::invalid_input(
                    field,
                    value.to_string(),
                    "Percentages must be finite and non-negative",
                ));
            }
        }
        Ok(())
    }
}

/// One priced line of the quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLineItem {
    pub surface: ChargeSurface,
    pub quantity: f64,
    pub rate: f64,
    pub total: f64,
    pub labor: f64,
    pub materials: f64,
}

/// Results from a charge-rate quote.
///
/// Invariants: `total_charge = interior_subtotal + exterior_subtotal`,
/// `total_before_tax = total_charge * (1 + overhead%) * (1 + markup%)`, and
/// `final_price = total_before_tax + tax_amount`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractorQuote {
    /// All eleven lines in report order (zero-quantity lines included)
    pub line_items: Vec<QuoteLineItem>,

    pub interior_subtotal: f64,
    pub exterior_subtotal: f64,

    /// Sum of every line total, before the business layer
    pub total_charge: f64,

    /// Labor portion of the charge subtotal (30%)
    pub labor_total: f64,

    /// Materials portion of the charge subtotal (70%)
    pub materials_total: f64,

    pub overhead: f64,
    pub markup: f64,
    pub total_before_tax: f64,

    pub tax_label: String,
    pub tax_amount: f64,

    pub final_price: f64,
}

/// Calculate a charge-rate quote.
///
/// Legacy dimensions are normalized first (idempotent). Every line computes
/// `quantity * rate` and splits labor/materials per the rate book; the
/// business layer then stacks overhead, markup, and tax.
///
/// When `tax_on_materials_only` is set, the tax base is the materials
/// portion carried through the same overhead and markup multipliers, not a
/// carve-out of `total_before_tax`.
pub fn calculate(input: &ChargeRateInput, book: &RateBook) -> QuoteResult<ContractorQuote> {
    input.validate()?;

    let dims = input.dimensions.clone().into_canonical();
    let split = &book.splits;

    let quantity_for = |surface: ChargeSurface| -> f64 {
        match surface {
            ChargeSurface::Walls => dims.wall_sqft.unwrap_or(0.0),
            ChargeSurface::Ceilings => dims.ceiling_sqft.unwrap_or(0.0),
            ChargeSurface::Baseboards => dims.baseboard_linear_feet.unwrap_or(0.0),
            ChargeSurface::CrownMolding => dims.crown_molding_linear_feet.unwrap_or(0.0),
            ChargeSurface::InteriorDoors => dims.interior_doors.unwrap_or(0) as f64,
            ChargeSurface::InteriorWindows => dims.interior_windows.unwrap_or(0) as f64,
            ChargeSurface::ExteriorWalls => dims.exterior_wall_sqft.unwrap_or(0.0),
            ChargeSurface::Soffits => dims.soffit_sqft.unwrap_or(0.0),
            ChargeSurface::Fascia => dims.fascia_linear_feet.unwrap_or(0.0),
            ChargeSurface::ExteriorDoors => dims.exterior_doors.unwrap_or(0) as f64,
            ChargeSurface::ExteriorWindows => dims.exterior_windows.unwrap_or(0) as f64,
        }
    };

    let line_items: Vec<QuoteLineItem> = ChargeSurface::ALL
        .iter()
        .map(|&surface| {
            let quantity = quantity_for(surface);
            let rate = input.rates.rate_for(surface);
            let total = quantity * rate;
            QuoteLineItem {
                surface,
                quantity,
                rate,
                total,
                labor: total * split.labor,
                materials: total * split.materials,
            }
        })
        .collect();

    let interior_subtotal: f64 = line_items
        .iter()
        .filter(|l| l.surface.is_interior())
        .map(|l| l.total)
        .sum();
    let exterior_subtotal: f64 = line_items
        .iter()
        .filter(|l| !l.surface.is_interior())
        .map(|l| l.total)
        .sum();
    let total_charge = interior_subtotal + exterior_subtotal;
    let labor_total: f64 = line_items.iter().map(|l| l.labor).sum();
    let materials_total: f64 = line_items.iter().map(|l| l.materials).sum();

    // === Business layer ===
    let overhead_factor = input.settings.overhead_percentage / 100.0;
    let markup_factor = input.settings.markup_percentage / 100.0;

    let overhead = total_charge * overhead_factor;
    let after_overhead = total_charge + overhead;
    let markup = after_overhead * markup_factor;
    let total_before_tax = after_overhead + markup;

    let tax_base = if input.settings.tax_on_materials_only {
        materials_total * (1.0 + overhead_factor) * (1.0 + markup_factor)
    } else {
        total_before_tax
    };
    let tax_amount = tax_base * input.settings.tax_rate / 100.0;
    let final_price = total_before_tax + tax_amount;

    Ok(ContractorQuote {
        line_items,
        interior_subtotal,
        exterior_subtotal,
        total_charge,
        labor_total,
        materials_total,
        overhead,
        markup,
        total_before_tax,
        tax_label: input.settings.tax_label.clone(),
        tax_amount,
        final_price,
    })
}
