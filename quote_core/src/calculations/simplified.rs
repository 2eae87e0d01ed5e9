//! # Simplified Quote Calculation
//!
//! The quick-estimate model behind the conversational assistant: one base
//! $/sqft rate picked by quality tier and interior/exterior, a prep-level
//! uplift, a flat markup, and a timeline multiplier on the final number.
//!
//! The labor and materials figures in the breakdown are display shares of
//! the base cost (45% and 35%); together with prep and markup they do not
//! partition the total. That mirrors how the estimate sheet has always
//! presented them, so callers must not treat the breakdown as a strict sum.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::calculations::simplified::{
//!     calculate, PrepLevel, SimpleProjectType, SimpleQuality, SimplifiedQuoteInput, Timeline,
//! };
//! use quote_core::rates::RateBook;
//!
//! let input = SimplifiedQuoteInput {
//!     label: String::new(),
//!     sqft: 1000.0,
//!     paint_quality: SimpleQuality::Premium,
//!     project_type: SimpleProjectType::Interior,
//!     prep_level: PrepLevel::Standard,
//!     timeline: Timeline::Standard,
//! };
//!
//! let quote = calculate(&input, &RateBook::default()).unwrap();
//! assert_eq!(quote.total, 4875.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{QuoteError, QuoteResult};
use crate::rates::RateBook;

/// Quality tier offered by the conversational flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimpleQuality {
    Basic,
    Premium,
    Luxury,
}

impl SimpleQuality {
    /// All tiers in menu order (matches the 1/2/3 shortcuts)
    pub const ALL: [SimpleQuality; 3] = [
        SimpleQuality::Basic,
        SimpleQuality::Premium,
        SimpleQuality::Luxury,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            SimpleQuality::Basic => "Basic",
            SimpleQuality::Premium => "Premium",
            SimpleQuality::Luxury => "Luxury",
        }
    }
}

/// Job scope offered by the conversational flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimpleProjectType {
    Interior,
    Exterior,
    Both,
}

impl SimpleProjectType {
    /// All scopes in menu order (matches the 1/2/3 shortcuts)
    pub const ALL: [SimpleProjectType; 3] = [
        SimpleProjectType::Interior,
        SimpleProjectType::Exterior,
        SimpleProjectType::Both,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            SimpleProjectType::Interior => "Interior",
            SimpleProjectType::Exterior => "Exterior",
            SimpleProjectType::Both => "Interior and exterior",
        }
    }
}

/// How much surface preparation the job needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrepLevel {
    Minimal,
    Standard,
    Extensive,
}

impl PrepLevel {
    /// All levels in menu order (matches the 1/2/3 shortcuts)
    pub const ALL: [PrepLevel; 3] = [
        PrepLevel::Minimal,
        PrepLevel::Standard,
        PrepLevel::Extensive,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            PrepLevel::Minimal => "Minimal",
            PrepLevel::Standard => "Standard",
            PrepLevel::Extensive => "Extensive",
        }
    }
}

/// Schedule pressure for the job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeline {
    Rush,
    Standard,
    Flexible,
}

impl Timeline {
    /// All timelines in menu order (matches the 1/2/3 shortcuts)
    pub const ALL: [Timeline; 3] = [Timeline::Rush, Timeline::Standard, Timeline::Flexible];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Timeline::Rush => "Rush",
            Timeline::Standard => "Standard",
            Timeline::Flexible => "Flexible",
        }
    }
}

/// Input for a simplified quote, usually produced from a completed
/// conversation context.
///
/// ## JSON Example
///
/// ```json
/// {
///   "sqft": 1000.0,
///   "paint_quality": "Premium",
///   "project_type": "Interior",
///   "prep_level": "Standard",
///   "timeline": "Standard"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedQuoteInput {
    /// User label for this quote entry
    #[serde(default)]
    pub label: String,

    /// Square footage to paint
    pub sqft: f64,

    pub paint_quality: SimpleQuality,
    pub project_type: SimpleProjectType,
    pub prep_level: PrepLevel,
    pub timeline: Timeline,
}

impl SimplifiedQuoteInput {
    /// Validate input parameters.
    pub fn validate(&self) -> QuoteResult<()> {
        if !self.sqft.is_finite() || self.sqft <= 0.0 {
            return Err(QuoteError::invalid_input(
                "sqft",
                self.sqft.to_string(),
                "Square footage must be positive",
            ));
        }
        Ok(())
    }
}

/// Display breakdown for a simplified quote.
///
/// These are presentation figures layered onto the same base cost; they do
/// not sum to [`SimpleQuoteResult::total`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleBreakdown {
    /// 45% of the base cost
    pub labor: f64,

    /// 35% of the base cost
    pub materials: f64,

    /// Prep uplift: `(prep multiplier - 1) * base`
    pub prep_work: f64,

    /// 20% of base + prep
    pub markup: f64,
}

/// Results from a simplified quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleQuoteResult {
    /// `round((base + prep + markup) * timeline multiplier)`
    pub total: f64,

    pub breakdown: SimpleBreakdown,
}

/// Calculate a simplified quote from square footage and the four
/// conversational answers.
///
/// The "both" scope blends the interior and exterior base rates 60/40 by
/// the rate book's interior weight. The timeline multiplier applies to the
/// post-markup subtotal only; the breakdown figures are reported unscaled.
pub fn calculate(input: &SimplifiedQuoteInput, book: &RateBook) -> QuoteResult<SimpleQuoteResult> {
    input.validate()?;

    let rates = &book.simplified;
    let tbl = &rates.base_rates;

    let (interior_rate, exterior_rate) = match input.paint_quality {
        SimpleQuality::Basic => (tbl.basic_interior, tbl.basic_exterior),
        SimpleQuality::Premium => (tbl.premium_interior, tbl.premium_exterior),
        SimpleQuality::Luxury => (tbl.luxury_interior, tbl.luxury_exterior),
    };
    let rate_per_sqft = match input.project_type {
        SimpleProjectType::Interior => interior_rate,
        SimpleProjectType::Exterior => exterior_rate,
        SimpleProjectType::Both => {
            let w = rates.both_interior_weight;
            interior_rate * w + exterior_rate * (1.0 - w)
        }
    };

    let prep_multiplier = match input.prep_level {
        PrepLevel::Minimal => rates.prep_multipliers.minimal,
        PrepLevel::Standard => rates.prep_multipliers.standard,
        PrepLevel::Extensive => rates.prep_multipliers.extensive,
    };
    let timeline_multiplier = match input.timeline {
        Timeline::Rush => rates.timeline_multipliers.rush,
        Timeline::Standard => rates.timeline_multipliers.standard,
        Timeline::Flexible => rates.timeline_multipliers.flexible,
    };

    let base = rate_per_sqft * input.sqft;
    let prep_work = base * (prep_multiplier - 1.0);
    let markup = (base + prep_work) * rates.markup_pct;
    let total = ((base + prep_work + markup) * timeline_multiplier).round();

    Ok(SimpleQuoteResult {
        total,
        breakdown: SimpleBreakdown {
            labor: base * rates.labor_pct,
            materials: base * rates.materials_pct,
            prep_work,
            markup,
        },
    })
}
