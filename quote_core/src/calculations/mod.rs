//! # Quote Calculations
//!
//! This module contains the three pricing models. Each calculation follows
//! the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, rate_book) -> Result<*Result, QuoteError>` - Pure function
//!
//! ## Pricing Models
//!
//! - [`area`] - Measured areas, tiered paint pricing, derived labor
//! - [`charge_rate`] - The contractor's own bundled $/unit rates
//! - [`simplified`] - Quick estimate from the conversational assistant
//!
//! The three formulas price "the same" job differently on purpose; callers
//! pick one deliberately via [`PricingStrategy`] rather than importing
//! whichever module happens to be closest.

pub mod area;
pub mod charge_rate;
pub mod simplified;

use serde::{Deserialize, Serialize};

use crate::errors::QuoteResult;
use crate::rates::RateBook;

// Re-export commonly used types
pub use area::{PaintCalculationInput, PaintCalculationResult};
pub use charge_rate::{BusinessSettings, ChargeRateInput, ContractorQuote};
pub use simplified::{SimpleQuoteResult, SimplifiedQuoteInput};

/// Enum wrapper for the three pricing models.
///
/// This allows storing heterogeneous quote entries in a single collection
/// while maintaining type safety and clean serialization, and makes the
/// choice of pricing model explicit at the call site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PricingStrategy {
    /// Measured areas with tiered paint pricing
    AreaTier(PaintCalculationInput),
    /// The contractor's bundled per-unit charge rates
    ChargeRate(ChargeRateInput),
    /// Quick estimate from conversational answers
    Simplified(SimplifiedQuoteInput),
}

impl PricingStrategy {
    /// Get the user-provided label for this quote entry
    pub fn label(&self) -> &str {
        match self {
            PricingStrategy::AreaTier(input) => &input.label,
            PricingStrategy::ChargeRate(input) => &input.label,
            PricingStrategy::Simplified(input) => &input.label,
        }
    }

    /// Get the pricing model as a string
    pub fn strategy_type(&self) -> &'static str {
        match self {
            PricingStrategy::AreaTier(_) => "AreaTier",
            PricingStrategy::ChargeRate(_) => "ChargeRate",
            PricingStrategy::Simplified(_) => "Simplified",
        }
    }

    /// Run the matching calculator against a rate book.
    pub fn calculate(&self, book: &RateBook) -> QuoteResult<QuoteOutcome> {
        Ok(match self {
            PricingStrategy::AreaTier(input) => {
                QuoteOutcome::AreaTier(area::calculate(input, book)?)
            }
            PricingStrategy::ChargeRate(input) => {
                QuoteOutcome::ChargeRate(charge_rate::calculate(input, book)?)
            }
            PricingStrategy::Simplified(input) => {
                QuoteOutcome::Simplified(simplified::calculate(input, book)?)
            }
        })
    }
}

/// Result wrapper matching [`PricingStrategy`], one variant per model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum QuoteOutcome {
    AreaTier(PaintCalculationResult),
    ChargeRate(ContractorQuote),
    Simplified(SimpleQuoteResult),
}

impl QuoteOutcome {
    /// The customer-facing price, whichever model produced it.
    pub fn total(&self) -> f64 {
        match self {
            QuoteOutcome::AreaTier(result) => result.costs.total,
            QuoteOutcome::ChargeRate(quote) => quote.final_price,
            QuoteOutcome::Simplified(quote) => quote.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::simplified::{
        PrepLevel, SimpleProjectType, SimpleQuality, Timeline,
    };
    use crate::dimensions::ChargeDimensions;

    fn simplified_strategy() -> PricingStrategy {
        PricingStrategy::Simplified(SimplifiedQuoteInput {
            label: "Quick estimate".to_string(),
            sqft: 1000.0,
            paint_quality: SimpleQuality::Premium,
            project_type: SimpleProjectType::Interior,
            prep_level: PrepLevel::Standard,
            timeline: Timeline::Standard,
        })
    }

    #[test]
    fn test_label_and_type() {
        let strategy = simplified_strategy();
        assert_eq!(strategy.label(), "Quick estimate");
        assert_eq!(strategy.strategy_type(), "Simplified");
    }

    #[test]
    fn test_dispatch_matches_direct_call() {
        let strategy = simplified_strategy();
        let outcome = strategy.calculate(&RateBook::default()).unwrap();
        assert_eq!(outcome.total(), 4875.0);
        assert!(matches!(outcome, QuoteOutcome::Simplified(_)));
    }

    #[test]
    fn test_charge_rate_dispatch() {
        let strategy = PricingStrategy::ChargeRate(ChargeRateInput {
            label: "Rates".to_string(),
            dimensions: ChargeDimensions {
                wall_sqft: Some(1000.0),
                ..Default::default()
            },
            rates: charge_rate::ChargeRates {
                wall_rate_per_sqft: 2.5,
                ..Default::default()
            },
            settings: BusinessSettings::default(),
        });
        let outcome = strategy.calculate(&RateBook::default()).unwrap();
        assert!((outcome.total() - 3593.75).abs() < 1e-9);
    }

    #[test]
    fn test_tagged_serialization() {
        let strategy = simplified_strategy();
        let json = serde_json::to_string(&strategy).unwrap();
        assert!(json.contains("\"type\":\"Simplified\""));
        let roundtrip: PricingStrategy = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.strategy_type(), "Simplified");

        let outcome = strategy.calculate(&RateBook::default()).unwrap();
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"type\":\"Simplified\""));
    }
}
