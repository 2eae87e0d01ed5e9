//! # Product Recommendations
//!
//! Static lookup from project type and paint quality to product guidance:
//! paint chemistry, sheen, whether to prime, and brand lines to suggest.
//! No computation happens here; it is a table the sales side renders next to
//! the numbers.

use serde::{Deserialize, Serialize};

use crate::calculations::area::{PaintQuality, ProjectType};

/// Product guidance attached to an area-model quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    /// Paint chemistry to use (e.g., "Interior latex")
    pub paint_type: String,

    /// Suggested sheen for the dominant surface
    pub sheen: String,

    /// Whether a primer coat should be bid
    pub primer_recommended: bool,

    /// Brand lines matching the quality tier
    pub brands: Vec<String>,
}

/// Look up product guidance for a project type and quality tier.
pub fn recommend(project_type: ProjectType, quality: PaintQuality) -> Recommendations {
    let paint_type = match project_type {
        ProjectType::Interior => "Interior latex",
        ProjectType::Exterior => "100% acrylic exterior",
        ProjectType::Commercial => "Commercial acrylic (epoxy for floors)",
        ProjectType::Cabinet => "Urethane-modified alkyd enamel",
    };

    let sheen = match project_type {
        ProjectType::Interior => "Eggshell walls, flat ceilings",
        ProjectType::Exterior => "Satin",
        ProjectType::Commercial => "Eggshell",
        ProjectType::Cabinet => "Semi-gloss",
    };

    // Bare wood and chalky siding always want primer; interior only when
    // economy paint has to hide previous color in one budget.
    let primer_recommended = match project_type {
        ProjectType::Exterior | ProjectType::Cabinet => true,
        ProjectType::Interior => quality == PaintQuality::Economy,
        ProjectType::Commercial => false,
    };

    let brands: &[&str] = match quality {
        PaintQuality::Economy => &["Behr Pro i100", "Valspar 2000"],
        PaintQuality::Standard => &["Sherwin-Williams SuperPaint", "Benjamin Moore ben"],
        PaintQuality::Premium => &["Sherwin-Williams Emerald", "Benjamin Moore Aura"],
    };

    Recommendations {
        paint_type: paint_type.to_string(),
        sheen: sheen.to_string(),
        primer_recommended,
        brands: brands.iter().map(|b| b.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cabinet_always_primes() {
        for quality in PaintQuality::ALL {
            assert!(recommend(ProjectType::Cabinet, quality).primer_recommended);
        }
    }

    #[test]
    fn test_interior_primer_only_for_economy() {
        assert!(recommend(ProjectType::Interior, PaintQuality::Economy).primer_recommended);
        assert!(!recommend(ProjectType::Interior, PaintQuality::Standard).primer_recommended);
        assert!(!recommend(ProjectType::Interior, PaintQuality::Premium).primer_recommended);
    }

    #[test]
    fn test_brands_track_quality() {
        let premium = recommend(ProjectType::Interior, PaintQuality::Premium);
        assert!(premium.brands.iter().any(|b| b.contains("Emerald")));

        let economy = recommend(ProjectType::Exterior, PaintQuality::Economy);
        assert!(economy.brands.iter().any(|b| b.contains("Valspar")));
    }

    #[test]
    fn test_serialization() {
        let rec = recommend(ProjectType::Exterior, PaintQuality::Standard);
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("acrylic"));
        let roundtrip: Recommendations = serde_json::from_str(&json).unwrap();
        assert_eq!(rec, roundtrip);
    }
}
