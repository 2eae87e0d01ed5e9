//! # Conversational Quote Assistant
//!
//! Turns a free-text chat into a filled [`ConversationContext`], one field at
//! a time. The extraction layer is pure: callers pass the latest message and
//! the context accumulated so far, and get back a patch of newly-extracted
//! fields, the next question to ask, and a completion flag. The caller owns
//! merging and persisting the context between messages.
//!
//! Fields fill in a fixed priority order; bare numbers and "1"/"2"/"3"
//! shortcut answers are interpreted against the field currently being
//! solicited. An already-set field is never overwritten.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::conversation::{parse_message, ConversationContext};
//!
//! let mut ctx = ConversationContext::default();
//!
//! let outcome = parse_message("Hi, my name is Dana Whitfield", &ctx);
//! ctx = ctx.merged(&outcome.extracted);
//! assert_eq!(ctx.client_name.as_deref(), Some("Dana Whitfield"));
//! assert!(!outcome.is_complete);
//! assert!(outcome.next_question.contains("address"));
//! ```

mod extract;

use serde::{Deserialize, Serialize};

use crate::calculations::simplified::{
    PrepLevel, SimpleProjectType, SimpleQuality, SimplifiedQuoteInput, Timeline,
};
use crate::errors::{QuoteError, QuoteResult};

pub use extract::parse_message;

/// Quick quotes skip the timeline question; advanced quotes ask it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteType {
    Quick,
    Advanced,
}

impl QuoteType {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            QuoteType::Quick => "Quick",
            QuoteType::Advanced => "Advanced",
        }
    }
}

/// Everything the assistant needs to collect before it can price a job.
///
/// Created empty at conversation start, filled field-by-field as messages
/// are parsed, handed to [`ConversationContext::to_simplified_input`] once
/// complete, then discarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_type: Option<QuoteType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<SimpleProjectType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sqft: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paint_quality: Option<SimpleQuality>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_level: Option<PrepLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Timeline>,
}

/// The fields the assistant solicits, in asking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContextField {
    ClientName,
    Address,
    QuoteType,
    ProjectType,
    SquareFootage,
    PaintQuality,
    PrepLevel,
    Timeline,
}

impl ContextField {
    /// Solicitation order. Timeline is asked last and only for advanced
    /// quotes.
    pub const PRIORITY: [ContextField; 8] = [
        ContextField::ClientName,
        ContextField::Address,
        ContextField::QuoteType,
        ContextField::ProjectType,
        ContextField::SquareFootage,
        ContextField::PaintQuality,
        ContextField::PrepLevel,
        ContextField::Timeline,
    ];

    /// The question shown to the customer for this field. The numbered
    /// options are what the "1"/"2"/"3" shortcut answers refer to.
    pub fn prompt(&self) -> &'static str {
        match self {
            ContextField::ClientName => "Who is this quote for?",
            ContextField::Address => "What's the project address?",
            ContextField::QuoteType => {
                "Would you like a (1) quick quote or a (2) advanced quote?"
            }
            ContextField::ProjectType => "Is the job (1) interior, (2) exterior, or (3) both?",
            ContextField::SquareFootage => "Roughly how many square feet are we painting?",
            ContextField::PaintQuality => {
                "Which paint quality: (1) basic, (2) premium, or (3) luxury?"
            }
            ContextField::PrepLevel => {
                "How much prep work is needed: (1) minimal, (2) standard, or (3) extensive?"
            }
            ContextField::Timeline => {
                "What's the timeline: (1) rush, (2) standard, or (3) flexible?"
            }
        }
    }
}

impl ConversationContext {
    /// The next field to ask about, in priority order. `None` when the
    /// context is complete for its quote type.
    pub fn next_missing_field(&self) -> Option<ContextField> {
        for field in ContextField::PRIORITY {
            let missing = match field {
                ContextField::ClientName => self.client_name.is_none(),
                ContextField::Address => self.address.is_none(),
                ContextField::QuoteType => self.quote_type.is_none(),
                ContextField::ProjectType => self.project_type.is_none(),
                ContextField::SquareFootage => self.sqft.is_none(),
                ContextField::PaintQuality => self.paint_quality.is_none(),
                ContextField::PrepLevel => self.prep_level.is_none(),
                // Only advanced quotes schedule around a timeline
                ContextField::Timeline => {
                    self.quote_type == Some(QuoteType::Advanced) && self.timeline.is_none()
                }
            };
            if missing {
                return Some(field);
            }
        }
        None
    }

    /// True once every required field for the quote type is present.
    pub fn is_complete(&self) -> bool {
        self.next_missing_field().is_none()
    }

    /// Merge a patch into a copy of this context. Fields already set here
    /// win; the patch only fills gaps.
    pub fn merged(&self, patch: &ContextPatch) -> ConversationContext {
        ConversationContext {
            client_name: self.client_name.clone().or_else(|| patch.client_name.clone()),
            address: self.address.clone().or_else(|| patch.address.clone()),
            quote_type: self.quote_type.or(patch.quote_type),
            project_type: self.project_type.or(patch.project_type),
            sqft: self.sqft.or(patch.sqft),
            paint_quality: self.paint_quality.or(patch.paint_quality),
            prep_level: self.prep_level.or(patch.prep_level),
            timeline: self.timeline.or(patch.timeline),
        }
    }

    /// Convert a complete context into simplified-calculator input.
    ///
    /// Quick quotes never collect a timeline; they price at the standard
    /// multiplier. Returns [`QuoteError::IncompleteContext`] naming the
    /// first missing field otherwise.
    pub fn to_simplified_input(&self) -> QuoteResult<SimplifiedQuoteInput> {
        if let Some(field) = self.next_missing_field() {
            return Err(QuoteError::incomplete_context(format!("{:?}", field)));
        }
        Ok(SimplifiedQuoteInput {
            label: self.client_name.clone().unwrap_or_default(),
            sqft: self.sqft.ok_or_else(|| QuoteError::missing_field("sqft"))?,
            paint_quality: self
                .paint_quality
                .ok_or_else(|| QuoteError::missing_field("paint_quality"))?,
            project_type: self
                .project_type
                .ok_or_else(|| QuoteError::missing_field("project_type"))?,
            prep_level: self
                .prep_level
                .ok_or_else(|| QuoteError::missing_field("prep_level"))?,
            timeline: self.timeline.unwrap_or(Timeline::Standard),
        })
    }
}

/// Newly-extracted fields from one message. Only fields absent from the
/// passed-in context are ever populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_type: Option<QuoteType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<SimpleProjectType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sqft: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paint_quality: Option<SimpleQuality>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_level: Option<PrepLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Timeline>,
}

impl ContextPatch {
    /// True if the message yielded nothing.
    pub fn is_empty(&self) -> bool {
        self.client_name.is_none()
            && self.address.is_none()
            && self.quote_type.is_none()
            && self.project_type.is_none()
            && self.sqft.is_none()
            && self.paint_quality.is_none()
            && self.prep_level.is_none()
            && self.timeline.is_none()
    }
}

/// What one message produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseOutcome {
    /// Fields extracted from this message (never includes already-set ones)
    pub extracted: ContextPatch,

    /// Prompt for the next unset field; empty once complete
    pub next_question: String,

    /// True once every required field is present after merging `extracted`
    pub is_complete: bool,

    /// True when the customer asked to start a fresh quote; the caller
    /// should replace its context with an empty one
    pub reset: bool,
}
