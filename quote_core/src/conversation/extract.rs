//! Free-text field extraction for the quote assistant.
//!
//! An ordered set of regex/keyword tests per field. Best-effort by design:
//! an unrecognized message extracts nothing and the same question is asked
//! again. The hazardous cases are handled narrowly:
//!
//! - Square footage requires a unit suffix or a contextual cue ("about X",
//!   "Xk") so street numbers in addresses are not read as areas. A bare
//!   number is accepted only while square footage is the field being asked.
//! - "1"/"2"/"3" shortcut answers are resolved against the field currently
//!   being solicited, never against the digit's own pattern.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ContextField, ContextPatch, ConversationContext, ParseOutcome, QuoteType};
use crate::calculations::simplified::{PrepLevel, SimpleProjectType, SimpleQuality, Timeline};

// === Reset ===

static RESET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:another|new|next)\s+(?:quote|estimate|one)\b").unwrap()
});
static START_OVER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:start\s+over|reset)\b").unwrap());

// === Client name ===

static NAME_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:my name is|the name is|name's|this is|i am|i'm|quote for|estimate for)\s+([a-z][a-z .'\-]{1,60})").unwrap()
});
static NAME_STOPWORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:quote|estimate|paint|painting|looking|interested|call|hoping|need|want|here|hi|hello|hey)\b").unwrap()
});

// === Address ===

static ADDRESS_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:address is|located at|property at|job site at|house at|it's at)\s+(\d[^\n!?]*)").unwrap()
});
static STREET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b\d{1,6}\s+[a-z0-9 .'\-]+?\s(?:st|street|ave|avenue|rd|road|dr|drive|ln|lane|blvd|boulevard|ct|court|way|pl|place|cir|circle|ter|terrace)\.?(?:\s*,[^\n!?]+)?").unwrap()
});

// === Square footage ===

static SQFT_UNIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d[\d,]*(?:\.\d+)?)\s*(?:sq\.?\s*ft\.?|sqft|square\s*feet|square\s*foot|sf)\b").unwrap()
});
static SQFT_K_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d+(?:\.\d+)?)\s*k\b").unwrap());
static SQFT_APPROX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:about|around|approximately|approx\.?|roughly)\s+(\d[\d,]*(?:\.\d+)?)\b").unwrap()
});
static BARE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d[\d,]*(?:\.\d+)?)").unwrap());

// === Option keywords ===

static QUICK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:quick|fast|simple|ballpark|rough)\b").unwrap());
static ADVANCED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:advanced|detailed|full|thorough|comprehensive)\b").unwrap()
});

static BOTH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:both|whole\s+house|inside\s+and\s+out|entire)\b").unwrap()
});
static INTERIOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:interior|inside|indoors?)\b").unwrap());
static EXTERIOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:exterior|outside|outdoors?)\b").unwrap());

static BASIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:basic|economy|budget|cheap(?:est)?|affordable)\b").unwrap()
});
static LUXURY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:luxury|luxurious|high[-\s]?end|top[-\s]?shelf|best)\b").unwrap()
});
static PREMIUM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:premium|mid[-\s]?range|better)\b").unwrap());

static PREP_EXTENSIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:extensive|heavy|major|peeling|water\s+damage|cracking|rough\s+shape)\b").unwrap()
});
static PREP_MINIMAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:minimal|light|touch[-\s]?ups?|good\s+(?:condition|shape))\b").unwrap()
});
static PREP_STANDARD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:standard|normal|average|typical)\b").unwrap());

static TIMELINE_FLEXIBLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:flexible|whenever|no\s+(?:rush|hurry)|any\s*time|not\s+in\s+a\s+hurry)\b").unwrap()
});
static TIMELINE_RUSH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:rush(?:ed)?|asap|urgent(?:ly)?|right\s+away|as\s+soon\s+as)\b").unwrap()
});
static TIMELINE_STANDARD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:standard|normal|regular)\b").unwrap());

static OPTION_DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([123])\b").unwrap());

/// Parse one customer message against the context collected so far.
///
/// Only fields absent from `ctx` are extracted; nothing is ever overwritten.
/// See the module docs on [`super`] for the contract.
pub fn parse_message(message: &str, ctx: &ConversationContext) -> ParseOutcome {
    // "Can I get another quote?" mid-conversation wipes the slate rather
    // than erroring. Only honored once a name exists, so the opening
    // message "I need a new quote" doesn't immediately reset an empty
    // conversation.
    if ctx.client_name.is_some()
        && (RESET_RE.is_match(message) || START_OVER_RE.is_match(message))
    {
        return ParseOutcome {
            extracted: ContextPatch::default(),
            next_question: ContextField::ClientName.prompt().to_string(),
            is_complete: false,
            reset: true,
        };
    }

    let asked = ctx.next_missing_field();
    let option = shortcut_option(message);
    let mut patch = ContextPatch::default();

    if ctx.client_name.is_none() {
        patch.client_name = extract_name(message, asked == Some(ContextField::ClientName));
    }
    if ctx.address.is_none() {
        patch.address = extract_address(message, asked == Some(ContextField::Address));
    }
    if ctx.quote_type.is_none() {
        patch.quote_type = extract_quote_type(
            message,
            if asked == Some(ContextField::QuoteType) {
                option
            } else {
                None
            },
        );
    }
    if ctx.project_type.is_none() {
        patch.project_type = extract_project_type(
            message,
            if asked == Some(ContextField::ProjectType) {
                option
            } else {
                None
            },
        );
    }
    if ctx.sqft.is_none() {
        patch.sqft = extract_sqft(message, asked == Some(ContextField::SquareFootage));
    }
    if ctx.paint_quality.is_none() {
        patch.paint_quality = extract_quality(
            message,
            if asked == Some(ContextField::PaintQuality) {
                option
            } else {
                None
            },
        );
    }
    if ctx.prep_level.is_none() {
        patch.prep_level = extract_prep(
            message,
            if asked == Some(ContextField::PrepLevel) {
                option
            } else {
                None
            },
        );
    }
    if ctx.timeline.is_none() {
        patch.timeline = extract_timeline(
            message,
            if asked == Some(ContextField::Timeline) {
                option
            } else {
                None
            },
        );
    }

    let merged = ctx.merged(&patch);
    let next = merged.next_missing_field();
    ParseOutcome {
        extracted: patch,
        next_question: next.map(|f| f.prompt().to_string()).unwrap_or_default(),
        is_complete: next.is_none(),
        reset: false,
    }
}

/// First standalone 1/2/3 in the message, if any. Meaningless on its own;
/// the caller decides which menu it answers.
fn shortcut_option(message: &str) -> Option<u8> {
    OPTION_DIGIT_RE
        .captures(message)
        .and_then(|c| c[1].parse().ok())
}

fn clean_capture(raw: &str) -> String {
    raw.trim().trim_end_matches(['.', ',', '!', '?']).trim().to_string()
}

fn extract_name(message: &str, asked: bool) -> Option<String> {
    if let Some(caps) = NAME_MARKER_RE.captures(message) {
        let name = clean_capture(&caps[1]);
        // Markers like "I'm" also introduce non-names ("I'm looking for...")
        if !name.is_empty()
            && name.split_whitespace().count() <= 5
            && !NAME_STOPWORD_RE.is_match(&name)
        {
            return Some(name);
        }
    }

    // When the name question is on the table, a short no-digit message is
    // taken as the answer itself.
    if asked {
        let candidate = clean_capture(message);
        if (2..=40).contains(&candidate.len())
            && candidate.split_whitespace().count() <= 5
            && !candidate.chars().any(|c| c.is_ascii_digit())
            && !NAME_STOPWORD_RE.is_match(&candidate)
        {
            return Some(candidate);
        }
    }
    None
}

fn extract_address(message: &str, asked: bool) -> Option<String> {
    if let Some(caps) = ADDRESS_MARKER_RE.captures(message) {
        let addr = clean_capture(&caps[1]);
        if !addr.is_empty() {
            return Some(addr);
        }
    }
    if let Some(m) = STREET_RE.find(message) {
        return Some(clean_capture(m.as_str()));
    }

    // Answering the address question: accept anything with a street number
    // in it, even without a recognizable suffix.
    if asked {
        let candidate = clean_capture(message);
        if candidate.chars().any(|c| c.is_ascii_digit())
            && candidate.chars().any(|c| c.is_alphabetic())
        {
            return Some(candidate);
        }
    }
    None
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse::<f64>().ok().filter(|v| *v > 0.0)
}

fn extract_sqft(message: &str, asked: bool) -> Option<f64> {
    if let Some(caps) = SQFT_UNIT_RE.captures(message) {
        return parse_number(&caps[1]);
    }
    if let Some(caps) = SQFT_K_RE.captures(message) {
        return parse_number(&caps[1]).map(|v| v * 1000.0);
    }
    if let Some(caps) = SQFT_APPROX_RE.captures(message) {
        return parse_number(&caps[1]);
    }
    // A bare number is only an area when the square-footage question was
    // just asked; otherwise it is more likely a street number.
    if asked {
        if let Some(caps) = BARE_NUMBER_RE.captures(message) {
            return parse_number(&caps[1]);
        }
    }
    None
}

fn extract_quote_type(message: &str, option: Option<u8>) -> Option<QuoteType> {
    match option {
        Some(1) => return Some(QuoteType::Quick),
        Some(2) => return Some(QuoteType::Advanced),
        _ => {}
    }
    if QUICK_RE.is_match(message) {
        Some(QuoteType::Quick)
    } else if ADVANCED_RE.is_match(message) {
        Some(QuoteType::Advanced)
    } else {
        None
    }
}

fn extract_project_type(message: &str, option: Option<u8>) -> Option<SimpleProjectType> {
    match option {
        Some(1) => return Some(SimpleProjectType::Interior),
        Some(2) => return Some(SimpleProjectType::Exterior),
        Some(3) => return Some(SimpleProjectType::Both),
        _ => {}
    }
    let interior = INTERIOR_RE.is_match(message);
    let exterior = EXTERIOR_RE.is_match(message);
    if BOTH_RE.is_match(message) || (interior && exterior) {
        Some(SimpleProjectType::Both)
    } else if interior {
        Some(SimpleProjectType::Interior)
    } else if exterior {
        Some(SimpleProjectType::Exterior)
    } else {
        None
    }
}

fn extract_quality(message: &str, option: Option<u8>) -> Option<SimpleQuality> {
    match option {
        Some(1) => return Some(SimpleQuality::Basic),
        Some(2) => return Some(SimpleQuality::Premium),
        Some(3) => return Some(SimpleQuality::Luxury),
        _ => {}
    }
    if LUXURY_RE.is_match(message) {
        Some(SimpleQuality::Luxury)
    } else if BASIC_RE.is_match(message) {
        Some(SimpleQuality::Basic)
    } else if PREMIUM_RE.is_match(message) {
        Some(SimpleQuality::Premium)
    } else {
        None
    }
}

fn extract_prep(message: &str, option: Option<u8>) -> Option<PrepLevel> {
    match option {
        Some(1) => return Some(PrepLevel::Minimal),
        Some(2) => return Some(PrepLevel::Standard),
        Some(3) => return Some(PrepLevel::Extensive),
        _ => {}
    }
    if PREP_EXTENSIVE_RE.is_match(message) {
        Some(PrepLevel::Extensive)
    } else if PREP_MINIMAL_RE.is_match(message) {
        Some(PrepLevel::Minimal)
    } else if PREP_STANDARD_RE.is_match(message) {
        Some(PrepLevel::Standard)
    } else {
        None
    }
}

fn extract_timeline(message: &str, option: Option<u8>) -> Option<Timeline> {
    match option {
        Some(1) => return Some(Timeline::Rush),
        Some(2) => return Some(Timeline::Standard),
        Some(3) => return Some(Timeline::Flexible),
        _ => {}
    }
    // "no rush" must win over the bare "rush" keyword
    if TIMELINE_FLEXIBLE_RE.is_match(message) {
        Some(Timeline::Flexible)
    } else if TIMELINE_RUSH_RE.is_match(message) {
        Some(Timeline::Rush)
    } else if TIMELINE_STANDARD_RE.is_match(message) {
        Some(Timeline::Standard)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_through_sqft() -> ConversationContext {
        ConversationContext {
            client_name: Some("Dana Whitfield".to_string()),
            address: Some("412 Alder Court".to_string()),
            quote_type: Some(QuoteType::Quick),
            project_type: Some(SimpleProjectType::Interior),
            ..Default::default()
        }
    }

    #[test]
    fn test_name_from_marker() {
        let ctx = ConversationContext::default();
        let outcome = parse_message("Hello, my name is Dana Whitfield", &ctx);
        assert_eq!(outcome.extracted.client_name.as_deref(), Some("Dana Whitfield"));
        assert!(outcome.next_question.contains("address"));
    }

    #[test]
    fn test_bare_name_when_asked() {
        let ctx = ConversationContext::default();
        let outcome = parse_message("Dana Whitfield", &ctx);
        assert_eq!(outcome.extracted.client_name.as_deref(), Some("Dana Whitfield"));
    }

    #[test]
    fn test_greeting_is_not_a_name() {
        let ctx = ConversationContext::default();
        let outcome = parse_message("Hi, I'm looking for a painting quote", &ctx);
        assert!(outcome.extracted.client_name.is_none());
        // Unparseable message re-asks the same question
        assert_eq!(outcome.next_question, ContextField::ClientName.prompt());
    }

    #[test]
    fn test_address_from_street_suffix() {
        let ctx = ConversationContext {
            client_name: Some("Dana".to_string()),
            ..Default::default()
        };
        let outcome = parse_message("It's 412 Alder Court, Portland", &ctx);
        let addr = outcome.extracted.address.unwrap();
        assert!(addr.starts_with("412 Alder Court"));
    }

    #[test]
    fn test_address_number_is_not_sqft() {
        let ctx = ConversationContext {
            client_name: Some("Dana".to_string()),
            ..Default::default()
        };
        let outcome = parse_message("The address is 2500 Birchwood Lane", &ctx);
        assert!(outcome.extracted.sqft.is_none());
        assert!(outcome.extracted.address.is_some());
    }

    #[test]
    fn test_sqft_with_unit_suffix() {
        let outcome = parse_message("It's about 1,800 sq ft inside", &ConversationContext::default());
        assert_eq!(outcome.extracted.sqft, Some(1800.0));
    }

    #[test]
    fn test_sqft_k_shorthand() {
        let outcome = parse_message("roughly 2.5k", &ctx_through_sqft());
        assert_eq!(outcome.extracted.sqft, Some(2500.0));
    }

    #[test]
    fn test_bare_number_only_when_solicited() {
        // Square footage is the next unset field here, so a bare number is
        // the answer to the question on the table
        let outcome = parse_message("1500", &ctx_through_sqft());
        assert_eq!(outcome.extracted.sqft, Some(1500.0));

        // Same message with the name question pending extracts nothing
        let outcome = parse_message("1500", &ConversationContext::default());
        assert!(outcome.extracted.sqft.is_none());
        assert!(outcome.extracted.client_name.is_none());
    }

    #[test]
    fn test_digit_shortcut_follows_solicited_field() {
        // QuoteType is being asked: "2" means advanced
        let ctx = ConversationContext {
            client_name: Some("Dana".to_string()),
            address: Some("412 Alder Court".to_string()),
            ..Default::default()
        };
        let outcome = parse_message("2", &ctx);
        assert_eq!(outcome.extracted.quote_type, Some(QuoteType::Advanced));
        assert!(outcome.extracted.project_type.is_none());

        // Same "2" while PaintQuality is being asked: premium
        let mut ctx = ctx_through_sqft();
        ctx.sqft = Some(1400.0);
        let outcome = parse_message("2", &ctx);
        assert_eq!(outcome.extracted.paint_quality, Some(SimpleQuality::Premium));
        assert_eq!(outcome.extracted.quote_type, None);
    }

    #[test]
    fn test_keywords_fill_multiple_fields() {
        let ctx = ConversationContext {
            client_name: Some("Dana".to_string()),
            address: Some("412 Alder Court".to_string()),
            ..Default::default()
        };
        let outcome = parse_message(
            "Give me a quick quote, interior only, about 1200 sqft, luxury paint",
            &ctx,
        );
        let p = &outcome.extracted;
        assert_eq!(p.quote_type, Some(QuoteType::Quick));
        assert_eq!(p.project_type, Some(SimpleProjectType::Interior));
        assert_eq!(p.sqft, Some(1200.0));
        assert_eq!(p.paint_quality, Some(SimpleQuality::Luxury));
    }

    #[test]
    fn test_no_rush_means_flexible() {
        let mut ctx = ctx_through_sqft();
        ctx.quote_type = Some(QuoteType::Advanced);
        ctx.sqft = Some(1400.0);
        ctx.paint_quality = Some(SimpleQuality::Premium);
        ctx.prep_level = Some(PrepLevel::Standard);
        let outcome = parse_message("no rush at all", &ctx);
        assert_eq!(outcome.extracted.timeline, Some(Timeline::Flexible));
        assert!(outcome.is_complete);
        assert_eq!(outcome.next_question, "");
    }

    #[test]
    fn test_set_fields_never_reextracted() {
        let ctx = ctx_through_sqft();
        let outcome = parse_message("my name is Somebody New, exterior job", &ctx);
        // Name and project type are already set; the patch must not carry them
        assert!(outcome.extracted.client_name.is_none());
        assert!(outcome.extracted.project_type.is_none());
    }

    #[test]
    fn test_reset_requires_existing_name() {
        // Fresh conversation: "new quote" is just an opener
        let outcome = parse_message("I need a new quote", &ConversationContext::default());
        assert!(!outcome.reset);

        // Mid-conversation: it wipes the slate
        let outcome = parse_message("let's do another quote", &ctx_through_sqft());
        assert!(outcome.reset);
        assert!(outcome.extracted.is_empty());
        assert_eq!(outcome.next_question, ContextField::ClientName.prompt());
        assert!(!outcome.is_complete);
    }

    #[test]
    fn test_quick_flow_completes_in_seven_messages() {
        let messages = [
            "my name is Dana Whitfield",
            "412 Alder Court, Portland",
            "quick please",
            "interior",
            "about 1400",
            "premium",
            "standard prep",
        ];
        let mut ctx = ConversationContext::default();
        let mut last_complete = false;
        for msg in messages {
            let outcome = parse_message(msg, &ctx);
            ctx = ctx.merged(&outcome.extracted);
            last_complete = outcome.is_complete;
        }
        assert!(last_complete);
        assert!(ctx.to_simplified_input().is_ok());
    }

    #[test]
    fn test_advanced_flow_completes_in_eight_messages() {
        let messages = [
            "Dana Whitfield",
            "412 Alder Court",
            "2",
            "3",
            "2200 sqft",
            "luxury",
            "extensive",
            "flexible",
        ];
        let mut ctx = ConversationContext::default();
        let mut last_complete = false;
        for msg in messages {
            let outcome = parse_message(msg, &ctx);
            ctx = ctx.merged(&outcome.extracted);
            last_complete = outcome.is_complete;
        }
        assert!(last_complete);
        assert_eq!(ctx.quote_type, Some(QuoteType::Advanced));
        assert_eq!(ctx.project_type, Some(SimpleProjectType::Both));
        assert_eq!(ctx.timeline, Some(Timeline::Flexible));
    }

    #[test]
    fn test_unparseable_message_reasks() {
        let ctx = ctx_through_sqft();
        let before = ctx.next_missing_field().unwrap();
        let outcome = parse_message("hmm let me think", &ctx);
        assert!(outcome.extracted.is_empty());
        assert_eq!(outcome.next_question, before.prompt());
        assert!(!outcome.is_complete);
    }
}
