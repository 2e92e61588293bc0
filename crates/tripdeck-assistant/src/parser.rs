//! Keyword-based trip query parser.
//!
//! Extracts destination, day count, budget tier, and party size from raw
//! user input to produce a [`TripQuery`]. The matching is deliberately
//! heuristic (fixed place names, English keywords) and kept behind one
//! strategy struct so it can be swapped without touching the generator.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::{Tier, TripQuery};

// =============================================================================
// Keyword tables and compiled patterns (compiled once, reused across calls)
// =============================================================================

/// Recognized destination names, canonical casing.
static KNOWN_DESTINATIONS: &[&str] = &[
    "Goa",
    "Jaipur",
    "Manali",
    "Kerala",
    "Darjeeling",
    "Udaipur",
    "Rishikesh",
    "Shimla",
    "Agra",
    "Leh",
];

static DESTINATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alts: Vec<String> = KNOWN_DESTINATIONS
        .iter()
        .map(|d| regex::escape(d))
        .collect();
    Regex::new(&format!(r"(?i)\b(?:{})\b", alts.join("|"))).expect("Invalid destination regex")
});

// Day-count keywords: "3 day", "5-day", "7 days". Only these three counts
// are recognized; everything else falls back to the default.
static DAY_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b([357])\s*-?\s*days?\b").expect("Invalid day-count regex"));

/// Trip length assumed when no day-count keyword matches.
pub const DEFAULT_DAYS: u32 = 4;

/// Party size assumed when no party keyword matches.
pub const DEFAULT_PARTY_SIZE: u32 = 2;

// =============================================================================
// QueryParser
// =============================================================================

/// Rule-based trip query parser.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryParser;

impl QueryParser {
    pub fn new() -> Self {
        Self
    }

    /// Extract a recognized destination from the query, canonical casing.
    pub fn extract_destination(&self, raw_query: &str) -> Option<String> {
        DESTINATION_RE
            .find(raw_query)
            .map(|m| normalize_destination(m.as_str()))
    }

    /// Extract the trip length in days. Recognizes 3, 5, and 7; defaults
    /// to [`DEFAULT_DAYS`] otherwise.
    pub fn extract_days(&self, raw_query: &str) -> u32 {
        DAY_COUNT_RE
            .captures(raw_query)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(DEFAULT_DAYS)
    }

    /// Classify the budget tier.
    ///
    /// "budget"/"affordable" is checked before "luxury", so a query that
    /// carries both resolves to budget-friendly.
    pub fn extract_tier(&self, raw_query: &str) -> Tier {
        let lower = raw_query.to_lowercase();
        if lower.contains("budget") || lower.contains("affordable") {
            Tier::BudgetFriendly
        } else if lower.contains("luxury") {
            Tier::Luxury
        } else {
            Tier::MidRange
        }
    }

    /// Extract the party size: family travels as 4, a couple as 2, solo
    /// as 1; otherwise [`DEFAULT_PARTY_SIZE`].
    pub fn extract_party_size(&self, raw_query: &str) -> u32 {
        let lower = raw_query.to_lowercase();
        if lower.contains("family") {
            4
        } else if lower.contains("couple") {
            2
        } else if lower.contains("solo") {
            1
        } else {
            DEFAULT_PARTY_SIZE
        }
    }

    /// Parse a raw query into a fully populated [`TripQuery`].
    pub fn parse(&self, raw_query: &str) -> TripQuery {
        TripQuery {
            destination: self.extract_destination(raw_query),
            days: self.extract_days(raw_query),
            tier: self.extract_tier(raw_query),
            party_size: self.extract_party_size(raw_query),
        }
    }
}

/// Normalize matched destination text to canonical casing.
fn normalize_destination(matched: &str) -> String {
    let lower = matched.to_lowercase();
    for dest in KNOWN_DESTINATIONS {
        if dest.to_lowercase() == lower {
            return dest.to_string();
        }
    }
    matched.to_string()
}

// =============================================================================
// Tests
// =============================================================================
