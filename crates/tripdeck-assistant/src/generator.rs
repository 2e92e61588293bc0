//! Canned response generation.
//!
//! Answers queries locally when no backend is reachable or mock mode is
//! active. General answers come from a fixed pool picked at random;
//! itinerary and budget answers are composed deterministically from the
//! parsed trip query and the per-tier daily-rate tables. No network or
//! storage access happens here.

use rand::Rng;

use tripdeck_core::money::format_inr;

use crate::parser::{QueryParser, DEFAULT_PARTY_SIZE};
use crate::rates::{category_daily, category_total, grand_total, tips_for, RateCategory};
use crate::types::{Purpose, TripQuery};

/// Fixed pool of general travel answers.
static GENERAL_ANSWERS: &[&str] = &[
    "Based on your budget, I recommend staying at Zostel or Backpacker Panda in North Goa for affordable accommodations with great social atmosphere.",
    "For Jaipur, don't miss Amber Fort, Hawa Mahal, City Palace, Jantar Mantar, and Jal Mahal. The local markets like Johari Bazaar are also worth exploring!",
    "I've created a 5-day itinerary for Manali: Day 1: Arrive and explore Mall Road. Day 2: Visit Solang Valley. Day 3: Hike to Jogini Waterfall. Day 4: Day trip to Naggar Castle. Day 5: Visit Beas River and Hadimba Temple before departure.",
    "October is a great time to visit Kerala as the monsoon ends and the weather becomes pleasant. The backwaters will be full, and the landscapes lush green!",
    "For a family of four, budget around \u{20b9}25,000 for accommodations, \u{20b9}15,000 for food, \u{20b9}10,000 for local transport, and \u{20b9}20,000 for activities over a 5-day trip to Darjeeling.",
];

/// Day-plan templates cycled through when composing an itinerary.
static DAY_PLANS: &[&str] = &[
    "Arrive, check in, and take a relaxed walk around the main market area.",
    "Spend the day at the most popular sights; start early to beat the crowds.",
    "Take a day trip to a nearby village or viewpoint recommended by locals.",
    "Explore the local food scene and pick up souvenirs at the bazaars.",
    "Keep the morning free, then catch a cultural show or sunset point.",
    "Head outdoors: a short trek, boat ride, or cycling loop depending on the region.",
    "Wrap up loose ends, revisit a favourite spot, and depart.",
];

/// Source of random indices for the general answer pool.
///
/// Injectable so tests can fix the selection; production uses [`ThreadRngPicker`].
pub trait Picker: Send + Sync {
    /// Pick an index in `0..len`. `len` is always non-zero.
    fn pick(&self, len: usize) -> usize;
}

/// Uniformly random picker backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl Picker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Picker that always returns the same index, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl Picker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

/// Composes canned answers for the three query purposes.
pub struct ResponseGenerator {
    parser: QueryParser,
    picker: Box<dyn Picker>,
}

impl Default for ResponseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseGenerator {
    /// Generator with uniformly random general-answer selection.
    pub fn new() -> Self {
        Self::with_picker(Box::new(ThreadRngPicker))
    }

    /// Generator with an injected picker.
    pub fn with_picker(picker: Box<dyn Picker>) -> Self {
        Self {
            parser: QueryParser::new(),
            picker,
        }
    }

    /// Produce a canned answer for the query under the given purpose.
    pub fn generate(&self, query: &str, purpose: Purpose) -> String {
        match purpose {
            Purpose::General => self.general_answer(),
            Purpose::Itinerary => self.itinerary_answer(&self.parser.parse(query)),
            Purpose::Budget => self.budget_answer(&self.parser.parse(query)),
        }
    }

    fn general_answer(&self) -> String {
        GENERAL_ANSWERS[self.picker.pick(GENERAL_ANSWERS.len())].to_string()
    }

    /// Day-by-day plan with party-adjusted daily cost lines and a grand
    /// total. Itinerary queries carry no party keyword, so per-person
    /// items are priced for the default party of two.
    fn itinerary_answer(&self, query: &TripQuery) -> String {
        let party = DEFAULT_PARTY_SIZE;
        let mut lines = vec![format!(
            "Here's a {}-day {} itinerary for {}:",
            query.days,
            query.tier,
            query.destination_label()
        )];
        lines.push(String::new());

        for day in 1..=query.days {
            let plan = DAY_PLANS[(day as usize - 1) % DAY_PLANS.len()];
            lines.push(format!("Day {}: {}", day, plan));
        }

        lines.push(String::new());
        lines.push(format!("Daily costs for a party of {}:", party));
        for category in RateCategory::ALL {
            lines.push(format!(
                "- {}: {}/day",
                category.label(),
                format_inr(category_daily(query.tier, category, party))
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            "Grand total for {} days: {}",
            query.days,
            format_inr(grand_total(query.tier, query.days, party))
        ));

        lines.join("\n")
    }

    /// Per-category totals, grand total, per-person figures, and
    /// tier-keyed tips. Category totals sum exactly to the grand total;
    /// the per-person figures use integer division.
    fn budget_answer(&self, query: &TripQuery) -> String {
        let party = query.party_size.max(1);
        let total = grand_total(query.tier, query.days, party);
        let per_person = total / u64::from(party);
        let per_person_per_day = per_person / u64::from(query.days.max(1));

        let mut lines = vec![format!(
            "Estimated {} budget for {} ({} days, party of {}):",
            query.tier,
            query.destination_label(),
            query.days,
            party
        )];
        lines.push(String::new());

        for category in RateCategory::ALL {
            lines.push(format!(
                "- {}: {}",
                category.label(),
                format_inr(category_total(query.tier, category, query.days, party))
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {}", format_inr(total)));
        lines.push(format!("Per person: {}", format_inr(per_person)));
        lines.push(format!(
            "Per person per day: {}",
            format_inr(per_person_per_day)
        ));

        lines.push(String::new());
        lines.push("Tips:".to_string());
        for tip in tips_for(query.tier) {
            lines.push(format!("- {}", tip));
        }

        lines.join("\n")
    }
}

// =============================================================================
// Tests
// =============================================================================
