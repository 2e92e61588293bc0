//! Fixed per-tier daily cost tables.
//!
//! Whole-rupee daily rates per spending category. Food and activities are
//! priced per person; accommodation, transport, and miscellaneous cover the
//! whole party.

use crate::types::Tier;

/// Spending categories priced by the daily-rate tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateCategory {
    Accommodation,
    Food,
    Transport,
    Activities,
    Miscellaneous,
}

impl RateCategory {
    /// All categories in display order.
    pub const ALL: [RateCategory; 5] = [
        RateCategory::Accommodation,
        RateCategory::Food,
        RateCategory::Transport,
        RateCategory::Activities,
        RateCategory::Miscellaneous,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RateCategory::Accommodation => "Accommodation",
            RateCategory::Food => "Food",
            RateCategory::Transport => "Transport",
            RateCategory::Activities => "Activities",
            RateCategory::Miscellaneous => "Miscellaneous",
        }
    }

    /// Whether this line item scales with party size.
    pub fn per_person(&self) -> bool {
        matches!(self, RateCategory::Food | RateCategory::Activities)
    }
}

/// Daily rates in whole rupees for one tier.
#[derive(Debug, Clone, Copy)]
pub struct DailyRates {
    pub accommodation: u64,
    pub food: u64,
    pub transport: u64,
    pub activities: u64,
    pub miscellaneous: u64,
}

impl DailyRates {
    pub fn rate(&self, category: RateCategory) -> u64 {
        match category {
            RateCategory::Accommodation => self.accommodation,
            RateCategory::Food => self.food,
            RateCategory::Transport => self.transport,
            RateCategory::Activities => self.activities,
            RateCategory::Miscellaneous => self.miscellaneous,
        }
    }
}

/// Daily-rate table for the given tier.
pub const fn rates_for(tier: Tier) -> DailyRates {
    match tier {
        Tier::BudgetFriendly => DailyRates {
            accommodation: 1_200,
            food: 600,
            transport: 400,
            activities: 500,
            miscellaneous: 300,
        },
        Tier::MidRange => DailyRates {
            accommodation: 3_500,
            food: 1_200,
            transport: 900,
            activities: 1_200,
            miscellaneous: 600,
        },
        Tier::Luxury => DailyRates {
            accommodation: 9_000,
            food: 3_000,
            transport: 2_500,
            activities: 4_000,
            miscellaneous: 1_500,
        },
    }
}

/// Trip total for one category: daily rate times day count, times party
/// size when the category is per-person.
pub fn category_total(tier: Tier, category: RateCategory, days: u32, party_size: u32) -> u64 {
    let multiplier = if category.per_person() {
        u64::from(party_size)
    } else {
        1
    };
    rates_for(tier).rate(category) * u64::from(days) * multiplier
}

/// Per-day cost for one category, party-adjusted the same way.
pub fn category_daily(tier: Tier, category: RateCategory, party_size: u32) -> u64 {
    category_total(tier, category, 1, party_size)
}

/// Sum of all category totals for the trip.
pub fn grand_total(tier: Tier, days: u32, party_size: u32) -> u64 {
    RateCategory::ALL
        .iter()
        .map(|&c| category_total(tier, c, days, party_size))
        .sum()
}

/// Fixed money-saving tips keyed by tier.
pub fn tips_for(tier: Tier) -> &'static [&'static str] {
    match tier {
        Tier::BudgetFriendly => &[
            "Book hostels or guesthouses a few weeks ahead for the best rates.",
            "Eat where the locals eat; street food and thalis stretch the food budget.",
            "Use state buses and shared taxis instead of private cabs.",
        ],
        Tier::MidRange => &[
            "Mix one or two splurge meals with everyday local restaurants.",
            "Mid-week hotel rates are noticeably lower than weekend ones.",
            "Pre-book popular activities online to skip walk-in premiums.",
        ],
        Tier::Luxury => &[
            "Resort packages often bundle spa and dining credits worth asking for.",
            "A private driver for the whole stay usually beats per-trip luxury cabs.",
            "Book signature experiences early; the best slots sell out first.",
        ],
    }
}
