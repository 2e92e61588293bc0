//! Shared types for the assistant pipeline.

use serde::{Deserialize, Serialize};

/// Classification attached to a user query, steering which response
/// strategy answers it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    #[default]
    General,
    Itinerary,
    Budget,
}

impl Purpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            Purpose::General => "general",
            Purpose::Itinerary => "itinerary",
            Purpose::Budget => "budget",
        }
    }
}

impl std::fmt::Display for Purpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Budget tier driving which cost table prices a generated itinerary or
/// budget breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    BudgetFriendly,
    #[default]
    MidRange,
    Luxury,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::BudgetFriendly => "budget-friendly",
            Tier::MidRange => "mid-range",
            Tier::Luxury => "luxury",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Who authored a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A single conversation message. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            content: content.into(),
        }
    }
}

/// Structured trip parameters extracted from a free-text query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripQuery {
    /// Recognized destination, if any place name matched.
    pub destination: Option<String>,
    /// Trip length in days.
    pub days: u32,
    /// Budget tier.
    pub tier: Tier,
    /// Number of travellers.
    pub party_size: u32,
}

impl TripQuery {
    /// Destination for display, falling back to the generic placeholder.
    pub fn destination_label(&self) -> &str {
        self.destination.as_deref().unwrap_or("your destination")
    }
}

/// Request body sent to `POST {endpoint}/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub content: String,
    pub model: String,
    pub purpose: Purpose,
}

/// Expected success envelope from the backend. Additional fields are
/// ignored; a missing `response` field is a malformed envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatEnvelope {
    pub response: String,
}
