//! Travel assistant for Tripdeck.
//!
//! Provides backend configuration, trip query parsing, canned response
//! generation, the request client with local fallback, and conversation
//! state management.

pub mod client;
pub mod config;
pub mod conversation;
pub mod error;
pub mod generator;
pub mod parser;
pub mod rates;
pub mod types;

pub use client::AssistantClient;
pub use config::{AssistantConfig, ConfigPatch, ConfigStore};
pub use conversation::{Conversation, ConversationController};
pub use error::AssistantError;
pub use generator::{FixedPicker, Picker, ResponseGenerator, ThreadRngPicker};
pub use parser::QueryParser;
pub use rates::RateCategory;
pub use types::{ChatEnvelope, ChatRequest, Message, Purpose, Sender, Tier, TripQuery};
