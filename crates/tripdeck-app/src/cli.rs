//! CLI argument definitions for the Tripdeck application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tripdeck_assistant::Purpose;
use tripdeck_expense::SortOrder;

/// Tripdeck — travel assistant and expense tracker.
#[derive(Parser, Debug)]
#[command(name = "tripdeck", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Answer locally instead of contacting the configured backend.
    #[arg(long = "mock")]
    pub mock: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive assistant conversation.
    Chat,
    /// Ask the assistant a single question.
    Ask {
        /// Free-text query.
        query: String,
        /// Query purpose: general, itinerary, or budget.
        #[arg(short = 'p', long = "purpose", default_value = "general", value_parser = parse_purpose)]
        purpose: Purpose,
    },
    /// Manage trip expenses.
    #[command(subcommand)]
    Expense(ExpenseCommand),
    /// Inspect or update configuration.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
pub enum ExpenseCommand {
    /// Record a new expense.
    Add {
        /// What the money was spent on.
        description: String,
        /// Amount in rupees.
        amount: f64,
        /// Category: transport, accommodation, food, activities, shopping, or other.
        category: String,
        /// Expense date (YYYY-MM-DD); defaults to today.
        #[arg(short = 'd', long = "date")]
        date: Option<chrono::NaiveDate>,
    },
    /// List recorded expenses.
    List {
        /// Only show this category.
        #[arg(long = "category")]
        category: Option<String>,
        /// Date order: asc or desc.
        #[arg(long = "sort", default_value = "desc", value_parser = parse_sort)]
        sort: SortOrder,
    },
    /// Delete an expense by id.
    Remove {
        /// Id of the expense to delete.
        id: uuid::Uuid,
    },
    /// Write the full collection to a JSON file.
    Export {
        /// Output path; defaults to a dated file name in the current directory.
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },
    /// Seed the store with sample expenses.
    Seed,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the current configuration (credential redacted).
    Show,
    /// Update assistant backend settings and save.
    Set {
        /// Backend base URL.
        #[arg(long = "endpoint")]
        endpoint: Option<String>,
        /// Bearer credential.
        #[arg(long = "credential")]
        credential: Option<String>,
        /// Model identifier.
        #[arg(long = "model")]
        model: Option<String>,
    },
}

fn parse_purpose(s: &str) -> Result<Purpose, String> {
    match s.to_lowercase().as_str() {
        "general" => Ok(Purpose::General),
        "itinerary" => Ok(Purpose::Itinerary),
        "budget" => Ok(Purpose::Budget),
        other => Err(format!(
            "unknown purpose '{}': expected general, itinerary, or budget",
            other
        )),
    }
}

fn parse_sort(s: &str) -> Result<SortOrder, String> {
    match s.to_lowercase().as_str() {
        "asc" | "ascending" => Ok(SortOrder::Ascending),
        "desc" | "descending" => Ok(SortOrder::Descending),
        other => Err(format!("unknown sort order '{}': expected asc or desc", other)),
    }
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > TRIPDECK_CONFIG env var > platform default
    /// (~/.tripdeck/config.toml).
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("TRIPDECK_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    /// Returns `None` if not overridden.
    pub fn resolve_log_level(&self) -> Option<String> {
        self.log_level.clone()
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".tripdeck").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".tripdeck").join("config.toml");
    }
    PathBuf::from("config.toml")
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        #[cfg(target_os = "windows")]
        let home = std::env::var("USERPROFILE");
        #[cfg(not(target_os = "windows"))]
        let home = std::env::var("HOME");
        if let Ok(home) = home {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(path)
}
