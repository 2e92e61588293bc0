//! Tripdeck application binary - composition root.
//!
//! Ties the Tripdeck crates together into a single executable:
//! 1. Load configuration from TOML
//! 2. Initialize tracing
//! 3. Dispatch to the assistant (chat/ask), expense, or config commands

use std::io::Write;
use std::sync::Arc;

use clap::Parser;

use tripdeck_assistant::{
    AssistantClient, AssistantConfig, ConfigPatch, ConfigStore, ConversationController, Purpose,
};
use tripdeck_core::money::format_inr;
use tripdeck_core::TripdeckConfig;
use tripdeck_expense::{demo_expenses, Category, ExpenseStore, FileKv, NewExpense};

mod cli;

use cli::{expand_home, CliArgs, Command, ConfigCommand, ExpenseCommand};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_path = args.resolve_config_path();
    let config = TripdeckConfig::load_or_default(&config_path);

    // Tracing.
    let level = args
        .resolve_log_level()
        .unwrap_or_else(|| config.general.log_level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    tracing::info!("Starting Tripdeck v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_path.display(), "Configuration loaded");

    match args.command {
        Command::Chat => run_chat(&config, args.mock).await?,
        Command::Ask { query, purpose } => {
            let mut controller = build_controller(&config, args.mock);
            match controller.send(&query, purpose).await {
                Ok(()) => {
                    if let Some(reply) = controller.state().messages().last() {
                        println!("{}", reply.content);
                    }
                }
                Err(e) => {
                    eprintln!("error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Command::Expense(cmd) => run_expense(&config, cmd)?,
        Command::Config(cmd) => run_config(&config_path, config, cmd)?,
    }

    Ok(())
}

fn build_controller(config: &TripdeckConfig, mock_flag: bool) -> ConversationController {
    let store = Arc::new(ConfigStore::new(AssistantConfig {
        endpoint: config.assistant.endpoint.clone(),
        credential: config.assistant.credential.clone(),
        model: config.assistant.model.clone(),
    }));
    let client =
        AssistantClient::new(store).with_mock_mode(mock_flag || config.assistant.mock_mode);
    ConversationController::new(client)
}

/// Interactive conversation loop.
///
/// Plain lines are general queries; `/itinerary` and `/budget` prefixes
/// switch purpose for that message, `/reset` clears the transcript, and
/// `/quit` exits.
async fn run_chat(config: &TripdeckConfig, mock_flag: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = build_controller(config, mock_flag);
    println!("Tripdeck assistant. /itinerary and /budget set the purpose, /reset clears, /quit exits.");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        let (purpose, query) = match line {
            "/quit" | "/exit" => break,
            "/reset" => {
                controller.reset();
                println!("Conversation cleared.");
                continue;
            }
            _ => {
                if let Some(rest) = line.strip_prefix("/itinerary") {
                    (Purpose::Itinerary, rest.trim())
                } else if let Some(rest) = line.strip_prefix("/budget") {
                    (Purpose::Budget, rest.trim())
                } else {
                    (Purpose::General, line)
                }
            }
        };
        if query.is_empty() {
            continue;
        }

        match controller.send(query, purpose).await {
            Ok(()) => {
                if let Some(reply) = controller.state().messages().last() {
                    println!("{}\n", reply.content);
                }
            }
            Err(e) => eprintln!("error: {}\n", e),
        }
    }

    Ok(())
}

fn open_store(config: &TripdeckConfig) -> Result<ExpenseStore, Box<dyn std::error::Error>> {
    let dir = expand_home(&config.expenses.data_dir);
    let kv = Arc::new(FileKv::open(&dir)?);
    Ok(ExpenseStore::open(kv)?)
}

fn run_expense(
    config: &TripdeckConfig,
    cmd: ExpenseCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(config)?;

    match cmd {
        ExpenseCommand::Add {
            description,
            amount,
            category,
            date,
        } => {
            let record = store.add(NewExpense {
                description,
                amount,
                category: category.parse::<Category>()?,
                date: date.unwrap_or_else(|| chrono::Local::now().date_naive()),
            })?;
            println!(
                "Added {} ({}) as {}",
                record.description,
                format_amount(record.amount),
                record.id
            );
        }
        ExpenseCommand::List { category, sort } => {
            let category = category.map(|c| c.parse::<Category>()).transpose()?;
            let mut records = store.sorted_by_date(sort);
            if let Some(c) = category {
                records.retain(|r| r.category == c);
            }
            if records.is_empty() {
                println!("No expenses recorded.");
                return Ok(());
            }
            for r in &records {
                println!(
                    "{}  {:<13}  {:>12}  {}  [{}]",
                    r.date,
                    r.category,
                    format_amount(r.amount),
                    r.description,
                    r.id
                );
            }
            let total: f64 = records.iter().map(|r| r.amount).sum();
            println!("Total: {}", format_amount(total));
        }
        ExpenseCommand::Remove { id } => {
            if store.remove(&id)? {
                println!("Removed {}", id);
            } else {
                println!("No expense with id {}", id);
            }
        }
        ExpenseCommand::Export { output } => {
            let blob = store.export()?;
            let path = output.unwrap_or_else(|| {
                ExpenseStore::export_file_name(chrono::Local::now().date_naive()).into()
            });
            std::fs::write(&path, blob)?;
            println!("Exported {} expenses to {}", store.len(), path.display());
        }
        ExpenseCommand::Seed => {
            let mut added = 0;
            for e in demo_expenses() {
                store.add(e)?;
                added += 1;
            }
            println!("Seeded {} sample expenses.", added);
        }
    }

    Ok(())
}

fn run_config(
    config_path: &std::path::Path,
    mut config: TripdeckConfig,
    cmd: ConfigCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommand::Show => {
            let endpoint = if config.assistant.endpoint.is_empty() {
                "(not set)"
            } else {
                &config.assistant.endpoint
            };
            // The credential itself is never printed.
            let credential = if config.assistant.credential.is_empty() {
                "not configured"
            } else {
                "configured"
            };
            println!("endpoint:   {}", endpoint);
            println!("credential: {}", credential);
            println!("model:      {}", config.assistant.model);
            println!("mock mode:  {}", config.assistant.mock_mode);
            println!("data dir:   {}", config.expenses.data_dir);
            println!("log level:  {}", config.general.log_level);
        }
        ConfigCommand::Set {
            endpoint,
            credential,
            model,
        } => {
            // Same shallow-merge semantics as the runtime store.
            let store = ConfigStore::new(AssistantConfig {
                endpoint: config.assistant.endpoint.clone(),
                credential: config.assistant.credential.clone(),
                model: config.assistant.model.clone(),
            });
            let merged = store.configure(ConfigPatch {
                endpoint,
                credential,
                model,
            });
            config.assistant.endpoint = merged.endpoint;
            config.assistant.credential = merged.credential;
            config.assistant.model = merged.model;
            config.save(config_path)?;
            println!("Configuration saved to {}", config_path.display());
        }
    }

    Ok(())
}

/// Amounts are rupees; whole values use the grouped display format.
fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount >= 0.0 {
        format_inr(amount as u64)
    } else {
        format!("\u{20b9}{:.2}", amount)
    }
}
