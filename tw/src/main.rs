//! tripweaver CLI entry point
//!
//! Thin consumer of the library: wires config, logging, the Gemini client,
//! and the favorites store together and renders results as text or JSON.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info};

use tripweaver::cli::{Cli, Command, FavCommand, OutputFormat};
use tripweaver::config::Config;
use tripweaver::domain::Itinerary;
use tripweaver::favorites::FavoritesStore;
use tripweaver::llm::GeminiClient;
use tripweaver::state::ItineraryCard;
use tripweaver::trips::{DefaultTripsRepository, SearchCache, TripsInteractor};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tripweaver")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Priority: CLI --log-level > config file > INFO
    let level_str = cli_log_level.or(config_log_level);
    let level = match level_str.map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") | None => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", other);
            tracing::Level::INFO
        }
    };

    let log_file = fs::File::create(log_dir.join("tripweaver.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load the log level early, before logging is initialized
    let config_log_level = Config::load_log_level(cli.config.as_ref());

    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::Search {
            destination,
            days,
            format,
        } => cmd_search(&config, &destination, &days, format).await,
        Command::Fav { command } => match command {
            FavCommand::List { format } => cmd_fav_list(&config, format),
            FavCommand::Add { file } => cmd_fav_add(&config, file.as_deref()).await,
            FavCommand::Remove { id } => cmd_fav_remove(&config, &id).await,
        },
    }
}

/// Open the favorites store under the configured data directory
fn open_store(config: &Config) -> Result<FavoritesStore> {
    fs::create_dir_all(&config.storage.data_dir).context("Failed to create data directory")?;
    FavoritesStore::open(&config.storage.data_dir).context("Failed to open favorites store")
}

/// Search for itineraries and print them, flagging favorited ones
async fn cmd_search(config: &Config, destination: &str, days: &str, format: OutputFormat) -> Result<()> {
    debug!(%destination, %days, "cmd_search: called");
    config.validate()?;

    if destination.trim().is_empty() {
        return Err(eyre::eyre!("Destination must not be blank"));
    }
    if days.trim().is_empty() || !days.chars().all(|c| c.is_ascii_digit()) {
        return Err(eyre::eyre!("Duration must be a whole number of days"));
    }

    let client = GeminiClient::from_config(&config.llm).map_err(|e| eyre::eyre!(e.to_string()))?;
    let repository = Arc::new(DefaultTripsRepository::new(Arc::new(client), SearchCache::new()));
    let interactor = TripsInteractor::new(repository);

    let store = open_store(config)?;
    let favorites = store.observe().borrow().clone();

    let results = interactor
        .search(destination, days)
        .await
        .map_err(|e| eyre::eyre!(e.to_string()))
        .context("Search failed")?;

    if results.is_empty() {
        println!("No itineraries returned for {} ({} days).", destination, days);
        return Ok(());
    }

    let cards: Vec<ItineraryCard> = results
        .iter()
        .map(|record| {
            let is_favorite = favorites.iter().any(|fav| fav.id == record.id);
            ItineraryCard::from_record(record, is_favorite)
        })
        .collect();

    print_cards(&cards, format)
}

/// List favorited itineraries
fn cmd_fav_list(config: &Config, format: OutputFormat) -> Result<()> {
    debug!("cmd_fav_list: called");
    let store = open_store(config)?;
    let favorites = store.observe().borrow().clone();

    if favorites.is_empty() {
        println!("No favorites yet.");
        return Ok(());
    }

    let cards: Vec<ItineraryCard> = favorites
        .iter()
        .map(|record| ItineraryCard::from_record(record, true))
        .collect();
    print_cards(&cards, format)
}

/// Add a favorite from a JSON record read from a file or stdin
async fn cmd_fav_add(config: &Config, file: Option<&std::path::Path>) -> Result<()> {
    debug!(?file, "cmd_fav_add: called");
    let content = match file {
        Some(path) => fs::read_to_string(path).context(format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read record from stdin")?;
            buf
        }
    };

    let record: Itinerary = serde_json::from_str(&content).context("Failed to parse itinerary record")?;
    let id = record.id.clone();
    let title = record.title.clone();

    let store = open_store(config)?;
    store.add(record).await.context("Failed to persist favorite")?;
    println!("Favorited '{}' ({})", title, id);
    Ok(())
}

/// Remove a favorite by id
async fn cmd_fav_remove(config: &Config, id: &str) -> Result<()> {
    debug!(%id, "cmd_fav_remove: called");
    let store = open_store(config)?;
    store.remove(id).await.context("Failed to remove favorite")?;
    println!("Removed favorite {}", id);
    Ok(())
}

fn print_cards(cards: &[ItineraryCard], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json: Vec<serde_json::Value> = cards
                .iter()
                .map(|card| {
                    serde_json::json!({
                        "id": card.id,
                        "title": card.title,
                        "level": card.level,
                        "program": card.program,
                        "favorite": card.is_favorite,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            for card in cards {
                let marker = if card.is_favorite { "★" } else { " " };
                println!("{} {} [{}]", marker, card.title, card.level);
                println!("  id: {}", card.id);
                for day in &card.program {
                    println!("  - {}", day);
                }
                println!();
            }
        }
    }
    Ok(())
}
