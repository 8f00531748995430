//! Command-line interface definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// AI travel itinerary search with durable favorites
#[derive(Debug, Parser)]
#[command(name = "tw", version, about)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search for itineraries for a destination
    Search {
        /// Destination, e.g. "Lisbon"
        destination: String,

        /// Trip duration in days
        #[arg(short, long)]
        days: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Manage favorite itineraries
    Fav {
        #[command(subcommand)]
        command: FavCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum FavCommand {
    /// List favorited itineraries
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Add a favorite from a JSON record (file, or stdin when omitted)
    Add {
        /// Path to a JSON file holding one itinerary record
        file: Option<PathBuf>,
    },

    /// Remove a favorite by id
    Remove {
        /// The itinerary id to remove
        id: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_args() {
        let cli = Cli::parse_from(["tw", "search", "Lisbon", "--days", "3", "--format", "json"]);
        match cli.command {
            Command::Search {
                destination,
                days,
                format,
            } => {
                assert_eq!(destination, "Lisbon");
                assert_eq!(days, "3");
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("expected Search, got {:?}", other),
        }
    }

    #[test]
    fn test_fav_remove_args() {
        let cli = Cli::parse_from(["tw", "fav", "remove", "some-id"]);
        match cli.command {
            Command::Fav {
                command: FavCommand::Remove { id },
            } => assert_eq!(id, "some-id"),
            other => panic!("expected Fav Remove, got {:?}", other),
        }
    }
}
