//! CLI argument definitions using clap
//!
//! Commands:
//! - eventdb find <collection> [--data-dir <path>]
//! - eventdb insert <collection> <fields-json> [--data-dir <path>]
//! - eventdb events list
//! - eventdb events get <id>
//! - eventdb events filter <year> <month>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// eventdb - file-backed collections and a validated remote event repository
#[derive(Parser, Debug)]
#[command(name = "eventdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base directory for collection files
    #[arg(long, global = true, default_value = "./db")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every record of a collection
    Find {
        /// Collection name (e.g. "users")
        collection: String,
    },

    /// Insert a record into a collection
    Insert {
        /// Collection name (e.g. "users")
        collection: String,
        /// Record fields as a JSON object
        fields: String,
    },

    /// Query the remote event repository
    Events {
        #[command(subcommand)]
        command: EventsCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum EventsCommand {
    /// Fetch and print every event
    List,

    /// Fetch one event by id
    Get {
        /// Event id (e.g. "e1")
        id: String,
    },

    /// Fetch the events of one calendar month
    Filter {
        /// Calendar year (e.g. 2021)
        year: i32,
        /// 1-based month (1 = January)
        month: u32,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
