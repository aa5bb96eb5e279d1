//! CLI module for eventdb
//!
//! Provides the command-line interface for:
//! - find: read a whole collection
//! - insert: append one record to a collection
//! - events: query the remote event repository (list, get, filter)

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, EventsCommand};
pub use commands::{events, find, insert, run, run_command};
pub use errors::{CliError, CliResult};
pub use io::{write_error, write_response};
