//! CLI command implementations
//!
//! Store commands run synchronously against the configured data directory.
//! Remote event commands build a current-thread tokio runtime and block on
//! the repository, which is configured from the environment on first use.

use std::path::Path;

use serde_json::Value;
use tracing_subscriber::EnvFilter;

use crate::events::EventRepository;
use crate::store::CollectionStore;

use super::args::{Cli, Command, EventsCommand};
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Parses arguments, initializes logging, and runs the selected command.
///
/// On failure the error is also emitted as a JSON object on stdout, so
/// machine callers see the same taxonomy as library callers.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_logging();

    if let Err(e) = run_command(cli) {
        let _ = write_error(e.code_str(), e.message());
        return Err(e);
    }

    Ok(())
}

/// Dispatches a parsed command.
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Find { collection } => find(&cli.data_dir, &collection),
        Command::Insert { collection, fields } => insert(&cli.data_dir, &collection, &fields),
        Command::Events { command } => events(command),
    }
}

/// `eventdb find <collection>`
pub fn find(data_dir: &Path, collection: &str) -> CliResult<()> {
    let store = CollectionStore::new(data_dir);
    let records = store.find(collection)?;

    write_response(Value::Array(records.into_iter().map(Value::Object).collect()))
}

/// `eventdb insert <collection> <fields-json>`
pub fn insert(data_dir: &Path, collection: &str, fields: &str) -> CliResult<()> {
    let fields: Value = serde_json::from_str(fields)
        .map_err(|e| CliError::invalid_input(format!("record fields are not valid JSON: {}", e)))?;
    let fields = match fields {
        Value::Object(map) => map,
        _ => return Err(CliError::invalid_input("record fields must be a JSON object")),
    };

    let store = CollectionStore::new(data_dir);
    let record = store.insert(collection, fields)?;

    write_response(Value::Object(record))
}

/// `eventdb events <list|get|filter>`
pub fn events(command: EventsCommand) -> CliResult<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::runtime(format!("failed to start async runtime: {}", e)))?;

    let repository = EventRepository::from_env()?;

    let data = match command {
        EventsCommand::List => {
            let events = runtime.block_on(repository.get_all())?;
            serde_json::to_value(events)?
        }
        EventsCommand::Get { id } => {
            let event = runtime.block_on(repository.get_by_id(&id))?;
            serde_json::to_value(event)?
        }
        EventsCommand::Filter { year, month } => {
            let events = runtime.block_on(repository.get_filtered(year, month))?;
            serde_json::to_value(events)?
        }
    };

    write_response(data)
}

/// Initializes tracing to stderr; stdout is reserved for JSON output.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
