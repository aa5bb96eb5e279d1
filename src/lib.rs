//! eventdb - file-backed document collections and a schema-validated
//! remote event repository
//!
//! The crate has three subsystems:
//! - [`schema`]: event record shape and fail-closed validation
//! - [`store`]: named on-disk collections with find/insert primitives
//! - [`events`]: remote event fetching, reshaping, and querying

pub mod cli;
pub mod events;
pub mod schema;
pub mod store;
