//! Core contracts for marid.
//!
//! This crate defines the schema snapshot model, the shared error type, and
//! snapshot validation used by the extractor, the formatters and the CLI.

pub mod error;
pub mod schema;
pub mod validation;

pub use error::{CatalogError, Error, Phase, Result};
pub use schema::{Column, ExtractOptions, ForeignKey, SchemaSnapshot, Table};
pub use validation::validate_snapshot;
