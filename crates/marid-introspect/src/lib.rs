//! Catalog introspection for marid.

pub mod catalog;
pub mod extract;
mod mapper;
pub mod mysql;

pub use catalog::{Catalog, CatalogResult, RawColumn, RawForeignKey};
pub use extract::extract;
pub use mysql::{MySqlCatalog, extract_mysql};

pub use marid_core::{ExtractOptions, SchemaSnapshot};
