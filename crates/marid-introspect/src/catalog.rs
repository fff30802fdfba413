use async_trait::async_trait;

use marid_core::CatalogError;

/// Result type returned by catalog queries.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Column descriptor as read from the catalog, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawColumn {
    pub name: String,
    pub data_type: String,
    /// Yes/no flag (`YES` / `NO`).
    pub is_nullable: String,
    /// Key classification code (`PRI`, `UNI`, `MUL` or empty).
    pub column_key: String,
    pub comment: String,
}

/// Key usage row describing one referencing column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawForeignKey {
    pub column_name: String,
    /// `None` for key usage rows of non-referential constraints.
    pub referenced_table: Option<String>,
    pub referenced_column: String,
    pub constraint_name: String,
}

/// Query capability the extractor needs from a database catalog.
///
/// Row order of the per-table listings must follow the catalog's ordinal
/// positions.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Returns the engine identifier (e.g. `mysql`).
    fn engine(&self) -> &'static str;

    /// Base table names in `database`, in catalog order.
    async fn list_base_tables(&self, database: &str) -> CatalogResult<Vec<String>>;

    /// Table-level comment. A missing table is `CatalogError::RowNotFound`.
    async fn table_comment(&self, table: &str) -> CatalogResult<String>;

    async fn list_columns(&self, table: &str) -> CatalogResult<Vec<RawColumn>>;

    /// Primary key column names in key ordinal order.
    async fn list_primary_key(&self, table: &str) -> CatalogResult<Vec<String>>;

    async fn list_foreign_keys(&self, table: &str) -> CatalogResult<Vec<RawForeignKey>>;
}
