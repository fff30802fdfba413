use async_trait::async_trait;
use sqlx::MySqlPool;

use marid_core::{ExtractOptions, Result, SchemaSnapshot};

use crate::catalog::{Catalog, CatalogResult, RawColumn, RawForeignKey};

mod queries;

/// MySQL catalog backed by `INFORMATION_SCHEMA`.
///
/// Per-table lookups resolve against the connection's current database, so the
/// pool should be opened on the database being extracted.
#[derive(Debug, Clone)]
pub struct MySqlCatalog {
    pool: MySqlPool,
}

impl MySqlCatalog {
    /// Create a new catalog using a pre-configured pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Catalog for MySqlCatalog {
    fn engine(&self) -> &'static str {
        "mysql"
    }

    async fn list_base_tables(&self, database: &str) -> CatalogResult<Vec<String>> {
        queries::list_base_tables(&self.pool, database).await
    }

    async fn table_comment(&self, table: &str) -> CatalogResult<String> {
        queries::table_comment(&self.pool, table).await
    }

    async fn list_columns(&self, table: &str) -> CatalogResult<Vec<RawColumn>> {
        queries::list_columns(&self.pool, table).await
    }

    async fn list_primary_key(&self, table: &str) -> CatalogResult<Vec<String>> {
        queries::list_primary_key(&self.pool, table).await
    }

    async fn list_foreign_keys(&self, table: &str) -> CatalogResult<Vec<RawForeignKey>> {
        queries::list_foreign_keys(&self.pool, table).await
    }
}

/// Extract a MySQL schema snapshot from `pool`.
pub async fn extract_mysql(pool: &MySqlPool, opts: &ExtractOptions) -> Result<SchemaSnapshot> {
    let catalog = MySqlCatalog::new(pool.clone());
    crate::extract::extract(&catalog, opts).await
}
