use serde::{Deserialize, Serialize};

/// Options that select what the extractor reads from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Database (catalog schema) whose base tables are listed.
    pub database: String,
    /// Exact table names to keep; empty keeps every table.
    pub tables: Vec<String>,
}

impl ExtractOptions {
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            tables: Vec::new(),
        }
    }

    pub fn with_tables<I, S>(mut self, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tables = tables.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true when `table` passes the allow-list.
    pub fn retains(&self, table: &str) -> bool {
        self.tables.is_empty() || self.tables.iter().any(|name| name == table)
    }
}

/// Schema snapshot produced by a single extraction run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    /// Tables in discovery order. Renderers use this order as a position index.
    pub tables: Vec<Table>,
    /// Options the snapshot was extracted with.
    pub options: ExtractOptions,
}

impl SchemaSnapshot {
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// A base table with its columns and keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub comment: String,
    /// Columns in catalog ordinal order.
    pub columns: Vec<Column>,
    /// Primary key column names in key ordinal order.
    pub primary_key: Vec<String>,
    pub foreign_keys: Vec<ForeignKey>,
}

impl Table {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }
}

/// Column metadata. `data_type` is the raw catalog string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub data_type: String,
    pub is_nullable: bool,
    pub is_primary: bool,
    pub is_unique: bool,
    pub comment: String,
}

/// Single-column reference from an owning column to another table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    pub column_name: String,
    pub referenced_table: String,
    pub referenced_column: String,
    /// Constraint name, used as the relationship label.
    pub relation_name: String,
}
