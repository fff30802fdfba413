use marid_core::SchemaSnapshot;

/// Normalized schema information passed to formatters.
///
/// Table order is significant: formatters may use it as a position index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderData {
    pub tables: Vec<Table>,
}

/// A database table for rendering purposes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub comment: String,
    pub columns: Vec<Column>,
    pub primary_key: Vec<String>,
    pub foreign_keys: Vec<ForeignKey>,
}

impl Table {
    pub fn is_primary(&self, column: &str) -> bool {
        self.primary_key.iter().any(|name| name == column)
    }

    pub fn is_foreign(&self, column: &str) -> bool {
        self.foreign_keys.iter().any(|fk| fk.column_name == column)
    }
}

/// A database column for rendering purposes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub data_type: String,
    pub is_nullable: bool,
    pub is_primary: bool,
    pub is_unique: bool,
    pub comment: String,
}

/// A foreign key relationship for rendering purposes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForeignKey {
    pub column_name: String,
    pub referenced_table: String,
    pub referenced_column: String,
    pub relation_name: String,
}

impl From<&SchemaSnapshot> for RenderData {
    fn from(snapshot: &SchemaSnapshot) -> Self {
        let tables = snapshot
            .tables
            .iter()
            .map(|table| Table {
                name: table.name.clone(),
                comment: table.comment.clone(),
                columns: table
                    .columns
                    .iter()
                    .map(|col| Column {
                        name: col.name.clone(),
                        data_type: col.data_type.clone(),
                        is_nullable: col.is_nullable,
                        is_primary: col.is_primary,
                        is_unique: col.is_unique,
                        comment: col.comment.clone(),
                    })
                    .collect(),
                primary_key: table.primary_key.clone(),
                foreign_keys: table
                    .foreign_keys
                    .iter()
                    .map(|fk| ForeignKey {
                        column_name: fk.column_name.clone(),
                        referenced_table: fk.referenced_table.clone(),
                        referenced_column: fk.referenced_column.clone(),
                        relation_name: fk.relation_name.clone(),
                    })
                    .collect(),
            })
            .collect();

        RenderData { tables }
    }
}
