use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::schema::SchemaSnapshot;

/// Validate internal consistency of a schema snapshot.
///
/// This checks:
/// - table names are non-empty and unique
/// - column names are non-empty and unique within their table
/// - primary key and foreign key columns exist in the owning table
///
/// Foreign keys pointing at tables outside the snapshot are accepted; a table
/// filter legitimately drops referenced tables.
pub fn validate_snapshot(snapshot: &SchemaSnapshot) -> Result<()> {
    let mut tables = BTreeSet::new();

    for table in &snapshot.tables {
        if table.name.is_empty() {
            return Err(Error::InvalidSchema("empty table name".to_string()));
        }
        if !tables.insert(table.name.as_str()) {
            return Err(Error::InvalidSchema(format!(
                "duplicate table name: {}",
                table.name
            )));
        }

        let mut columns = BTreeSet::new();
        for column in &table.columns {
            if column.name.is_empty() {
                return Err(Error::InvalidSchema(format!(
                    "empty column name in table {}",
                    table.name
                )));
            }
            if !columns.insert(column.name.as_str()) {
                return Err(Error::InvalidSchema(format!(
                    "duplicate column name: {}.{}",
                    table.name, column.name
                )));
            }
        }

        for column in &table.primary_key {
            if !columns.contains(column.as_str()) {
                return Err(Error::InvalidSchema(format!(
                    "primary key column not found: {}.{}",
                    table.name, column
                )));
            }
        }

        for fk in &table.foreign_keys {
            if !columns.contains(fk.column_name.as_str()) {
                return Err(Error::InvalidSchema(format!(
                    "foreign key column not found: {}.{}",
                    table.name, fk.column_name
                )));
            }
        }
    }

    Ok(())
}
