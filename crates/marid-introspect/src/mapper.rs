use marid_core::{Column, ExtractOptions, ForeignKey};

use crate::catalog::{RawColumn, RawForeignKey};

pub fn filter_tables(raw: Vec<String>, opts: &ExtractOptions) -> Vec<String> {
    raw.into_iter().filter(|name| opts.retains(name)).collect()
}

pub fn map_columns(raw: Vec<RawColumn>) -> Vec<Column> {
    raw.into_iter()
        .map(|col| {
            let key = col.column_key.to_uppercase();
            Column {
                name: col.name,
                data_type: col.data_type,
                is_nullable: col.is_nullable.eq_ignore_ascii_case("YES"),
                is_primary: key == "PRI",
                is_unique: key == "UNI",
                comment: col.comment,
            }
        })
        .collect()
}

pub fn map_foreign_keys(raw: Vec<RawForeignKey>) -> Vec<ForeignKey> {
    raw.into_iter()
        .filter_map(|fk| {
            let referenced_table = fk.referenced_table.filter(|name| !name.is_empty())?;
            Some(ForeignKey {
                column_name: fk.column_name,
                referenced_table,
                referenced_column: fk.referenced_column,
                relation_name: fk.constraint_name,
            })
        })
        .collect()
}
