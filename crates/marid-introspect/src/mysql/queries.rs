use sqlx::MySqlPool;

use marid_core::CatalogError;

use crate::catalog::{CatalogResult, RawColumn, RawForeignKey};

const LIST_BASE_TABLES: &str = r#"
    select cast(TABLE_NAME as char)
    from INFORMATION_SCHEMA.TABLES
    where TABLE_SCHEMA = ?
      and TABLE_TYPE = 'BASE TABLE'
    order by TABLE_NAME
"#;

const TABLE_COMMENT: &str = r#"
    select cast(TABLE_COMMENT as char)
    from INFORMATION_SCHEMA.TABLES
    where TABLE_SCHEMA = DATABASE()
      and TABLE_NAME = ?
"#;

const LIST_COLUMNS: &str = r#"
    select
      cast(COLUMN_NAME as char),
      cast(DATA_TYPE as char),
      cast(IS_NULLABLE as char),
      cast(COLUMN_KEY as char),
      cast(COLUMN_COMMENT as char)
    from INFORMATION_SCHEMA.COLUMNS
    where TABLE_SCHEMA = DATABASE()
      and TABLE_NAME = ?
    order by ORDINAL_POSITION
"#;

const LIST_PRIMARY_KEY: &str = r#"
    select cast(COLUMN_NAME as char)
    from INFORMATION_SCHEMA.KEY_COLUMN_USAGE
    where TABLE_SCHEMA = DATABASE()
      and TABLE_NAME = ?
      and CONSTRAINT_NAME = 'PRIMARY'
    order by ORDINAL_POSITION
"#;

const LIST_FOREIGN_KEYS: &str = r#"
    select
      cast(COLUMN_NAME as char),
      cast(REFERENCED_TABLE_NAME as char),
      cast(REFERENCED_COLUMN_NAME as char),
      cast(CONSTRAINT_NAME as char)
    from INFORMATION_SCHEMA.KEY_COLUMN_USAGE
    where TABLE_SCHEMA = DATABASE()
      and TABLE_NAME = ?
      and REFERENCED_TABLE_NAME is not null
    order by ORDINAL_POSITION
"#;

pub async fn list_base_tables(pool: &MySqlPool, database: &str) -> CatalogResult<Vec<String>> {
    sqlx::query_scalar::<_, String>(LIST_BASE_TABLES)
        .bind(database)
        .fetch_all(pool)
        .await
        .map_err(to_catalog_error)
}

pub async fn table_comment(pool: &MySqlPool, table: &str) -> CatalogResult<String> {
    let comment = sqlx::query_scalar::<_, Option<String>>(TABLE_COMMENT)
        .bind(table)
        .fetch_one(pool)
        .await
        .map_err(to_catalog_error)?;
    Ok(comment.unwrap_or_default())
}

pub async fn list_columns(pool: &MySqlPool, table: &str) -> CatalogResult<Vec<RawColumn>> {
    let rows = sqlx::query_as::<_, (String, String, String, String, Option<String>)>(LIST_COLUMNS)
        .bind(table)
        .fetch_all(pool)
        .await
        .map_err(to_catalog_error)?;

    Ok(rows
        .into_iter()
        .map(
            |(name, data_type, is_nullable, column_key, comment)| RawColumn {
                name,
                data_type,
                is_nullable,
                column_key,
                comment: comment.unwrap_or_default(),
            },
        )
        .collect())
}

pub async fn list_primary_key(pool: &MySqlPool, table: &str) -> CatalogResult<Vec<String>> {
    sqlx::query_scalar::<_, String>(LIST_PRIMARY_KEY)
        .bind(table)
        .fetch_all(pool)
        .await
        .map_err(to_catalog_error)
}

pub async fn list_foreign_keys(pool: &MySqlPool, table: &str) -> CatalogResult<Vec<RawForeignKey>> {
    let rows = sqlx::query_as::<_, (String, Option<String>, String, String)>(LIST_FOREIGN_KEYS)
        .bind(table)
        .fetch_all(pool)
        .await
        .map_err(to_catalog_error)?;

    Ok(rows
        .into_iter()
        .map(
            |(column_name, referenced_table, referenced_column, constraint_name)| RawForeignKey {
                column_name,
                referenced_table,
                referenced_column,
                constraint_name,
            },
        )
        .collect())
}

pub(crate) fn to_catalog_error(err: sqlx::Error) -> CatalogError {
    match &err {
        sqlx::Error::RowNotFound => CatalogError::RowNotFound(err.to_string()),
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::TypeNotFound { .. } => CatalogError::Scan(err.to_string()),
        _ => CatalogError::Query(err.to_string()),
    }
}
