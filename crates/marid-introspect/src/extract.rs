use marid_core::{Error, ExtractOptions, Phase, Result, SchemaSnapshot, Table};

use crate::catalog::Catalog;
use crate::mapper;

/// Read the catalog and build a schema snapshot.
///
/// Tables are processed one at a time, four queries each, in catalog order.
/// The first failing query aborts the run; no partial snapshot is returned.
/// A filter that matches nothing yields an empty snapshot, not an error.
pub async fn extract<C>(catalog: &C, opts: &ExtractOptions) -> Result<SchemaSnapshot>
where
    C: Catalog + ?Sized,
{
    tracing::info!(
        event = "extraction_started",
        engine = catalog.engine(),
        database = %opts.database,
        filter = opts.tables.len()
    );

    let listed = catalog
        .list_base_tables(&opts.database)
        .await
        .map_err(|err| Error::extract(Phase::TableListing, None, err))?;
    let names = mapper::filter_tables(listed, opts);

    if names.is_empty() && !opts.tables.is_empty() {
        tracing::warn!(
            event = "filter_matched_nothing",
            database = %opts.database,
            requested = ?opts.tables
        );
    }

    let mut tables = Vec::with_capacity(names.len());
    for name in names {
        tables.push(extract_table(catalog, name).await?);
    }

    tracing::info!(event = "extraction_finished", tables = tables.len());

    Ok(SchemaSnapshot {
        tables,
        options: opts.clone(),
    })
}

async fn extract_table<C>(catalog: &C, name: String) -> Result<Table>
where
    C: Catalog + ?Sized,
{
    let comment = catalog
        .table_comment(&name)
        .await
        .map_err(|err| Error::extract(Phase::CommentLookup, Some(&name), err))?;

    let raw_columns = catalog
        .list_columns(&name)
        .await
        .map_err(|err| Error::extract(Phase::ColumnScan, Some(&name), err))?;

    let primary_key = catalog
        .list_primary_key(&name)
        .await
        .map_err(|err| Error::extract(Phase::PrimaryKeyScan, Some(&name), err))?;

    let raw_fks = catalog
        .list_foreign_keys(&name)
        .await
        .map_err(|err| Error::extract(Phase::ForeignKeyScan, Some(&name), err))?;

    let table = Table {
        comment,
        columns: mapper::map_columns(raw_columns),
        primary_key,
        foreign_keys: mapper::map_foreign_keys(raw_fks),
        name,
    };

    tracing::debug!(
        event = "table_extracted",
        table = %table.name,
        columns = table.columns.len(),
        foreign_keys = table.foreign_keys.len()
    );

    Ok(table)
}
