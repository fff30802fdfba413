use std::fmt;

use thiserror::Error;

/// Failure reported by a catalog implementation for a single query.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog rejected the statement or the connection was lost.
    #[error("query failed: {0}")]
    Query(String),
    /// A returned row could not be decoded (type mismatch, unexpected null).
    #[error("row scan failed: {0}")]
    Scan(String),
    /// A single-row lookup matched nothing.
    #[error("no matching row: {0}")]
    RowNotFound(String),
}

/// Extraction step that was running when a catalog call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    TableListing,
    CommentLookup,
    ColumnScan,
    PrimaryKeyScan,
    ForeignKeyScan,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::TableListing => "table listing",
            Phase::CommentLookup => "comment lookup",
            Phase::ColumnScan => "column scan",
            Phase::PrimaryKeyScan => "primary key scan",
            Phase::ForeignKeyScan => "foreign key scan",
        };
        f.write_str(label)
    }
}

/// Core error type shared across marid crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A catalog call failed while building a schema snapshot.
    #[error("{phase} failed{}: {source}", table_suffix(.table))]
    Extract {
        phase: Phase,
        table: Option<String>,
        #[source]
        source: CatalogError,
    },
    /// There is nothing to render.
    #[error("no tables found in schema")]
    NoTables,
    /// The requested output format is not registered.
    #[error("unknown format {name:?}. Available formats: {}", .available.join(", "))]
    UnknownFormat {
        name: String,
        available: Vec<String>,
    },
    /// The snapshot violates model invariants.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
}

impl Error {
    pub fn extract(phase: Phase, table: Option<&str>, source: CatalogError) -> Self {
        Error::Extract {
            phase,
            table: table.map(str::to_string),
            source,
        }
    }
}

fn table_suffix(table: &Option<String>) -> String {
    match table {
        Some(name) => format!(" for table {name}"),
        None => String::new(),
    }
}

/// Convenience alias for results returned by marid crates.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_error_names_phase_and_table() {
        let err = Error::extract(
            Phase::ColumnScan,
            Some("users"),
            CatalogError::Scan("bad value".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "column scan failed for table users: row scan failed: bad value"
        );
    }

    #[test]
    fn table_listing_error_has_no_table() {
        let err = Error::extract(
            Phase::TableListing,
            None,
            CatalogError::Query("connection reset".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "table listing failed: query failed: connection reset"
        );
    }

    #[test]
    fn unknown_format_lists_available_names() {
        let err = Error::UnknownFormat {
            name: "svg".to_string(),
            available: vec!["dot".to_string(), "mermaid".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown format \"svg\". Available formats: dot, mermaid"
        );
    }
}
