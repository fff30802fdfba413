use marid_core::Result;

use crate::model::RenderData;

/// Fallback format name when none is provided.
pub const DEFAULT_FORMAT: &str = "mermaid";

/// Renders schema data into one diagram notation.
pub trait Formatter: Send + Sync {
    /// Formatter name (e.g. `mermaid`).
    fn name(&self) -> &'static str;

    /// MIME type associated with the output (e.g. `text/plain`).
    fn media_type(&self) -> &'static str;

    /// Build the formatted representation. Fails with `Error::NoTables` when
    /// `data` holds no tables.
    fn render(&self, data: &RenderData) -> Result<String>;
}
