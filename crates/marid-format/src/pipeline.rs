use marid_core::{Result, SchemaSnapshot};

use crate::model::RenderData;
use crate::registry::FormatterRegistry;

/// Render `snapshot` with the formatter registered as `format`.
///
/// The format is resolved before anything is rendered, so an unknown name is
/// reported even for an empty snapshot.
pub fn generate(
    registry: &FormatterRegistry,
    snapshot: &SchemaSnapshot,
    format: &str,
) -> Result<String> {
    let formatter = registry.get(format)?;
    let data = RenderData::from(snapshot);

    tracing::debug!(
        event = "render_started",
        format = formatter.name(),
        tables = data.tables.len()
    );

    formatter.render(&data)
}
