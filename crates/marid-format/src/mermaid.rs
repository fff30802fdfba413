//! Mermaid erDiagram output.

use marid_core::{Error, Result};

use crate::edges::ordered_relationships;
use crate::formatter::Formatter;
use crate::model::{Column, RenderData, Table};

/// Renders ER diagrams using Mermaid syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct MermaidFormatter;

impl MermaidFormatter {
    pub fn new() -> Self {
        MermaidFormatter
    }

    pub fn boxed() -> Box<dyn Formatter> {
        Box::new(MermaidFormatter)
    }
}

impl Formatter for MermaidFormatter {
    fn name(&self) -> &'static str {
        "mermaid"
    }

    fn media_type(&self) -> &'static str {
        "text/plain"
    }

    fn render(&self, data: &RenderData) -> Result<String> {
        if data.tables.is_empty() {
            return Err(Error::NoTables);
        }

        let mut output = String::new();
        output.push_str("erDiagram\n");

        for table in &data.tables {
            output.push_str(&format!("    {} {{\n", table.name));
            for column in &table.columns {
                output.push_str(&attribute_line(table, column));
            }
            output.push_str("    }\n");
        }

        for rel in ordered_relationships(data) {
            output.push_str(&format!(
                "    {} ||--o{{ {} : \"{}\"\n",
                rel.source, rel.target, rel.label
            ));
        }

        Ok(output)
    }
}

fn attribute_line(table: &Table, column: &Column) -> String {
    let mut line = format!("        {} {}", column.name, column.data_type);

    let tags = key_tags(table, column);
    if !tags.is_empty() {
        line.push(' ');
        line.push_str(&tags.join(", "));
    }

    if !column.comment.is_empty() {
        line.push_str(&format!(" \"{}\"", column.comment));
    }

    line.push('\n');
    line
}

/// Key markers in PK, FK, UK order. Primary keys are implicitly unique, so
/// `UK` is suppressed for them.
fn key_tags(table: &Table, column: &Column) -> Vec<&'static str> {
    let mut tags = Vec::new();

    let is_primary = table.is_primary(&column.name);
    if is_primary {
        tags.push("PK");
    }
    if table.is_foreign(&column.name) {
        tags.push("FK");
    }
    if column.is_unique && !is_primary {
        tags.push("UK");
    }

    tags
}
