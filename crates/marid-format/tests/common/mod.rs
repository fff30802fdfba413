#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use marid_core::{Error, Result};
use marid_format::{Column, ForeignKey, Formatter, RenderData, Table};

/// Canonical render data used by formatter contract tests.
pub fn sample_render_data() -> RenderData {
    RenderData {
        tables: vec![
            Table {
                name: "teams".to_string(),
                primary_key: vec!["id".to_string()],
                columns: vec![column("id", "int", false), column("name", "text", false)],
                ..Table::default()
            },
            Table {
                name: "users".to_string(),
                primary_key: vec!["id".to_string()],
                columns: vec![
                    column("id", "int", false),
                    column("email", "varchar", true),
                    column("team_id", "int", false),
                ],
                foreign_keys: vec![ForeignKey {
                    column_name: "team_id".to_string(),
                    referenced_table: "teams".to_string(),
                    referenced_column: "id".to_string(),
                    relation_name: "belongs_to".to_string(),
                }],
                ..Table::default()
            },
        ],
    }
}

/// Expected Mermaid output for [`sample_render_data`].
pub const SAMPLE_MERMAID_OUTPUT: &str = r#"erDiagram
    teams {
        id int PK
        name text
    }
    users {
        id int PK
        email varchar UK
        team_id int FK
    }
    teams ||--o{ users : "belongs_to"
"#;

fn column(name: &str, data_type: &str, is_unique: bool) -> Column {
    Column {
        name: name.to_string(),
        data_type: data_type.to_string(),
        is_unique,
        ..Column::default()
    }
}

/// Formatter that records what it was asked to render.
#[derive(Clone)]
pub struct MockFormatter {
    pub name: &'static str,
    pub output: Option<String>,
    pub calls: Arc<Mutex<Vec<RenderData>>>,
}

impl MockFormatter {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            output: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_output(mut self, output: &str) -> Self {
        self.output = Some(output.to_string());
        self
    }
}

impl Formatter for MockFormatter {
    fn name(&self) -> &'static str {
        self.name
    }

    fn media_type(&self) -> &'static str {
        "text/plain"
    }

    fn render(&self, data: &RenderData) -> Result<String> {
        self.calls.lock().expect("calls lock").push(data.clone());
        match &self.output {
            Some(output) => Ok(output.clone()),
            None if data.tables.is_empty() => Err(Error::NoTables),
            None => Ok(format!("{} tables", data.tables.len())),
        }
    }
}
