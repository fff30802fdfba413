//! Relationship ordering shared by formatters that lay entities out linearly.

use std::collections::HashMap;

use crate::model::RenderData;

/// One edge per foreign key, pointing from the referenced table to the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub source: String,
    pub target: String,
    pub label: String,
    /// Distance between the endpoints in table order; 0 when an endpoint is
    /// not part of the render data.
    pub crossing_distance: usize,
}

/// Collect relationships and order them shortest span first.
///
/// Ties keep discovery order (table order, then foreign key order), so the
/// output is deterministic for a given input.
pub fn ordered_relationships(data: &RenderData) -> Vec<Relationship> {
    let positions: HashMap<&str, usize> = data
        .tables
        .iter()
        .enumerate()
        .map(|(index, table)| (table.name.as_str(), index))
        .collect();

    let mut relationships = Vec::new();
    for table in &data.tables {
        for fk in &table.foreign_keys {
            let source = positions.get(fk.referenced_table.as_str());
            let target = positions.get(table.name.as_str());
            let crossing_distance = match (source, target) {
                (Some(source), Some(target)) => source.abs_diff(*target),
                _ => 0,
            };

            relationships.push(Relationship {
                source: fk.referenced_table.clone(),
                target: table.name.clone(),
                label: fk.relation_name.clone(),
                crossing_distance,
            });
        }
    }

    relationships.sort_by_key(|rel| rel.crossing_distance);
    relationships
}
