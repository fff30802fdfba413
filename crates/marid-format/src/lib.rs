//! Diagram formatters for marid.
//!
//! Formatters consume [`RenderData`], a copy of the schema snapshot that does
//! not depend on extraction internals, and are selected by name through a
//! [`FormatterRegistry`] built once at startup.

pub mod edges;
pub mod formatter;
pub mod mermaid;
pub mod model;
pub mod pipeline;
pub mod registry;

pub use edges::{Relationship, ordered_relationships};
pub use formatter::{DEFAULT_FORMAT, Formatter};
pub use mermaid::MermaidFormatter;
pub use model::{Column, ForeignKey, RenderData, Table};
pub use pipeline::generate;
pub use registry::{Factory, FormatterRegistry};
