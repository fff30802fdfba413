use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use marid_core::{Error, Result};

use crate::formatter::{DEFAULT_FORMAT, Formatter};
use crate::mermaid::MermaidFormatter;

/// Constructs a formatter instance.
pub type Factory = Arc<dyn Fn() -> Box<dyn Formatter> + Send + Sync>;

/// Formatters shipped with marid, wired in one place.
const BUILTIN: &[(&str, fn() -> Box<dyn Formatter>)] = &[("mermaid", MermaidFormatter::boxed)];

/// Directory of formatter factories keyed by format name.
///
/// Build one at startup, register every formatter, then share it by reference.
/// Lookups may run concurrently; a single lock guards the map.
#[derive(Default)]
pub struct FormatterRegistry {
    factories: RwLock<BTreeMap<String, Factory>>,
}

impl FormatterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in formatters.
    pub fn with_builtin() -> Self {
        let registry = Self::new();
        for &(name, factory) in BUILTIN {
            registry.register(name, factory);
        }
        registry
    }

    /// Add a formatter factory under `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or already registered. Registration is
    /// startup wiring, never driven by runtime input.
    pub fn register<F>(&self, name: &str, factory: F)
    where
        F: Fn() -> Box<dyn Formatter> + Send + Sync + 'static,
    {
        if name.is_empty() {
            panic!("formatter name cannot be empty");
        }

        let mut factories = self
            .factories
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if factories.contains_key(name) {
            panic!("formatter {name:?} is already registered");
        }

        factories.insert(name.to_string(), Arc::new(factory));
        tracing::debug!(event = "formatter_registered", name = name);
    }

    /// Construct the formatter registered under `name`, or under
    /// [`DEFAULT_FORMAT`] when `name` is empty.
    pub fn get(&self, name: &str) -> Result<Box<dyn Formatter>> {
        let format_name = if name.is_empty() { DEFAULT_FORMAT } else { name };

        let factory = {
            let factories = self
                .factories
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            match factories.get(format_name) {
                Some(factory) => Arc::clone(factory),
                None => {
                    return Err(Error::UnknownFormat {
                        name: format_name.to_string(),
                        available: factories.keys().cloned().collect(),
                    });
                }
            }
        };

        Ok(factory())
    }

    /// Registered format names in sorted order.
    pub fn available(&self) -> Vec<String> {
        self.factories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterRegistry")
            .field("formats", &self.available())
            .finish()
    }
}
