//! Glyph Registry
//!
//! A named-factory lookup table for assets loaded by URI. Unrelated to the
//! simulation core; kept here as host-layer plumbing.

use std::collections::HashMap;

type GlyphFactory<T> = Box<dyn Fn() -> T>;

/// Registry mapping URIs to asset factories.
pub struct GlyphRegistry<T> {
    registry: HashMap<String, GlyphFactory<T>>,
}

impl<T> GlyphRegistry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            registry: HashMap::new(),
        }
    }

    /// Registers a factory under a URI, replacing any previous entry.
    pub fn register(&mut self, uri: impl Into<String>, factory: impl Fn() -> T + 'static) {
        self.registry.insert(uri.into(), Box::new(factory));
    }

    /// Builds the asset registered under `uri`, warning on unknown URIs.
    pub fn load(&self, uri: &str) -> Option<T> {
        match self.registry.get(uri) {
            Some(factory) => Some(factory()),
            None => {
                tracing::warn!(uri, "glyph not found");
                None
            }
        }
    }

    /// Whether a factory is registered under `uri`.
    pub fn contains(&self, uri: &str) -> bool {
        self.registry.contains_key(uri)
    }

    /// Number of registered factories.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl<T> Default for GlyphRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
