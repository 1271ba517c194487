//! # Type Registry
//!
//! A mapping from a declared type name to the constructor that builds the
//! corresponding domain type from a raw representation. Populated when a
//! caller declares a resource type; consulted, never mutated, during
//! resolution.
//!
//! Registration happens at setup time while lookups may run concurrently
//! with unrelated registrations, so the map lives behind an `RwLock`.
//! Registrations are rare compared to lookups.

use crate::error::Error;
use serde_json::Value;
use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Type-erased constructor: raw representation in, typed payload out.
pub type Constructor =
    Arc<dyn Fn(&Value) -> Result<Arc<dyn Any + Send + Sync>, Error> + Send + Sync>;

#[derive(Default)]
pub struct TypeRegistry {
    types: RwLock<HashMap<String, Constructor>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a constructor under `name`.
    ///
    /// Re-declaring a name simply replaces the previous binding; last
    /// registration wins. There is no removal operation.
    pub fn register(&self, name: &str, constructor: Constructor) {
        debug!(name, "registering type");
        self.types
            .write()
            .expect("type registry lock poisoned")
            .insert(name.to_string(), constructor);
    }

    /// The constructor registered under `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<Constructor> {
        self.types
            .read()
            .expect("type registry lock poisoned")
            .get(name)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tagging_constructor(tag: &'static str) -> Constructor {
        Arc::new(move |_value| Ok(Arc::new(tag) as Arc<dyn Any + Send + Sync>))
    }

    #[test]
    fn lookup_of_unknown_name_is_none() {
        let registry = TypeRegistry::new();
        assert!(registry.lookup("book").is_none());
    }

    #[test]
    fn last_registration_wins() {
        let registry = TypeRegistry::new();
        registry.register("book", tagging_constructor("first"));
        registry.register("book", tagging_constructor("second"));

        let constructor = registry.lookup("book").unwrap();
        let payload = constructor(&json!({})).unwrap();
        assert_eq!(*payload.downcast_ref::<&'static str>().unwrap(), "second");
    }
}
