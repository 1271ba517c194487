//! # Resource Instances
//!
//! The uniform wrapper around a HAL representation. A [`Resource`] carries
//! the raw document (the source of its `_links`/`_embedded` maps), the type
//! name the engine resolved for it, an optional typed domain payload, and a
//! one-way resolution state. Instances are never pooled or reused; each
//! resolution that constructs a domain object allocates a fresh one.

use crate::relatable::Relatable;
use crate::resolver::RelationResolver;
use serde_json::Value;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// One-way lifecycle of an instance that is itself the product of a fetch.
///
/// `Unresolved -> Resolved`, set once the producing fetch completes.
/// Instances constructed from already-available data start `Resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionState {
    /// The fetch producing this instance has not completed. Following
    /// relations from it would read partially-populated data.
    Unresolved,
    Resolved,
}

/// A domain resource built from a HAL representation.
///
/// Bound at construction time to the [`RelationResolver`] that will serve its
/// relation queries; the relation surface itself lives on the
/// [`Relatable`] trait.
pub struct Resource {
    engine: RelationResolver,
    value: Value,
    type_name: Option<String>,
    payload: Option<Arc<dyn Any + Send + Sync>>,
    state: ResolutionState,
}

impl Resource {
    /// Wraps an already-available representation; starts `Resolved`.
    pub fn from_value(engine: &RelationResolver, value: Value) -> Self {
        Self {
            engine: engine.clone(),
            value,
            type_name: None,
            payload: None,
            state: ResolutionState::Resolved,
        }
    }

    /// An instance whose own fetch is still in flight.
    ///
    /// Counting and link lookups are safe on it (they see an empty document);
    /// `relate` is rejected until [`complete`](Resource::complete) runs.
    pub fn unresolved(engine: &RelationResolver) -> Self {
        Self {
            engine: engine.clone(),
            value: Value::Null,
            type_name: None,
            payload: None,
            state: ResolutionState::Unresolved,
        }
    }

    /// Installs the fetched representation and marks the instance resolved.
    /// The transition is one-way; completing an already-resolved instance
    /// only replaces the representation.
    pub fn complete(&mut self, value: Value) {
        self.value = value;
        self.state = ResolutionState::Resolved;
    }

    pub(crate) fn materialized(
        engine: RelationResolver,
        value: Value,
        type_name: Option<String>,
        payload: Option<Arc<dyn Any + Send + Sync>>,
    ) -> Self {
        Self {
            engine,
            value,
            type_name,
            payload,
            state: ResolutionState::Resolved,
        }
    }

    pub fn state(&self) -> ResolutionState {
        self.state
    }

    /// Raw representation, `_links`/`_embedded` included.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The type name the engine resolved for this instance, if any.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// Downcasts the typed payload to the domain type registered under this
    /// instance's type name. `None` for generic-wrapper instances.
    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.payload.as_ref()?.downcast_ref::<T>()
    }
}

impl Relatable for Resource {
    fn engine(&self) -> &RelationResolver {
        &self.engine
    }

    fn document(&self) -> &Value {
        &self.value
    }

    fn is_resolved(&self) -> bool {
        self.state == ResolutionState::Resolved
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("type_name", &self.type_name)
            .field("state", &self.state)
            .field("typed", &self.payload.is_some())
            .finish_non_exhaustive()
    }
}

/// Uniform result of following a relation, regardless of whether candidates
/// came from `_links` or `_embedded`.
#[derive(Debug)]
pub enum Related {
    /// The single matching candidate was a link whose fetch was answered with
    /// a non-success status. Settled, not failed: callers must treat this
    /// distinctly from a rejection.
    Empty,
    /// Exactly one candidate matched.
    One(Resource),
    /// More than one candidate matched. Embedded-derived instances always
    /// precede link-derived ones, regardless of document order.
    Many(Vec<Resource>),
}

impl Related {
    pub fn len(&self) -> usize {
        match self {
            Related::Empty => 0,
            Related::One(_) => 1,
            Related::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The single instance, when exactly one candidate matched.
    pub fn into_one(self) -> Option<Resource> {
        match self {
            Related::One(resource) => Some(resource),
            _ => None,
        }
    }

    /// The instance list, when more than one candidate matched.
    pub fn into_many(self) -> Option<Vec<Resource>> {
        match self {
            Related::Many(items) => Some(items),
            _ => None,
        }
    }
}
