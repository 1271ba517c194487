//! # Relation Resolver
//!
//! The core of the engine: given a HAL document and a relation name, collect
//! every matching link and embedded entry, fetch the remote ones, wrap the
//! local ones, resolve each to a registered domain type, and return them
//! uniformly as [`Related`].
//!
//! The resolver is an explicitly constructed, owned service object. It holds
//! its own type registry and pluggable type-resolver policy, is built once by
//! the host application, and is shared (cheaply cloned) by every resource
//! instance it creates. There is no module-level singleton.
//!
//! # Concurrency Model
//!
//! All suspension points are remote link fetches; embedded wraps complete
//! synchronously. When a relation has multiple candidates, every link fetch
//! is issued concurrently and the aggregate settles only once each
//! constituent has. The registry is read-mostly under an `RwLock`; the
//! type-resolver slot expects a single writer at setup time. Replacing the
//! policy while resolutions are in flight is unsupported.

use crate::document;
use crate::error::Error;
use crate::link::{Candidate, Link};
use crate::registry::{Constructor, TypeRegistry};
use crate::resource::{Related, Resource};
use crate::transport::Transport;
use futures::future::join_all;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::any::Any;
use std::sync::{Arc, RwLock};
use tracing::{debug, instrument, warn};

/// Pluggable policy deciding which declared type name a candidate should be
/// instantiated as. Returning `None` selects the generic wrapper.
pub type TypeResolverFn = Arc<dyn Fn(Candidate<'_>) -> Option<String> + Send + Sync>;

/// Default policy: a link's `type` field; for an embedded object, the `type`
/// field of its `_links.self` entry.
pub fn type_from_link_type(candidate: Candidate<'_>) -> Option<String> {
    match candidate {
        Candidate::Link(link) => link.type_name.clone(),
        Candidate::Embedded(value) => document::self_link(value)?.type_name,
    }
}

struct Inner {
    registry: TypeRegistry,
    type_resolver: RwLock<TypeResolverFn>,
    transport: Arc<dyn Transport>,
}

/// The shared resolution engine.
///
/// Cheap to clone: clones share the same registry, type-resolver slot, and
/// transport. Every [`Resource`] holds a clone, bound at construction time.
#[derive(Clone)]
pub struct RelationResolver {
    inner: Arc<Inner>,
}

impl RelationResolver {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: Arc::new(Inner {
                registry: TypeRegistry::new(),
                type_resolver: RwLock::new(Arc::new(type_from_link_type)),
                transport,
            }),
        }
    }

    /// Declares a domain type under `name`.
    ///
    /// Candidates whose resolved type name equals `name` are built by
    /// deserializing the raw representation into `T` (the shallow-copy
    /// construction contract). Re-declaring a name replaces the previous
    /// binding.
    pub fn declare_type<T>(&self, name: &str)
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        let constructor: Constructor = Arc::new(|value: &Value| {
            let typed: T = serde_json::from_value(value.clone())?;
            Ok(Arc::new(typed) as Arc<dyn Any + Send + Sync>)
        });
        self.inner.registry.register(name, constructor);
    }

    /// Replaces the active type resolver wholesale.
    ///
    /// Exactly one resolver is active at a time; there is no chaining. A
    /// caller needing composition builds it into the replacement function.
    /// Expected to run at setup time, before resolutions are in flight.
    pub fn set_type_resolver(&self, resolver: TypeResolverFn) {
        *self
            .inner
            .type_resolver
            .write()
            .expect("type resolver lock poisoned") = resolver;
    }

    fn resolve_type(&self, candidate: Candidate<'_>) -> Option<String> {
        let resolver = self
            .inner
            .type_resolver
            .read()
            .expect("type resolver lock poisoned")
            .clone();
        resolver(candidate)
    }

    /// Follows `relation` on `doc`.
    ///
    /// Zero candidates fail with [`Error::NoMatch`]. Exactly one yields
    /// [`Related::One`], or [`Related::Empty`] when the lone candidate is a
    /// link answered with a non-success status. With more candidates,
    /// embedded entries are wrapped first (in document order), then all link
    /// fetches are issued concurrently; the aggregate settles once every
    /// constituent has, failing if any fetch fails at the transport level.
    /// Embedded-derived instances always precede link-derived ones in the
    /// result, regardless of document order.
    #[instrument(skip(self, doc))]
    pub async fn follow(
        &self,
        doc: &Value,
        relation: &str,
        name: Option<&str>,
    ) -> Result<Related, Error> {
        let links = document::matching_links(doc, relation, name);
        let embedded = document::matching_embedded(doc, relation, name);
        debug!(
            links = links.len(),
            embedded = embedded.len(),
            "matched candidates"
        );

        match links.len() + embedded.len() {
            0 => Err(Error::NoMatch {
                relation: relation.to_string(),
                name: name.map(str::to_string),
            }),
            1 => {
                if let Some(value) = embedded.first() {
                    Ok(Related::One(self.wrap_embedded(value)?))
                } else {
                    match self.fetch_link(&links[0]).await? {
                        Some(resource) => Ok(Related::One(resource)),
                        None => Ok(Related::Empty),
                    }
                }
            }
            total => {
                let mut resources = Vec::with_capacity(total);
                for value in &embedded {
                    resources.push(self.wrap_embedded(value)?);
                }
                let fetches = links.iter().map(|link| self.fetch_link(link));
                for fetched in join_all(fetches).await {
                    // Non-success fetches settled empty; they are dropped
                    // from the aggregate rather than holding a placeholder.
                    if let Some(resource) = fetched? {
                        resources.push(resource);
                    }
                }
                Ok(Related::Many(resources))
            }
        }
    }

    /// Plain GET of a HAL document, producing a generic resolved resource.
    ///
    /// A non-success status settles as `Ok(None)`; connection-level failures
    /// reject.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<Option<Resource>, Error> {
        let response = self.inner.transport.get(url).await?;
        if !response.is_success() {
            return Ok(None);
        }
        let value = response.body.unwrap_or(Value::Null);
        Ok(Some(Resource::from_value(self, value)))
    }

    /// Resolves one link candidate: GET its `href`, then instantiate the
    /// body. `Ok(None)` for a non-success status.
    async fn fetch_link(&self, link: &Link) -> Result<Option<Resource>, Error> {
        let href = link.href.as_deref().ok_or(Error::MissingHref)?;
        let response = self.inner.transport.get(href).await?;
        if !response.is_success() {
            warn!(href, status = response.status, "fetch settled without a body");
            return Ok(None);
        }
        let body = response.body.unwrap_or(Value::Null);
        let type_name = self.resolve_type(Candidate::Link(link));
        self.instantiate(type_name, body).map(Some)
    }

    /// Resolves one embedded candidate: instantiate its representation in
    /// place, synchronously.
    fn wrap_embedded(&self, value: &Value) -> Result<Resource, Error> {
        let type_name = self.resolve_type(Candidate::Embedded(value));
        self.instantiate(type_name, value.clone())
    }

    /// Builds the uniform instance for a representation: typed payload when
    /// the resolved name is registered, generic wrapper otherwise.
    fn instantiate(&self, type_name: Option<String>, value: Value) -> Result<Resource, Error> {
        let payload = match type_name.as_deref().and_then(|n| self.inner.registry.lookup(n)) {
            Some(constructor) => Some(constructor(&value)?),
            None => None,
        };
        Ok(Resource::materialized(self.clone(), value, type_name, payload))
    }
}
