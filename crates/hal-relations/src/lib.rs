//! # HAL Relations
//!
//! A relation-resolution engine for hypermedia resources encoded in the
//! Hypertext Application Language (HAL) convention: JSON objects carrying a
//! `_links` map (references to related resources by URL) and/or an
//! `_embedded` map (related resources whose representation is already
//! inlined).
//!
//! Given a resource and a relation name, the engine locates every matching
//! link and embedded entry, fetches the remote ones, wraps the local ones,
//! instantiates each as a declared domain type, and returns them uniformly as
//! [`Related`]: the same result shape regardless of source, count, or whether
//! the document stored the relation as a single object or an array.
//!
//! ## Architecture
//!
//! Three components, composed one way:
//!
//! 1. **Type Registry** ([`registry`]): declared type name to domain-type
//!    constructor. Populated by [`RelationResolver::declare_type`]; consulted,
//!    never mutated, during resolution.
//! 2. **Type Resolver** ([`resolver::TypeResolverFn`]): a pluggable policy
//!    deciding, from the candidate alone, which declared type it should
//!    become. The default reads a link's `type` field, or the `type` of an
//!    embedded object's self link. Swappable via
//!    [`RelationResolver::set_type_resolver`].
//! 3. **Relation Resolver** ([`RelationResolver`]): the core. Collects
//!    candidates, fetches links through the [`Transport`] seam, wraps
//!    embedded entries in place, and types each result.
//!
//! Resource instances expose the relation surface through the [`Relatable`]
//! trait: `count`, `relate`, `link`, `links`. Counting and link lookups are
//! pure and never fetch; only `relate` touches the network.
//!
//! ## Quick Start
//!
//! ```rust
//! use hal_relations::{MockTransport, Relatable, RelationResolver, Resource};
//! use serde::Deserialize;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! #[derive(Debug, Deserialize)]
//! struct Book {
//!     id: u32,
//!     title: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), hal_relations::Error> {
//!     // Tests script the transport; production code uses `HttpTransport`.
//!     let transport = MockTransport::new();
//!     transport
//!         .expect_get("/books/2")
//!         .return_json(200, json!({ "id": 2, "title": "The Good Parts" }));
//!
//!     let engine = RelationResolver::new(Arc::new(transport.clone()));
//!     engine.declare_type::<Book>("book");
//!
//!     let book = Resource::from_value(
//!         &engine,
//!         json!({
//!             "id": 1,
//!             "_links": { "next": { "href": "/books/2", "type": "book" } }
//!         }),
//!     );
//!
//!     assert_eq!(book.count("next", None), 1);
//!
//!     let next = book.relate("next", None).await?.into_one().expect("one match");
//!     assert_eq!(next.payload::<Book>().expect("typed payload").id, 2);
//!
//!     transport.verify();
//!     Ok(())
//! }
//! ```
//!
//! ## Scope
//!
//! The engine does not validate HAL documents, cache fetched resources,
//! deduplicate concurrent fetches, or provide write operations; CRUD on a
//! URL template belongs to an external resource factory. The only HTTP
//! capability required is `GET url -> (status, body)`, modeled by the
//! [`Transport`] trait with a `reqwest`-backed production implementation and
//! a scripted [`MockTransport`] for tests.

pub mod document;
pub mod error;
pub mod link;
pub mod mock;
pub mod registry;
pub mod relatable;
pub mod resolver;
pub mod resource;
pub mod transport;

// Re-export core types for convenience
pub use error::Error;
pub use link::{Candidate, Link};
pub use mock::MockTransport;
pub use relatable::{Relatable, SELF_RELATION};
pub use resolver::{RelationResolver, TypeResolverFn};
pub use resource::{Related, Resource, ResolutionState};
pub use transport::{FetchResponse, HttpTransport, Transport};
