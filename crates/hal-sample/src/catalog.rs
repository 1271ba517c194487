//! # Catalog Wiring
//!
//! Builds the relation-resolution engine for the sample domain: declares the
//! catalog's types and binds whichever transport the host chooses. The
//! engine is constructed once here and shared by every resource it creates.

use crate::model::{Author, Book};
use hal_relations::{Error, HttpTransport, Relatable, RelationResolver, Resource, Transport};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// An engine wired for the catalog's types over the given transport.
pub fn build_engine(transport: Arc<dyn Transport>) -> RelationResolver {
    let engine = RelationResolver::new(transport);
    engine.declare_type::<Book>("book");
    engine.declare_type::<Author>("person");
    info!("catalog engine ready");
    engine
}

/// An engine over the production HTTP transport.
pub fn build_http_engine() -> RelationResolver {
    build_engine(Arc::new(HttpTransport::new()))
}

/// Wraps an already-fetched catalog document.
pub fn open_document(engine: &RelationResolver, value: Value) -> Resource {
    Resource::from_value(engine, value)
}

/// Follows a book's `next` link and returns the typed target.
///
/// `Ok(None)` when the book has no `next` relation or the target no longer
/// exists; transport failures propagate.
#[instrument(skip(book))]
pub async fn next_book(book: &Resource) -> Result<Option<Book>, Error> {
    debug!("following next link");
    match book.relate("next", None).await {
        Ok(related) => Ok(related
            .into_one()
            .and_then(|target| target.payload::<Book>().cloned())),
        Err(Error::NoMatch { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// The book's author, typed, whether embedded or linked.
#[instrument(skip(book))]
pub async fn author_of(book: &Resource) -> Result<Option<Author>, Error> {
    match book.relate("author", None).await {
        Ok(related) => Ok(related
            .into_one()
            .and_then(|target| target.payload::<Author>().cloned())),
        Err(Error::NoMatch { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}
