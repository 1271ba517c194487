//! # Engine Errors
//!
//! This module defines the common error type used throughout the engine.
//! Centralizing the definitions keeps error handling consistent across the
//! resolver, the transport seam, and the resource surface.

/// Errors surfaced by the relation-resolution engine.
///
/// Precondition violations ([`NotResolved`](Error::NotResolved),
/// [`AmbiguousLink`](Error::AmbiguousLink)) are returned before any fetch is
/// issued. Everything fetch-related travels through the async result channel.
/// A non-success HTTP status is deliberately *not* an error: it settles the
/// result as empty (see [`Related::Empty`](crate::resource::Related)).
/// Nothing is retried internally; retry policy belongs to the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A relation was followed on an instance whose own fetch has not
    /// completed. Caller bug; fail fast.
    #[error("resource has not resolved yet; wait for its fetch to complete")]
    NotResolved,

    /// `relate` found no link or embedded entry for the relation/name pair.
    /// An expected, recoverable outcome for optional relations.
    #[error("no resource matches relation `{relation}` with name {name:?}")]
    NoMatch {
        relation: String,
        name: Option<String>,
    },

    /// A single-link lookup matched more than one candidate. Disambiguate
    /// with a name or use `links`.
    #[error("relation `{relation}` matches {count} links, expected at most one")]
    AmbiguousLink { relation: String, count: usize },

    /// A link candidate carried no `href` to fetch.
    #[error("link has no href to fetch")]
    MissingHref,

    /// Connection-level failure below the HTTP status layer.
    #[error("transport failure: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A response body or embedded representation did not decode into the
    /// declared domain type.
    #[error("failed to decode resource representation: {0}")]
    Decode(#[from] serde_json::Error),
}
