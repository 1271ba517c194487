//! # Relatable Trait
//!
//! The fixed relation surface every resource instance exposes: `count`,
//! `relate`, `link`, `links`. Implementors provide three accessors; the
//! operations themselves are provided methods delegating to the shared
//! [`RelationResolver`], so the resolution logic lives in exactly one place
//! and is bound by construction-time injection rather than inheritance.

use crate::document;
use crate::error::Error;
use crate::link::Link;
use crate::resolver::RelationResolver;
use crate::resource::Related;
use async_trait::async_trait;
use serde_json::Value;

/// Relation used by [`link`](Relatable::link) and [`links`](Relatable::links)
/// when none is supplied.
pub const SELF_RELATION: &str = "self";

#[async_trait]
pub trait Relatable: Send + Sync {
    /// The shared resolution engine this instance was bound to at
    /// construction time.
    fn engine(&self) -> &RelationResolver;

    /// The raw HAL representation backing this instance.
    fn document(&self) -> &Value;

    /// Whether the fetch that produced this instance has completed.
    fn is_resolved(&self) -> bool;

    /// Number of links plus embedded entries matching the relation/name pair.
    ///
    /// Never fetches and never fails; a document with no `_links` or
    /// `_embedded` yet simply counts 0, so this is safe on unresolved
    /// instances.
    fn count(&self, relation: &str, name: Option<&str>) -> usize {
        document::count_relation(self.document(), relation, name)
    }

    /// Follows a relation: fetches remote candidates, wraps embedded ones,
    /// and returns them uniformly as [`Related`].
    ///
    /// Fails immediately with [`Error::NotResolved`] on an instance whose own
    /// fetch has not completed, and with [`Error::NoMatch`] when no candidate
    /// matches the relation/name pair.
    async fn relate(&self, relation: &str, name: Option<&str>) -> Result<Related, Error> {
        if !self.is_resolved() {
            return Err(Error::NotResolved);
        }
        self.engine().follow(self.document(), relation, name).await
    }

    /// The link-identity view of a relation, without fetching: links matching
    /// the filter, followed by the `self` link of each matching embedded
    /// object. An embedded object with no `self` link cannot appear here.
    /// Never fails, whatever the match count. Defaults to the `self`
    /// relation.
    fn links(&self, relation: Option<&str>, name: Option<&str>) -> Vec<Link> {
        let relation = relation.unwrap_or(SELF_RELATION);
        let doc = self.document();
        let mut links = document::matching_links(doc, relation, name);
        links.extend(
            document::matching_embedded(doc, relation, name)
                .into_iter()
                .filter_map(document::self_link),
        );
        links
    }

    /// The single link for a relation. Zero matches is `Ok(None)`; more than
    /// one is a caller error ([`Error::AmbiguousLink`]): disambiguate with a
    /// name or use [`links`](Relatable::links). Defaults to the `self`
    /// relation.
    fn link(&self, relation: Option<&str>, name: Option<&str>) -> Result<Option<Link>, Error> {
        let mut matches = self.links(relation, name);
        match matches.len() {
            0 => Ok(None),
            1 => Ok(Some(matches.remove(0))),
            count => Err(Error::AmbiguousLink {
                relation: relation.unwrap_or(SELF_RELATION).to_string(),
                count,
            }),
        }
    }
}
