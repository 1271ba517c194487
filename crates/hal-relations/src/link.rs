//! # HAL Links & Candidates
//!
//! The wire-level building blocks of a relation: the [`Link`] reference and
//! the [`Candidate`] tagged union that classifies each raw relation entry
//! exactly once, so downstream logic switches on the tag instead of
//! re-probing JSON structure.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A reference to a related resource, as found under a document's `_links`.
///
/// `href` is optional in practice: the `self` link of an embedded object may
/// legitimately carry only a `name` or `type`. Fetching through a link
/// without an `href` fails with [`Error::MissingHref`](crate::Error::MissingHref).
///
/// Links are immutable once read from a document. Metadata fields beyond the
/// ones modeled here are preserved verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Declared type name used to pick the registered domain type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    /// Disambiguates multiple links stored under the same relation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Human-readable label, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Any additional metadata, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Link {
    /// Lenient read of a raw `_links` entry.
    ///
    /// Known fields are taken when they are strings; a mistyped known field
    /// (say `"name": 5`) is preserved in `extra` instead of invalidating the
    /// whole entry, so sloppy documents still count and fetch. Non-object
    /// entries are not links and yield `None`.
    pub fn from_json(entry: &Value) -> Option<Self> {
        let object = entry.as_object()?;
        let mut link = Link {
            href: None,
            type_name: None,
            name: None,
            title: None,
            extra: Map::new(),
        };
        for (key, value) in object {
            match (key.as_str(), value.as_str()) {
                ("href", Some(s)) => link.href = Some(s.to_string()),
                ("type", Some(s)) => link.type_name = Some(s.to_string()),
                ("name", Some(s)) => link.name = Some(s.to_string()),
                ("title", Some(s)) => link.title = Some(s.to_string()),
                _ => {
                    link.extra.insert(key.clone(), value.clone());
                }
            }
        }
        Some(link)
    }
}

/// A relation candidate, classified at the point where the raw JSON entries
/// are read: either a link to fetch or an embedded representation to wrap in
/// place.
///
/// This is the value handed to the pluggable type resolver
/// ([`TypeResolverFn`](crate::resolver::TypeResolverFn)).
#[derive(Debug, Clone, Copy)]
pub enum Candidate<'a> {
    Link(&'a Link),
    Embedded(&'a Value),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn link_preserves_unknown_metadata() {
        let link: Link = serde_json::from_value(json!({
            "href": "/books/2",
            "type": "book",
            "title": "Next up",
            "hreflang": "en",
        }))
        .unwrap();

        assert_eq!(link.href.as_deref(), Some("/books/2"));
        assert_eq!(link.type_name.as_deref(), Some("book"));
        assert_eq!(link.title.as_deref(), Some("Next up"));
        assert_eq!(link.extra["hreflang"], json!("en"));

        let round = serde_json::to_value(&link).unwrap();
        assert_eq!(round["hreflang"], json!("en"));
    }

    #[test]
    fn link_fields_are_all_optional() {
        let link: Link = serde_json::from_value(json!({ "name": "reference" })).unwrap();
        assert!(link.href.is_none());
        assert_eq!(link.name.as_deref(), Some("reference"));
    }

    #[test]
    fn lenient_read_keeps_mistyped_fields_in_extra() {
        let link = Link::from_json(&json!({ "href": "/a", "name": 5 })).unwrap();
        assert_eq!(link.href.as_deref(), Some("/a"));
        assert!(link.name.is_none());
        assert_eq!(link.extra["name"], json!(5));
    }

    #[test]
    fn lenient_read_rejects_non_objects() {
        assert!(Link::from_json(&json!("/not-a-link")).is_none());
        assert!(Link::from_json(&json!(42)).is_none());
    }
}
