//! # Document Helpers
//!
//! Pure, synchronous views over a HAL document (`serde_json::Value`). These
//! never fetch: counting and link lookups are safe on any document, including
//! one that has not been populated yet. Absent `_links`/`_embedded` maps are
//! treated as empty.

use crate::link::Link;
use serde_json::Value;

/// Normalizes `doc[section][relation]` to an ordered list of entries.
///
/// HAL allows a relation to hold either a single object or an array; the
/// storage shape is representation detail only, so both behave identically
/// downstream.
fn raw_entries<'a>(doc: &'a Value, section: &str, relation: &str) -> Vec<&'a Value> {
    match doc.get(section).and_then(|s| s.get(relation)) {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(single) => vec![single],
        None => Vec::new(),
    }
}

/// Links stored under `relation`, optionally narrowed to those whose `name`
/// field matches.
///
/// Entries are read leniently: a mistyped known field lands in the link's
/// `extra` map rather than dropping the entry from counting. Entries that
/// are not JSON objects at all are skipped; they carry no `href` to fetch
/// and no fields to match.
pub fn matching_links(doc: &Value, relation: &str, name: Option<&str>) -> Vec<Link> {
    raw_entries(doc, "_links", relation)
        .into_iter()
        .filter_map(Link::from_json)
        .filter(|link| name.map_or(true, |n| link.name.as_deref() == Some(n)))
        .collect()
}

/// Embedded representations stored under `relation`, optionally narrowed to
/// those whose `_links.self.name` matches. An embedded object's name is only
/// discoverable through its own self link, so a selfless object never matches
/// a name filter.
pub fn matching_embedded<'a>(
    doc: &'a Value,
    relation: &str,
    name: Option<&str>,
) -> Vec<&'a Value> {
    raw_entries(doc, "_embedded", relation)
        .into_iter()
        .filter(|entry| {
            name.map_or(true, |n| {
                self_link(entry).and_then(|link| link.name).as_deref() == Some(n)
            })
        })
        .collect()
}

/// The `self` link of an embedded representation, if it carries one.
pub fn self_link(embedded: &Value) -> Option<Link> {
    Link::from_json(embedded.get("_links")?.get("self")?)
}

/// Number of candidates for the relation/name pair.
///
/// Pure and fetch-free: returns 0 for relations with no matches, including
/// when the maps are entirely absent.
pub fn count_relation(doc: &Value, relation: &str, name: Option<&str>) -> usize {
    matching_links(doc, relation, name).len() + matching_embedded(doc, relation, name).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_and_list_storage_normalize_identically() {
        let scalar = json!({ "_links": { "next": { "href": "/books/2" } } });
        let list = json!({ "_links": { "next": [{ "href": "/books/2" }] } });

        assert_eq!(matching_links(&scalar, "next", None).len(), 1);
        assert_eq!(
            matching_links(&scalar, "next", None),
            matching_links(&list, "next", None)
        );
    }

    #[test]
    fn absent_maps_count_zero() {
        let doc = json!({ "title": "no relations here" });
        assert_eq!(count_relation(&doc, "next", None), 0);
        assert_eq!(count_relation(&Value::Null, "next", None), 0);
    }

    #[test]
    fn name_filter_on_links_matches_link_name() {
        let doc = json!({
            "_links": {
                "item": [
                    { "href": "/a", "name": "first" },
                    { "href": "/b", "name": "second" },
                    { "href": "/c" },
                ]
            }
        });
        assert_eq!(matching_links(&doc, "item", None).len(), 3);
        let named = matching_links(&doc, "item", Some("second"));
        assert_eq!(named.len(), 1);
        assert_eq!(named[0].href.as_deref(), Some("/b"));
    }

    #[test]
    fn name_filter_on_embedded_reads_self_link_name() {
        let doc = json!({
            "_embedded": {
                "related": [
                    { "title": "Don't make me think" },
                    {
                        "_links": { "self": { "name": "reference" } },
                        "title": "The Elements of Typographic Style",
                    },
                ]
            }
        });
        assert_eq!(matching_embedded(&doc, "related", None).len(), 2);
        let named = matching_embedded(&doc, "related", Some("reference"));
        assert_eq!(named.len(), 1);
        assert_eq!(named[0]["title"], json!("The Elements of Typographic Style"));
    }

    #[test]
    fn named_count_never_exceeds_unnamed_count() {
        let doc = json!({
            "_links": { "item": [{ "href": "/a", "name": "x" }, { "href": "/b" }] },
            "_embedded": { "item": { "title": "inline" } },
        });
        assert_eq!(count_relation(&doc, "item", None), 3);
        assert!(count_relation(&doc, "item", Some("x")) <= count_relation(&doc, "item", None));
        assert_eq!(count_relation(&doc, "item", Some("x")), 1);
    }

    #[test]
    fn mistyped_link_fields_do_not_drop_the_entry() {
        let doc = json!({
            "_links": { "item": [{ "href": "/a", "name": 5 }, { "href": "/b" }] }
        });
        let links = matching_links(&doc, "item", None);
        assert_eq!(links.len(), 2);
        assert!(links[0].name.is_none());
        assert_eq!(links[0].extra["name"], json!(5));
        assert_eq!(count_relation(&doc, "item", None), 2);
    }

    #[test]
    fn self_link_absent_yields_none() {
        assert!(self_link(&json!({ "title": "bare" })).is_none());
        assert!(self_link(&json!({ "_links": {} })).is_none());
    }
}
