use serde::Deserialize;

/// A catalog entry, declared to the engine under the `book` type name.
///
/// Built by deserializing a HAL representation; `_links`/`_embedded` stay on
/// the wrapping resource, so only domain fields appear here.
#[derive(Debug, Clone, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub id: Option<u32>,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub edition: Option<u32>,
}
