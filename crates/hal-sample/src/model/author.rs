use serde::Deserialize;

/// A person reachable through a book's `author` relation, declared to the
/// engine under the `person` type name.
#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}

impl Author {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
