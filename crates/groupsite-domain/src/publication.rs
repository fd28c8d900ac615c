//! Publication domain model

use serde::{Deserialize, Serialize};

/// One bibliography entry, normalized for display and filtering.
///
/// Records are produced once per data load and never mutated afterwards;
/// filtered views are always derived from the full set.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublicationRecord {
    /// Citation key, e.g. `smith2023`
    pub id: String,
    /// Lowercased entry type, e.g. `article` or `misc`
    pub kind: String,
    pub title: String,
    pub authors: Vec<String>,
    /// Publication year; 0 means unknown
    pub year: i32,
    /// First of journal / booktitle / howpublished that is present
    pub venue: String,
    pub subtitle: Option<String>,
    pub url: Option<String>,
    pub doi: Option<String>,
    /// The entry exactly as it appeared in the source text
    pub raw_source: String,
}

impl PublicationRecord {
    /// Create a record with the required identity fields
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            title: String::new(),
            authors: Vec::new(),
            year: 0,
            venue: String::new(),
            subtitle: None,
            url: None,
            doi: None,
            raw_source: String::new(),
        }
    }

    /// Whether this is a `@misc` entry (shown with its subtitle instead of a venue)
    pub fn is_misc(&self) -> bool {
        self.kind == "misc"
    }

    pub fn has_known_year(&self) -> bool {
        self.year != 0
    }

    /// Lowercased text that free-text search runs against:
    /// title, authors, venue and year joined by spaces.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.authors.join(" "),
            self.venue,
            self.year
        )
        .to_lowercase()
    }
}
