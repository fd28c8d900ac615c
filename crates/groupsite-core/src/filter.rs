//! Visible-set derivation for the publication list.
//!
//! Two filters compose by intersection:
//! - member selection: at least one author contains one of the member's
//!   name variants (case-insensitive substring)
//! - free-text search: the record's search text contains the query
//!
//! The full record set is never modified; every call derives the visible
//! subset from scratch, keeping the original order.

use groupsite_domain::{find_member, PublicationRecord, TeamMember};

/// The user's current filter choices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Selected team member, if any
    pub selected_member_id: Option<String>,
    /// Lowercased, trimmed search text; empty means no text filter
    pub search_query: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to select a member
    pub fn with_member(mut self, member_id: impl Into<String>) -> Self {
        self.select_member(member_id);
        self
    }

    /// Builder method to set the search text
    pub fn with_search(mut self, raw: &str) -> Self {
        self.set_search(raw);
        self
    }

    pub fn select_member(&mut self, member_id: impl Into<String>) {
        self.selected_member_id = Some(member_id.into());
    }

    /// Store the search text in normalized form
    pub fn set_search(&mut self, raw: &str) {
        self.search_query = normalize_query(raw);
    }

    /// Drop both the member selection and the search text
    pub fn clear(&mut self) {
        self.selected_member_id = None;
        self.search_query.clear();
    }

    /// Whether any filter is set (an unknown member still counts as set)
    pub fn is_active(&self) -> bool {
        self.selected_member_id.is_some() || !self.search_query.is_empty()
    }
}

/// Lowercase and trim raw search input
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether any author of `record` matches any of the member's name variants
pub fn member_matches(record: &PublicationRecord, member: &TeamMember) -> bool {
    let variants: Vec<String> = member
        .name_variants()
        .iter()
        .map(|v| v.to_lowercase())
        .collect();

    record.authors.iter().any(|author| {
        let author = author.to_lowercase();
        variants.iter().any(|variant| author.contains(variant.as_str()))
    })
}

/// Whether `record` matches an already-normalized search query
pub fn search_matches(record: &PublicationRecord, query: &str) -> bool {
    query.is_empty() || record.search_text().contains(query)
}

/// Indices into `records` of the visible subset, in order
pub fn visible_indices(
    records: &[PublicationRecord],
    team: &[TeamMember],
    state: &FilterState,
) -> Vec<usize> {
    // An identifier that names nobody filters nothing
    let member = state
        .selected_member_id
        .as_deref()
        .and_then(|id| find_member(team, id));

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| member.map_or(true, |m| member_matches(record, m)))
        .filter(|(_, record)| search_matches(record, &state.search_query))
        .map(|(index, _)| index)
        .collect()
}

/// The visible subset of `records`, in order
pub fn filter_publications<'a>(
    records: &'a [PublicationRecord],
    team: &[TeamMember],
    state: &FilterState,
) -> Vec<&'a PublicationRecord> {
    visible_indices(records, team, state)
        .into_iter()
        .map(|index| &records[index])
        .collect()
}
