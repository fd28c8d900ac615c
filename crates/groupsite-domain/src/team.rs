//! Team roster

use serde::{Deserialize, Serialize};

/// A member of the research group.
///
/// Only `id`, `name` and `author_variants` take part in filtering; the rest
/// is display data for team cards and the member detail panel.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub affiliation: String,
    #[serde(default)]
    pub photo: Option<String>,
    /// Alternate spellings used when matching against parsed author names
    #[serde(default)]
    pub author_variants: Option<Vec<String>>,
    #[serde(default)]
    pub titles: Vec<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// May contain markup; rendered as-is by the page
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub research_interests: Vec<String>,
    #[serde(default)]
    pub research_banner: Option<String>,
}

impl TeamMember {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder method to set author name variants
    pub fn with_author_variants<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.author_variants = Some(variants.into_iter().map(Into::into).collect());
        self
    }

    /// Names to match against publication authors.
    ///
    /// An explicit variant list wins even when it is empty; otherwise the
    /// member's own name is used.
    pub fn name_variants(&self) -> &[String] {
        match &self.author_variants {
            Some(variants) => variants,
            None => std::slice::from_ref(&self.name),
        }
    }
}

/// The `team.json` document: `{ "team": [ ... ] }`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamRoster {
    pub team: Vec<TeamMember>,
}

impl TeamRoster {
    /// Find a member by identifier
    pub fn find(&self, id: &str) -> Option<&TeamMember> {
        find_member(&self.team, id)
    }
}

/// Find a member by identifier in an ordered roster
pub fn find_member<'a>(team: &'a [TeamMember], id: &str) -> Option<&'a TeamMember> {
    team.iter().find(|m| m.id == id)
}
