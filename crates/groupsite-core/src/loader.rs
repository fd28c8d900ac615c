//! Loading the site's data files.

use std::path::Path;

use serde::de::DeserializeOwned;

use groupsite_bibtex::parse_bibliography;
use groupsite_domain::{GroupInfo, PublicationRecord, TeamMember, TeamRoster};

use crate::config::DataConfig;
use crate::error::LoadError;

/// Everything the page needs, loaded together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteData {
    pub group: GroupInfo,
    pub team: Vec<TeamMember>,
    /// Sorted newest first
    pub publications: Vec<PublicationRecord>,
}

impl SiteData {
    /// Read group, team and bibliography files.
    ///
    /// Fails on the first file that cannot be read or decoded. A bibliography
    /// with malformed entries is not a failure; those entries are dropped.
    pub fn load(config: &DataConfig) -> Result<Self, LoadError> {
        let group: GroupInfo = read_json(&config.group_path())?;
        let roster: TeamRoster = read_json(&config.team_path())?;

        let bibliography_path = config.bibliography_path();
        let bibliography = read_text(&bibliography_path)?;
        let parsed = parse_bibliography(&bibliography);
        if parsed.skipped > 0 {
            tracing::warn!(
                path = %bibliography_path.display(),
                skipped = parsed.skipped,
                "ignored malformed bibliography entries"
            );
        }

        tracing::info!(
            group = %group.name,
            members = roster.team.len(),
            publications = parsed.records.len(),
            "loaded site data"
        );

        Ok(Self {
            group,
            team: roster.team,
            publications: parsed.records,
        })
    }

    /// Build from already-loaded parts, parsing the bibliography text
    pub fn from_parts(group: GroupInfo, team: Vec<TeamMember>, bibliography: &str) -> Self {
        Self {
            group,
            team,
            publications: groupsite_bibtex::parse_publications(bibliography),
        }
    }
}

fn read_text(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
