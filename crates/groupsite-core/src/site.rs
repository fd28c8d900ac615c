//! Page state owned by the application shell.
//!
//! `Site` holds the loaded data plus the user's filter choices, and keeps
//! the visible publication list in sync: every change recomputes it from the
//! full record set.

use groupsite_domain::{find_member, GroupInfo, PublicationRecord, TeamMember};

use crate::config::SiteConfig;
use crate::error::Result;
use crate::filter::{visible_indices, FilterState};
use crate::loader::SiteData;

/// How the team section is laid out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TeamView {
    #[default]
    Carousel,
    List,
}

impl TeamView {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Carousel => "carousel",
            Self::List => "list",
        }
    }

    /// Parse a view name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "carousel" => Some(Self::Carousel),
            "list" => Some(Self::List),
            _ => None,
        }
    }
}

/// What a click on a team member did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    /// The member is now the active filter
    Selected(String),
    /// The member was already selected, so all filters were cleared
    Cleared,
}

/// The application state behind one page
#[derive(Debug, Clone)]
pub struct Site {
    group: GroupInfo,
    team: Vec<TeamMember>,
    publications: Vec<PublicationRecord>,
    filter: FilterState,
    visible: Vec<usize>,
    team_view: TeamView,
}

impl From<SiteData> for Site {
    fn from(data: SiteData) -> Self {
        Self::new(data.group, data.team, data.publications)
    }
}

impl Site {
    /// Create a site showing every publication
    pub fn new(group: GroupInfo, team: Vec<TeamMember>, publications: Vec<PublicationRecord>) -> Self {
        let visible = (0..publications.len()).collect();
        Self {
            group,
            team,
            publications,
            filter: FilterState::default(),
            visible,
            team_view: TeamView::default(),
        }
    }

    /// Validate `config` and load the data files it names
    pub fn open(config: &SiteConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from(SiteData::load(&config.data)?))
    }

    pub fn group(&self) -> &GroupInfo {
        &self.group
    }

    pub fn team(&self) -> &[TeamMember] {
        &self.team
    }

    /// The full record set, sorted
    pub fn publications(&self) -> &[PublicationRecord] {
        &self.publications
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Handle a click on a team card or list item.
    ///
    /// Clicking the selected member again clears every filter.
    pub fn toggle_member(&mut self, member_id: &str) -> SelectionChange {
        if self.filter.selected_member_id.as_deref() == Some(member_id) {
            self.clear_filter();
            SelectionChange::Cleared
        } else {
            self.select_member(member_id);
            SelectionChange::Selected(member_id.to_string())
        }
    }

    pub fn select_member(&mut self, member_id: &str) {
        self.filter.select_member(member_id);
        self.recompute();
    }

    /// Drop the member selection and the search text
    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.recompute();
    }

    /// Apply a (debounced) search box value
    pub fn commit_search(&mut self, raw: &str) {
        self.filter.set_search(raw);
        self.recompute();
    }

    /// The selected member, if the selection names a known member
    pub fn selected_member(&self) -> Option<&TeamMember> {
        self.filter
            .selected_member_id
            .as_deref()
            .and_then(|id| find_member(&self.team, id))
    }

    pub fn is_selected(&self, member_id: &str) -> bool {
        self.filter.selected_member_id.as_deref() == Some(member_id)
    }

    /// Visible publications in display order
    pub fn visible(&self) -> Vec<&PublicationRecord> {
        self.visible
            .iter()
            .map(|&index| &self.publications[index])
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// The publication at a position in the visible list
    pub fn visible_at(&self, position: usize) -> Option<&PublicationRecord> {
        self.visible
            .get(position)
            .map(|&index| &self.publications[index])
    }

    /// Original source text for the publication at a visible position,
    /// for "Copy BibTeX" and export
    pub fn raw_source_at(&self, position: usize) -> Option<&str> {
        self.visible_at(position)
            .map(|record| record.raw_source.as_str())
            .filter(|raw| !raw.is_empty())
    }

    pub fn team_view(&self) -> TeamView {
        self.team_view
    }

    pub fn set_team_view(&mut self, view: TeamView) {
        self.team_view = view;
    }

    fn recompute(&mut self) {
        self.visible = visible_indices(&self.publications, &self.team, &self.filter);
        tracing::debug!(
            member = ?self.filter.selected_member_id,
            query = %self.filter.search_query,
            visible = self.visible.len(),
            total = self.publications.len(),
            "recomputed visible publications"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use groupsite_bibtex::parse_publications;

    const BIB: &str = r#"
@article{smith2023, author = {John Smith and Ann Lee}, title = {Halo Shapes}, year = {2023}, journal = {ApJ}}
@article{lee2021, author = {Ann Lee}, title = {Cluster Counts}, year = {2021}, journal = {MNRAS}}
@misc{smith2019, author = {J. Smith}, title = {Lensing Notes}, year = {2019}, howpublished = {arXiv}}
"#;

    fn site() -> Site {
        let team = vec![
            TeamMember::new("jsmith", "John Smith")
                .with_author_variants(["J. Smith", "John Smith"]),
            TeamMember::new("alee", "Ann Lee"),
        ];
        Site::new(GroupInfo::default(), team, parse_publications(BIB))
    }

    fn visible_ids(site: &Site) -> Vec<&str> {
        site.visible().iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_starts_with_everything_visible() {
        let site = site();
        assert_eq!(visible_ids(&site), vec!["smith2023", "lee2021", "smith2019"]);
        assert_eq!(site.team_view(), TeamView::Carousel);
    }

    #[test]
    fn test_toggle_member_selects_then_clears() {
        let mut site = site();
        assert_eq!(
            site.toggle_member("jsmith"),
            SelectionChange::Selected("jsmith".to_string())
        );
        assert_eq!(visible_ids(&site), vec!["smith2023", "smith2019"]);
        assert_eq!(site.selected_member().unwrap().name, "John Smith");

        site.commit_search("halo");
        assert_eq!(site.toggle_member("jsmith"), SelectionChange::Cleared);
        assert_eq!(site.visible_count(), 3);
        assert!(site.filter().search_query.is_empty());
    }

    #[test]
    fn test_switching_members() {
        let mut site = site();
        site.toggle_member("jsmith");
        site.toggle_member("alee");
        assert!(site.is_selected("alee"));
        assert_eq!(visible_ids(&site), vec!["smith2023", "lee2021"]);
    }

    #[test]
    fn test_search_then_clear() {
        let mut site = site();
        site.commit_search("  MNRAS ");
        assert_eq!(visible_ids(&site), vec!["lee2021"]);
        site.clear_filter();
        assert_eq!(site.visible_count(), 3);
    }

    #[test]
    fn test_unknown_member_keeps_everything() {
        let mut site = site();
        site.select_member("ghost");
        assert_eq!(site.visible_count(), 3);
        assert!(site.selected_member().is_none());
    }

    #[test]
    fn test_raw_source_by_visible_position() {
        let mut site = site();
        site.commit_search("lensing");
        let raw = site.raw_source_at(0).unwrap();
        assert!(raw.starts_with("@misc{smith2019,"));
        assert!(site.raw_source_at(1).is_none());
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut site = site();
        site.commit_search("ann");
        let first: Vec<String> = visible_ids(&site).iter().map(|s| s.to_string()).collect();
        site.commit_search("ann");
        assert_eq!(visible_ids(&site), first);
    }

    #[test]
    fn test_team_view_parse() {
        assert_eq!(TeamView::parse("List"), Some(TeamView::List));
        assert_eq!(TeamView::parse("grid"), None);
        let mut site = site();
        site.set_team_view(TeamView::List);
        assert_eq!(site.team_view().as_str(), "list");
    }
}
