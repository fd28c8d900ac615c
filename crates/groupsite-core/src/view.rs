//! View models for the page.
//!
//! The page exists in two variants that differ only in their CSS class
//! prefix; both are produced here from one [`PresentationConfig`]. The
//! rendering layer turns these plain values into markup.

use serde::Serialize;

use groupsite_domain::{PublicationRecord, TeamMember};

pub use crate::config::PresentationConfig;
use crate::site::Site;

/// Shown once when the page data cannot be loaded
pub const LOAD_FAILURE_MESSAGE: &str = "Unable to load page data. Please refresh.";

/// Shown in place of an empty publication list
pub const NO_RESULTS_MESSAGE: &str = "No publications found.";

/// Shown after a raw entry has been copied
pub const COPIED_LABEL: &str = "Copied!";

/// Screen reader announcements
pub mod announce {
    pub const FILTER_CLEARED: &str = "Filter cleared, showing all publications";
    pub const COPY_SUCCEEDED: &str = "BibTeX copied to clipboard";
    pub const COPY_FAILED: &str = "Failed to copy BibTeX";

    pub fn filtered_to(member_name: &str) -> String {
        format!("Filtered to publications by {member_name}")
    }
}

impl PresentationConfig {
    /// Variant-specific CSS class name, e.g. `multi-team-card`
    pub fn class(&self, name: &str) -> String {
        format!("{}{}", self.class_prefix, name)
    }

    /// BEM element class, e.g. `multi-team-card__photo`
    pub fn element_class(&self, block: &str, element: &str) -> String {
        format!("{}{}__{}", self.class_prefix, block, element)
    }
}

/// A link rendered under a publication
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub label: &'static str,
    pub href: String,
}

/// One row of the publication list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicationView {
    /// Position in the visible list; the "Copy BibTeX" button refers to it
    pub index: usize,
    pub title: String,
    pub authors: String,
    pub venue: String,
    pub links: Vec<LinkView>,
}

impl PublicationView {
    pub fn new(index: usize, record: &PublicationRecord) -> Self {
        Self {
            index,
            title: record.title.clone(),
            authors: record.authors.join(", "),
            venue: venue_line(record),
            links: publication_links(record),
        }
    }
}

/// Venue line: misc entries with a subtitle show it in place of the venue
pub fn venue_line(record: &PublicationRecord) -> String {
    match record.subtitle.as_deref() {
        Some(subtitle) if record.is_misc() => format!("{}, {}", subtitle, record.year),
        _ => format!("{}, {}", record.venue, record.year),
    }
}

/// PDF and DOI links, in display order
pub fn publication_links(record: &PublicationRecord) -> Vec<LinkView> {
    let mut links = Vec::new();
    if let Some(url) = &record.url {
        links.push(LinkView {
            label: "PDF",
            href: url.clone(),
        });
    }
    if let Some(doi) = &record.doi {
        links.push(LinkView {
            label: "DOI",
            href: format!("https://doi.org/{doi}"),
        });
    }
    links
}

/// Views for every visible publication
pub fn publication_list(site: &Site) -> Vec<PublicationView> {
    site.visible()
        .into_iter()
        .enumerate()
        .map(|(index, record)| PublicationView::new(index, record))
        .collect()
}

/// "1 publication" / "N publications"
pub fn results_count_label(count: usize) -> String {
    if count == 1 {
        "1 publication".to_string()
    } else {
        format!("{count} publications")
    }
}

/// Text of the "active filter" banner
pub fn filter_indicator_text(member: &TeamMember) -> String {
    format!("Showing publications by {}", member.name)
}

/// A team card in the carousel, or a row in the list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamCardView {
    pub member_id: String,
    pub name: String,
    pub position: String,
    pub affiliation: String,
    pub photo: String,
    pub photo_alt: String,
    pub aria_label: String,
    pub selected: bool,
}

impl TeamCardView {
    pub fn new(member: &TeamMember, selected: bool, config: &PresentationConfig) -> Self {
        Self {
            member_id: member.id.clone(),
            name: member.name.clone(),
            position: member.position.clone(),
            affiliation: member.affiliation.clone(),
            photo: member
                .photo
                .clone()
                .filter(|photo| !photo.is_empty())
                .unwrap_or_else(|| config.placeholder_photo.clone()),
            photo_alt: format!("{}, {}", member.name, member.position),
            aria_label: format!("View publications by {}", member.name),
            selected,
        }
    }
}

/// Cards for the whole team, marking the selected member
pub fn team_cards(site: &Site, config: &PresentationConfig) -> Vec<TeamCardView> {
    site.team()
        .iter()
        .map(|member| TeamCardView::new(member, site.is_selected(&member.id), config))
        .collect()
}

/// The detail panel for the selected member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberDetailView {
    pub name: String,
    pub banner: Option<String>,
    pub banner_alt: String,
    pub photo: String,
    pub titles: Vec<String>,
    pub contact: Vec<LinkView>,
    /// May contain markup
    pub background: String,
    pub research_interests: Vec<String>,
}

impl MemberDetailView {
    pub fn new(member: &TeamMember, config: &PresentationConfig) -> Self {
        let mut contact = Vec::new();
        if let Some(email) = member.email.as_deref().filter(|e| !e.is_empty()) {
            contact.push(LinkView {
                label: "Email",
                href: format!("mailto:{email}"),
            });
        }
        if let Some(website) = member.website.as_deref().filter(|w| !w.is_empty()) {
            contact.push(LinkView {
                label: "Personal website",
                href: website.to_string(),
            });
        }

        Self {
            name: member.name.clone(),
            banner: member.research_banner.clone().filter(|b| !b.is_empty()),
            banner_alt: format!("{} research visualization", member.name),
            photo: member
                .photo
                .clone()
                .filter(|photo| !photo.is_empty())
                .unwrap_or_else(|| config.placeholder_photo.clone()),
            titles: member.titles.clone(),
            contact,
            background: member.background.clone().unwrap_or_default(),
            research_interests: member.research_interests.clone(),
        }
    }
}

/// Detail panel for the selected member; `None` hides the panel
pub fn member_detail(site: &Site, config: &PresentationConfig) -> Option<MemberDetailView> {
    site.selected_member()
        .map(|member| MemberDetailView::new(member, config))
}
