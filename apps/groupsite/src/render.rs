//! Plain-text rendering of the view models

use groupsite_core::view::{self, MemberDetailView, PresentationConfig, TeamCardView};
use groupsite_core::{Site, TeamView};

/// The publication section: filter banner, count, and one block per entry
pub fn publications(site: &Site) -> String {
    let list = view::publication_list(site);
    let mut lines = Vec::new();

    if let Some(member) = site.selected_member() {
        lines.push(view::filter_indicator_text(member));
    }
    lines.push(view::results_count_label(list.len()));

    if list.is_empty() {
        lines.push(view::NO_RESULTS_MESSAGE.to_string());
    }
    for publication in &list {
        lines.push(format!("[{}] {}", publication.index, publication.title));
        if !publication.authors.is_empty() {
            lines.push(format!("    {}", publication.authors));
        }
        lines.push(format!("    {}", publication.venue));
        for link in &publication.links {
            lines.push(format!("    {}: {}", link.label, link.href));
        }
    }

    lines.join("\n")
}

/// The team section in the site's current layout
pub fn team(site: &Site, config: &PresentationConfig) -> String {
    let group = site.group();
    let mut lines = vec![group.name.clone()];
    if !group.introduction.is_empty() {
        lines.push(group.introduction.clone());
    }
    lines.push(String::new());

    let cards = view::team_cards(site, config);
    match site.team_view() {
        TeamView::List => lines.extend(cards.iter().map(list_row)),
        TeamView::Carousel => {
            for card in &cards {
                lines.extend(carousel_card(card));
            }
        }
    }

    lines.join("\n")
}

fn marker(card: &TeamCardView) -> &'static str {
    if card.selected {
        "*"
    } else {
        " "
    }
}

fn list_row(card: &TeamCardView) -> String {
    format!(
        "{} {:<12} {} ({}, {})",
        marker(card),
        card.member_id,
        card.name,
        card.position,
        card.affiliation
    )
}

fn carousel_card(card: &TeamCardView) -> Vec<String> {
    vec![
        format!("{} {} [{}]", marker(card), card.name, card.member_id),
        format!("    {}", card.position),
        format!("    {}", card.affiliation),
        format!("    photo: {} ({})", card.photo, card.photo_alt),
    ]
}

/// The member detail panel
pub fn member_detail(detail: &MemberDetailView) -> String {
    let mut lines = vec![detail.name.clone()];
    lines.extend(detail.titles.iter().map(|title| format!("  {title}")));

    if let Some(banner) = &detail.banner {
        lines.push(format!("banner: {} ({})", banner, detail.banner_alt));
    }
    lines.push(format!("photo: {}", detail.photo));
    for link in &detail.contact {
        lines.push(format!("{}: {}", link.label, link.href));
    }
    if !detail.background.is_empty() {
        lines.push(String::new());
        lines.push(detail.background.clone());
    }
    if !detail.research_interests.is_empty() {
        lines.push(String::new());
        lines.push("Research interests:".to_string());
        lines.extend(
            detail
                .research_interests
                .iter()
                .map(|interest| format!("  - {interest}")),
        );
    }

    lines.join("\n")
}
