//! One-shot subcommands

use groupsite_core::view::{self, announce, PresentationConfig};
use groupsite_core::Site;

use crate::cli::{CliError, FilterArgs};
use crate::render;

/// Apply `--member` and `--search` to a freshly loaded site
pub fn apply_filters(site: &mut Site, filter: &FilterArgs) -> Result<(), CliError> {
    if let Some(member_id) = &filter.member {
        if !site.team().iter().any(|member| &member.id == member_id) {
            return Err(CliError::UnknownMember(member_id.clone()));
        }
        site.select_member(member_id);
    }
    if let Some(query) = &filter.search {
        site.commit_search(query);
    }
    Ok(())
}

pub fn list(site: &Site, json: bool) -> Result<String, Box<dyn std::error::Error>> {
    if json {
        Ok(serde_json::to_string_pretty(&view::publication_list(site))?)
    } else {
        Ok(render::publications(site))
    }
}

pub fn team(site: &Site, config: &PresentationConfig) -> String {
    render::team(site, config)
}

/// Member detail followed by that member's publications
pub fn member(site: &mut Site, id: &str, config: &PresentationConfig) -> Result<String, CliError> {
    let filter = FilterArgs {
        member: Some(id.to_string()),
        search: None,
    };
    apply_filters(site, &filter)?;

    let detail = view::member_detail(site, config)
        .map(|detail| render::member_detail(&detail))
        .unwrap_or_default();
    Ok(format!("{}\n\n{}", detail, render::publications(site)))
}

/// Raw BibTeX for the given visible positions, or every visible entry
pub fn export(site: &Site, indices: &[usize]) -> Result<String, CliError> {
    let sources = if indices.is_empty() {
        (0..site.visible_count())
            .filter_map(|position| site.raw_source_at(position))
            .collect::<Vec<_>>()
    } else {
        indices
            .iter()
            .map(|&index| {
                site.raw_source_at(index).ok_or(CliError::IndexOutOfRange {
                    index,
                    visible: site.visible_count(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(sources.join("\n\n"))
}

/// Status line reported after an export attempt
pub fn copy_status<T, E>(result: &Result<T, E>) -> &'static str {
    match result {
        Ok(_) => announce::COPY_SUCCEEDED,
        Err(_) => announce::COPY_FAILED,
    }
}
