//! Line-driven interactive session.
//!
//! Each plain line is the current content of the search box. Lines that
//! start with `:` are commands. Search input goes through the debouncer,
//! so a quick burst of lines only runs one search.

use std::io::Write;
use std::time::Duration;

use groupsite_core::view::{announce, PresentationConfig, COPIED_LABEL};
use groupsite_core::{run_debounced, SearchEvent, SelectionChange, Site, TeamView};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::render;

/// One line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Clear,
    Member(String),
    View(TeamView),
    Copy(usize),
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix(':') else {
            return Self::Search(line.to_string());
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name {
            "clear" => Self::Clear,
            "quit" | "q" => Self::Quit,
            "member" if !arg.is_empty() => Self::Member(arg.to_string()),
            "view" => TeamView::parse(arg)
                .map(Self::View)
                .unwrap_or_else(|| Self::Unknown(trimmed.to_string())),
            "copy" => arg
                .parse()
                .map(Self::Copy)
                .unwrap_or_else(|_| Self::Unknown(trimmed.to_string())),
            _ => Self::Unknown(trimmed.to_string()),
        }
    }
}

/// Run the session until `:quit` or end of input, returning the final state
pub async fn run<R, W>(
    mut site: Site,
    config: &PresentationConfig,
    debounce: Duration,
    input: R,
    out: &mut W,
) -> Result<Site, Box<dyn std::error::Error>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (search_tx, search_rx) = mpsc::unbounded_channel();
    let (commit_tx, mut commit_rx) = mpsc::unbounded_channel::<String>();

    let debouncer = tokio::spawn(run_debounced(search_rx, debounce, move |query| {
        // The receiver outlives the debouncer unless the session quit
        let _ = commit_tx.send(query);
    }));

    let mut lines = input.lines();
    writeln!(out, "{}", render::team(&site, config))?;
    writeln!(out)?;
    writeln!(out, "{}", render::publications(&site))?;

    let mut quit = false;
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Command::parse(&line) {
                    Command::Search(text) => {
                        let _ = search_tx.send(SearchEvent::Input(text));
                    }
                    Command::Clear => {
                        discard_queued(&mut commit_rx);
                        site.clear_filter();
                        let _ = search_tx.send(SearchEvent::Clear);
                        writeln!(out, "{}", announce::FILTER_CLEARED)?;
                    }
                    Command::Member(id) => {
                        if !site.team().iter().any(|member| member.id == id) {
                            eprintln!("unknown team member: {id}");
                            continue;
                        }
                        match site.toggle_member(&id) {
                            SelectionChange::Selected(_) => {
                                if let Some(member) = site.selected_member() {
                                    writeln!(out, "{}", announce::filtered_to(&member.name))?;
                                }
                                writeln!(out, "{}", render::publications(&site))?;
                            }
                            SelectionChange::Cleared => {
                                discard_queued(&mut commit_rx);
                                let _ = search_tx.send(SearchEvent::Clear);
                                writeln!(out, "{}", announce::FILTER_CLEARED)?;
                            }
                        }
                    }
                    Command::View(view) => {
                        site.set_team_view(view);
                        writeln!(out, "{}", render::team(&site, config))?;
                    }
                    Command::Copy(index) => match site.raw_source_at(index) {
                        Some(raw) => {
                            writeln!(out, "{raw}")?;
                            writeln!(out, "{COPIED_LABEL}")?;
                        }
                        None => writeln!(out, "{}", announce::COPY_FAILED)?,
                    },
                    Command::Quit => {
                        quit = true;
                        break;
                    }
                    Command::Unknown(input) => eprintln!("unknown command: {input}"),
                }
            }
            Some(query) = commit_rx.recv() => {
                site.commit_search(&query);
                writeln!(out, "{}", render::publications(&site))?;
            }
        }
    }

    drop(search_tx);
    if quit {
        debouncer.abort();
        return Ok(site);
    }

    // End of input: let a pending search land before exiting
    while let Some(query) = commit_rx.recv().await {
        site.commit_search(&query);
        writeln!(out, "{}", render::publications(&site))?;
    }
    debouncer.await?;
    Ok(site)
}

/// Drop searches the debouncer already committed but the session has not applied
fn discard_queued(commits: &mut mpsc::UnboundedReceiver<String>) {
    while let Ok(query) = commits.try_recv() {
        tracing::trace!(query = %query, "dropped stale search");
    }
}
