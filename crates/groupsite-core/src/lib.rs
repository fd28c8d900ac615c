//! groupsite-core: publication filtering and page state for a research group site
//!
//! This library provides:
//! - The filter engine deriving the visible publication list
//! - Search input debounce (clock-driven and tokio-driven)
//! - `Site`, the state object the page shell owns
//! - View models for both page variants
//! - Data loading and configuration
//!
//! Parsing lives in `groupsite-bibtex`; the data model in `groupsite-domain`.

pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod loader;
pub mod site;
pub mod view;

pub use config::{DataConfig, PresentationConfig, SearchConfig, SiteConfig};
pub use debounce::{run_debounced, SearchDebouncer, SearchEvent, DEFAULT_DEBOUNCE};
pub use error::{ConfigError, LoadError, Result, SiteError};
pub use filter::{
    filter_publications, member_matches, normalize_query, search_matches, visible_indices,
    FilterState,
};
pub use loader::SiteData;
pub use site::{SelectionChange, Site, TeamView};

pub use groupsite_domain::{GroupInfo, PublicationRecord, TeamMember, TeamRoster};
