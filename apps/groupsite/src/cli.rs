//! Command-line arguments and configuration lookup

use std::path::{Path, PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand};
use groupsite_core::{ConfigError, SiteConfig};
use thiserror::Error;

/// Config file looked for in the working directory
pub const LOCAL_CONFIG: &str = "groupsite.toml";

#[derive(Parser, Debug)]
#[command(name = "groupsite")]
#[command(about = "Browse a research group's team and publications")]
pub struct Args {
    /// Configuration file (TOML, or JSON by extension)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding group.json, team.json and publications.bib
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List publications, newest first
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Print the publication views as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the group and its members
    Team,

    /// Show one member's details and publications
    Member {
        /// Member id from team.json
        id: String,
    },

    /// Print the original BibTeX of visible publications
    Export {
        /// Positions in the visible list; all visible entries if omitted
        indices: Vec<usize>,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Read search input and commands from stdin
    Interactive,
}

/// Filters shared by `list` and `export`
#[derive(ClapArgs, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Only publications by this member
    #[arg(long)]
    pub member: Option<String>,

    /// Case-insensitive search over title, authors, venue and year
    #[arg(long)]
    pub search: Option<String>,
}

/// Errors from command arguments that do not match the loaded data
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CliError {
    #[error("unknown team member: {0}")]
    UnknownMember(String),

    #[error("no publication at position {index} ({visible} visible)")]
    IndexOutOfRange { index: usize, visible: usize },
}

/// Default config locations, in lookup order
pub fn default_config_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(LOCAL_CONFIG)];
    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("groupsite").join("config.toml"));
    }
    locations
}

/// Resolve the configuration.
///
/// An explicit path must load. Otherwise the first existing default location
/// is used, falling back to built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    if let Some(path) = explicit {
        return SiteConfig::from_path(path);
    }
    load_first(&default_config_locations())
}

fn load_first(candidates: &[PathBuf]) -> Result<SiteConfig, ConfigError> {
    match candidates.iter().find(|path| path.is_file()) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using config file");
            SiteConfig::from_path(path)
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            Ok(SiteConfig::default())
        }
    }
}
