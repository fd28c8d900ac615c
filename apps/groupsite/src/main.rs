//! groupsite - research group team and publication browser
//!
//! Loads the group's data files and shows the same filtered publication
//! list the web page would.

mod cli;
mod commands;
mod interactive;
mod render;

use clap::Parser;
use groupsite_core::view::LOAD_FAILURE_MESSAGE;
use groupsite_core::{Site, SiteConfig, SiteError};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let args = Args::parse();
    let mut config = cli::load_config(args.config.as_deref())?;
    if let Some(dir) = args.data_dir {
        config.data.dir = dir;
    }

    let mut site = load_site(&config)?;

    match args.command {
        Command::List { filter, json } => {
            commands::apply_filters(&mut site, &filter)?;
            println!("{}", commands::list(&site, json)?);
        }
        Command::Team => {
            println!("{}", commands::team(&site, &config.presentation));
        }
        Command::Member { id } => {
            println!("{}", commands::member(&mut site, &id, &config.presentation)?);
        }
        Command::Export { indices, filter } => {
            commands::apply_filters(&mut site, &filter)?;
            let exported = commands::export(&site, &indices);
            eprintln!("{}", commands::copy_status(&exported));
            println!("{}", exported?);
        }
        Command::Interactive => {
            let input = BufReader::new(tokio::io::stdin());
            let mut out = std::io::stdout();
            interactive::run(site, &config.presentation, config.search.debounce(), input, &mut out)
                .await?;
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`)
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_site(config: &SiteConfig) -> Result<Site, Box<dyn std::error::Error>> {
    match Site::open(config) {
        Ok(site) => Ok(site),
        Err(SiteError::Load(err)) => {
            tracing::error!(path = %err.path().display(), error = %err, "failed to load site data");
            eprintln!("{LOAD_FAILURE_MESSAGE}");
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}
