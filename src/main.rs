//! ncsite - the Natural C project website as a small generator and server.

mod build;
mod cli;
mod config;
mod serve;
mod site;
mod utils;

use anyhow::Result;
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use serve::serve_site;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Build { .. } => build_site(&config),
        Commands::Serve { .. } => serve_site(&config),
    }
}

/// Load and validate configuration from CLI arguments.
///
/// The config file is optional: all page content is embedded, so the
/// defaults are enough to build and serve when no `ncsite.toml` exists.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
