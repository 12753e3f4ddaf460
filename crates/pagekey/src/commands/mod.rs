//! CLI subcommands.

pub mod build;
pub mod config;
pub mod init;
pub mod serve;

use std::path::Path;

use anyhow::{Context, Result};
use pagekey_config::SiteConfig;

/// Load and validate the site configuration.
pub fn load_config(path: &Path) -> Result<SiteConfig> {
    let config = SiteConfig::load(path)?;
    config
        .validate()
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;

    tracing::debug!("Resolved config from {}", path.display());

    Ok(config)
}
