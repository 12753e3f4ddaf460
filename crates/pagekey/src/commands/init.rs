//! Initialize site configuration in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pagekey_config::SiteConfig;

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing pagekey...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    let config = SiteConfig::load(config_path)?;
    let public_dir = &config.indexnow.public_dir;

    if !public_dir.exists() {
        fs::create_dir_all(public_dir).context("Failed to create public directory")?;
        tracing::info!("Created {}/", public_dir.display());
    }

    tracing::info!("Initialization complete!");
    tracing::info!(
        "Set INDEXNOW_API_KEY_NAME and run 'pagekey build' to write the key file."
    );

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# pagekey configuration

[site]
# Deployment target URL
# url = "https://example.pages.dev"

# Rendering mode: "server" or "static"
output = "static"

# Edge hosting adapter (required for output = "server")
# adapter = "cloudflare"

[indexnow]
# Verification key. Prefer supplying it through INDEXNOW_API_KEY_NAME.
# key = ""

# Directory the key file is written to
public_dir = "public"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config: SiteConfig = toml::from_str(DEFAULT_CONFIG).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config, SiteConfig::default());
    }
}
