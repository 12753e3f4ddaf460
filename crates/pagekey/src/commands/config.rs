//! Print the resolved configuration.

use std::path::Path;

use anyhow::{Context, Result};

/// Run the config command.
pub fn run(config_path: &Path, json: bool) -> Result<()> {
    let config = super::load_config(config_path)?;

    let rendered = if json {
        serde_json::to_string_pretty(&config).context("Failed to render config as JSON")?
    } else {
        config
            .to_toml_string()
            .context("Failed to render config as TOML")?
    };

    println!("{}", rendered);

    Ok(())
}
