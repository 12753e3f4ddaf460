//! Build-time steps.

use std::path::{Path, PathBuf};

use anyhow::Result;
use pagekey_emit::{EmitConfig, EmitReport, KeyFileEmitter};

/// Run the build command.
///
/// Only configuration errors fail the build. The key file step logs its own
/// problems and lets the build carry on.
pub async fn run(
    config_path: &Path,
    key: Option<String>,
    public_dir: Option<PathBuf>,
) -> Result<()> {
    let config = super::load_config(config_path)?;

    tracing::info!(
        "Site: {} (output: {}, adapter: {})",
        config
            .site
            .url
            .as_ref()
            .map(|u| u.as_str())
            .unwrap_or("<unset>"),
        config.site.output,
        config.site.adapter.as_deref().unwrap_or("<none>")
    );

    let emitter = KeyFileEmitter::new(EmitConfig {
        public_dir: public_dir.unwrap_or_else(|| config.indexnow.public_dir.clone()),
    });

    let resolved = config.indexnow.resolve_key(key.as_deref());

    if let EmitReport::Written(_) = emitter.run(resolved).await {
        if let Some(location) = resolved.and_then(|k| config.key_location(k)) {
            tracing::info!("Key location: {}", location);
        }
    }

    Ok(())
}
