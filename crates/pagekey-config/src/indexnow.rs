//! IndexNow key file settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable the build environment supplies the key through.
pub const KEY_ENV_VAR: &str = "INDEXNOW_API_KEY_NAME";

/// The `[indexnow]` table of site.toml.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct IndexNowSettings {
    /// Verification key. Usually left unset here and supplied through the environment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Directory the key file is written to
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

impl Default for IndexNowSettings {
    fn default() -> Self {
        Self {
            key: None,
            public_dir: default_public_dir(),
        }
    }
}

impl IndexNowSettings {
    /// Pick the key to emit: an explicit override wins over the configured key.
    ///
    /// Blank values on either side count as unset.
    pub fn resolve_key<'a>(&'a self, override_key: Option<&'a str>) -> Option<&'a str> {
        override_key
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.key.as_deref().filter(|k| !k.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_configured_key() {
        let settings = IndexNowSettings {
            key: Some("from-config".to_string()),
            ..Default::default()
        };

        assert_eq!(settings.resolve_key(Some("from-env")), Some("from-env"));
    }

    #[test]
    fn blank_override_falls_back_to_config() {
        let settings = IndexNowSettings {
            key: Some("from-config".to_string()),
            ..Default::default()
        };

        assert_eq!(settings.resolve_key(Some("")), Some("from-config"));
        assert_eq!(settings.resolve_key(Some("  ")), Some("from-config"));
    }

    #[test]
    fn nothing_configured_resolves_to_none() {
        let settings = IndexNowSettings::default();

        assert_eq!(settings.resolve_key(None), None);
        assert_eq!(settings.public_dir, PathBuf::from("public"));
    }
}
