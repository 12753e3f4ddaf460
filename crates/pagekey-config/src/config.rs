//! Loading and validating site.toml.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::indexnow::IndexNowSettings;
use crate::site::{OutputMode, SiteSettings};

/// Config file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "site.toml";

/// Full site configuration (site.toml).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSettings,

    #[serde(default)]
    pub indexnow: IndexNowSettings,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Site URL must use http or https, got {0}")]
    UnsupportedScheme(String),

    #[error("output = \"{0}\" requires an adapter")]
    MissingAdapter(OutputMode),

    #[error("Adapter name must not be empty")]
    EmptyAdapter,
}

impl SiteConfig {
    /// Load configuration from `path`.
    ///
    /// A missing file yields the default configuration. A file that exists but cannot
    /// be read or parsed is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Check the settings the site framework would reject.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.site.url {
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
            }
        }

        match self.site.adapter.as_deref() {
            Some(name) if name.trim().is_empty() => Err(ConfigError::EmptyAdapter),
            None if self.site.output.needs_adapter() => {
                Err(ConfigError::MissingAdapter(self.site.output))
            }
            _ => Ok(()),
        }
    }

    /// Public URL the key file is served from, when the site URL is known.
    pub fn key_location(&self, key: &str) -> Option<Url> {
        let mut location = self.site.url.clone()?;
        location.set_query(None);
        location.set_fragment(None);
        location
            .path_segments_mut()
            .ok()?
            .clear()
            .push(&format!("{}.txt", key));
        Some(location)
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
[site]
url = "https://bokeptantesange.pages.dev"
output = "server"
adapter = "cloudflare"

[indexnow]
public_dir = "static"
"#;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempdir().unwrap();

        let config = SiteConfig::load(&temp.path().join("site.toml")).unwrap();

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.site.output, OutputMode::Static);
        assert_eq!(config.indexnow.public_dir, PathBuf::from("public"));
    }

    #[test]
    fn loads_full_config() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, SAMPLE).unwrap();

        let config = SiteConfig::load(&path).unwrap();

        assert_eq!(
            config.site.url.as_ref().map(|u| u.as_str()),
            Some("https://bokeptantesange.pages.dev/")
        );
        assert_eq!(config.site.output, OutputMode::Server);
        assert_eq!(config.site.adapter.as_deref(), Some("cloudflare"));
        assert_eq!(config.indexnow.key, None);
        assert_eq!(config.indexnow.public_dir, PathBuf::from("static"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unreadable_path_is_an_error_not_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::create_dir_all(&path).unwrap();

        let result = SiteConfig::load(&path);

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn errors_on_malformed_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site\nurl = ").unwrap();

        let result = SiteConfig::load(&path);

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn errors_on_unknown_output_mode() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site]\noutput = \"hybrid\"\n").unwrap();

        assert!(matches!(
            SiteConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn server_output_without_adapter_is_invalid() {
        let config: SiteConfig = toml::from_str("[site]\noutput = \"server\"\n").unwrap();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingAdapter(OutputMode::Server))
        ));
    }

    #[test]
    fn blank_adapter_is_invalid() {
        let config: SiteConfig = toml::from_str("[site]\nadapter = \" \"\n").unwrap();

        assert!(matches!(config.validate(), Err(ConfigError::EmptyAdapter)));
    }

    #[test]
    fn non_http_url_is_invalid() {
        let config: SiteConfig =
            toml::from_str("[site]\nurl = \"ftp://example.com\"\n").unwrap();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnsupportedScheme(s)) if s == "ftp"
        ));
    }

    #[test]
    fn key_location_is_rooted_at_site() {
        let config: SiteConfig =
            toml::from_str("[site]\nurl = \"https://example.dev/blog/\"\n").unwrap();

        let location = config.key_location("abc12345").unwrap();

        assert_eq!(location.as_str(), "https://example.dev/abc12345.txt");
        assert!(SiteConfig::default().key_location("abc12345").is_none());
    }

    #[test]
    fn key_location_escapes_query_and_fragment_characters() {
        let config: SiteConfig =
            toml::from_str("[site]\nurl = \"https://example.dev/docs?page=1#top\"\n").unwrap();

        let location = config.key_location("a?b#c").unwrap();

        assert_eq!(location.as_str(), "https://example.dev/a%3Fb%23c.txt");
        assert_eq!(location.query(), None);
        assert_eq!(location.fragment(), None);
    }

    #[test]
    fn round_trips_through_toml() {
        let config: SiteConfig = toml::from_str(SAMPLE).unwrap();

        let rendered = config.to_toml_string().unwrap();
        let reparsed: SiteConfig = toml::from_str(&rendered).unwrap();

        assert_eq!(reparsed, config);
    }
}
