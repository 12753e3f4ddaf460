//! Framework-facing site settings.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Rendering mode passed through to the site framework.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Pages are rendered on request by the hosting adapter
    Server,

    /// Pages are prerendered at build time
    #[default]
    Static,
}

impl OutputMode {
    /// Whether this mode needs a hosting adapter to run.
    pub fn needs_adapter(self) -> bool {
        matches!(self, OutputMode::Server)
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Server => f.write_str("server"),
            OutputMode::Static => f.write_str("static"),
        }
    }
}

/// The `[site]` table of site.toml.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SiteSettings {
    /// Deployment target URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,

    /// Rendering mode
    #[serde(default)]
    pub output: OutputMode,

    /// Edge adapter module name (e.g. "cloudflare")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adapter: Option<String>,
}
