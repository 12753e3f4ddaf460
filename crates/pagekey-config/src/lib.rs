//! Site build configuration for pagekey.
//!
//! Declares the settings handed through to the external site framework (deployment
//! URL, rendering mode, hosting adapter) and the IndexNow key file settings used by
//! the build step.

pub mod config;
pub mod indexnow;
pub mod site;

pub use config::{ConfigError, SiteConfig, DEFAULT_CONFIG_FILE};
pub use indexnow::{IndexNowSettings, KEY_ENV_VAR};
pub use site::{OutputMode, SiteSettings};
