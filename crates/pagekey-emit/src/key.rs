//! Verification key value.

use std::fmt;
use std::path::{Component, Path};
use std::sync::LazyLock;

use regex::Regex;

/// Key format accepted by IndexNow endpoints.
static CONVENTIONAL_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9-]{8,128}$").expect("valid key pattern"));

/// An opaque verification key, used as both file name stem and file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationKey(String);

impl VerificationKey {
    /// Wrap a raw key. Empty or whitespace-only input is treated as no key.
    ///
    /// Non-blank input is kept verbatim.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the key file: `<key>.txt`.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.0)
    }

    /// Whether `<key>.txt` is a bare file name, with no separators, roots or
    /// parent references that would place it outside the public directory.
    pub fn is_plain_file_name(&self) -> bool {
        let file_name = self.file_name();
        if file_name.contains(['/', '\\']) {
            return false;
        }

        let mut components = Path::new(&file_name).components();
        matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        )
    }

    /// Whether the key matches the IndexNow format (8-128 of `a-zA-Z0-9-`).
    pub fn is_conventional(&self) -> bool {
        CONVENTIONAL_KEY.is_match(&self.0)
    }
}

impl fmt::Display for VerificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
