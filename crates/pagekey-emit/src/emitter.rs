//! Key file emitter.

use std::io;
use std::path::PathBuf;

use tokio::fs;

use crate::key::VerificationKey;

/// Configuration for emitting the key file.
#[derive(Debug, Clone)]
pub struct EmitConfig {
    /// Directory the key file is written to
    pub public_dir: PathBuf,
}

/// Successful result of an emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitOutcome {
    /// Key file written (or overwritten) at this path
    Written(PathBuf),

    /// No key was supplied, nothing was touched
    Skipped,
}

/// Errors that can occur while writing the key file.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("Key '{0}' does not form a plain file name inside the public directory")]
    InvalidKey(String),

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What happened during a build step run. Failures are reported, never raised.
#[derive(Debug)]
pub enum EmitReport {
    Written(PathBuf),
    Skipped,
    Failed(EmitError),
}

impl EmitReport {
    pub fn is_failed(&self) -> bool {
        matches!(self, EmitReport::Failed(_))
    }
}

/// Writes `<key>.txt` into the public directory.
pub struct KeyFileEmitter {
    config: EmitConfig,
}

impl KeyFileEmitter {
    /// Create a new emitter.
    pub fn new(config: EmitConfig) -> Self {
        Self { config }
    }

    /// Path the key file for `key` would be written to.
    pub fn key_path(&self, key: &VerificationKey) -> PathBuf {
        self.config.public_dir.join(key.file_name())
    }

    /// Emit the key file.
    ///
    /// A missing or blank key skips all work. A key that would not resolve to a file
    /// directly inside the public directory is rejected before anything is touched.
    /// Otherwise the public directory is created if needed, then the key file is
    /// written, replacing any previous one.
    pub async fn emit(&self, key: Option<&str>) -> Result<EmitOutcome, EmitError> {
        let Some(key) = key.and_then(VerificationKey::new) else {
            return Ok(EmitOutcome::Skipped);
        };

        if !key.is_plain_file_name() {
            return Err(EmitError::InvalidKey(key.as_str().to_string()));
        }

        if !key.is_conventional() {
            tracing::warn!(
                "IndexNow key '{}' does not match the expected format (8-128 of a-z, A-Z, 0-9, -)",
                key
            );
        }

        let dir = &self.config.public_dir;
        fs::create_dir_all(dir)
            .await
            .map_err(|source| EmitError::CreateDir {
                path: dir.clone(),
                source,
            })?;

        let path = self.key_path(&key);
        fs::write(&path, key.as_str())
            .await
            .map_err(|source| EmitError::WriteFile {
                path: path.clone(),
                source,
            })?;

        Ok(EmitOutcome::Written(path))
    }

    /// Run as a build step: emit, log the result, and never fail the caller.
    pub async fn run(&self, key: Option<&str>) -> EmitReport {
        match self.emit(key).await {
            Ok(EmitOutcome::Written(path)) => {
                tracing::info!("Created IndexNow key file: {}", path.display());
                EmitReport::Written(path)
            }
            Ok(EmitOutcome::Skipped) => {
                tracing::warn!(
                    "No IndexNow key configured. The key file will not be created."
                );
                EmitReport::Skipped
            }
            Err(e) => {
                tracing::error!("Failed to create IndexNow key file: {}", e);
                EmitReport::Failed(e)
            }
        }
    }
}
