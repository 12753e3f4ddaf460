//! Build-time IndexNow key file emitter.
//!
//! Writes `<key>.txt` containing the key itself into the site's public directory so
//! search engines can verify ownership of the host.

pub mod emitter;
pub mod key;

pub use emitter::{EmitConfig, EmitError, EmitOutcome, EmitReport, KeyFileEmitter};
pub use key::VerificationKey;
