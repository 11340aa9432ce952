//! Output writers for the generated catalog data.
//!
//! Serializes the product and brand collections as pretty-printed JSON and
//! renders the credentials reference table. Every write fully replaces the
//! target file; write failures are fatal to the run.

pub mod credentials;
pub mod json;

pub use credentials::{render_credentials, write_credentials};
pub use json::write_json;

/// Errors that can occur while writing output files.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Failed to serialize {path}: {message}")]
    Serialize { path: String, message: String },

    #[error("Failed to write {path}: {message}")]
    Io { path: String, message: String },
}
