//! Declarative brand configuration (`brands.toml`).

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Brand configuration file structure.
///
/// An array of `[[brands]]` tables; file order is preserved into the
/// generated `brands.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct BrandsConfig {
    pub brands: Vec<BrandEntry>,
}

/// One configured brand account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BrandEntry {
    /// Display name; also the brand's directory name under `productos/`.
    pub name: String,

    pub email: String,

    pub password: String,
}

impl BrandsConfig {
    /// Load the brand config from a TOML file.
    ///
    /// The credential table is required input; a missing or malformed file
    /// is an error rather than an empty table.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Errors that can occur when loading the brand config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid brand config in {path}: {message}")]
    Parse { path: String, message: String },
}
