//! Expansion of config entries into full brand account records.

use serde::Serialize;

use crate::config::{BrandEntry, BrandsConfig};
use crate::slug::slugify;

/// Account creation timestamp stamped on every brand.
const CREATED_AT: &str = "2025-01-01T00:00:00Z";

/// Capabilities granted to every brand owner account.
const PERMISSIONS: [&str; 5] = [
    "catalog.manage",
    "looks.manage",
    "bonuses.manage",
    "analytics.view",
    "settings.manage",
];

/// A brand account record as consumed by the web frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Slug derived from the brand name. Uniqueness is not enforced; two
    /// names that slugify alike produce duplicate ids.
    pub id: String,

    pub brand_name: String,

    pub contact_email: String,

    /// Plaintext reference credential; nothing in this system enforces it.
    pub password: String,

    /// Repo-rooted logo path, no leading slash. Products carry the
    /// web-rooted variant of the same convention.
    pub logo_path: String,

    pub role: String,

    pub created_at: String,

    pub permissions: Vec<String>,
}

impl Brand {
    fn from_entry(entry: &BrandEntry) -> Self {
        Self {
            id: slugify(&entry.name),
            brand_name: entry.name.clone(),
            contact_email: entry.email.clone(),
            password: entry.password.clone(),
            logo_path: format!("assets/logos/{}.png", entry.name),
            role: "owner".to_string(),
            created_at: CREATED_AT.to_string(),
            permissions: PERMISSIONS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Expand the brand config into account records, one per entry, in config
/// order. Pure and deterministic; the only inputs are the entries themselves.
pub fn expand(config: &BrandsConfig) -> Vec<Brand> {
    config.brands.iter().map(Brand::from_entry).collect()
}
