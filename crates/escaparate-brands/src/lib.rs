//! Brand account table.
//!
//! Expands the declarative brand config (name, contact email, password) into
//! full account records with derived identifiers, logo path convention and a
//! fixed owner role and permission set.

pub mod config;
pub mod slug;
pub mod table;

pub use config::{BrandEntry, BrandsConfig, ConfigError};
pub use slug::slugify;
pub use table::{expand, Brand};
