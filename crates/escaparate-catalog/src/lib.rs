//! Product catalog loader.
//!
//! Walks the `productos/` asset tree (one directory per brand, one
//! subdirectory per product), parses each product's `info.json` and resolves
//! its image files into frontend-ready catalog records.

pub mod loader;
pub mod product;
pub mod scan;

pub use loader::{load_products, CatalogError};
pub use product::{Product, ProductInfo};
pub use scan::{scan_product_dirs, ProductDir};
