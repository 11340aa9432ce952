//! Product loading: metadata parsing, defaulting and image resolution.

use std::fs;
use std::path::Path;

use serde_json::Number;

use crate::product::{Product, ProductInfo, DEFAULT_STOCK};
use crate::scan::{scan_product_dirs, ProductDir};

/// Accepted image extensions, compared case-insensitively.
const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Errors that can occur while loading a single product.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid product metadata in {path}: {message}")]
    Parse { path: String, message: String },
}

/// Load every product under the products root.
///
/// A missing root or a broken product is never fatal: both are reported and
/// the remaining products still load. The returned order follows the sorted
/// scan order, so unchanged inputs always produce the same sequence.
pub fn load_products(root: &Path) -> Vec<Product> {
    if !root.exists() {
        tracing::warn!("Products directory not found: {}", root.display());
        return Vec::new();
    }

    let mut products = Vec::new();

    for dir in scan_product_dirs(root) {
        match load_product(&dir) {
            Ok(product) => {
                tracing::info!("{}: {}", product.brand, product.title);
                products.push(product);
            }
            Err(e) => {
                tracing::warn!("Skipping product {}/{}: {}", dir.brand, dir.name, e);
            }
        }
    }

    products
}

/// Load one product from its directory entry.
fn load_product(dir: &ProductDir) -> Result<Product, CatalogError> {
    let content = fs::read_to_string(&dir.info_path).map_err(|e| CatalogError::Read {
        path: dir.info_path.display().to_string(),
        message: e.to_string(),
    })?;

    let info: ProductInfo = serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
        path: dir.info_path.display().to_string(),
        message: e.to_string(),
    })?;

    let image_paths = resolve_images(&dir.fotos_dir, &dir.brand, &dir.name)?;

    Ok(Product {
        id: info.item_id.unwrap_or_else(|| dir.name.clone()),
        brand: dir.brand.clone(),
        title: info.name.unwrap_or_else(|| dir.name.clone()),
        price: info.price.unwrap_or_else(|| Number::from(0)),
        sizes: info.sizes.unwrap_or_default(),
        image_paths,
        logo_path: format!("/assets/logos/{}.png", dir.brand),
        category: info.category,
        subcategory: info.subcategory,
        description: info.description,
        related_product_ids: info.related.unwrap_or_default(),
        color: info.color,
        style: info.style,
        material: info.material,
        season: info.season,
        target_audience: info.target_audience,
        url: info.url,
        stock: DEFAULT_STOCK,
        featured: false,
        active: true,
    })
}

/// Resolve a product's photo files into web-rooted paths.
///
/// An absent photo directory simply yields no images. Files are filtered by
/// extension and sorted by filename so the path list is stable.
fn resolve_images(
    fotos_dir: &Path,
    brand: &str,
    product: &str,
) -> Result<Vec<String>, CatalogError> {
    if !fotos_dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(fotos_dir).map_err(|e| CatalogError::Read {
        path: fotos_dir.display().to_string(),
        message: e.to_string(),
    })?;

    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| has_image_extension(name))
        .collect();

    names.sort();

    Ok(names
        .into_iter()
        .map(|name| format!("/assets/productos/{brand}/{product}/fotos/{name}"))
        .collect())
}

fn has_image_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|ext| IMAGE_EXTENSIONS.iter().any(|a| ext.eq_ignore_ascii_case(a)))
        .unwrap_or(false)
}
