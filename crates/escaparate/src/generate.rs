//! The single generation pass: load, expand, write.

use std::path::Path;

use anyhow::{Context, Result};

use escaparate_brands::{expand, BrandsConfig};
use escaparate_catalog::load_products;
use escaparate_writer::{write_credentials, write_json};

/// Run one full generation pass.
///
/// Both collections are rebuilt from scratch and every output file is fully
/// replaced; there is no merging with prior output. Per-product problems are
/// diagnostics only, but a config or write failure aborts the run.
pub fn run(assets: &Path, config_path: &Path, output: &Path) -> Result<()> {
    let config = BrandsConfig::load(config_path)
        .with_context(|| format!("Failed to load brand config from {}", config_path.display()))?;

    tracing::info!("Loading products...");
    let products = load_products(&assets.join("productos"));
    tracing::info!("Total products: {}", products.len());

    let brands = expand(&config);
    tracing::info!("Total brands: {}", brands.len());

    let data_dir = output.join("src").join("data");

    let products_path = data_dir.join("products.json");
    write_json(&products_path, &products).context("Failed to write product catalog")?;
    tracing::info!("Products written to {}", products_path.display());

    let brands_path = data_dir.join("brands.json");
    write_json(&brands_path, &brands).context("Failed to write brand directory")?;
    tracing::info!("Brands written to {}", brands_path.display());

    let credentials_path = output.join("CREDENTIALS.md");
    write_credentials(&credentials_path, &brands).context("Failed to write credentials table")?;
    tracing::info!("Credentials written to {}", credentials_path.display());

    Ok(())
}
