//! Typed traversal of the two-level `brand/product` asset tree.
//!
//! The directory nesting is the catalog's schema: immediate subdirectories of
//! the products root are brands, their immediate subdirectories are products.
//! Scanning is separated from field mapping so each can be tested on its own.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Metadata filename expected inside every product directory.
pub const INFO_FILENAME: &str = "info.json";

/// Photo subdirectory name inside a product directory.
pub const FOTOS_DIRNAME: &str = "fotos";

/// One product directory located during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDir {
    /// Brand directory name, verbatim.
    pub brand: String,

    /// Product directory name, verbatim.
    pub name: String,

    /// Path to the product's `info.json`.
    pub info_path: PathBuf,

    /// Path to the product's photo directory; may not exist.
    pub fotos_dir: PathBuf,
}

/// Enumerate product directories under the products root.
///
/// Only directories exactly two levels below the root qualify; files at
/// either level are skipped silently, as are product directories without an
/// `info.json`. Entries come back sorted by brand then product name so a
/// rescan of unchanged inputs yields an identical sequence.
pub fn scan_product_dirs(root: &Path) -> Vec<ProductDir> {
    let mut dirs = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();

        let info_path = path.join(INFO_FILENAME);
        if !info_path.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let brand = path
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        dirs.push(ProductDir {
            brand,
            name,
            info_path,
            fotos_dir: path.join(FOTOS_DIRNAME),
        });
    }

    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn make_product(root: &Path, brand: &str, product: &str) {
        let dir = root.join(brand).join(product);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(INFO_FILENAME), "{}").unwrap();
    }

    #[test]
    fn finds_products_two_levels_deep() {
        let temp = tempdir().unwrap();
        make_product(temp.path(), "Coosy", "vestido-01");
        make_product(temp.path(), "Zara", "camisa-03");

        let dirs = scan_product_dirs(temp.path());

        assert_eq!(dirs.len(), 2);
        assert_eq!(dirs[0].brand, "Coosy");
        assert_eq!(dirs[0].name, "vestido-01");
        assert_eq!(dirs[1].brand, "Zara");
    }

    #[test]
    fn skips_product_dirs_without_metadata() {
        let temp = tempdir().unwrap();
        make_product(temp.path(), "Zara", "camisa-03");
        fs::create_dir_all(temp.path().join("Zara").join("sin-info")).unwrap();

        let dirs = scan_product_dirs(temp.path());

        assert_eq!(dirs.len(), 1);
        assert_eq!(dirs[0].name, "camisa-03");
    }

    #[test]
    fn skips_stray_files_at_both_levels() {
        let temp = tempdir().unwrap();
        make_product(temp.path(), "Zara", "camisa-03");
        fs::write(temp.path().join("notas.txt"), "x").unwrap();
        fs::write(temp.path().join("Zara").join("logo.png"), "x").unwrap();

        let dirs = scan_product_dirs(temp.path());

        assert_eq!(dirs.len(), 1);
    }

    #[test]
    fn scan_order_is_sorted_and_stable() {
        let temp = tempdir().unwrap();
        make_product(temp.path(), "Zara", "b-producto");
        make_product(temp.path(), "Zara", "a-producto");
        make_product(temp.path(), "Mango", "z-producto");

        let first = scan_product_dirs(temp.path());
        let second = scan_product_dirs(temp.path());

        let names: Vec<_> = first
            .iter()
            .map(|d| (d.brand.as_str(), d.name.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![
                ("Mango", "z-producto"),
                ("Zara", "a-producto"),
                ("Zara", "b-producto"),
            ]
        );
        assert_eq!(first, second);
    }
}
