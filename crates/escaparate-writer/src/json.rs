//! Pretty-printed JSON output.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::WriteError;

/// Serialize a collection as a pretty-printed JSON array and write it to
/// `path`, creating parent directories and replacing any existing file.
///
/// serde_json's pretty printer uses 2-space indentation and leaves non-ASCII
/// characters unescaped, which is exactly the document shape the frontend
/// bundles. A trailing newline is appended so the files are editor-friendly.
pub fn write_json<T: Serialize>(path: &Path, records: &[T]) -> Result<(), WriteError> {
    let mut json = serde_json::to_string_pretty(records).map_err(|e| WriteError::Serialize {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    json.push('\n');

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| WriteError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    }

    fs::write(path, json).map_err(|e| WriteError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    tracing::debug!("Wrote {} records to {}", records.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Number;
    use tempfile::tempdir;

    use escaparate_catalog::Product;

    fn sample_product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            brand: "Coosy".to_string(),
            title: "Vestido Ñandú".to_string(),
            price: Number::from(89),
            sizes: vec![],
            image_paths: vec![],
            logo_path: "/assets/logos/Coosy.png".to_string(),
            category: None,
            subcategory: None,
            description: None,
            related_product_ids: vec![],
            color: None,
            style: None,
            material: None,
            season: None,
            target_audience: None,
            url: None,
            stock: 50,
            featured: false,
            active: true,
        }
    }

    #[test]
    fn writes_pretty_array_with_literal_unicode() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("products.json");

        write_json(&path, &[sample_product("p1")]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n  {\n"));
        assert!(content.contains("Vestido Ñandú"));
        assert!(!content.contains("\\u"));
        assert!(content.ends_with("]\n"));
    }

    #[test]
    fn creates_parent_directories() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("src").join("data").join("products.json");

        write_json(&path, &[sample_product("p1")]).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn replaces_existing_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("products.json");
        fs::write(&path, "old contents").unwrap();

        write_json(&path, &[sample_product("p2")]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("p2"));
        assert!(!content.contains("old contents"));
    }

    #[test]
    fn empty_collection_writes_empty_array() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("products.json");

        write_json::<Product>(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");
    }

    #[test]
    fn rewriting_unchanged_records_is_byte_identical() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("products.json");
        let records = [sample_product("p1"), sample_product("p2")];

        write_json(&path, &records).unwrap();
        let first = fs::read(&path).unwrap();

        write_json(&path, &records).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }
}
