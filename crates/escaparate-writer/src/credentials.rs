//! Credentials reference document.

use std::fs;
use std::path::Path;

use escaparate_brands::Brand;

use crate::WriteError;

/// Render the credentials table as a Markdown document.
///
/// One row per brand, sorted ascending by brand name. Passwords are listed
/// in plaintext on purpose; this file is an operator reference, nothing
/// reads it back.
pub fn render_credentials(brands: &[Brand]) -> String {
    let mut sorted: Vec<&Brand> = brands.iter().collect();
    sorted.sort_by(|a, b| a.brand_name.cmp(&b.brand_name));

    let mut doc = String::from("# Credenciales de Acceso\n\n");
    doc.push_str("## Marcas Pre-configuradas\n\n");
    doc.push_str("| Marca | Email | Contraseña |\n");
    doc.push_str("|-------|-------|------------|\n");

    for brand in sorted {
        doc.push_str(&format!(
            "| {} | {} | {} |\n",
            brand.brand_name, brand.contact_email, brand.password
        ));
    }

    doc
}

/// Write the credentials document, replacing any existing file.
pub fn write_credentials(path: &Path, brands: &[Brand]) -> Result<(), WriteError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| WriteError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    }

    fs::write(path, render_credentials(brands)).map_err(|e| WriteError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
