//! Product record types.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Raw product metadata as found in a product's `info.json`.
///
/// Every field is optional; the source files are hand-maintained and often
/// carry only a subset of keys. Keys follow the Spanish naming of the asset
/// tree. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductInfo {
    #[serde(default)]
    pub item_id: Option<String>,

    #[serde(default, rename = "nombre")]
    pub name: Option<String>,

    #[serde(default, rename = "precio")]
    pub price: Option<Number>,

    /// Size labels; strings for apparel, numbers for footwear.
    #[serde(default, rename = "tallas")]
    pub sizes: Option<Vec<Value>>,

    #[serde(default, rename = "categoria")]
    pub category: Option<String>,

    #[serde(default, rename = "subcategoria")]
    pub subcategory: Option<String>,

    #[serde(default, rename = "descripcion")]
    pub description: Option<String>,

    #[serde(default, rename = "relacionados")]
    pub related: Option<Vec<Value>>,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default, rename = "estilo")]
    pub style: Option<String>,

    #[serde(default)]
    pub material: Option<String>,

    #[serde(default, rename = "temporada")]
    pub season: Option<String>,

    #[serde(default, rename = "publico_objetivo")]
    pub target_audience: Option<String>,

    #[serde(default)]
    pub url: Option<String>,
}

/// A catalog entry as consumed by the web frontend.
///
/// Field order matches the JSON document layout the frontend expects.
/// Absent descriptive fields serialize as `null`, not as missing keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Item identifier, or the product directory name when the metadata
    /// carries none.
    pub id: String,

    /// Brand directory name, verbatim; joins against `Brand::brand_name`.
    pub brand: String,

    pub title: String,

    pub price: Number,

    pub sizes: Vec<Value>,

    /// Web-rooted image paths, sorted by filename.
    pub image_paths: Vec<String>,

    /// Web-rooted brand logo path; derived from the brand name alone,
    /// whether or not the file exists.
    pub logo_path: String,

    pub category: Option<String>,

    pub subcategory: Option<String>,

    pub description: Option<String>,

    #[serde(rename = "relatedProductIDs")]
    pub related_product_ids: Vec<Value>,

    pub color: Option<String>,

    pub style: Option<String>,

    pub material: Option<String>,

    pub season: Option<String>,

    pub target_audience: Option<String>,

    pub url: Option<String>,

    pub stock: u32,

    pub featured: bool,

    pub active: bool,
}

/// Default stock assigned to every product; inventory is not tracked.
pub const DEFAULT_STOCK: u32 = 50;
