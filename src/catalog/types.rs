//! Core data types for the catalog pipeline
//! Pure data structures with no behavior

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A raw CSV row: column name -> string value.
///
/// Column names vary across OpenNGC releases and columns may be missing
/// entirely, so this stays a loose map instead of a typed struct.
pub type RawRow = HashMap<String, String>;

/// Format version written into every generated document
pub const CATALOG_VERSION: u32 = 1;

/// Human-readable description of where the data came from
pub const CATALOG_SOURCE: &str = "OpenNGC (NGC.csv + addendum.csv)";

/// A normalized deep-sky object entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Internal identifier, normally the same as `code`
    pub id: String,

    /// Naming scheme `code`/`number` belong to ("Messier", "NGC/IC", ...)
    pub catalog: String,

    /// Display designation, e.g. "M31" or "NGC0224"
    pub code: String,

    /// Numeric portion of the designation, when one can be parsed
    pub number: Option<i64>,

    /// NGC cross-reference designation, if the source provides one
    pub ngc: Option<String>,

    /// IC cross-reference designation, if the source provides one
    pub ic: Option<String>,

    /// Best available human-readable label (common name > designation)
    pub name: String,

    /// Object classification, verbatim from the source
    #[serde(rename = "type")]
    pub object_type: String,

    /// Constellation abbreviation, verbatim from the source
    pub constellation: String,

    pub ra_deg: Option<f64>,
    pub dec_deg: Option<f64>,

    /// Apparent magnitude, V band preferred over B
    pub mag: Option<f64>,

    pub surface_brightness: Option<f64>,

    /// Reserved for a future image pipeline, always null for now
    pub image_url: Option<String>,
}

/// The aggregated output document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub version: u32,
    pub generated_at: String,
    pub source: String,
    pub object_count: usize,
    pub objects: Vec<CatalogEntry>,
}

impl CatalogDocument {
    /// Assemble the document around an already-ordered object list,
    /// stamping the format version and a UTC generation timestamp.
    pub fn new(objects: Vec<CatalogEntry>) -> Self {
        CatalogDocument {
            version: CATALOG_VERSION,
            generated_at: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            source: CATALOG_SOURCE.to_string(),
            object_count: objects.len(),
            objects,
        }
    }
}
