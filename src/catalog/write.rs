//! Write functions - persist the catalog document as pretty-printed JSON

use crate::catalog::types::CatalogDocument;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Serialize the catalog to `path`, creating parent directories as needed.
///
/// Overwrites any existing file. No atomic-rename guarantee; a crash
/// mid-write can leave a truncated file.
pub fn save_catalog(catalog: &CatalogDocument, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {:?}", parent))?;
        }
    }

    info!("Saving catalog to {:?}", path);

    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, &json).with_context(|| format!("writing catalog to {:?}", path))?;

    let size = fs::metadata(path)?.len();
    info!("Catalog written ({} bytes)", size);

    Ok(())
}
