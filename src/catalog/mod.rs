//! DSO catalog module - functional pipeline from OpenNGC CSV to JSON catalog

pub mod checkpoint;
pub mod config;
pub mod fetch;
pub mod normalize;
pub mod types;
pub mod utils;
pub mod write;

pub use config::Config;
pub use types::*;

use anyhow::Result;

/// Fetch both source files, normalize them and assemble the full document.
///
/// Entries keep source-file order: all NGC entries precede the addendum.
pub async fn generate_catalog(config: &Config) -> Result<CatalogDocument> {
    let ngc_rows = fetch::fetch_rows(&config.ngc_url).await?;
    let addendum_rows = fetch::fetch_rows(&config.addendum_url).await?;

    let mut objects = normalize::build_entries(&ngc_rows, "NGC/IC");
    objects.extend(normalize::build_entries(&addendum_rows, "Addendum"));

    Ok(CatalogDocument::new(objects))
}
