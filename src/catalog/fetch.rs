//! Fetch functions - retrieve raw CSV tables from the OpenNGC mirrors

use crate::catalog::types::RawRow;
use crate::catalog::utils::http_get_text;
use anyhow::Result;
use tracing::info;

/// Fetch a CSV source file and parse it into raw rows
pub async fn fetch_rows(url: &str) -> Result<Vec<RawRow>> {
    info!("Fetching CSV from {}", url);

    let text = http_get_text(url).await?;
    let rows = parse_rows(&text)?;

    info!("Read {} rows from {}", rows.len(), url);
    Ok(rows)
}

/// Parse CSV text into rows keyed by the header line.
///
/// OpenNGC releases are not perfectly regular, so short records are
/// tolerated: a row simply ends up without the trailing columns.
pub fn parse_rows(text: &str) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.to_string(), v.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}
