//! Utility functions for common operations

use anyhow::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

/// Fetch timeout for the catalog source files
const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

/// Download a text resource via HTTP
pub async fn http_get_text(url: &str) -> Result<String> {
    info!("Downloading from {}", url);
    let client = Client::builder().timeout(HTTP_TIMEOUT).build()?;

    let response = client.get(url).send().await?;
    let status = response.status();

    if !status.is_success() {
        return Err(anyhow::anyhow!("HTTP request failed: {}", status));
    }

    let text = response.text().await?;
    info!("Downloaded {} bytes", text.len());
    Ok(text)
}

/// Parse a float defensively: trimmed, empty or garbage input yields None
pub fn parse_float(value: Option<&str>) -> Option<f64> {
    let v = value?.trim();
    if v.is_empty() {
        return None;
    }
    v.parse::<f64>().ok()
}

/// Parse an integer defensively, same policy as `parse_float`
pub fn parse_int(value: &str) -> Option<i64> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }
    v.parse::<i64>().ok()
}
