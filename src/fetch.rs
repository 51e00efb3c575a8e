//! Blocking HTTP fetch for remote input datasets.

use anyhow::{Context, Result};

/// Downloads an input CSV from a URL, failing on non-2xx statuses.
pub fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let resp = reqwest::blocking::get(url)
        .with_context(|| format!("fetching {url}"))?
        .error_for_status()?;

    Ok(resp.bytes()?.to_vec())
}
