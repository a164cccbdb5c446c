//! Snapshot acquisition — local file read or HTTP(S) fetch.
//!
//! Every failure mode (missing file, request error, non-2xx status,
//! malformed JSON) surfaces as [`Error::Acquisition`]; callers degrade to
//! the empty "no data" state rather than aborting.

use contextlens_core::{Error, Result, Snapshot};
use tracing::debug;

/// Acquire a snapshot from a file path or an http(s) URL.
pub async fn acquire(input: &str) -> Result<Snapshot> {
    let raw = if input.starts_with("http://") || input.starts_with("https://") {
        fetch_url(input).await?
    } else {
        std::fs::read_to_string(input)
            .map_err(|e| Error::acquisition(format!("failed to read {input}: {e}")))?
    };

    let snapshot = serde_json::from_str(&raw)
        .map_err(|e| Error::acquisition(format!("failed to parse snapshot JSON: {e}")))?;
    debug!(source = input, "snapshot acquired");
    Ok(snapshot)
}

async fn fetch_url(url: &str) -> Result<String> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| Error::acquisition(format!("request to {url} failed: {e}")))?;

    if !response.status().is_success() {
        return Err(Error::acquisition(format!(
            "request to {url} returned {}",
            response.status()
        )));
    }

    response
        .text()
        .await
        .map_err(|e| Error::acquisition(format!("failed to read response body: {e}")))
}
