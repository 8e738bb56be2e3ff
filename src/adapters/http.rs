use crate::utils::error::{EtlError, Result};
use reqwest::Client;
use std::time::Duration;

/// Issue a single GET against `url` and return the body text.
///
/// The client lives only for the duration of the call. Transport errors,
/// timeouts, non-2xx statuses and undecodable bodies all surface as
/// [`EtlError::FetchFailed`]. No retries.
pub async fn fetch(url: &str, timeout: Option<Duration>) -> Result<String> {
    let failed = |source: reqwest::Error| EtlError::FetchFailed {
        url: url.to_string(),
        source,
    };

    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build().map_err(failed)?;

    tracing::debug!("Making API request to: {}", url);
    let response = client.get(url).send().await.map_err(failed)?;

    tracing::debug!("API response status: {}", response.status());
    let response = response.error_for_status().map_err(failed)?;

    let body = response.text().await.map_err(failed)?;
    tracing::debug!("Received {} bytes", body.len());
    Ok(body)
}
