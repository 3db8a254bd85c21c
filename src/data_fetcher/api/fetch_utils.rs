//! Page fetching with status-code error mapping

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches a page body as text.
///
/// Each call makes exactly one request. Timeouts, connection failures and
/// non-success statuses are mapped to a specific [`AppError`].
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - Absolute URL of the page
///
/// # Returns
/// * `Result<String, AppError>` - Response body or error
#[instrument(skip(client))]
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Fetching page: {url}");

    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else if e.is_connect() {
            AppError::network_connection(url, e.to_string())
        } else {
            AppError::PageFetch(e)
        }
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::page_not_found(url),
            429 => AppError::rate_limit(reason, url),
            400..=499 => AppError::client_error(status_code, reason, url),
            _ => AppError::server_error(status_code, reason, url),
        });
    }

    let body = response.text().await.map_err(|e| {
        error!("Failed to read response body from URL {}: {}", url, e);
        AppError::PageFetch(e)
    })?;

    debug!("Response length: {} bytes", body.len());
    Ok(body)
}

/// Fetches a JSON endpoint and deserializes it.
///
/// An empty body is reported as [`AppError::EmptyPage`] rather than a parse error.
pub async fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    let body = fetch_text(client, url).await?;

    if body.trim().is_empty() {
        return Err(AppError::empty_page(url));
    }

    serde_json::from_str(&body).map_err(|e| {
        error!("Failed to parse JSON from {}: {}", url, e);
        let preview: String = body.chars().take(200).collect();
        debug!("Response text (first 200 chars): {preview}");
        AppError::JsonParse(e)
    })
}
