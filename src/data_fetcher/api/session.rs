//! One HTTP session shared by every page load of a run

use reqwest::Client;
use serde::de::DeserializeOwned;

use super::fetch_utils::{fetch_json, fetch_text};
use super::http_client::create_http_client_with_timeout;
use super::urls::resolve_url;
use crate::config::Config;
use crate::error::AppError;

/// A client bound to the site's base URL. Page loads go through it one at a time.
#[derive(Debug, Clone)]
pub struct PageSession {
    client: Client,
    base_url: String,
}

impl PageSession {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::with_client(client, &config.base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Loads a page by absolute URL or site-relative path.
    pub async fn get_page(&self, url_or_path: &str) -> Result<String, AppError> {
        let url = resolve_url(&self.base_url, url_or_path)?;
        fetch_text(&self.client, &url).await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url_or_path: &str) -> Result<T, AppError> {
        let url = resolve_url(&self.base_url, url_or_path)?;
        fetch_json(&self.client, &url).await
    }
}
