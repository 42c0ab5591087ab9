pub mod config;
pub mod health;
pub mod install;
pub mod log;
pub mod pending;
pub mod request;

use anyhow::{bail, Context, Result};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Read-only service routes answer immediately; no need for the hook's long wait.
pub const SERVICE_QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// GET a JSON document from the approval service.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let response = get(url).await?;
    read_json(url, response).await
}

/// Like [`fetch_json`], but a 404 is `Ok(None)` rather than an error.
pub async fn fetch_json_if_found<T: DeserializeOwned>(url: &str) -> Result<Option<T>> {
    let response = get(url).await?;
    if response.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    read_json(url, response).await.map(Some)
}

async fn get(url: &str) -> Result<Response> {
    let client = reqwest::Client::builder()
        .timeout(SERVICE_QUERY_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to reach approval service at {}", url))
}

async fn read_json<T: DeserializeOwned>(url: &str, response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        bail!("Approval service returned {} for {}", status, url);
    }

    response
        .json::<T>()
        .await
        .with_context(|| format!("Unexpected response body from {}", url))
}
