use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::value::RawValue;
use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = "rust-client";

/// `body` is the upstream document exactly as received, already checked to be JSON.
pub struct MediaFeedResult {
    pub body: Box<RawValue>,
    pub status: StatusCode,
}

/// Builds the shared HTTP client used for every upstream call.
pub fn build_client(timeout: Duration) -> Result<Client, BuildClientError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|source| BuildClientError::Build { source })
}

/// `{base_url}/{username}/media`, with `username` percent-encoded as a single path segment.
pub fn user_media_url(base_url: &str, username: &str) -> String {
    format!(
        "{}/{}/media",
        base_url.trim_end_matches('/'),
        urlencoding::encode(username)
    )
}

pub async fn fetch_user_media(
    client: &Client,
    base_url: &str,
    username: &str,
) -> Result<MediaFeedResult, FetchUserMediaError> {
    let url = user_media_url(base_url, username);
    debug!(%url, "fetching user media");

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|source| {
            if source.is_timeout() {
                FetchUserMediaError::Timeout { source }
            } else {
                FetchUserMediaError::RequestSend { source }
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchUserMediaError::UpstreamStatus { status });
    }

    let body = response.text().await.map_err(|source| {
        if source.is_timeout() {
            FetchUserMediaError::Timeout { source }
        } else {
            FetchUserMediaError::ResponseRead { source }
        }
    })?;

    let body = RawValue::from_string(body)
        .map_err(|source| FetchUserMediaError::DeserializeResponseBody { source })?;

    Ok(MediaFeedResult { body, status })
}

#[derive(Debug, Error)]
pub enum BuildClientError {
    #[error("Build: {source}")]
    Build {
        source: reqwest::Error,
    },
}

#[derive(Debug, Error)]
pub enum FetchUserMediaError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("Timeout: {source}")]
    Timeout {
        source: reqwest::Error,
    },

    #[error("UpstreamStatus: {status}")]
    UpstreamStatus {
        status: StatusCode,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },

    #[error("DeserializeResponseBody: {source}")]
    DeserializeResponseBody {
        source: serde_json::Error,
    },
}

impl FetchUserMediaError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchUserMediaError::Timeout { .. })
    }
}
