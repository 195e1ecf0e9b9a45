//! HTTP client adapter for the share endpoint.
//!
//! The endpoint itself is an external collaborator; this module speaks its
//! wire contract: `POST {base}/presentations` with `{"presentation": [...]}`
//! returns `{"id": "..."}`, and `GET {base}/presentations?id=<id>` returns
//! `{"presentation": [...]}` or a `{"error": "..."}` body on failure.
//! Nothing is retried automatically; the user re-invokes the action.

use crate::ShareId;
use deck_model::Slide;
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by share upload/download calls
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, malformed response body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The id does not resolve: never stored, or past expiry
    #[error("Presentation not found or expired: {0}")]
    NotFound(String),

    /// The endpoint reported a failure of its own
    #[error("Share endpoint error: {0}")]
    Endpoint(String),

    /// The endpoint answered, but with an unusable presentation payload
    #[error("Invalid presentation data received from shared ID")]
    InvalidPayload,
}

#[derive(Debug, Serialize)]
struct UploadRequest<'a> {
    presentation: &'a [Slide],
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct DownloadResponse {
    presentation: Vec<Slide>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Blocking client for the share endpoint
#[derive(Debug)]
pub struct ShareClient {
    client: Client,
    base_url: String,
}

impl ShareClient {
    /// Create a client for the endpoint at `base_url` (scheme + host, with
    /// or without a trailing slash).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(2))
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/presentations", self.base_url)
    }

    /// Upload slides for sharing. Returns the handle to pass around.
    pub fn upload(&self, slides: &[Slide]) -> Result<ShareId, ClientError> {
        debug!(slides = slides.len(), "upload presentation");
        let response = self
            .client
            .post(self.endpoint())
            .json(&UploadRequest {
                presentation: slides,
            })
            .send()?;

        if response.status().is_success() {
            let body: UploadResponse = response.json()?;
            Ok(ShareId::from_string(body.id))
        } else {
            Err(endpoint_error(response))
        }
    }

    /// Download the slides shared under an id.
    pub fn download(&self, id: &str) -> Result<Vec<Slide>, ClientError> {
        debug!(id, "download shared presentation");
        let response = self
            .client
            .get(self.endpoint())
            .query(&[("id", id)])
            .send()?;

        match response.status() {
            status if status.is_success() => {
                let body: DownloadResponse = response.json()?;
                if body.presentation.is_empty() {
                    return Err(ClientError::InvalidPayload);
                }
                Ok(body.presentation)
            }
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(id.to_string())),
            _ => Err(endpoint_error(response)),
        }
    }
}

/// Pull the `{"error": ...}` message out of a failure body, falling back to
/// the status line when the body is not the expected shape.
fn endpoint_error(response: Response) -> ClientError {
    let status = response.status();
    let message = response
        .json::<ErrorResponse>()
        .map(|body| body.error)
        .unwrap_or_else(|_| status.to_string());
    ClientError::Endpoint(message)
}
