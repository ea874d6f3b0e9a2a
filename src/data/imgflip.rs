//! imgflip meme listing API client
//!
//! Fetches the list of popular meme templates and unwraps it from the
//! `{success, data: {memes: [...]}}` envelope the API responds with.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::MemeRecord;

/// Default endpoint for the meme template listing
pub const DEFAULT_ENDPOINT: &str = "https://api.imgflip.com/get_memes";

/// Errors that can occur when fetching the meme list
#[derive(Debug, Error)]
pub enum MemeApiError {
    /// The server answered with a non-success HTTP status
    #[error("API responded with HTTP status {0}")]
    Status(u16),

    /// The request could not be sent or the body could not be read
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The body is not the expected JSON envelope
    #[error("Failed to parse API response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level response envelope
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<EnvelopeData>,
    /// Present on failed requests
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeData {
    #[serde(default)]
    memes: Option<Vec<MemeRecord>>,
}

/// Client for the meme template listing API
#[derive(Debug, Clone)]
pub struct MemeClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Listing endpoint (overridable for testing and mirrors)
    endpoint: String,
}

impl Default for MemeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MemeClient {
    /// Creates a client for the default imgflip endpoint
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Creates a client for a custom endpoint
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Returns the endpoint this client requests
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches the meme template list
    ///
    /// # Returns
    /// * `Ok(Some(memes))` - The `memes` array from the envelope
    /// * `Ok(None)` - The body was valid JSON but had no `data.memes`
    /// * `Err(MemeApiError)` - Transport failure, non-success status or malformed body
    pub async fn fetch_meme_list(&self) -> Result<Option<Vec<MemeRecord>>, MemeApiError> {
        match self.request_meme_list().await {
            Ok(memes) => Ok(memes),
            Err(e) => {
                error!(endpoint = %self.endpoint, error = %e, "Failed to fetch meme list");
                Err(e)
            }
        }
    }

    async fn request_meme_list(&self) -> Result<Option<Vec<MemeRecord>>, MemeApiError> {
        info!(endpoint = %self.endpoint, "Fetching meme list");

        let response = self.http_client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MemeApiError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let memes = parse_envelope(&text)?;

        match &memes {
            Some(list) => debug!(count = list.len(), "Meme list received"),
            None => warn!("Response envelope has no data.memes"),
        }

        Ok(memes)
    }
}

/// Unwraps the meme array from a response body
fn parse_envelope(body: &str) -> Result<Option<Vec<MemeRecord>>, serde_json::Error> {
    let envelope: Envelope = serde_json::from_str(body)?;

    if !envelope.success {
        warn!(
            error_message = envelope.error_message.as_deref().unwrap_or("none"),
            "API reported success=false"
        );
    }

    Ok(envelope.data.and_then(|data| data.memes))
}
