//! Pure Exa REST API client.
//!
//! A minimal client for the Exa search API. Supports keyword search with
//! domain restriction and content/highlight retrieval.
//!
//! # Example
//!
//! ```rust,ignore
//! use exa_client::{ExaClient, SearchRequest};
//!
//! let client = ExaClient::new("your-api-key");
//!
//! let response = client
//!     .search(SearchRequest::keyword("fluoride prevents tooth decay").num_results(10))
//!     .await?;
//! for result in &response.results {
//!     println!("{}", result.url.as_deref().unwrap_or("(no url)"));
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{ExaError, Result};
pub use types::{ContentsSpec, HighlightsSpec, SearchRequest, SearchResponse, SearchResult};

use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://api.exa.ai";

/// Exa API client.
#[derive(Clone)]
pub struct ExaClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ExaClient {
    /// Create a new Exa client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from environment variable `EXA_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("EXA_API_KEY")
            .map_err(|_| ExaError::Config("EXA_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (proxies, mock servers in tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Run a search against the Exa `/search` endpoint.
    pub async fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
        let start = std::time::Instant::now();

        let resp = self
            .client
            .post(format!("{}/search", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Exa API error");
            return Err(ExaError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let search_response: SearchResponse = resp
            .json()
            .await
            .map_err(|e| ExaError::Parse(e.to_string()))?;

        debug!(
            query = %request.query,
            count = search_response.results.len(),
            duration_ms = start.elapsed().as_millis(),
            "Exa search completed"
        );

        Ok(search_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = ExaClient::new("exa-test").with_base_url("http://localhost:9999");

        assert_eq!(client.api_key, "exa-test");
        assert_eq!(client.base_url, "http://localhost:9999");
    }
}
