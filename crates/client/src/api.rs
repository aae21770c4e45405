//! REST client for the guide API's attraction endpoints.
//!
//! Wraps `GET /api/attractions` using [`reqwest`]. Query parameters carry
//! the page, the page size, and at most one of `type` / `name` per the
//! filter precedence rule.

use async_trait::async_trait;
use bbsr_core::filter::QuerySelector;
use bbsr_core::source::{AttractionPage, AttractionQuery, AttractionSource, SourceError};

/// HTTP client for a single guide API deployment.
pub struct GuideApi {
    client: reqwest::Client,
    base_url: String,
    /// Stable per-process client id sent with every request, so server
    /// logs can correlate one browse session.
    client_id: String,
}

/// Errors from the guide API layer.
#[derive(Debug, thiserror::Error)]
pub enum GuideApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The guide API returned a non-2xx status code.
    #[error("Guide API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl GuideApi {
    /// Create a new API client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across multiple views).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client,
            base_url,
            client_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Base HTTP URL of the guide API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of attractions.
    ///
    /// Sends `GET /api/attractions?page=&limit=` plus `type=` or `name=`
    /// depending on the query's selector.
    pub async fn list_attractions(
        &self,
        query: &AttractionQuery,
    ) -> Result<AttractionPage, GuideApiError> {
        let response = self
            .client
            .get(format!("{}/api/attractions", self.base_url))
            .header("x-client-id", &self.client_id)
            .query(&query_params(query))
            .send()
            .await?;

        let page: AttractionPage = Self::parse_response(response).await?;

        tracing::debug!(
            page = query.page,
            returned = page.items.len(),
            total = page.total,
            "Fetched attraction page",
        );

        Ok(page)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`GuideApiError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, GuideApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GuideApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GuideApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Query parameters for one attraction page request.
///
/// Always carries `page` and `limit`; the selector contributes at most
/// one of `type` / `name`.
fn query_params(query: &AttractionQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("page", query.page.to_string()),
        ("limit", query.page_size.to_string()),
    ];
    match &query.selector {
        QuerySelector::Category(category) => params.push(("type", category.clone())),
        QuerySelector::Name(name) => params.push(("name", name.clone())),
        QuerySelector::All => {}
    }
    params
}

#[async_trait]
impl AttractionSource for GuideApi {
    async fn fetch_page(&self, query: &AttractionQuery) -> Result<AttractionPage, SourceError> {
        self.list_attractions(query).await.map_err(|e| match e {
            GuideApiError::Request(err) => SourceError::Request(err.to_string()),
            GuideApiError::ApiError { status, body } => SourceError::Api { status, body },
        })
    }
}
