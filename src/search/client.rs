//! HTTP client for the photo-search endpoint.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use super::error::FetchError;
use crate::user_agent;

/// HTTP connect timeout for search requests (30 seconds).
const CONNECT_TIMEOUT_SECS: u64 = 30;

/// HTTP read timeout for search requests (30 seconds; responses are small JSON).
const READ_TIMEOUT_SECS: u64 = 30;

// ==================== Search API Response Types ====================

/// Top-level search response. Only the `photos` list is consumed;
/// unknown fields (pagination metadata, totals) are ignored.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    photos: Option<Vec<PhotoRecord>>,
}

/// One photo entry from a search results page.
///
/// `id` is the stable identifier used to derive the destination
/// filename; a given id always maps to the same file.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoRecord {
    /// Unique, stable photo identifier.
    pub id: u64,
    /// Source URL variants for the photo.
    pub src: PhotoSource,
}

/// The `src` object of a photo entry. Only the original-resolution
/// variant is downloaded.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoSource {
    /// URL of the original-resolution image.
    pub original: String,
}

/// One bounded batch of search results returned by a single API call.
#[derive(Debug, Clone)]
pub struct SearchPage {
    /// Photos in response order.
    pub photos: Vec<PhotoRecord>,
    /// The page number this batch was fetched as.
    pub page_number: u32,
}

/// Outcome of fetching one page.
///
/// End-of-results is an expected terminal state, not an error, so it is
/// part of the success type rather than [`FetchError`].
#[derive(Debug)]
pub enum PageOutcome {
    /// A non-empty page of photos.
    Page(SearchPage),
    /// The result list was missing, empty, or not in the expected shape:
    /// pagination is exhausted.
    End,
}

// ==================== SearchClient ====================

/// Client for the photo-search API.
///
/// Created once per run and reused across pages, taking advantage of
/// connection pooling. The API key is attached to every request as an
/// Authorization header.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SearchClient {
    /// Creates a client against the production API base URL.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, crate::config::DEFAULT_API_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
            .gzip(true)
            .user_agent(user_agent::default_user_agent())
            .build()
            .expect("failed to build HTTP client with static configuration");

        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetches one page of search results.
    ///
    /// `per_page` must already be within the API limit and `page` must be
    /// at least 1; [`RunConfig`](crate::config::RunConfig) enforces both
    /// before the loop starts.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure, timeout, or a
    /// non-2xx response status. All of these halt pagination. A
    /// response that is 2xx but lacks a non-empty `photos` list yields
    /// `Ok(PageOutcome::End)` instead.
    #[instrument(skip(self), fields(query = %query, page))]
    pub async fn fetch_page(
        &self,
        query: &str,
        per_page: u32,
        page: u32,
    ) -> Result<PageOutcome, FetchError> {
        let url = format!("{}/search", self.base_url);
        let per_page_value = per_page.to_string();
        let page_value = page.to_string();

        debug!(%url, "requesting search page");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", query),
                ("per_page", per_page_value.as_str()),
                ("page", page_value.as_str()),
            ])
            .header(AUTHORIZATION, self.api_key.as_str())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::timeout(&url, page)
                } else {
                    FetchError::network(&url, page, e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(&url, page, status.as_u16()));
        }

        let body = match response.json::<SearchResponse>().await {
            Ok(parsed) => parsed,
            Err(e) => {
                // Contract: any deviation from the expected shape ends
                // pagination rather than aborting the run.
                warn!(error = %e, page, "unexpected search response shape, treating as end of results");
                return Ok(PageOutcome::End);
            }
        };

        match body.photos {
            Some(photos) if !photos.is_empty() => {
                debug!(count = photos.len(), page, "received photo page");
                Ok(PageOutcome::Page(SearchPage {
                    photos,
                    page_number: page,
                }))
            }
            _ => {
                debug!(page, "no photos in response");
                Ok(PageOutcome::End)
            }
        }
    }
}
