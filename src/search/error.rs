//! Error types for page fetching.
//!
//! Any [`FetchError`] halts pagination: the loop reports its partial
//! tally and stops. End-of-results is deliberately NOT represented
//! here - it is a normal outcome, modeled by
//! [`PageOutcome::End`](super::PageOutcome).

use thiserror::Error;

/// Errors that can occur while fetching a search results page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error fetching page {page} from {url}: {source}")]
    Network {
        /// The search URL that failed.
        url: String,
        /// The page number being fetched.
        page: u32,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout fetching page {page} from {url}")]
    Timeout {
        /// The search URL that timed out.
        url: String,
        /// The page number being fetched.
        page: u32,
    },

    /// The API returned a non-success status (bad key, rate limit, outage).
    #[error("HTTP {status} fetching page {page} from {url}")]
    Status {
        /// The search URL that returned the error status.
        url: String,
        /// The page number being fetched.
        page: u32,
        /// The HTTP status code.
        status: u16,
    },
}

impl FetchError {
    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, page: u32, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            page,
            source,
        }
    }

    /// Creates a timeout error.
    pub fn timeout(url: impl Into<String>, page: u32) -> Self {
        Self::Timeout {
            url: url.into(),
            page,
        }
    }

    /// Creates an HTTP status error.
    pub fn status(url: impl Into<String>, page: u32, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            page,
            status,
        }
    }
}

// Note on From trait implementations:
// We intentionally do NOT implement `From<reqwest::Error>` because the
// variants require context (url, page) that the source error does not
// provide. The helper constructors are the pattern used throughout.
