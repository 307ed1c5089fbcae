//! Run configuration for a download session.
//!
//! [`RunConfig`] replaces ad-hoc process-wide constants with an explicit,
//! validated struct passed into the [`Runner`](crate::runner::Runner) at
//! construction, so tests can run isolated sessions side by side.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Maximum photos per page accepted by the search API.
pub const MAX_PER_PAGE: u32 = 80;

/// Default photos per page (the API maximum, fewest round-trips).
pub const DEFAULT_PER_PAGE: u32 = 80;

/// Default total image target for a run.
pub const DEFAULT_TARGET: u64 = 10_000;

/// Default base URL of the search API.
pub const DEFAULT_API_URL: &str = "https://api.pexels.com/v1";

/// Errors produced when constructing an invalid [`RunConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The search query is empty or whitespace-only.
    #[error("search query must not be empty")]
    EmptyQuery,

    /// The API key is blank or contains characters that cannot be sent
    /// in an HTTP header.
    #[error("API key is blank or contains invalid characters")]
    InvalidApiKey,

    /// Per-page size outside the accepted range.
    #[error("per_page value {value} is out of range (1-{MAX_PER_PAGE})")]
    InvalidPerPage {
        /// The rejected value.
        value: u32,
    },

    /// A target of zero images would make the run a no-op.
    #[error("target image count must be at least 1")]
    ZeroTarget,
}

/// Validated configuration for one download run.
///
/// Construct with [`RunConfig::new`] and refine with the `with_*`
/// builders; every mutation re-validates so a held `RunConfig` is
/// always internally consistent.
#[derive(Debug, Clone)]
pub struct RunConfig {
    api_key: String,
    api_url: String,
    query: String,
    per_page: u32,
    target: u64,
    output_dir: PathBuf,
}

impl RunConfig {
    /// Creates a configuration with default page size, target, and API URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the query is empty or the API key is
    /// blank or contains header-invalid control characters.
    pub fn new(
        api_key: impl Into<String>,
        query: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        let query = query.into();

        if query.trim().is_empty() {
            return Err(ConfigError::EmptyQuery);
        }
        // The key is sent verbatim as an Authorization header value; reject
        // anything a header cannot carry.
        if api_key.trim().is_empty() || api_key.chars().any(|c| c.is_ascii_control()) {
            return Err(ConfigError::InvalidApiKey);
        }

        Ok(Self {
            api_key,
            api_url: DEFAULT_API_URL.to_string(),
            query,
            per_page: DEFAULT_PER_PAGE,
            target: DEFAULT_TARGET,
            output_dir: output_dir.into(),
        })
    }

    /// Sets the photos-per-page size (1 to [`MAX_PER_PAGE`]).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPerPage`] when out of range.
    pub fn with_per_page(mut self, per_page: u32) -> Result<Self, ConfigError> {
        if !(1..=MAX_PER_PAGE).contains(&per_page) {
            return Err(ConfigError::InvalidPerPage { value: per_page });
        }
        self.per_page = per_page;
        Ok(self)
    }

    /// Sets the total image target for the run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroTarget`] for a target of zero.
    pub fn with_target(mut self, target: u64) -> Result<Self, ConfigError> {
        if target == 0 {
            return Err(ConfigError::ZeroTarget);
        }
        self.target = target;
        Ok(self)
    }

    /// Overrides the search API base URL (used by tests with wiremock).
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// The API credential sent in the Authorization header.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Base URL of the search API.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// The search query term.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Photos requested per page.
    #[must_use]
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Total number of images the run aims to download before stopping.
    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Directory downloaded images are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
