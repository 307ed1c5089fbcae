//! HTTP client wrapper for saving images to disk.
//!
//! This module provides the `ImageClient` struct which handles streaming
//! downloads to a fixed destination path with proper timeout
//! configuration and error handling.

use std::path::Path;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, instrument};
use url::Url;

use super::constants::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};
use super::error::DownloadError;
use crate::user_agent;

/// Result of one [`ImageClient::save_to_path`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The image was fetched and written to the destination.
    Downloaded {
        /// Number of body bytes written.
        bytes: u64,
    },
    /// The destination file already existed; no network call was made.
    Skipped,
}

/// HTTP client for saving images with streaming support.
///
/// This client is designed to be created once and reused for multiple
/// images, taking advantage of connection pooling.
#[derive(Debug, Clone)]
pub struct ImageClient {
    client: Client,
}

impl Default for ImageClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageClient {
    /// Creates a new image client with default timeouts.
    ///
    /// Default configuration:
    /// - Connect timeout: 30 seconds
    /// - Read timeout: 5 minutes (for original-resolution images)
    /// - Gzip decompression: enabled
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn new() -> Self {
        Self::new_with_timeouts(CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS)
    }

    /// Creates a new image client with explicit timeout values.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the supplied
    /// timeout configuration.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new_with_timeouts(connect_timeout_secs: u64, read_timeout_secs: u64) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .timeout(Duration::from_secs(read_timeout_secs))
            .gzip(true)
            .user_agent(user_agent::default_user_agent())
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self { client }
    }

    /// Saves the image at `url` to `destination`, skipping the network
    /// call entirely when the destination file already exists.
    ///
    /// The file handle is scoped to this call and closed on every exit
    /// path; a partial file left by a failed stream is removed so a
    /// later re-run does not mistake it for a completed download.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError` if:
    /// - The URL is invalid
    /// - The request fails (network error, timeout)
    /// - The server returns an error status (4xx, 5xx)
    /// - Writing to disk fails
    #[must_use = "outcome distinguishes a fresh download from a skip"]
    #[instrument(skip(self), fields(url = %url, destination = %destination.display()))]
    pub async fn save_to_path(
        &self,
        url: &str,
        destination: &Path,
    ) -> Result<SaveOutcome, DownloadError> {
        // Idempotence check: filename presence alone marks the photo as
        // already satisfied.
        if tokio::fs::try_exists(destination)
            .await
            .map_err(|e| DownloadError::io(destination, e))?
        {
            debug!("destination exists, skipping download");
            return Ok(SaveOutcome::Skipped);
        }

        Url::parse(url).map_err(|_| DownloadError::invalid_url(url))?;

        debug!("starting download");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                DownloadError::timeout(url)
            } else {
                DownloadError::network(url, e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::http_status(url, status.as_u16()));
        }

        let mut file = File::create(destination)
            .await
            .map_err(|e| DownloadError::io(destination, e))?;

        // Stream response body to file, with cleanup on error
        let stream_result = stream_to_file(&mut file, response, url, destination).await;
        drop(file);

        if stream_result.is_err() {
            debug!("cleaning up partial file after error");
            let _ = tokio::fs::remove_file(destination).await;
        }

        let bytes = stream_result?;

        info!(bytes, "image saved");
        Ok(SaveOutcome::Downloaded { bytes })
    }
}

/// Streams response body to file, returning bytes written.
///
/// This is extracted to enable cleanup on error in the caller.
async fn stream_to_file(
    file: &mut File,
    response: reqwest::Response,
    url: &str,
    destination: &Path,
) -> Result<u64, DownloadError> {
    let mut writer = BufWriter::new(file);
    let mut stream = response.bytes_stream();
    let mut bytes_written: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|e| DownloadError::network(url, e))?;

        writer
            .write_all(&chunk)
            .await
            .map_err(|e| DownloadError::io(destination.to_path_buf(), e))?;

        bytes_written += chunk.len() as u64;
    }

    // Ensure all data is flushed to disk
    writer
        .flush()
        .await
        .map_err(|e| DownloadError::io(destination.to_path_buf(), e))?;

    Ok(bytes_written)
}
