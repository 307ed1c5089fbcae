//! Sequential fetch-and-download loop.
//!
//! The [`Runner`] drives the whole run: fetch a page, walk its photos in
//! order, save each image, and either advance to the next page, finish
//! when the target is reached or results are exhausted, or stop on a
//! page-fetch failure. One outstanding HTTP request at a time; images
//! are requested and written in strict page-then-in-page order.
//!
//! Per-image failures are logged and counted but never abort the run.
//! Only a [`FetchError`] on the search endpoint halts pagination, and
//! even then the partial tally is reported.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::config::RunConfig;
use crate::download::{DownloadError, ImageClient, SaveOutcome};
use crate::search::{FetchError, PageOutcome, SearchClient};

/// Counters accumulated over one run.
#[derive(Debug, Default)]
pub struct RunStats {
    downloaded: u64,
    skipped: u64,
    failed: u64,
    pages_fetched: u32,
}

impl RunStats {
    /// Creates a stats tracker with zero counts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of images newly downloaded this run.
    #[must_use]
    pub fn downloaded(&self) -> u64 {
        self.downloaded
    }

    /// Number of photos whose destination file already existed.
    #[must_use]
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Number of per-image download failures (logged, non-fatal).
    #[must_use]
    pub fn failed(&self) -> u64 {
        self.failed
    }

    /// Number of non-empty pages fetched.
    #[must_use]
    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    fn record_downloaded(&mut self) {
        self.downloaded += 1;
    }

    fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    fn record_failed(&mut self) {
        self.failed += 1;
    }

    fn record_page(&mut self) {
        self.pages_fetched += 1;
    }
}

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The configured target count was reached.
    TargetReached,
    /// The API returned no further results before the target was met.
    Exhausted,
    /// A page fetch failed; the run stopped with partial results.
    Aborted(FetchError),
}

impl RunOutcome {
    /// Short human-readable label for the summary line.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::TargetReached => "target reached",
            Self::Exhausted => "results exhausted",
            Self::Aborted(_) => "aborted on page fetch error",
        }
    }
}

/// Final report of a run: counters plus the terminal state.
#[derive(Debug)]
pub struct RunReport {
    /// Accumulated counters.
    pub stats: RunStats,
    /// Terminal state of the loop.
    pub outcome: RunOutcome,
}

/// Drives the pagination/dedup/download loop for one [`RunConfig`].
#[derive(Debug)]
pub struct Runner {
    config: RunConfig,
    search: SearchClient,
    images: ImageClient,
}

impl Runner {
    /// Creates a runner with clients configured from `config`.
    #[must_use]
    pub fn new(config: RunConfig) -> Self {
        let search = SearchClient::with_base_url(config.api_key(), config.api_url());
        let images = ImageClient::new();
        Self {
            config,
            search,
            images,
        }
    }

    /// Runs the loop to completion.
    ///
    /// Always returns a [`RunReport`] once started: target reached,
    /// results exhausted, and fetch-aborted all yield a report with the
    /// tally accumulated so far. The only hard error is failing to
    /// create the output directory before any network activity.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::Io`] if the output directory cannot be
    /// created.
    #[instrument(skip(self), fields(query = %self.config.query(), target = self.config.target()))]
    pub async fn run(&self) -> Result<RunReport, DownloadError> {
        let output_dir = self.config.output_dir();
        tokio::fs::create_dir_all(output_dir)
            .await
            .map_err(|e| DownloadError::io(output_dir, e))?;

        let mut stats = RunStats::new();
        let mut page: u32 = 1;

        let outcome = loop {
            info!(page, "fetching page");

            let search_page = match self
                .search
                .fetch_page(self.config.query(), self.config.per_page(), page)
                .await
            {
                Ok(PageOutcome::Page(search_page)) => search_page,
                Ok(PageOutcome::End) => {
                    info!(page, "no more results");
                    break RunOutcome::Exhausted;
                }
                Err(e) => {
                    warn!(error = %e, page, "page fetch failed, stopping");
                    break RunOutcome::Aborted(e);
                }
            };

            stats.record_page();
            self.process_page(&search_page.photos, &mut stats).await;

            if stats.downloaded() >= self.config.target() {
                break RunOutcome::TargetReached;
            }
            page += 1;
        };

        info!(
            downloaded = stats.downloaded(),
            skipped = stats.skipped(),
            failed = stats.failed(),
            pages = stats.pages_fetched(),
            outcome = outcome.label(),
            "run complete"
        );

        Ok(RunReport { stats, outcome })
    }

    /// Walks one page of photos in order, saving each image.
    ///
    /// Stops as soon as the target is reached; remaining photos on the
    /// page are not processed.
    async fn process_page(&self, photos: &[crate::search::PhotoRecord], stats: &mut RunStats) {
        for photo in photos {
            if stats.downloaded() >= self.config.target() {
                debug!("target reached mid-page, leaving rest of page unprocessed");
                return;
            }

            let destination = destination_for(self.config.output_dir(), photo.id);
            match self.images.save_to_path(&photo.src.original, &destination).await {
                Ok(SaveOutcome::Downloaded { bytes }) => {
                    stats.record_downloaded();
                    debug!(
                        id = photo.id,
                        bytes,
                        downloaded = stats.downloaded(),
                        "downloaded image"
                    );
                }
                Ok(SaveOutcome::Skipped) => {
                    stats.record_skipped();
                    info!(id = photo.id, path = %destination.display(), "already exists, skipping");
                }
                Err(e) => {
                    // Isolated per-image failure: count the miss and move on.
                    stats.record_failed();
                    warn!(id = photo.id, error = %e, "image download failed, continuing");
                }
            }
        }
    }
}

/// Destination path for a photo id: `<output_dir>/<id>.jpg`.
///
/// The id is the single stable input, so a given photo always maps to
/// the same filename across runs.
fn destination_for(output_dir: &Path, id: u64) -> PathBuf {
    output_dir.join(format!("{id}.jpg"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_for_is_stable() {
        let dir = Path::new("/tmp/images");
        assert_eq!(
            destination_for(dir, 2_014_422),
            PathBuf::from("/tmp/images/2014422.jpg")
        );
        assert_eq!(
            destination_for(dir, 2_014_422),
            destination_for(dir, 2_014_422),
            "same id must always map to the same filename"
        );
    }

    #[test]
    fn test_run_stats_counters_start_at_zero() {
        let stats = RunStats::new();
        assert_eq!(stats.downloaded(), 0);
        assert_eq!(stats.skipped(), 0);
        assert_eq!(stats.failed(), 0);
        assert_eq!(stats.pages_fetched(), 0);
    }

    #[test]
    fn test_run_outcome_labels() {
        assert_eq!(RunOutcome::TargetReached.label(), "target reached");
        assert_eq!(RunOutcome::Exhausted.label(), "results exhausted");
        let aborted = RunOutcome::Aborted(FetchError::status("http://x", 1, 500));
        assert!(aborted.label().contains("aborted"));
    }
}
