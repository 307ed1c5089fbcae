//! Pexfetch Core Library
//!
//! This library provides the core functionality for the pexfetch tool,
//! which paginates through the Pexels photo-search API and saves
//! original-resolution images to a local folder, skipping files that
//! are already present.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`config`] - Run configuration and validation
//! - [`search`] - Search API client returning one page of photo metadata per call
//! - [`download`] - HTTP image writer with streaming support
//! - [`runner`] - Sequential fetch-and-download loop

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod download;
pub mod runner;
pub mod search;

mod user_agent;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::{ConfigError, DEFAULT_PER_PAGE, DEFAULT_TARGET, MAX_PER_PAGE, RunConfig};
pub use download::{DownloadError, ImageClient, SaveOutcome};
pub use runner::{RunOutcome, RunReport, RunStats, Runner};
pub use search::{FetchError, PageOutcome, PhotoRecord, SearchClient, SearchPage};
