//! HTTP image writer for streaming photo bytes to disk.
//!
//! This module provides functionality for downloading image URLs to a
//! destination path with streaming support, so original-resolution
//! photos never have to fit in memory.
//!
//! # Features
//!
//! - Skip-if-exists: a destination that is already present short-circuits
//!   the network call entirely (idempotent re-runs)
//! - Streaming writes with a scoped file handle closed on every exit path
//! - Partial files removed after a failed stream
//! - Structured error types with full context
//!
//! # Example
//!
//! ```no_run
//! use pexfetch_core::download::ImageClient;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ImageClient::new();
//! let outcome = client
//!     .save_to_path("https://images.example.com/42.jpeg", Path::new("./images/42.jpg"))
//!     .await?;
//! println!("outcome: {outcome:?}");
//! # Ok(())
//! # }
//! ```

mod client;
mod constants;
mod error;

pub use client::{ImageClient, SaveOutcome};
pub use error::DownloadError;
