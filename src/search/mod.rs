//! Search API client - fetches one page of photo metadata per call.
//!
//! The client issues a GET against the search endpoint with the query,
//! page size, and page number, authenticates via the Authorization
//! header, and parses the JSON response into [`PhotoRecord`]s.
//!
//! A page whose `photos` list is missing, empty, or malformed is
//! reported as [`PageOutcome::End`] - the expected end of pagination,
//! not an error. Only transport failures and non-2xx statuses surface
//! as [`FetchError`], which is fatal to the run.

mod client;
mod error;

pub use client::{PageOutcome, PhotoRecord, PhotoSource, SearchClient, SearchPage};
pub use error::FetchError;
