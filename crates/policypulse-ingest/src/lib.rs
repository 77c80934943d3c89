//! Ingestion clients for the discourse and legislation sources.
//!
//! Network access lives behind the `http` feature; payload parsing and
//! keyword filtering are plain functions so they stay testable offline.

mod error;
pub use error::IngestError;

pub mod govuk;
pub mod reddit;

#[cfg(feature = "http")]
pub use govuk::GovUkClient;
#[cfg(feature = "http")]
pub use reddit::RedditClient;
