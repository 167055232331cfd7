// ABOUTME: Main library entry point for the magpie prompt-driven page extractor.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, Options, ScrapeReport, ScrapeError, extract.

//! Magpie - extract data fields from web pages based on a free-text prompt.
//!
//! The heart of the crate is a small extraction policy engine: given a parsed
//! page and a request like "extract names and emails", it picks the matching
//! extraction strategies (heading scan, email/phone/address pattern matching),
//! runs them in a fixed order, and returns a bounded list of rows, falling
//! back to paragraph collection when nothing else applies. The [`Client`]
//! wraps that engine with page fetching and report assembly.
//!
//! # Example
//!
//! ```no_run
//! use magpie_engine::{Client, ScrapeError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ScrapeError> {
//!     let client = Client::builder().build();
//!     let report = client
//!         .scrape("https://example.com/team", "extract names and emails")
//!         .await?;
//!     for row in &report.rows {
//!         println!("{}", row);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod document;
pub mod error;
pub mod extract;
pub mod formats;
pub mod options;
pub mod report;
pub mod resource;

pub use crate::client::Client;
pub use crate::document::{HtmlDocument, PageDocument, TagKind};
pub use crate::error::{ErrorCode, ScrapeError};
pub use crate::extract::patterns::{PatternSet, STANDARD_PATTERNS};
pub use crate::extract::policy::{extract, MAX_RESULTS};
pub use crate::options::{ClientBuilder, Options};
pub use crate::report::ScrapeReport;
