//! Rotten Tomatoes Scraper Core Library
//!
//! Extracts title, type, year, genre, runtime, critic and audience scores
//! and release date from Rotten Tomatoes movie and TV season pages, and
//! writes them back to rows of a sheet.
//!
//! # Features
//! - Dispatch on the page's `og:type` marker
//! - Movie and TV season parsers with a uniform `"not found"` policy
//! - Premiere year lookup from the show-level page for TV seasons
//! - Row sync against any [`SheetStore`] with an injectable [`Reporter`]

pub mod client;
pub mod error;
pub mod parser;
pub mod report;
pub mod scraper;
pub mod sheet;
pub mod sync;
pub mod types;

#[cfg(test)]
mod test_support;

// Re-export main types for convenience
pub use client::{ClientConfig, Fetch, RtClient};
pub use error::{Result, RtError};
pub use report::{NullReporter, Reporter, ScrapeEvent, TracingReporter};
pub use scraper::RtScraper;
pub use sheet::{ColumnLayout, SheetStore, HEADER};
pub use sync::{SheetSync, SyncOptions, SyncSummary};
pub use types::{MediaRecord, MediaType, OrNotFound, Score, NOT_APPLICABLE, NOT_FOUND};
