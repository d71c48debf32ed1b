//! Per-record progress reporting
//!
//! Extraction itself never logs. The sync runner reports what happened to
//! each row through a [`Reporter`], which the caller injects.

use tracing::{error, info, warn};

use crate::types::MediaType;

/// Something that happened while syncing rows
#[derive(Debug, Clone, PartialEq)]
pub enum ScrapeEvent {
    /// Scraping of a row's URL started
    Started { row: usize, url: String },
    /// A record was extracted
    Extracted {
        row: usize,
        url: String,
        media_type: MediaType,
    },
    /// The page was neither a movie nor a TV show; nothing is written
    Skipped {
        row: usize,
        url: String,
        reason: String,
    },
    /// Fetching or extraction failed; nothing is written
    Failed {
        row: usize,
        url: String,
        error: String,
    },
    /// Record values were written to the sheet
    RowWritten { row: usize, range: String },
    /// All rows processed
    Finished {
        written: usize,
        skipped: usize,
        failed: usize,
    },
}

/// Observer for [`ScrapeEvent`]s.
pub trait Reporter {
    fn report(&self, event: &ScrapeEvent);
}

/// Forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, event: &ScrapeEvent) {
        match event {
            ScrapeEvent::Started { row, url } => info!(row, url = %url, "scraping"),
            ScrapeEvent::Extracted {
                row,
                url,
                media_type,
            } => info!(row, url = %url, media_type = %media_type, "extracted record"),
            ScrapeEvent::Skipped { row, url, reason } => {
                warn!(row, url = %url, reason = %reason, "skipping row")
            }
            ScrapeEvent::Failed { row, url, error } => {
                error!(row, url = %url, error = %error, "failed to scrape row")
            }
            ScrapeEvent::RowWritten { row, range } => info!(row, range = %range, "row written"),
            ScrapeEvent::Finished {
                written,
                skipped,
                failed,
            } => info!(written, skipped, failed, "sync finished"),
        }
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _event: &ScrapeEvent) {}
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, event: &ScrapeEvent) {
        (**self).report(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording(Mutex<Vec<ScrapeEvent>>);

    impl Reporter for Recording {
        fn report(&self, event: &ScrapeEvent) {
            self.0.lock().unwrap().push(event.clone());
        }
    }

    fn emit(reporter: impl Reporter) {
        reporter.report(&ScrapeEvent::RowWritten {
            row: 3,
            range: "B3:J3".to_string(),
        });
    }

    #[test]
    fn test_reporter_by_reference() {
        let recording = Recording::default();
        emit(&recording);
        assert_eq!(
            recording.0.lock().unwrap().as_slice(),
            &[ScrapeEvent::RowWritten {
                row: 3,
                range: "B3:J3".to_string()
            }]
        );
    }

    #[test]
    fn test_builtin_reporters_accept_every_event() {
        let events = [
            ScrapeEvent::Started {
                row: 2,
                url: "u".to_string(),
            },
            ScrapeEvent::Skipped {
                row: 2,
                url: "u".to_string(),
                reason: "website".to_string(),
            },
            ScrapeEvent::Finished {
                written: 0,
                skipped: 1,
                failed: 0,
            },
        ];
        for event in &events {
            TracingReporter.report(event);
            NullReporter.report(event);
        }
    }
}
