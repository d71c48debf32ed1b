//! Row sync: scrape every URL in a sheet column and write the records back

use tracing::debug;

use crate::client::Fetch;
use crate::error::Result;
use crate::report::{Reporter, ScrapeEvent};
use crate::scraper::RtScraper;
use crate::sheet::{ColumnLayout, SheetStore};

/// Which rows to sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// 1-based column holding page URLs (default: 17, column Q)
    pub url_column: usize,
    /// First row to sync (default: 2, below the header)
    pub start_row: usize,
    /// Last row to sync, inclusive; `None` runs to the end of the sheet
    pub end_row: Option<usize>,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            url_column: 17,
            start_row: 2,
            end_row: None,
        }
    }
}

/// Outcome counts of a sync run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Drives an [`RtScraper`] over the URL column of a [`SheetStore`].
pub struct SheetSync<'a, F, R> {
    scraper: &'a RtScraper<F>,
    reporter: R,
    options: SyncOptions,
}

impl<'a, F: Fetch, R: Reporter> SheetSync<'a, F, R> {
    pub fn new(scraper: &'a RtScraper<F>, reporter: R, options: SyncOptions) -> Self {
        Self {
            scraper,
            reporter,
            options,
        }
    }

    /// Scrape each URL row and write its record back.
    ///
    /// A row whose page is unrecognized is skipped; a row whose fetch,
    /// extraction or write fails is counted as failed. Neither stops the
    /// run and neither writes anything to that row.
    ///
    /// # Errors
    /// Fails only when the header row or URL column cannot be read, or the
    /// header lacks the record columns.
    pub async fn run<S: SheetStore>(&self, store: &mut S) -> Result<SyncSummary> {
        let layout = ColumnLayout::from_header(&store.header_row()?)?;
        let urls = store.column_values(
            self.options.url_column,
            self.options.start_row,
            self.options.end_row,
        )?;
        debug!(rows = urls.len(), first_column = layout.first_column(), "starting sync");

        let mut summary = SyncSummary::default();

        for (row, url) in urls {
            self.reporter.report(&ScrapeEvent::Started {
                row,
                url: url.clone(),
            });

            let record = match self.scraper.scrape(&url).await {
                Ok(record) => record,
                Err(e) if e.is_skip() => {
                    summary.skipped += 1;
                    self.reporter.report(&ScrapeEvent::Skipped {
                        row,
                        url,
                        reason: e.to_string(),
                    });
                    continue;
                }
                Err(e) => {
                    summary.failed += 1;
                    self.reporter.report(&ScrapeEvent::Failed {
                        row,
                        url,
                        error: e.to_string(),
                    });
                    continue;
                }
            };

            self.reporter.report(&ScrapeEvent::Extracted {
                row,
                url: url.clone(),
                media_type: record.media_type,
            });

            let range = layout.range(row);
            match store.update(&range, &record.values()) {
                Ok(()) => {
                    summary.written += 1;
                    self.reporter.report(&ScrapeEvent::RowWritten { row, range });
                }
                Err(e) => {
                    summary.failed += 1;
                    self.reporter.report(&ScrapeEvent::Failed {
                        row,
                        url,
                        error: e.to_string(),
                    });
                }
            }
        }

        self.reporter.report(&ScrapeEvent::Finished {
            written: summary.written,
            skipped: summary.skipped,
            failed: summary.failed,
        });

        Ok(summary)
    }
}
