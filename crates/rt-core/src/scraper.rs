//! Main scraper API
//!
//! Combines a [`Fetch`] implementation with the parsers: fetch the page,
//! dispatch on its `og:type`, and for TV seasons read the premiere year
//! from the show-level page.
//!
//! The show-level page is fetched before the season page is parsed, since
//! the parsed tree is not `Send` and cannot be held across an await. A
//! series URL or fetch error only surfaces once the page is known to be a
//! TV season.

use scraper::Html;
use tracing::debug;

use crate::client::{ClientConfig, Fetch, RtClient};
use crate::error::{RtError, Result};
use crate::parser::{classify, extract_movie, extract_tv_season, parse_series_year, series_url};
use crate::types::{MediaRecord, MediaType};

/// Scraper for Rotten Tomatoes movie and TV season pages
///
/// # Example
/// ```no_run
/// use rt_core::RtScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = RtScraper::new()?;
///
///     let record = scraper.scrape("https://www.rottentomatoes.com/m/inception").await?;
///     println!("{} ({})", record.title, record.year);
///
///     Ok(())
/// }
/// ```
pub struct RtScraper<F = RtClient> {
    fetcher: F,
}

impl RtScraper<RtClient> {
    /// Create a new scraper with the default HTTP client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new scraper with a custom client configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_fetcher(RtClient::with_config(config)?))
    }
}

impl<F: Fetch> RtScraper<F> {
    /// Create a scraper over any page source.
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Scrape one movie or TV season page into a [`MediaRecord`].
    ///
    /// # Returns
    /// * `Ok(MediaRecord)` with every field populated (sentinels fill gaps)
    /// * `Err(RtError::InvalidUrl)` if `url` is empty or whitespace-only
    /// * `Err(RtError::UnrecognizedType)` if the page is neither a movie nor a TV show
    /// * `Err(RtError::MalformedSeriesUrl)` if a TV page URL has no show-level prefix
    /// * `Err(RtError::HttpError | RtError::NotFound)` if either fetch fails
    pub async fn scrape(&self, url: &str) -> Result<MediaRecord> {
        let url = url.trim();
        if url.is_empty() {
            return Err(RtError::InvalidUrl("URL cannot be empty".to_string()));
        }

        debug!(url, "fetching page");
        let html = self.fetcher.fetch(url).await?;

        let series_year = match series_url(url) {
            Ok(series) => {
                debug!(url, series = %series, "fetching series page");
                self.fetcher
                    .fetch(&series)
                    .await
                    .map(|page| parse_series_year(&page))
            }
            Err(e) => Err(e),
        };

        // No await past this point
        let document = Html::parse_document(&html);
        match classify(&document)? {
            MediaType::Movie => Ok(extract_movie(&document)),
            MediaType::Television => Ok(extract_tv_season(&document, series_year?)),
        }
    }
}
