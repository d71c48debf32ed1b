//! Canned pages and a stub fetcher shared by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::client::Fetch;
use crate::error::{RtError, Result};

pub const MOVIE_PAGE: &str = r#"
    <html>
    <head><meta property="og:type" content="video.movie"></head>
    <body>
        <score-board-deprecated tomatometerscore="87" audiencescore="91"></score-board-deprecated>
        <h1 class="title">Inception</h1>
        <p class="info">2010, R, 2h 28m</p>
        <span class="genre">Sci-Fi, Action</span>
        <time>Jul 16, 2010</time>
    </body>
    </html>
"#;

pub const TV_PAGE: &str = r#"
    <html>
    <head><meta property="og:type" content="video.tv_show"></head>
    <body>
        <h1>Season 2 – Andor</h1>
        <rt-link href="/browse/tv_series_browse/genres:sci_fi">Sci-Fi</rt-link>
        <rt-link href="/browse/tv_series_browse/genres:drama">Drama</rt-link>
        <rt-text slot="criticsScore">96%</rt-text>
        <rt-text slot="audienceScore">91%</rt-text>
        <rt-text slot="airDate">Aired Apr 22, 2025</rt-text>
    </body>
    </html>
"#;

pub const SERIES_PAGE: &str = r#"
    <html><body><rt-text slot="releaseDate">2022</rt-text></body></html>
"#;

/// Serves canned pages by URL and records every request.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Fetch for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| RtError::NotFound(url.to_string()))
    }
}
