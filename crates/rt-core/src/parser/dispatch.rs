//! Media type dispatch
//!
//! Pages declare what they describe through the Open Graph `og:type` meta
//! tag: `video.movie` for films, `video.tv_show` for TV seasons.

use scraper::Html;

use crate::error::{RtError, Result};
use crate::types::MediaType;

use super::normalize::{attr_of, select_first};

/// Substring marking a movie page.
const MOVIE_MARKER: &str = "movie";

/// Substring marking a TV show page.
const TV_MARKER: &str = "tv_show";

/// Classify a page by its `og:type` marker.
///
/// # Returns
/// * `Ok(MediaType)` when the marker names a movie or a TV show
/// * `Err(RtError::UnrecognizedType)` when the marker is absent or names
///   something else; the record should be skipped
pub fn detect_media_type(html: &str) -> Result<MediaType> {
    let document = Html::parse_document(html);
    classify(&document)
}

/// Classify an already parsed document.
pub fn classify(document: &Html) -> Result<MediaType> {
    let marker = type_marker(document).unwrap_or_default();

    if marker.contains(MOVIE_MARKER) {
        Ok(MediaType::Movie)
    } else if marker.contains(TV_MARKER) {
        Ok(MediaType::Television)
    } else {
        Err(RtError::UnrecognizedType(marker))
    }
}

fn type_marker(document: &Html) -> Option<String> {
    let meta = select_first(document, r#"meta[property="og:type"]"#)?;
    attr_of(meta, "content")
}
