//! TV season page parser
//!
//! Season pages use the `rt-text`/`rt-link` component markup. Scores and
//! the air date sit in `rt-text` elements addressed by their `slot`
//! attribute. The premiere year is not on the season page at all; it is
//! read from the show-level page, see [`series_url`].

use chrono::{Datelike, NaiveDate};
use scraper::{Html, Selector};

use crate::error::{RtError, Result};
use crate::types::{MediaRecord, MediaType, OrNotFound, NOT_APPLICABLE};

use super::normalize::{
    format_release_date, join_genres, parse_release_date, percent_to_fraction, select_first,
    text_of,
};

/// Label preceding the date in the air date slot ("Aired Apr 22, 2025").
const AIRED_LABEL: &str = "Aired";

/// Href marker on genre links (`/browse/tv_series_browse/genres:drama`).
const GENRE_LINK_MARKER: &str = "genres:";

/// Derive the show-level URL from a season or episode URL.
///
/// # Examples
/// ```
/// use rt_core::parser::series_url;
///
/// assert_eq!(
///     series_url("https://www.rottentomatoes.com/tv/andor/s02").unwrap(),
///     "https://www.rottentomatoes.com/tv/andor"
/// );
/// assert!(series_url("https://www.rottentomatoes.com/m/inception").is_err());
/// ```
///
/// # Errors
/// `RtError::MalformedSeriesUrl` if the URL has no `/tv/<slug>` segment.
pub fn series_url(url: &str) -> Result<String> {
    let re = regex_lite::Regex::new(r"(https://www\.rottentomatoes\.com/tv/[^/]+)/?")
        .map_err(|_| RtError::MalformedSeriesUrl(url.to_string()))?;

    re.captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| RtError::MalformedSeriesUrl(url.to_string()))
}

/// Read the premiere year from show-level page HTML.
pub fn parse_series_year(series_html: &str) -> Option<String> {
    let document = Html::parse_document(series_html);
    extract_series_year(&document)
}

/// Read the premiere year from an already parsed show-level page.
pub fn extract_series_year(document: &Html) -> Option<String> {
    slot_text(document, "releaseDate")
}

/// Season and show title read from a heading like `"Season 2 – Andor"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonHeading {
    /// "Season 2"
    pub season: String,
    /// "Andor"
    pub title: String,
}

impl SeasonHeading {
    /// Parse a season heading. The separator must be an en dash (U+2013);
    /// a hyphen does not match.
    pub fn parse(text: &str) -> Option<Self> {
        let re = regex_lite::Regex::new(r"Season (\d+) – (.+)").ok()?;
        let caps = re.captures(text)?;

        let title = caps.get(2)?.as_str().trim();
        if title.is_empty() {
            return None;
        }

        Some(Self {
            season: format!("Season {}", caps.get(1)?.as_str()),
            title: title.to_string(),
        })
    }

    /// "Andor (Season 2)"
    pub fn display_title(&self) -> String {
        format!("{} ({})", self.title, self.season)
    }
}

/// Parse a TV season record from the season page and its show-level page.
///
/// Field failures become the `"not found"` sentinel. The year is
/// `"<air year> (<premiere year>)"` when the air date parses, with a missing
/// premiere year written as the sentinel; otherwise it falls back to the
/// premiere year alone.
pub fn parse_tv_season(html: &str, series_html: &str) -> MediaRecord {
    let series_year = parse_series_year(series_html);
    let document = Html::parse_document(html);
    extract_tv_season(&document, series_year)
}

/// Extract a TV season record from an already parsed season page.
pub fn extract_tv_season(document: &Html, series_year: Option<String>) -> MediaRecord {
    let air_date = extract_air_date(document);
    let year = season_year(air_date, series_year);

    MediaRecord {
        title: extract_heading(document)
            .map(|heading| heading.display_title())
            .or_not_found(),
        media_type: MediaType::Television,
        year: year.or_not_found(),
        genre: extract_genres(document).or_not_found(),
        runtime: NOT_APPLICABLE.to_string(),
        critic_score: slot_percent(document, "criticsScore").or_not_found(),
        audience_score: slot_percent(document, "audienceScore").or_not_found(),
        release_date: air_date.map(format_release_date).or_not_found(),
    }
}

/// Combine the air date year with the premiere year.
fn season_year(air_date: Option<NaiveDate>, series_year: Option<String>) -> Option<String> {
    match air_date {
        Some(date) => Some(format!("{} ({})", date.year(), series_year.or_not_found())),
        None => series_year,
    }
}

fn extract_heading(document: &Html) -> Option<SeasonHeading> {
    let h1 = select_first(document, "h1")?;
    let text = h1.text().collect::<String>();
    SeasonHeading::parse(&text)
}

/// Text of every `rt-link` pointing at a genre browse page, in page order.
fn extract_genres(document: &Html) -> Option<String> {
    let selector = Selector::parse("rt-link").ok()?;
    let genres: Vec<String> = document
        .select(&selector)
        .filter(|link| {
            link.value()
                .attr("href")
                .is_some_and(|href| href.contains(GENRE_LINK_MARKER))
        })
        .map(|link| link.text().collect::<String>())
        .collect();

    if genres.is_empty() {
        return None;
    }
    join_genres(genres)
}

fn extract_air_date(document: &Html) -> Option<NaiveDate> {
    let text = slot_text(document, "airDate")?;
    let date_text = text.strip_prefix(AIRED_LABEL).unwrap_or(&text).trim();
    parse_release_date(date_text)
}

fn slot_text(document: &Html, slot: &str) -> Option<String> {
    select_first(document, &format!(r#"rt-text[slot="{}"]"#, slot)).and_then(text_of)
}

fn slot_percent(document: &Html, slot: &str) -> Option<f64> {
    slot_text(document, slot).and_then(|text| percent_to_fraction(&text))
}
