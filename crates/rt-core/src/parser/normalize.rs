//! Field normalizers shared by the movie and TV parsers
//!
//! Every locator here returns an `Option`; callers turn `None` into the
//! sentinel with [`OrNotFound`](crate::types::OrNotFound). Nothing in this
//! module fails loudly: a missing element, empty text or unparseable value
//! is simply `None`.

use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};

/// Month abbreviations accepted by the release date grammar.
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Output format for release and air dates.
const DATE_FORMAT: &str = "%m/%d/%y";

/// Find the first element matching a CSS selector.
pub fn select_first<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    document.select(&selector).next()
}

/// Trimmed text content of an element, `None` when empty.
pub fn text_of(element: ElementRef<'_>) -> Option<String> {
    let text = element.text().collect::<String>().trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Trimmed attribute value, `None` when absent or empty.
pub fn attr_of(element: ElementRef<'_>, name: &str) -> Option<String> {
    let value = element.value().attr(name)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Convert a percentage such as `"87"` or `"87%"` to a fraction (`0.87`).
///
/// No clamping or rounding is applied.
///
/// # Examples
/// ```
/// use rt_core::parser::percent_to_fraction;
///
/// assert_eq!(percent_to_fraction("87%"), Some(0.87));
/// assert_eq!(percent_to_fraction("0"), Some(0.0));
/// assert_eq!(percent_to_fraction(""), None);
/// assert_eq!(percent_to_fraction("--"), None);
/// ```
pub fn percent_to_fraction(raw: &str) -> Option<f64> {
    let number = raw.trim().trim_matches('%').trim();
    if number.is_empty() {
        return None;
    }
    let value: f64 = number.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value / 100.0)
}

/// Parse a date in the `"Jul 16, 2010"` grammar: abbreviated month, day,
/// comma, four-digit year. Impossible calendar dates are rejected.
pub fn parse_release_date(text: &str) -> Option<NaiveDate> {
    let re = regex_lite::Regex::new(r"^([A-Za-z]{3})\s+(\d{1,2}),\s+(\d{4})$").ok()?;
    let caps = re.captures(text.trim())?;

    let month = MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(&caps[1]))? as u32
        + 1;
    let day: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Whether `text` matches the release date grammar.
pub fn is_release_date(text: &str) -> bool {
    parse_release_date(text).is_some()
}

/// Format a date as `mm/dd/yy`.
pub fn format_release_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// `"Jul 16, 2010"` -> `"07/16/10"`; anything outside the grammar is `None`.
pub fn reformat_release_date(text: &str) -> Option<String> {
    parse_release_date(text).map(format_release_date)
}

/// Trim each genre and join with `", "`, keeping page order and repeats.
/// Blank entries are dropped.
pub fn join_genres<I, S>(genres: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = genres
        .into_iter()
        .map(|g| g.as_ref().trim().to_string())
        .filter(|g| !g.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}
