//! Movie page parser
//!
//! Parses the legacy movie layout: `h1.title`, a `p.info` line such as
//! `"2010, PG-13, 2h 28m"`, `span.genre`, a `score-board-deprecated`
//! element carrying both scores as attributes, and a `time` element with
//! the release date.

use scraper::Html;

use crate::types::{MediaRecord, MediaType, OrNotFound};

use super::normalize::{
    attr_of, join_genres, percent_to_fraction, reformat_release_date, select_first, text_of,
};

/// Positional layout of the movie info line: `year, rating, runtime`.
///
/// Slots are filled left to right from the comma-separated tokens; a line
/// with fewer tokens leaves the trailing slots empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoLine {
    pub year: Option<String>,
    pub rating: Option<String>,
    pub runtime: Option<String>,
}

impl InfoLine {
    /// Split an info line into its named slots.
    ///
    /// # Examples
    /// ```
    /// use rt_core::parser::InfoLine;
    ///
    /// let info = InfoLine::parse("2010, PG-13, 2h 28m");
    /// assert_eq!(info.year.as_deref(), Some("2010"));
    /// assert_eq!(info.runtime.as_deref(), Some("2h 28m"));
    ///
    /// let short = InfoLine::parse("2010, PG-13");
    /// assert_eq!(short.runtime, None);
    /// ```
    pub fn parse(text: &str) -> Self {
        let mut tokens = text.split(',').map(|t| {
            let t = t.trim();
            (!t.is_empty()).then(|| t.to_string())
        });

        Self {
            year: tokens.next().flatten(),
            rating: tokens.next().flatten(),
            runtime: tokens.next().flatten(),
        }
    }
}

/// Parse a movie record from movie page HTML.
///
/// Never fails: each field that cannot be located or parsed is the
/// `"not found"` sentinel.
pub fn parse_movie(html: &str) -> MediaRecord {
    let document = Html::parse_document(html);
    extract_movie(&document)
}

/// Extract a movie record from an already parsed document.
pub fn extract_movie(document: &Html) -> MediaRecord {
    let info = extract_info(document);

    MediaRecord {
        title: extract_title(document).or_not_found(),
        media_type: MediaType::Movie,
        year: info.year.or_not_found(),
        genre: extract_genre(document).or_not_found(),
        runtime: info.runtime.or_not_found(),
        critic_score: extract_score(document, "tomatometerscore").or_not_found(),
        audience_score: extract_score(document, "audiencescore").or_not_found(),
        release_date: extract_release_date(document).or_not_found(),
    }
}

fn extract_title(document: &Html) -> Option<String> {
    select_first(document, "h1.title").and_then(text_of)
}

fn extract_info(document: &Html) -> InfoLine {
    select_first(document, "p.info")
        .and_then(text_of)
        .map(|text| InfoLine::parse(&text))
        .unwrap_or_default()
}

fn extract_genre(document: &Html) -> Option<String> {
    let text = select_first(document, "span.genre").and_then(text_of)?;
    join_genres(text.split(','))
}

/// Read a 0-100 score attribute off the score board.
fn extract_score(document: &Html, attribute: &str) -> Option<f64> {
    let board = select_first(document, "score-board-deprecated")?;
    let raw = attr_of(board, attribute)?;
    percent_to_fraction(&raw)
}

fn extract_release_date(document: &Html) -> Option<String> {
    let text = select_first(document, "time").and_then(text_of)?;
    reformat_release_date(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Score, NOT_FOUND};

    const INCEPTION: &str = r#"
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

    #[test]
    fn test_parse_movie_full_page() {
        let record = parse_movie(INCEPTION);
        assert_eq!(
            record,
            MediaRecord {
                title: "Inception".to_string(),
                media_type: MediaType::Movie,
                year: "2010".to_string(),
                genre: "Sci-Fi, Action".to_string(),
                runtime: "2h 28m".to_string(),
                critic_score: Score::Fraction(0.87),
                audience_score: Score::Fraction(0.91),
                release_date: "07/16/10".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_movie_empty_page() {
        let record = parse_movie("<html><body></body></html>");
        assert_eq!(record.title, NOT_FOUND);
        assert_eq!(record.media_type, MediaType::Movie);
        assert_eq!(record.year, NOT_FOUND);
        assert_eq!(record.genre, NOT_FOUND);
        assert_eq!(record.runtime, NOT_FOUND);
        assert_eq!(record.critic_score, Score::NotFound);
        assert_eq!(record.audience_score, Score::NotFound);
        assert_eq!(record.release_date, NOT_FOUND);
    }

    #[test]
    fn test_missing_title_affects_only_title() {
        let html = INCEPTION.replace(r#"<h1 class="title">Inception</h1>"#, "");
        let record = parse_movie(&html);
        assert_eq!(record.title, NOT_FOUND);

        let full = parse_movie(INCEPTION);
        assert_eq!(
            MediaRecord {
                title: full.title.clone(),
                ..record
            },
            full
        );
    }

    #[test]
    fn test_missing_element_changes_only_its_field() {
        let full = parse_movie(INCEPTION);

        let cases: [(&str, fn(&mut MediaRecord)); 5] = [
            (r#"<h1 class="title">Inception</h1>"#, |r| {
                r.title = NOT_FOUND.to_string()
            }),
            (r#"<p class="info">2010, R, 2h 28m</p>"#, |r| {
                r.year = NOT_FOUND.to_string();
                r.runtime = NOT_FOUND.to_string();
            }),
            (r#"<span class="genre">Sci-Fi, Action</span>"#, |r| {
                r.genre = NOT_FOUND.to_string()
            }),
            (
                r#"<score-board-deprecated tomatometerscore="87" audiencescore="91"></score-board-deprecated>"#,
                |r| {
                    r.critic_score = Score::NotFound;
                    r.audience_score = Score::NotFound;
                },
            ),
            (r#"<time>Jul 16, 2010</time>"#, |r| {
                r.release_date = NOT_FOUND.to_string()
            }),
        ];

        for (element, expect) in cases {
            assert!(INCEPTION.contains(element), "fixture lacks {}", element);
            let record = parse_movie(&INCEPTION.replace(element, ""));

            let mut expected = full.clone();
            expect(&mut expected);
            assert_eq!(record, expected, "after removing {}", element);
        }
    }

    #[test]
    fn test_missing_score_attribute_changes_only_that_score() {
        let html = INCEPTION.replace(r#" tomatometerscore="87""#, "");
        assert_eq!(
            parse_movie(&html),
            MediaRecord {
                critic_score: Score::NotFound,
                ..parse_movie(INCEPTION)
            }
        );
    }

    #[test]
    fn test_blank_genre_parts_are_dropped() {
        let html = INCEPTION.replace("Sci-Fi, Action", "Drama, ,Comedy");
        assert_eq!(parse_movie(&html).genre, "Drama, Comedy");
    }

    #[test]
    fn test_short_info_line() {
        let html = INCEPTION.replace("2010, R, 2h 28m", "2010, R");
        let record = parse_movie(&html);
        assert_eq!(record.year, "2010");
        assert_eq!(record.runtime, NOT_FOUND);
    }

    #[test]
    fn test_empty_score_attribute_is_not_zero() {
        let html = INCEPTION.replace(r#"audiencescore="91""#, r#"audiencescore="""#);
        let record = parse_movie(&html);
        assert_eq!(record.critic_score, Score::Fraction(0.87));
        assert_eq!(record.audience_score, Score::NotFound);
    }

    #[test]
    fn test_zero_score_is_kept() {
        let html = INCEPTION.replace(r#"tomatometerscore="87""#, r#"tomatometerscore="0""#);
        assert_eq!(parse_movie(&html).critic_score, Score::Fraction(0.0));
    }

    #[test]
    fn test_unparseable_release_date() {
        let html = INCEPTION.replace("Jul 16, 2010", "Coming Soon");
        let record = parse_movie(&html);
        assert_eq!(record.release_date, NOT_FOUND);
        assert_eq!(record.year, "2010");
    }

    #[test]
    fn test_genre_keeps_order_and_repeats() {
        let html = INCEPTION.replace("Sci-Fi, Action", " Drama,Comedy , Drama ");
        assert_eq!(parse_movie(&html).genre, "Drama, Comedy, Drama");
    }

    #[test]
    fn test_info_line_slots() {
        assert_eq!(
            InfoLine::parse("2010, R, 2h 28m"),
            InfoLine {
                year: Some("2010".to_string()),
                rating: Some("R".to_string()),
                runtime: Some("2h 28m".to_string()),
            }
        );
        assert_eq!(InfoLine::parse(""), InfoLine::default());
        assert_eq!(InfoLine::parse("1999").runtime, None);
        assert_eq!(InfoLine::parse("1999, , 1h 30m").rating, None);
    }
}
