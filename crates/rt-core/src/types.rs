//! Data types for the RT scraper
//!
//! [`MediaRecord`] is the single output of extraction. Every field is always
//! populated; a value that could not be located or parsed is carried as the
//! [`NOT_FOUND`] sentinel so a fixed column layout can always be filled.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Placeholder written for any field that could not be located or parsed
pub const NOT_FOUND: &str = "not found";

/// Runtime placeholder for television records
pub const NOT_APPLICABLE: &str = "N/A";

/// Kind of page a record was extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    /// Feature film page (`/m/<slug>`)
    Movie,
    /// Television season page (`/tv/<slug>/s<NN>`)
    Television,
}

impl MediaType {
    /// Label written to the "Movie or TV" sheet column.
    pub fn label(&self) -> &'static str {
        match self {
            MediaType::Movie => "Movie",
            MediaType::Television => "TV",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A critic or audience score as a fraction in `[0, 1]`, or the sentinel.
///
/// Zero is a real score; `NotFound` is distinct from `Fraction(0.0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    Fraction(f64),
    NotFound,
}

impl Score {
    /// The fraction, if one was extracted.
    pub fn fraction(&self) -> Option<f64> {
        match self {
            Score::Fraction(value) => Some(*value),
            Score::NotFound => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Score::NotFound)
    }
}

impl From<Option<f64>> for Score {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Score::NotFound, Score::Fraction)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Fraction(value) => write!(f, "{}", value),
            Score::NotFound => f.write_str(NOT_FOUND),
        }
    }
}

/// Serializes as a JSON number, or the sentinel string when missing
impl Serialize for Score {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Score::Fraction(value) => serializer.serialize_f64(*value),
            Score::NotFound => serializer.serialize_str(NOT_FOUND),
        }
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(Score::Fraction(value)),
            Raw::Text(text) if text == NOT_FOUND => Ok(Score::NotFound),
            Raw::Text(text) => Err(serde::de::Error::custom(format!(
                "expected a number or {:?}, got {:?}",
                NOT_FOUND, text
            ))),
        }
    }
}

/// Uniform "unwrap-or-sentinel" step applied to every field locator result.
pub trait OrNotFound {
    type Output;

    fn or_not_found(self) -> Self::Output;
}

impl OrNotFound for Option<String> {
    type Output = String;

    fn or_not_found(self) -> String {
        self.unwrap_or_else(|| NOT_FOUND.to_string())
    }
}

impl OrNotFound for Option<f64> {
    type Output = Score;

    fn or_not_found(self) -> Score {
        Score::from(self)
    }
}

/// Metadata extracted from one movie or television season page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    /// Display title; TV titles carry the season, e.g. "Andor (Season 2)"
    pub title: String,
    pub media_type: MediaType,
    /// "2010" for movies, "2025 (2022)" (air year, premiere year) for TV
    pub year: String,
    /// Comma-joined genres in page order
    pub genre: String,
    /// Runtime as shown on the page ("2h 28m"); "N/A" for TV
    pub runtime: String,
    pub critic_score: Score,
    pub audience_score: Score,
    /// `mm/dd/yy`
    pub release_date: String,
}

impl MediaRecord {
    /// Field values in [`HEADER`](crate::sheet::HEADER) order.
    pub fn values(&self) -> [String; 8] {
        [
            self.title.clone(),
            self.media_type.label().to_string(),
            self.year.clone(),
            self.genre.clone(),
            self.runtime.clone(),
            self.critic_score.to_string(),
            self.audience_score.to_string(),
            self.release_date.clone(),
        ]
    }
}
