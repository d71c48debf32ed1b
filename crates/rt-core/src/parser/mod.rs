//! HTML parsers for Rotten Tomatoes pages
//!
//! - `dispatch`: classify a page as movie or TV season
//! - `movie`: parse a movie page
//! - `tv`: parse a TV season page plus its show-level page
//! - `normalize`: locators and value normalizers shared by both

pub mod dispatch;
pub mod movie;
pub mod normalize;
pub mod tv;

// Re-export main parsing functions
pub use dispatch::{classify, detect_media_type};
pub use movie::{extract_movie, parse_movie, InfoLine};
pub use normalize::{is_release_date, percent_to_fraction, reformat_release_date};
pub use tv::{extract_tv_season, parse_series_year, parse_tv_season, series_url, SeasonHeading};
