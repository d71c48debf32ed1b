//! Sheet column mapping
//!
//! Records are written back as one contiguous block of eight cells per
//! row, in [`HEADER`] order, starting at the sheet's `Title` column.

use std::fmt;

use crate::error::{RtError, Result};

/// Column headers, in the order record values are written
pub const HEADER: [&str; 8] = [
    "Title",
    "Movie or TV",
    "Year",
    "Genre",
    "Runtime",
    "Tomatometer",
    "Audience Score",
    "Release Date",
];

/// A tabular store rows are read from and written back to.
pub trait SheetStore {
    /// Values of row 1.
    fn header_row(&self) -> Result<Vec<String>>;

    /// Non-empty values of a 1-based column from `start_row` through
    /// `end_row` (inclusive, or to the last row), paired with their row
    /// numbers.
    fn column_values(
        &self,
        column: usize,
        start_row: usize,
        end_row: Option<usize>,
    ) -> Result<Vec<(usize, String)>>;

    /// Write `values` left to right into an A1 range such as `B12:I12`.
    fn update(&mut self, range: &str, values: &[String]) -> Result<()>;
}

/// Where the record block sits in a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    /// 1-based column of `Title`
    first_column: usize,
}

impl ColumnLayout {
    /// Locate the record block in a header row.
    ///
    /// # Errors
    /// * `RtError::MissingColumn` if any [`HEADER`] name is absent
    /// * `RtError::Sheet` if the columns are not consecutive in [`HEADER`] order
    pub fn from_header<S: AsRef<str>>(header_row: &[S]) -> Result<Self> {
        let position = |name: &str| {
            header_row
                .iter()
                .position(|cell| cell.as_ref().trim() == name)
                .ok_or_else(|| RtError::MissingColumn(name.to_string()))
        };

        let first = position(HEADER[0])?;
        for (offset, name) in HEADER.iter().enumerate().skip(1) {
            let found = position(name)?;
            if found != first + offset {
                return Err(RtError::Sheet(format!(
                    "column {:?} must directly follow {:?}",
                    name,
                    HEADER[offset - 1]
                )));
            }
        }

        Ok(Self {
            first_column: first + 1,
        })
    }

    /// 1-based column of `Title`.
    pub fn first_column(&self) -> usize {
        self.first_column
    }

    /// A1 range covering the record block of `row`.
    ///
    /// # Examples
    /// ```
    /// use rt_core::sheet::ColumnLayout;
    ///
    /// let header = ["URL", "Title", "Movie or TV", "Year", "Genre", "Runtime",
    ///     "Tomatometer", "Audience Score", "Release Date"];
    /// let layout = ColumnLayout::from_header(&header).unwrap();
    /// assert_eq!(layout.range(12), "B12:I12");
    /// ```
    pub fn range(&self, row: usize) -> String {
        let last_column = self.first_column + HEADER.len() - 1;
        format!(
            "{}:{}",
            CellRef::new(self.first_column, row),
            CellRef::new(last_column, row)
        )
    }
}

/// A 1-based cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub column: usize,
    pub row: usize,
}

impl CellRef {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Parse an A1 reference such as `"AB12"` (case-insensitive).
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let split = text.find(|c: char| c.is_ascii_digit())?;
        let (letters, digits) = text.split_at(split);

        if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        let column = letters.chars().try_fold(0usize, |acc, c| {
            let value = (c.to_ascii_uppercase() as u8 - b'A') as usize + 1;
            acc.checked_mul(26)?.checked_add(value)
        })?;
        let row: usize = digits.parse().ok()?;
        if row == 0 {
            return None;
        }

        Some(Self { column, row })
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letter(self.column), self.row)
    }
}

/// Spreadsheet letters for a 1-based column: 1 -> A, 26 -> Z, 27 -> AA.
pub fn column_letter(column: usize) -> String {
    let mut n = column;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Parse an A1 range `"B12:I12"` into its corners. A single cell is a
/// one-cell range.
pub fn parse_range(range: &str) -> Option<(CellRef, CellRef)> {
    match range.split_once(':') {
        Some((start, end)) => {
            let start = CellRef::parse(start)?;
            let end = CellRef::parse(end)?;
            (start.column <= end.column && start.row <= end.row).then_some((start, end))
        }
        None => {
            let cell = CellRef::parse(range)?;
            Some((cell, cell))
        }
    }
}
