//! CSV file standing in for the remote spreadsheet
//!
//! Row 1 is the header. Cells are addressed with 1-based A1 coordinates
//! like any other [`SheetStore`].

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use rt_core::sheet::{parse_range, SheetStore};
use rt_core::{Result, RtError};

/// In-memory grid loaded from a CSV file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvSheet {
    rows: Vec<Vec<String>>,
}

fn sheet_error(e: impl std::fmt::Display) -> RtError {
    RtError::Sheet(e.to_string())
}

impl CsvSheet {
    /// Load a sheet from a CSV file.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| sheet_error(format!("{}: {}", path.display(), e)))?;
        Self::from_reader(file)
    }

    /// Load a sheet from CSV text. Rows may have differing lengths.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record.map_err(sheet_error)?;
            rows.push(record.iter().map(String::from).collect());
        }

        Ok(Self { rows })
    }

    /// Write the grid back to a CSV file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file =
            File::create(path).map_err(|e| sheet_error(format!("{}: {}", path.display(), e)))?;
        self.write_to(file)
    }

    /// Write the grid as CSV.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(writer);

        for row in &self.rows {
            csv_writer.write_record(row).map_err(sheet_error)?;
        }
        csv_writer.flush().map_err(sheet_error)
    }

    /// Value at a 1-based cell, `None` when outside the grid.
    pub fn cell(&self, column: usize, row: usize) -> Option<&str> {
        self.rows
            .get(row.checked_sub(1)?)?
            .get(column.checked_sub(1)?)
            .map(String::as_str)
    }

    fn set_cell(&mut self, column: usize, row: usize, value: String) {
        if self.rows.len() < row {
            self.rows.resize_with(row, Vec::new);
        }
        let cells = &mut self.rows[row - 1];
        if cells.len() < column {
            cells.resize(column, String::new());
        }
        cells[column - 1] = value;
    }
}

impl SheetStore for CsvSheet {
    fn header_row(&self) -> Result<Vec<String>> {
        self.rows
            .first()
            .cloned()
            .ok_or_else(|| RtError::Sheet("sheet is empty".to_string()))
    }

    fn column_values(
        &self,
        column: usize,
        start_row: usize,
        end_row: Option<usize>,
    ) -> Result<Vec<(usize, String)>> {
        if column == 0 || start_row == 0 {
            return Err(RtError::Sheet(
                "rows and columns are numbered from 1".to_string(),
            ));
        }

        let last_row = end_row.unwrap_or(self.rows.len()).min(self.rows.len());
        Ok((start_row..=last_row)
            .filter_map(|row| {
                let value = self.cell(column, row)?.trim();
                (!value.is_empty()).then(|| (row, value.to_string()))
            })
            .collect())
    }

    fn update(&mut self, range: &str, values: &[String]) -> Result<()> {
        let (start, end) =
            parse_range(range).ok_or_else(|| RtError::Sheet(format!("invalid range {:?}", range)))?;

        let width = end.column - start.column + 1;
        let height = end.row - start.row + 1;
        if values.len() > width * height {
            return Err(RtError::Sheet(format!(
                "{} values do not fit in range {}",
                values.len(),
                range
            )));
        }

        for (i, value) in values.iter().enumerate() {
            self.set_cell(start.column + i % width, start.row + i / width, value.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "\
#,Title,Movie or TV,Year,Genre,Runtime,Tomatometer,Audience Score,Release Date,URL
1,,,,,,,,,https://www.rottentomatoes.com/m/inception
2
3,,,,,,,,,https://www.rottentomatoes.com/tv/andor/s02
";

    fn sheet() -> CsvSheet {
        CsvSheet::from_reader(SHEET.as_bytes()).unwrap()
    }

    #[test]
    fn test_header_row() {
        let header = sheet().header_row().unwrap();
        assert_eq!(header.len(), 10);
        assert_eq!(header[1], "Title");
        assert_eq!(header[9], "URL");
    }

    #[test]
    fn test_empty_sheet_has_no_header() {
        let empty = CsvSheet::from_reader("".as_bytes()).unwrap();
        assert!(matches!(empty.header_row(), Err(RtError::Sheet(_))));
    }

    #[test]
    fn test_column_values_keep_row_numbers() {
        let urls = sheet().column_values(10, 2, None).unwrap();
        assert_eq!(
            urls,
            vec![
                (2, "https://www.rottentomatoes.com/m/inception".to_string()),
                (4, "https://www.rottentomatoes.com/tv/andor/s02".to_string()),
            ]
        );

        let bounded = sheet().column_values(10, 3, Some(3)).unwrap();
        assert!(bounded.is_empty());
        assert!(sheet().column_values(0, 2, None).is_err());
    }

    #[test]
    fn test_update_writes_block_and_grows_short_rows() {
        let mut sheet = sheet();
        let values: Vec<String> = ["Title", "TV", "2025 (2022)"]
            .iter()
            .map(|v| v.to_string())
            .collect();

        sheet.update("B3:D3", &values).unwrap();
        assert_eq!(sheet.cell(1, 3), Some("2"));
        assert_eq!(sheet.cell(2, 3), Some("Title"));
        assert_eq!(sheet.cell(4, 3), Some("2025 (2022)"));

        sheet.update("B7:C7", &values[..2]).unwrap();
        assert_eq!(sheet.cell(3, 7), Some("TV"));
        assert_eq!(sheet.cell(1, 6), None);
    }

    #[test]
    fn test_update_rejects_bad_ranges() {
        let mut sheet = sheet();
        let values = vec!["a".to_string(), "b".to_string()];
        assert!(sheet.update("B2", &values).is_err());
        assert!(sheet.update("nope", &values).is_err());
    }

    #[test]
    fn test_write_to_preserves_content() {
        let mut sheet = sheet();
        sheet
            .update("B2:C2", &["Inception".to_string(), "Movie".to_string()])
            .unwrap();

        let mut out = Vec::new();
        sheet.write_to(&mut out).unwrap();
        let reloaded = CsvSheet::from_reader(out.as_slice()).unwrap();
        assert_eq!(reloaded, sheet);
    }
}
