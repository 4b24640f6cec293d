use crate::error::{ProcessingError, Result};
use crate::models::Grid;
use crate::readers::text::read_source_text;
use crate::utils::constants::DEFAULT_DELIMITER;
use std::path::Path;
use tracing::debug;

/// Loads a measurement sheet export into a [`Grid`] without interpreting it.
pub struct GridReader {
    delimiter: u8,
}

impl GridReader {
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn read_grid(&self, path: &Path) -> Result<Grid> {
        let text = read_source_text(path)?;
        let grid = self.parse_grid(&text)?;

        if grid.is_empty() {
            return Err(ProcessingError::EmptyFile {
                path: path.to_path_buf(),
            });
        }

        debug!(
            "Loaded {}x{} grid from {}",
            grid.row_count(),
            grid.column_count(),
            path.display()
        );
        Ok(grid)
    }

    /// Parse delimited text, one grid row per record.
    pub fn parse_grid(&self, text: &str) -> Result<Grid> {
        let text = self.keep_blank_rows(text);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(text.as_bytes());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Grid::new(rows))
    }

    /// The csv parser drops blank lines, but rows are positional here: turn
    /// each blank line outside a quoted field into a row of empty cells.
    fn keep_blank_rows(&self, text: &str) -> String {
        let delimiter = char::from(self.delimiter);
        let mut in_quotes = false;
        let mut out = String::with_capacity(text.len());

        for line in text.lines() {
            if !in_quotes && line.trim().is_empty() {
                out.push(delimiter);
            } else {
                out.push_str(line);
            }
            out.push('\n');

            if line.matches('"').count() % 2 == 1 {
                in_quotes = !in_quotes;
            }
        }

        out
    }
}

impl Default for GridReader {
    fn default() -> Self {
        Self::new()
    }
}
