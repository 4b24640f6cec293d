/// Raw text cells of a spreadsheet export, row by row.
///
/// Row 0 decides how many columns are scanned; later rows may be shorter and
/// any cell past the end of a row reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Convenience constructor for literal grids.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map_or("", String::as_str)
    }

    /// Cell content with surrounding whitespace removed.
    pub fn trimmed(&self, row: usize, column: usize) -> &str {
        self.cell(row, column).trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ragged_rows_read_as_empty() {
        let grid = Grid::from_rows(vec![vec!["a", "b", "c"], vec!["d"]]);

        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.column_count(), 3);
        assert_eq!(grid.cell(1, 0), "d");
        assert_eq!(grid.cell(1, 2), "");
        assert_eq!(grid.cell(9, 9), "");
    }

    #[test]
    fn test_trimmed_cell() {
        let grid = Grid::from_rows(vec![vec!["  A1 "]]);
        assert_eq!(grid.trimmed(0, 0), "A1");
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::default();
        assert!(grid.is_empty());
        assert_eq!(grid.column_count(), 0);
    }
}
