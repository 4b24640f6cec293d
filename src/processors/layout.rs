//! Positional layout of a measurement sheet.
//!
//! Rows and columns carry meaning by index, never by header text.

use crate::models::Grid;
use crate::utils::constants::{FIRST_EVENT_COLUMN, FIRST_PARAMETER_ROW, SAMPLING_TIME_ROW};
use std::ops::Range;

/// Smallest grid that still holds every fixed header row.
pub const MIN_GRID_ROWS: usize = SAMPLING_TIME_ROW + 1;

/// Columns holding one sampling event each, bounded by the width of row 0.
pub fn event_columns(grid: &Grid) -> Range<usize> {
    FIRST_EVENT_COLUMN..grid.column_count().max(FIRST_EVENT_COLUMN)
}

pub fn parameter_rows(grid: &Grid) -> Range<usize> {
    FIRST_PARAMETER_ROW..grid.row_count().max(FIRST_PARAMETER_ROW)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_on_narrow_grid() {
        let grid = Grid::from_rows(vec![vec!["a", "b"]]);

        assert!(event_columns(&grid).is_empty());
        assert!(parameter_rows(&grid).is_empty());
    }

    #[test]
    fn test_event_columns_follow_first_row() {
        let grid = Grid::from_rows(vec![
            vec!["", "", "", "", "x", "y"],
            vec!["", "", "", "", "x", "y", "z"],
        ]);

        assert_eq!(event_columns(&grid), 4..6);
    }
}
