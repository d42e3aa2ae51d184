//! Assembly of tables whose cell layout was detected upstream.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::types::IndexedCell;
use crate::error::{Result, TableError};

/// Largest grid, in cells, that indexed assembly will allocate.
pub const MAX_INDEXED_GRID_CELLS: usize = 1 << 20;

/// Build a rectangular grid from 1-based `(row, column)` cells.
///
/// The grid is sized by the largest row and column index and may hold at
/// most [`MAX_INDEXED_GRID_CELLS`] cells. Positions with no cell are empty
/// strings; several cells at one position are joined with spaces in input
/// order.
pub fn assemble_indexed_cells(cells: &[IndexedCell]) -> Result<Vec<Vec<String>>> {
    let mut by_position: FxHashMap<(usize, usize), Vec<&str>> = FxHashMap::default();
    let mut n_rows = 0;
    let mut n_cols = 0;
    for (i, cell) in cells.iter().enumerate() {
        if cell.row == 0 || cell.column == 0 {
            return Err(TableError::invalid_at(
                i,
                format!(
                    "cell indices are 1-based, got row {} column {}",
                    cell.row, cell.column
                ),
            ));
        }
        n_rows = n_rows.max(cell.row);
        n_cols = n_cols.max(cell.column);
        if !n_rows
            .checked_mul(n_cols)
            .is_some_and(|size| size <= MAX_INDEXED_GRID_CELLS)
        {
            return Err(TableError::invalid_at(
                i,
                format!(
                    "row {} column {} exceeds the {MAX_INDEXED_GRID_CELLS}-cell grid limit",
                    cell.row, cell.column
                ),
            ));
        }
        by_position
            .entry((cell.row - 1, cell.column - 1))
            .or_default()
            .push(cell.text.as_str());
    }
    debug!(rows = n_rows, columns = n_cols, cells = cells.len(), "indexed table");

    let mut table = vec![vec![String::new(); n_cols]; n_rows];
    for ((row, col), texts) in by_position {
        table[row][col] = texts.join(" ").trim().to_string();
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: usize, column: usize, text: &str) -> IndexedCell {
        IndexedCell {
            row,
            column,
            text: text.to_string(),
        }
    }

    #[test]
    fn sparse_cells_fill_with_empty_strings() {
        let cells = vec![cell(2, 3, "f"), cell(1, 1, "a"), cell(1, 2, "b")];
        let table = assemble_indexed_cells(&cells).unwrap();
        assert_eq!(table, vec![vec!["a", "b", ""], vec!["", "", "f"]]);
    }

    #[test]
    fn duplicate_positions_are_joined() {
        let cells = vec![cell(1, 1, "Total"), cell(1, 1, "due")];
        assert_eq!(
            assemble_indexed_cells(&cells).unwrap(),
            vec![vec!["Total due"]]
        );
    }

    #[test]
    fn zero_index_is_rejected() {
        let cells = vec![cell(1, 1, "a"), cell(0, 1, "b")];
        match assemble_indexed_cells(&cells) {
            Err(TableError::InvalidInput { index, .. }) => assert_eq!(index, Some(1)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn huge_index_is_rejected() {
        let cells = vec![cell(1, 1, "a"), cell(usize::MAX, 1, "far")];
        match assemble_indexed_cells(&cells) {
            Err(TableError::InvalidInput { index, .. }) => assert_eq!(index, Some(1)),
            other => panic!("unexpected {other:?}"),
        }

        // rows * columns overflows usize
        let cells = vec![cell(usize::MAX, usize::MAX, "a")];
        assert!(matches!(
            assemble_indexed_cells(&cells),
            Err(TableError::InvalidInput { index: Some(0), .. })
        ));
    }

    #[test]
    fn grid_limit_counts_rows_times_columns() {
        let cells = vec![cell(1 << 10, 1, "a"), cell(1, 1 << 11, "b")];
        assert!(matches!(
            assemble_indexed_cells(&cells),
            Err(TableError::InvalidInput { index: Some(1), .. })
        ));

        let cells = vec![cell(1 << 10, 1, "a"), cell(1, 1 << 10, "b")];
        let table = assemble_indexed_cells(&cells).unwrap();
        assert_eq!(table.len(), 1 << 10);
        assert_eq!(table[0].len(), 1 << 10);
        assert_eq!(table[0][1023], "b");
    }

    #[test]
    fn no_cells_no_table() {
        assert!(assemble_indexed_cells(&[]).unwrap().is_empty());
    }
}
