//! Grid synthesis and content assignment.
//!
//! The grid is the cartesian product of row and column regions. Content is
//! then assigned by locating, for every source box, the single cell that
//! fully contains it.

use tracing::trace;

use super::order::{sort_by_reading, top_left_order};
use super::types::{Region, TextBox};

/// Build an empty `rows x cols` grid from column and row regions.
///
/// Cell `[i][j]` spans `x_regions[j]` horizontally and `y_regions[i]`
/// vertically. Either list being empty yields zero rows or zero columns.
pub fn cartesian_product(x_regions: &[Region], y_regions: &[Region]) -> Vec<Vec<TextBox>> {
    y_regions
        .iter()
        .map(|y| x_regions.iter().map(|x| TextBox::cell(*x, *y)).collect())
        .collect()
}

/// Index of the band whose high edge is the first at or past `low`.
///
/// `bands` must be sorted and disjoint, which makes it the only band that
/// can contain an interval starting at `low`.
fn band_index(bands: &[Region], low: f64) -> Option<usize> {
    let idx = bands.partition_point(|band| band.high < low);
    (idx < bands.len()).then_some(idx)
}

fn append_content(cell: &mut TextBox, text: &str) {
    let joined = format!("{} {}", cell.content, text);
    cell.content = joined.trim_matches(' ').to_string();
}

/// Fill `cells` with the content of the boxes they contain.
///
/// `cells` must be laid out as [`cartesian_product`] produces them: columns
/// ascending and disjoint along X, rows ascending and disjoint along Y.
/// Each box is located once by binary search. Words sharing a cell are
/// joined in reading order with single spaces. A box that is not fully
/// inside any cell is dropped.
pub fn assign(cells: &mut [Vec<TextBox>], boxes: &[TextBox]) {
    let Some(first_row) = cells.first() else {
        return;
    };
    let columns: Vec<Region> = first_row
        .iter()
        .map(|c| Region::new(c.x_left, c.x_right))
        .collect();
    let rows: Vec<Region> = cells
        .iter()
        .filter_map(|row| row.first())
        .map(|c| Region::new(c.y_top, c.y_bottom))
        .collect();
    if columns.is_empty() {
        return;
    }

    let n_cols = columns.len();
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); rows.len() * n_cols];
    for i in top_left_order(boxes) {
        let b = &boxes[i];
        let position = band_index(&rows, b.y_top).zip(band_index(&columns, b.x_left));
        match position {
            Some((row, col)) if b.inside(&cells[row][col]) => {
                members[row * n_cols + col].push(i);
            }
            _ => trace!(content = %b.content, "box is not inside any cell; dropped"),
        }
    }

    for (k, indices) in members.iter_mut().enumerate() {
        sort_by_reading(indices, boxes);
        let cell = &mut cells[k / n_cols][k % n_cols];
        for &i in indices.iter() {
            append_content(cell, &boxes[i].content);
        }
    }
}

/// Project a cell grid onto its contents.
pub fn cell_contents(cells: &[Vec<TextBox>]) -> Vec<Vec<String>> {
    cells
        .iter()
        .map(|row| row.iter().map(|c| c.content.clone()).collect())
        .collect()
}
