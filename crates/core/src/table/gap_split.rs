//! Gap-split heuristic for tables without region structure.
//!
//! Rows come from grouping words by vertical overlap. Column boundaries are
//! placed at the midpoints of the widest horizontal gaps between word
//! projections across the whole page.

use std::cmp::Reverse;

use itertools::Itertools;
use tracing::{debug, trace};

use super::order::group_lines;
use super::types::{ColumnSplit, Region, TextBox, key_f64, validate_boxes};
use crate::error::{Result, TableError};

/// Partition boxes into rows, each row in reading order.
pub fn partition_into_rows(boxes: &[TextBox]) -> Vec<Vec<TextBox>> {
    group_lines(boxes)
}

/// Horizontal gaps between box projections, widest first.
///
/// Boxes are swept by `x_left` while tracking the rightmost edge seen so
/// far; a box starting strictly right of it opens a gap.
pub fn find_gaps(boxes: &[TextBox]) -> Vec<Region> {
    let mut spans: Vec<Region> = boxes
        .iter()
        .map(|b| Region::new(b.x_left, b.x_right))
        .collect();
    spans.sort_by_key(|r| key_f64(r.low));

    let mut gaps = Vec::new();
    let mut reach: Option<f64> = None;
    for span in spans {
        if let Some(right) = reach
            && span.low > right
        {
            gaps.push(Region::new(right, span.low));
        }
        reach = Some(reach.map_or(span.high, |r| r.max(span.high)));
    }

    gaps.sort_by_key(|g| (Reverse(key_f64(g.width())), key_f64(g.low)));
    gaps
}

/// Column split points chosen from `gaps` (widest first), ascending.
pub fn split_points(gaps: &[Region], policy: ColumnSplit) -> Result<Vec<f64>> {
    let selected: Vec<&Region> = match policy {
        ColumnSplit::Count(0) => {
            return Err(TableError::invalid("column count must be at least 1"));
        }
        ColumnSplit::Count(n) => gaps.iter().take(n - 1).collect(),
        ColumnSplit::MinGap(width) if !(width.is_finite() && width >= 0.0) => {
            return Err(TableError::invalid(format!(
                "minimum gap must be a non-negative number, got {width}"
            )));
        }
        ColumnSplit::MinGap(width) => gaps.iter().filter(|g| g.width() >= width).collect(),
    };
    let splits: Vec<f64> = selected
        .into_iter()
        .map(Region::midpoint)
        .sorted_by_key(|x| key_f64(*x))
        .collect();
    Ok(splits)
}

/// Distribute a row's boxes into `splits.len() + 1` columns.
///
/// A box lands in the column equal to the number of split points strictly
/// left of its `x_left`.
pub fn split_row(row: &[TextBox], splits: &[f64]) -> Vec<Vec<TextBox>> {
    let mut columns: Vec<Vec<TextBox>> = vec![Vec::new(); splits.len() + 1];
    let ordered = row.iter().sorted_by_key(|b| key_f64(b.x_left));
    for b in ordered {
        let col = splits.partition_point(|s| *s < b.x_left);
        columns[col].push(b.clone());
    }
    columns
}

/// Reconstruct a table by splitting rows at the widest horizontal gaps.
pub fn gap_split_table(boxes: &[TextBox], policy: ColumnSplit) -> Result<Vec<Vec<String>>> {
    validate_boxes(boxes)?;
    let gaps = find_gaps(boxes);
    let splits = split_points(&gaps, policy)?;
    trace!(?splits, "column split points");

    let rows = partition_into_rows(boxes);
    debug!(
        rows = rows.len(),
        columns = splits.len() + 1,
        gaps = gaps.len(),
        "gap-split table"
    );

    let table: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            split_row(row, &splits)
                .iter()
                .map(|cell| {
                    cell.iter()
                        .map(|b| b.content.as_str())
                        .join(" ")
                        .trim()
                        .to_string()
                })
                .collect()
        })
        .collect();
    Ok(table)
}
