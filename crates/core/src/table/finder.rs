//! Table reconstruction orchestrators and public entry points.

use tracing::debug;

use super::gap_split::gap_split_table;
use super::grid::{assign, cartesian_product, cell_contents};
use super::regions::{x_regions, y_regions};
use super::types::{
    ColumnSplit, StrategyKind, TableExtraction, TableSettings, TextBox, validate_boxes,
};
use crate::error::Result;

/// A way of turning positioned text boxes into a grid of strings.
pub trait TableStrategy {
    fn extract(&self, boxes: &[TextBox]) -> Result<Vec<Vec<String>>>;
}

/// Rows and columns from merged box projections.
#[derive(Clone, Copy, Debug, Default)]
pub struct RegionStrategy;

impl TableStrategy for RegionStrategy {
    fn extract(&self, boxes: &[TextBox]) -> Result<Vec<Vec<String>>> {
        Ok(to_table(boxes)?.rows)
    }
}

/// Rows by vertical overlap, columns split at the widest horizontal gaps.
#[derive(Clone, Copy, Debug, Default)]
pub struct GapSplitStrategy {
    pub split: ColumnSplit,
}

impl TableStrategy for GapSplitStrategy {
    fn extract(&self, boxes: &[TextBox]) -> Result<Vec<Vec<String>>> {
        gap_split_table(boxes, self.split)
    }
}

/// Reconstruct a table from positioned text boxes.
///
/// Column regions and row regions are computed from the boxes'
/// projections, their cartesian product forms the cells, and each box's
/// content is assigned to the cell containing it. The returned cells keep
/// their coordinates for callers that overlay the grid on the source image.
///
/// Boxes with inverted extents or non-finite coordinates are rejected. An
/// empty slice yields an empty table.
pub fn to_table(boxes: &[TextBox]) -> Result<TableExtraction> {
    validate_boxes(boxes)?;

    let xs = x_regions(boxes);
    let ys = y_regions(boxes);
    debug!(
        boxes = boxes.len(),
        columns = xs.len(),
        rows = ys.len(),
        "regions found"
    );

    let mut cells = cartesian_product(&xs, &ys);
    assign(&mut cells, boxes);
    let rows = cell_contents(&cells);
    Ok(TableExtraction { cells, rows })
}

/// Reconstruct a table with the strategy named in `settings`.
pub fn extract_table(boxes: &[TextBox], settings: &TableSettings) -> Result<Vec<Vec<String>>> {
    match settings.strategy {
        StrategyKind::Regions => RegionStrategy.extract(boxes),
        StrategyKind::GapSplit => GapSplitStrategy {
            split: settings.column_split,
        }
        .extract(boxes),
    }
}
