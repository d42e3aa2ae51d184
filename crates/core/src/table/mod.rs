//! Table reconstruction from OCR text boxes.
//!
//! This module infers row and column boundaries purely from the positions
//! of detected words, builds the cell grid and assigns each word's text to
//! its cell. A simpler gap-split heuristic and an assembler for
//! service-detected cells are provided alongside.

mod finder;
mod gap_split;
mod grid;
mod indexed;
mod order;
mod regions;
mod types;

// Re-export public types
pub use types::{
    Axis, ColumnSplit, IndexedCell, Region, StrategyKind, TableExtraction, TableSettings, TextBox,
};

// Re-export public API functions
pub use finder::{GapSplitStrategy, RegionStrategy, TableStrategy, extract_table, to_table};
pub use gap_split::{find_gaps, gap_split_table, partition_into_rows, split_points, split_row};
pub use grid::{assign, cartesian_product, cell_contents};
pub use indexed::{MAX_INDEXED_GRID_CELLS, assemble_indexed_cells};
pub use order::{group_lines, reads_before, sort_reading_order};
pub use regions::{find_regions, merge_regions, x_regions, y_regions};
