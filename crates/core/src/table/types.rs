//! Table reconstruction types and settings.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

// Default constants
pub(crate) const DEFAULT_COLUMN_COUNT: usize = 3;

// Key type for sorting coordinates
pub(crate) type KeyF64 = OrderedFloat<f64>;

pub(crate) fn key_f64(v: f64) -> KeyF64 {
    OrderedFloat(v)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
}

/// Closed interval along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub low: f64,
    pub high: f64,
}

impl Region {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn midpoint(&self) -> f64 {
        self.low + self.width() / 2.0
    }

    /// Touching endpoints count as overlap.
    pub fn overlaps(&self, other: &Region) -> bool {
        !(self.high < other.low || self.low > other.high)
    }
}

/// An axis-aligned rectangle with the text detected inside it.
///
/// Coordinates use a top-left origin with Y growing downward, so `y_top`
/// is numerically smaller than `y_bottom`. OCR services usually report
/// them normalized to `[0, 1]`, but only relative positions matter here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextBox {
    pub x_left: f64,
    pub x_right: f64,
    pub y_top: f64,
    pub y_bottom: f64,
    #[serde(default)]
    pub content: String,
}

impl TextBox {
    pub fn new(
        x_left: f64,
        x_right: f64,
        y_top: f64,
        y_bottom: f64,
        content: impl Into<String>,
    ) -> Self {
        Self {
            x_left,
            x_right,
            y_top,
            y_bottom,
            content: content.into(),
        }
    }

    /// Empty grid cell spanning one column region and one row region.
    pub fn cell(x: Region, y: Region) -> Self {
        Self {
            x_left: x.low,
            x_right: x.high,
            y_top: y.low,
            y_bottom: y.high,
            content: String::new(),
        }
    }

    /// Axis-aligned hull of an OCR polygon given as `(x, y)` vertices.
    pub fn from_polygon(points: &[(f64, f64)], content: impl Into<String>) -> Result<Self> {
        if points.is_empty() {
            return Err(TableError::invalid("polygon has no vertices"));
        }
        let mut x_left = f64::INFINITY;
        let mut x_right = f64::NEG_INFINITY;
        let mut y_top = f64::INFINITY;
        let mut y_bottom = f64::NEG_INFINITY;
        for (i, &(x, y)) in points.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(TableError::invalid_at(
                    i,
                    format!("polygon vertex ({x}, {y}) is not finite"),
                ));
            }
            x_left = x_left.min(x);
            x_right = x_right.max(x);
            y_top = y_top.min(y);
            y_bottom = y_bottom.max(y);
        }
        Ok(Self::new(x_left, x_right, y_top, y_bottom, content))
    }

    /// Projection of the box onto `axis`.
    pub fn span(&self, axis: Axis) -> Region {
        match axis {
            Axis::X => Region::new(self.x_left, self.x_right),
            Axis::Y => Region::new(self.y_top, self.y_bottom),
        }
    }

    /// Whether `self` lies fully within `other`; shared edges count.
    pub fn inside(&self, other: &TextBox) -> bool {
        other.x_left <= self.x_left
            && other.x_right >= self.x_right
            && other.y_top <= self.y_top
            && other.y_bottom >= self.y_bottom
    }

    pub fn x_overlap(&self, left: f64, right: f64) -> bool {
        // to the left
        if self.x_right < left {
            return false;
        }
        // to the right
        if self.x_left > right {
            return false;
        }
        true
    }

    pub fn y_overlap(&self, top: f64, bottom: f64) -> bool {
        // above
        if self.y_bottom < top {
            return false;
        }
        // below
        if self.y_top > bottom {
            return false;
        }
        true
    }

    /// Reject non-finite coordinates and inverted extents.
    pub fn validate(&self) -> Result<()> {
        let coords = [self.x_left, self.x_right, self.y_top, self.y_bottom];
        if coords.iter().any(|c| !c.is_finite()) {
            return Err(TableError::invalid(format!(
                "non-finite coordinate in box {:?}",
                self.content
            )));
        }
        if self.x_left > self.x_right {
            return Err(TableError::invalid(format!(
                "x_left {} > x_right {}",
                self.x_left, self.x_right
            )));
        }
        if self.y_top > self.y_bottom {
            return Err(TableError::invalid(format!(
                "y_top {} > y_bottom {}",
                self.y_top, self.y_bottom
            )));
        }
        Ok(())
    }
}

/// Validate every box, reporting the index of the first bad one.
pub(crate) fn validate_boxes(boxes: &[TextBox]) -> Result<()> {
    for (i, b) in boxes.iter().enumerate() {
        if let Err(TableError::InvalidInput { reason, .. }) = b.validate() {
            return Err(TableError::invalid_at(i, reason));
        }
    }
    Ok(())
}

/// Output of region-based reconstruction.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TableExtraction {
    /// Synthesized cells with their assigned content, `[row][col]`.
    pub cells: Vec<Vec<TextBox>>,
    /// Cell contents, same shape as `cells`.
    pub rows: Vec<Vec<String>>,
}

impl TableExtraction {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.column_count() == 0
    }
}

/// A cell reported by a service that already detected the table layout.
/// Indices are 1-based.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexedCell {
    pub row: usize,
    pub column: usize,
    pub text: String,
}

/// How the gap-split strategy picks column boundaries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColumnSplit {
    /// Split at the `n - 1` widest horizontal gaps.
    Count(usize),
    /// Split at every gap at least this wide.
    MinGap(f64),
}

impl Default for ColumnSplit {
    fn default() -> Self {
        ColumnSplit::Count(DEFAULT_COLUMN_COUNT)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrategyKind {
    /// Row/column regions from box projections.
    #[default]
    Regions,
    /// Rows by vertical overlap, columns by widest horizontal gaps.
    GapSplit,
}

#[derive(Clone, Debug, Default)]
pub struct TableSettings {
    pub strategy: StrategyKind,
    pub column_split: ColumnSplit,
}
