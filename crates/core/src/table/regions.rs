//! Region finding along one axis.
//!
//! A region is a maximal band of the page covered by box projections.
//! Every box projects into exactly one region, and the regions of one axis
//! are sorted and separated by a strictly positive gap.

use super::types::{Axis, Region, TextBox, key_f64};

/// Find the merged regions covered by the boxes' projections on `axis`.
pub fn find_regions(boxes: &[TextBox], axis: Axis) -> Vec<Region> {
    merge_regions(boxes.iter().map(|b| b.span(axis)).collect())
}

/// Column bands, left to right.
pub fn x_regions(boxes: &[TextBox]) -> Vec<Region> {
    find_regions(boxes, Axis::X)
}

/// Row bands, top to bottom.
pub fn y_regions(boxes: &[TextBox]) -> Vec<Region> {
    find_regions(boxes, Axis::Y)
}

/// Coalesce overlapping or touching intervals.
///
/// Sort by `low`, then sweep once, extending the current region while the
/// next interval overlaps or touches it.
pub fn merge_regions(mut spans: Vec<Region>) -> Vec<Region> {
    spans.sort_by_key(|r| key_f64(r.low));
    let mut merged: Vec<Region> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if last.overlaps(&span) => {
                last.high = last.high.max(span.high);
            }
            _ => merged.push(span),
        }
    }
    merged
}
