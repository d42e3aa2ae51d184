//! Reading order for text boxes.
//!
//! Within a cell, a box reads before another when its bottom edge is above
//! the other's top edge; boxes that overlap vertically read by `x_left`.
//! That rule is not transitive, so it is only applied to the few boxes of
//! one cell, with an insertion sort. Page-wide rows use line grouping,
//! which is a total order.

use super::types::{TextBox, key_f64};

/// Whether `a` reads before `b`.
pub fn reads_before(a: &TextBox, b: &TextBox) -> bool {
    if a.y_bottom < b.y_top {
        return true;
    }
    if b.y_bottom < a.y_top {
        return false;
    }
    a.x_left < b.x_left
}

/// Indices of `boxes` sorted by top edge, then left edge.
pub(crate) fn top_left_order(boxes: &[TextBox]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..boxes.len()).collect();
    order.sort_by_key(|&i| (key_f64(boxes[i].y_top), key_f64(boxes[i].x_left)));
    order
}

/// Stable insertion sort of `indices` by [`reads_before`].
///
/// Quadratic, but terminates for any comparison.
pub(crate) fn sort_by_reading(indices: &mut [usize], boxes: &[TextBox]) {
    for i in 1..indices.len() {
        let mut j = i;
        while j > 0 && reads_before(&boxes[indices[j]], &boxes[indices[j - 1]]) {
            indices.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Indices of `boxes` in reading order.
pub(crate) fn reading_order(boxes: &[TextBox]) -> Vec<usize> {
    let mut order = top_left_order(boxes);
    sort_by_reading(&mut order, boxes);
    order
}

/// Indices of `boxes` grouped into lines, each line left to right.
///
/// A box joins the current line while its top is not below the line's
/// lowest bottom.
fn line_indices(boxes: &[TextBox]) -> Vec<Vec<usize>> {
    let mut lines: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut line_bottom = f64::NEG_INFINITY;
    for i in top_left_order(boxes) {
        let b = &boxes[i];
        if !current.is_empty() && b.y_top > line_bottom {
            lines.push(std::mem::take(&mut current));
            line_bottom = f64::NEG_INFINITY;
        }
        line_bottom = line_bottom.max(b.y_bottom);
        current.push(i);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    // stable: equal x_left keeps the top-first order from above
    for line in &mut lines {
        line.sort_by_key(|&i| key_f64(boxes[i].x_left));
    }
    lines
}

/// Group boxes into lines, cloning them out left to right.
pub fn group_lines(boxes: &[TextBox]) -> Vec<Vec<TextBox>> {
    line_indices(boxes)
        .into_iter()
        .map(|line| line.into_iter().map(|i| boxes[i].clone()).collect())
        .collect()
}

/// Sort boxes in place into reading order.
pub fn sort_reading_order(boxes: &mut Vec<TextBox>) {
    let order = reading_order(boxes);
    let mut slots: Vec<Option<TextBox>> = boxes.drain(..).map(Some).collect();
    boxes.extend(order.into_iter().filter_map(|i| slots[i].take()));
}
