//! Tests for the gap-split heuristic and indexed cell assembly.

use boxtable_core::TableError;
use boxtable_core::table::{
    ColumnSplit, GapSplitStrategy, IndexedCell, TableStrategy, TextBox, assemble_indexed_cells,
    find_gaps, gap_split_table, partition_into_rows,
};

fn word(text: &str, x0: f64, x1: f64, top: f64, bottom: f64) -> TextBox {
    TextBox::new(x0, x1, top, bottom, text)
}

fn invoice() -> Vec<TextBox> {
    vec![
        word("Amount", 0.75, 0.9, 0.05, 0.1),
        word("Description", 0.05, 0.3, 0.05, 0.1),
        word("Date", 0.4, 0.5, 0.05, 0.1),
        word("Office", 0.05, 0.15, 0.15, 0.2),
        word("chairs", 0.16, 0.26, 0.151, 0.2),
        word("2021-03-01", 0.4, 0.6, 0.15, 0.2),
        word("420.00", 0.75, 0.85, 0.15, 0.2),
        word("Desk", 0.05, 0.12, 0.25, 0.3),
        word("2021-03-04", 0.4, 0.6, 0.25, 0.3),
        word("199.00", 0.75, 0.85, 0.25, 0.3),
    ]
}

#[test]
fn test_rows_follow_vertical_overlap() {
    let rows = partition_into_rows(&invoice());
    assert_eq!(rows.len(), 3);
    let first: Vec<&str> = rows[0].iter().map(|b| b.content.as_str()).collect();
    assert_eq!(first, vec!["Description", "Date", "Amount"]);
    let second: Vec<&str> = rows[1].iter().map(|b| b.content.as_str()).collect();
    assert_eq!(second, vec!["Office", "chairs", "2021-03-01", "420.00"]);
}

#[test]
fn test_gap_split_invoice() {
    let table = gap_split_table(&invoice(), ColumnSplit::Count(3)).unwrap();
    assert_eq!(
        table,
        vec![
            vec!["Description", "Date", "Amount"],
            vec!["Office chairs", "2021-03-01", "420.00"],
            vec!["Desk", "2021-03-04", "199.00"],
        ]
    );
}

#[test]
fn test_gap_split_min_gap_matches_count() {
    let by_count = gap_split_table(&invoice(), ColumnSplit::Count(3)).unwrap();
    let by_gap = gap_split_table(&invoice(), ColumnSplit::MinGap(0.05)).unwrap();
    assert_eq!(by_count, by_gap);
}

#[test]
fn test_gap_split_is_rectangular() {
    let strategy = GapSplitStrategy {
        split: ColumnSplit::Count(4),
    };
    let table = strategy.extract(&invoice()).unwrap();
    // only two gaps exist, so three columns
    assert!(table.iter().all(|row| row.len() == 3));
}

#[test]
fn test_gaps_widest_first() {
    let gaps = find_gaps(&invoice());
    assert_eq!(gaps.len(), 2);
    assert!(gaps[0].width() >= gaps[1].width());
}

#[test]
fn test_gap_split_rejects_inverted_box() {
    let boxes = vec![word("bad", 0.3, 0.1, 0.0, 0.1)];
    assert!(matches!(
        gap_split_table(&boxes, ColumnSplit::default()),
        Err(TableError::InvalidInput { index: Some(0), .. })
    ));
}

#[test]
fn test_indexed_cells_from_json() {
    let json = r#"[
        {"row": 1, "column": 1, "text": "Name"},
        {"row": 1, "column": 2, "text": "Age"},
        {"row": 2, "column": 1, "text": "Ada"},
        {"row": 2, "column": 2, "text": "36"}
    ]"#;
    let cells: Vec<IndexedCell> = serde_json::from_str(json).unwrap();
    let table = assemble_indexed_cells(&cells).unwrap();
    assert_eq!(table, vec![vec!["Name", "Age"], vec!["Ada", "36"]]);
}
