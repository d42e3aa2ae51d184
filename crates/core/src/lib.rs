//! boxtable - Table reconstruction from OCR text bounding boxes.
//!
//! Given the unordered word or line boxes an OCR service reports for one
//! table, infer the rows and columns from layout alone and return the grid
//! of cell texts.
//!
//! ```
//! use boxtable_core::table::{TextBox, to_table};
//!
//! let boxes = vec![
//!     TextBox::new(0.0, 0.2, 0.0, 0.1, "A"),
//!     TextBox::new(0.3, 0.5, 0.0, 0.1, "B"),
//! ];
//! let table = to_table(&boxes)?;
//! assert_eq!(table.rows, vec![vec!["A", "B"]]);
//! # Ok::<(), boxtable_core::TableError>(())
//! ```

pub mod error;
pub mod table;

pub use error::{Result, TableError};
