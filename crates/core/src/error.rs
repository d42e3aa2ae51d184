//! Error types for boxtable table reconstruction.

use thiserror::Error;

/// Primary error type for table reconstruction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// Input violates a geometric or structural precondition.
    #[error("invalid input{}: {reason}", index_suffix(.index))]
    InvalidInput {
        index: Option<usize>,
        reason: String,
    },
}

fn index_suffix(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at index {i}"),
        None => String::new(),
    }
}

impl TableError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        TableError::InvalidInput {
            index: None,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_at(index: usize, reason: impl Into<String>) -> Self {
        TableError::InvalidInput {
            index: Some(index),
            reason: reason.into(),
        }
    }
}

/// Convenience Result type alias for TableError.
pub type Result<T> = std::result::Result<T, TableError>;
