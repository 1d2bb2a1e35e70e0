//! Error types for the reorder engine

use thiserror::Error;

/// Result type for reorder operations
pub type Result<T> = std::result::Result<T, ReorderError>;

/// Errors that can occur while resolving a drag against a snapshot.
///
/// Most variants describe a stale snapshot: the drag referred to an item or
/// position the caller's current collections no longer agree with. The engine
/// never surfaces those to the caller; it turns them into a no-op outcome.
#[derive(Debug, Error)]
pub enum ReorderError {
    /// Card not found
    #[error("card not found: {id}")]
    CardNotFound { id: String },

    /// List not found
    #[error("list not found: {id}")]
    ListNotFound { id: String },

    /// Board not found
    #[error("board not found: {id}")]
    BoardNotFound { id: String },

    /// The drag's source parent disagrees with the item's owner in the snapshot
    #[error("{item} is owned by '{actual}', not drag source '{claimed}'")]
    SourceMismatch {
        item: String,
        claimed: String,
        actual: String,
    },

    /// The item at the drag's source index is not the dragged item
    #[error("{item} is not at source index {index} of '{parent}'")]
    SourceIndexMismatch {
        item: String,
        parent: String,
        index: usize,
    },

    /// Destination index past the end of the destination run
    #[error("index {index} out of range for '{parent}' (len {len})")]
    IndexOutOfRange {
        parent: String,
        index: usize,
        len: usize,
    },

    /// Drag category string not recognised
    #[error("unknown drag category: {value}")]
    UnknownCategory { value: String },

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl ReorderError {
    /// Create an unknown category error
    pub fn unknown_category(value: impl Into<String>) -> Self {
        Self::UnknownCategory {
            value: value.into(),
        }
    }

    /// Check if this error means the snapshot and the drag disagree.
    ///
    /// Stale errors degrade to a no-op; anything else is a caller problem.
    pub fn is_stale(&self) -> bool {
        matches!(
            self,
            Self::CardNotFound { .. }
                | Self::ListNotFound { .. }
                | Self::BoardNotFound { .. }
                | Self::SourceMismatch { .. }
                | Self::SourceIndexMismatch { .. }
                | Self::IndexOutOfRange { .. }
        )
    }
}

impl From<figment::Error> for ReorderError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReorderError::CardNotFound { id: "c9".into() };
        assert_eq!(err.to_string(), "card not found: c9");
    }

    #[test]
    fn test_source_index_mismatch_display() {
        let err = ReorderError::SourceIndexMismatch {
            item: "card c1".into(),
            parent: "l1".into(),
            index: 3,
        };
        assert_eq!(err.to_string(), "card c1 is not at source index 3 of 'l1'");
    }

    #[test]
    fn test_stale() {
        assert!(ReorderError::ListNotFound { id: "x".into() }.is_stale());
        assert!(ReorderError::IndexOutOfRange {
            parent: "l1".into(),
            index: 9,
            len: 2
        }
        .is_stale());
        assert!(!ReorderError::unknown_category("column").is_stale());
    }
}
