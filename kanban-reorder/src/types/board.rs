//! Board-level types: Board, List

use super::ids::{BoardId, ListId};
use serde::{Deserialize, Serialize};

/// A board. Its position is its index in the snapshot's board collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub board_id: BoardId,
    #[serde(default)]
    pub title: String,
}

impl Board {
    /// Create a new board with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            board_id: BoardId::new(),
            title: title.into(),
        }
    }

    /// Use an explicit id
    pub fn with_id(mut self, id: impl Into<BoardId>) -> Self {
        self.board_id = id.into();
        self
    }
}

/// A list owned by a board. Ordered within its board's run of the list collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub list_id: ListId,
    pub board_id: BoardId,
    #[serde(default)]
    pub title: String,
}

impl List {
    /// Create a new list on the given board
    pub fn new(board_id: impl Into<BoardId>, title: impl Into<String>) -> Self {
        Self {
            list_id: ListId::new(),
            board_id: board_id.into(),
            title: title.into(),
        }
    }

    /// Use an explicit id
    pub fn with_id(mut self, id: impl Into<ListId>) -> Self {
        self.list_id = id.into();
        self
    }
}
