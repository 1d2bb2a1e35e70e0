//! ReorderContext - read-only view of a snapshot plus the active configuration

use crate::config::ReorderConfig;
use crate::error::{ReorderError, Result};
use crate::types::{Board, BoardId, Card, CardId, List, ListId, Snapshot};

/// Everything a move command may read.
///
/// Commands never mutate the snapshot; they build new collections from it.
#[derive(Debug, Clone, Copy)]
pub struct ReorderContext<'a> {
    snapshot: &'a Snapshot,
    config: &'a ReorderConfig,
}

impl<'a> ReorderContext<'a> {
    pub fn new(snapshot: &'a Snapshot, config: &'a ReorderConfig) -> Self {
        Self { snapshot, config }
    }

    pub fn snapshot(&self) -> &'a Snapshot {
        self.snapshot
    }

    pub fn config(&self) -> &'a ReorderConfig {
        self.config
    }

    /// Look up a card
    pub fn read_card(&self, id: &CardId) -> Result<&'a Card> {
        self.snapshot
            .find_card(id)
            .ok_or_else(|| ReorderError::CardNotFound { id: id.to_string() })
    }

    /// Look up a list
    pub fn read_list(&self, id: &ListId) -> Result<&'a List> {
        self.snapshot
            .find_list(id)
            .ok_or_else(|| ReorderError::ListNotFound { id: id.to_string() })
    }

    /// Look up a board
    pub fn read_board(&self, id: &BoardId) -> Result<&'a Board> {
        self.snapshot
            .find_board(id)
            .ok_or_else(|| ReorderError::BoardNotFound { id: id.to_string() })
    }

    /// Index of a board in the board collection
    pub fn board_position(&self, id: &BoardId) -> Result<usize> {
        self.snapshot
            .boards
            .iter()
            .position(|b| &b.board_id == id)
            .ok_or_else(|| ReorderError::BoardNotFound { id: id.to_string() })
    }
}
