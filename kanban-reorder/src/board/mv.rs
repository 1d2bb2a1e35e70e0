//! MoveBoard command

use crate::context::ReorderContext;
use crate::error::{ReorderError, Result};
use crate::operation::{Execute, Operation};
use crate::outcome::Reorder;
use crate::runs::{reorder_flat, resolve_index};
use crate::types::BoardId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Move a board to a new position. Boards have no parent, so this never reparents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveBoard {
    /// The board being dragged
    pub id: BoardId,
    /// Index the drag started from
    pub from: usize,
    /// Index it was dropped on
    pub to: usize,
}

impl MoveBoard {
    pub fn new(id: impl Into<BoardId>, from: usize, to: usize) -> Self {
        Self {
            id: id.into(),
            from,
            to,
        }
    }
}

impl Operation for MoveBoard {
    fn verb(&self) -> &'static str {
        "move"
    }

    fn noun(&self) -> &'static str {
        "board"
    }
}

impl Execute for MoveBoard {
    fn execute(&self, ctx: &ReorderContext<'_>) -> Result<Reorder> {
        let boards = &ctx.snapshot().boards;
        let position = ctx.board_position(&self.id)?;

        if position != self.from {
            if ctx.config().verify_source_index {
                return Err(ReorderError::SourceIndexMismatch {
                    item: format!("board {}", self.id),
                    parent: "boards".into(),
                    index: self.from,
                });
            }
            debug!(board = %self.id, claimed = self.from, position, "using identity position");
        }

        let to = resolve_index(&"boards", self.to, boards.len() - 1, ctx.config().out_of_range)?;
        Ok(Reorder::boards(reorder_flat(boards, position, to)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutOfRange, ReorderConfig};
    use crate::types::{Board, Snapshot};

    fn setup() -> Snapshot {
        Snapshot::new(
            vec![
                Board::new("a").with_id("b1"),
                Board::new("b").with_id("b2"),
                Board::new("c").with_id("b3"),
            ],
            vec![],
            vec![],
        )
    }

    fn ids(reorder: &Reorder) -> Vec<&str> {
        reorder
            .boards
            .as_ref()
            .unwrap()
            .iter()
            .map(|b| b.board_id.as_str())
            .collect()
    }

    #[test]
    fn test_move_board() {
        let snapshot = setup();
        let config = ReorderConfig::default();
        let ctx = ReorderContext::new(&snapshot, &config);

        let reorder = MoveBoard::new("b1", 0, 2).execute(&ctx).unwrap();
        assert_eq!(ids(&reorder), vec!["b2", "b3", "b1"]);
        assert!(reorder.reparent.is_none());
        assert!(reorder.lists.is_none());
    }

    #[test]
    fn test_move_board_clamps() {
        let snapshot = setup();
        let config = ReorderConfig::default();
        let ctx = ReorderContext::new(&snapshot, &config);

        let reorder = MoveBoard::new("b1", 0, 10).execute(&ctx).unwrap();
        assert_eq!(ids(&reorder), vec!["b2", "b3", "b1"]);

        let strict = ReorderConfig {
            out_of_range: OutOfRange::Ignore,
            ..ReorderConfig::default()
        };
        let ctx = ReorderContext::new(&snapshot, &strict);
        assert!(MoveBoard::new("b1", 0, 10).execute(&ctx).is_err());
    }

    #[test]
    fn test_move_board_stale() {
        let snapshot = setup();
        let config = ReorderConfig::default();
        let ctx = ReorderContext::new(&snapshot, &config);

        let result = MoveBoard::new("b9", 0, 1).execute(&ctx);
        assert!(matches!(result, Err(ReorderError::BoardNotFound { .. })));

        let result = MoveBoard::new("b2", 0, 2).execute(&ctx);
        assert!(matches!(result, Err(ReorderError::SourceIndexMismatch { .. })));
    }

    #[test]
    fn test_move_board_lenient_source_index() {
        let snapshot = setup();
        let config = ReorderConfig {
            verify_source_index: false,
            ..ReorderConfig::default()
        };
        let ctx = ReorderContext::new(&snapshot, &config);

        let reorder = MoveBoard::new("b2", 0, 0).execute(&ctx).unwrap();
        assert_eq!(ids(&reorder), vec!["b2", "b1", "b3"]);
    }
}
