//! MoveList command


use crate::context::ReorderContext;
use crate::error::{ReorderError, Result};
use crate::operation::{Execute, Operation};
use crate::outcome::{Reorder, Reparent};
use crate::runs::{Identified, RunIndex};
use crate::types::{BoardId, ListId, Location};
use serde::{Deserialize, Serialize};

/// Move a list within its board or onto another board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveList {
    /// The list being dragged
    pub id: ListId,
    /// Owning board and index the drag started from
    pub from: Location,
    /// Board and index it was dropped on
    pub to: Location,
}

impl MoveList {
    pub fn new(id: impl Into<ListId>, from: Location, to: Location) -> Self {
        Self {
            id: id.into(),
            from,
            to,
        }
    }
}

impl Operation for MoveList {
    fn verb(&self) -> &'static str {
        "move"
    }

    fn noun(&self) -> &'static str {
        "list"
    }
}

impl Execute for MoveList {
    fn execute(&self, ctx: &ReorderContext<'_>) -> Result<Reorder> {
        let list = ctx.read_list(&self.id)?;

        if list.board_id.as_str() != self.from.parent_id {
            return Err(ReorderError::SourceMismatch {
                item: list.describe(),
                claimed: self.from.parent_id.clone(),
                actual: list.board_id.to_string(),
            });
        }

        let destination = BoardId::from_string(self.to.parent_id.as_str());
        ctx.read_board(&destination)?;

        let index = RunIndex::build(&ctx.snapshot().lists);
        let mv = index.plan(list, self.from.index, destination, self.to.index, ctx.config())?;
        let lists = index.relocate(&mv)?;

        let reorder = Reorder::lists(lists);
        if mv.is_reparent() {
            return Ok(reorder.with_reparent(Reparent::List {
                list_id: self.id.clone(),
                board_id: mv.to,
            }));
        }
        Ok(reorder)
    }
}
