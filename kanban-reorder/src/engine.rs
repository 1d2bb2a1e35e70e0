//! The reorder engine: dispatches a drag to the matching move command

use crate::board::MoveBoard;
use crate::card::MoveCard;
use crate::config::ReorderConfig;
use crate::context::ReorderContext;
use crate::error::Result;
use crate::list::MoveList;
use crate::operation::Execute;
use crate::outcome::{NoOp, Outcome, Reorder};
use crate::types::{DragCategory, DragEvent, Snapshot};
use std::time::Instant;
use tracing::{debug, debug_span, warn};

/// Resolves drag events against snapshots.
///
/// Holds no collection state: every call reads the snapshot it is given and
/// returns fresh collections.
#[derive(Debug, Clone, Default)]
pub struct ReorderEngine {
    config: ReorderConfig,
}

impl ReorderEngine {
    pub fn new(config: ReorderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    /// Compute the reorder for one drag.
    ///
    /// Dropping outside a target, dropping in place, and any drag that no
    /// longer matches the snapshot all come back as [`Outcome::NoOp`].
    pub fn compute_reorder(&self, event: &DragEvent, snapshot: &Snapshot) -> Outcome {
        let Some(to) = event.destination.clone() else {
            debug!(id = %event.dragged_id, "dropped outside any target");
            return Outcome::NoOp(NoOp::NoDestination);
        };
        if event.is_same_position() {
            debug!(id = %event.dragged_id, "dropped in place");
            return Outcome::NoOp(NoOp::SamePosition);
        }

        let ctx = ReorderContext::new(snapshot, &self.config);
        let from = event.source.clone();
        let id = event.dragged_id.as_str();
        let result = match event.category {
            DragCategory::Card => self.process(&MoveCard::new(id, from, to), &ctx),
            DragCategory::List => self.process(&MoveList::new(id, from, to), &ctx),
            DragCategory::Board => self.process(&MoveBoard::new(id, from.index, to.index), &ctx),
        };

        match result {
            Ok(reorder) => Outcome::Applied(reorder),
            Err(e) => {
                if e.is_stale() {
                    debug!(id = %event.dragged_id, error = %e, "stale drag ignored");
                } else {
                    warn!(id = %event.dragged_id, error = %e, "drag ignored");
                }
                Outcome::NoOp(NoOp::Stale {
                    detail: e.to_string(),
                })
            }
        }
    }

    fn process<C: Execute>(&self, cmd: &C, ctx: &ReorderContext<'_>) -> Result<Reorder> {
        let span = debug_span!("reorder", op = %cmd.op_string());
        let _enter = span.enter();

        let start = Instant::now();
        let result = cmd.execute(ctx);
        debug!(
            ok = result.is_ok(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "executed"
        );
        result
    }
}
