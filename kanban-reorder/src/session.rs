//! Drag session: the drag-in-progress flag plus the engine run on release

use crate::engine::ReorderEngine;
use crate::outcome::{Intent, NoOp, Outcome};
use crate::protocol::DropResult;
use crate::types::{DragEvent, Snapshot};
use tracing::{debug, warn};

/// Tracks whether a drag is in progress and turns releases into intents.
///
/// Only one drag can be active; starting a new one ends the previous one.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    engine: ReorderEngine,
    dragging: bool,
}

impl DragSession {
    pub fn new(engine: ReorderEngine) -> Self {
        Self {
            engine,
            dragging: false,
        }
    }

    pub fn engine(&self) -> &ReorderEngine {
        &self.engine
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// A drag began
    pub fn drag_start(&mut self) -> Intent {
        if self.dragging {
            debug!("drag started while another was active, previous drag ended");
        }
        self.dragging = true;
        Intent::SetDragging { dragging: true }
    }

    /// A drag was released (dropped or cancelled).
    ///
    /// Always clears the flag first, then appends whatever the engine produced.
    pub fn drag_end(&mut self, event: &DragEvent, snapshot: &Snapshot) -> Vec<Intent> {
        self.release(event, snapshot).1
    }

    /// Like [`drag_end`](Self::drag_end) but also returns the engine outcome
    pub fn release(&mut self, event: &DragEvent, snapshot: &Snapshot) -> (Outcome, Vec<Intent>) {
        let mut intents = vec![self.finish()];
        let outcome = self.engine.compute_reorder(event, snapshot);
        intents.extend(outcome.clone().into_intents());
        (outcome, intents)
    }

    /// A drag was released, as reported by the drag library
    pub fn drop_result(&mut self, result: DropResult, snapshot: &Snapshot) -> Vec<Intent> {
        self.release_drop(result, snapshot).1
    }

    /// Like [`drop_result`](Self::drop_result) but also returns the engine outcome
    pub fn release_drop(
        &mut self,
        result: DropResult,
        snapshot: &Snapshot,
    ) -> (Outcome, Vec<Intent>) {
        match DragEvent::try_from(result) {
            Ok(event) => self.release(&event, snapshot),
            Err(e) => {
                warn!(error = %e, "unusable drop result");
                let detail = e.to_string();
                (Outcome::NoOp(NoOp::Unrecognized { detail }), vec![self.finish()])
            }
        }
    }

    fn finish(&mut self) -> Intent {
        if !self.dragging {
            debug!("drag ended without a matching start");
        }
        self.dragging = false;
        Intent::SetDragging { dragging: false }
    }
}
