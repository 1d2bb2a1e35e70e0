//! kanban-reorder CLI - feeds a snapshot and a drop result through a drag session.
//!
//! The request is a single JSON document:
//!
//! ```json
//! {
//!   "snapshot": { "boards": [...], "lists": [...], "cards": [...] },
//!   "result": {
//!     "draggableId": "c1",
//!     "type": "card",
//!     "source": { "droppableId": "l1", "index": 0 },
//!     "destination": { "droppableId": "l2", "index": 1 }
//!   }
//! }
//! ```
//!
//! The response is either the ordered intent list or the resulting snapshot.

pub mod cli;

pub use cli::{Cli, Emit};

use anyhow::{Context, Result};
use kanban_reorder::{DragSession, DropResult, Outcome, Snapshot};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

/// One drag to resolve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub snapshot: Snapshot,
    pub result: DropResult,
}

/// Parse a request document
pub fn parse_request(input: &str) -> Result<Request> {
    serde_json::from_str(input).context("invalid request JSON")
}

/// Run one drag (start + release) through a session and render the chosen output
pub fn process(request: Request, session: &mut DragSession, emit: Emit) -> Result<Value> {
    let Request { snapshot, result } = request;

    let mut intents = vec![session.drag_start()];
    let (outcome, released) = session.release_drop(result, &snapshot);
    match &outcome {
        Outcome::Applied(_) => info!(intents = released.len(), "drag applied"),
        Outcome::NoOp(reason) => info!(?reason, "drag ignored"),
    }
    intents.extend(released);

    let value = match emit {
        Emit::Intents => serde_json::to_value(intents)?,
        Emit::Snapshot => serde_json::to_value(outcome.apply_to(&snapshot))?,
    };
    Ok(value)
}
