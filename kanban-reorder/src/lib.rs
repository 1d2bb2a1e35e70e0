//! Drag-and-drop reorder engine for kanban boards
//!
//! This crate reconciles a finished drag gesture against three nested ordered
//! collections (boards → lists → cards) and produces the updated collections
//! plus any parent reassignment. It owns no storage: callers hand in a
//! [`Snapshot`] and get back new collections and a list of [`Intent`]s for
//! their store.
//!
//! ## Overview
//!
//! - **Card moves** reorder a list's run of cards, or move a card to another list
//! - **List moves** reorder a board's run of lists, or move a list to another board
//! - **Board moves** reorder the flat board collection
//! - **No-ops** - dropping outside a target, dropping in place, and stale drags
//!   (unknown ids, parents or positions) change nothing
//!
//! ## Basic Usage
//!
//! ```rust
//! use kanban_reorder::{Board, Card, DragEvent, DragSession, Intent, List, Snapshot};
//!
//! let snapshot = Snapshot::new(
//!     vec![Board::new("Work").with_id("b1")],
//!     vec![
//!         List::new("b1", "Todo").with_id("l1"),
//!         List::new("b1", "Done").with_id("l2"),
//!     ],
//!     vec![Card::new("l1", "Write docs").with_id("c1")],
//! );
//!
//! let mut session = DragSession::default();
//! session.drag_start();
//!
//! // Drag c1 from l1 index 0 to l2 index 0
//! let intents = session.drag_end(&DragEvent::card("c1", "l1", 0).to("l2", 0), &snapshot);
//! assert_eq!(intents[0], Intent::SetDragging { dragging: false });
//! assert!(matches!(intents[1], Intent::ChangeList { .. }));
//! assert!(matches!(intents[2], Intent::SetCards { .. }));
//! ```
//!
//! ## Ordering
//!
//! Lists and cards are flat collections keyed by parent. After a move the
//! affected run(s) come first (source, then destination), followed by every
//! untouched item in its original order. Identities are never duplicated or
//! lost.

mod config;
mod context;
mod engine;
mod error;
mod operation;
mod outcome;
pub mod protocol;
pub mod runs;
mod session;
pub mod types;

// Command modules
pub mod board;
pub mod card;
pub mod list;

pub use config::{OutOfRange, ReorderConfig, ENV_PREFIX};
pub use context::ReorderContext;
pub use engine::ReorderEngine;
pub use error::{ReorderError, Result};
pub use operation::{Execute, Operation};
pub use outcome::{Intent, NoOp, Outcome, Reorder, Reparent};
pub use protocol::{DraggableLocation, DropResult};
pub use session::DragSession;

// Re-export commonly used types
pub use types::{
    Board, BoardId, Card, CardId, DragCategory, DragEvent, List, ListId, Location, Snapshot,
};
