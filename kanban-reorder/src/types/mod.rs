//! Core types for the reorder engine

mod board;
mod card;
mod drag;
mod ids;
mod snapshot;

// Re-export all types
pub use board::{Board, List};
pub use card::Card;
pub use drag::{DragCategory, DragEvent, Location};
pub use ids::{BoardId, CardId, ListId};
pub use snapshot::Snapshot;
