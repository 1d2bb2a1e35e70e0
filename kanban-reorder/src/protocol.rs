//! Adapter for the UI drag library's drop-result shape.
//!
//! The library reports a finished drag as
//! `{ type, draggableId, source: {droppableId, index}, destination | null }`.
//! Only this module knows that shape; everything else works on [`DragEvent`].

use crate::error::{ReorderError, Result};
use crate::types::{DragCategory, DragEvent, Location};
use serde::{Deserialize, Serialize};

/// A location as the drag library reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraggableLocation {
    pub droppable_id: String,
    pub index: usize,
}

impl From<DraggableLocation> for Location {
    fn from(loc: DraggableLocation) -> Self {
        Location::new(loc.droppable_id, loc.index)
    }
}

/// A drop result as the drag library reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropResult {
    pub draggable_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub source: DraggableLocation,
    #[serde(default)]
    pub destination: Option<DraggableLocation>,
    /// "DROP" or "CANCEL"; informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl DropResult {
    /// Parse a drop result from JSON
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl TryFrom<DropResult> for DragEvent {
    type Error = ReorderError;

    fn try_from(result: DropResult) -> Result<Self> {
        let category: DragCategory = result.kind.parse()?;
        Ok(DragEvent {
            category,
            dragged_id: result.draggable_id,
            source: result.source.into(),
            destination: result.destination.map(Location::from),
        })
    }
}
