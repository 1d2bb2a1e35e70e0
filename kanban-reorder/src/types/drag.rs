//! Drag event types: the engine's own view of a finished drag gesture

use crate::error::ReorderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What kind of entity is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragCategory {
    Card,
    List,
    Board,
}

impl DragCategory {
    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::List => "list",
            Self::Board => "board",
        }
    }
}

impl fmt::Display for DragCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DragCategory {
    type Err = ReorderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(Self::Card),
            "list" => Ok(Self::List),
            "board" => Ok(Self::Board),
            other => Err(ReorderError::unknown_category(other)),
        }
    }
}

/// A position inside a parent: the parent's id and an index into its run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub parent_id: String,
    pub index: usize,
}

impl Location {
    pub fn new(parent_id: impl Into<String>, index: usize) -> Self {
        Self {
            parent_id: parent_id.into(),
            index,
        }
    }
}

/// A completed drag gesture.
///
/// `destination` is `None` when the item was dropped outside any target.
/// For boards the parent ids name the single root container and only the
/// indices matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEvent {
    pub category: DragCategory,
    pub dragged_id: String,
    pub source: Location,
    #[serde(default)]
    pub destination: Option<Location>,
}

impl DragEvent {
    /// Create a drag with no destination yet
    pub fn new(category: DragCategory, dragged_id: impl Into<String>, source: Location) -> Self {
        Self {
            category,
            dragged_id: dragged_id.into(),
            source,
            destination: None,
        }
    }

    /// Shorthand for a card drag
    pub fn card(id: impl Into<String>, from: impl Into<String>, index: usize) -> Self {
        Self::new(DragCategory::Card, id, Location::new(from, index))
    }

    /// Shorthand for a list drag
    pub fn list(id: impl Into<String>, from: impl Into<String>, index: usize) -> Self {
        Self::new(DragCategory::List, id, Location::new(from, index))
    }

    /// Shorthand for a board drag
    pub fn board(id: impl Into<String>, root: impl Into<String>, index: usize) -> Self {
        Self::new(DragCategory::Board, id, Location::new(root, index))
    }

    /// Set the drop destination
    pub fn to(mut self, parent_id: impl Into<String>, index: usize) -> Self {
        self.destination = Some(Location::new(parent_id, index));
        self
    }

    /// True when the drop lands exactly where the drag started
    pub fn is_same_position(&self) -> bool {
        self.destination.as_ref() == Some(&self.source)
    }

    /// True when source and destination parents differ
    pub fn crosses_parent(&self) -> bool {
        self.destination
            .as_ref()
            .is_some_and(|d| d.parent_id != self.source.parent_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("card".parse::<DragCategory>().unwrap(), DragCategory::Card);
        assert_eq!("board".parse::<DragCategory>().unwrap(), DragCategory::Board);
        let err = "column".parse::<DragCategory>().unwrap_err();
        assert!(matches!(err, ReorderError::UnknownCategory { .. }));
    }

    #[test]
    fn test_same_position() {
        assert!(DragEvent::card("c1", "l1", 2).to("l1", 2).is_same_position());
        assert!(!DragEvent::card("c1", "l1", 2).to("l1", 1).is_same_position());
        assert!(!DragEvent::card("c1", "l1", 2).to("l2", 2).is_same_position());
        assert!(!DragEvent::card("c1", "l1", 2).is_same_position());
    }

    #[test]
    fn test_crosses_parent() {
        assert!(DragEvent::list("a", "b1", 0).to("b2", 0).crosses_parent());
        assert!(!DragEvent::list("a", "b1", 0).to("b1", 3).crosses_parent());
        assert!(!DragEvent::list("a", "b1", 0).crosses_parent());
    }
}
