//! What a drag resolves to: a reorder, a no-op, and the intents sent to the store

use crate::types::{Board, BoardId, Card, CardId, List, ListId, Snapshot};
use serde::{Deserialize, Serialize};

/// A foreign-key change produced by a cross-parent move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reparent {
    Card { card_id: CardId, list_id: ListId },
    List { list_id: ListId, board_id: BoardId },
}

/// Updated collections from one move. Collections left `None` are unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reorder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<Card>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lists: Option<Vec<List>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boards: Option<Vec<Board>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reparent: Option<Reparent>,
}

impl Reorder {
    pub fn cards(cards: Vec<Card>) -> Self {
        Self {
            cards: Some(cards),
            ..Self::default()
        }
    }

    pub fn lists(lists: Vec<List>) -> Self {
        Self {
            lists: Some(lists),
            ..Self::default()
        }
    }

    pub fn boards(boards: Vec<Board>) -> Self {
        Self {
            boards: Some(boards),
            ..Self::default()
        }
    }

    pub fn with_reparent(mut self, reparent: Reparent) -> Self {
        self.reparent = Some(reparent);
        self
    }

    /// Build the snapshot the store should hold after this reorder
    pub fn apply_to(&self, snapshot: &Snapshot) -> Snapshot {
        Snapshot {
            boards: self.boards.clone().unwrap_or_else(|| snapshot.boards.clone()),
            lists: self.lists.clone().unwrap_or_else(|| snapshot.lists.clone()),
            cards: self.cards.clone().unwrap_or_else(|| snapshot.cards.clone()),
        }
    }

    /// Outbound events, reparenting first then collection replacement
    pub fn into_intents(self) -> Vec<Intent> {
        let mut intents = Vec::with_capacity(2);
        match self.reparent {
            Some(Reparent::Card { card_id, list_id }) => {
                intents.push(Intent::ChangeList { card_id, list_id })
            }
            Some(Reparent::List { list_id, board_id }) => {
                intents.push(Intent::ChangeBoard { list_id, board_id })
            }
            None => {}
        }
        if let Some(cards) = self.cards {
            intents.push(Intent::SetCards { cards });
        }
        if let Some(lists) = self.lists {
            intents.push(Intent::SetListOrder { lists });
        }
        if let Some(boards) = self.boards {
            intents.push(Intent::SetBoardOrder { boards });
        }
        intents
    }
}

/// Why a drag changed nothing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum NoOp {
    /// Dropped outside any target
    NoDestination,
    /// Dropped where it started
    SamePosition,
    /// The drag no longer matches the snapshot
    Stale { detail: String },
    /// The drop result could not be understood
    Unrecognized { detail: String },
}

/// Result of resolving one drag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied(Reorder),
    NoOp(NoOp),
}

impl Outcome {
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp(_))
    }

    pub fn reorder(&self) -> Option<&Reorder> {
        match self {
            Self::Applied(reorder) => Some(reorder),
            Self::NoOp(_) => None,
        }
    }

    /// The snapshot after this outcome; a no-op returns an identical copy
    pub fn apply_to(&self, snapshot: &Snapshot) -> Snapshot {
        match self {
            Self::Applied(reorder) => reorder.apply_to(snapshot),
            Self::NoOp(_) => snapshot.clone(),
        }
    }

    /// Intents to dispatch; none for a no-op
    pub fn into_intents(self) -> Vec<Intent> {
        match self {
            Self::Applied(reorder) => reorder.into_intents(),
            Self::NoOp(_) => Vec::new(),
        }
    }
}

/// An event for the external store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Intent {
    /// Replace the full card collection
    SetCards { cards: Vec<Card> },
    /// Move a card to another list
    #[serde(rename_all = "camelCase")]
    ChangeList { card_id: CardId, list_id: ListId },
    /// Replace the full list collection
    SetListOrder { lists: Vec<List> },
    /// Move a list to another board
    #[serde(rename_all = "camelCase")]
    ChangeBoard { list_id: ListId, board_id: BoardId },
    /// Replace the full board collection
    SetBoardOrder { boards: Vec<Board> },
    /// Drag-in-progress flag
    SetDragging { dragging: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Snapshot {
        Snapshot::new(
            vec![Board::new("One").with_id("b1")],
            vec![List::new("b1", "Todo").with_id("l1")],
            vec![Card::new("l1", "x").with_id("c1")],
        )
    }

    #[test]
    fn test_intents_reparent_first() {
        let reorder = Reorder::cards(vec![Card::new("l2", "x").with_id("c1")]).with_reparent(
            Reparent::Card {
                card_id: "c1".into(),
                list_id: "l2".into(),
            },
        );
        let intents = reorder.into_intents();
        assert_eq!(intents.len(), 2);
        assert!(matches!(intents[0], Intent::ChangeList { .. }));
        assert!(matches!(intents[1], Intent::SetCards { .. }));
    }

    #[test]
    fn test_apply_replaces_only_present_collections() {
        let before = snapshot();
        let boards = vec![Board::new("Two").with_id("b2")];
        let after = Reorder::boards(boards.clone()).apply_to(&before);
        assert_eq!(after.boards, boards);
        assert_eq!(after.lists, before.lists);
        assert_eq!(after.cards, before.cards);
    }

    #[test]
    fn test_noop_has_no_intents() {
        let outcome = Outcome::NoOp(NoOp::SamePosition);
        assert!(outcome.is_noop());
        assert_eq!(outcome.apply_to(&snapshot()), snapshot());
        assert!(outcome.into_intents().is_empty());
    }

    #[test]
    fn test_intent_wire_format() {
        let intent = Intent::ChangeBoard {
            list_id: "l1".into(),
            board_id: "b2".into(),
        };
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "changeBoard", "listId": "l1", "boardId": "b2"})
        );

        let json = serde_json::to_value(Intent::SetDragging { dragging: true }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "setDragging", "dragging": true}));
    }
}
