//! MoveCard command

use crate::context::ReorderContext;
use crate::error::{ReorderError, Result};
use crate::operation::{Execute, Operation};
use crate::outcome::{Reorder, Reparent};
use crate::runs::{Identified, RunIndex};
use crate::types::{CardId, ListId, Location};
use serde::{Deserialize, Serialize};

/// Move a card within its list or onto another list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCard {
    /// The card being dragged
    pub id: CardId,
    /// Owning list and index the drag started from
    pub from: Location,
    /// List and index it was dropped on
    pub to: Location,
}

impl MoveCard {
    pub fn new(id: impl Into<CardId>, from: Location, to: Location) -> Self {
        Self {
            id: id.into(),
            from,
            to,
        }
    }
}

impl Operation for MoveCard {
    fn verb(&self) -> &'static str {
        "move"
    }

    fn noun(&self) -> &'static str {
        "card"
    }
}

impl Execute for MoveCard {
    fn execute(&self, ctx: &ReorderContext<'_>) -> Result<Reorder> {
        let card = ctx.read_card(&self.id)?;

        if card.list_id.as_str() != self.from.parent_id {
            return Err(ReorderError::SourceMismatch {
                item: card.describe(),
                claimed: self.from.parent_id.clone(),
                actual: card.list_id.to_string(),
            });
        }

        // An empty list has no cards, so existence is checked on the lists
        let destination = ListId::from_string(self.to.parent_id.as_str());
        ctx.read_list(&destination)?;

        let index = RunIndex::build(&ctx.snapshot().cards);
        let mv = index.plan(card, self.from.index, destination, self.to.index, ctx.config())?;
        let cards = index.relocate(&mv)?;

        let reorder = Reorder::cards(cards);
        if mv.is_reparent() {
            return Ok(reorder.with_reparent(Reparent::Card {
                card_id: self.id.clone(),
                list_id: mv.to,
            }));
        }
        Ok(reorder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReorderConfig;
    use crate::types::{Board, Card, List, Snapshot};

    fn setup() -> Snapshot {
        Snapshot::new(
            vec![Board::new("Board").with_id("b1")],
            vec![
                List::new("b1", "One").with_id("l1"),
                List::new("b1", "Two").with_id("l2"),
                List::new("b1", "Empty").with_id("l3"),
            ],
            vec![
                Card::new("l1", "first").with_id("c1"),
                Card::new("l1", "second").with_id("c2"),
                Card::new("l2", "third").with_id("c3"),
            ],
        )
    }

    fn run(cards: &[Card], list: &str) -> Vec<String> {
        cards
            .iter()
            .filter(|c| c.list_id.as_str() == list)
            .map(|c| c.card_id.to_string())
            .collect()
    }

    fn execute(cmd: MoveCard, snapshot: &Snapshot) -> Result<Reorder> {
        let config = ReorderConfig::default();
        cmd.execute(&ReorderContext::new(snapshot, &config))
    }

    #[test]
    fn test_move_card_within_list() {
        let snapshot = setup();
        let reorder = execute(
            MoveCard::new("c1", Location::new("l1", 0), Location::new("l1", 1)),
            &snapshot,
        )
        .unwrap();

        let cards = reorder.cards.unwrap();
        assert_eq!(run(&cards, "l1"), vec!["c2", "c1"]);
        assert!(reorder.reparent.is_none());
        assert!(reorder.lists.is_none());
    }

    #[test]
    fn test_move_card_to_other_list() {
        let snapshot = setup();
        let reorder = execute(
            MoveCard::new("c1", Location::new("l1", 0), Location::new("l2", 1)),
            &snapshot,
        )
        .unwrap();

        let cards = reorder.cards.unwrap();
        assert_eq!(run(&cards, "l2"), vec!["c3", "c1"]);
        assert_eq!(run(&cards, "l1"), vec!["c2"]);
        assert_eq!(
            reorder.reparent,
            Some(Reparent::Card {
                card_id: "c1".into(),
                list_id: "l2".into(),
            })
        );
    }

    #[test]
    fn test_move_card_to_empty_list() {
        let snapshot = setup();
        let reorder = execute(
            MoveCard::new("c3", Location::new("l2", 0), Location::new("l3", 0)),
            &snapshot,
        )
        .unwrap();

        let cards = reorder.cards.unwrap();
        assert_eq!(run(&cards, "l3"), vec!["c3"]);
        assert!(run(&cards, "l2").is_empty());
    }

    #[test]
    fn test_move_unknown_card() {
        let snapshot = setup();
        let result = execute(
            MoveCard::new("c9", Location::new("l1", 0), Location::new("l1", 1)),
            &snapshot,
        );
        assert!(matches!(result, Err(ReorderError::CardNotFound { .. })));
    }

    #[test]
    fn test_move_card_to_unknown_list() {
        let snapshot = setup();
        let result = execute(
            MoveCard::new("c1", Location::new("l1", 0), Location::new("l9", 0)),
            &snapshot,
        );
        assert!(matches!(result, Err(ReorderError::ListNotFound { .. })));
    }

    #[test]
    fn test_move_card_wrong_source_list() {
        let snapshot = setup();
        let result = execute(
            MoveCard::new("c1", Location::new("l2", 0), Location::new("l2", 1)),
            &snapshot,
        );
        assert!(matches!(result, Err(ReorderError::SourceMismatch { .. })));
    }

    #[test]
    fn test_op_string() {
        let cmd = MoveCard::new("c1", Location::new("l1", 0), Location::new("l1", 1));
        assert_eq!(cmd.op_string(), "move card");
    }
}
