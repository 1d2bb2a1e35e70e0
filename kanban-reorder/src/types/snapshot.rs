//! Snapshot of the three ordered collections

use super::board::{Board, List};
use super::card::Card;
use super::ids::{BoardId, CardId, ListId};
use serde::{Deserialize, Serialize};

/// The board, list and card collections as the store currently holds them.
///
/// Each collection is flat; lists and cards point at their parent through a
/// foreign key and their order within a parent is their relative order here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub boards: Vec<Board>,
    #[serde(default)]
    pub lists: Vec<List>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Snapshot {
    pub fn new(boards: Vec<Board>, lists: Vec<List>, cards: Vec<Card>) -> Self {
        Self {
            boards,
            lists,
            cards,
        }
    }

    pub fn find_board(&self, id: &BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| &b.board_id == id)
    }

    pub fn find_list(&self, id: &ListId) -> Option<&List> {
        self.lists.iter().find(|l| &l.list_id == id)
    }

    pub fn find_card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.card_id == id)
    }

    /// Cards of one list, in display order
    pub fn cards_in<'a>(&'a self, list: &'a ListId) -> impl Iterator<Item = &'a Card> + 'a {
        self.cards.iter().filter(move |c| &c.list_id == list)
    }

    /// Lists of one board, in display order
    pub fn lists_on<'a>(&'a self, board: &'a BoardId) -> impl Iterator<Item = &'a List> + 'a {
        self.lists.iter().filter(move |l| &l.board_id == board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snapshot {
        Snapshot::new(
            vec![Board::new("One").with_id("b1")],
            vec![
                List::new("b1", "Todo").with_id("l1"),
                List::new("b1", "Done").with_id("l2"),
            ],
            vec![
                Card::new("l1", "a").with_id("c1"),
                Card::new("l2", "b").with_id("c2"),
                Card::new("l1", "c").with_id("c3"),
            ],
        )
    }

    #[test]
    fn test_cards_in_keeps_order() {
        let snapshot = sample();
        let l1 = ListId::from("l1");
        let ids: Vec<&str> = snapshot.cards_in(&l1).map(|c| c.card_id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c3"]);
    }

    #[test]
    fn test_lookup() {
        let snapshot = sample();
        assert!(snapshot.find_card(&CardId::from("c2")).is_some());
        assert!(snapshot.find_list(&ListId::from("l9")).is_none());
        assert_eq!(snapshot.lists_on(&BoardId::from("b1")).count(), 2);
    }

    #[test]
    fn test_missing_collections_default_empty() {
        let snapshot: Snapshot = serde_json::from_str(r#"{"cards": []}"#).unwrap();
        assert!(snapshot.boards.is_empty());
        assert!(snapshot.lists.is_empty());
    }
}
