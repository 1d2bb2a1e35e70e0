//! Card type

use super::ids::{CardId, ListId};
use serde::{Deserialize, Serialize};

/// A card on a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub card_id: CardId,
    pub list_id: ListId,
    #[serde(default)]
    pub text: String,
    /// Crossed off (completed)
    #[serde(default)]
    pub cross: bool,
    /// Card is in its initial edit mode
    #[serde(default)]
    pub init: bool,
}

impl Card {
    /// Create a new card on the given list
    pub fn new(list_id: impl Into<ListId>, text: impl Into<String>) -> Self {
        Self {
            card_id: CardId::new(),
            list_id: list_id.into(),
            text: text.into(),
            cross: false,
            init: false,
        }
    }

    /// Use an explicit id
    pub fn with_id(mut self, id: impl Into<CardId>) -> Self {
        self.card_id = id.into();
        self
    }
}
