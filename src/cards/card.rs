//! Card values.
//!
//! A card is a selectable id plus display text. Black cards are the
//! round prompts; white cards are the responses held in player hands.
//! The engine never interprets card text.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within one deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The two card pools in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    /// Prompt card drawn once per round.
    Black,
    /// Response card held in hands.
    White,
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKind::Black => write!(f, "black"),
            CardKind::White => write!(f, "white"),
        }
    }
}

/// One card: selectable id and display value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Identity used for selection and hand bookkeeping.
    pub id: CardId,

    /// Display text, opaque to the engine.
    pub text: String,
}

impl Card {
    /// Create a new card.
    pub fn new(id: CardId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}
