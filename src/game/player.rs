//! Per-player state.
//!
//! A `Player` is owned exclusively by its game session: it is created
//! when the player joins (drawing a full hand) and dropped when they
//! depart. Hand cards belong to exactly one player until discarded.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardId};
use crate::core::PlayerId;

/// Hand storage, inline up to the default hand size of 10.
pub type Hand = SmallVec<[Card; 10]>;

/// Caller-supplied identity for a joining player; the session builds
/// the full record and deals the hand.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerStub {
    pub id: PlayerId,
    pub name: String,
}

impl PlayerStub {
    /// Create a stub from externally assigned id and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
        }
    }
}

/// One seated player: hand, round-local selection, and score.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    /// Externally assigned identity.
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// White cards currently held.
    pub hand: Hand,

    /// The card chosen this round, if any.
    pub selected_card: Option<CardId>,

    /// True once the player is ready for the next round.
    pub is_ready: bool,

    /// Accumulated score; reset when a finished match rolls over.
    pub awesome_points: u32,

    /// Whether this player judges the current round.
    pub is_czar: bool,
}

impl Player {
    /// Create a freshly seated player with an empty hand.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Hand::new(),
            selected_card: None,
            is_ready: false,
            awesome_points: 0,
            is_czar: false,
        }
    }

    /// Whether the player holds a card with the given id.
    #[must_use]
    pub fn holds(&self, card: CardId) -> bool {
        self.hand.iter().any(|c| c.id == card)
    }

    /// Remove a card from the hand by id, returning it if held.
    pub fn discard(&mut self, card: CardId) -> Option<Card> {
        let index = self.hand.iter().position(|c| c.id == card)?;
        Some(self.hand.remove(index))
    }

    /// Clear round-local state (selection and ready flag).
    pub fn reset_round(&mut self) {
        self.selected_card = None;
        self.is_ready = false;
    }
}
