//! Deck remainder and uniform draws.
//!
//! A `Deck` holds the cards not yet dealt in one session. Draws sample
//! without replacement: a uniformly random index is removed from the
//! remaining slice of the requested kind. Cards are never replenished
//! within a session, so both pools only shrink.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, CardKind};
use crate::core::GameRng;
use crate::error::{GameError, Result};

/// The remaining undealt cards of one game session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Undealt response cards.
    pub white: Vec<Card>,

    /// Undealt prompt cards.
    pub black: Vec<Card>,
}

impl Deck {
    /// Create a deck from pre-fetched card pools.
    #[must_use]
    pub fn new(white: Vec<Card>, black: Vec<Card>) -> Self {
        Self { white, black }
    }

    /// Number of undealt cards of a kind.
    #[must_use]
    pub fn remaining(&self, kind: CardKind) -> usize {
        match kind {
            CardKind::Black => self.black.len(),
            CardKind::White => self.white.len(),
        }
    }

    /// Draw a uniformly random card of the given kind.
    ///
    /// The card is removed from the deck; a drawn card can never be
    /// drawn again in the same session. Fails with
    /// [`GameError::DeckExhausted`] when the pool is empty.
    pub fn draw(&mut self, kind: CardKind, rng: &mut GameRng) -> Result<Card> {
        let pool = match kind {
            CardKind::Black => &mut self.black,
            CardKind::White => &mut self.white,
        };
        if pool.is_empty() {
            return Err(GameError::DeckExhausted(kind));
        }
        let index = rng.index(pool.len());
        Ok(pool.swap_remove(index))
    }

    /// Whether a card id is still undealt (either pool).
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.white.iter().chain(self.black.iter()).any(|c| c.id == id)
    }
}
