//! Deck provider seam.
//!
//! Deck content comes from outside the engine: the provider is handed a
//! configured source location and asynchronously yields the white and
//! black pools. Fetch failures are propagated to the game-creation
//! caller and never retried; the game is not registered.
//!
//! Transport layers implement this trait over HTTP, disk, or whatever
//! else; [`StaticDeckProvider`] serves a fixed in-memory deck for tests
//! and offline use.

use async_trait::async_trait;

use super::card::{Card, CardId};
use super::deck::Deck;
use crate::error::Result;

/// Asynchronous source of deck content.
///
/// The only async boundary in the engine: game creation awaits the
/// fetch, and everything after is a synchronous in-memory mutation.
#[async_trait]
pub trait DeckProvider: Send + Sync {
    /// Fetch a fresh deck from `source`.
    ///
    /// Implementations map their transport failures to
    /// [`crate::GameError::DeckFetch`].
    async fn fetch(&self, source: &str) -> Result<Deck>;
}

/// Provider serving a clone of a fixed deck, ignoring the source.
#[derive(Clone, Debug)]
pub struct StaticDeckProvider {
    deck: Deck,
}

impl StaticDeckProvider {
    /// Serve clones of the given deck.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self { deck }
    }

    /// Generate a deck with numbered placeholder cards.
    ///
    /// White ids start at 0, black ids at `white_count`, so ids never
    /// collide across pools.
    #[must_use]
    pub fn generated(white_count: u32, black_count: u32) -> Self {
        let white = (0..white_count)
            .map(|i| Card::new(CardId::new(i), format!("White card {i}")))
            .collect();
        let black = (0..black_count)
            .map(|i| Card::new(CardId::new(white_count + i), format!("Black card {i}")))
            .collect();
        Self::new(Deck::new(white, black))
    }
}

#[async_trait]
impl DeckProvider for StaticDeckProvider {
    async fn fetch(&self, _source: &str) -> Result<Deck> {
        Ok(self.deck.clone())
    }
}
