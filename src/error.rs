//! Error taxonomy for the engine.
//!
//! Every fallible operation returns `GameError` rather than panicking.
//! Lookups of missing games/players are errors, not crashes, and drawing
//! from an exhausted deck fails the draw explicitly.

use thiserror::Error;

use crate::cards::{CardId, CardKind};
use crate::core::{GameId, PlayerId};
use crate::game::RoundPhase;

/// Errors produced by registry and session operations.
#[derive(Error, Debug)]
pub enum GameError {
    /// Invalid configuration value (e.g. a non-positive hand size).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The external deck provider failed to produce a deck.
    #[error("deck fetch from {url} failed: {reason}")]
    DeckFetch { url: String, reason: String },

    /// No cards of the given kind remain in the deck.
    #[error("deck exhausted: no {0} cards remain")]
    DeckExhausted(CardKind),

    /// No game with the given id is registered.
    #[error("game {0} not found")]
    GameNotFound(GameId),

    /// No player with the given id is seated in the game.
    #[error("player {player} not found in game {game}")]
    PlayerNotFound { game: GameId, player: PlayerId },

    /// The player tried to play a card they do not hold.
    #[error("player {0} does not hold the selected card")]
    CardNotInHand(PlayerId),

    /// No player has the given card as their round selection.
    #[error("no player selected card {0}")]
    CardNotSelected(CardId),

    /// The operation is not legal in the current round phase.
    #[error("illegal round transition: {from} -> {to}")]
    InvalidTransition { from: RoundPhase, to: RoundPhase },

    /// The operation requires a started game.
    #[error("game {0} has not started")]
    GameNotStarted(GameId),

    /// Session state violated an invariant the engine maintains.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_message_names_the_location() {
        let err = GameError::DeckFetch {
            url: "https://decks.example/base.json".to_string(),
            reason: "connection refused".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("https://decks.example/base.json"));
        assert!(rendered.contains("connection refused"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&GameError::DeckExhausted(CardKind::Black));
        assert_error(&GameError::GameNotFound(GameId::from("g")));
    }
}
