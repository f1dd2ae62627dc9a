//! Core types: identifiers, configuration, RNG.
//!
//! These are the game-agnostic building blocks; the session and registry
//! layers build the party-game semantics on top of them.

pub mod id;
pub mod rng;
pub mod settings;

pub use id::{GameId, PlayerId};
pub use rng::GameRng;
pub use settings::{GameSettings, DEFAULT_DECK_SOURCE};
