//! # cardczar
//!
//! The authoritative game-state engine for a fill-in-the-blank party
//! card game with a rotating judge (the "czar").
//!
//! ## Design Principles
//!
//! 1. **Pure state transitions**: every operation is a synchronous
//!    in-memory mutation returning an explicit `Result`. The transport
//!    layer calls in, then re-broadcasts the updated state to clients.
//!
//! 2. **No ambient state**: the registry is an owned value created by
//!    the process entry point and passed by reference. There are no
//!    globals to reset between tests.
//!
//! 3. **One async edge**: deck content comes from an external provider
//!    behind the `DeckProvider` trait; game creation awaits it, nothing
//!    else does. Serializing concurrent calls is the caller's job.
//!
//! ## Round flow
//!
//! Joining players draw a full hand (sampling without replacement).
//! When the table reaches `min_players` the game starts: a black prompt
//! is dealt and the first player becomes czar. Non-czar players each
//! select a white card; the czar picks the winner; when every player
//! readies up, the round rolls over: played cards are replaced, the
//! czar seat rotates by join order, and the next prompt is dealt.
//! Reaching `points_to_win` ends the match; the next rollover starts a
//! fresh one with scores zeroed.
//!
//! ## Modules
//!
//! - `core`: identifiers, settings, RNG
//! - `cards`: card values, deck remainder, deck-provider seam
//! - `game`: players, round phases, session state machine
//! - `registry`: the id-keyed session registry
//! - `error`: the `GameError` taxonomy

pub mod cards;
pub mod core;
pub mod error;
pub mod game;
pub mod registry;

// Re-export commonly used types
pub use crate::cards::{Card, CardId, CardKind, Deck, DeckProvider, StaticDeckProvider};
pub use crate::core::{GameId, GameRng, GameSettings, PlayerId};
pub use crate::error::{GameError, Result};
pub use crate::game::{Game, GameStub, Player, PlayerStub, RoundPhase, RoundRecord};
pub use crate::registry::{GameRegistry, GameSummary};
