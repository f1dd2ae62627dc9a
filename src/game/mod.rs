//! Game sessions: players, round phases, and the session state machine.
//!
//! ## Key Types
//!
//! - `Player` / `PlayerStub`: per-player hand, selection, and score
//! - `RoundPhase`: explicit round progression with validated transitions
//! - `Game` / `GameStub`: one session, the unit of mutation
//! - `RoundRecord`: append-only history of completed rounds

pub mod phase;
pub mod player;
pub mod session;

pub use phase::RoundPhase;
pub use player::{Hand, Player, PlayerStub};
pub use session::{Game, GameStub, RoundRecord};
