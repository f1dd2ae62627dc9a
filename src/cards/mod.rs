//! Card system: card values, deck remainder, and the provider seam.
//!
//! ## Key Types
//!
//! - `CardId`: selectable identity of a card
//! - `CardKind`: black (prompt) vs white (response)
//! - `Card`: id + display text
//! - `Deck`: the undealt remainder of a session, drawn without replacement
//! - `DeckProvider`: async external source of deck content

pub mod card;
pub mod deck;
pub mod provider;

pub use card::{Card, CardId, CardKind};
pub use deck::Deck;
pub use provider::{DeckProvider, StaticDeckProvider};
