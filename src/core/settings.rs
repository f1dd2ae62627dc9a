//! Game configuration.
//!
//! `GameSettings` is read once at process start and copied into every
//! game at creation, so later configuration changes never affect running
//! sessions.
//!
//! ## Example
//!
//! ```
//! use cardczar::core::GameSettings;
//!
//! let settings = GameSettings::default()
//!     .with_min_players(4)
//!     .with_points_to_win(7);
//!
//! assert_eq!(settings.min_players, 4);
//! assert_eq!(settings.hand_size, 10);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Deck source used when `CARDS_PATH` is not configured.
pub const DEFAULT_DECK_SOURCE: &str =
    "https://raw.githubusercontent.com/phorque/nodejs-against-humanity/master/cards.json";

/// Per-game rules configuration, snapshotted into each game at creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Maximum seats in a game. Also drives the selection-completion
    /// check: a round is ready for scoring once `max_players - 1`
    /// selections are in.
    pub max_players: usize,

    /// Seats required before a game auto-starts.
    pub min_players: usize,

    /// White cards dealt to each player.
    pub hand_size: usize,

    /// Score at which a player wins the match.
    pub points_to_win: u32,

    /// URL-like location handed to the deck provider.
    pub deck_source: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            max_players: 10,
            min_players: 3,
            hand_size: 10,
            points_to_win: 5,
            deck_source: DEFAULT_DECK_SOURCE.to_string(),
        }
    }
}

impl GameSettings {
    /// Set the maximum player count.
    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        self.max_players = max;
        self
    }

    /// Set the auto-start player count.
    #[must_use]
    pub fn with_min_players(mut self, min: usize) -> Self {
        self.min_players = min;
        self
    }

    /// Set the dealt hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the winning score.
    #[must_use]
    pub fn with_points_to_win(mut self, points: u32) -> Self {
        self.points_to_win = points;
        self
    }

    /// Set the deck source location.
    #[must_use]
    pub fn with_deck_source(mut self, source: impl Into<String>) -> Self {
        self.deck_source = source.into();
        self
    }

    /// Load settings from the process environment.
    ///
    /// Reads `MAX_PLAYERS`, `MIN_PLAYERS`, `HAND_SIZE`, `POINTS_TO_WIN`
    /// and `CARDS_PATH`, falling back to defaults for unset variables.
    /// Unparseable or non-positive values are configuration errors.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let settings = Self {
            max_players: env_parse("MAX_PLAYERS", defaults.max_players)?,
            min_players: env_parse("MIN_PLAYERS", defaults.min_players)?,
            hand_size: env_parse("HAND_SIZE", defaults.hand_size)?,
            points_to_win: env_parse("POINTS_TO_WIN", defaults.points_to_win)?,
            deck_source: std::env::var("CARDS_PATH").unwrap_or(defaults.deck_source),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Check that all numeric settings are usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_players == 0 || self.min_players == 0 {
            return Err(GameError::Config(
                "player counts must be positive".to_string(),
            ));
        }
        if self.min_players > self.max_players {
            return Err(GameError::Config(format!(
                "min_players ({}) exceeds max_players ({})",
                self.min_players, self.max_players
            )));
        }
        if self.hand_size == 0 {
            return Err(GameError::Config("hand_size must be positive".to_string()));
        }
        if self.points_to_win == 0 {
            return Err(GameError::Config(
                "points_to_win must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

// Each setting parses at its own integer type, so an out-of-range value
// is a configuration error rather than a silent truncation.
fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|_| GameError::Config(format!("{key} must be a positive integer, got {raw:?}"))),
        Err(_) => Ok(default),
    }
}
