//! In-memory registry of game sessions.
//!
//! The registry owns every live `Game`, keyed by id. It is created by
//! the process entry point and handed by reference to the transport
//! layer; there is no ambient global state. All mutation is synchronous
//! except game creation, which awaits the external deck fetch.
//!
//! ## Example
//!
//! ```
//! use cardczar::{GameRegistry, GameStub, StaticDeckProvider};
//! use cardczar::core::{GameId, GameSettings};
//!
//! # async fn demo() -> cardczar::Result<()> {
//! let provider = StaticDeckProvider::generated(200, 50);
//! let mut registry = GameRegistry::new(GameSettings::default());
//!
//! let stub = GameStub { id: GameId::from("g1"), name: "First table".into() };
//! registry.create(stub, &provider).await?;
//!
//! assert_eq!(registry.list_open().len(), 1);
//! # Ok(())
//! # }
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::DeckProvider;
use crate::core::{GameId, GameSettings, PlayerId};
use crate::error::{GameError, Result};
use crate::game::{Game, GameStub, PlayerStub};

/// Listing projection: identity and seat count only, never hands or
/// deck contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: GameId,
    pub name: String,
    pub player_count: usize,
}

/// Registry of live game sessions.
#[derive(Debug, Default)]
pub struct GameRegistry {
    settings: GameSettings,
    games: FxHashMap<GameId, Game>,
}

impl GameRegistry {
    /// Create an empty registry with the process-wide settings.
    ///
    /// The settings are snapshotted into each game at creation, so
    /// changing them later never affects running games.
    #[must_use]
    pub fn new(settings: GameSettings) -> Self {
        Self {
            settings,
            games: FxHashMap::default(),
        }
    }

    /// Create a game: fetch a deck, stamp on the initial state, insert.
    ///
    /// A provider failure is propagated and the game is not registered;
    /// there is no retry.
    pub async fn create(
        &mut self,
        stub: GameStub,
        provider: &dyn DeckProvider,
    ) -> Result<&Game> {
        if self.games.contains_key(&stub.id) {
            return Err(GameError::InvariantViolation(format!(
                "game {} already registered",
                stub.id
            )));
        }

        let deck = provider.fetch(&self.settings.deck_source).await?;
        let id = stub.id.clone();
        let game = Game::new(stub, deck, self.settings.clone());
        info!(game = %id, name = %game.name, "game created");
        Ok(self.games.entry(id).or_insert(game))
    }

    /// Look up a game by id.
    #[must_use]
    pub fn find(&self, id: &GameId) -> Option<&Game> {
        self.games.get(id)
    }

    /// Look up a game by id, mutably.
    pub fn find_mut(&mut self, id: &GameId) -> Option<&mut Game> {
        self.games.get_mut(id)
    }

    /// Summaries of games still accepting players (below capacity and
    /// not started).
    #[must_use]
    pub fn list_open(&self) -> Vec<GameSummary> {
        self.games
            .values()
            .filter(|g| g.is_open())
            .map(summarize)
            .collect()
    }

    /// Summaries of every registered game.
    #[must_use]
    pub fn list_all(&self) -> Vec<GameSummary> {
        self.games.values().map(summarize).collect()
    }

    /// Seat a player in a game.
    pub fn join(&mut self, id: &GameId, stub: PlayerStub) -> Result<&Game> {
        let game = self
            .games
            .get_mut(id)
            .ok_or_else(|| GameError::GameNotFound(id.clone()))?;
        game.join(stub)?;
        Ok(game)
    }

    /// Unseat a player; an emptied game is removed from the registry.
    pub fn depart(&mut self, id: &GameId, player: &PlayerId) -> Result<()> {
        let game = self
            .games
            .get_mut(id)
            .ok_or_else(|| GameError::GameNotFound(id.clone()))?;

        game.remove_player(player)
            .ok_or_else(|| GameError::PlayerNotFound {
                game: id.clone(),
                player: player.clone(),
            })?;
        info!(game = %id, player = %player, "player departed");

        if game.player_count() == 0 {
            self.games.remove(id);
            info!(game = %id, "empty game removed");
        }
        Ok(())
    }

    /// Remove a game outright, returning it if present.
    pub fn remove(&mut self, id: &GameId) -> Option<Game> {
        self.games.remove(id)
    }

    /// Drop every registered game. Test/ops hook.
    pub fn reset(&mut self) {
        self.games.clear();
    }

    /// Number of registered games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether no games are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

fn summarize(game: &Game) -> GameSummary {
    GameSummary {
        id: game.id.clone(),
        name: game.name.clone(),
        player_count: game.player_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Deck, StaticDeckProvider};
    use async_trait::async_trait;

    struct FailingProvider;

    #[async_trait]
    impl DeckProvider for FailingProvider {
        async fn fetch(&self, source: &str) -> Result<Deck> {
            Err(GameError::DeckFetch {
                url: source.to_string(),
                reason: "connection refused".to_string(),
            })
        }
    }

    fn stub(id: &str) -> GameStub {
        GameStub {
            id: GameId::from(id),
            name: format!("table {id}"),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let provider = StaticDeckProvider::generated(200, 50);
        let mut registry = GameRegistry::new(GameSettings::default());

        registry.create(stub("g1"), &provider).await.unwrap();

        let game = registry.find(&GameId::from("g1")).unwrap();
        assert_eq!(game.name, "table g1");
        assert!(!game.is_started);
        assert!(registry.find(&GameId::from("nope")).is_none());
    }

    #[tokio::test]
    async fn test_failed_fetch_registers_nothing() {
        let mut registry = GameRegistry::new(GameSettings::default());

        let err = registry.create(stub("g1"), &FailingProvider).await.unwrap_err();
        assert!(matches!(err, GameError::DeckFetch { .. }));
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let provider = StaticDeckProvider::generated(200, 50);
        let mut registry = GameRegistry::new(GameSettings::default());

        registry.create(stub("g1"), &provider).await.unwrap();
        let err = registry.create(stub("g1"), &provider).await.unwrap_err();
        assert!(matches!(err, GameError::InvariantViolation(_)));
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn test_listing_projections() {
        let provider = StaticDeckProvider::generated(200, 50);
        let settings = GameSettings::default().with_max_players(3).with_min_players(3);
        let mut registry = GameRegistry::new(settings);

        registry.create(stub("open"), &provider).await.unwrap();
        registry.create(stub("full"), &provider).await.unwrap();

        // Fill and thereby start the second game.
        for p in ["a", "b", "c"] {
            registry
                .join(&GameId::from("full"), PlayerStub::new(p, p))
                .unwrap();
        }

        let open = registry.list_open();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].id, GameId::from("open"));
        assert_eq!(open[0].player_count, 0);

        let mut all = registry.list_all();
        all.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, GameId::from("full"));
        assert_eq!(all[0].player_count, 3);
    }

    #[tokio::test]
    async fn test_depart_removes_empty_game() {
        let provider = StaticDeckProvider::generated(200, 50);
        let mut registry = GameRegistry::new(GameSettings::default());

        registry.create(stub("g1"), &provider).await.unwrap();
        registry
            .join(&GameId::from("g1"), PlayerStub::new("a", "A"))
            .unwrap();

        registry
            .depart(&GameId::from("g1"), &PlayerId::from("a"))
            .unwrap();
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_depart_missing_player() {
        let provider = StaticDeckProvider::generated(200, 50);
        let mut registry = GameRegistry::new(GameSettings::default());
        registry.create(stub("g1"), &provider).await.unwrap();

        let err = registry
            .depart(&GameId::from("g1"), &PlayerId::from("ghost"))
            .unwrap_err();
        assert!(matches!(err, GameError::PlayerNotFound { .. }));

        let err = registry
            .depart(&GameId::from("ghost"), &PlayerId::from("a"))
            .unwrap_err();
        assert!(matches!(err, GameError::GameNotFound(_)));
    }

    #[tokio::test]
    async fn test_reset_clears_registry() {
        let provider = StaticDeckProvider::generated(200, 50);
        let mut registry = GameRegistry::new(GameSettings::default());

        registry.create(stub("g1"), &provider).await.unwrap();
        registry.create(stub("g2"), &provider).await.unwrap();
        assert_eq!(registry.len(), 2);

        registry.reset();
        assert!(registry.is_empty());
    }
}
