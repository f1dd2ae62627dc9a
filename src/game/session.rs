//! One game session: players, deck remainder, and round progression.
//!
//! `Game` owns everything about a single play session. All operations
//! are synchronous in-memory mutations returning explicit `Result`s;
//! the caller (a transport layer) serializes access and re-broadcasts
//! state after each mutation.
//!
//! ## Round flow
//!
//! A round deals a black prompt, collects one white selection from each
//! non-czar player, lets the czar pick a winner, and rolls over once
//! every player has readied up. The rollover replaces played cards,
//! rotates the czar seat to the next player in join order, and deals the
//! next prompt. Reaching `points_to_win` ends the match; the following
//! rollover starts a fresh match with scores zeroed and hands intact.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::phase::RoundPhase;
use super::player::{Player, PlayerStub};
use crate::cards::{Card, CardId, CardKind, Deck};
use crate::core::{GameId, GameRng, GameSettings, PlayerId};
use crate::error::{GameError, Result};

/// Caller-supplied identity for a new game; the registry stamps on the
/// rest of the initial state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameStub {
    pub id: GameId,
    pub name: String,
}

/// One completed round: the prompt, the winning response, and who won.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub black_card: Card,
    pub winning_card: CardId,
    pub winner_name: String,
}

/// Full state of one play session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    /// Externally assigned identity.
    pub id: GameId,

    /// Display name.
    pub name: String,

    /// Seated players; order determines czar rotation.
    pub players: Vec<Player>,

    /// Undealt remainder; never replenished within a session.
    pub deck: Deck,

    /// The active prompt, absent before start.
    pub current_black_card: Option<Card>,

    /// One record per completed round, append-only.
    pub history: Vec<RoundRecord>,

    /// Rules snapshot taken at creation.
    pub settings: GameSettings,

    /// Set once the table first reaches `min_players`.
    pub is_started: bool,

    /// Set when a player reaches `points_to_win`; cleared at rollover.
    pub is_over: bool,

    /// Round progression.
    pub phase: RoundPhase,

    /// Match winner, present while `is_over`.
    pub winner: Option<PlayerId>,

    /// The card the czar picked this round.
    pub winning_card: Option<CardId>,

    #[serde(skip, default)]
    rng: GameRng,
}

impl Game {
    /// Create a session from a pre-fetched deck and a settings snapshot.
    #[must_use]
    pub fn new(stub: GameStub, deck: Deck, settings: GameSettings) -> Self {
        Self::with_rng(stub, deck, settings, GameRng::from_entropy())
    }

    /// Create a session with an explicit RNG, for deterministic dealing.
    #[must_use]
    pub fn with_rng(stub: GameStub, deck: Deck, settings: GameSettings, rng: GameRng) -> Self {
        Self {
            id: stub.id,
            name: stub.name,
            players: Vec::new(),
            deck,
            current_black_card: None,
            history: Vec::new(),
            settings,
            is_started: false,
            is_over: false,
            phase: RoundPhase::Dealt,
            winner: None,
            winning_card: None,
            rng,
        }
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Whether the game still accepts players for listing purposes.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.players.len() < self.settings.max_players && !self.is_started
    }

    /// Look up a seated player.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Look up the player whose round selection is `card`.
    #[must_use]
    pub fn player_by_selected_card(&self, card: CardId) -> Option<&Player> {
        self.players.iter().find(|p| p.selected_card == Some(card))
    }

    /// The current czar, if one is seated.
    #[must_use]
    pub fn czar(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_czar)
    }

    /// Projection of the phase for transport layers.
    #[must_use]
    pub fn is_ready_for_scoring(&self) -> bool {
        self.phase == RoundPhase::ReadyForScoring
    }

    /// Projection of the phase for transport layers.
    #[must_use]
    pub fn is_ready_for_review(&self) -> bool {
        self.phase == RoundPhase::ReadyForReview
    }

    fn player_mut(&mut self, id: &PlayerId) -> Result<&mut Player> {
        let game = self.id.clone();
        self.players
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or(GameError::PlayerNotFound {
                game,
                player: id.clone(),
            })
    }

    fn selection_count(&self) -> usize {
        self.players
            .iter()
            .filter(|p| p.selected_card.is_some())
            .count()
    }

    fn draw_black_card(&mut self) -> Result<()> {
        let card = self.deck.draw(CardKind::Black, &mut self.rng)?;
        self.current_black_card = Some(card);
        Ok(())
    }

    /// Seat a new player, dealing them a full hand.
    ///
    /// Each hand card is drawn one at a time, uniformly at random from
    /// the remaining white pool. The moment the table first reaches
    /// `min_players` the game starts; if it had already started and no
    /// czar is seated (the previous czar departed), the joining player
    /// takes the seat.
    pub fn join(&mut self, stub: PlayerStub) -> Result<()> {
        // All-or-nothing: never deal a partial hand, and never seat the
        // player whose arrival would start a game that cannot deal its
        // first prompt.
        if self.deck.remaining(CardKind::White) < self.settings.hand_size {
            return Err(GameError::DeckExhausted(CardKind::White));
        }
        let would_start =
            !self.is_started && self.players.len() + 1 == self.settings.min_players;
        if would_start && self.deck.remaining(CardKind::Black) == 0 {
            return Err(GameError::DeckExhausted(CardKind::Black));
        }

        let mut player = Player::new(stub.id, stub.name);
        for _ in 0..self.settings.hand_size {
            player.hand.push(self.deck.draw(CardKind::White, &mut self.rng)?);
        }
        self.players.push(player);

        if self.players.len() == self.settings.min_players {
            if !self.is_started {
                self.start()?;
            } else if self.czar().is_none() {
                // The czar departed below min_players; the player who
                // refilled the table takes the seat.
                let last = self.players.len() - 1;
                self.players[last].is_czar = true;
                debug!(game = %self.id, player = %self.players[last].id, "czar seat recovered");
            }
        }

        Ok(())
    }

    /// Begin play: deal the first prompt and seat the first czar.
    ///
    /// Invoked by `join` the moment the table fills to `min_players`.
    pub fn start(&mut self) -> Result<()> {
        if self.is_started {
            return Err(GameError::InvariantViolation(format!(
                "game {} already started",
                self.id
            )));
        }
        if self.players.is_empty() {
            return Err(GameError::InvariantViolation(format!(
                "game {} cannot start with no players",
                self.id
            )));
        }
        // Checked before any mutation so a failed start leaves the
        // session exactly as it was.
        if self.deck.remaining(CardKind::Black) == 0 {
            return Err(GameError::DeckExhausted(CardKind::Black));
        }

        self.is_started = true;
        self.phase = RoundPhase::Dealt;
        self.draw_black_card()?;
        self.players[0].is_czar = true;
        debug!(game = %self.id, czar = %self.players[0].id, "game started");
        Ok(())
    }

    /// Unseat a player, returning their record.
    ///
    /// The departing hand is discarded with the player and a vacated
    /// czar seat is left empty; recovery happens on the next join or
    /// rollover. Registry callers remove the game once it is empty.
    pub fn remove_player(&mut self, id: &PlayerId) -> Option<Player> {
        let index = self.players.iter().position(|p| &p.id == id)?;
        Some(self.players.remove(index))
    }

    /// Record a player's white-card selection for the round.
    ///
    /// The player must hold the card. Once every expected selection is
    /// in (`max_players - 1`, the configured table size minus the czar)
    /// the round becomes ready for scoring. Note the count is against
    /// the configured maximum, not the live player count; a table below
    /// capacity never reaches scoring unless `max_players` matches it.
    pub fn select_card(&mut self, player: &PlayerId, card: CardId) -> Result<()> {
        if !self.is_started {
            return Err(GameError::GameNotStarted(self.id.clone()));
        }
        if !self.phase.accepts_selections() {
            return Err(GameError::InvalidTransition {
                from: self.phase,
                to: RoundPhase::AwaitingSelections,
            });
        }

        let seat = self.player_mut(player)?;
        if !seat.holds(card) {
            return Err(GameError::CardNotInHand(player.clone()));
        }
        seat.selected_card = Some(card);
        seat.is_ready = false;

        let expected = self.settings.max_players - 1;
        if self.selection_count() == expected {
            self.phase = self.phase.advance(RoundPhase::ReadyForScoring)?;
            debug!(game = %self.id, "all selections in, ready for scoring");
        } else {
            self.phase = self.phase.advance(RoundPhase::AwaitingSelections)?;
        }
        Ok(())
    }

    /// The czar picks the winning card of the round.
    ///
    /// Scores the selecting player, appends a history record, and ends
    /// the match when the winner reaches `points_to_win`.
    pub fn select_winner(&mut self, card: CardId) -> Result<()> {
        let next = self.phase.advance(RoundPhase::ReadyForReview)?;

        let black_card = self.current_black_card.clone().ok_or_else(|| {
            GameError::InvariantViolation(format!("game {} judging without a prompt", self.id))
        })?;
        let points_to_win = self.settings.points_to_win;

        let winner = self
            .players
            .iter_mut()
            .find(|p| p.selected_card == Some(card))
            .ok_or(GameError::CardNotSelected(card))?;
        winner.awesome_points += 1;

        let winner_id = winner.id.clone();
        let winner_name = winner.name.clone();
        let won_match = winner.awesome_points >= points_to_win;

        self.phase = next;
        self.winning_card = Some(card);
        self.history.push(RoundRecord {
            black_card,
            winning_card: card,
            winner_name,
        });

        if won_match {
            self.is_over = true;
            self.winner = Some(winner_id.clone());
            debug!(game = %self.id, winner = %winner_id, "match over");
        }
        Ok(())
    }

    /// Mark one player ready; once every seated player is ready the
    /// round rolls over.
    pub fn ready_for_next_round(&mut self, player: &PlayerId) -> Result<()> {
        self.player_mut(player)?.is_ready = true;

        if self.players.iter().all(|p| p.is_ready) {
            self.round_ended()?;
        }
        Ok(())
    }

    /// Roll the scored round over into the next one.
    ///
    /// Clears the round outcome, replaces every played card, deals the
    /// next prompt, and rotates the czar seat to the next player in
    /// join order (wrapping over the live sequence). If the match had
    /// ended, scores reset to zero and a fresh match begins with the
    /// same players and hands.
    pub fn round_ended(&mut self) -> Result<()> {
        let next = self.phase.advance(RoundPhase::Dealt)?;

        // Everything the rollover needs must be available up front, so a
        // failed draw cannot leave a half-rolled round.
        let replacements = self
            .players
            .iter()
            .filter(|p| !p.is_czar && p.selected_card.is_some())
            .count();
        if self.deck.remaining(CardKind::Black) == 0 {
            return Err(GameError::DeckExhausted(CardKind::Black));
        }
        if self.deck.remaining(CardKind::White) < replacements {
            return Err(GameError::DeckExhausted(CardKind::White));
        }

        let czar_index = self
            .players
            .iter()
            .position(|p| p.is_czar)
            .ok_or_else(|| {
                GameError::InvariantViolation(format!(
                    "game {} has no czar seated at rollover",
                    self.id
                ))
            })?;

        self.phase = next;
        self.winner = None;
        self.winning_card = None;
        self.draw_black_card()?;

        for i in 0..self.players.len() {
            if !self.players[i].is_czar {
                if let Some(card) = self.players[i].selected_card {
                    self.players[i].discard(card);
                    let drawn = self.deck.draw(CardKind::White, &mut self.rng)?;
                    self.players[i].hand.push(drawn);
                }
            }
            self.players[i].reset_round();
        }

        let next_czar = (czar_index + 1) % self.players.len();
        self.players[czar_index].is_czar = false;
        self.players[next_czar].is_czar = true;
        debug!(game = %self.id, czar = %self.players[next_czar].id, "round rolled over");

        if self.is_over {
            for player in &mut self.players {
                player.awesome_points = 0;
            }
            self.is_over = false;
        }
        Ok(())
    }
}
