//! Property tests for the ownership and rotation invariants.
//!
//! Card exclusivity: a drawn card belongs to exactly one hand and is
//! gone from the deck; across any sequence of joins and rollovers no
//! card id ever appears twice. Rotation: there is always exactly one
//! czar once a game has started, and the seat walks the join order.

use proptest::prelude::*;

use cardczar::core::{GameId, GameRng, GameSettings, PlayerId};
use cardczar::game::{Game, GameStub, PlayerStub};
use cardczar::{Card, CardId, Deck};

fn deck(white: u32, black: u32) -> Deck {
    let whites = (0..white)
        .map(|i| Card::new(CardId::new(i), format!("w{i}")))
        .collect();
    let blacks = (0..black)
        .map(|i| Card::new(CardId::new(10_000 + i), format!("b{i}")))
        .collect();
    Deck::new(whites, blacks)
}

fn started_game(players: usize, hand_size: usize, seed: u64) -> Game {
    let settings = GameSettings::default()
        .with_max_players(players)
        .with_min_players(players)
        .with_hand_size(hand_size);
    let stub = GameStub {
        id: GameId::from("prop"),
        name: "prop".to_string(),
    };
    let mut game = Game::with_rng(stub, deck(500, 100), settings, GameRng::new(seed));
    for i in 0..players {
        game.join(PlayerStub::new(format!("p{i}"), format!("P{i}")))
            .unwrap();
    }
    game
}

/// Play one round to completion; the first non-czar selector wins.
fn play_round(game: &mut Game) {
    let non_czars: Vec<PlayerId> = game
        .players
        .iter()
        .filter(|p| !p.is_czar)
        .map(|p| p.id.clone())
        .collect();
    let mut winning = None;
    for id in &non_czars {
        let card = game.player(id).unwrap().hand[0].id;
        game.select_card(id, card).unwrap();
        winning.get_or_insert(card);
    }
    game.select_winner(winning.unwrap()).unwrap();
    let seats: Vec<PlayerId> = game.players.iter().map(|p| p.id.clone()).collect();
    for id in &seats {
        game.ready_for_next_round(id).unwrap();
    }
}

/// Every white card id is in exactly one place: one hand or the deck.
fn assert_card_exclusivity(game: &Game, total_white: usize) {
    let mut seen = std::collections::HashSet::new();
    for player in &game.players {
        for card in &player.hand {
            assert!(
                seen.insert(card.id),
                "card {} held by two players",
                card.id
            );
            assert!(
                !game.deck.contains(card.id),
                "card {} in a hand and the deck",
                card.id
            );
        }
    }
    let held: usize = game.players.iter().map(|p| p.hand.len()).sum();
    // Played cards leave the session entirely; nothing is ever duplicated.
    assert!(held + game.deck.white.len() <= total_white);
}

proptest! {
    #[test]
    fn prop_dealing_never_duplicates_cards(
        players in 3usize..=6,
        hand_size in 1usize..=10,
        seed in any::<u64>(),
    ) {
        let game = started_game(players, hand_size, seed);

        for player in &game.players {
            prop_assert_eq!(player.hand.len(), hand_size);
        }
        assert_card_exclusivity(&game, 500);

        let held: usize = game.players.iter().map(|p| p.hand.len()).sum();
        prop_assert_eq!(held + game.deck.white.len(), 500);
    }

    #[test]
    fn prop_rounds_preserve_exclusivity_and_hand_size(
        players in 3usize..=5,
        rounds in 1usize..=8,
        seed in any::<u64>(),
    ) {
        let hand_size = 5;
        let mut game = started_game(players, hand_size, seed);

        for _ in 0..rounds {
            play_round(&mut game);
            assert_card_exclusivity(&game, 500);
            for player in &game.players {
                prop_assert_eq!(player.hand.len(), hand_size);
            }
        }
        prop_assert_eq!(game.history.len(), rounds);
    }

    #[test]
    fn prop_exactly_one_czar_walking_join_order(
        players in 3usize..=6,
        rounds in 1usize..=10,
        seed in any::<u64>(),
    ) {
        let mut game = started_game(players, 4, seed);

        for round in 0..rounds {
            let czars: Vec<usize> = game
                .players
                .iter()
                .enumerate()
                .filter(|(_, p)| p.is_czar)
                .map(|(i, _)| i)
                .collect();
            prop_assert_eq!(czars.len(), 1);
            prop_assert_eq!(czars[0], round % players);
            play_round(&mut game);
        }
    }

    #[test]
    fn prop_black_pool_only_shrinks(
        players in 3usize..=4,
        rounds in 1usize..=6,
        seed in any::<u64>(),
    ) {
        let mut game = started_game(players, 3, seed);

        // One prompt drawn at start, one per rollover.
        prop_assert_eq!(game.deck.black.len(), 99);
        for round in 0..rounds {
            play_round(&mut game);
            prop_assert_eq!(game.deck.black.len(), 99 - (round + 1));
        }
    }
}
