//! Full-game behavior of the Duo driver.
//!
//! These tests run real games end to end and check the properties that
//! must hold regardless of how the cards fall.

use std::fs;

use duo_cards::cards::{Card, CardColor};
use duo_cards::core::{GameRng, PlayerId};
use duo_cards::export::{CsvLogger, MemorySink};
use duo_cards::games::duo::DuoGameBuilder;
use duo_cards::players::FirstPlayableStrategy;
use duo_cards::rules::{GameMediator, GamePhase, RoundOutcome};
use duo_cards::zones::{Deck, STANDARD_DECK_SIZE};

/// Every table size from 2 to 10 finishes a game.
#[test]
fn test_games_finish_for_all_table_sizes() {
    for player_count in 2..=10 {
        let mut game = DuoGameBuilder::new().player_count(player_count).build(99);
        let result = game.play_to_completion().unwrap();

        assert_eq!(game.phase(), GamePhase::GameOver);
        assert!(result.score >= 500, "{player_count} players: {result:?}");
        assert_eq!(game.winner().unwrap().name(), result.winner_name);
        assert_eq!(game.total_cards(), STANDARD_DECK_SIZE);
    }
}

/// The same seed replays the same game.
#[test]
fn test_seed_determinism() {
    let run = |seed| {
        let sink = MemorySink::new();
        let mut game = DuoGameBuilder::new().sink(sink.clone()).build(seed);
        let result = game.play_to_completion().unwrap();
        (result, sink.rounds())
    };

    let (first, first_rounds) = run(2024);
    let (second, second_rounds) = run(2024);
    assert_eq!(first, second);
    assert_eq!(first_rounds, second_rounds);
}

/// Scores never decrease and only the round winner gains.
#[test]
fn test_scores_accumulate() {
    let sink = MemorySink::new();
    let mut game = DuoGameBuilder::new()
        .player_count(4)
        .sink(sink.clone())
        .build(5);
    game.play_to_completion().unwrap();

    let rounds = sink.rounds();
    assert!(!rounds.is_empty());
    for pair in rounds.windows(2) {
        let gained = pair[0]
            .scores
            .iter()
            .zip(&pair[1].scores)
            .filter(|(before, after)| {
                assert!(after.score >= before.score);
                after.score > before.score
            })
            .count();
        assert!(gained <= 1);
        assert_eq!(pair[1].round, pair[0].round + 1);
    }

    let summary = sink.summary().unwrap();
    assert_eq!(summary.rounds as usize, rounds.len());
    assert!(summary.score >= 500);
}

/// A single won round is enough when the target is low.
#[test]
fn test_low_win_score_ends_quickly() {
    let mut game = DuoGameBuilder::new()
        .player_names(["Ada", "Bob", "Cy"])
        .win_score(1)
        .build(8);
    game.start_game().unwrap();

    loop {
        let outcome = game.play_round().unwrap();
        if let RoundOutcome::Won { winner, points } = outcome {
            if points > 0 {
                assert!(game.is_game_over());
                assert_eq!(game.result().unwrap().winner, winner);
                break;
            }
        }
    }
    assert!(["Ada", "Bob", "Cy"].contains(&game.winner().unwrap().name()));
}

/// A round played from a fixed position ends with the expected score.
#[test]
fn test_fixed_round_scores_remaining_hands() {
    let mut game = DuoGameBuilder::new()
        .player_count(2)
        .strategy(|_| Box::new(FirstPlayableStrategy))
        .build(1);
    game.start_game().unwrap();

    let card = |color, n| Card::number(color, n).unwrap();
    let mut deck = Deck::stacked(
        [
            card(CardColor::Yellow, 9),
            card(CardColor::Blue, 8),
            card(CardColor::Red, 3),
        ],
        GameRng::new(0),
    );
    deck.put_card_to_discard_pile(card(CardColor::Green, 4));
    game.set_deck(deck);

    let ada = game.player_mut(PlayerId::new(0));
    ada.clear_hand();
    ada.add_cards([card(CardColor::Green, 8), card(CardColor::Blue, 1)]);
    let bob = game.player_mut(PlayerId::new(1));
    bob.clear_hand();
    bob.add_cards([card(CardColor::Red, 1), card(CardColor::Yellow, 5)]);
    game.set_current_player(PlayerId::new(0));

    // Ada: Green 8. Bob: draws Yellow 9, keeps it. Ada: draws Blue 8 and
    // plays it. Bob: draws Red 3, keeps it. Ada: Blue 1, out.
    let outcome = game.play_round().unwrap();

    assert_eq!(
        outcome,
        RoundOutcome::Won {
            winner: PlayerId::new(0),
            points: 18,
        }
    );
    assert_eq!(game.player(PlayerId::new(0)).score(), 18);
    assert_eq!(game.player(PlayerId::new(1)).score(), 0);
    assert_eq!(game.round_number(), 2);
    assert_eq!(game.phase(), GamePhase::InRound);
}

/// The CSV log mirrors the game's rounds and names the winner.
#[test]
fn test_csv_log_of_full_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Files").join("game_status.csv");

    let mut game = DuoGameBuilder::new()
        .player_names(["Ada", "Bob"])
        .sink(CsvLogger::new(&path))
        .build(31);
    let result = game.play_to_completion().unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    assert_eq!(lines[0], "Round,Ada,Bob");
    assert_eq!(lines.len(), result.rounds as usize + 2);
    assert_eq!(lines[1].split(',').next(), Some("Round 1"));
    assert_eq!(*lines.last().unwrap(), format!("Winner,{}", result.winner_name));

    let final_row = lines[lines.len() - 2];
    let final_scores: Vec<u32> = final_row
        .split(',')
        .skip(1)
        .map(|value| value.parse().unwrap())
        .collect();
    assert!(final_scores.contains(&result.score));
}
