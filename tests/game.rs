//! Game integration tests.

use onehand::{
    Card, Deck, DeckError, Game, GameOptions, GameResult, GameState, HAND_WINDOW, OptionsError,
    Step, TrialOptions, TrialRunner, simulate,
};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

fn cards(ids: &[u32]) -> Vec<Card> {
    ids.iter().copied().map(Card::new).collect()
}

fn deck_from_draws(options: &GameOptions, draws: &[u32]) -> Deck {
    Deck::from_draw_order(options, cards(draws)).unwrap()
}

/// Draw order that groups each rank's four cards together.
fn grouped_by_rank() -> Vec<u32> {
    (0..13).flat_map(|rank| [rank, rank + 13, rank + 26, rank + 39]).collect()
}

/// Straightforward rendition of the rules over plain identifiers, used to
/// cross-check the engine.
fn reference_game(faces: u32, suits: u32, mut deck: Vec<u32>) -> bool {
    let mut hand: Vec<u32> = Vec::new();
    let mut discard_count = 0;

    while !deck.is_empty() {
        while hand.len() < 4 {
            hand.extend(deck.pop());
            if deck.is_empty() {
                break;
            }
        }

        if deck.is_empty() && hand.len() < 4 {
            break;
        }

        let n = hand.len();
        if hand[n - 1] % suits == hand[n - 4] % suits {
            hand.remove(n - 3);
            hand.remove(n - 3);
            discard_count += 2;
        } else if hand[n - 1] % faces == hand[n - 4] % faces {
            hand.truncate(n - 4);
            discard_count += 4;
        } else {
            match deck.pop() {
                Some(card) => hand.push(card),
                None => break,
            }
        }
    }

    discard_count == faces * suits
}

#[test]
fn first_four_of_a_rank_are_discarded_together() {
    let options = GameOptions::default();
    let mut draws = vec![0, 13, 26, 39];
    draws.extend((0..52).filter(|id| id % 13 != 0));
    let mut game = Game::new(deck_from_draws(&options, &draws));

    assert_eq!(
        game.step(),
        Step::RankMatch {
            discarded: [Card::new(0), Card::new(13), Card::new(26), Card::new(39)],
        }
    );
    assert_eq!(game.discarded(), 4);
    assert_eq!(game.cards_remaining(), 48);
    assert!(game.hand().is_empty());
    assert_eq!(game.state(), GameState::Playing);
}

#[test]
fn deck_grouped_by_rank_clears() {
    let options = GameOptions::default();
    let mut game = Game::new(deck_from_draws(&options, &grouped_by_rank()));

    for _ in 0..13 {
        assert!(matches!(game.step(), Step::RankMatch { .. }));
    }
    assert_eq!(
        game.step(),
        Step::Finished(GameResult {
            won: true,
            discarded: 52,
            draws: 52,
        })
    );
    assert_eq!(game.state(), GameState::Won);
}

#[test]
fn single_card_deck_loses_immediately() {
    let options = GameOptions::default().with_faces(1).with_suits(1);
    let mut game = Game::new(deck_from_draws(&options, &[0]));

    assert_eq!(
        game.step(),
        Step::Finished(GameResult {
            won: false,
            discarded: 0,
            draws: 1,
        })
    );
    assert_eq!(game.hand().len(), 1);
}

#[test]
fn decks_smaller_than_the_window_always_lose() {
    for (faces, suits) in [(1, 2), (3, 1), (1, 3)] {
        let options = GameOptions::default().with_faces(faces).with_suits(suits);
        let result = simulate(Deck::ordered(&options).unwrap());
        assert!(!result.won);
        assert_eq!(result.discarded, 0);
    }
}

#[test]
fn two_by_two_deck_never_clears() {
    // Suit and rank coincide when faces == suits == 2, so a match is always
    // a suit match and leaves two cards behind.
    let options = GameOptions::default().with_faces(2).with_suits(2);
    let mut permutations = 0;
    for a in 0..4 {
        for b in (0..4).filter(|&b| b != a) {
            for c in (0..4).filter(|&c| c != a && c != b) {
                let d = 6 - a - b - c;
                let draws = [a, b, c, d];
                let result = simulate(deck_from_draws(&options, &draws));
                let expected_discards = if a % 2 == d % 2 { 2 } else { 0 };

                assert!(!result.won);
                assert_eq!(result.discarded, expected_discards, "draws {draws:?}");
                assert_eq!(result.draws, 4);
                permutations += 1;
            }
        }
    }
    assert_eq!(permutations, 24);
}

#[test]
fn single_rank_deck_clears_in_fours() {
    let options = GameOptions::default().with_faces(1).with_suits(8);
    let result = simulate(deck_from_draws(&options, &[0, 1, 2, 3, 4, 5, 6, 7]));
    assert!(result.won);
    assert_eq!(result.discarded, 8);
}

#[test]
fn cards_are_conserved_at_every_step() {
    let options = GameOptions::default();
    let total = options.deck_size().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for _ in 0..200 {
        let mut game = Game::new(Deck::shuffled(&options, &mut rng).unwrap());
        let mut steps = 0;

        loop {
            let step = game.step();
            steps += 1;
            assert!(steps <= 2 * total + 1, "game did not terminate");
            assert_eq!(
                game.cards_remaining() + game.hand().len() + game.discarded(),
                total
            );
            assert_eq!(game.draws() + game.cards_remaining(), total);

            match step {
                Step::SuitMatch { kept, .. } => {
                    let hand = game.hand().cards();
                    assert_eq!(&hand[hand.len() - 2..], kept);
                }
                Step::RankMatch { .. } | Step::Dealt(_) => {}
                Step::Finished(result) => {
                    assert_eq!(result.won, result.discarded == total);
                    assert_eq!(result.won, game.hand().is_empty());
                    assert_eq!(result.draws, total);
                    break;
                }
            }

            if matches!(step, Step::Dealt(_)) {
                assert!(game.hand().len() > HAND_WINDOW);
            }
        }
    }
}

#[test]
fn same_deck_same_result() {
    let options = GameOptions::default();
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    for _ in 0..50 {
        let deck = Deck::shuffled(&options, &mut rng).unwrap();
        assert_eq!(simulate(deck.clone()), simulate(deck));
    }
}

#[test]
fn engine_matches_reference_rules() {
    let options = GameOptions::default();
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    for _ in 0..2_000 {
        let deck = Deck::shuffled(&options, &mut rng).unwrap();
        let ids: Vec<u32> = deck.cards().iter().map(|card| card.id()).collect();
        assert_eq!(simulate(deck).won, reference_game(13, 4, ids));
    }
}

#[test]
fn runner_matches_reference_with_shared_seed() {
    let (faces, suits) = (4, 2);
    let iterations = 5_000;
    let game = GameOptions::default().with_faces(faces).with_suits(suits);
    let options = TrialOptions::default()
        .with_iterations(iterations)
        .with_seed(31)
        .with_game(game);

    let summary = TrialRunner::new(options).unwrap().run_configured();

    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let mut successes = 0;
    for _ in 0..iterations {
        let mut ids: Vec<u32> = (0..faces * suits).collect();
        ids.shuffle(&mut rng);
        if reference_game(faces, suits, ids) {
            successes += 1;
        }
    }

    assert_eq!(summary.successes, successes);
    assert_eq!(summary.iterations, iterations);
}

#[test]
fn success_rate_within_band_of_reference() {
    let (faces, suits) = (2, 4);
    let iterations: u32 = 20_000;
    let game = GameOptions::default().with_faces(faces).with_suits(suits);
    let options = TrialOptions::default()
        .with_iterations(u64::from(iterations))
        .with_seed(1)
        .with_game(game);
    let observed = TrialRunner::new(options)
        .unwrap()
        .run_configured()
        .success_rate();

    let mut rng = ChaCha8Rng::seed_from_u64(0xBA5E);
    let mut successes = 0_u32;
    for _ in 0..iterations {
        let mut ids: Vec<u32> = (0..faces * suits).collect();
        ids.shuffle(&mut rng);
        if reference_game(faces, suits, ids) {
            successes += 1;
        }
    }
    let baseline = f64::from(successes) / f64::from(iterations);

    // Five standard errors of the difference of two proportions.
    let variance = 2.0 * baseline * (1.0 - baseline) / f64::from(iterations);
    let band = 5.0 * variance.sqrt() + 1e-3;
    assert!(
        (observed - baseline).abs() <= band,
        "observed {observed}, baseline {baseline}, band {band}"
    );
}

#[test]
fn invalid_decks_are_rejected() {
    let options = GameOptions::default().with_faces(2).with_suits(2);
    assert_eq!(
        Deck::from_draw_order(&options, cards(&[3, 2, 1, 0, 4])),
        Err(DeckError::WrongSize {
            expected: 4,
            actual: 5
        })
    );
    assert_eq!(
        Deck::from_draw_order(&options, cards(&[3, 3, 1, 0])),
        Err(DeckError::Duplicate(3))
    );
    assert_eq!(
        Deck::ordered(&options.with_faces(0)),
        Err(DeckError::Options(OptionsError::ZeroFaces))
    );
}

#[test]
fn summary_line_format() {
    let options = TrialOptions::default()
        .with_iterations(10)
        .with_seed(3)
        .with_game(GameOptions::default().with_faces(1).with_suits(1));
    let summary = TrialRunner::new(options).unwrap().run_configured();
    assert_eq!(summary.to_string(), "0/10 games won, 0.00% success rate");
}
