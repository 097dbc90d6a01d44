//! Steps through a single game, one pass of the main loop per line.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use onehand::{Card, Deck, Game, GameOptions, GameState, Step};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    println!("One-handed solitaire walkthrough (enter to step, 'r' to run out, 'q' to quit)");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    println!("Seed: {seed}");

    let options = GameOptions::default();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let deck = match Deck::shuffled(&options, &mut rng) {
        Ok(deck) => deck,
        Err(err) => {
            println!("Deck error: {err}");
            return;
        }
    };
    let mut game = Game::new(deck);
    let mut interactive = true;

    loop {
        if interactive {
            match prompt_line("> ").as_str() {
                "q" | "quit" => break,
                "r" | "run" => interactive = false,
                _ => {}
            }
        }

        let step = game.step();
        print_step(&game, &step);

        if let Step::Finished(result) = step {
            match game.state() {
                GameState::Won => println!("Deck cleared!"),
                _ => println!(
                    "Stuck with {} cards in play ({} discarded).",
                    game.hand().len(),
                    result.discarded
                ),
            }
            break;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_step(game: &Game, step: &Step) {
    let options = game.options();
    let action = match step {
        Step::SuitMatch { kept, discarded } => format!(
            "suit  {} .. {} drops {} {}",
            format_card(kept[0], options),
            format_card(kept[1], options),
            format_card(discarded[0], options),
            format_card(discarded[1], options),
        ),
        Step::RankMatch { discarded } => format!(
            "rank  drops {}",
            discarded
                .iter()
                .map(|card| format_card(*card, options))
                .collect::<Vec<_>>()
                .join(" ")
        ),
        Step::Dealt(card) => format!("deal  {}", format_card(*card, options)),
        Step::Finished(_) => "over".to_string(),
    };

    println!(
        "{action:<28} | deck {:>2} | hand {}",
        game.cards_remaining(),
        format_hand(game)
    );
}

fn format_hand(game: &Game) -> String {
    let cards = game.hand().cards();
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards
        .iter()
        .map(|card| format_card(*card, game.options()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card, options: &GameOptions) -> String {
    let color_code = match card.suit(options) {
        0 | 1 => "31",
        2 => "32",
        _ => "34",
    };
    colorize(&card.label(options).to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
