//! Repeated independent games over freshly shuffled decks.

use log::{info, trace, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::DeckError;
use crate::game::Game;
use crate::options::{GameOptions, TrialOptions};
use crate::result::{GameResult, TrialSummary};

/// Plays many games and counts how many clear the deck.
///
/// Each game gets its own uniformly shuffled deck drawn from the runner's
/// generator. Games share nothing else, so two runners can be driven on
/// separate threads and their summaries combined with
/// [`TrialSummary::merge`].
///
/// # Example
///
/// ```
/// use onehand::{GameOptions, TrialOptions, TrialRunner};
///
/// let options = TrialOptions::default()
///     .with_game(GameOptions::default().with_faces(2).with_suits(2))
///     .with_seed(5);
/// let mut runner = TrialRunner::new(options).unwrap();
/// let summary = runner.run(100);
/// assert_eq!(summary.to_string(), "0/100 games won, 0.00% success rate");
/// ```
#[derive(Debug, Clone)]
pub struct TrialRunner<R = ChaCha8Rng> {
    options: GameOptions,
    iterations: u64,
    /// An ordered deck, cloned and shuffled for every game.
    template: Deck,
    rng: R,
}

impl TrialRunner<ChaCha8Rng> {
    /// Creates a runner seeded from `options.seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the game options are invalid.
    pub fn new(options: TrialOptions) -> Result<Self, DeckError> {
        let rng = ChaCha8Rng::seed_from_u64(options.seed);
        let mut runner = Self::with_rng(options.game, rng)?;
        runner.iterations = options.iterations;
        Ok(runner)
    }
}

impl<R: Rng> TrialRunner<R> {
    /// Creates a runner that shuffles with the given generator.
    ///
    /// # Errors
    ///
    /// Returns an error if the game options are invalid.
    pub fn with_rng(options: GameOptions, rng: R) -> Result<Self, DeckError> {
        let template = Deck::ordered(&options)?;
        if !options.can_clear() {
            warn!(
                "a deck of {} cards can never be cleared; every game will be lost",
                template.len()
            );
        }
        Ok(Self {
            options,
            iterations: 0,
            template,
            rng,
        })
    }

    /// Returns the card set layout.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Plays a single game over a fresh shuffle.
    pub fn run_one(&mut self) -> GameResult {
        let mut deck = self.template.clone();
        deck.shuffle(&mut self.rng);
        let result = Game::new(deck).play();
        trace!("game finished: {result:?}");
        result
    }

    /// Plays `iterations` games and returns the tally.
    pub fn run(&mut self, iterations: u64) -> TrialSummary {
        info!(
            "running {iterations} games with {} faces by {} suits",
            self.options.faces, self.options.suits
        );
        let mut summary = TrialSummary::new();
        for _ in 0..iterations {
            summary.record(self.run_one().won);
        }
        info!("{summary}");
        summary
    }

    /// Plays the number of games the runner was configured with.
    ///
    /// Runners built with [`TrialRunner::with_rng`] are configured for zero
    /// games.
    pub fn run_configured(&mut self) -> TrialSummary {
        self.run(self.iterations)
    }
}
