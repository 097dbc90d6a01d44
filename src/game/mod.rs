//! Single-game simulation.

use log::{debug, trace};

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::GameResult;

pub mod state;

pub use state::{GameState, Step};

/// One game of one-handed solitaire over a fixed deck.
///
/// The game owns the deck and the hand. It has no randomness of its own:
/// the same deck always plays out the same way.
///
/// # Example
///
/// ```
/// use onehand::{Deck, Game, GameOptions};
///
/// let options = GameOptions::default();
/// let deck = Deck::ordered(&options).unwrap();
/// let result = Game::new(deck).play();
/// assert_eq!(result.draws, 52);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
    deck: Deck,
    hand: Hand,
    /// Cards discarded through matches.
    discarded: usize,
    /// Cards drawn from the deck.
    draws: usize,
    total: usize,
    state: GameState,
}

impl Game {
    /// Creates a game that will play through `deck`.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            options: *deck.options(),
            total: deck.len(),
            deck,
            hand: Hand::new(),
            discarded: 0,
            draws: 0,
            state: GameState::Playing,
        }
    }

    /// Returns the card set layout.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the cards in play.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the number of cards discarded so far.
    #[must_use]
    pub const fn discarded(&self) -> usize {
        self.discarded
    }

    /// Returns the number of cards drawn so far.
    #[must_use]
    pub const fn draws(&self) -> usize {
        self.draws
    }

    /// Returns the size of the card set.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.total
    }

    /// Returns the final result, or `None` while the game is still running.
    #[must_use]
    pub const fn result(&self) -> Option<GameResult> {
        if self.state.is_finished() {
            Some(self.snapshot())
        } else {
            None
        }
    }

    /// Runs one pass of the main loop.
    ///
    /// A pass tops the hand up to four cards, then compares the last card
    /// with the fourth from last. A shared suit discards the two cards
    /// between them, a shared rank discards all four, and otherwise one
    /// more card is drawn. The game ends when the deck is empty at the
    /// start of a pass, when it runs out before the hand is full, or when
    /// nothing matches and there is nothing left to draw.
    ///
    /// Once the game has ended every call returns the same
    /// [`Step::Finished`].
    pub fn step(&mut self) -> Step {
        let step = self.advance();
        debug_assert_eq!(
            self.deck.len() + self.hand.len() + self.discarded,
            self.total,
            "cards must stay in exactly one of deck, hand, or discard"
        );
        step
    }

    /// Plays the game to the end.
    #[must_use]
    pub fn play(mut self) -> GameResult {
        loop {
            if let Step::Finished(result) = self.step() {
                return result;
            }
        }
    }

    fn advance(&mut self) -> Step {
        if let Some(result) = self.result() {
            return Step::Finished(result);
        }
        if self.deck.is_empty() {
            return self.finish();
        }

        // Fill phase: a short hand is allowed if the deck runs out.
        while !self.hand.is_full() {
            let Some(card) = self.draw() else { break };
            self.hand.push(card);
            if self.deck.is_empty() {
                break;
            }
        }

        if self.deck.is_empty() && !self.hand.is_full() {
            return self.finish();
        }

        let (Some(oldest), Some(newest)) = (self.hand.fourth_from_last(), self.hand.last())
        else {
            return self.finish();
        };
        trace!(
            "hand {} ({} left in deck)",
            self.hand.display(&self.options),
            self.deck.len()
        );

        if oldest.suit(&self.options) == newest.suit(&self.options) {
            if let Some(discarded) = self.hand.discard_middle_pair() {
                self.discarded += discarded.len();
                trace!("suit match, {} in play", self.hand.len());
                return Step::SuitMatch {
                    kept: [oldest, newest],
                    discarded,
                };
            }
        } else if oldest.rank(&self.options) == newest.rank(&self.options) {
            if let Some(discarded) = self.hand.discard_top_four() {
                self.discarded += discarded.len();
                trace!("rank match, {} in play", self.hand.len());
                return Step::RankMatch { discarded };
            }
        } else if let Some(card) = self.draw() {
            self.hand.push(card);
            trace!("no match, dealt {}", card.label(&self.options));
            return Step::Dealt(card);
        }

        self.finish()
    }

    fn draw(&mut self) -> Option<Card> {
        let card = self.deck.draw()?;
        self.draws += 1;
        Some(card)
    }

    fn finish(&mut self) -> Step {
        self.state = if self.discarded == self.total {
            GameState::Won
        } else {
            GameState::Lost
        };
        debug!(
            "game over: {:?}, discarded {}/{} after {} draws",
            self.state, self.discarded, self.total, self.draws
        );
        Step::Finished(self.snapshot())
    }

    const fn snapshot(&self) -> GameResult {
        GameResult {
            won: self.discarded == self.total,
            discarded: self.discarded,
            draws: self.draws,
        }
    }
}

/// Plays one game over `deck` and returns the result.
#[must_use]
pub fn simulate(deck: Deck) -> GameResult {
    Game::new(deck).play()
}
