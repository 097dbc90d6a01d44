//! Game and trial configuration options.

use crate::error::OptionsError;

/// Faces per suit in a standard deck.
pub const STANDARD_FACES: u32 = 13;

/// Suits in a standard deck.
pub const STANDARD_SUITS: u32 = 4;

/// Iterations run when none are configured.
pub const DEFAULT_ITERATIONS: u64 = 1_000_000;

/// Layout of the card set for a single game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use onehand::GameOptions;
///
/// let options = GameOptions::default().with_faces(6).with_suits(2);
/// assert_eq!(options.deck_size(), Some(12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of ranks per suit.
    pub faces: u32,
    /// Number of suits.
    pub suits: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            faces: STANDARD_FACES,
            suits: STANDARD_SUITS,
        }
    }
}

impl GameOptions {
    /// Sets the number of ranks per suit.
    ///
    /// # Example
    ///
    /// ```
    /// use onehand::GameOptions;
    ///
    /// let options = GameOptions::default().with_faces(10);
    /// assert_eq!(options.faces, 10);
    /// ```
    #[must_use]
    pub const fn with_faces(mut self, faces: u32) -> Self {
        self.faces = faces;
        self
    }

    /// Sets the number of suits.
    ///
    /// # Example
    ///
    /// ```
    /// use onehand::GameOptions;
    ///
    /// let options = GameOptions::default().with_suits(5);
    /// assert_eq!(options.suits, 5);
    /// ```
    #[must_use]
    pub const fn with_suits(mut self, suits: u32) -> Self {
        self.suits = suits;
        self
    }

    /// Returns the number of cards in the deck, or `None` on overflow.
    #[must_use]
    pub const fn deck_size(&self) -> Option<usize> {
        match self.faces.checked_mul(self.suits) {
            Some(size) => Some(size as usize),
            None => None,
        }
    }

    /// Checks that the layout describes a playable card set.
    ///
    /// Returns the deck size on success.
    ///
    /// # Errors
    ///
    /// Returns an error if either count is zero or the deck is too large to
    /// number its cards.
    pub const fn validate(&self) -> Result<usize, OptionsError> {
        if self.faces == 0 {
            return Err(OptionsError::ZeroFaces);
        }
        if self.suits == 0 {
            return Err(OptionsError::ZeroSuits);
        }
        match self.deck_size() {
            Some(size) => Ok(size),
            None => Err(OptionsError::DeckTooLarge {
                faces: self.faces,
                suits: self.suits,
            }),
        }
    }

    /// Returns whether a full clear is possible at all.
    ///
    /// Cards leave play in pairs or fours, so a deck with an odd number of
    /// cards can never be cleared.
    #[must_use]
    pub const fn can_clear(&self) -> bool {
        match self.deck_size() {
            Some(size) => size % 2 == 0,
            None => false,
        }
    }

    /// Returns whether this is the standard 13 by 4 layout.
    #[must_use]
    pub const fn is_standard(&self) -> bool {
        self.faces == STANDARD_FACES && self.suits == STANDARD_SUITS
    }
}

/// Configuration for a batch of independent games.
///
/// ```
/// use onehand::{GameOptions, TrialOptions};
///
/// let options = TrialOptions::default()
///     .with_iterations(500)
///     .with_seed(7)
///     .with_game(GameOptions::default().with_faces(8));
/// assert_eq!(options.iterations, 500);
/// assert_eq!(options.game.faces, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrialOptions {
    /// Number of games to play.
    pub iterations: u64,
    /// Seed for the shuffling generator.
    pub seed: u64,
    /// Card set layout.
    pub game: GameOptions,
}

impl Default for TrialOptions {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: 0,
            game: GameOptions::default(),
        }
    }
}

impl TrialOptions {
    /// Sets the number of games to play.
    ///
    /// # Example
    ///
    /// ```
    /// use onehand::TrialOptions;
    ///
    /// let options = TrialOptions::default().with_iterations(10);
    /// assert_eq!(options.iterations, 10);
    /// ```
    #[must_use]
    pub const fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the seed for the shuffling generator.
    ///
    /// # Example
    ///
    /// ```
    /// use onehand::TrialOptions;
    ///
    /// let options = TrialOptions::default().with_seed(99);
    /// assert_eq!(options.seed, 99);
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the card set layout.
    #[must_use]
    pub const fn with_game(mut self, game: GameOptions) -> Self {
        self.game = game;
        self
    }
}
