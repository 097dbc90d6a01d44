//! Error types for configuration and deck construction.

use thiserror::Error;

/// Errors that can occur when validating game options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Face count is zero.
    #[error("face count must be at least 1")]
    ZeroFaces,
    /// Suit count is zero.
    #[error("suit count must be at least 1")]
    ZeroSuits,
    /// Deck size does not fit in a card identifier.
    #[error("deck of {faces} faces by {suits} suits is too large")]
    DeckTooLarge {
        /// Requested face count.
        faces: u32,
        /// Requested suit count.
        suits: u32,
    },
}

/// Errors that can occur when building a deck from explicit cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Invalid game options.
    #[error(transparent)]
    Options(#[from] OptionsError),
    /// Number of cards differs from the deck size.
    #[error("expected {expected} cards, got {actual}")]
    WrongSize {
        /// Deck size implied by the options.
        expected: usize,
        /// Number of cards supplied.
        actual: usize,
    },
    /// Card identifier is outside the card set.
    #[error("card {0} is outside the card set")]
    OutOfRange(u32),
    /// Card appears more than once.
    #[error("card {0} appears more than once")]
    Duplicate(u32),
}
