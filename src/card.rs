//! Card identifiers and their derived attributes.

use core::fmt;

use crate::options::GameOptions;

/// A playing card.
///
/// Cards are plain identifiers in `0..faces * suits`. Suit and rank are
/// derived from the identifier and the deck layout, so the same card can be
/// read under different [`GameOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(u32);

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the identifier against any
    /// layout. Use [`crate::Deck::from_cards`] to build a checked deck.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the card identifier.
    #[must_use]
    pub const fn id(self) -> u32 {
        self.0
    }

    /// Returns the suit index (`id mod suits`).
    #[must_use]
    pub const fn suit(self, options: &GameOptions) -> u32 {
        self.0 % options.suits
    }

    /// Returns the rank index (`id mod faces`).
    #[must_use]
    pub const fn rank(self, options: &GameOptions) -> u32 {
        self.0 % options.faces
    }

    /// Returns a printable label for this card under the given layout.
    ///
    /// ```
    /// use onehand::{Card, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// assert_eq!(Card::new(0).label(&options).to_string(), "AH");
    /// assert_eq!(Card::new(51).label(&options).to_string(), "KS");
    /// ```
    #[must_use]
    pub const fn label(self, options: &GameOptions) -> CardLabel {
        CardLabel {
            rank: self.rank(options),
            suit: self.suit(options),
            standard: options.is_standard(),
        }
    }
}

impl From<u32> for Card {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Display adapter returned by [`Card::label`].
///
/// Standard decks print as face then suit (`AH`, `~D`, `KS`, with `~` for
/// ten). Other layouts print as `r<rank>s<suit>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLabel {
    rank: u32,
    suit: u32,
    standard: bool,
}

impl fmt::Display for CardLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.standard {
            return write!(f, "r{}s{}", self.rank, self.suit);
        }

        match self.rank {
            0 => f.write_str("A")?,
            1..=8 => write!(f, "{}", self.rank + 1)?,
            9 => f.write_str("~")?,
            10 => f.write_str("J")?,
            11 => f.write_str("Q")?,
            12 => f.write_str("K")?,
            _ => f.write_str("_")?,
        }

        let suit = match self.suit {
            0 => "H",
            1 => "D",
            2 => "C",
            3 => "S",
            _ => "_",
        };
        f.write_str(suit)
    }
}
