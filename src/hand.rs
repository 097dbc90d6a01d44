//! The cards in play.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::options::GameOptions;

/// Number of cards the fill phase deals up to, and the width of the match
/// window (last card against the fourth from last).
pub const HAND_WINDOW: usize = 4;

/// The cards in play, oldest first.
///
/// The hand is a stack: new cards go on the end and every match looks at the
/// last [`HAND_WINDOW`] cards. It can hold more than four cards after an
/// unmatched extra draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the end of the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, oldest first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand holds a full match window.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= HAND_WINDOW
    }

    /// Returns the most recently added card.
    #[must_use]
    pub fn last(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Returns the card three positions before the last.
    #[must_use]
    pub fn fourth_from_last(&self) -> Option<Card> {
        let index = self.cards.len().checked_sub(HAND_WINDOW)?;
        self.cards.get(index).copied()
    }

    /// Removes the two cards between the last card and the fourth from last.
    ///
    /// The outer pair stays in play, now adjacent. Returns the removed cards
    /// oldest first, or `None` if the hand has fewer than four cards.
    pub fn discard_middle_pair(&mut self) -> Option<[Card; 2]> {
        let start = self.cards.len().checked_sub(HAND_WINDOW)? + 1;
        let second = self.cards.remove(start + 1);
        let first = self.cards.remove(start);
        Some([first, second])
    }

    /// Removes the last four cards.
    ///
    /// Returns the removed cards oldest first, or `None` if the hand has
    /// fewer than four cards.
    pub fn discard_top_four(&mut self) -> Option<[Card; 4]> {
        let start = self.cards.len().checked_sub(HAND_WINDOW)?;
        let top = self.cards.split_off(start);
        top.try_into().ok()
    }

    /// Returns a display adapter that prints the hand as card labels.
    #[must_use]
    pub fn display<'a>(&'a self, options: &'a GameOptions) -> HandDisplay<'a> {
        HandDisplay {
            cards: self.cards.as_slice(),
            options,
        }
    }
}

/// Display adapter returned by [`Hand::display`].
#[derive(Debug, Clone, Copy)]
pub struct HandDisplay<'a> {
    cards: &'a [Card],
    options: &'a GameOptions,
}

impl fmt::Display for HandDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("(empty)");
        }
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", card.label(self.options))?;
        }
        Ok(())
    }
}
