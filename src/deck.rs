//! Draw piles.

use alloc::vec;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::error::DeckError;
use crate::options::GameOptions;

/// A draw pile.
///
/// The deck is a stack: the last card is the top and is drawn first. It
/// remembers the layout it was built for so suits and ranks of its cards can
/// be read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    options: GameOptions,
}

impl Deck {
    /// Creates a deck holding every card of the layout in identifier order.
    ///
    /// The highest identifier is on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    pub fn ordered(options: &GameOptions) -> Result<Self, DeckError> {
        let size = options.validate()?;
        Ok(Self {
            cards: (0..size as u32).map(Card::new).collect(),
            options: *options,
        })
    }

    /// Creates a uniformly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    pub fn shuffled<R: Rng + ?Sized>(
        options: &GameOptions,
        rng: &mut R,
    ) -> Result<Self, DeckError> {
        let mut deck = Self::ordered(options)?;
        deck.shuffle(rng);
        Ok(deck)
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Creates a deck from cards in stack order (last element on top).
    ///
    /// # Errors
    ///
    /// Returns an error unless `cards` is exactly a permutation of the card
    /// set described by `options`.
    pub fn from_cards(options: &GameOptions, cards: Vec<Card>) -> Result<Self, DeckError> {
        let size = options.validate()?;
        if cards.len() != size {
            return Err(DeckError::WrongSize {
                expected: size,
                actual: cards.len(),
            });
        }

        let mut seen = vec![false; size];
        for card in &cards {
            let slot = seen
                .get_mut(card.id() as usize)
                .ok_or(DeckError::OutOfRange(card.id()))?;
            if *slot {
                return Err(DeckError::Duplicate(card.id()));
            }
            *slot = true;
        }

        Ok(Self {
            cards,
            options: *options,
        })
    }

    /// Creates a deck from cards in draw order (first element drawn first).
    ///
    /// ```
    /// use onehand::{Card, Deck, GameOptions};
    ///
    /// let options = GameOptions::default().with_faces(2).with_suits(1);
    /// let cards = vec![Card::new(1), Card::new(0)];
    /// let mut deck = Deck::from_draw_order(&options, cards).unwrap();
    /// assert_eq!(deck.draw(), Some(Card::new(1)));
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`Deck::from_cards`].
    pub fn from_draw_order(
        options: &GameOptions,
        mut cards: Vec<Card>,
    ) -> Result<Self, DeckError> {
        cards.reverse();
        Self::from_cards(options, cards)
    }

    /// Returns the layout this deck was built for.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Draws the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the remaining cards, top last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
