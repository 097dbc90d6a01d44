//! Game state types.

use crate::card::Card;
use crate::result::GameResult;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Cards remain to be drawn.
    Playing,
    /// Every card was discarded.
    Won,
    /// The deck ran out with cards still in play.
    Lost,
}

impl GameState {
    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// What a single pass of the main loop did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The last card and the fourth from last share a suit. The two cards
    /// between them were discarded.
    SuitMatch {
        /// The matched pair, older card first. Both stay in play.
        kept: [Card; 2],
        /// The discarded cards, older card first.
        discarded: [Card; 2],
    },
    /// The last card and the fourth from last share a rank. All four were
    /// discarded.
    RankMatch {
        /// The discarded cards, oldest first.
        discarded: [Card; 4],
    },
    /// No match. One extra card was drawn onto the hand.
    Dealt(Card),
    /// The game is over.
    Finished(GameResult),
}
