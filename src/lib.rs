//! A one-handed solitaire simulator with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that plays a single game over an
//! already-shuffled [`Deck`], and a [`TrialRunner`] that repeats games over
//! freshly shuffled decks to estimate how often the whole deck is cleared.
//!
//! # Example
//!
//! ```
//! use onehand::{TrialOptions, TrialRunner};
//!
//! let options = TrialOptions::default().with_iterations(1_000).with_seed(42);
//! let mut runner = TrialRunner::new(options).unwrap();
//! let summary = runner.run_configured();
//! assert_eq!(summary.iterations, 1_000);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod trial;

// Re-export main types
pub use card::{Card, CardLabel};
pub use deck::Deck;
pub use error::{DeckError, OptionsError};
pub use game::{Game, GameState, Step, simulate};
pub use hand::{HAND_WINDOW, Hand};
pub use options::{GameOptions, STANDARD_FACES, STANDARD_SUITS, TrialOptions};
pub use result::{GameResult, TrialSummary};
pub use trial::TrialRunner;
