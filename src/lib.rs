//! A single-deck blackjack rules engine with optional `no_std` support.
//!
//! The crate has two layers. The bottom layer is pure values: [`Deck`],
//! [`Hand`], and [`GameState`] with consuming transitions, plus the
//! [`determine_result`] showdown resolver and the [`suggest`] advisor.
//! On top sits [`Game`], a seeded session that deals rounds, enforces
//! turn order, and records the outcome.
//!
//! Scoring follows the house's quirky ace rule: cards are valued in
//! deal order with an ace worth 11 only while the running total is 10
//! or less, and multi-ace hands that finish over 21 get exactly one
//! 10-point reduction.
//!
//! # Example
//!
//! ```
//! use vingtun::{Game, GameResult, Suggestion};
//!
//! let mut game = Game::new(42);
//! while !game.is_round_over() && game.suggestion() == Suggestion::Hit {
//!     game.hit().unwrap();
//! }
//! if !game.is_round_over() {
//!     game.stand().unwrap();
//! }
//! assert_ne!(game.result(), GameResult::NoResult);
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
pub mod result;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::ActionError;
pub use game::{Game, GameState, Turn};
pub use hand::{Hand, HandStatus, card_value};
pub use result::{GameResult, determine_result};
pub use strategy::{Suggestion, suggest};
