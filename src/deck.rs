//! Deck construction, shuffling, and drawing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered stack of cards.
///
/// The top of the deck is the **last** element, so drawing is a pop from
/// the back. Serializes as a plain array of cards, bottom first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled single deck: every suit crossed with every
    /// rank, in [`Suit::ALL`] and [`Rank::ALL`] order.
    ///
    /// # Example
    ///
    /// ```
    /// use vingtun::{DECK_SIZE, Deck};
    ///
    /// assert_eq!(Deck::fresh().len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn fresh() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a fresh deck and shuffles it with the given RNG.
    #[must_use]
    pub fn shuffled(rng: &mut impl Rng) -> Self {
        let mut deck = Self::fresh();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the deck in place.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Panics
    ///
    /// Panics if the deck is empty.
    pub fn take(&mut self) -> Card {
        match self.cards.pop() {
            Some(card) => card,
            None => panic!("take from an empty deck"),
        }
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Deck {
    /// Builds a deck from explicit cards, bottom first. The last card of
    /// the vector is the first one drawn. Intended for stacked decks in
    /// tests and replays.
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
