//! Hand scoring and status classification.

use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::card::{Card, Rank};

/// Returns the points a card contributes given the total scored so far.
///
/// Number cards are worth their face value and court cards are worth 10.
/// An ace is worth 11 while the running total is 10 or less, and 1
/// otherwise. Because the running total feeds back into each step, a
/// hand's score depends on the order its cards were dealt.
#[must_use]
pub const fn card_value(card: Card, running_total: u8) -> u8 {
    match card.rank {
        Rank::Ace => {
            if running_total <= 10 {
                11
            } else {
                1
            }
        }
        Rank::Jack | Rank::Queen | Rank::King => 10,
        numeral => numeral as u8,
    }
}

/// Hand status, derived from the cards on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandStatus {
    /// The hand can keep playing.
    Active,
    /// A natural: exactly two cards totalling 21.
    Blackjack,
    /// The hand went over 21.
    Bust,
}

impl fmt::Display for HandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Active => "active",
            Self::Blackjack => "blackjack",
            Self::Bust => "bust",
        };
        f.write_str(label)
    }
}

/// The cards held by one seat, in deal order.
///
/// Serializes as a plain array of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand contains at least one ace.
    #[must_use]
    pub fn has_ace(&self) -> bool {
        self.cards.iter().any(|card| card.rank == Rank::Ace)
    }

    /// Scores the hand.
    ///
    /// Cards are folded in deal order through [`card_value`], then a hand
    /// holding more than one ace gets a single 10-point reduction if it
    /// finished over 21. There is no further demotion, so some multi-ace
    /// hands keep a bust score a re-scoring player would avoid.
    ///
    /// # Example
    ///
    /// ```
    /// use vingtun::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Suit::Hearts, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Spades, Rank::King));
    /// assert_eq!(hand.score(), 21);
    /// assert!(hand.is_blackjack());
    /// ```
    #[must_use]
    pub fn score(&self) -> u8 {
        let mut aces: u8 = 0;
        let mut score: u8 = 0;

        for card in &self.cards {
            if card.rank == Rank::Ace {
                aces += 1;
            }
            score = score.saturating_add(card_value(*card, score));
        }

        if aces > 1 && score > 21 {
            score -= 10;
        }

        score
    }

    /// Returns whether the hand is a natural: exactly two cards
    /// totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == 21
    }

    /// Classifies the hand from its current cards.
    ///
    /// A 21 reached with three or more cards stays [`HandStatus::Active`];
    /// only a natural is [`HandStatus::Blackjack`].
    #[must_use]
    pub fn status(&self) -> HandStatus {
        let score = self.score();
        if self.is_blackjack() {
            HandStatus::Blackjack
        } else if score > 21 {
            HandStatus::Bust
        } else {
            HandStatus::Active
        }
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Card>> for Hand {
    /// Builds a hand from cards already in deal order.
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
