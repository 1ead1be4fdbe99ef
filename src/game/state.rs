//! Round state and its pure transitions.

use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;

/// Whose action is legal right now.
///
/// The marker flips to the dealer exactly once per round, when the
/// player stands (or busts through the session API). It never flips
/// back; a new round starts from a fresh state instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    /// The player may hit or stand.
    #[serde(rename = "player_turn")]
    Player,
    /// The dealer is drawing out, or the round is over.
    #[serde(rename = "dealer_turn")]
    Dealer,
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Player => "player_turn",
            Self::Dealer => "dealer_turn",
        };
        f.write_str(label)
    }
}

/// The full state of one round: both hands, the remaining deck, and the
/// turn marker.
///
/// States are values. Transitions consume the state and return the
/// successor, so a caller can keep earlier states around for replay or
/// inspection simply by cloning before the move. Serializes with its
/// hands and deck as card arrays; there is no deserializer, so every
/// state in circulation originated from [`GameState::deal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    player_hand: Hand,
    dealer_hand: Hand,
    deck: Deck,
    turn: Turn,
}

impl GameState {
    /// Deals a round from the given deck: two cards to the player, then
    /// two to the dealer, with the turn on the player.
    ///
    /// The first dealer card is the up-card; the second stays face down
    /// until the round resolves.
    ///
    /// # Panics
    ///
    /// Panics if the deck holds fewer than four cards.
    #[must_use]
    pub fn deal(mut deck: Deck) -> Self {
        let mut player_hand = Hand::new();
        player_hand.add_card(deck.take());
        player_hand.add_card(deck.take());

        let mut dealer_hand = Hand::new();
        dealer_hand.add_card(deck.take());
        dealer_hand.add_card(deck.take());

        Self {
            player_hand,
            dealer_hand,
            deck,
            turn: Turn::Player,
        }
    }

    /// Placeholder swapped in while a consuming transition runs.
    pub(super) fn placeholder() -> Self {
        Self {
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            deck: Deck::from(Vec::new()),
            turn: Turn::Player,
        }
    }

    /// Draws the top card into the player's hand.
    ///
    /// This is the state-level move only: it does not check whose turn
    /// it is and does not classify the resulting hand. Gating and
    /// bust handling live in the session layer.
    ///
    /// # Panics
    ///
    /// Panics if the deck is empty.
    #[must_use]
    pub fn player_hits(mut self) -> Self {
        let card = self.deck.take();
        self.player_hand.add_card(card);
        self
    }

    /// Ends the player's turn by flipping the turn marker.
    #[must_use]
    pub fn player_stands(mut self) -> Self {
        self.turn = Turn::Dealer;
        self
    }

    /// Draws the top card into the dealer's hand.
    pub(crate) fn dealer_hits(mut self) -> Self {
        let card = self.deck.take();
        self.dealer_hand.add_card(card);
        self
    }

    /// Returns the player's hand.
    #[must_use]
    pub fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand, up-card first.
    #[must_use]
    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the remaining deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns whose action is legal.
    #[must_use]
    pub const fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns the dealer's face-up card, the first one dealt to the
    /// dealer. Every dealt state has one.
    #[must_use]
    pub fn dealer_up_card(&self) -> Card {
        self.dealer_hand.cards()[0]
    }

    /// Total cards across both hands and the deck.
    ///
    /// Transitions move cards but never create or drop them, so for a
    /// round dealt from a full deck this stays [`crate::DECK_SIZE`].
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.player_hand.len() + self.dealer_hand.len() + self.deck.len()
    }
}
