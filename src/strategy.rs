//! Basic-strategy hit/stand advisor.
//!
//! The advice is a reduced basic-strategy table covering hit and stand
//! only. It never suggests doubling, splitting, or surrendering, and it
//! is purely advisory: the session accepts any legal action regardless
//! of what the advisor says.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::game::GameState;
use crate::hand::card_value;

/// Advice for the player's next action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suggestion {
    /// Take another card.
    Hit,
    /// Stop drawing.
    Stand,
    /// No advice computed. Serializes as the empty string.
    #[serde(rename = "")]
    Empty,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Hit => "Hit",
            Self::Stand => "Stand",
            Self::Empty => "",
        };
        f.write_str(label)
    }
}

/// Hit rules for soft totals (any hand holding an ace).
fn soft_hit(player: u8, dealer: u8) -> bool {
    ((13..=16).contains(&player) && (4..=6).contains(&dealer))
        || (player == 17 && dealer <= 7)
        || (player == 18 && (dealer == 9 || dealer == 10))
        || (player == 19 && dealer == 6)
}

/// Hit rules for hard totals.
fn hard_hit(player: u8, dealer: u8) -> bool {
    (5..=7).contains(&player)
        || (player == 8 && (dealer == 5 || dealer == 6))
        || (player == 9 && (2..=6).contains(&dealer))
        || (player == 10 && dealer != 10 && dealer != 11)
        || ((player == 13 || player == 14) && (2..=6).contains(&dealer))
        || (player == 16 && !(2..=6).contains(&dealer))
}

/// Advises hit or stand from the player's score and the dealer's
/// up-card.
///
/// The up-card is valued as the opening card of a fresh hand, so an ace
/// counts as 11. Hands holding an ace consult the soft table first and
/// fall back to the hard table; totals no rule matches stand.
///
/// # Example
///
/// ```
/// use vingtun::{Card, Deck, GameState, Rank, Suggestion, Suit, suggest};
///
/// let deck = Deck::from(vec![
///     Card::new(Suit::Clubs, Rank::Nine),   // dealer hole card
///     Card::new(Suit::Hearts, Rank::Five),  // dealer up-card
///     Card::new(Suit::Clubs, Rank::Six),    // player
///     Card::new(Suit::Hearts, Rank::Seven), // player
/// ]);
/// let state = GameState::deal(deck);
/// assert_eq!(suggest(&state), Suggestion::Hit);
/// ```
#[must_use]
pub fn suggest(state: &GameState) -> Suggestion {
    let player = state.player_hand();
    let score = player.score();
    let dealer = card_value(state.dealer_up_card(), 0);

    if (player.has_ace() && soft_hit(score, dealer)) || hard_hit(score, dealer) {
        Suggestion::Hit
    } else {
        Suggestion::Stand
    }
}
