//! Round outcome resolution.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::hand::{Hand, HandStatus};

/// Outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    /// The round has not been resolved yet.
    NoResult,
    /// The player won.
    PlayerWin,
    /// The dealer won.
    DealerWin,
    /// The round was a push.
    Draw,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NoResult => "no_result",
            Self::PlayerWin => "player_win",
            Self::DealerWin => "dealer_win",
            Self::Draw => "draw",
        };
        f.write_str(label)
    }
}

/// A push is two naturals, or equal scores with no natural on either
/// side. A natural against a three-or-more-card 21 is a win, not a draw.
fn is_draw(
    player_score: u8,
    player_status: HandStatus,
    dealer_score: u8,
    dealer_status: HandStatus,
) -> bool {
    let both_blackjack =
        player_status == HandStatus::Blackjack && dealer_status == HandStatus::Blackjack;
    let equal_without_blackjack = player_score == dealer_score
        && player_status != HandStatus::Blackjack
        && dealer_status != HandStatus::Blackjack;
    both_blackjack || equal_without_blackjack
}

/// Resolves a finished round from both final hands.
///
/// The checks run in order: player bust loses outright (even if the
/// dealer also busted), dealer bust wins for the player, then pushes,
/// then blackjack or the higher score decides it. [`GameResult::NoResult`]
/// is the fall-through for states the earlier arms already cover; it is
/// never returned for resolvable hands.
#[must_use]
pub fn determine_result(player: &Hand, dealer: &Hand) -> GameResult {
    let player_score = player.score();
    let player_status = player.status();
    if player_status == HandStatus::Bust {
        return GameResult::DealerWin;
    }

    let dealer_score = dealer.score();
    let dealer_status = dealer.status();
    if dealer_status == HandStatus::Bust {
        return GameResult::PlayerWin;
    }

    if is_draw(player_score, player_status, dealer_score, dealer_status) {
        return GameResult::Draw;
    }

    if player_status == HandStatus::Blackjack || player_score > dealer_score {
        return GameResult::PlayerWin;
    }

    if dealer_status == HandStatus::Blackjack || dealer_score > player_score {
        return GameResult::DealerWin;
    }

    GameResult::NoResult
}
