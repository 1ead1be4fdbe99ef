//! Game session and round flow.

use core::mem;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::HandStatus;
use crate::result::{GameResult, determine_result};
use crate::strategy::{Suggestion, suggest};

mod dealer;
pub mod state;

pub use state::{GameState, Turn};

/// A single-seat blackjack session.
///
/// Owns the RNG and the current round, and enforces turn order on top
/// of the pure state transitions. One session plays any number of
/// rounds; [`reset`](Self::reset) shuffles the next deck from the same
/// RNG stream, so a seed pins down the whole session.
#[derive(Debug)]
pub struct Game {
    /// Current round state.
    state: GameState,
    /// Outcome of the current round.
    result: GameResult,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a session from a seed and deals the first round.
    ///
    /// # Example
    ///
    /// ```
    /// use vingtun::{DECK_SIZE, Game, Turn};
    ///
    /// let game = Game::new(42);
    /// assert_eq!(game.state().turn(), Turn::Player);
    /// assert_eq!(game.state().card_count(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let state = GameState::deal(Deck::shuffled(&mut rng));
        Self {
            state,
            result: GameResult::NoResult,
            rng,
        }
    }

    /// Creates a session whose first round is dealt from the given deck
    /// instead of a shuffled one.
    ///
    /// Later calls to [`reset`](Self::reset) shuffle fresh decks from
    /// the seeded RNG as usual. Intended for deterministic harnesses
    /// and replays.
    ///
    /// # Panics
    ///
    /// Panics if the deck holds fewer than four cards. A stacked deck
    /// that survives the deal can still make a later
    /// [`hit`](Self::hit) panic once it runs out.
    #[must_use]
    pub fn with_deck(deck: Deck, seed: u64) -> Self {
        Self {
            state: GameState::deal(deck),
            result: GameResult::NoResult,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Abandons the current round and deals a new one from a freshly
    /// shuffled full deck.
    pub fn reset(&mut self) {
        self.state = GameState::deal(Deck::shuffled(&mut self.rng));
        self.result = GameResult::NoResult;
    }

    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state.turn() == Turn::Player {
            Ok(())
        } else {
            Err(ActionError::NotPlayerTurn)
        }
    }

    /// Draws a card for the player.
    ///
    /// Reaching 21 does not end the turn; the player acts until they
    /// stand. Busting ends the round on the spot: the turn flips, the
    /// dealer draws nothing, and the result is recorded.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NotPlayerTurn`] once the round has passed
    /// to the dealer.
    ///
    /// # Panics
    ///
    /// Panics if the deck is empty when the card is drawn, which only a
    /// short deck from [`with_deck`](Self::with_deck) can set up.
    pub fn hit(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        let mut state = mem::replace(&mut self.state, GameState::placeholder()).player_hits();
        if state.player_hand().status() == HandStatus::Bust {
            state = state.player_stands();
            self.result = determine_result(state.player_hand(), state.dealer_hand());
        }
        self.state = state;

        Ok(())
    }

    /// Stands, plays out the dealer's hand, and resolves the round.
    ///
    /// Standing on a natural resolves like any other stand; the dealer
    /// still draws out before the hands are compared.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NotPlayerTurn`] once the round has passed
    /// to the dealer.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        let state = mem::replace(&mut self.state, GameState::placeholder())
            .player_stands()
            .dealers_turn();
        self.result = determine_result(state.player_hand(), state.dealer_hand());
        self.state = state;

        Ok(())
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the recorded outcome, [`GameResult::NoResult`] while the
    /// round is still being played.
    #[must_use]
    pub const fn result(&self) -> GameResult {
        self.result
    }

    /// Returns whether the round has ended and the result is recorded.
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.state.turn() == Turn::Dealer
    }

    /// Advises hit or stand for the current state.
    ///
    /// Purely advisory; the session accepts any legal action regardless
    /// of the advice.
    #[must_use]
    pub fn suggestion(&self) -> Suggestion {
        suggest(&self.state)
    }
}
