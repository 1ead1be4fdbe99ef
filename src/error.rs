//! Error types for session actions.

use thiserror::Error;

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The round has passed to the dealer.
    #[error("not the player's turn")]
    NotPlayerTurn,
}
