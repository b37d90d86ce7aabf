//! Error types for game operations.
//!
//! Reaching the winning score is not an error; see
//! [`WinningScore`](crate::result::WinningScore).

use thiserror::Error;

/// Errors that can occur while parsing a card spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The spec is empty.
    #[error("card spec is empty")]
    Empty,
    /// The rank token is not one of A, 2-10, J, Q, K.
    #[error("invalid rank in card spec")]
    InvalidRank,
    /// The suit token is not one of S, H, D, C.
    #[error("invalid suit in card spec")]
    InvalidSuit,
}

/// Errors that can occur when manipulating a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The card is not in the hand.
    #[error("card not found in hand")]
    NotFound,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors reported by a card selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The selector gave up after too many rejected responses.
    #[error("no valid selection after {0} attempts")]
    AttemptsExhausted(usize),
    /// There were fewer eligible cards than the number requested.
    #[error("not enough eligible cards to choose from")]
    NotEnoughCards,
}

/// Errors that can occur while a player picks cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// The selector failed.
    #[error(transparent)]
    Selection(#[from] SelectionError),
    /// The selector picked a card the player cannot give.
    #[error("selected card not found in hand")]
    CardNotFound,
    /// The selector picked the wrong number of cards.
    #[error("expected {expected} cards, selector returned {actual}")]
    WrongCount {
        /// Number of cards requested.
        expected: usize,
        /// Number of cards returned.
        actual: usize,
    },
}

impl From<HandError> for PlayerError {
    fn from(_: HandError) -> Self {
        Self::CardNotFound
    }
}

/// Errors that can occur while driving a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Invalid game state for this step.
    #[error("invalid game state for this step")]
    InvalidState,
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player could not provide cards.
    #[error(transparent)]
    Player(#[from] PlayerError),
}
