//! Game state types.

use crate::result::GameOver;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the next deal.
    Ready,
    /// Hands are dealt; players discard into the crib.
    Discarding,
    /// The crib is full; the starter card is cut next.
    Cutting,
    /// The play (pegging) phase.
    Playing,
    /// Hands and crib are counted next.
    Showing,
    /// The hand has been counted; cards are collected and the crib moves.
    HandComplete,
    /// A player reached the win threshold.
    Finished,
}

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The first player.
    One,
    /// The second player.
    Two,
}

impl Seat {
    /// Both seats.
    pub const ALL: [Self; 2] = [Self::One, Self::Two];

    /// Returns the opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Returns the seat's index into per-seat arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

/// Outcome of a game step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Progress {
    /// The game goes on.
    Continue,
    /// A player won during this step.
    GameOver(GameOver),
}

impl Progress {
    /// Returns whether the game ended.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self, Self::GameOver(_))
    }
}
