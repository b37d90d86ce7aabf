//! Hand and game outcome types.

use alloc::string::String;
use core::fmt;

use crate::game::Seat;

/// Signal raised when a score update reaches the win threshold.
///
/// This is not an error: it ends the game. It is kept apart from the error
/// enums so callers can tell a finished game from a failed one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningScore {
    /// Name of the player who reached the threshold.
    pub player: String,
    /// The score that was set.
    pub score: u16,
    /// The threshold that was reached.
    pub threshold: u16,
}

impl fmt::Display for WinningScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} wins with {} (needed {})",
            self.player, self.score, self.threshold
        )
    }
}

/// A finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOver {
    /// Seat of the winning player.
    pub winner: Seat,
    /// The winning signal raised by the player.
    pub score: WinningScore,
}

impl fmt::Display for GameOver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.score)
    }
}

/// Points scored by each seat during one hand.
///
/// Indexed by [`Seat::index`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandSummary {
    /// Points pegged during the play, including his heels.
    pub pegging: [u16; 2],
    /// Points for each player's hand at the show.
    pub hand: [u16; 2],
    /// Points for the crib, credited to the crib player.
    pub crib: u16,
}

impl HandSummary {
    /// Returns everything a seat scored this hand.
    #[must_use]
    pub const fn total(&self, seat: Seat, crib_seat: Seat) -> u16 {
        let index = seat.index();
        let crib = if seat.index() == crib_seat.index() {
            self.crib
        } else {
            0
        };
        self.pegging[index] + self.hand[index] + crib
    }
}
