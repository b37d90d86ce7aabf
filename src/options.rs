//! Game configuration options.

use crate::player::DEFAULT_WIN_THRESHOLD;

/// Configuration options for a cribbage game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cribbage::GameOptions;
///
/// let options = GameOptions::default()
///     .with_win_threshold(61)
///     .with_his_heels(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Score that ends the game.
    pub win_threshold: u16,
    /// Cards dealt to each player.
    pub hand_size: usize,
    /// Cards each player discards into the crib.
    pub crib_discards: usize,
    /// Whether the crib player pegs 2 when a Jack is cut.
    pub his_heels: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            win_threshold: DEFAULT_WIN_THRESHOLD,
            hand_size: 6,
            crib_discards: 2,
            his_heels: true,
        }
    }
}

impl GameOptions {
    /// Sets the score that ends the game.
    ///
    /// # Example
    ///
    /// ```
    /// use cribbage::GameOptions;
    ///
    /// let options = GameOptions::default().with_win_threshold(61);
    /// assert_eq!(options.win_threshold, 61);
    /// ```
    #[must_use]
    pub const fn with_win_threshold(mut self, threshold: u16) -> Self {
        self.win_threshold = threshold;
        self
    }

    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use cribbage::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the number of cards each player discards into the crib.
    ///
    /// # Example
    ///
    /// ```
    /// use cribbage::GameOptions;
    ///
    /// let options = GameOptions::default().with_crib_discards(1);
    /// assert_eq!(options.crib_discards, 1);
    /// ```
    #[must_use]
    pub const fn with_crib_discards(mut self, discards: usize) -> Self {
        self.crib_discards = discards;
        self
    }

    /// Sets whether cutting a Jack scores his heels.
    ///
    /// # Example
    ///
    /// ```
    /// use cribbage::GameOptions;
    ///
    /// let options = GameOptions::default().with_his_heels(false);
    /// assert!(!options.his_heels);
    /// ```
    #[must_use]
    pub const fn with_his_heels(mut self, enabled: bool) -> Self {
        self.his_heels = enabled;
        self
    }
}
