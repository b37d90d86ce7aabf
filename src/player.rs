//! Players: hand, score, crib flag and play-phase bookkeeping.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::mem;

use tracing::debug;

use crate::card::Card;
use crate::error::PlayerError;
use crate::hand::Hand;
use crate::result::WinningScore;
use crate::round::PlayRound;
use crate::select::{CardSelector, FirstSelector, SelectionContext, SelectionPurpose};

/// Score at which a player wins unless configured otherwise.
pub const DEFAULT_WIN_THRESHOLD: u16 = 120;

/// A cribbage player.
///
/// The player owns its hand and score but delegates every choice to a
/// [`CardSelector`]. Selections are checked before any card leaves the hand.
pub struct Player {
    name: String,
    score: u16,
    hand: Hand,
    crib: bool,
    said_go: bool,
    /// Cards not yet laid during the current play phase, in hand order.
    remaining: Vec<Card>,
    win_threshold: u16,
    selector: Box<dyn CardSelector>,
}

impl Player {
    /// Creates a player with the default selector and win threshold.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            hand: Hand::new(),
            crib: false,
            said_go: false,
            remaining: Vec::new(),
            win_threshold: DEFAULT_WIN_THRESHOLD,
            selector: Box::new(FirstSelector),
        }
    }

    /// Replaces the card selector.
    #[must_use]
    pub fn with_selector(mut self, selector: impl CardSelector + 'static) -> Self {
        self.selector = Box::new(selector);
        self
    }

    /// Sets the score that ends the game.
    #[must_use]
    pub const fn with_win_threshold(mut self, threshold: u16) -> Self {
        self.win_threshold = threshold;
        self
    }

    /// Sets whether this player owns the crib.
    #[must_use]
    pub const fn with_crib(mut self, crib: bool) -> Self {
        self.crib = crib;
        self
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> u16 {
        self.score
    }

    /// Returns the score that ends the game.
    #[must_use]
    pub const fn win_threshold(&self) -> u16 {
        self.win_threshold
    }

    /// Changes the score that ends the game.
    pub const fn set_win_threshold(&mut self, threshold: u16) {
        self.win_threshold = threshold;
    }

    /// Sets the score.
    ///
    /// The new score is always stored.
    ///
    /// # Errors
    ///
    /// Returns [`WinningScore`] when the new score reaches the win threshold.
    pub fn set_score(&mut self, score: u16) -> Result<(), WinningScore> {
        self.score = score;
        if score >= self.win_threshold {
            return Err(WinningScore {
                player: self.name.clone(),
                score,
                threshold: self.win_threshold,
            });
        }
        Ok(())
    }

    /// Adds points to the score.
    ///
    /// # Errors
    ///
    /// Returns [`WinningScore`] when the new score reaches the win threshold.
    pub fn add_score(&mut self, points: u16) -> Result<(), WinningScore> {
        self.set_score(self.score.saturating_add(points))
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Gives the player a new hand.
    pub fn set_hand(&mut self, hand: Hand) {
        self.hand = hand;
        self.remaining.clear();
        self.said_go = false;
    }

    /// Takes the hand away, leaving the player empty-handed.
    pub fn take_hand(&mut self) -> Hand {
        self.remaining.clear();
        self.said_go = false;
        mem::take(&mut self.hand)
    }

    /// Returns whether this player owns the crib.
    #[must_use]
    pub const fn is_crib(&self) -> bool {
        self.crib
    }

    /// Sets whether this player owns the crib.
    pub const fn set_crib(&mut self, crib: bool) {
        self.crib = crib;
    }

    /// Returns whether the player has said go in the current count round.
    #[must_use]
    pub const fn said_go(&self) -> bool {
        self.said_go
    }

    /// Clears the go flag after the count resets.
    pub const fn clear_go(&mut self) {
        self.said_go = false;
    }

    /// Returns the cards not yet laid in the current play phase.
    #[must_use]
    pub fn remaining_play_cards(&self) -> &[Card] {
        &self.remaining
    }

    /// Returns whether any card is left to lay in the current play phase.
    #[must_use]
    pub fn has_unplayed_cards(&self) -> bool {
        !self.remaining.is_empty()
    }

    /// Makes the whole hand available for the play and clears the go flag.
    pub fn reset_eligible_play_cards(&mut self) {
        self.remaining = self.hand.cards().to_vec();
        self.said_go = false;
    }

    /// Asks the selector for `count` cards to discard and removes them from
    /// the hand.
    ///
    /// # Errors
    ///
    /// Returns a [`PlayerError`] if the selector fails or picks cards that are
    /// not in the hand. The hand is unchanged on error.
    pub fn get_crib_cards(&mut self, count: usize) -> Result<Vec<Card>, PlayerError> {
        let context = SelectionContext {
            purpose: SelectionPurpose::Crib,
            count,
            eligible: self.hand.cards(),
            hand: &self.hand,
            player: &self.name,
            score: self.score,
            running_count: 0,
            played: &[],
        };
        let chosen = self.selector.select(&context)?;
        validate(&chosen, count, self.hand.cards())?;

        for card in &chosen {
            self.hand.remove(card)?;
        }
        debug!(player = %self.name, crib = ?chosen, "discarded to crib");
        Ok(chosen)
    }

    /// Asks the selector for a card to lay on the current count.
    ///
    /// Only cards that keep the count at or below 31 are offered. With none
    /// available the player says go and `None` is returned.
    ///
    /// # Errors
    ///
    /// Returns a [`PlayerError`] if the selector fails or picks a card that
    /// is not playable.
    pub fn get_play_card(&mut self, round: &PlayRound) -> Result<Option<Card>, PlayerError> {
        let eligible: Vec<Card> = self
            .remaining
            .iter()
            .copied()
            .filter(|card| round.can_play(card))
            .collect();

        if eligible.is_empty() {
            self.said_go = true;
            return Ok(None);
        }

        let context = SelectionContext {
            purpose: SelectionPurpose::Play,
            count: 1,
            eligible: &eligible,
            hand: &self.hand,
            player: &self.name,
            score: self.score,
            running_count: round.count(),
            played: round.cards(),
        };
        let chosen = self.selector.select(&context)?;
        validate(&chosen, 1, &eligible)?;

        let card = chosen[0];
        self.remaining.retain(|held| *held != card);
        Ok(Some(card))
    }
}

/// Checks that `chosen` is exactly `count` distinct cards from `allowed`.
fn validate(chosen: &[Card], count: usize, allowed: &[Card]) -> Result<(), PlayerError> {
    if chosen.len() != count {
        return Err(PlayerError::WrongCount {
            expected: count,
            actual: chosen.len(),
        });
    }
    for (index, card) in chosen.iter().enumerate() {
        if !allowed.contains(card) || chosen[..index].contains(card) {
            return Err(PlayerError::CardNotFound);
        }
    }
    Ok(())
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("score", &self.score)
            .field("hand", &self.hand)
            .field("crib", &self.crib)
            .field("said_go", &self.said_go)
            .field("remaining", &self.remaining)
            .field("win_threshold", &self.win_threshold)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let crib = if self.crib { "(crib) " } else { "" };
        write!(f, "{}: {}; {crib}hand: ", self.name, self.score)?;
        if self.hand.is_empty() {
            f.write_str("None")
        } else {
            write!(f, "{}", self.hand)
        }
    }
}
