//! The 52-card deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DealError;

/// A deck of cards. Cards are drawn from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck in standard order: Spades, Hearts, Diamonds, Clubs,
    /// each from Ace to King.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a deck that will deal the given cards in order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Restores the deck to a full, unshuffled deck.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Shuffles the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draws `count` cards from the top of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than `count` cards
    /// remain. The deck is left untouched in that case.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, DealError> {
        if count > self.cards.len() {
            return Err(DealError::NotEnoughCards);
        }
        Ok(self.cards.drain(..count).collect())
    }

    /// Draws a single card, as when cutting for the starter.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the deck is empty.
    pub fn cut(&mut self) -> Result<Card, DealError> {
        if self.cards.is_empty() {
            return Err(DealError::NotEnoughCards);
        }
        Ok(self.cards.remove(0))
    }

    /// Returns the remaining cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
