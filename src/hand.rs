//! Ordered card containers used for player hands and the crib.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::{HandError, ParseCardError};

/// An ordered collection of cards.
///
/// Insertion order is kept for display and for selectors that pick "the
/// first N cards"; scoring treats a hand as an unordered multiset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand from card specs such as `["2C", "3S"]`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseCardError`] encountered.
    pub fn from_specs<S: AsRef<str>>(specs: &[S]) -> Result<Self, ParseCardError> {
        let cards = specs
            .iter()
            .map(|spec| Card::from_spec(spec.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cards })
    }

    /// Adds a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes a card by value.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::NotFound`] if the card is not in the hand.
    pub fn remove(&mut self, card: &Card) -> Result<Card, HandError> {
        let index = self
            .cards
            .iter()
            .position(|held| held == card)
            .ok_or(HandError::NotFound)?;
        Ok(self.cards.remove(index))
    }

    /// Returns whether the hand holds the card.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::card::Suit;

    #[test]
    fn builds_from_specs_in_order() {
        let hand = Hand::from_specs(&["2C", "3S", "3C", "8D"]).unwrap();
        assert_eq!(hand.len(), 4);
        assert_eq!(hand.cards()[0], Card::new(Suit::Clubs, 2));
        assert_eq!(hand.to_string(), "[2C, 3S, 3C, 8D]");
        assert_eq!(Hand::new().to_string(), "[]");
    }

    #[test]
    fn bad_spec_fails_the_whole_hand() {
        assert_eq!(
            Hand::from_specs(&["2C", "XX"]),
            Err(ParseCardError::InvalidRank)
        );
    }

    #[test]
    fn remove_present_card() {
        let mut hand = Hand::from_specs(&["2C", "3S", "3C"]).unwrap();
        let three_spades = Card::new(Suit::Spades, 3);
        assert_eq!(hand.remove(&three_spades), Ok(three_spades));
        assert_eq!(hand.len(), 2);
        assert!(!hand.contains(&three_spades));
        assert!(hand.contains(&Card::new(Suit::Clubs, 3)));
    }

    #[test]
    fn remove_absent_card_fails() {
        let mut hand = Hand::from_specs(&["2C", "3S"]).unwrap();
        assert_eq!(
            hand.remove(&Card::new(Suit::Hearts, 3)),
            Err(HandError::NotFound)
        );
        assert_eq!(hand.len(), 2);
    }
}
