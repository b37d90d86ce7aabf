//! Running state of the play phase.

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::Seat;
use crate::score::{MAX_COUNT, PlayScore, score_play};

/// State of the play for one hand.
///
/// Tracks the running count, the cards laid since the count last reset, every
/// card laid this hand, and who laid the most recent card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayRound {
    count: u8,
    cards: Vec<Card>,
    all_cards: Vec<Card>,
    last_player: Option<Seat>,
}

impl PlayRound {
    /// Creates an empty play state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: 0,
            cards: Vec::new(),
            all_cards: Vec::new(),
            last_player: None,
        }
    }

    /// Returns the running count.
    #[must_use]
    pub const fn count(&self) -> u8 {
        self.count
    }

    /// Returns the cards laid since the last count reset.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns every card laid this hand.
    #[must_use]
    pub fn all_cards(&self) -> &[Card] {
        &self.all_cards
    }

    /// Returns the seat that laid the most recent card since the last reset.
    #[must_use]
    pub const fn last_player(&self) -> Option<Seat> {
        self.last_player
    }

    /// Returns whether the card can be laid without passing 31.
    #[must_use]
    pub const fn can_play(&self, card: &Card) -> bool {
        match self.count.checked_add(card.value()) {
            Some(count) => count <= MAX_COUNT,
            None => false,
        }
    }

    /// Lays a card, advances the count and scores it.
    ///
    /// Returns `None` and leaves the round untouched if the card would take
    /// the count past 31.
    pub fn play(&mut self, seat: Seat, card: Card) -> Option<PlayScore> {
        if !self.can_play(&card) {
            return None;
        }
        self.count += card.value();
        self.cards.push(card);
        self.all_cards.push(card);
        self.last_player = Some(seat);
        Some(score_play(&self.cards, self.count))
    }

    /// Starts a new count round: the count goes back to zero and pairs and
    /// runs can no longer be extended.
    pub fn reset_count(&mut self) {
        self.count = 0;
        self.cards.clear();
        self.last_player = None;
    }

    /// Clears everything for a new hand.
    pub fn reset(&mut self) {
        self.reset_count();
        self.all_cards.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(spec: &str) -> Card {
        Card::from_spec(spec).unwrap()
    }

    #[test]
    fn play_advances_count_and_scores() {
        let mut round = PlayRound::new();
        assert_eq!(round.play(Seat::Two, card("7H")).unwrap().total(), 0);
        let score = round.play(Seat::One, card("8C")).unwrap();
        assert_eq!(score.fifteen, 2);
        assert_eq!(round.count(), 15);
        assert_eq!(round.last_player(), Some(Seat::One));
        assert_eq!(round.cards(), &[card("7H"), card("8C")]);
    }

    #[test]
    fn count_reset_keeps_hand_history() {
        let mut round = PlayRound::new();
        round.play(Seat::Two, card("KH")).unwrap();
        round.play(Seat::One, card("QC")).unwrap();
        round.play(Seat::Two, card("JD")).unwrap();
        assert!(round.can_play(&card("AS")));
        assert!(!round.can_play(&card("2S")));
        let score = round.play(Seat::One, card("AS")).unwrap();
        assert_eq!(score.thirty_one, 2);

        round.reset_count();
        assert_eq!(round.count(), 0);
        assert!(round.cards().is_empty());
        assert_eq!(round.last_player(), None);
        assert_eq!(round.all_cards().len(), 4);

        // A pair across the reset does not score.
        assert_eq!(round.play(Seat::Two, card("AH")).unwrap().pairs, 0);

        round.reset();
        assert!(round.all_cards().is_empty());
    }

    #[test]
    fn card_past_thirty_one_is_refused() {
        let mut round = PlayRound::new();
        round.play(Seat::Two, card("KH")).unwrap();
        round.play(Seat::One, card("QC")).unwrap();
        round.play(Seat::Two, card("5D")).unwrap();
        let before = round.clone();

        assert_eq!(round.play(Seat::One, card("7S")), None);
        assert_eq!(round, before);
        assert_eq!(round.count(), 25);

        assert!(round.play(Seat::One, card("6S")).is_some());
        assert_eq!(round.count(), 31);
        assert_eq!(round.play(Seat::Two, card("AS")), None);
    }
}
