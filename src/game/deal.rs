use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DealError, GameError};
use crate::hand::Hand;
use crate::result::HandSummary;
use crate::score::HEELS_POINTS;

use super::{Game, GameState, Progress, Seat};

impl Game {
    /// Cuts for the first crib: each player draws a card from a freshly
    /// shuffled deck and the lower rank takes the crib. Ties draw again.
    ///
    /// Returns the seat that now owns the crib.
    ///
    /// # Errors
    ///
    /// Returns an error if a hand is already in progress.
    pub fn draw_for_crib(&mut self) -> Result<Seat, GameError> {
        self.ensure_state(GameState::Ready)?;

        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        loop {
            if deck.len() < 2 {
                deck.reset();
                deck.shuffle(&mut self.rng);
            }
            let drawn = deck.draw(2)?;
            let (one, two) = (drawn[0], drawn[1]);
            debug!(%one, %two, "cut for crib");

            if one.rank != two.rank {
                let seat = if one.rank < two.rank { Seat::One } else { Seat::Two };
                self.set_crib_seat(seat);
                info!(crib = self.crib_player().name(), "won the cut for crib");
                return Ok(seat);
            }
        }
    }

    /// Shuffles a full deck and deals a hand to each player.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a deal.
    pub fn deal(&mut self) -> Result<(), GameError> {
        self.ensure_state(GameState::Ready)?;

        self.deck.reset();
        self.deck.shuffle(&mut self.rng);
        self.deal_hands()
    }

    /// Deals from the given deck without shuffling it.
    ///
    /// The non-crib player receives the first cards, the crib player the
    /// next, and the card after that is the one [`Game::cut`] will turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a deal or the deck
    /// cannot cover both hands.
    pub fn deal_from(&mut self, deck: Deck) -> Result<(), GameError> {
        self.ensure_state(GameState::Ready)?;

        self.deck = deck;
        self.deal_hands()
    }

    fn deal_hands(&mut self) -> Result<(), GameError> {
        let hand_size = self.options.hand_size;
        if self.deck.len() < hand_size * 2 {
            return Err(DealError::NotEnoughCards.into());
        }

        self.summary = HandSummary::default();
        self.round.reset();
        self.play_turn = None;
        self.crib.clear();
        self.cut = None;

        for seat in [self.crib_seat.other(), self.crib_seat] {
            let cards = self.deck.draw(hand_size)?;
            self.players[seat.index()].set_hand(Hand::from(cards));
        }

        debug!(remaining = self.deck.len(), "dealt hands");
        self.state = GameState::Discarding;
        Ok(())
    }

    /// Collects the crib discards from both players, non-crib player first.
    ///
    /// Returns the crib.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the discard step or a player's
    /// selector fails. On error both hands are left as dealt and the step can
    /// be retried.
    pub fn form_crib(&mut self) -> Result<&Hand, GameError> {
        self.ensure_state(GameState::Discarding)?;

        let discards = self.options.crib_discards;
        let pone = self.crib_seat.other().index();
        let dealt = self.players[pone].hand().clone();

        let mut crib: Vec<Card> = Vec::with_capacity(discards * 2);
        crib.extend(self.players[pone].get_crib_cards(discards)?);
        match self.players[self.crib_seat.index()].get_crib_cards(discards) {
            Ok(cards) => crib.extend(cards),
            Err(err) => {
                self.players[pone].set_hand(dealt);
                return Err(err.into());
            }
        }

        self.crib = Hand::from(crib);
        debug!(crib = %self.crib, "crib formed");
        self.state = GameState::Cutting;
        Ok(&self.crib)
    }

    /// Turns the starter card. A Jack scores his heels for the crib player
    /// when enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the crib is not yet formed or the deck is empty.
    pub fn cut(&mut self) -> Result<Progress, GameError> {
        self.ensure_state(GameState::Cutting)?;

        let card = self.deck.cut()?;
        self.cut = Some(card);
        self.state = GameState::Playing;
        debug!(%card, "cut");

        let outcome = if self.options.his_heels && card.rank == Card::JACK {
            info!(player = self.crib_player().name(), "his heels");
            let seat = self.crib_seat;
            self.peg(seat, HEELS_POINTS)
        } else {
            Ok(())
        };
        self.settle(outcome)
    }
}
