//! Card selection strategies.
//!
//! A [`Player`](crate::player::Player) never decides which cards to give up
//! or play; it asks its [`CardSelector`]. Selectors only ever see the cards
//! the player is allowed to choose from, and the player re-checks whatever
//! comes back.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::warn;

use crate::card::Card;
use crate::error::{ParseCardError, SelectionError};
use crate::hand::Hand;

/// Why cards are being chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPurpose {
    /// Discarding cards into the crib.
    Crib,
    /// Laying a card during the play.
    Play,
}

/// Everything a selector may look at when choosing cards.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    /// Why cards are being chosen.
    pub purpose: SelectionPurpose,
    /// Number of cards to choose.
    pub count: usize,
    /// Cards the selection must come from, in hand order.
    pub eligible: &'a [Card],
    /// The player's full hand.
    pub hand: &'a Hand,
    /// The choosing player's name.
    pub player: &'a str,
    /// The choosing player's score.
    pub score: u16,
    /// The running count of the play (zero when discarding).
    pub running_count: u8,
    /// Cards laid since the last count reset.
    pub played: &'a [Card],
}

impl fmt::Display for SelectionContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}; hand: {}", self.player, self.score, self.hand)?;
        match self.purpose {
            SelectionPurpose::Crib => write!(
                f,
                "Enter {} crib cards, comma separated: ",
                self.count
            ),
            SelectionPurpose::Play => {
                write!(f, "Count {}, played:", self.running_count)?;
                for card in self.played {
                    write!(f, " {card}")?;
                }
                f.write_str("\nPlayable:")?;
                for card in self.eligible {
                    write!(f, " {card}")?;
                }
                f.write_str("\nEnter a card to play: ")
            }
        }
    }
}

/// Chooses cards on behalf of a player.
pub trait CardSelector {
    /// Chooses exactly `context.count` distinct cards from `context.eligible`.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectionError`] if no valid choice can be produced.
    fn select(&mut self, context: &SelectionContext<'_>) -> Result<Vec<Card>, SelectionError>;
}

const fn ensure_enough(context: &SelectionContext<'_>) -> Result<(), SelectionError> {
    if context.eligible.len() < context.count {
        Err(SelectionError::NotEnoughCards)
    } else {
        Ok(())
    }
}

/// Picks the first eligible cards in hand order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstSelector;

impl CardSelector for FirstSelector {
    fn select(&mut self, context: &SelectionContext<'_>) -> Result<Vec<Card>, SelectionError> {
        ensure_enough(context)?;
        Ok(context.eligible[..context.count].to_vec())
    }
}

/// Picks uniformly at random among the eligible cards.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: ChaCha8Rng,
}

impl RandomSelector {
    /// Creates a random selector with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl CardSelector for RandomSelector {
    fn select(&mut self, context: &SelectionContext<'_>) -> Result<Vec<Card>, SelectionError> {
        ensure_enough(context)?;
        Ok(context
            .eligible
            .choose_multiple(&mut self.rng, context.count)
            .copied()
            .collect())
    }
}

/// Why a typed response was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
enum Rejection {
    #[error(transparent)]
    Parse(#[from] ParseCardError),
    #[error("expected {expected} cards, got {actual}")]
    WrongCount { expected: usize, actual: usize },
    #[error("{0} cannot be chosen")]
    NotEligible(Card),
    #[error("{0} chosen twice")]
    Duplicate(Card),
}

fn parse_response(response: &str, context: &SelectionContext<'_>) -> Result<Vec<Card>, Rejection> {
    let mut chosen = Vec::with_capacity(context.count);
    for spec in response.split(',').map(str::trim).filter(|spec| !spec.is_empty()) {
        let card = Card::from_spec(spec)?;
        if !context.eligible.contains(&card) {
            return Err(Rejection::NotEligible(card));
        }
        if chosen.contains(&card) {
            return Err(Rejection::Duplicate(card));
        }
        chosen.push(card);
    }

    if chosen.len() != context.count {
        return Err(Rejection::WrongCount {
            expected: context.count,
            actual: chosen.len(),
        });
    }
    Ok(chosen)
}

/// Asks a text input function for comma separated card specs.
///
/// The input function receives a prompt and returns the raw response, so a
/// terminal reader and a scripted test double plug in the same way. Bad
/// responses (unparseable specs, cards not on offer, wrong counts) are logged
/// and the prompt is repeated.
pub struct InteractiveSelector<F> {
    input: F,
    max_attempts: Option<usize>,
}

impl<F> InteractiveSelector<F>
where
    F: FnMut(&str) -> String,
{
    /// Creates a selector that re-prompts until it gets a valid answer.
    #[must_use]
    pub const fn new(input: F) -> Self {
        Self {
            input,
            max_attempts: None,
        }
    }

    /// Gives up with [`SelectionError::AttemptsExhausted`] after `attempts`
    /// rejected responses.
    #[must_use]
    pub const fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }
}

impl<F> fmt::Debug for InteractiveSelector<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractiveSelector")
            .field("max_attempts", &self.max_attempts)
            .finish_non_exhaustive()
    }
}

impl<F> CardSelector for InteractiveSelector<F>
where
    F: FnMut(&str) -> String,
{
    fn select(&mut self, context: &SelectionContext<'_>) -> Result<Vec<Card>, SelectionError> {
        ensure_enough(context)?;

        let prompt = context.to_string();
        let mut attempts = 0;
        loop {
            if self.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(SelectionError::AttemptsExhausted(attempts));
            }
            attempts += 1;

            let response = (self.input)(&prompt);
            match parse_response(&response, context) {
                Ok(cards) => return Ok(cards),
                Err(reason) => {
                    warn!(player = context.player, %reason, response = response.trim(), "rejected card selection");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn context<'a>(hand: &'a Hand, purpose: SelectionPurpose, count: usize) -> SelectionContext<'a> {
        SelectionContext {
            purpose,
            count,
            eligible: hand.cards(),
            hand,
            player: "Player 1",
            score: 0,
            running_count: 0,
            played: &[],
        }
    }

    fn card(spec: &str) -> Card {
        Card::from_spec(spec).unwrap()
    }

    #[test]
    fn first_selector_takes_hand_order() {
        let hand = Hand::from_specs(&["AS", "2S", "3S", "4S"]).unwrap();
        let chosen = FirstSelector
            .select(&context(&hand, SelectionPurpose::Crib, 2))
            .unwrap();
        assert_eq!(chosen, vec![card("AS"), card("2S")]);
    }

    #[test]
    fn selectors_refuse_impossible_requests() {
        let hand = Hand::from_specs(&["AS"]).unwrap();
        let ctx = context(&hand, SelectionPurpose::Crib, 2);
        assert_eq!(FirstSelector.select(&ctx), Err(SelectionError::NotEnoughCards));
        assert_eq!(
            RandomSelector::new(1).select(&ctx),
            Err(SelectionError::NotEnoughCards)
        );
    }

    #[test]
    fn random_selector_is_seeded_and_legal() {
        let hand = Hand::from_specs(&["AS", "2S", "3S", "4S", "5S", "6S"]).unwrap();
        let ctx = context(&hand, SelectionPurpose::Crib, 2);

        let first = RandomSelector::new(9).select(&ctx).unwrap();
        let second = RandomSelector::new(9).select(&ctx).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_ne!(first[0], first[1]);
        assert!(first.iter().all(|c| hand.contains(c)));
    }

    #[test]
    fn interactive_parses_comma_separated_specs() {
        let hand = Hand::from_specs(&["AS", "2S", "3S", "4S", "5S", "6S"]).unwrap();
        let mut selector = InteractiveSelector::new(|_: &str| String::from("3S, 5s"));
        let chosen = selector
            .select(&context(&hand, SelectionPurpose::Crib, 2))
            .unwrap();
        assert_eq!(chosen, vec![card("3S"), card("5S")]);
    }

    #[test]
    fn interactive_reprompts_until_valid() {
        let hand = Hand::from_specs(&["AS", "2S", "3S", "4S", "5S", "6S"]).unwrap();
        let mut responses = vec!["JS,4S", "zz", "AS,AS", "AS", "4S,AS"].into_iter();
        let mut prompts = 0;
        let mut selector = InteractiveSelector::new(|prompt: &str| {
            prompts += 1;
            assert!(prompt.contains("crib"));
            responses.next().unwrap_or_default().to_string()
        });
        let chosen = selector
            .select(&context(&hand, SelectionPurpose::Crib, 2))
            .unwrap();
        drop(selector);

        assert_eq!(chosen, vec![card("4S"), card("AS")]);
        assert_eq!(prompts, 5);
    }

    #[test]
    fn interactive_gives_up_when_bounded() {
        let hand = Hand::from_specs(&["AS", "2S", "3S", "4S", "5S", "6S"]).unwrap();
        let mut selector =
            InteractiveSelector::new(|_: &str| String::from("JS,4S")).with_max_attempts(3);
        assert_eq!(
            selector.select(&context(&hand, SelectionPurpose::Crib, 2)),
            Err(SelectionError::AttemptsExhausted(3))
        );
    }

    #[test]
    fn play_prompt_lists_count_and_playable_cards() {
        let hand = Hand::from_specs(&["KS", "4D"]).unwrap();
        let played = [card("10H"), card("QC")];
        let ctx = SelectionContext {
            running_count: 20,
            played: &played,
            ..context(&hand, SelectionPurpose::Play, 1)
        };
        let prompt = ctx.to_string();
        assert!(prompt.contains("Count 20, played: 10H QC"));
        assert!(prompt.contains("Playable: KS 4D"));
    }
}
