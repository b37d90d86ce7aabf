//! Pure scoring functions for the show and the play.
//!
//! Hand scoring counts a held hand together with the cut card; play scoring
//! looks at the cards laid since the last count reset. Neither keeps state.
//!
//! The functions accept slices of any length. Points saturate at
//! [`u16::MAX`] for oversized inputs.

use alloc::vec::Vec;

use crate::card::Card;

/// Points for making the count 15 or 31 during the play.
pub const COUNT_POINTS: u16 = 2;

/// Points for a go or for playing the last card under 31.
pub const GO_POINTS: u16 = 1;

/// Points the crib player pegs when the cut card is a Jack.
pub const HEELS_POINTS: u16 = 2;

/// The maximum running count during the play.
pub const MAX_COUNT: u8 = 31;

/// Per-category points for a hand or crib at the show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandScore {
    /// Two points for every combination of cards summing to 15.
    pub fifteens: u16,
    /// Two points for every pair of cards of the same rank.
    pub pairs: u16,
    /// Run length times the number of distinct runs.
    pub runs: u16,
    /// Points for cards of a single suit.
    pub flush: u16,
    /// One point for the Jack of the cut card's suit.
    pub nobs: u16,
}

impl HandScore {
    /// Returns the sum of all categories.
    #[must_use]
    pub const fn total(&self) -> u16 {
        self.fifteens
            .saturating_add(self.pairs)
            .saturating_add(self.runs)
            .saturating_add(self.flush)
            .saturating_add(self.nobs)
    }
}

/// Per-category points for a single card laid during the play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayScore {
    /// Points for bringing the count to 15.
    pub fifteen: u16,
    /// Points for bringing the count to exactly 31.
    pub thirty_one: u16,
    /// Points for the trailing pair, pair royal or double pair royal.
    pub pairs: u16,
    /// Points for the longest run ending on the last card.
    pub run: u16,
}

impl PlayScore {
    /// Returns the sum of all categories.
    #[must_use]
    pub const fn total(&self) -> u16 {
        self.fifteen
            .saturating_add(self.thirty_one)
            .saturating_add(self.pairs)
            .saturating_add(self.run)
    }
}

/// Scores a hand or crib at the show.
///
/// `held` are the four cards kept (or the crib), `cut` is the starter card.
/// Passing `None` for `cut` scores the held cards alone.
///
/// A hand flush needs every held card in one suit and scores one more if the
/// cut matches. A crib flush needs the cut to match too; otherwise it scores
/// nothing.
///
/// # Example
///
/// ```
/// use cribbage::{Card, Hand, score_hand};
///
/// let hand = Hand::from_specs(&["5H", "5D", "5C", "JS"]).unwrap();
/// let cut = Card::from_spec("5S").unwrap();
/// assert_eq!(score_hand(hand.cards(), Some(cut), false).total(), 29);
/// ```
#[must_use]
pub fn score_hand(held: &[Card], cut: Option<Card>, is_crib: bool) -> HandScore {
    let mut cards: Vec<Card> = held.to_vec();
    cards.extend(cut);

    HandScore {
        fifteens: fifteens(&cards),
        pairs: pairs(&cards),
        runs: runs(&cards),
        flush: flush(held, cut, is_crib),
        nobs: nobs(held, cut),
    }
}

/// Scores the card just laid during the play.
///
/// `cards` is the sequence laid since the last count reset, ending with the
/// card just played; `count` is the running count after that card.
#[must_use]
pub fn score_play(cards: &[Card], count: u8) -> PlayScore {
    PlayScore {
        fifteen: if count == 15 { COUNT_POINTS } else { 0 },
        thirty_one: if count == MAX_COUNT { COUNT_POINTS } else { 0 },
        pairs: trailing_pairs(cards),
        run: trailing_run(cards),
    }
}

/// Two points per subset of cards whose values sum to 15.
#[must_use]
pub fn fifteens(cards: &[Card]) -> u16 {
    // ways[sum] is the number of subsets seen so far with that value total.
    let mut ways = [0u32; 16];
    ways[0] = 1;

    for card in cards {
        let value = usize::from(card.value());
        if value == 0 {
            continue;
        }
        for sum in (value..=15).rev() {
            ways[sum] = ways[sum].saturating_add(ways[sum - value]);
        }
    }

    saturate(ways[15].saturating_mul(2))
}

/// Two points for every unordered pair of cards sharing a rank.
#[must_use]
pub fn pairs(cards: &[Card]) -> u16 {
    let mut points = 0u16;
    for (index, card) in cards.iter().enumerate() {
        for other in &cards[index + 1..] {
            if card.rank == other.rank {
                points = points.saturating_add(2);
            }
        }
    }
    points
}

/// Points for runs of three or more consecutive ranks.
///
/// Each maximal stretch of consecutive ranks scores its length once for every
/// distinct way of picking one card per rank, so a double run of three scores
/// 6 and a double-double run scores 12.
#[must_use]
pub fn runs(cards: &[Card]) -> u16 {
    let mut counts = [0u16; 15];
    for card in cards {
        if (1..=13).contains(&card.rank) {
            let slot = &mut counts[usize::from(card.rank)];
            *slot = slot.saturating_add(1);
        }
    }

    let mut points = 0u16;
    let mut length = 0u16;
    let mut combinations = 1u16;

    // Index 14 is always zero and closes a run ending on the King.
    for &count in &counts[1..] {
        if count > 0 {
            length += 1;
            combinations = combinations.saturating_mul(count);
        } else {
            if length >= 3 {
                points = points.saturating_add(length.saturating_mul(combinations));
            }
            length = 0;
            combinations = 1;
        }
    }

    points
}

/// Points for a flush in `held`, honoring the crib's stricter rule.
#[must_use]
pub fn flush(held: &[Card], cut: Option<Card>, is_crib: bool) -> u16 {
    let Some(first) = held.first() else {
        return 0;
    };
    if held.len() < 4 || held.iter().any(|card| card.suit != first.suit) {
        return 0;
    }

    let held_points = u16::try_from(held.len()).unwrap_or(u16::MAX);
    match cut {
        Some(cut) if cut.suit == first.suit => held_points.saturating_add(1),
        Some(_) if is_crib => 0,
        _ => held_points,
    }
}

/// One point for holding the Jack of the cut card's suit.
#[must_use]
pub fn nobs(held: &[Card], cut: Option<Card>) -> u16 {
    let Some(cut) = cut else {
        return 0;
    };
    u16::from(
        held.iter()
            .any(|card| card.rank == Card::JACK && card.suit == cut.suit),
    )
}

/// Pair points for the streak of equal ranks at the end of the play.
fn trailing_pairs(cards: &[Card]) -> u16 {
    let Some(last) = cards.last() else {
        return 0;
    };
    let streak = cards
        .iter()
        .rev()
        .take_while(|card| card.rank == last.rank)
        .count();
    let streak = u32::try_from(streak).unwrap_or(u32::MAX);

    if streak < 2 { 0 } else { saturate(streak.saturating_mul(streak - 1)) }
}

/// Length of the longest run formed by the trailing cards, if at least three.
fn trailing_run(cards: &[Card]) -> u16 {
    for length in (3..=cards.len()).rev() {
        if is_run(&cards[cards.len() - length..]) {
            return length as u16;
        }
    }
    0
}

fn saturate(points: u32) -> u16 {
    u16::try_from(points).unwrap_or(u16::MAX)
}

fn is_run(cards: &[Card]) -> bool {
    let mut seen = [false; 15];
    let mut low = u8::MAX;
    let mut high = u8::MIN;

    for card in cards {
        let rank = card.rank;
        if !(1..=13).contains(&rank) || seen[usize::from(rank)] {
            return false;
        }
        seen[usize::from(rank)] = true;
        low = low.min(rank);
        high = high.max(rank);
    }

    usize::from(high - low) + 1 == cards.len()
}
