//! Card types and the two-character card spec format.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in standard deck order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the single-letter token used in card specs.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
        }
    }

    const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'S' => Some(Self::Spades),
            'H' => Some(Self::Hearts),
            'D' => Some(Self::Diamonds),
            'C' => Some(Self::Clubs),
            _ => None,
        }
    }
}

/// A playing card.
///
/// Cards compare by rank first and suit second, so sorting a slice of cards
/// groups equal ranks together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Rank of an Ace.
    pub const ACE: u8 = 1;
    /// Rank of a Jack.
    pub const JACK: u8 = 11;
    /// Rank of a Queen.
    pub const QUEEN: u8 = 12;
    /// Rank of a King.
    pub const KING: u8 = 13;

    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but score as zero-valued cards. Use [`Card::from_spec`]
    /// for validated construction.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Parses a card from its spec, e.g. `"AS"`, `"10h"` or `"qd"`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseCardError`] if the rank or suit token is malformed.
    pub fn from_spec(spec: &str) -> Result<Self, ParseCardError> {
        spec.parse()
    }

    /// Returns the value this card adds to the running count.
    ///
    /// Face cards count 10, an Ace counts 1, everything else its rank.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self.rank {
            1..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }

    const fn rank_token(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}

fn parse_rank(token: &str) -> Option<u8> {
    match token {
        "A" | "a" => Some(Card::ACE),
        "J" | "j" => Some(Card::JACK),
        "Q" | "q" => Some(Card::QUEEN),
        "K" | "k" => Some(Card::KING),
        "T" | "t" => Some(10),
        _ => token.parse::<u8>().ok().filter(|rank| (2..=10).contains(rank)),
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let spec = spec.trim();
        let mut chars = spec.chars();
        let suit_symbol = chars.next_back().ok_or(ParseCardError::Empty)?;
        let rank_token = chars.as_str();

        if rank_token.is_empty() {
            return Err(ParseCardError::InvalidRank);
        }

        let rank = parse_rank(rank_token).ok_or(ParseCardError::InvalidRank)?;
        let suit = Suit::from_symbol(suit_symbol).ok_or(ParseCardError::InvalidSuit)?;
        Ok(Self::new(suit, rank))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_token(), self.suit.symbol())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn parses_every_rank_token() {
        assert_eq!(Card::from_spec("AS"), Ok(Card::new(Suit::Spades, 1)));
        assert_eq!(Card::from_spec("7h"), Ok(Card::new(Suit::Hearts, 7)));
        assert_eq!(Card::from_spec("10D"), Ok(Card::new(Suit::Diamonds, 10)));
        assert_eq!(Card::from_spec("td"), Ok(Card::new(Suit::Diamonds, 10)));
        assert_eq!(Card::from_spec(" jc "), Ok(Card::new(Suit::Clubs, 11)));
        assert_eq!(Card::from_spec("QS"), Ok(Card::new(Suit::Spades, 12)));
        assert_eq!(Card::from_spec("KH"), Ok(Card::new(Suit::Hearts, 13)));
    }

    #[test]
    fn rejects_malformed_specs() {
        assert_eq!(Card::from_spec(""), Err(ParseCardError::Empty));
        assert_eq!(Card::from_spec("  "), Err(ParseCardError::Empty));
        assert_eq!(Card::from_spec("S"), Err(ParseCardError::InvalidRank));
        assert_eq!(Card::from_spec("1S"), Err(ParseCardError::InvalidRank));
        assert_eq!(Card::from_spec("11S"), Err(ParseCardError::InvalidRank));
        assert_eq!(Card::from_spec("ZS"), Err(ParseCardError::InvalidRank));
        assert_eq!(Card::from_spec("AX"), Err(ParseCardError::InvalidSuit));
    }

    #[test]
    fn display_is_canonical_upper_case() {
        assert_eq!(Card::from_spec("as").unwrap().to_string(), "AS");
        assert_eq!(Card::from_spec("10c").unwrap().to_string(), "10C");
        assert_eq!(Card::from_spec("tc").unwrap().to_string(), "10C");
    }

    #[test]
    fn count_values() {
        assert_eq!(Card::new(Suit::Hearts, 1).value(), 1);
        assert_eq!(Card::new(Suit::Hearts, 9).value(), 9);
        assert_eq!(Card::new(Suit::Hearts, 10).value(), 10);
        assert_eq!(Card::new(Suit::Hearts, 11).value(), 10);
        assert_eq!(Card::new(Suit::Hearts, 13).value(), 10);
    }

    #[test]
    fn orders_by_rank_then_suit() {
        let two_clubs = Card::new(Suit::Clubs, 2);
        let three_spades = Card::new(Suit::Spades, 3);
        let three_clubs = Card::new(Suit::Clubs, 3);
        assert!(two_clubs < three_spades);
        assert!(three_spades < three_clubs);
    }
}
