//! Game engine and state management.

use core::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{GameError, PlayerError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{GameOver, HandSummary};
use crate::round::PlayRound;

mod deal;
mod play;
mod show;
pub mod state;

pub use state::{GameState, Progress, Seat};

/// Why a step stopped early.
enum Halt {
    Won(GameOver),
    Failed(GameError),
}

impl From<GameError> for Halt {
    fn from(err: GameError) -> Self {
        Self::Failed(err)
    }
}

impl From<PlayerError> for Halt {
    fn from(err: PlayerError) -> Self {
        Self::Failed(err.into())
    }
}

/// A two-player cribbage game.
///
/// The game owns both players, the deck, the crib and the cut card, and walks
/// each hand through [`GameState`]: deal, discard, cut, play and show. Steps
/// can be driven one at a time or all at once with [`Game::play_hand`] and
/// [`Game::run`].
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Cards left to draw.
    pub deck: Deck,
    players: [Player; 2],
    crib_seat: Seat,
    crib: Hand,
    cut: Option<Card>,
    round: PlayRound,
    /// Seat to act next while a play phase is under way.
    play_turn: Option<Seat>,
    state: GameState,
    summary: HandSummary,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a game between two default players with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use cribbage::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Ready);
    /// assert_eq!(game.deck.len(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_players(options, seed, Player::new("Player 1"), Player::new("Player 2"))
    }

    /// Creates a game between the given players.
    ///
    /// Both players take their win threshold from `options`. Seat one holds
    /// the first crib unless [`Game::draw_for_crib`] decides otherwise.
    #[must_use]
    pub fn with_players(options: GameOptions, seed: u64, one: Player, two: Player) -> Self {
        let mut players = [one, two];
        for player in &mut players {
            player.set_win_threshold(options.win_threshold);
        }

        let mut game = Self {
            options,
            deck: Deck::new(),
            players,
            crib_seat: Seat::One,
            crib: Hand::new(),
            cut: None,
            round: PlayRound::new(),
            play_turn: None,
            state: GameState::Ready,
            summary: HandSummary::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        game.set_crib_seat(Seat::One);
        game
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player in a seat.
    #[must_use]
    pub const fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Returns the player in a seat mutably.
    pub const fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    /// Returns the seat that owns the crib this hand.
    #[must_use]
    pub const fn crib_seat(&self) -> Seat {
        self.crib_seat
    }

    /// Returns the player who owns the crib.
    #[must_use]
    pub const fn crib_player(&self) -> &Player {
        self.player(self.crib_seat)
    }

    /// Returns the player who does not own the crib.
    #[must_use]
    pub const fn non_crib_player(&self) -> &Player {
        self.player(self.crib_seat.other())
    }

    /// Hands the crib to the other player.
    pub fn swap_crib_player(&mut self) {
        self.set_crib_seat(self.crib_seat.other());
    }

    fn set_crib_seat(&mut self, seat: Seat) {
        self.crib_seat = seat;
        for other in Seat::ALL {
            self.players[other.index()].set_crib(other == seat);
        }
    }

    /// Returns the crib.
    #[must_use]
    pub const fn crib(&self) -> &Hand {
        &self.crib
    }

    /// Returns the cut card, once cut.
    #[must_use]
    pub const fn cut_card(&self) -> Option<Card> {
        self.cut
    }

    /// Returns the state of the play.
    #[must_use]
    pub const fn round(&self) -> &PlayRound {
        &self.round
    }

    /// Returns the points scored so far this hand.
    #[must_use]
    pub const fn summary(&self) -> &HandSummary {
        &self.summary
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    fn ensure_state(&self, expected: GameState) -> Result<(), GameError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GameError::InvalidState)
        }
    }

    /// Converts the result of a step into the public step outcome.
    fn settle(&mut self, outcome: Result<(), Halt>) -> Result<Progress, GameError> {
        match outcome {
            Ok(()) => Ok(Progress::Continue),
            Err(Halt::Won(over)) => {
                info!(winner = %over.score.player, score = over.score.score, "game over");
                self.state = GameState::Finished;
                Ok(Progress::GameOver(over))
            }
            Err(Halt::Failed(err)) => Err(err),
        }
    }

    /// Adds points to a seat, turning a winning score into [`Halt::Won`].
    fn award(&mut self, seat: Seat, points: u16) -> Result<(), Halt> {
        if points == 0 {
            return Ok(());
        }
        self.players[seat.index()]
            .add_score(points)
            .map_err(|score| Halt::Won(GameOver { winner: seat, score }))
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("players", &self.players)
            .field("crib_seat", &self.crib_seat)
            .field("crib", &self.crib)
            .field("cut", &self.cut)
            .field("round", &self.round)
            .field("play_turn", &self.play_turn)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.players[0])?;
        writeln!(f, "{}", self.players[1])?;
        match self.cut {
            Some(card) => write!(f, "Cut card: {card}"),
            None => f.write_str("Cut card: None"),
        }
    }
}
