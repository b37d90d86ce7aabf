use tracing::{info, instrument};

use crate::error::GameError;
use crate::result::{GameOver, HandSummary};
use crate::score::{HandScore, score_hand};

use super::{Game, GameState, Halt, Progress, Seat};

impl Game {
    /// Counts the hands and the crib: the non-crib player first, then the
    /// crib player's hand, then the crib.
    ///
    /// # Errors
    ///
    /// Returns an error if the play has not finished.
    pub fn show(&mut self) -> Result<Progress, GameError> {
        self.ensure_state(GameState::Showing)?;

        let outcome = self.run_show();
        let progress = self.settle(outcome)?;
        if !progress.is_over() {
            self.state = GameState::HandComplete;
        }
        Ok(progress)
    }

    fn run_show(&mut self) -> Result<(), Halt> {
        let crib_seat = self.crib_seat;
        self.count_and_award(crib_seat.other(), false)?;
        self.count_and_award(crib_seat, false)?;
        self.count_and_award(crib_seat, true)
    }

    /// Scores a player's hand, or the crib when `crib` is set, with the cut
    /// card and adds the points to the player's score.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already over or `crib` is requested
    /// for the player who does not own it.
    pub fn update_player_score(&mut self, seat: Seat, crib: bool) -> Result<Progress, GameError> {
        if self.state == GameState::Finished || (crib && seat != self.crib_seat) {
            return Err(GameError::InvalidState);
        }

        let outcome = self.count_and_award(seat, crib);
        self.settle(outcome)
    }

    fn count_and_award(&mut self, seat: Seat, crib: bool) -> Result<(), Halt> {
        let score: HandScore = if crib {
            score_hand(self.crib.cards(), self.cut, true)
        } else {
            score_hand(self.players[seat.index()].hand().cards(), self.cut, false)
        };
        let points = score.total();

        if crib {
            self.summary.crib += points;
        } else {
            self.summary.hand[seat.index()] += points;
        }
        info!(
            player = self.player(seat).name(),
            crib,
            points,
            fifteens = score.fifteens,
            pairs = score.pairs,
            runs = score.runs,
            flush = score.flush,
            nobs = score.nobs,
            "counted"
        );
        self.award(seat, points)
    }

    /// Collects all cards, clears the cut and passes the crib to the other
    /// player.
    ///
    /// Returns what each seat scored during the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand has not been counted.
    pub fn end_hand(&mut self) -> Result<HandSummary, GameError> {
        self.ensure_state(GameState::HandComplete)?;

        for player in &mut self.players {
            player.take_hand();
        }
        self.crib.clear();
        self.cut = None;
        self.round.reset();
        self.play_turn = None;
        self.deck.reset();
        self.swap_crib_player();

        info!(
            scores = ?[self.players[0].score(), self.players[1].score()],
            crib = self.crib_player().name(),
            "hand complete"
        );
        self.state = GameState::Ready;
        Ok(self.summary)
    }

    /// Plays one full hand: deal, discard, cut, play, show and crib rotation.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a deal or a player's
    /// selector fails.
    #[instrument(level = "debug", skip_all)]
    pub fn play_hand(&mut self) -> Result<Progress, GameError> {
        self.deal()?;
        self.form_crib()?;

        let steps: [fn(&mut Self) -> Result<Progress, GameError>; 3] =
            [Self::cut, Self::play_phase, Self::show];
        for step in steps {
            let progress = step(self)?;
            if progress.is_over() {
                return Ok(progress);
            }
        }

        self.end_hand()?;
        Ok(Progress::Continue)
    }

    /// Plays hands until a player wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a deal or a player's
    /// selector fails.
    pub fn run(&mut self) -> Result<GameOver, GameError> {
        loop {
            if let Progress::GameOver(over) = self.play_hand()? {
                return Ok(over);
            }
        }
    }
}
