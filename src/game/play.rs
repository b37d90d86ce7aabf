use tracing::{debug, instrument};

use crate::error::GameError;
use crate::score::{GO_POINTS, MAX_COUNT};

use super::{Game, GameState, Halt, Progress, Seat};

impl Game {
    /// Returns who lays the next card after `current`.
    ///
    /// Normally the turn passes to the opponent, but an opponent who has said
    /// go is skipped until the count resets.
    #[must_use]
    pub const fn get_next_player_for_play(&self, current: Seat) -> Seat {
        let other = current.other();
        if self.players[other.index()].said_go() {
            current
        } else {
            other
        }
    }

    /// Plays out the pegging phase of the hand.
    ///
    /// The non-crib player leads. Each card is scored as it lands; a count of
    /// 31 or two consecutive goes reset the count, and the last card of the
    /// hand pegs one unless it made 31.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the play step or a player's
    /// selector fails. A failed play keeps the cards laid and points pegged
    /// so far, and calling this again resumes with the player whose turn it
    /// was.
    pub fn play_phase(&mut self) -> Result<Progress, GameError> {
        self.ensure_state(GameState::Playing)?;

        let outcome = self.run_play();
        let progress = self.settle(outcome)?;
        self.play_turn = None;
        if !progress.is_over() {
            self.state = GameState::Showing;
        }
        Ok(progress)
    }

    #[instrument(level = "debug", skip_all)]
    fn run_play(&mut self) -> Result<(), Halt> {
        let mut current = match self.play_turn {
            Some(seat) => {
                debug!(player = self.player(seat).name(), "resuming play");
                seat
            }
            None => {
                self.round.reset();
                for player in &mut self.players {
                    player.reset_eligible_play_cards();
                }
                self.crib_seat.other()
            }
        };

        loop {
            self.play_turn = Some(current);
            if self.players.iter().all(|player| !player.has_unplayed_cards()) {
                if let Some(last) = self.round.last_player() {
                    debug!(player = self.player(last).name(), "last card");
                    self.peg(last, GO_POINTS)?;
                }
                return Ok(());
            }

            let played = self.players[current.index()].get_play_card(&self.round)?;
            match played {
                Some(card) => {
                    let score = self
                        .round
                        .play(current, card)
                        .ok_or(GameError::InvalidState)?;
                    debug!(
                        player = self.player(current).name(),
                        %card,
                        count = self.round.count(),
                        points = score.total(),
                        "played"
                    );
                    self.peg(current, score.total())?;

                    if self.round.count() == MAX_COUNT {
                        self.reset_count();
                    }
                }
                None => {
                    debug!(player = self.player(current).name(), count = self.round.count(), "go");

                    if self.player(current.other()).said_go() {
                        if let Some(last) = self.round.last_player() {
                            self.peg(last, GO_POINTS)?;
                        }
                        self.reset_count();
                    }
                }
            }

            current = self.get_next_player_for_play(current);
        }
    }

    fn reset_count(&mut self) {
        self.round.reset_count();
        for player in &mut self.players {
            player.clear_go();
        }
    }

    /// Pegs points scored during the cut or the play.
    pub(super) fn peg(&mut self, seat: Seat, points: u16) -> Result<(), Halt> {
        self.summary.pegging[seat.index()] += points;
        self.award(seat, points)
    }
}
