use alloc::vec::Vec;

use crate::{
    common::{Coord, Letter, MoveError, Player},
    config::MatchConfig,
    lines::Line,
    state::{MatchState, Outcome},
};

/// What happened when a move was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub coord: Coord,
    pub letter: Letter,
    pub player: Player,
    pub new_lines: Vec<Line>,
    pub game_over: bool,
}

impl MoveReport {
    /// The mover completed at least one line and keeps the turn.
    pub fn scored(&self) -> bool {
        !self.new_lines.is_empty()
    }
}

/// What a clock tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickReport {
    /// Countdown decremented; ticks remaining.
    Counted(u32),
    /// Countdown hit zero and the turn passed from `expired` to `next`.
    TimedOut { expired: Player, next: Player },
    /// The match is over; nothing changed.
    Ignored,
}

/// Owns the live match and applies moves, ticks and resets to it.
pub struct MatchEngine {
    state: MatchState,
}

impl MatchEngine {
    /// Create an engine holding a fresh match.
    pub fn new(config: MatchConfig) -> Self {
        Self {
            state: MatchState::new(config),
        }
    }

    /// Wrap an existing snapshot.
    pub fn from_state(state: MatchState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Owned copy of the current snapshot.
    pub fn snapshot(&self) -> MatchState {
        self.state.clone()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// Place the current letter at (row, col). On error the match is untouched.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveReport, MoveError> {
        let player = self.state.current_player();
        let letter = self.state.current_letter();
        let next = match self.state.apply_move(row, col) {
            Ok(next) => next,
            Err(e) => {
                log::debug!("{} move at ({}, {}) rejected: {}", player, row, col, e);
                return Err(e);
            }
        };
        let new_lines = next.lines_since(&self.state).to_vec();
        self.state = next;

        log::debug!("{} placed {} at ({}, {})", player, letter, row, col);
        if !new_lines.is_empty() {
            let scores = self.state.scores();
            log::info!(
                "{} completed {} line(s); Blue {} - Red {}",
                player,
                new_lines.len(),
                scores.blue,
                scores.red
            );
        }
        if let Some(outcome) = self.state.outcome() {
            log::info!("Match over: {:?}", outcome);
        }

        Ok(MoveReport {
            coord: (row, col),
            letter,
            player,
            new_lines,
            game_over: self.state.is_game_over(),
        })
    }

    /// Like [`apply_move`](Self::apply_move) but refuses the move if the turn
    /// has already passed away from `player`.
    pub fn apply_move_as(
        &mut self,
        player: Player,
        row: usize,
        col: usize,
    ) -> Result<MoveReport, MoveError> {
        if !self.state.is_game_over() && self.state.current_player() != player {
            log::debug!("{} move at ({}, {}) arrived out of turn", player, row, col);
            return Err(MoveError::NotYourTurn(player));
        }
        self.apply_move(row, col)
    }

    /// Advance the turn countdown by one tick.
    pub fn tick(&mut self) -> TickReport {
        if self.state.is_game_over() {
            return TickReport::Ignored;
        }
        let expired = self.state.current_player();
        self.state = self.state.tick();
        let next = self.state.current_player();
        if next != expired {
            log::info!("{} ran out of time; {} to move", expired, next);
            TickReport::TimedOut { expired, next }
        } else {
            TickReport::Counted(self.state.timer())
        }
    }

    /// Discard the current match and start over with the same configuration.
    pub fn reset(&mut self) -> &MatchState {
        log::debug!("Match reset");
        self.state = self.state.reset();
        &self.state
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}
