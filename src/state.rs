//! Match snapshot and the pure transitions between snapshots.

use alloc::vec::Vec;

use crate::board::Board;
use crate::common::{Cell, Letter, MoveError, Player};
use crate::config::MatchConfig;
use crate::lines::{self, Line};

/// Lines owned by each player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Scores {
    pub blue: u32,
    pub red: u32,
}

impl Scores {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::Blue => self.blue,
            Player::Red => self.red,
        }
    }

    fn add(&mut self, player: Player, points: u32) {
        match player {
            Player::Blue => self.blue += points,
            Player::Red => self.red += points,
        }
    }

    pub fn total(&self) -> u32 {
        self.blue + self.red
    }
}

/// Result of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Winner(Player),
    Tie,
}

impl Outcome {
    /// Strictly higher score wins; equal scores tie.
    pub fn from_scores(scores: &Scores) -> Self {
        use core::cmp::Ordering;
        match scores.blue.cmp(&scores.red) {
            Ordering::Greater => Outcome::Winner(Player::Blue),
            Ordering::Less => Outcome::Winner(Player::Red),
            Ordering::Equal => Outcome::Tie,
        }
    }
}

/// Everything a caller needs to render or continue a match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    board: Board,
    current_player: Player,
    current_letter: Letter,
    scores: Scores,
    lines: Vec<Line>,
    timer: u32,
    game_over: bool,
    config: MatchConfig,
}

impl MatchState {
    /// Fresh match: empty board, Blue to place an S, full countdown.
    pub fn new(config: MatchConfig) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Blue,
            current_letter: Letter::S,
            scores: Scores::default(),
            lines: Vec::new(),
            timer: config.turn_seconds(),
            game_over: false,
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell content, `None` when the coordinate is off the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col).ok()
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn current_letter(&self) -> Letter {
        self.current_letter
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Lines in the order they were completed.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Ticks left in the current turn.
    pub fn timer(&self) -> u32 {
        self.timer
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Final result, `None` while the match is still running.
    pub fn outcome(&self) -> Option<Outcome> {
        self.game_over.then(|| Outcome::from_scores(&self.scores))
    }

    /// Place the current letter at (row, col).
    ///
    /// Completing at least one new line keeps the turn; otherwise the turn
    /// passes and the countdown restarts. The letter flips either way.
    pub fn apply_move(&self, row: usize, col: usize) -> Result<MatchState, MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        let board = self.board.set(row, col, self.current_letter)?;
        let formed = lines::new_runs(&board, &self.lines);

        let mut next = self.clone();
        next.board = board;
        next.current_letter = self.current_letter.toggled();
        if formed.is_empty() {
            next.pass_turn();
        } else {
            next.scores.add(self.current_player, formed.len() as u32);
            next.lines.extend(
                formed
                    .into_iter()
                    .map(|run| Line::new(run, self.current_player)),
            );
        }
        next.game_over = next.board.is_full();
        Ok(next)
    }

    /// Advance the countdown one tick. The countdown shows 0 for a full tick;
    /// the tick after that passes the turn.
    pub fn tick(&self) -> MatchState {
        let mut next = self.clone();
        if next.game_over {
            return next;
        }
        if next.timer == 0 {
            next.current_letter = next.current_letter.toggled();
            next.pass_turn();
        } else {
            next.timer -= 1;
        }
        next
    }

    /// A fresh match with the same configuration.
    pub fn reset(&self) -> MatchState {
        MatchState::new(self.config)
    }

    /// Lines completed since `earlier`, assuming `self` descends from it.
    pub fn lines_since(&self, earlier: &MatchState) -> &[Line] {
        let seen = earlier.lines.len().min(self.lines.len());
        &self.lines[seen..]
    }

    fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        self.timer = self.config.turn_seconds();
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

/// Start a match with the default configuration.
pub fn new_match() -> MatchState {
    MatchState::default()
}
