use std::collections::VecDeque;

use crate::{
    common::{Coord, MoveError},
    engine::MoveReport,
    state::MatchState,
};

use super::Participant;

/// Plays a fixed sequence of moves.
///
/// When the script runs out it either waits forever (letting the clock run
/// the turn out) or leaves the match, depending on `leave_when_done`.
pub struct ScriptedParticipant {
    moves: VecDeque<Coord>,
    leave_when_done: bool,
    rejected: usize,
    timeouts: usize,
    seen: usize,
}

impl ScriptedParticipant {
    pub fn new<I: IntoIterator<Item = Coord>>(moves: I) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            leave_when_done: false,
            rejected: 0,
            timeouts: 0,
            seen: 0,
        }
    }

    /// Leave the match instead of stalling once the script is exhausted.
    pub fn leave_when_done(mut self) -> Self {
        self.leave_when_done = true;
        self
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn timeouts(&self) -> usize {
        self.timeouts
    }

    /// Accepted moves this participant was told about, from either side.
    pub fn moves_seen(&self) -> usize {
        self.seen
    }
}

#[async_trait::async_trait]
impl Participant for ScriptedParticipant {
    async fn select_move(&mut self, _view: &MatchState) -> anyhow::Result<Option<Coord>> {
        match self.moves.pop_front() {
            Some(coord) => Ok(Some(coord)),
            None if self.leave_when_done => Ok(None),
            None => std::future::pending().await,
        }
    }

    fn handle_move(&mut self, _report: &MoveReport) {
        self.seen += 1;
    }

    fn handle_rejected(&mut self, coord: Coord, err: MoveError) {
        log::debug!("Scripted move {:?} rejected: {}", coord, err);
        self.rejected += 1;
    }

    fn handle_timeout(&mut self, _view: &MatchState) {
        self.timeouts += 1;
    }
}
