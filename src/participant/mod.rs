//! Participant trait and implementations
//!
//! A participant supplies moves for one side of a match:
//! - CliParticipant: reads coordinates typed at the terminal
//! - ScriptedParticipant: replays a fixed list of moves

use crate::{
    common::{Coord, MoveError},
    engine::MoveReport,
    state::MatchState,
};

/// Source of moves for one player.
///
/// `select_move` may be cancelled at any await point: the session drops the
/// pending request when the turn clock expires and asks again later.
#[async_trait::async_trait]
pub trait Participant: Send {
    /// Choose the next cell. `Ok(None)` means the participant left the match.
    async fn select_move(&mut self, view: &MatchState) -> anyhow::Result<Option<Coord>>;

    /// A move was accepted (either side's).
    fn handle_move(&mut self, _report: &MoveReport) {}

    /// This participant's move was refused; the turn is unchanged.
    fn handle_rejected(&mut self, _coord: Coord, _err: MoveError) {}

    /// This participant's turn expired before a move arrived.
    fn handle_timeout(&mut self, _view: &MatchState) {}
}

pub mod cli;
pub use cli::{parse_coord, CliParticipant};

pub mod scripted;
pub use scripted::ScriptedParticipant;
