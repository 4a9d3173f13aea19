//! Commonly used types and utilities for ease of import.

pub use crate::{
    new_match, Board, Cell, Letter, Line, MatchConfig, MatchEngine, MatchState, MoveError,
    Outcome, Player, Scores,
};

#[cfg(feature = "std")]
pub use crate::{spawn_clock, MatchSession, Participant, SharedMatch};
