#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
mod engine;
pub mod lines;
pub mod playout;
pub mod prelude;
mod state;
#[cfg(feature = "std")]
pub mod clock;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod participant;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use engine::*;
pub use lines::{Line, Orientation, Run};
pub use state::*;
#[cfg(feature = "std")]
pub use clock::{spawn_clock, spawn_default_clock, ClockHandle, SharedMatch};
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with};
#[cfg(feature = "std")]
pub use participant::{CliParticipant, Participant, ScriptedParticipant};
#[cfg(feature = "std")]
pub use session::MatchSession;
