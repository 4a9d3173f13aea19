use crate::bitboard::BitBoard;

pub const BOARD_SIZE: usize = 6;

/// Total number of cells; a match lasts exactly this many moves.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Countdown a player gets for each turn, in clock ticks.
pub const DEFAULT_TURN_SECONDS: u32 = 10;

/// Real-time length of one clock tick.
pub const TICK_MILLIS: u64 = 1000;

/// Bitboard type backing the SOS grid.
pub type BB = BitBoard<u64, BOARD_SIZE>;

/// Per-match settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchConfig {
    turn_seconds: u32,
}

impl MatchConfig {
    /// Config with the given countdown. A zero countdown is raised to 1.
    pub const fn new(turn_seconds: u32) -> Self {
        Self {
            turn_seconds: if turn_seconds == 0 { 1 } else { turn_seconds },
        }
    }

    /// Initial countdown value for every turn.
    pub fn turn_seconds(&self) -> u32 {
        self.turn_seconds
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TURN_SECONDS)
    }
}
