//! SOS line detection.
//!
//! A line is three cells reading S-O-S in one of four fixed directions. The
//! detector always scans the whole board; since marks are never removed every
//! line found earlier is found again, and the caller diffs by endpoints.

use alloc::vec::Vec;

use crate::board::Board;
use crate::common::{Cell, Coord, Player};
use crate::config::BOARD_SIZE;

/// Direction a run is scanned in from its start cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// (r, c) → (r, c + 2)
    Horizontal,
    /// (r, c) → (r + 2, c)
    Vertical,
    /// (r, c) → (r + 2, c + 2)
    DiagonalDown,
    /// (r, c) → (r - 2, c + 2)
    DiagonalUp,
}

impl Orientation {
    /// All orientations in scan order.
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagonalDown,
        Orientation::DiagonalUp,
    ];

    /// Row and column delta of one step.
    pub fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::DiagonalDown => (1, 1),
            Orientation::DiagonalUp => (-1, 1),
        }
    }

    /// The three cells of the run starting at `start`, or `None` if the run
    /// would leave the grid.
    pub fn cells_from(self, start: Coord) -> Option<[Coord; 3]> {
        let (dr, dc) = self.step();
        let at = |i: isize| -> Option<Coord> {
            let r = start.0 as isize + dr * i;
            let c = start.1 as isize + dc * i;
            let size = BOARD_SIZE as isize;
            if (0..size).contains(&r) && (0..size).contains(&c) {
                Some((r as usize, c as usize))
            } else {
                None
            }
        };
        Some([at(0)?, at(1)?, at(2)?])
    }
}

/// A qualifying S-O-S run, identified by its two S endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub start: Coord,
    pub end: Coord,
    pub orientation: Orientation,
}

impl Run {
    /// The middle (O) cell.
    pub fn middle(&self) -> Coord {
        ((self.start.0 + self.end.0) / 2, (self.start.1 + self.end.1) / 2)
    }

    /// Whether two runs share the same endpoints, ignoring orientation.
    pub fn same_endpoints(&self, start: Coord, end: Coord) -> bool {
        self.start == start && self.end == end
    }
}

/// A scored line: a run attributed to the player who completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub start: Coord,
    pub end: Coord,
    pub orientation: Orientation,
    pub owner: Player,
}

impl Line {
    pub fn new(run: Run, owner: Player) -> Self {
        Self {
            start: run.start,
            end: run.end,
            orientation: run.orientation,
            owner,
        }
    }

    /// Dedup key: lines are unique by endpoints alone.
    pub fn key(&self) -> (Coord, Coord) {
        (self.start, self.end)
    }
}

/// Find every S-O-S run on `board`, row-major and then in
/// [`Orientation::ALL`] order.
pub fn scan(board: &Board) -> Vec<Run> {
    let mut runs = Vec::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if board.cell((row, col)) != Cell::S {
                continue;
            }
            for orientation in Orientation::ALL {
                if let Some(run) = run_at(board, (row, col), orientation) {
                    runs.push(run);
                }
            }
        }
    }
    runs
}

/// Test the run that starts at `start` and goes in `orientation`.
pub fn run_at(board: &Board, start: Coord, orientation: Orientation) -> Option<Run> {
    let [p0, p1, p2] = orientation.cells_from(start)?;
    let reads_sos = board.cell(p0) == Cell::S
        && board.cell(p1) == Cell::O
        && board.cell(p2) == Cell::S;
    reads_sos.then_some(Run {
        start: p0,
        end: p2,
        orientation,
    })
}

/// Runs on `board` whose endpoints are not already claimed in `known`.
pub fn new_runs(board: &Board, known: &[Line]) -> Vec<Run> {
    scan(board)
        .into_iter()
        .filter(|run| !known.iter().any(|l| run.same_endpoints(l.start, l.end)))
        .collect()
}
