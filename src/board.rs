//! The 6×6 SOS grid, stored as one `BitBoard` per letter.

use crate::common::{BoardError, Cell, Coord, Letter};
use crate::config::{BB, BOARD_SIZE};
use core::fmt;

/// Grid of S and O marks. Cells only ever go from empty to filled.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Marks")
)]
pub struct Board {
    s_marks: BB,
    o_marks: BB,
}

/// Unchecked wire form of a [`Board`].
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct Marks {
    s_marks: BB,
    o_marks: BB,
}

#[cfg(feature = "std")]
impl TryFrom<Marks> for Board {
    type Error = BoardError;

    fn try_from(marks: Marks) -> Result<Self, Self::Error> {
        let board = Board {
            s_marks: marks.s_marks,
            o_marks: marks.o_marks,
        };
        board.check_marks()?;
        Ok(board)
    }
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            s_marks: BB::new(),
            o_marks: BB::new(),
        }
    }

    /// Content of the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if self.s_marks.get(row, col)? {
            Ok(Cell::S)
        } else if self.o_marks.get(row, col)? {
            Ok(Cell::O)
        } else {
            Ok(Cell::Empty)
        }
    }

    /// Board with `letter` written at (row, col). The target must be empty.
    pub fn set(&self, row: usize, col: usize, letter: Letter) -> Result<Board, BoardError> {
        if !self.get(row, col)?.is_empty() {
            return Err(BoardError::CellOccupied { row, col });
        }
        let mut next = *self;
        match letter {
            Letter::S => next.s_marks.set(row, col)?,
            Letter::O => next.o_marks.set(row, col)?,
        }
        Ok(next)
    }

    /// Cell lookup for coordinates the caller already knows are on the grid.
    pub(crate) fn cell(&self, (row, col): Coord) -> Cell {
        self.get(row, col).unwrap_or(Cell::Empty)
    }

    /// A cell may hold S or O, never both.
    #[cfg(feature = "std")]
    fn check_marks(&self) -> Result<(), BoardError> {
        match (self.s_marks & self.o_marks).iter_set_bits().next() {
            Some((row, col)) => Err(BoardError::OverlappingMarks { row, col }),
            None => Ok(()),
        }
    }

    /// Mask of every filled cell.
    pub fn occupied(&self) -> BB {
        self.s_marks | self.o_marks
    }

    /// Returns `true` when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    pub fn filled_count(&self) -> usize {
        self.occupied().count_ones()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> {
        (!self.occupied()).iter_set_bits()
    }

    /// Every cell with its content, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        (0..BOARD_SIZE)
            .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
            .map(move |pos| (pos, self.cell(pos)))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for r in 0..BOARD_SIZE {
            write!(f, "  ")?;
            for c in 0..BOARD_SIZE {
                let ch = self.cell((r, c)).letter().map_or('.', Letter::as_char);
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
