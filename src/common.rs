//! Common types for SOS: cells, letters, players and the error enums.

use core::fmt;

use crate::bitboard::BitBoardError;

/// Grid coordinate as `(row, col)`.
pub type Coord = (usize, usize);

/// Letter a player can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Letter {
    S,
    O,
}

impl Letter {
    /// The other letter.
    pub fn toggled(self) -> Self {
        match self {
            Letter::S => Letter::O,
            Letter::O => Letter::S,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::S => 'S',
            Letter::O => 'O',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    S,
    O,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Letter held by the cell, if any.
    pub fn letter(self) -> Option<Letter> {
        match self {
            Cell::Empty => None,
            Cell::S => Some(Letter::S),
            Cell::O => Some(Letter::O),
        }
    }
}

impl From<Letter> for Cell {
    fn from(letter: Letter) -> Self {
        match letter {
            Letter::S => Cell::S,
            Letter::O => Cell::O,
        }
    }
}

/// The two sides of a match. Blue always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    Blue,
    Red,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Blue => Player::Red,
            Player::Red => Player::Blue,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Blue => "Blue",
            Player::Red => "Red",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column outside the 6×6 grid.
    InvalidCoordinate { row: usize, col: usize },
    /// Target cell already holds a letter.
    CellOccupied { row: usize, col: usize },
    /// A cell is marked with both letters (only from untrusted input).
    OverlappingMarks { row: usize, col: usize },
    /// Underlying bitboard error other than an out-of-range index.
    BitBoard(BitBoardError),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => {
                BoardError::InvalidCoordinate { row, col }
            }
            other => BoardError::BitBoard(other),
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidCoordinate { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the board", row, col)
            }
            BoardError::CellOccupied { row, col } => {
                write!(f, "Cell ({}, {}) is already occupied", row, col)
            }
            BoardError::OverlappingMarks { row, col } => {
                write!(f, "Cell ({}, {}) holds both S and O", row, col)
            }
            BoardError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
        }
    }
}

/// Reasons a move is rejected. A rejected move never changes the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Rejected by the board (bad coordinate or occupied cell).
    Board(BoardError),
    /// The match has already ended.
    GameOver,
    /// The move was made for a player whose turn has already passed.
    NotYourTurn(Player),
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        MoveError::Board(err)
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Board(e) => write!(f, "Illegal move: {}", e),
            MoveError::GameOver => write!(f, "Illegal move: the match is over"),
            MoveError::NotYourTurn(p) => write!(f, "Illegal move: it is not {}'s turn", p),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
