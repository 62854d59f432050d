//! Common error types for the caro engine.

use ::core::fmt;

use crate::core::bitboard::BitBoardError;

/// Why a move or request was rejected by the match state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// The match has not started or has already finished.
    NotInProgress,
    /// A computer reply is pending; human input is closed until it lands.
    AwaitingComputer,
    /// A computer move was submitted while no computer reply was pending.
    NotComputerTurn,
    /// The policy found no empty cell to play.
    NoMoveAvailable,
    /// Hints are only offered to the human in a human-vs-computer match.
    HintUnavailable,
}

/// Rejected configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Board size outside `3..=10`.
    BoardSize(usize),
    /// Win length outside `3..=max`.
    WinLength { win_length: usize, max: usize },
}

/// Errors returned by board, rules and match operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate outside `0..N`.
    OutOfBounds { row: usize, col: usize },
    /// Placement target is not empty.
    CellOccupied { row: usize, col: usize },
    /// Move attempted in the wrong match state.
    IllegalMove(IllegalMove),
    /// Undo requested with an empty move history.
    NothingToUndo,
    /// Configuration values out of range.
    InvalidConfiguration(ConfigError),
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => GameError::OutOfBounds { row, col },
            BitBoardError::SizeTooLarge { n, .. } => {
                GameError::InvalidConfiguration(ConfigError::BoardSize(n))
            }
        }
    }
}

impl From<IllegalMove> for GameError {
    fn from(reason: IllegalMove) -> Self {
        GameError::IllegalMove(reason)
    }
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::NotInProgress => write!(f, "match is not in progress"),
            IllegalMove::AwaitingComputer => write!(f, "waiting for the computer to move"),
            IllegalMove::NotComputerTurn => write!(f, "it is not the computer's turn"),
            IllegalMove::NoMoveAvailable => write!(f, "no empty cell left to play"),
            IllegalMove::HintUnavailable => {
                write!(f, "hints are only available on your turn against the computer")
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoardSize(n) => write!(f, "board size {} is outside 3..=10", n),
            ConfigError::WinLength { win_length, max } => {
                write!(f, "win length {} is outside 3..={}", win_length, max)
            }
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is off the board", row, col)
            }
            GameError::CellOccupied { row, col } => {
                write!(f, "cell ({}, {}) is already taken", row, col)
            }
            GameError::IllegalMove(reason) => write!(f, "illegal move: {}", reason),
            GameError::NothingToUndo => write!(f, "no move to undo"),
            GameError::InvalidConfiguration(e) => write!(f, "invalid configuration: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
