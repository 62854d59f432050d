//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, Configuration, Difficulty, GameEngine, GameError, GameMode, GameStatus, Mark,
    MoveOutcome, OpponentPolicy, Pos, Rules,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliSession, Settings};
