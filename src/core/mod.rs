//! Core caro game engine (no_std compatible)
//!
//! This module contains the pure game logic: board, rules, opponent search
//! and the match controller. It depends only on `alloc`, num-traits, rand
//! and the `log` facade, and never touches rendering or storage.

pub mod ai;
pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use ai::{evaluate_board, heuristic_move, minimax_move, random_move};
pub use bitboard::{BitBoard, BitBoardError};
pub use board::{Board, Cell, EmptyCells, Mark, Pos, Probe};
pub use common::{ConfigError, GameError, IllegalMove};
pub use config::*;
pub use game::{GameEngine, GameSnapshot, GameStatus, MoveOutcome, MoveRecord, Outcome, Score};
pub use rules::Rules;
