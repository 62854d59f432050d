//! Opponent policies
//!
//! This module defines the OpponentPolicy trait and provides concrete
//! implementations, one per difficulty:
//! - RandomPolicy: any empty cell
//! - HeuristicPolicy: win, block, centre, random
//! - MinimaxPolicy: fixed-depth search on small boards
//!
//! The std-only `cli` module holds the interactive terminal front end.

use alloc::boxed::Box;
use rand::rngs::SmallRng;

use crate::core::{
    board::{Board, Mark, Pos},
    config::{Configuration, Difficulty},
    rules::Rules,
};

/// Interface implemented by the computer opponent's strategies.
///
/// A policy may place speculative stones while it thinks, but must leave
/// the board exactly as it found it. It never applies the move it returns;
/// the match controller does that.
pub trait OpponentPolicy {
    /// Choose a cell for `mark`. Returns `None` iff the board has no empty
    /// cell.
    fn select_move(
        &self,
        board: &mut Board,
        rules: &Rules,
        config: &Configuration,
        mark: Mark,
        rng: &mut SmallRng,
    ) -> Option<Pos>;
}

impl Difficulty {
    /// The policy that plays at this difficulty.
    pub fn policy(self) -> Box<dyn OpponentPolicy> {
        match self {
            Difficulty::Easy => Box::new(RandomPolicy),
            Difficulty::Medium => Box::new(HeuristicPolicy),
            Difficulty::Hard => Box::new(MinimaxPolicy),
        }
    }
}

// Re-export implementations
pub mod ai;
pub use ai::{HeuristicPolicy, MinimaxPolicy, RandomPolicy};

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliSession;
