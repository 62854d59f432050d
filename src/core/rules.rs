//! Win and draw detection for N-in-a-row.
//!
//! Wins are checked incrementally: after every placement the caller asks
//! about that one stone, and only lines through it are scanned.

use alloc::vec::Vec;

use crate::core::board::{Board, Mark, Pos};
use crate::core::config::Configuration;

/// Axis directions scanned from a stone; the opposite sense of each is
/// covered by walking backwards.
pub const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // diagonal
    (1, -1), // anti-diagonal
];

/// Rules engine parameterised by the run length needed to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    win_length: usize,
}

impl Rules {
    pub fn new(win_length: usize) -> Self {
        Self { win_length }
    }

    pub fn from_config(config: &Configuration) -> Self {
        Self::new(config.win_length())
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Check whether the stone just placed at `pos` completes a line of
    /// `mark`.
    ///
    /// Returns the winning line, exactly `win_length` cells ordered along
    /// the axis. When the run is longer than needed, cells on the positive
    /// side of `pos` are taken first. The origin itself is not read from
    /// the board, so this also answers "would `mark` win here".
    pub fn check_win(&self, board: &Board, pos: Pos, mark: Mark) -> Option<Vec<Pos>> {
        let k = self.win_length;
        if k == 0 {
            return None;
        }
        for &(dr, dc) in DIRECTIONS.iter() {
            let forward = self.run(board, pos, mark, dr, dc);
            let backward = self.run(board, pos, mark, -dr, -dc);
            if 1 + forward.len() + backward.len() < k {
                continue;
            }

            let mut line = Vec::with_capacity(1 + forward.len() + backward.len());
            line.extend(backward.iter().rev().copied());
            line.push(pos);
            line.extend(forward.iter().copied());

            let taken_forward = forward.len().min(k - 1);
            let start = backward.len().saturating_sub(k - 1 - taken_forward);
            line.truncate(start + k);
            line.drain(..start);
            return Some(line);
        }
        None
    }

    /// Boolean form of [`Rules::check_win`].
    pub fn is_winning_move(&self, board: &Board, pos: Pos, mark: Mark) -> bool {
        self.check_win(board, pos, mark).is_some()
    }

    /// A full board is a draw, provided the caller has already ruled out a
    /// win for the stone that filled it.
    pub fn check_draw(&self, board: &Board) -> bool {
        board.is_full()
    }

    /// Consecutive `mark` stones walking away from `pos`, at most
    /// `win_length - 1` of them.
    fn run(&self, board: &Board, pos: Pos, mark: Mark, dr: isize, dc: isize) -> Vec<Pos> {
        let mut cells = Vec::new();
        let mut cur = pos;
        while cells.len() + 1 < self.win_length {
            match board.step(cur, dr, dc) {
                Some(next) if board.mark_at(next) == Some(mark) => {
                    cells.push(next);
                    cur = next;
                }
                _ => break,
            }
        }
        cells
    }
}
