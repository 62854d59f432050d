// Move selection for the computer opponent: random, rule-of-thumb and a
// fixed-depth minimax search. Every speculative stone goes through a
// `Probe`, so the board is left exactly as it was found.

use alloc::vec::Vec;

use crate::core::board::{Board, Cell, Mark, Pos};
use crate::core::rules::{Rules, DIRECTIONS};
use rand::Rng;

/// Plies searched below each root move.
pub const SEARCH_DEPTH: u32 = 3;

/// Largest board on which minimax is used; bigger boards fall back to the
/// heuristic policy.
pub const MINIMAX_MAX_BOARD: usize = 5;

/// Weight of each matched stone in the positional evaluation.
const RUN_WEIGHT: i32 = 10;

/// Score of a line that ends the game, far above any positional score.
pub const WIN_SCORE: i32 = 1_000_000;

/// Pick a uniformly random empty cell.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Pos> {
    let moves: Vec<Pos> = board.empty_cells().collect();
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.random_range(0..moves.len())])
}

/// First empty cell, in row-major order, where `mark` would win at once.
pub fn find_winning_move(board: &mut Board, rules: &Rules, mark: Mark) -> Option<Pos> {
    let moves: Vec<Pos> = board.empty_cells().collect();
    moves.into_iter().find(|&pos| {
        let probe = board.probe_empty(pos, mark);
        rules.is_winning_move(&probe, pos, mark)
    })
}

/// Win if possible, otherwise block, otherwise take the centre, otherwise
/// play randomly.
pub fn heuristic_move<R: Rng + ?Sized>(
    board: &mut Board,
    rules: &Rules,
    mark: Mark,
    rng: &mut R,
) -> Option<Pos> {
    if let Some(pos) = find_winning_move(board, rules, mark) {
        return Some(pos);
    }
    if let Some(pos) = find_winning_move(board, rules, mark.opponent()) {
        return Some(pos);
    }
    let center = board.center();
    if board.get(center.row, center.col) == Ok(Cell::Empty) {
        return Some(center);
    }
    random_move(board, rng)
}

/// Best root move for `mark` by depth-limited minimax.
///
/// Root moves are compared with a strict `>`, so among equal scores the
/// first one in row-major order is kept.
pub fn minimax_move(board: &mut Board, rules: &Rules, mark: Mark) -> Option<Pos> {
    let moves: Vec<Pos> = board.empty_cells().collect();
    let mut best: Option<(Pos, i32)> = None;
    for pos in moves {
        let mut probe = board.probe_empty(pos, mark);
        let score = if rules.is_winning_move(&probe, pos, mark) {
            WIN_SCORE + SEARCH_DEPTH as i32 + 1
        } else {
            minimax(&mut probe, rules, mark, false, SEARCH_DEPTH)
        };
        drop(probe);
        log::trace!("minimax root {} scores {}", pos, score);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((pos, score));
        }
    }
    best.map(|(pos, _)| pos)
}

/// Minimax value of `board` from `me`'s point of view.
///
/// `maximizing` says whether `me` is the side to move. A speculative stone
/// that completes a line ends that branch with `±(WIN_SCORE + depth)`, so
/// quicker wins and slower losses are preferred. Otherwise recursion stops
/// at `depth == 0` (positional evaluation) or on a full board (0).
pub fn minimax(board: &mut Board, rules: &Rules, me: Mark, maximizing: bool, depth: u32) -> i32 {
    if depth == 0 {
        return evaluate_board(board, rules, me);
    }
    let moves: Vec<Pos> = board.empty_cells().collect();
    if moves.is_empty() {
        return 0;
    }

    let mover = if maximizing { me } else { me.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for pos in moves {
        let mut probe = board.probe_empty(pos, mover);
        let score = if rules.is_winning_move(&probe, pos, mover) {
            let win = WIN_SCORE + depth as i32;
            if maximizing {
                win
            } else {
                -win
            }
        } else {
            minimax(&mut probe, rules, me, !maximizing, depth - 1)
        };
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

/// Static positional score: for every cell and axis, the run of `me`
/// starting there (capped at the win length) weighted by ten, minus the
/// same sum for the opponent. Overlapping runs are counted once per start
/// cell, so this is a rough signal rather than a line count.
pub fn evaluate_board(board: &Board, rules: &Rules, me: Mark) -> i32 {
    let n = board.size();
    let mut score = 0i32;
    for row in 0..n {
        for col in 0..n {
            let start = Pos::new(row, col);
            for &dir in DIRECTIONS.iter() {
                score += evaluate_line(board, rules, start, dir, me) as i32 * RUN_WEIGHT;
                score -= evaluate_line(board, rules, start, dir, me.opponent()) as i32 * RUN_WEIGHT;
            }
        }
    }
    score
}

/// Length of the run of `mark` beginning at `start` and heading along
/// `dir`, looking at no more than `win_length` cells.
pub fn evaluate_line(
    board: &Board,
    rules: &Rules,
    start: Pos,
    (dr, dc): (isize, isize),
    mark: Mark,
) -> usize {
    let mut count = 0;
    let mut cur = Some(start);
    while count < rules.win_length() {
        match cur {
            Some(pos) if board.mark_at(pos) == Some(mark) => {
                count += 1;
                cur = board.step(pos, dr, dc);
            }
            _ => break,
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_is_antisymmetric() {
        let mut board = Board::new(4).unwrap();
        board.place(0, 0, Mark::X).unwrap();
        board.place(0, 1, Mark::X).unwrap();
        board.place(2, 2, Mark::O).unwrap();
        let rules = Rules::new(3);
        let x = evaluate_board(&board, &rules, Mark::X);
        assert_eq!(x, -evaluate_board(&board, &rules, Mark::O));
        assert!(x > 0);
    }

    #[test]
    fn evaluate_line_is_capped_at_win_length() {
        let mut board = Board::new(5).unwrap();
        for c in 0..5 {
            board.place(0, c, Mark::O).unwrap();
        }
        let rules = Rules::new(3);
        assert_eq!(evaluate_line(&board, &rules, Pos::new(0, 0), (0, 1), Mark::O), 3);
        assert_eq!(evaluate_line(&board, &rules, Pos::new(0, 3), (0, 1), Mark::O), 2);
        assert_eq!(evaluate_line(&board, &rules, Pos::new(1, 0), (0, 1), Mark::O), 0);
    }
}
