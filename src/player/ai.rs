use crate::core::{
    ai,
    board::{Board, Mark, Pos},
    config::Configuration,
    rules::Rules,
};
use rand::rngs::SmallRng;

use super::OpponentPolicy;

/// Easy: uniformly random empty cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPolicy;

/// Medium: immediate win, then block, then centre, then random.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicPolicy;

/// Hard: minimax on boards up to 5×5, the heuristic beyond that.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxPolicy;

impl OpponentPolicy for RandomPolicy {
    fn select_move(
        &self,
        board: &mut Board,
        _rules: &Rules,
        _config: &Configuration,
        _mark: Mark,
        rng: &mut SmallRng,
    ) -> Option<Pos> {
        ai::random_move(board, rng)
    }
}

impl OpponentPolicy for HeuristicPolicy {
    fn select_move(
        &self,
        board: &mut Board,
        rules: &Rules,
        _config: &Configuration,
        mark: Mark,
        rng: &mut SmallRng,
    ) -> Option<Pos> {
        ai::heuristic_move(board, rules, mark, rng)
    }
}

impl OpponentPolicy for MinimaxPolicy {
    fn select_move(
        &self,
        board: &mut Board,
        rules: &Rules,
        config: &Configuration,
        mark: Mark,
        rng: &mut SmallRng,
    ) -> Option<Pos> {
        if config.board_size() <= ai::MINIMAX_MAX_BOARD {
            ai::minimax_move(board, rules, mark)
        } else {
            HeuristicPolicy.select_move(board, rules, config, mark, rng)
        }
    }
}
