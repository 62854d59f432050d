use caro::core::ai::find_winning_move;
use caro::{
    heuristic_move, minimax_move, random_move, Board, Configuration, Difficulty, GameMode,
    HeuristicPolicy, Mark, MinimaxPolicy, OpponentPolicy, Pos, RandomPolicy, Rules,
};
use rand::{rngs::SmallRng, SeedableRng};

fn board_with(n: usize, stones: &[(usize, usize, Mark)]) -> Board {
    let mut board = Board::new(n).unwrap();
    for &(r, c, m) in stones {
        board.place(r, c, m).unwrap();
    }
    board
}

fn config(n: usize, k: usize) -> Configuration {
    Configuration::new(n, k, Difficulty::Hard, GameMode::HumanVsComputer).unwrap()
}

#[test]
fn test_heuristic_blocks_open_line() {
    let mut board = board_with(3, &[(0, 0, Mark::X), (0, 1, Mark::X)]);
    let mut rng = SmallRng::seed_from_u64(1);
    let pos = heuristic_move(&mut board, &Rules::new(3), Mark::O, &mut rng);
    assert_eq!(pos, Some(Pos::new(0, 2)));
}

#[test]
fn test_heuristic_prefers_win_over_block() {
    let mut board = board_with(
        3,
        &[
            (0, 0, Mark::X),
            (0, 1, Mark::X),
            (1, 0, Mark::O),
            (1, 1, Mark::O),
            (2, 2, Mark::X),
        ],
    );
    let mut rng = SmallRng::seed_from_u64(1);
    let pos = heuristic_move(&mut board, &Rules::new(3), Mark::O, &mut rng);
    assert_eq!(pos, Some(Pos::new(1, 2)));
}

#[test]
fn test_heuristic_takes_center_then_random() {
    let rules = Rules::new(4);
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new(5).unwrap();
    assert_eq!(
        heuristic_move(&mut board, &rules, Mark::O, &mut rng),
        Some(Pos::new(2, 2))
    );
    board.place(2, 2, Mark::X).unwrap();
    let pos = heuristic_move(&mut board, &rules, Mark::O, &mut rng).unwrap();
    assert_ne!(pos, Pos::new(2, 2));
    assert!(board.mark_at(pos).is_none());
}

#[test]
fn test_find_winning_move_is_row_major_first() {
    // two winning cells for X: (0, 2) and (2, 0)
    let mut board = board_with(3, &[(0, 0, Mark::X), (0, 1, Mark::X), (1, 0, Mark::X)]);
    let before = board.clone();
    assert_eq!(
        find_winning_move(&mut board, &Rules::new(3), Mark::X),
        Some(Pos::new(0, 2))
    );
    assert_eq!(find_winning_move(&mut board, &Rules::new(3), Mark::O), None);
    assert_eq!(board, before);
}

#[test]
fn test_random_move_picks_empty_cells() {
    let board = board_with(3, &[(0, 0, Mark::X), (1, 1, Mark::O), (2, 2, Mark::X)]);
    let mut rng = SmallRng::seed_from_u64(99);
    for _ in 0..50 {
        let pos = random_move(&board, &mut rng).unwrap();
        assert!(board.mark_at(pos).is_none());
    }
}

#[test]
fn test_minimax_takes_immediate_win() {
    let mut board = board_with(
        3,
        &[(0, 0, Mark::O), (1, 1, Mark::O), (0, 1, Mark::X), (0, 2, Mark::X)],
    );
    assert_eq!(
        minimax_move(&mut board, &Rules::new(3), Mark::O),
        Some(Pos::new(2, 2))
    );
}

#[test]
fn test_minimax_blocks_threat() {
    let mut board = board_with(3, &[(0, 0, Mark::X), (0, 1, Mark::X), (1, 1, Mark::O)]);
    assert_eq!(
        minimax_move(&mut board, &Rules::new(3), Mark::O),
        Some(Pos::new(0, 2))
    );
}

#[test]
fn test_minimax_leaves_board_untouched() {
    let mut board = board_with(4, &[(1, 1, Mark::X), (2, 2, Mark::O), (0, 3, Mark::X)]);
    let before = board.clone();
    let pos = minimax_move(&mut board, &Rules::new(3), Mark::O).unwrap();
    assert_eq!(board, before);
    assert!(board.mark_at(pos).is_none());
}

#[test]
fn test_policies_return_none_on_full_board() {
    let mut board = Board::new(3).unwrap();
    let mut mark = Mark::X;
    for r in 0..3 {
        for c in 0..3 {
            board.place(r, c, mark).unwrap();
            mark = mark.opponent();
        }
    }
    let rules = Rules::new(3);
    let cfg = config(3, 3);
    let mut rng = SmallRng::seed_from_u64(0);
    let policies: [&dyn OpponentPolicy; 3] = [&RandomPolicy, &HeuristicPolicy, &MinimaxPolicy];
    for policy in policies {
        assert_eq!(policy.select_move(&mut board, &rules, &cfg, Mark::O, &mut rng), None);
    }
}

#[test]
fn test_each_difficulty_returns_a_legal_move() {
    let stones = [(0, 0, Mark::X), (1, 1, Mark::O), (3, 3, Mark::X)];
    let rules = Rules::new(3);
    let cfg = config(4, 3);
    let mut rng = SmallRng::seed_from_u64(3);
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let mut board = board_with(4, &stones);
        let before = board.clone();
        let pos = difficulty
            .policy()
            .select_move(&mut board, &rules, &cfg, Mark::O, &mut rng)
            .unwrap();
        assert_eq!(board, before);
        assert!(board.mark_at(pos).is_none(), "{:?} chose {}", difficulty, pos);
    }
}

#[test]
fn test_hard_falls_back_to_heuristic_on_large_boards() {
    let mut board = Board::new(7).unwrap();
    let cfg = config(7, 5);
    let mut rng = SmallRng::seed_from_u64(5);
    let pos = MinimaxPolicy.select_move(&mut board, &Rules::new(5), &cfg, Mark::O, &mut rng);
    assert_eq!(pos, Some(Pos::new(3, 3)));
}

#[test]
fn test_heuristic_with_taken_center() {
    let mut rng = SmallRng::seed_from_u64(3);
    for n in 3..=10 {
        let rules = Rules::new(3);
        let mut board = Board::new(n).unwrap();
        board.place(n / 2, n / 2, Mark::X).unwrap();
        let pos = heuristic_move(&mut board, &rules, Mark::O, &mut rng).unwrap();
        assert!(pos.row < n && pos.col < n);
        assert!(board.mark_at(pos).is_none());
    }
}

#[test]
fn test_heuristic_on_full_board() {
    let mut rng = SmallRng::seed_from_u64(3);
    for n in 3..=6 {
        let mut board = Board::new(n).unwrap();
        for r in 0..n {
            for c in 0..n {
                // columns in pairs so no K=n line forms for either mark
                let mark = if (c / 2 + r) % 2 == 0 { Mark::X } else { Mark::O };
                board.place(r, c, mark).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(heuristic_move(&mut board, &Rules::new(n), Mark::O, &mut rng), None);
    }
}

#[test]
fn test_minimax_ties_go_to_row_major_first() {
    // X wins at once on (0, 2) or (2, 0); both score the same
    let mut board = board_with(
        3,
        &[
            (0, 0, Mark::X),
            (0, 1, Mark::X),
            (1, 0, Mark::X),
            (1, 1, Mark::O),
            (2, 2, Mark::O),
        ],
    );
    assert_eq!(
        minimax_move(&mut board, &Rules::new(3), Mark::X),
        Some(Pos::new(0, 2))
    );
}

#[test]
fn test_minimax_opening_is_first_of_its_symmetry_class() {
    // the evaluation is symmetric under rotation and reflection, so each
    // tie class is represented by its row-major first cell
    let mut board = Board::new(3).unwrap();
    let pos = minimax_move(&mut board, &Rules::new(3), Mark::X).unwrap();
    assert!(
        [Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 1)].contains(&pos),
        "{:?}",
        pos
    );
    assert!(board.is_empty());
}
