use caro::{Board, Cell, ConfigError, GameError, Mark, Pos};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(5).unwrap();
    assert_eq!(board.size(), 5);
    assert!(board.is_empty());
    assert!(!board.is_full());
    assert_eq!(board.empty_cells().count(), 25);
    assert_eq!(board.get(4, 4), Ok(Cell::Empty));
}

#[test]
fn test_oversized_board_is_rejected() {
    assert!(matches!(
        Board::new(12),
        Err(GameError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_board_size_must_be_in_range() {
    for n in [0, 1, 2, 11] {
        assert_eq!(
            Board::new(n),
            Err(GameError::InvalidConfiguration(ConfigError::BoardSize(n)))
        );
    }
    for n in 3..=10 {
        assert_eq!(Board::new(n).unwrap().size(), n);
    }
}

#[test]
fn test_place_and_get() {
    let mut board = Board::new(5).unwrap();
    board.place(2, 3, Mark::X).unwrap();
    board.place(0, 0, Mark::O).unwrap();
    assert_eq!(board.get(2, 3), Ok(Cell::X));
    assert_eq!(board.get(0, 0), Ok(Cell::O));
    assert_eq!(board.mark_at(Pos::new(2, 3)), Some(Mark::X));
    assert_eq!(board.stone_count(), 2);
}

#[test]
fn test_place_out_of_bounds() {
    let mut board = Board::new(5).unwrap();
    assert_eq!(
        board.place(5, 5, Mark::X),
        Err(GameError::OutOfBounds { row: 5, col: 5 })
    );
    assert_eq!(board.get(0, 5), Err(GameError::OutOfBounds { row: 0, col: 5 }));
    assert!(board.is_empty());
}

#[test]
fn test_place_on_occupied_cell() {
    let mut board = Board::new(3).unwrap();
    board.place(1, 1, Mark::X).unwrap();
    assert_eq!(
        board.place(1, 1, Mark::O),
        Err(GameError::CellOccupied { row: 1, col: 1 })
    );
    assert_eq!(
        board.place(1, 1, Mark::X),
        Err(GameError::CellOccupied { row: 1, col: 1 })
    );
    assert_eq!(board.get(1, 1), Ok(Cell::X));
}

#[test]
fn test_clear_is_idempotent() {
    let mut board = Board::new(4).unwrap();
    board.place(3, 0, Mark::O).unwrap();
    board.clear(3, 0).unwrap();
    board.clear(3, 0).unwrap();
    assert_eq!(board.get(3, 0), Ok(Cell::Empty));
    assert!(board.clear(4, 0).is_err());
}

#[test]
fn test_empty_cells_row_major() {
    let mut board = Board::new(3).unwrap();
    board.place(0, 1, Mark::X).unwrap();
    board.place(1, 0, Mark::O).unwrap();
    board.place(2, 2, Mark::X).unwrap();
    let cells: Vec<Pos> = board.empty_cells().collect();
    assert_eq!(
        cells,
        [(0, 0), (0, 2), (1, 1), (1, 2), (2, 0), (2, 1)]
            .map(Pos::from)
            .to_vec()
    );
}

#[test]
fn test_empty_cells_restarts_after_mutation() {
    let mut board = Board::new(3).unwrap();
    let first = board.empty_cells().next();
    assert_eq!(first, Some(Pos::new(0, 0)));
    board.place(0, 0, Mark::X).unwrap();
    assert_eq!(board.empty_cells().next(), Some(Pos::new(0, 1)));
}

#[test]
fn test_full_board() {
    let mut board = Board::new(3).unwrap();
    let mut mark = Mark::X;
    for r in 0..3 {
        for c in 0..3 {
            board.place(r, c, mark).unwrap();
            mark = mark.opponent();
        }
    }
    assert!(board.is_full());
    assert_eq!(board.empty_cells().next(), None);
    assert_eq!(board.stones(Mark::X).count(), 5);
    assert_eq!(board.stones(Mark::O).count(), 4);
}

#[test]
fn test_probe_lifts_stone_on_drop() {
    let mut board = Board::new(5).unwrap();
    {
        let probe = board.probe(Pos::new(2, 2), Mark::O).unwrap();
        assert_eq!(probe.mark_at(Pos::new(2, 2)), Some(Mark::O));
    }
    assert!(board.is_empty());
}

#[test]
fn test_center() {
    assert_eq!(Board::new(3).unwrap().center(), Pos::new(1, 1));
    assert_eq!(Board::new(4).unwrap().center(), Pos::new(2, 2));
    assert_eq!(Board::new(10).unwrap().center(), Pos::new(5, 5));
}
