use caro::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    assert!(BitBoard::<u128>::try_new(10).is_ok());
    assert!(BitBoard::<u16>::try_new(4).is_ok());

    let err = BitBoard::<u8>::try_new(3);
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { n: 3, .. })));
}

#[test]
fn test_get_set_clear() {
    let mut bb = BitBoard::<u16>::new(4);
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert_eq!(bb.count_ones(), 1);

    bb.clear(1, 1).unwrap();
    assert!(!bb.get(1, 1).unwrap());

    bb.set(2, 3).unwrap();
    assert!(bb.get(2, 3).unwrap());
}

#[test]
fn test_out_of_bounds() {
    let mut bb = BitBoard::<u32>::new(5);
    assert_eq!(
        bb.set(5, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 5, col: 0 })
    );
    assert!(bb.get(0, 5).is_err());
    assert!(bb.clear(7, 7).is_err());
}

#[test]
fn test_iter_set_bits_row_major() {
    let mut bb = BitBoard::<u16>::new(4);
    bb.set(3, 3).unwrap();
    bb.set(0, 1).unwrap();
    bb.set(2, 0).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (2, 0), (3, 3)]);
}

#[test]
fn test_not_stays_inside_the_board() {
    let mut bb = BitBoard::<u128>::new(3);
    bb.set(1, 1).unwrap();
    let inverted = !bb;
    assert_eq!(inverted.count_ones(), 8);
    assert!(!inverted.get(1, 1).unwrap());
    assert!((bb | inverted).is_full());
}
