use seabattle::{BitBoard, BitBoardError, ShotLog};

#[test]
fn test_try_new_sizes() {
    assert!(BitBoard::<u128, 10>::try_new().is_ok());
    assert!(matches!(
        BitBoard::<u64, 10>::try_new(),
        Err(BitBoardError::SizeTooLarge { n: 10, capacity: 64 })
    ));
}

#[test]
fn test_get_set() {
    let mut bb = ShotLog::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    bb.set(9, 9).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert!(bb.get(9, 9).unwrap());
    assert!(!bb.get(1, 2).unwrap());
    assert_eq!(bb.count_ones(), 2);

    // setting twice is idempotent
    bb.set(1, 1).unwrap();
    assert_eq!(bb.count_ones(), 2);
}

#[test]
fn test_iter_set_bits_row_major() {
    let mut bb = BitBoard::<u16, 4>::new();
    bb.set(3, 3).unwrap();
    bb.set(0, 1).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
    assert_eq!(format!("{:?}", bb), "{(0, 1), (3, 3)}");
}

#[test]
fn test_out_of_bounds() {
    let mut bb = ShotLog::new();
    assert_eq!(bb.set(10, 0), Err(BitBoardError::IndexOutOfBounds { row: 10, col: 0 }));
    assert_eq!(bb.get(0, 10), Err(BitBoardError::IndexOutOfBounds { row: 0, col: 10 }));
    assert!(bb.is_empty());
}
