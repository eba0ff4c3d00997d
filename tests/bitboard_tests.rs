use battleships::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    // 10×10 fits in a u128
    let ok = BitBoard::<u128, 10>::try_new();
    assert!(ok.is_ok());

    let err = BitBoard::<u8, 3>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { .. })));
}

#[test]
fn test_set_reports_new_bits() {
    let mut bb = BitBoard::<u128, 10>::new();
    assert!(bb.is_empty());

    assert!(bb.set(9, 9).unwrap());
    assert!(!bb.set(9, 9).unwrap());
    assert!(bb.get(9, 9).unwrap());
    assert_eq!(bb.count_ones(), 1);
}

#[test]
fn test_out_of_bounds() {
    let mut bb = BitBoard::<u128, 10>::new();
    assert_eq!(
        bb.set(10, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 10, col: 0 })
    );
    assert!(bb.get(0, 10).is_err());
    assert!(!bb.contains(0, 10));
    assert!(bb.is_empty());
}

#[test]
fn test_iter_and_subset() {
    let mut small = BitBoard::<u128, 10>::new();
    small.set(0, 1).unwrap();
    let mut big = small;
    big.set(3, 3).unwrap();

    let bits: Vec<_> = big.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
    assert!(small.is_subset(&big));
    assert!(!big.is_subset(&small));
    assert_eq!(big & small, small);
}
