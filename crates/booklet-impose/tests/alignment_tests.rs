use booklet_impose::*;

fn pages(nums: &[usize]) -> Vec<PageRef> {
    nums.iter().map(|&n| PageRef::Page(n)).collect()
}

fn spread(a: usize, b: usize) -> SpreadPair {
    SpreadPair::new(a, b).unwrap()
}

#[test]
fn test_spread_pair_normalizes_order() {
    let pair = SpreadPair::new(3, 2).unwrap();
    assert_eq!(pair.left(), 2);
    assert_eq!(pair.right(), 3);
    assert_eq!(pair.as_tuple(), (2, 3));
    assert!(pair.contains(3));
    assert!(!pair.contains(4));
}

#[test]
fn test_spread_pair_rejects_non_adjacent() {
    assert!(matches!(
        SpreadPair::new(1, 5),
        Err(ImposeError::InvalidSpread { first: 1, second: 5 })
    ));
    assert!(SpreadPair::new(4, 4).is_err());
}

#[test]
fn test_spread_pair_from_str() {
    assert_eq!("12-13".parse::<SpreadPair>().unwrap(), spread(12, 13));
    assert_eq!(" 9 - 8 ".parse::<SpreadPair>().unwrap(), spread(8, 9));
    assert!("12".parse::<SpreadPair>().is_err());
    assert!("1-3".parse::<SpreadPair>().is_err());
    assert_eq!(spread(8, 9).to_string(), "8-9");
}

#[test]
fn test_aligned_spread() {
    let results = check_spread_alignment(&pages(&[1, 2, 3, 4]), &[spread(2, 3)]);
    assert_eq!(results.len(), 1);
    assert!(results[0].is_aligned);
    assert_eq!((results[0].position_left, results[0].position_right), (1, 2));
}

#[test]
fn test_misaligned_spread() {
    let results = check_spread_alignment(&pages(&[1, 2, 3, 4]), &[spread(1, 2)]);
    assert_eq!(results.len(), 1);
    assert!(!results[0].is_aligned);
    assert_eq!(
        results[0].warning(),
        "Spread 1-2 misaligned (positions 1,2)"
    );
}

#[test]
fn test_reversed_order_still_aligned() {
    // Right page first, at an odd position
    let results = check_spread_alignment(&pages(&[1, 3, 2, 4]), &[spread(2, 3)]);
    assert!(results[0].is_aligned);
}

#[test]
fn test_missing_page_skips_pair() {
    let results = check_spread_alignment(&pages(&[1, 2, 3]), &[spread(3, 4), spread(2, 3)]);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].pair, spread(2, 3));
}

#[test]
fn test_first_occurrence_counts() {
    // Page 2 appears at 1 and 4; the first occurrence pairs with 3 at 2
    let results = check_spread_alignment(&pages(&[1, 2, 3, 4, 2]), &[spread(2, 3)]);
    assert!(results[0].is_aligned);
}

#[test]
fn test_blanks_shift_positions() {
    let selection = vec![PageRef::Blank, PageRef::Page(1), PageRef::Page(2)];
    let results = check_spread_alignment(&selection, &[spread(1, 2)]);
    assert!(results[0].is_aligned);
}

#[test]
fn test_misaligned_filter() {
    let results = check_spread_alignment(
        &pages(&[1, 2, 3, 4, 5, 6]),
        &[spread(1, 2), spread(2, 3), spread(5, 6)],
    );
    let bad = misaligned_spreads(&results);
    assert_eq!(
        bad.iter().map(|r| r.pair).collect::<Vec<_>>(),
        vec![spread(1, 2), spread(5, 6)]
    );
}
