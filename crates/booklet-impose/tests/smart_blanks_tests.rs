use booklet_impose::*;

const B: PageRef = PageRef::Blank;

fn p(n: usize) -> PageRef {
    PageRef::Page(n)
}

fn pages(nums: &[usize]) -> Vec<PageRef> {
    nums.iter().map(|&n| p(n)).collect()
}

fn spread(a: usize, b: usize) -> SpreadPair {
    SpreadPair::new(a, b).unwrap()
}

#[test]
fn test_front_cover_gets_leading_blank() {
    let result = calculate_smart_blanks(&pages(&[5, 1, 2, 3]), Some(5), None, &[]);
    assert_eq!(&result.pages[..5], &[B, p(5), p(1), p(2), p(3)]);
    assert_eq!(result.pages.len(), 8);
    assert_eq!(
        result.changes,
        vec![
            "Added blank before front cover (page 5)".to_string(),
            "Added 3 blank(s) to fill booklet".to_string(),
        ]
    );
}

#[test]
fn test_front_cover_inside_selection() {
    let result = calculate_smart_blanks(&pages(&[1, 2, 3]), Some(2), None, &[]);
    assert_eq!(result.pages, vec![B, p(1), p(2), p(3)]);
}

#[test]
fn test_front_cover_absent_is_ignored() {
    let result = calculate_smart_blanks(&pages(&[1, 2, 3, 4]), Some(9), None, &[]);
    assert_eq!(result.pages, pages(&[1, 2, 3, 4]));
    assert!(result.changes.is_empty());
}

#[test]
fn test_spread_on_even_position_is_shifted() {
    let result = calculate_smart_blanks(&pages(&[1, 2, 3, 4, 5, 6]), None, None, &[spread(3, 4)]);
    assert_eq!(result.pages, vec![p(1), p(2), B, p(3), p(4), p(5), p(6), B]);
    assert_eq!(result.changes[0], "Added blank to align spread (3-4)");

    let check = check_spread_alignment(&result.pages, &[spread(3, 4)]);
    assert!(check[0].is_aligned);
}

#[test]
fn test_aligned_spread_left_alone() {
    let result = calculate_smart_blanks(&pages(&[1, 2, 3, 4]), None, None, &[spread(2, 3)]);
    assert_eq!(result.pages, pages(&[1, 2, 3, 4]));
    assert!(result.changes.is_empty());
}

#[test]
fn test_non_adjacent_spread_left_alone() {
    let result = calculate_smart_blanks(&pages(&[2, 1, 3, 4]), None, None, &[spread(2, 3)]);
    assert_eq!(result.pages, pages(&[2, 1, 3, 4]));
}

#[test]
fn test_spreads_use_fresh_positions() {
    // After the first insertion, 5-6 moves from (4,5) to (5,6) and is fine
    let result = calculate_smart_blanks(
        &pages(&[1, 2, 3, 4, 5, 6]),
        None,
        None,
        &[spread(1, 2), spread(5, 6)],
    );
    assert_eq!(result.pages, vec![B, p(1), p(2), p(3), p(4), p(5), p(6), B]);
    assert_eq!(result.changes.len(), 2);
}

#[test]
fn test_back_cover_moved_to_last_slot() {
    let result = calculate_smart_blanks(&pages(&[1, 2, 3, 4, 5]), None, Some(5), &[]);
    assert_eq!(result.pages, vec![p(1), p(2), p(3), p(4), B, B, B, p(5)]);
    assert_eq!(
        result.changes,
        vec!["Added 3 blank(s) to position back cover last".to_string()]
    );
}

#[test]
fn test_back_cover_already_last() {
    let result = calculate_smart_blanks(&pages(&[1, 2, 3, 4]), None, Some(4), &[]);
    assert_eq!(result.pages, pages(&[1, 2, 3, 4]));
    assert!(result.changes.is_empty());
}

#[test]
fn test_missing_back_cover_pads_at_end() {
    let result = calculate_smart_blanks(&pages(&[1, 2]), None, Some(7), &[]);
    assert_eq!(result.pages, vec![p(1), p(2), B, B]);
}

#[test]
fn test_full_cover_set() {
    let result = calculate_smart_blanks(
        &pages(&[1, 2, 3, 4, 5, 6]),
        Some(1),
        Some(6),
        &[],
    );
    assert_eq!(result.pages, vec![B, p(1), p(2), p(3), p(4), p(5), B, p(6)]);
    assert_eq!(result.pages.len() % 4, 0);
}

#[test]
fn test_spread_uses_lower_position_when_right_page_first() {
    // 3 sits at 0 and 2 at 1: the lower position is 0, so the blank goes there
    let result = calculate_smart_blanks(&pages(&[3, 2, 1, 4]), None, None, &[spread(2, 3)]);
    assert_eq!(&result.pages[..5], &[B, p(3), p(2), p(1), p(4)]);
    assert_eq!(result.changes[0], "Added blank to align spread (2-3)");

    let check = check_spread_alignment(&result.pages, &[spread(2, 3)]);
    assert!(check[0].is_aligned);
}

#[test]
fn test_back_cover_with_trailing_pages_is_padded_by_planner() {
    let result = calculate_smart_blanks(&pages(&[1, 2, 6, 3]), None, Some(6), &[]);
    assert_eq!(result.pages, vec![p(1), p(2), B, p(6), p(3)]);
    assert_eq!(result.pages.len() % 4, 1);

    let plan = plan_booklet(&result.pages, 1, ReadingOrder::Western).unwrap();
    assert_eq!(plan.padded_len(), 8);
    assert_eq!(plan.padding_added(), 3);
}
