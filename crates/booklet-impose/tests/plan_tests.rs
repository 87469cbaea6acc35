use booklet_impose::layout::{impose_signature, sheet_positions, signature_sizes};
use booklet_impose::*;

fn pages(range: std::ops::RangeInclusive<usize>) -> Vec<PageRef> {
    range.map(PageRef::Page).collect()
}

fn p(n: usize) -> PageRef {
    PageRef::Page(n)
}

#[test]
fn test_eight_pages_one_signature() {
    let plan = plan_booklet(&pages(1..=8), 1, ReadingOrder::Western).unwrap();

    assert_eq!(plan.signatures.len(), 1);
    let sheets = &plan.signatures[0].sheets;
    assert_eq!(sheets.len(), 2);

    assert_eq!(sheets[0].front(), [p(8), p(1)]);
    assert_eq!(sheets[0].back(), [p(2), p(7)]);
    assert_eq!(sheets[1].front(), [p(6), p(3)]);
    assert_eq!(sheets[1].back(), [p(4), p(5)]);
}

#[test]
fn test_manga_mirrors_both_sides() {
    let plan = plan_booklet(&pages(1..=8), 1, ReadingOrder::Manga).unwrap();
    let sheets = &plan.signatures[0].sheets;

    assert_eq!(sheets[0].front(), [p(1), p(8)]);
    assert_eq!(sheets[0].back(), [p(7), p(2)]);
    assert_eq!(sheets[1].front(), [p(3), p(6)]);
    assert_eq!(sheets[1].back(), [p(5), p(4)]);
}

#[test]
fn test_padding_fills_last_slots() {
    let plan = plan_booklet(&pages(1..=5), 1, ReadingOrder::Western).unwrap();

    assert_eq!(plan.padded_len(), 8);
    assert_eq!(plan.padding_added(), 3);
    assert_eq!(
        plan.signatures[0].pages,
        vec![p(1), p(2), p(3), p(4), p(5), PageRef::Blank, PageRef::Blank, PageRef::Blank]
    );
    // Outermost sheet pairs the last (blank) slot with page 1
    assert_eq!(plan.signatures[0].sheets[0].front(), [PageRef::Blank, p(1)]);
}

#[test]
fn test_every_page_printed_exactly_once() {
    for total in 1..=40 {
        for signatures in 1..=4 {
            let plan = plan_booklet(&pages(1..=total), signatures, ReadingOrder::Western).unwrap();
            let mut printed: Vec<usize> = plan
                .sheets()
                .flat_map(|s| s.slots())
                .filter_map(PageRef::page_number)
                .collect();
            printed.sort_unstable();
            assert_eq!(printed, (1..=total).collect::<Vec<_>>(), "total={total} sigs={signatures}");
            assert_eq!(plan.total_sheets() * 4, plan.padded_len());
        }
    }
}

#[test]
fn test_signature_sizes_round_each_signature() {
    assert_eq!(signature_sizes(10, 3), vec![4, 4, 4]);
    assert_eq!(signature_sizes(20, 2), vec![12, 12]);
    assert_eq!(signature_sizes(16, 2), vec![8, 8]);
    assert_eq!(signature_sizes(17, 2), vec![12, 8]);
}

#[test]
fn test_multi_signature_slices_in_order() {
    let plan = plan_booklet(&pages(1..=16), 2, ReadingOrder::Western).unwrap();

    assert_eq!(plan.signatures[0].pages, pages(1..=8));
    assert_eq!(plan.signatures[1].pages, pages(9..=16));
    assert_eq!(plan.signatures[1].sheets[0].front(), [p(16), p(9)]);
}

#[test]
fn test_uneven_signatures_pad_at_the_end() {
    // 10 pages over 3 signatures: sizes [4, 4, 4], 2 padding blanks at the end
    let plan = plan_booklet(&pages(1..=10), 3, ReadingOrder::Western).unwrap();
    assert_eq!(plan.signatures[0].pages, pages(1..=4));
    assert_eq!(plan.signatures[1].pages, pages(5..=8));
    assert_eq!(
        plan.signatures[2].pages,
        vec![p(9), p(10), PageRef::Blank, PageRef::Blank]
    );
}

#[test]
fn test_blank_markers_are_kept_in_place() {
    let selection = vec![PageRef::Blank, p(1), p(2), PageRef::Blank];
    let plan = plan_booklet(&selection, 1, ReadingOrder::Western).unwrap();
    let sheet = plan.signatures[0].sheets[0];
    assert_eq!(sheet.front(), [PageRef::Blank, PageRef::Blank]);
    assert_eq!(sheet.back(), [p(1), p(2)]);
}

#[test]
fn test_empty_selection_rejected() {
    let result = plan_booklet(&[], 1, ReadingOrder::Western);
    assert!(matches!(result, Err(ImposeError::EmptySelection)));
}

#[test]
fn test_signature_count_limits() {
    let selection = pages(1..=8);
    assert!(matches!(
        plan_booklet(&selection, 0, ReadingOrder::Western),
        Err(ImposeError::InvalidSignatureCount { requested: 0, .. })
    ));
    assert!(matches!(
        plan_booklet(&selection, 11, ReadingOrder::Western),
        Err(ImposeError::InvalidSignatureCount { requested: 11, max: 10 })
    ));

    let planner = ImpositionPlanner::new(20);
    assert!(planner.plan(&selection, 11, ReadingOrder::Western).is_ok());
}

#[test]
fn test_sheet_positions_formula() {
    assert_eq!(sheet_positions(8, 0), [7, 0, 1, 6]);
    assert_eq!(sheet_positions(8, 1), [5, 2, 3, 4]);
    assert_eq!(sheet_positions(4, 0), [3, 0, 1, 2]);
}

#[test]
fn test_impose_signature_four_pages() {
    let sheets = impose_signature(&pages(1..=4), ReadingOrder::Western);
    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0].slots(), [p(4), p(1), p(2), p(3)]);
}
