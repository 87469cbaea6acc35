use booklet_impose::*;

fn selection(text: &str, total: usize) -> Vec<PageRef> {
    parse_page_selection(text, total).pages
}

#[test]
fn test_statistics_single_signature() {
    let plan = plan_booklet(&selection("b,1-5", 5), 1, ReadingOrder::Western).unwrap();
    let stats = calculate_statistics(&plan);

    assert_eq!(stats.selected_pages, 6);
    assert_eq!(stats.blank_markers, 1);
    assert_eq!(stats.signatures, 1);
    assert_eq!(stats.pages_per_signature, vec![8]);
    assert_eq!(stats.sheets, 2);
    assert_eq!(stats.output_pages, 4);
    assert_eq!(stats.padding_blanks, 2);
}

#[test]
fn test_statistics_per_signature_rounding() {
    let plan = plan_booklet(&selection("1-10", 10), 3, ReadingOrder::Manga).unwrap();
    let stats = calculate_statistics(&plan);

    assert_eq!(stats.pages_per_signature, vec![4, 4, 4]);
    assert_eq!(stats.sheets, 3);
    assert_eq!(stats.padding_blanks, 2);
}

#[test]
fn test_statistics_exact_fit() {
    let plan = plan_booklet(&selection("1-16", 16), 2, ReadingOrder::Western).unwrap();
    let stats = calculate_statistics(&plan);

    assert_eq!(stats.sheets, 4);
    assert_eq!(stats.output_pages, 8);
    assert_eq!(stats.padding_blanks, 0);
    assert_eq!(stats.blank_markers, 0);
}

#[test]
fn test_selection_summary() {
    assert_eq!(
        selection_summary(&selection("1-5", 10)),
        "Pages: 5 | Needed for booklet: 8 | Missing: 3"
    );
    assert_eq!(
        selection_summary(&selection("1-8", 10)),
        "Pages: 8 | Needed for booklet: 8 | Missing: 0"
    );
    assert_eq!(
        selection_summary(&[]),
        "Pages: 0 | Needed for booklet: 0 | Missing: 0"
    );
}
