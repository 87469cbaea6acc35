use booklet_impose::*;

#[test]
fn test_clean_selection_passes() {
    let report = validate_selection("1-16", 20);
    assert!(report.is_valid());
    assert!(!report.has_issues());
    assert_eq!(report.summary(), "Validation passed with no issues");
}

#[test]
fn test_empty_selection_is_error() {
    let report = validate_selection("   ", 20);
    assert!(!report.is_valid());
    assert_eq!(report.errors, vec!["Page selection cannot be empty".to_string()]);
}

#[test]
fn test_selection_parsing_to_nothing_is_error() {
    let report = validate_selection("30,40", 20);
    assert!(!report.is_valid());
    assert_eq!(report.warnings.len(), 2);
    assert_eq!(report.summary(), "1 error(s), 2 warning(s)");
}

#[test]
fn test_clamped_range_is_warning_only() {
    let report = validate_selection("1-25", 20);
    assert!(report.is_valid());
    assert_eq!(
        report.warnings,
        vec!["Page range 1-25 adjusted to fit within 1-20".to_string()]
    );
}

#[test]
fn test_large_selection_warns() {
    let report = validate_selection("1-201", 300);
    assert!(report.is_valid());
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("201 pages"));

    assert!(!validate_selection("1-200", 300).has_issues());
}

#[test]
fn test_zero_signatures_is_error() {
    let report = validate_booklet_options(16, 0, &ImpositionPlanner::default());
    assert!(!report.is_valid());
}

#[test]
fn test_too_many_signatures_warns() {
    let report = validate_booklet_options(200, 12, &ImpositionPlanner::default());
    assert!(report.is_valid());
    assert_eq!(report.warnings.len(), 1);

    let relaxed = ImpositionPlanner::new(20);
    assert!(!validate_booklet_options(200, 12, &relaxed).has_issues());
}

#[test]
fn test_thin_signatures_warn() {
    let report = validate_booklet_options(10, 4, &ImpositionPlanner::default());
    assert_eq!(
        report.warnings,
        vec!["Each signature will have only ~2.5 pages. Consider reducing signature count."
            .to_string()]
    );
}

#[test]
fn test_options_validate_signature_range() {
    let mut options = BookletOptions::default();
    assert!(options.validate().is_ok());

    options.num_signatures = 0;
    assert!(matches!(
        options.validate(),
        Err(ImposeError::InvalidSignatureCount { .. })
    ));

    options.num_signatures = 11;
    assert!(options.validate().is_err());
}
