//! Pre-flight validation of selections and booklet options
//!
//! These checks never block planning on their own; they collect errors and
//! warnings for the caller to show.

use crate::constants::{LARGE_SELECTION_PAGES, PAGES_PER_SHEET};
use crate::layout::ImpositionPlanner;
use crate::selection::parse_page_selection;

/// Errors and warnings gathered by a validation pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_issues(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    pub fn summary(&self) -> String {
        if !self.has_issues() {
            return "Validation passed with no issues".to_string();
        }

        let mut parts = Vec::new();
        if !self.errors.is_empty() {
            parts.push(format!("{} error(s)", self.errors.len()));
        }
        if !self.warnings.is_empty() {
            parts.push(format!("{} warning(s)", self.warnings.len()));
        }
        parts.join(", ")
    }
}

/// Validate a selection string against the source page count
pub fn validate_selection(text: &str, total_pages: usize) -> ValidationReport {
    let mut report = ValidationReport::default();

    if text.trim().is_empty() {
        report.add_error("Page selection cannot be empty");
        return report;
    }

    let parsed = parse_page_selection(text, total_pages);
    for diagnostic in &parsed.diagnostics {
        report.add_warning(diagnostic.to_string());
    }

    if parsed.pages.is_empty() {
        report.add_error("No pages selected (selection parsed to empty list)");
    }

    if parsed.pages.len() > LARGE_SELECTION_PAGES {
        report.add_warning(format!(
            "Large selection ({} pages) may result in a thick booklet that's difficult to bind",
            parsed.pages.len()
        ));
    }

    report
}

/// Validate the signature count for a selection of `num_pages` pages
pub fn validate_booklet_options(
    num_pages: usize,
    num_signatures: usize,
    planner: &ImpositionPlanner,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    if num_signatures < 1 {
        report.add_error("Number of signatures must be at least 1");
    } else if num_signatures > planner.max_signatures {
        report.add_warning(format!(
            "Very large number of signatures ({}) may result in thin, fragile booklets",
            num_signatures
        ));
    }

    if num_pages > 0 && num_signatures > 1 {
        let pages_per_signature = num_pages as f64 / num_signatures as f64;
        if pages_per_signature < PAGES_PER_SHEET as f64 {
            report.add_warning(format!(
                "Each signature will have only ~{:.1} pages. Consider reducing signature count.",
                pages_per_signature
            ));
        }
    }

    report
}
