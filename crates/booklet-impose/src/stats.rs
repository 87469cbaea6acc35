use crate::layout::{ImpositionPlan, Signature};
use crate::types::PageRef;

/// Statistics about a planned booklet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookletStatistics {
    /// Entries in the selection, blanks included
    pub selected_pages: usize,
    /// Blank markers already present in the selection
    pub blank_markers: usize,
    /// Number of signatures
    pub signatures: usize,
    /// Pages per signature after rounding
    pub pages_per_signature: Vec<usize>,
    /// Total number of physical sheets
    pub sheets: usize,
    /// Output pages (front and back of each sheet)
    pub output_pages: usize,
    /// Blanks appended to fill the signatures
    pub padding_blanks: usize,
}

/// Calculate statistics for a plan
pub fn calculate_statistics(plan: &ImpositionPlan) -> BookletStatistics {
    let blank_markers = plan
        .signatures
        .iter()
        .flat_map(|s| s.pages.iter())
        .take(plan.selection_len)
        .filter(|p| p.is_blank())
        .count();

    let sheets = plan.total_sheets();

    BookletStatistics {
        selected_pages: plan.selection_len,
        blank_markers,
        signatures: plan.signatures.len(),
        pages_per_signature: plan
            .signatures
            .iter()
            .map(Signature::page_count)
            .collect(),
        sheets,
        output_pages: sheets * 2,
        padding_blanks: plan.padding_added(),
    }
}

/// Pages, booklet size and missing blanks for a selection, as shown while editing
pub fn selection_summary(pages: &[PageRef]) -> String {
    let count = pages.len();
    let needed = crate::constants::round_up_to_sheet(count);
    format!(
        "Pages: {} | Needed for booklet: {} | Missing: {}",
        count,
        needed,
        needed - count
    )
}
