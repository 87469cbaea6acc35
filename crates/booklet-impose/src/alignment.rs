//! Spread alignment checks
//!
//! In the nested-folio layout, positions `(1, 2)`, `(3, 4)`, `(5, 6)`, …
//! (0-based) of a selection print side by side on one sheet face. A spread
//! is aligned only when its two pages occupy such a pair.

use crate::spread::SpreadPair;
use crate::types::{PageNumber, PageRef};

/// Where a spread landed in the selection and whether it prints side by side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentResult {
    pub pair: SpreadPair,
    /// 0-based position of the pair's left page
    pub position_left: usize,
    /// 0-based position of the pair's right page
    pub position_right: usize,
    pub is_aligned: bool,
}

impl AlignmentResult {
    /// User-facing warning, positions shown 1-based
    pub fn warning(&self) -> String {
        format!(
            "Spread {} misaligned (positions {},{})",
            self.pair,
            self.position_left + 1,
            self.position_right + 1
        )
    }
}

/// Check each spread against the selection order.
///
/// Spreads with a page missing from `pages` are skipped entirely. When a page
/// appears several times its first occurrence counts.
pub fn check_spread_alignment(pages: &[PageRef], spreads: &[SpreadPair]) -> Vec<AlignmentResult> {
    spreads
        .iter()
        .filter_map(|&pair| {
            let position_left = first_position(pages, pair.left())?;
            let position_right = first_position(pages, pair.right())?;
            Some(AlignmentResult {
                pair,
                position_left,
                position_right,
                is_aligned: is_side_by_side(position_left, position_right),
            })
        })
        .collect()
}

/// Only the results that will print misaligned
pub fn misaligned_spreads(results: &[AlignmentResult]) -> Vec<AlignmentResult> {
    results.iter().filter(|r| !r.is_aligned).copied().collect()
}

/// True when `a` and `b` are an (odd, odd + 1) pair in either order
pub(crate) fn is_side_by_side(a: usize, b: usize) -> bool {
    (a % 2 == 1 && b == a + 1) || (b % 2 == 1 && a == b + 1)
}

pub(crate) fn first_position(pages: &[PageRef], page: PageNumber) -> Option<usize> {
    pages.iter().position(|&p| p == PageRef::Page(page))
}
