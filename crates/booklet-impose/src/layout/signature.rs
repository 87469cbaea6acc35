//! Signature sizing and sheet slot calculation
//!
//! ## Nested folios
//!
//! A signature of `n` pages (n divisible by 4) is printed on `n / 4` sheets
//! that are stacked, folded once and nested. Sheet `i` carries, by 0-based
//! position in the signature:
//!
//! ```text
//!            left          right
//! front:  [n - 1 - 2i]     [2i]
//! back:   [2i + 1]         [n - 2 - 2i]
//! ```
//!
//! Sheet 0 holds the outermost pair (first/last pages), the last sheet the
//! two middle pages. For 8 pages:
//!
//! ```text
//! sheet 0  front [8, 1]  back [2, 7]
//! sheet 1  front [6, 3]  back [4, 5]
//! ```
//!
//! Right-to-left reading swaps left and right on both sides.

use crate::constants::{PAGES_PER_SHEET, round_up_to_sheet};
use crate::types::{PageRef, ReadingOrder};

use super::Sheet;

// =============================================================================
// Signature Sizes
// =============================================================================

/// Split `total` pages into `num_signatures` signature sizes.
///
/// Pages are distributed as evenly as possible (the first `total % n`
/// signatures get one extra page) and each size is then rounded up to a
/// multiple of 4 on its own. The sum can therefore exceed
/// `round_up_to_sheet(total)`: 10 pages over 3 signatures become
/// `[4, 4, 4]`, not 12 pages split any other way.
pub fn signature_sizes(total: usize, num_signatures: usize) -> Vec<usize> {
    if num_signatures == 0 {
        return Vec::new();
    }

    let base = total / num_signatures;
    let remainder = total % num_signatures;

    (0..num_signatures)
        .map(|i| {
            let size = base + usize::from(i < remainder);
            round_up_to_sheet(size)
        })
        .collect()
}

// =============================================================================
// Sheet Slots
// =============================================================================

/// Impose one signature's pages onto sheets.
///
/// `pages.len()` must be a multiple of 4.
pub fn impose_signature(pages: &[PageRef], reading_order: ReadingOrder) -> Vec<Sheet> {
    debug_assert_eq!(pages.len() % PAGES_PER_SHEET, 0);

    let n = pages.len();
    (0..n / PAGES_PER_SHEET)
        .map(|i| {
            let [front_left, front_right, back_left, back_right] = sheet_positions(n, i);
            let sheet = Sheet {
                front_left: pages[front_left],
                front_right: pages[front_right],
                back_left: pages[back_left],
                back_right: pages[back_right],
            };
            match reading_order {
                ReadingOrder::Western => sheet,
                ReadingOrder::Manga => sheet.mirrored(),
            }
        })
        .collect()
}

/// 0-based signature positions for each slot of sheet `i` in a signature of
/// `n` pages, as `[front_left, front_right, back_left, back_right]`.
pub fn sheet_positions(n: usize, i: usize) -> [usize; 4] {
    [n - 1 - 2 * i, 2 * i, 2 * i + 1, n - 2 - 2 * i]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_positions_cover_signature_once() {
        for n in (4..=64).step_by(4) {
            let mut seen = vec![false; n];
            for i in 0..n / 4 {
                for pos in sheet_positions(n, i) {
                    assert!(!seen[pos], "position {} used twice for n={}", pos, n);
                    seen[pos] = true;
                }
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn test_signature_sizes_zero_signatures() {
        assert!(signature_sizes(10, 0).is_empty());
    }
}
