//! Smart blank insertion
//!
//! Proposes blanks that put the covers and spreads where the nested-folio
//! layout needs them, then pads the selection to a multiple of four pages.
//!
//! Each step consumes the previous step's list and looks positions up again,
//! so an insertion never leaves a later step working from stale indices.

use crate::alignment::first_position;
use crate::constants::round_up_to_sheet;
use crate::spread::SpreadPair;
use crate::types::{PageNumber, PageRef, Selection};

/// Adjusted selection plus a description of every change made
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SmartBlanks {
    pub pages: Selection,
    pub changes: Vec<String>,
}

impl SmartBlanks {
    fn insert_blanks(&mut self, index: usize, count: usize) {
        self.pages
            .splice(index..index, std::iter::repeat_n(PageRef::Blank, count));
    }
}

/// Insert blanks for cover placement, spread alignment and padding.
///
/// Steps, in order:
/// 1. A front cover present in the selection gets one leading blank.
/// 2. Each spread whose pages are adjacent but start on an even position
///    gets a blank just before it.
/// 3. The target length is the current length rounded up to a multiple of 4.
/// 4. A back cover present in the selection is pushed to the last slot with
///    blanks inserted before it; otherwise trailing blanks reach the target.
pub fn calculate_smart_blanks(
    pages: &[PageRef],
    front_cover: Option<PageNumber>,
    back_cover: Option<PageNumber>,
    spreads: &[SpreadPair],
) -> SmartBlanks {
    let start = SmartBlanks {
        pages: pages.to_vec(),
        changes: Vec::new(),
    };

    let covered = place_front_cover(start, front_cover);
    let aligned = spreads.iter().fold(covered, align_spread);
    let target = round_up_to_sheet(aligned.pages.len());
    let result = place_back_cover(aligned, back_cover, target);

    for change in &result.changes {
        log::debug!("{}", change);
    }
    result
}

/// One leading blank when the cover is anywhere in the list.
///
/// This also applies when the cover is already at index 0, unlike a rule
/// that only fires for index > 0: the cover never stays the first physical
/// page.
fn place_front_cover(mut acc: SmartBlanks, front_cover: Option<PageNumber>) -> SmartBlanks {
    let Some(cover) = front_cover else {
        return acc;
    };
    if first_position(&acc.pages, cover).is_some() {
        acc.insert_blanks(0, 1);
        acc.changes
            .push(format!("Added blank before front cover (page {})", cover));
    }
    acc
}

fn align_spread(mut acc: SmartBlanks, pair: &SpreadPair) -> SmartBlanks {
    let (Some(left), Some(right)) = (
        first_position(&acc.pages, pair.left()),
        first_position(&acc.pages, pair.right()),
    ) else {
        return acc;
    };

    if left.abs_diff(right) != 1 {
        return acc;
    }

    let lower = left.min(right);
    if lower % 2 == 0 {
        acc.insert_blanks(lower, 1);
        acc.changes
            .push(format!("Added blank to align spread ({})", pair));
    }
    acc
}

fn place_back_cover(
    mut acc: SmartBlanks,
    back_cover: Option<PageNumber>,
    target: usize,
) -> SmartBlanks {
    match back_cover.and_then(|cover| first_position(&acc.pages, cover)) {
        Some(position) => {
            // position < len <= target
            let needed = (target - 1) - position;
            if needed > 0 {
                acc.insert_blanks(position, needed);
                acc.changes.push(format!(
                    "Added {} blank(s) to position back cover last",
                    needed
                ));
            }
        }
        None => {
            let needed = target - acc.pages.len();
            if needed > 0 {
                acc.pages.resize(target, PageRef::Blank);
                acc.changes
                    .push(format!("Added {} blank(s) to fill booklet", needed));
            }
        }
    }
    acc
}
