//! Double-page splitting
//!
//! Scanned comics often store a two-page spread as one wide page. Pages wider
//! than [`SPLIT_WIDTH_MULTIPLIER`] times the most common page width are
//! replaced by a left and a right half, and the halves are reported as a
//! spread so alignment can be checked later.

use super::xobject::{PageBox, get_page_box, inherited_attribute};
use crate::constants::SPLIT_WIDTH_MULTIPLIER;
use crate::spread::SpreadPair;
use crate::types::*;
use lopdf::{Document, Object, ObjectId};

/// What a split pass did to the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutcome {
    pub original_pages: usize,
    pub output_pages: usize,
    pub splits_made: usize,
    /// 1-based output page pairs produced by each split
    pub spreads: Vec<SpreadPair>,
}

/// Split oversized pages of `doc` in place.
///
/// The page tree is rebuilt flat under the root Pages node; inheritable
/// attributes are copied onto each page so nothing is lost.
pub fn split_double_pages(doc: &mut Document) -> Result<SplitOutcome> {
    let page_ids: Vec<ObjectId> = doc.get_pages().values().copied().collect();
    if page_ids.is_empty() {
        return Err(ImposeError::NoPages);
    }

    let boxes: Vec<PageBox> = page_ids.iter().map(|&id| get_page_box(doc, id)).collect();
    let standard_width = most_common_width(&boxes);
    let threshold = standard_width * SPLIT_WIDTH_MULTIPLIER;

    let pages_id = doc
        .trailer
        .get(b"Root")?
        .as_reference()
        .and_then(|root| doc.get_dictionary(root))?
        .get(b"Pages")?
        .as_reference()?;

    let mut kids = Vec::with_capacity(page_ids.len());
    let mut spreads = Vec::new();

    for (&page_id, page_box) in page_ids.iter().zip(&boxes) {
        let base = flattened_page(doc, page_id, pages_id)?;

        if page_box.width() > threshold {
            let mid = page_box.x0 + page_box.width() / 2.0;
            let halves = [
                PageBox::new(page_box.x0, page_box.y0, mid, page_box.y1),
                PageBox::new(mid, page_box.y0, page_box.x1, page_box.y1),
            ];
            for half in halves {
                let mut dict = base.clone();
                dict.set("MediaBox", half.to_object());
                dict.remove(b"CropBox");
                kids.push(Object::Reference(doc.add_object(dict)));
            }
            spreads.push(SpreadPair::new(kids.len() - 1, kids.len())?);
            doc.objects.remove(&page_id);
        } else {
            doc.objects.insert(page_id, Object::Dictionary(base));
            kids.push(Object::Reference(page_id));
        }
    }

    let count = kids.len();
    let pages_dict = doc.get_dictionary_mut(pages_id)?;
    pages_dict.set("Kids", Object::Array(kids));
    pages_dict.set("Count", Object::Integer(count as i64));

    log::info!(
        "Split {} double page(s): {} -> {} pages",
        spreads.len(),
        page_ids.len(),
        count
    );

    Ok(SplitOutcome {
        original_pages: page_ids.len(),
        output_pages: count,
        splits_made: spreads.len(),
        spreads,
    })
}

/// Copy of a page dictionary with inherited attributes made explicit
fn flattened_page(
    doc: &Document,
    page_id: ObjectId,
    pages_id: ObjectId,
) -> Result<lopdf::Dictionary> {
    let mut dict = doc.get_dictionary(page_id)?.clone();
    let inheritable: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];
    for key in inheritable {
        if dict.get(key).is_err() {
            if let Some(value) = inherited_attribute(doc, page_id, key) {
                dict.set(key.to_vec(), value.clone());
            }
        }
    }
    dict.set("Parent", Object::Reference(pages_id));
    Ok(dict)
}

/// Most frequent rounded width; ties go to the width seen first
fn most_common_width(boxes: &[PageBox]) -> f32 {
    let mut counts: Vec<(i64, usize)> = Vec::new();
    for page_box in boxes {
        let width = page_box.width().round() as i64;
        match counts.iter_mut().find(|(w, _)| *w == width) {
            Some((_, n)) => *n += 1,
            None => counts.push((width, 1)),
        }
    }

    counts
        .iter()
        .fold(None, |best: Option<(i64, usize)>, &(w, n)| match best {
            Some((_, best_n)) if best_n >= n => best,
            _ => Some((w, n)),
        })
        .map(|(w, _)| w as f32)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths(ws: &[f32]) -> Vec<PageBox> {
        ws.iter().map(|&w| PageBox::new(0.0, 0.0, w, 800.0)).collect()
    }

    #[test]
    fn test_most_common_width_rounds() {
        assert_eq!(most_common_width(&widths(&[600.2, 599.9, 1200.0])), 600.0);
    }

    #[test]
    fn test_most_common_width_tie_prefers_first() {
        assert_eq!(most_common_width(&widths(&[1200.0, 600.0])), 1200.0);
    }
}
