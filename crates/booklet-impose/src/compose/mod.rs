//! Sheet composition - turning an imposition plan into printable PDFs
//!
//! This module owns everything that touches PDF bytes:
//! 1. Load the source (PDF, or CBZ converted to PDF)
//! 2. Optionally split scanned double pages into halves
//! 3. Lay out every sheet side from the plan
//! 4. Save one duplex file or separate front/back files

mod cbz;
mod io;
mod sheet;
mod split;
mod xobject;

pub use cbz::{cbz_bytes_to_pdf, cbz_to_pdf};
pub use io::{load_pdf, load_source, save_pdf};
pub use sheet::{Placement, SlotSide, place_in_half};
pub use split::{SplitOutcome, split_double_pages};
pub use xobject::{PageBox, get_page_box};

use crate::layout::ImpositionPlan;
use crate::types::*;
use lopdf::{Document, ObjectId};
use sheet::SheetWriter;

/// A loaded source document with its page tree resolved.
///
/// Answers page count and per-page size questions for parsing and layout.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    document: Document,
    page_ids: Vec<ObjectId>,
    page_boxes: Vec<PageBox>,
}

impl SourceDocument {
    pub fn new(document: Document) -> Self {
        let page_ids: Vec<ObjectId> = document.get_pages().values().copied().collect();
        let page_boxes = page_ids
            .iter()
            .map(|&id| get_page_box(&document, id))
            .collect();
        Self {
            document,
            page_ids,
            page_boxes,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// `(width, height)` of a 1-based page
    pub fn page_dimensions(&self, page: PageNumber) -> Option<(f32, f32)> {
        let page_box = self.page_boxes.get(page.checked_sub(1)?)?;
        Some((page_box.width(), page_box.height()))
    }

    pub(crate) fn page_box(&self, page: PageNumber) -> Result<PageBox> {
        self.index(page).map(|i| self.page_boxes[i])
    }

    pub(crate) fn page_id(&self, page: PageNumber) -> Result<ObjectId> {
        self.index(page).map(|i| self.page_ids[i])
    }

    fn index(&self, page: PageNumber) -> Result<usize> {
        if page < 1 || page > self.page_count() {
            return Err(ImposeError::PageOutOfRange {
                page,
                total: self.page_count(),
            });
        }
        Ok(page - 1)
    }
}

/// Composed output, shaped by the duplex mode
#[derive(Debug, Clone)]
pub enum ComposedBooklet {
    /// Front, back, front, back, … in one document
    Duplex(Document),
    /// Fronts and backs as separate documents for manual flipping
    Manual { fronts: Document, backs: Document },
}

/// Lay out every sheet side of `plan` onto `paper`.
///
/// Blank slots leave their half of the sheet empty. Fails with
/// `PageOutOfRange` before writing anything if the plan references a page
/// the source does not have.
pub fn compose_booklet(
    source: &SourceDocument,
    plan: &ImpositionPlan,
    paper: PaperSize,
    duplex: DuplexMode,
) -> Result<ComposedBooklet> {
    for page in plan.sheets().flat_map(|s| s.slots()).filter_map(PageRef::page_number) {
        source.page_id(page)?;
    }

    let composed = match duplex {
        DuplexMode::Auto => {
            let mut writer = SheetWriter::new(paper);
            for sheet in plan.sheets() {
                writer.add_side(source, sheet.front())?;
                writer.add_side(source, sheet.back())?;
            }
            ComposedBooklet::Duplex(writer.finish())
        }
        DuplexMode::Manual => {
            let mut fronts = SheetWriter::new(paper);
            let mut backs = SheetWriter::new(paper);
            for sheet in plan.sheets() {
                fronts.add_side(source, sheet.front())?;
                backs.add_side(source, sheet.back())?;
            }
            ComposedBooklet::Manual {
                fronts: fronts.finish(),
                backs: backs.finish(),
            }
        }
    };

    log::debug!(
        "Composed {} sheet(s) on {} paper ({:?} duplex)",
        plan.total_sheets(),
        paper.as_str(),
        duplex
    );
    Ok(composed)
}
