//! Imposition plan types and the planner

use crate::constants::MAX_SIGNATURES;
use crate::types::*;

use super::signature::{impose_signature, signature_sizes};

/// One physical sheet: two logical pages per side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sheet {
    pub front_left: PageRef,
    pub front_right: PageRef,
    pub back_left: PageRef,
    pub back_right: PageRef,
}

impl Sheet {
    /// Front side as `[left, right]`
    pub fn front(&self) -> [PageRef; 2] {
        [self.front_left, self.front_right]
    }

    /// Back side as `[left, right]`
    pub fn back(&self) -> [PageRef; 2] {
        [self.back_left, self.back_right]
    }

    /// All four slots: front left, front right, back left, back right
    pub fn slots(&self) -> [PageRef; 4] {
        [
            self.front_left,
            self.front_right,
            self.back_left,
            self.back_right,
        ]
    }

    /// Swap left and right on both sides
    pub fn mirrored(self) -> Self {
        Self {
            front_left: self.front_right,
            front_right: self.front_left,
            back_left: self.back_right,
            back_right: self.back_left,
        }
    }
}

/// A folded group of sheets bound together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// The signature's slice of the padded selection, in reading order
    pub pages: Selection,
    /// Sheets from outermost to innermost
    pub sheets: Vec<Sheet>,
}

impl Signature {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Complete per-sheet slot assignment for one booklet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpositionPlan {
    pub signatures: Vec<Signature>,
    pub reading_order: ReadingOrder,
    /// Length of the selection before padding
    pub selection_len: usize,
}

impl ImpositionPlan {
    pub fn total_sheets(&self) -> usize {
        self.signatures.iter().map(|s| s.sheets.len()).sum()
    }

    /// Selection length after padding blanks were appended
    pub fn padded_len(&self) -> usize {
        self.signatures.iter().map(Signature::page_count).sum()
    }

    /// Blanks appended to fill the last slots of the signatures
    pub fn padding_added(&self) -> usize {
        self.padded_len() - self.selection_len
    }

    /// Every sheet in print order (signature by signature)
    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        self.signatures.iter().flat_map(|s| s.sheets.iter())
    }
}

/// Computes imposition plans, enforcing the signature-count policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImpositionPlanner {
    pub max_signatures: usize,
}

impl Default for ImpositionPlanner {
    fn default() -> Self {
        Self {
            max_signatures: MAX_SIGNATURES,
        }
    }
}

impl ImpositionPlanner {
    pub fn new(max_signatures: usize) -> Self {
        Self { max_signatures }
    }

    /// Check `num_signatures` against `1..=max_signatures`
    pub fn check_signature_count(&self, num_signatures: usize) -> Result<()> {
        if num_signatures < 1 || num_signatures > self.max_signatures {
            return Err(ImposeError::InvalidSignatureCount {
                requested: num_signatures,
                max: self.max_signatures,
            });
        }
        Ok(())
    }

    /// Plan the sheets for `selection` split into `num_signatures` signatures.
    ///
    /// The selection is padded on the right with blanks up to the summed
    /// signature sizes, sliced into signatures in order, and each signature
    /// is imposed as nested folios.
    pub fn plan(
        &self,
        selection: &[PageRef],
        num_signatures: usize,
        reading_order: ReadingOrder,
    ) -> Result<ImpositionPlan> {
        self.check_signature_count(num_signatures)?;
        if selection.is_empty() {
            return Err(ImposeError::EmptySelection);
        }

        let sizes = signature_sizes(selection.len(), num_signatures);
        let padded_len: usize = sizes.iter().sum();

        let mut padded = selection.to_vec();
        padded.resize(padded_len, PageRef::Blank);

        let mut signatures = Vec::with_capacity(sizes.len());
        let mut offset = 0;
        for size in sizes {
            let pages = padded[offset..offset + size].to_vec();
            offset += size;
            let sheets = impose_signature(&pages, reading_order);
            signatures.push(Signature { pages, sheets });
        }

        log::debug!(
            "Planned {} page(s) as {} signature(s) of {:?} pages ({} padding blank(s))",
            selection.len(),
            signatures.len(),
            signatures.iter().map(Signature::page_count).collect::<Vec<_>>(),
            padded_len - selection.len()
        );

        Ok(ImpositionPlan {
            signatures,
            reading_order,
            selection_len: selection.len(),
        })
    }
}

/// Plan with the default signature limit
pub fn plan_booklet(
    selection: &[PageRef],
    num_signatures: usize,
    reading_order: ReadingOrder,
) -> Result<ImpositionPlan> {
    ImpositionPlanner::default().plan(selection, num_signatures, reading_order)
}
