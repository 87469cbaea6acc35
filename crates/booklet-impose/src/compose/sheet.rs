//! Sheet side rendering
//!
//! One side of a sheet is a landscape page split at the centre fold. The left
//! slot is scaled to fit the left half and pushed against the fold, the right
//! slot likewise on the right half, both centred vertically. There is no
//! gutter between them.

use super::SourceDocument;
use super::xobject::{PageBox, create_page_xobject};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// Which half of the sheet a slot occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotSide {
    Left,
    Right,
}

/// Where a source page lands on a sheet side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

/// Fit `page` into one half of a `sheet_width × sheet_height` sheet
pub fn place_in_half(
    page: &PageBox,
    side: SlotSide,
    sheet_width: f32,
    sheet_height: f32,
) -> Placement {
    let half_width = sheet_width / 2.0;
    let scale = (half_width / page.width()).min(sheet_height / page.height());

    let scaled_width = page.width() * scale;
    let scaled_height = page.height() * scale;

    let x = match side {
        SlotSide::Left => half_width - scaled_width,
        SlotSide::Right => half_width,
    };
    let y = (sheet_height - scaled_height) / 2.0;

    Placement { x, y, scale }
}

/// Per-output-document state shared by all sheet sides
pub(crate) struct SheetWriter {
    output: Document,
    pages_tree_id: ObjectId,
    page_refs: Vec<Object>,
    sheet_width: f32,
    sheet_height: f32,
    xobjects: HashMap<PageNumber, ObjectId>,
    resource_cache: HashMap<ObjectId, ObjectId>,
}

impl SheetWriter {
    pub fn new(paper: PaperSize) -> Self {
        let mut output = Document::with_version("1.7");
        let pages_tree_id = output.new_object_id();
        let (sheet_width, sheet_height) = paper.dimensions_pt();
        Self {
            output,
            pages_tree_id,
            page_refs: Vec::new(),
            sheet_width,
            sheet_height,
            xobjects: HashMap::new(),
            resource_cache: HashMap::new(),
        }
    }

    /// Render one sheet side from its `[left, right]` slots
    pub fn add_side(&mut self, source: &SourceDocument, slots: [PageRef; 2]) -> Result<ObjectId> {
        let mut content_ops = Vec::new();
        let mut xobjects = Dictionary::new();

        for (slot, side) in slots.into_iter().zip([SlotSide::Left, SlotSide::Right]) {
            let PageRef::Page(page) = slot else {
                continue;
            };

            let page_box = source.page_box(page)?;
            let xobject_id = self.xobject_for(source, page)?;
            let name = match side {
                SlotSide::Left => "L",
                SlotSide::Right => "R",
            };
            xobjects.set(name, Object::Reference(xobject_id));

            let placement =
                place_in_half(&page_box, side, self.sheet_width, self.sheet_height);
            // Shift the box origin so its lower-left corner lands on the placement
            let tx = placement.x - page_box.x0 * placement.scale;
            let ty = placement.y - page_box.y0 * placement.scale;
            content_ops.push(format!(
                "q {} 0 0 {} {} {} cm /{} Do Q\n",
                placement.scale, placement.scale, tx, ty, name
            ));
        }

        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(xobjects));

        let content = content_ops.join("");
        let content_id = self
            .output
            .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(self.pages_tree_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(self.sheet_width),
                Object::Real(self.sheet_height),
            ]),
        );
        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Dictionary(resources));

        let page_id = self.output.add_object(page_dict);
        self.page_refs.push(Object::Reference(page_id));
        Ok(page_id)
    }

    fn xobject_for(&mut self, source: &SourceDocument, page: PageNumber) -> Result<ObjectId> {
        if let Some(&id) = self.xobjects.get(&page) {
            return Ok(id);
        }
        let id = create_page_xobject(
            &mut self.output,
            source.document(),
            source.page_id(page)?,
            &mut self.resource_cache,
        )?;
        self.xobjects.insert(page, id);
        Ok(id)
    }

    /// Create pages tree and catalog, finalize document structure
    pub fn finish(mut self) -> Document {
        let count = self.page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(self.page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        self.output
            .objects
            .insert(self.pages_tree_id, Object::Dictionary(pages_dict));

        let catalog_id = self.output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_tree_id)),
        ]));

        self.output.trailer.set("Root", catalog_id);
        self.output
    }
}
