//! Shared constants for booklet imposition
//!
//! This module centralizes magic numbers and policy limits used throughout
//! the planner, validators and sheet composer.

// =============================================================================
// Signatures
// =============================================================================

/// Logical pages carried by one folded sheet (two per side)
pub const PAGES_PER_SHEET: usize = 4;

/// Default upper bound on signatures per booklet.
///
/// This is a policy limit; `ImpositionPlanner::new` accepts another value.
pub const MAX_SIGNATURES: usize = 10;

/// Selections larger than this trigger a binding-thickness warning
pub const LARGE_SELECTION_PAGES: usize = 200;

/// Round a page count up to the next multiple of [`PAGES_PER_SHEET`]
#[inline]
pub fn round_up_to_sheet(pages: usize) -> usize {
    pages.div_ceil(PAGES_PER_SHEET) * PAGES_PER_SHEET
}

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page width in points (US Letter: 8.5" × 11")
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Default page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

/// Default page dimensions as tuple (width, height)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);

// =============================================================================
// Source Preparation
// =============================================================================

/// Pages wider than this multiple of the most common width are double pages
pub const SPLIT_WIDTH_MULTIPLIER: f32 = 1.5;

/// File extensions accepted as pages inside a CBZ archive
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];
