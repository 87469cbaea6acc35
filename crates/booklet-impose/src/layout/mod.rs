//! Imposition layout
//!
//! This module turns an ordered selection into sheets:
//! - Signature sizing (how many pages each folded group holds)
//! - Nested-folio slot assignment (which page goes on which side of which sheet)
//! - The planner that ties both together

mod plan;
mod signature;

pub use plan::*;
pub use signature::*;
