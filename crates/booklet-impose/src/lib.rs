mod alignment;
pub mod compose;
pub mod constants;
mod generate;
pub mod layout;
mod options;
mod selection;
mod smart_blanks;
mod spread;
mod stats;
mod types;
mod validate;

pub use alignment::{AlignmentResult, check_spread_alignment, misaligned_spreads};
pub use compose::{ComposedBooklet, SourceDocument, compose_booklet, load_pdf, load_source, save_pdf};
pub use generate::{
    BookletRequest, GeneratedBook, PreparedBook, generate_booklets, generate_from_source,
    prepare_book,
};
pub use layout::{ImpositionPlan, ImpositionPlanner, Sheet, Signature, plan_booklet};
pub use options::*;
pub use selection::{ParsedSelection, SelectionDiagnostic, format_selection, parse_page_selection};
pub use smart_blanks::{SmartBlanks, calculate_smart_blanks};
pub use spread::SpreadPair;
pub use stats::{BookletStatistics, calculate_statistics, selection_summary};
pub use types::*;
pub use validate::{ValidationReport, validate_booklet_options, validate_selection};
