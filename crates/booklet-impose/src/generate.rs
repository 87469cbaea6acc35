//! Booklet generation - from a source file to print-ready PDFs
//!
//! 1. Load the source (PDF or CBZ)
//! 2. For every selection (one per book): parse, add smart blanks, check
//!    spread alignment and plan the sheets
//! 3. Compose each plan and save it under the output directory

use crate::alignment::{check_spread_alignment, misaligned_spreads};
use crate::compose::{ComposedBooklet, SourceDocument, compose_booklet, load_source, save_pdf};
use crate::layout::{ImpositionPlan, ImpositionPlanner};
use crate::options::BookletOptions;
use crate::selection::{SelectionDiagnostic, parse_page_selection};
use crate::smart_blanks::calculate_smart_blanks;
use crate::spread::SpreadPair;
use crate::stats::{BookletStatistics, calculate_statistics};
use crate::types::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Everything needed to generate one or more booklets from a source file
#[derive(Debug, Clone, Default)]
pub struct BookletRequest {
    pub input: PathBuf,
    /// One selection string per book; empty means every page in one book
    pub selections: Vec<String>,
    pub options: BookletOptions,
    pub spreads: Vec<SpreadPair>,
    pub front_cover: Option<PageNumber>,
    pub back_cover: Option<PageNumber>,
    pub smart_blanks: bool,
}

impl BookletRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    /// Selections to generate, falling back to the whole document
    pub fn book_selections(&self, total_pages: usize) -> Vec<String> {
        if self.selections.is_empty() {
            vec![format!("1-{}", total_pages)]
        } else {
            self.selections.clone()
        }
    }

    /// Base name for output files: the configured name or the input file stem
    pub fn output_name(&self) -> String {
        if !self.options.output_name.trim().is_empty() {
            return self.options.output_name.trim().to_string();
        }
        self.input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "booklet".to_string())
    }

    /// `{output_folder}/{name}`, or `{input_dir}/prints/{name}` when unset
    pub fn output_dir(&self) -> PathBuf {
        let name = self.output_name();
        if !self.options.output_folder.trim().is_empty() {
            return Path::new(self.options.output_folder.trim()).join(name);
        }
        self.input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("prints")
            .join(name)
    }
}

/// A planned book, ready to compose
#[derive(Debug, Clone)]
pub struct PreparedBook {
    /// Selection after smart blanks, before padding
    pub selection: Selection,
    pub diagnostics: Vec<SelectionDiagnostic>,
    /// Descriptions of inserted smart blanks
    pub blank_changes: Vec<String>,
    pub alignment_warnings: Vec<String>,
    pub plan: ImpositionPlan,
    pub statistics: BookletStatistics,
}

/// Parse, adjust and plan a single book without touching any file
pub fn prepare_book(
    request: &BookletRequest,
    selection_text: &str,
    total_pages: usize,
) -> Result<PreparedBook> {
    let parsed = parse_page_selection(selection_text, total_pages);

    let (selection, blank_changes) = if request.smart_blanks {
        let adjusted = calculate_smart_blanks(
            &parsed.pages,
            request.front_cover,
            request.back_cover,
            &request.spreads,
        );
        (adjusted.pages, adjusted.changes)
    } else {
        (parsed.pages, Vec::new())
    };

    let alignment = check_spread_alignment(&selection, &request.spreads);
    let alignment_warnings: Vec<String> = misaligned_spreads(&alignment)
        .iter()
        .map(|r| r.warning())
        .collect();
    for warning in &alignment_warnings {
        log::warn!("{}", warning);
    }

    let plan = ImpositionPlanner::default().plan(
        &selection,
        request.options.num_signatures,
        request.options.reading_order,
    )?;
    let statistics = calculate_statistics(&plan);

    Ok(PreparedBook {
        selection,
        diagnostics: parsed.diagnostics,
        blank_changes,
        alignment_warnings,
        plan,
        statistics,
    })
}

/// A book written to disk
#[derive(Debug, Clone)]
pub struct GeneratedBook {
    pub prepared: PreparedBook,
    pub files: Vec<PathBuf>,
}

/// Load `request.input` and write every requested book
pub async fn generate_booklets(request: &BookletRequest) -> Result<Vec<GeneratedBook>> {
    request.options.validate()?;
    let source = load_source(&request.input).await?;
    generate_from_source(Arc::new(source), request).await
}

/// Write every requested book from an already loaded source
pub async fn generate_from_source(
    source: Arc<SourceDocument>,
    request: &BookletRequest,
) -> Result<Vec<GeneratedBook>> {
    request.options.validate()?;
    let total_pages = source.page_count();
    if total_pages == 0 {
        return Err(ImposeError::NoPages);
    }

    let selections = request.book_selections(total_pages);
    let multiple = selections.len() > 1;
    let name = request.output_name();
    let output_dir = request.output_dir();
    tokio::fs::create_dir_all(&output_dir).await?;

    let mut books = Vec::with_capacity(selections.len());
    for (index, text) in selections.iter().enumerate() {
        let prepared = prepare_book(request, text, total_pages)?;

        let composed = {
            let source = Arc::clone(&source);
            let plan = prepared.plan.clone();
            let paper = request.options.paper_size;
            let duplex = request.options.duplex_mode;
            tokio::task::spawn_blocking(move || compose_booklet(&source, &plan, paper, duplex))
                .await??
        };

        let suffix = if multiple {
            format!("_book{}", index + 1)
        } else {
            String::new()
        };
        let base = format!("{}{}", name, suffix);

        let files = match composed {
            ComposedBooklet::Duplex(doc) => {
                let path = output_dir.join(format!("{}_duplex.pdf", base));
                save_pdf(doc, &path).await?;
                vec![path]
            }
            ComposedBooklet::Manual { fronts, backs } => {
                let front_path = output_dir.join(format!("{}_front.pdf", base));
                let back_path = output_dir.join(format!("{}_back.pdf", base));
                save_pdf(fronts, &front_path).await?;
                save_pdf(backs, &back_path).await?;
                vec![front_path, back_path]
            }
        };

        for file in &files {
            log::info!("Saved {}", file.display());
        }
        books.push(GeneratedBook { prepared, files });
    }

    Ok(books)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dir_defaults_next_to_input() {
        let request = BookletRequest::new("/scans/vol1.pdf");
        assert_eq!(request.output_name(), "vol1");
        assert_eq!(request.output_dir(), PathBuf::from("/scans/prints/vol1"));
    }

    #[test]
    fn test_output_dir_uses_configured_folder_and_name() {
        let mut request = BookletRequest::new("/scans/vol1.pdf");
        request.options.output_folder = "/out".into();
        request.options.output_name = "custom".into();
        assert_eq!(request.output_dir(), PathBuf::from("/out/custom"));
    }

    #[test]
    fn test_book_selections_default_to_all_pages() {
        let request = BookletRequest::new("a.pdf");
        assert_eq!(request.book_selections(12), vec!["1-12".to_string()]);
    }
}
