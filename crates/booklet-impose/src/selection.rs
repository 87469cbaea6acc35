//! Page selection syntax
//!
//! A selection is a comma-separated list of tokens, each one of:
//! - `b` or `blank` (any case): a blank page
//! - `p`: a single 1-based page number
//! - `p1-p2`: an inclusive, ascending range of pages
//!
//! Parsing never fails. Tokens that cannot be used are dropped and reported
//! as [`SelectionDiagnostic`]s; ranges reaching outside the document are
//! clamped while single pages outside it are dropped.

use crate::types::{PageRef, Selection};
use std::fmt;

/// A non-fatal problem found while parsing a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionDiagnostic {
    /// Token is not a blank marker, page number or range; dropped
    InvalidPage(String),
    /// Token contains `-` but is not a `start-end` pair of numbers; dropped
    InvalidRange(String),
    /// Single page outside `1..=total`; dropped
    PageOutOfRange { page: i64, total: usize },
    /// Range reaching outside `1..=total`; clamped and kept
    RangeClamped {
        start: i64,
        end: i64,
        total: usize,
    },
    /// Range whose end precedes its start; contributes no pages
    DescendingRange { start: i64, end: i64 },
}

impl fmt::Display for SelectionDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionDiagnostic::InvalidPage(token) => {
                write!(f, "Invalid page number '{}', skipping", token)
            }
            SelectionDiagnostic::InvalidRange(token) => {
                write!(f, "Invalid range '{}', skipping", token)
            }
            SelectionDiagnostic::PageOutOfRange { page, total } => {
                write!(f, "Page {} out of range (1-{}), skipping", page, total)
            }
            SelectionDiagnostic::RangeClamped { start, end, total } => write!(
                f,
                "Page range {}-{} adjusted to fit within 1-{}",
                start, end, total
            ),
            SelectionDiagnostic::DescendingRange { start, end } => {
                write!(f, "Descending range {}-{} selects no pages", start, end)
            }
        }
    }
}

/// Result of parsing a selection: the pages plus any diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedSelection {
    pub pages: Selection,
    pub diagnostics: Vec<SelectionDiagnostic>,
}

impl ParsedSelection {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parse a page selection such as `"b,1-20,b"` or `"1-10,15,20-25"`.
///
/// Output preserves token order and duplicates.
pub fn parse_page_selection(text: &str, total_pages: usize) -> ParsedSelection {
    let mut parsed = ParsedSelection::default();

    for raw in text.split(',') {
        let token = raw.trim().to_lowercase();
        parse_token(&token, total_pages, &mut parsed);
    }

    for diagnostic in &parsed.diagnostics {
        log::warn!("{}", diagnostic);
    }

    parsed
}

fn parse_token(token: &str, total_pages: usize, parsed: &mut ParsedSelection) {
    if token == "b" || token == "blank" {
        parsed.pages.push(PageRef::Blank);
    } else if token.contains('-') {
        parse_range(token, total_pages, parsed);
    } else {
        match token.parse::<i64>() {
            Ok(page) if page >= 1 && page as u64 <= total_pages as u64 => {
                parsed.pages.push(PageRef::Page(page as usize));
            }
            Ok(page) => parsed.diagnostics.push(SelectionDiagnostic::PageOutOfRange {
                page,
                total: total_pages,
            }),
            Err(_) => parsed
                .diagnostics
                .push(SelectionDiagnostic::InvalidPage(token.to_string())),
        }
    }
}

fn parse_range(token: &str, total_pages: usize, parsed: &mut ParsedSelection) {
    let Some((start, end)) = split_range(token) else {
        parsed
            .diagnostics
            .push(SelectionDiagnostic::InvalidRange(token.to_string()));
        return;
    };

    let total = i64::try_from(total_pages).unwrap_or(i64::MAX);
    let (first, last) = if start < 1 || end > total {
        parsed.diagnostics.push(SelectionDiagnostic::RangeClamped {
            start,
            end,
            total: total_pages,
        });
        (start.max(1), end.min(total))
    } else {
        (start, end)
    };

    if first > last {
        if start <= end {
            // Clamping emptied it; RangeClamped already reported
            return;
        }
        parsed
            .diagnostics
            .push(SelectionDiagnostic::DescendingRange { start, end });
        return;
    }

    parsed
        .pages
        .extend((first..=last).map(|page| PageRef::from(page as usize)));
}

/// Split `start-end` into its two numeric endpoints
fn split_range(token: &str) -> Option<(i64, i64)> {
    let mut parts = token.split('-');
    let start = parts.next()?.trim().parse().ok()?;
    let end = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((start, end))
}

/// Render a selection back into the compact selection syntax.
///
/// Ascending runs of consecutive pages collapse into `a-b`, blanks become `b`.
pub fn format_selection(pages: &[PageRef]) -> String {
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < pages.len() {
        match pages[i] {
            PageRef::Blank => {
                tokens.push("b".to_string());
                i += 1;
            }
            PageRef::Page(start) => {
                let mut end = start;
                while let Some(PageRef::Page(next)) = pages.get(i + 1) {
                    if *next != end + 1 {
                        break;
                    }
                    end = *next;
                    i += 1;
                }
                if start == end {
                    tokens.push(start.to_string());
                } else {
                    tokens.push(format!("{}-{}", start, end));
                }
                i += 1;
            }
        }
    }

    tokens.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_range_rejects_extra_dashes() {
        assert_eq!(split_range("1-3"), Some((1, 3)));
        assert_eq!(split_range(" 2 - 9 "), Some((2, 9)));
        assert_eq!(split_range("1-2-3"), None);
        assert_eq!(split_range("-4"), None);
        assert_eq!(split_range("a-4"), None);
    }
}
