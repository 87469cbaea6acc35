use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CBZ archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Spread pages must be adjacent, got {first} and {second}")]
    InvalidSpread { first: PageNumber, second: PageNumber },
    #[error("Number of signatures must be between 1 and {max}, got {requested}")]
    InvalidSignatureCount { requested: usize, max: usize },
    #[error("Selection is empty, nothing to impose")]
    EmptySelection,
    #[error("Page {page} out of range (1-{total})")]
    PageOutOfRange { page: PageNumber, total: usize },
    #[error("No pages in source document")]
    NoPages,
    #[error("Unsupported input file: {0}")]
    UnsupportedInput(PathBuf),
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// 1-based page number in the source document
pub type PageNumber = usize;

/// One entry of a selection: a source page or a blank placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageRef {
    /// 1-based source page
    Page(PageNumber),
    /// Placeholder page with no source content
    Blank,
}

impl PageRef {
    pub fn page_number(self) -> Option<PageNumber> {
        match self {
            PageRef::Page(n) => Some(n),
            PageRef::Blank => None,
        }
    }

    pub fn is_blank(self) -> bool {
        matches!(self, PageRef::Blank)
    }
}

impl From<PageNumber> for PageRef {
    fn from(page: PageNumber) -> Self {
        PageRef::Page(page)
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageRef::Page(n) => write!(f, "{}", n),
            PageRef::Blank => f.write_str("b"),
        }
    }
}

/// Ordered working set of pages for one output booklet
pub type Selection = Vec<PageRef>;

/// Page flow of the finished booklet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ReadingOrder {
    /// Left-to-right (western comics)
    #[default]
    Western,
    /// Right-to-left (manga)
    Manga,
}

impl ReadingOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            ReadingOrder::Western => "western",
            ReadingOrder::Manga => "manga",
        }
    }
}

/// How sheet fronts and backs are delivered to the printer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum DuplexMode {
    /// Single file alternating front and back sides
    #[default]
    Auto,
    /// Separate files for fronts and backs (flip the stack by hand)
    Manual,
}

/// Output sheet sizes, always laid out landscape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PaperSize {
    /// 11" × 17"
    #[default]
    Tabloid,
    A3,
    Letter,
    A4,
    Legal,
}

impl PaperSize {
    /// Sheet dimensions in points (width, height), landscape
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PaperSize::Tabloid => (17.0 * 72.0, 11.0 * 72.0),
            PaperSize::A3 => (1190.0, 842.0),
            PaperSize::Letter => (11.0 * 72.0, 8.5 * 72.0),
            PaperSize::A4 => (842.0, 595.0),
            PaperSize::Legal => (14.0 * 72.0, 8.5 * 72.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PaperSize::Tabloid => "tabloid",
            PaperSize::A3 => "a3",
            PaperSize::Letter => "letter",
            PaperSize::A4 => "a4",
            PaperSize::Legal => "legal",
        }
    }
}
