//! Document I/O operations

use super::{SourceDocument, cbz_to_pdf};
use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Load a single PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}

/// Load a PDF or CBZ source, chosen by file extension
pub async fn load_source(path: impl AsRef<Path>) -> Result<SourceDocument> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let document = match extension.as_deref() {
        Some("pdf") => load_pdf(path).await?,
        Some("cbz") => cbz_to_pdf(path).await?,
        _ => return Err(ImposeError::UnsupportedInput(path.to_owned())),
    };

    let source = SourceDocument::new(document);
    log::info!(
        "Loaded {} ({} pages)",
        path.display(),
        source.page_count()
    );
    Ok(source)
}

/// Save a composed document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, ImposeError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}
