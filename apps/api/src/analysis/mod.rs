//! Resume analysis pipeline: load a document, extract its text and
//! structural features, scan for keywords, and produce a scored report.

pub mod document;
pub mod docx;
pub mod handlers;
pub mod keywords;
pub mod pdf;
pub mod scoring;
pub mod sniff;
pub mod tables;

#[cfg(test)]
pub mod testutil;

use std::path::Path;

use crate::analysis::document::{DocumentError, DocumentFeatures, FileType};
use crate::analysis::scoring::AnalysisResult;

/// Loads the file at `path` and runs the full pipeline over it.
/// `hint` is the extension-derived type, used only when content sniffing
/// cannot resolve the format on its own.
pub fn analyze_file(path: &Path, hint: Option<FileType>) -> Result<AnalysisResult, DocumentError> {
    let doc = document::load(path, hint)?;
    analyze_document(doc.as_ref())
}

/// Runs the feature extractors over a loaded document and scores the result.
/// The extractors are independent of each other; only the keyword scan
/// depends on the extracted text.
pub fn analyze_document(doc: &dyn DocumentFeatures) -> Result<AnalysisResult, DocumentError> {
    let text = doc.extract_text()?;
    let has_tables = doc.has_tables()?;
    let has_images = doc.has_images()?;
    let keywords = keywords::analyze_keywords(&text);

    Ok(scoring::score(
        doc.file_type(),
        has_tables,
        has_images,
        keywords,
    ))
}
