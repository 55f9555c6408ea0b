use std::path::Path;

use thiserror::Error;

use crate::analysis::docx::DocxDocument;
use crate::analysis::pdf::PdfDocument;
use crate::analysis::sniff;

/// The two document formats the analyzer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Docx,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Docx => "docx",
        }
    }
}

/// Errors from loading or decoding a document. Everything here surfaces as
/// an analysis failure (500) at the HTTP boundary; upload validation errors
/// live in `AppError` instead.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("unsupported document format")]
    UnsupportedFormat,

    #[error("corrupt PDF document: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("corrupt DOCX archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("corrupt DOCX markup: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Capability interface over a parsed document. The variant is selected once
/// at load time; everything downstream works against this trait instead of
/// re-dispatching on the file type.
pub trait DocumentFeatures: std::fmt::Debug {
    fn file_type(&self) -> FileType;

    /// Full plain-text content in document order. Pages or paragraphs
    /// without text contribute empty segments, never an error.
    fn extract_text(&self) -> Result<String, DocumentError>;

    /// Whether the document contains tabular content. Structural for DOCX,
    /// a text heuristic for PDF (see `tables`).
    fn has_tables(&self) -> Result<bool, DocumentError>;

    /// Whether the document embeds any images.
    fn has_images(&self) -> Result<bool, DocumentError>;
}

/// Opens the file at `path` as a PDF or DOCX document.
///
/// Content sniffing wins over the extension-derived `hint`; the hint is only
/// consulted when the magic bytes match neither format. No resolvable type
/// at all is `UnsupportedFormat`.
pub fn load(
    path: &Path,
    hint: Option<FileType>,
) -> Result<Box<dyn DocumentFeatures>, DocumentError> {
    let resolved = match sniff::detect(path)? {
        Some(sniffed) => sniffed,
        None => hint.ok_or(DocumentError::UnsupportedFormat)?,
    };

    tracing::debug!("Resolved {} as {}", path.display(), resolved.as_str());

    match resolved {
        FileType::Pdf => Ok(Box::new(PdfDocument::open(path)?)),
        FileType::Docx => Ok(Box::new(DocxDocument::open(path)?)),
    }
}
