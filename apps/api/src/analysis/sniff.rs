use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::analysis::document::FileType;

const PDF_MAGIC: &[u8] = b"%PDF";
const ZIP_MAGIC: &[u8] = &[0x50, 0x4B, 0x03, 0x04];

/// Best-effort content-based type detection. Magic bytes don't lie —
/// extensions can be wrong, so the loader trusts this over its hint.
///
/// DOCX is an OPC zip package, so any local-file zip header sniffs as DOCX;
/// the decoder rejects archives that turn out not to contain a document.
pub fn detect(path: &Path) -> io::Result<Option<FileType>> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 8];
    let read = file.read(&mut header)?;
    let header = &header[..read];

    if header.starts_with(PDF_MAGIC) {
        Ok(Some(FileType::Pdf))
    } else if header.starts_with(ZIP_MAGIC) {
        Ok(Some(FileType::Docx))
    } else {
        Ok(None)
    }
}
