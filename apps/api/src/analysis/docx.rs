use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::analysis::document::{DocumentError, DocumentFeatures, FileType};

/// A parsed DOCX. The OPC package is walked once at open time:
/// `word/document.xml` for body text and table structure,
/// `word/_rels/document.xml.rels` for image relationships.
#[derive(Debug)]
pub struct DocxDocument {
    body_text: String,
    table_count: usize,
    image_rel_count: usize,
}

impl DocxDocument {
    pub fn open(path: &Path) -> Result<Self, DocumentError> {
        let mut archive = ZipArchive::new(File::open(path)?)?;

        let document_xml = read_part(&mut archive, "word/document.xml")?
            .ok_or(DocumentError::Zip(ZipError::FileNotFound))?;
        let body = parse_body(&document_xml)?;

        // A document with no image parts often has no rels entry at all.
        let image_rel_count = match read_part(&mut archive, "word/_rels/document.xml.rels")? {
            Some(rels_xml) => count_image_relationships(&rels_xml)?,
            None => 0,
        };

        Ok(Self {
            body_text: body.text,
            table_count: body.table_count,
            image_rel_count,
        })
    }
}

impl DocumentFeatures for DocxDocument {
    fn file_type(&self) -> FileType {
        FileType::Docx
    }

    fn extract_text(&self) -> Result<String, DocumentError> {
        Ok(self.body_text.clone())
    }

    fn has_tables(&self) -> Result<bool, DocumentError> {
        Ok(self.table_count > 0)
    }

    fn has_images(&self) -> Result<bool, DocumentError> {
        Ok(self.image_rel_count > 0)
    }
}

fn read_part<R: Read + std::io::Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Option<String>, DocumentError> {
    match archive.by_name(name) {
        Ok(mut entry) => {
            let mut xml = String::new();
            entry.read_to_string(&mut xml)?;
            Ok(Some(xml))
        }
        Err(ZipError::FileNotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

struct DocxBody {
    text: String,
    table_count: usize,
}

/// Walks `word/document.xml` collecting body paragraph text and counting
/// body-level tables. Paragraphs inside table cells belong to the table,
/// not the body paragraph stream; nested tables do not add to the count.
fn parse_body(xml: &str) -> Result<DocxBody, DocumentError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut table_count = 0usize;
    let mut table_depth = 0usize;
    let mut in_body_paragraph = false;
    let mut in_text_run = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"tbl" => {
                    if table_depth == 0 {
                        table_count += 1;
                    }
                    table_depth += 1;
                }
                b"p" if table_depth == 0 => in_body_paragraph = true,
                b"t" if in_body_paragraph => in_text_run = true,
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"tbl" => table_depth = table_depth.saturating_sub(1),
                b"p" if in_body_paragraph => {
                    // Every body paragraph ends in exactly one newline.
                    text.push('\n');
                    in_body_paragraph = false;
                }
                b"t" => in_text_run = false,
                _ => {}
            },
            // A self-closing <w:p/> is an empty paragraph: newline only.
            Event::Empty(e) if e.local_name().as_ref() == b"p" && table_depth == 0 => {
                text.push('\n');
            }
            Event::Text(t) if in_text_run => text.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(DocxBody { text, table_count })
}

/// Counts package relationships whose type marks them as images.
fn count_image_relationships(xml: &str) -> Result<usize, DocumentError> {
    let mut reader = Reader::from_str(xml);
    let mut count = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e)
                if e.local_name().as_ref() == b"Relationship" =>
            {
                let rel_type = e.try_get_attribute("Type")?;
                if let Some(attr) = rel_type {
                    if attr.unescape_value()?.contains("image") {
                        count += 1;
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(count)
}
