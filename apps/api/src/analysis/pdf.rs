use std::path::Path;

use lopdf::{Dictionary, Document, Object, Stream};

use crate::analysis::document::{DocumentError, DocumentFeatures, FileType};
use crate::analysis::tables;

/// A parsed PDF. Text comes from the text layer page by page; image
/// detection walks each page's resource dictionary for image XObjects.
#[derive(Debug)]
pub struct PdfDocument {
    doc: Document,
}

impl PdfDocument {
    pub fn open(path: &Path) -> Result<Self, DocumentError> {
        Ok(Self {
            doc: Document::load(path)?,
        })
    }

    fn resolve_dict<'a>(&'a self, obj: &'a Object) -> Option<&'a Dictionary> {
        match obj {
            Object::Dictionary(dict) => Some(dict),
            Object::Reference(id) => match self.doc.get_object(*id) {
                Ok(Object::Dictionary(dict)) => Some(dict),
                _ => None,
            },
            _ => None,
        }
    }

    fn resolve_stream<'a>(&'a self, obj: &'a Object) -> Option<&'a Stream> {
        match obj {
            Object::Stream(stream) => Some(stream),
            Object::Reference(id) => match self.doc.get_object(*id) {
                Ok(Object::Stream(stream)) => Some(stream),
                _ => None,
            },
            _ => None,
        }
    }

    fn is_image_subtype(&self, obj: &Object) -> bool {
        match obj {
            Object::Name(name) => name.as_slice() == b"Image",
            Object::Reference(id) => matches!(
                self.doc.get_object(*id),
                Ok(Object::Name(name)) if name.as_slice() == b"Image"
            ),
            _ => false,
        }
    }

    /// A page with no Resources or no XObject entry simply has no images.
    fn page_has_image(&self, page: &Dictionary) -> bool {
        let resources = match page.get(b"Resources").ok().and_then(|o| self.resolve_dict(o)) {
            Some(dict) => dict,
            None => return false,
        };
        let xobjects = match resources
            .get(b"XObject")
            .ok()
            .and_then(|o| self.resolve_dict(o))
        {
            Some(dict) => dict,
            None => return false,
        };

        xobjects.iter().any(|(_, entry)| {
            self.resolve_stream(entry)
                .and_then(|stream| stream.dict.get(b"Subtype").ok())
                .is_some_and(|subtype| self.is_image_subtype(subtype))
        })
    }
}

impl DocumentFeatures for PdfDocument {
    fn file_type(&self) -> FileType {
        FileType::Pdf
    }

    fn extract_text(&self) -> Result<String, DocumentError> {
        let mut text = String::new();
        for (&number, _) in self.doc.get_pages().iter() {
            // Image-only or malformed pages yield an empty segment and
            // never abort the rest of the document.
            text.push_str(&self.doc.extract_text(&[number]).unwrap_or_default());
        }
        Ok(text)
    }

    fn has_tables(&self) -> Result<bool, DocumentError> {
        Ok(tables::looks_tabular(&self.extract_text()?))
    }

    fn has_images(&self) -> Result<bool, DocumentError> {
        for (_, page_id) in self.doc.get_pages() {
            let page = match self.doc.get_object(page_id).and_then(|o| o.as_dict()) {
                Ok(dict) => dict,
                Err(_) => continue,
            };
            if self.page_has_image(page) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
