//! Output document assembly
//!
//! Builds the page tree, catalog and Info dictionary around rendered
//! pages, and serializes the result.

use crate::constants::PDF_VERSION;
use crate::types::Result;
use chrono::{DateTime, Utc};
use lopdf::{Dictionary, Document, Object, ObjectId};

/// Document Info entries
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMetadata {
    pub title: String,
    pub subject: String,
    pub producer: String,
    pub creation_date: DateTime<Utc>,
}

/// An output document whose page tree is still open
pub struct DocumentBuilder {
    doc: Document,
    pages_id: ObjectId,
    kids: Vec<Object>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        let mut doc = Document::with_version(PDF_VERSION);
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            kids: Vec::new(),
        }
    }

    /// Parent for pages rendered into this document
    pub fn pages_id(&self) -> ObjectId {
        self.pages_id
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    /// Append a rendered page to the page tree
    pub fn push_page(&mut self, page_id: ObjectId) {
        self.kids.push(Object::Reference(page_id));
    }

    /// Close the page tree and attach catalog and metadata
    pub fn finish(mut self, metadata: &DocumentMetadata) -> Document {
        let count = self.kids.len() as i64;

        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
        pages_dict.set("Kids", Object::Array(self.kids));
        pages_dict.set("Count", Object::Integer(count));
        self.doc
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(self.pages_id));
        let catalog_id = self.doc.add_object(catalog);
        self.doc.trailer.set("Root", catalog_id);

        let info_id = self.doc.add_object(info_dictionary(metadata));
        self.doc.trailer.set("Info", info_id);

        self.doc
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Compress eligible streams and write the document to bytes
pub fn serialize_pdf(mut doc: Document) -> Result<Vec<u8>> {
    doc.compress();
    let mut writer = Vec::new();
    doc.save_to(&mut writer)?;
    Ok(writer)
}

/// PDF date string, e.g. `D:20240131235959Z`
pub fn format_pdf_date(date: &DateTime<Utc>) -> String {
    date.format("D:%Y%m%d%H%M%SZ").to_string()
}

fn info_dictionary(metadata: &DocumentMetadata) -> Dictionary {
    let mut info = Dictionary::new();
    info.set("Title", Object::string_literal(metadata.title.as_str()));
    info.set("Subject", Object::string_literal(metadata.subject.as_str()));
    info.set("Producer", Object::string_literal(metadata.producer.as_str()));
    info.set(
        "CreationDate",
        Object::string_literal(format_pdf_date(&metadata.creation_date)),
    );
    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_pdf_date_format() {
        let date = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(format_pdf_date(&date), "D:20240309070501Z");
    }

    #[test]
    fn test_empty_builder_has_zero_count() {
        let metadata = DocumentMetadata {
            title: "t".to_string(),
            subject: "s".to_string(),
            producer: "p".to_string(),
            creation_date: Utc::now(),
        };
        let doc = DocumentBuilder::new().finish(&metadata);
        assert_eq!(doc.get_pages().len(), 0);
        assert!(doc.trailer.get(b"Info").is_ok());
    }
}
