//! Document-level dictionaries

use super::objects::{PdfDictionary, PdfObject};
use chrono::{DateTime, Utc};

/// PDF version written into the file header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PdfVersion {
    #[default]
    V1_4,
    V1_7,
}

impl PdfVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            PdfVersion::V1_4 => "1.4",
            PdfVersion::V1_7 => "1.7",
        }
    }
}

/// Document information dictionary
#[derive(Debug, Clone, Default)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
}

impl DocumentInfo {
    pub fn to_dictionary(&self) -> PdfDictionary {
        let mut dict = PdfDictionary::new();
        if let Some(title) = &self.title {
            dict.insert("Title", PdfObject::text(title));
        }
        if let Some(author) = &self.author {
            dict.insert("Author", PdfObject::text(author));
        }
        if let Some(subject) = &self.subject {
            dict.insert("Subject", PdfObject::text(subject));
        }
        if let Some(creator) = &self.creator {
            dict.insert("Creator", PdfObject::text(creator));
        }
        if let Some(producer) = &self.producer {
            dict.insert("Producer", PdfObject::text(producer));
        }
        if let Some(date) = self.creation_date {
            dict.insert("CreationDate", PdfObject::text(&pdf_date(date)));
        }
        dict
    }
}

/// Format a timestamp in PDF date syntax
pub fn pdf_date(ts: DateTime<Utc>) -> String {
    ts.format("D:%Y%m%d%H%M%SZ").to_string()
}

/// Build the document catalog
pub fn create_catalog(pages_ref: u32) -> PdfDictionary {
    let mut catalog = PdfDictionary::of_type("Catalog");
    catalog.insert("Pages", PdfObject::reference(pages_ref));
    catalog
}

/// Build the page tree root
pub fn create_pages(page_refs: &[u32]) -> PdfDictionary {
    let mut pages = PdfDictionary::of_type("Pages");
    pages.insert(
        "Kids",
        PdfObject::Array(page_refs.iter().map(|&r| PdfObject::reference(r)).collect()),
    );
    pages.insert("Count", PdfObject::int(page_refs.len() as i64));
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn serialize(dict: PdfDictionary) -> String {
        let mut buf = Vec::new();
        PdfObject::Dictionary(dict).serialize(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_pdf_date_format() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 25, 14, 30, 0).unwrap();
        assert_eq!(pdf_date(ts), "D:20250125143000Z");
    }

    #[test]
    fn test_catalog_points_at_pages() {
        let out = serialize(create_catalog(2));
        assert!(out.contains("/Type /Catalog"));
        assert!(out.contains("/Pages 2 0 R"));
    }

    #[test]
    fn test_pages_count_matches_kids() {
        let out = serialize(create_pages(&[4, 6, 8]));
        assert!(out.contains("/Count 3"));
        assert!(out.contains("[4 0 R 6 0 R 8 0 R]"));
    }

    #[test]
    fn test_info_skips_absent_fields() {
        let info = DocumentInfo {
            title: Some("Teszt".to_string()),
            ..Default::default()
        };
        let out = serialize(info.to_dictionary());
        assert!(out.contains("/Title (Teszt)"));
        assert!(!out.contains("/Author"));
    }
}
