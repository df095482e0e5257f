//! PDF file writer
//!
//! Low-level file structure (header, body objects, xref table, trailer)
//! plus the document assembler that lays one image per page.

use super::document::{create_catalog, create_pages, DocumentInfo, PdfVersion};
use super::images::PageImage;
use super::objects::{PdfDictionary, PdfObject, PdfStream};
use crate::paginator::{PageSlice, A4_HEIGHT_PT, A4_WIDTH_PT};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{self, Write};
use thiserror::Error;

/// Error type for PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Invalid document structure
    #[error("invalid document: {0}")]
    InvalidDocument(String),
    /// Compression error
    #[error("compression error: {0}")]
    Compression(String),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Low-level PDF file writer.
///
/// Tracks byte offsets for every indirect object so the xref table can be
/// written at the end.
pub struct PdfWriter<W: Write> {
    writer: W,
    position: u64,
    /// (object number, byte offset) pairs
    offsets: Vec<(u32, u64)>,
    next_obj_num: u32,
    version: PdfVersion,
    compress: bool,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(writer: W, version: PdfVersion) -> Self {
        Self {
            writer,
            position: 0,
            offsets: Vec::new(),
            next_obj_num: 1,
            version,
            compress: true,
        }
    }

    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress;
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.position += data.len() as u64;
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        self.write_bytes(s.as_bytes())
    }

    /// Reserve the next object number
    pub fn allocate_object(&mut self) -> u32 {
        let num = self.next_obj_num;
        self.next_obj_num += 1;
        num
    }

    /// Write the file header and binary marker
    pub fn write_header(&mut self) -> Result<()> {
        self.write_str(&format!("%PDF-{}\n", self.version.as_str()))?;
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])
    }

    /// Write an indirect object
    pub fn write_object(&mut self, obj_num: u32, object: PdfObject) -> Result<()> {
        self.offsets.push((obj_num, self.position));
        self.write_str(&format!("{obj_num} 0 obj\n"))?;

        let mut body = Vec::new();
        object.serialize(&mut body)?;
        self.write_bytes(&body)?;

        self.write_str("\nendobj\n")
    }

    /// Write a stream object, flate-compressing it unless the data already
    /// carries a filter
    pub fn write_stream_object(&mut self, obj_num: u32, mut stream: PdfStream) -> Result<()> {
        if self.compress && !stream.encoded {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(&stream.data)?;
            stream.data = encoder
                .finish()
                .map_err(|e| PdfError::Compression(e.to_string()))?;
            stream.encoded = true;
            stream.dict.insert("Filter", PdfObject::name("FlateDecode"));
        }
        stream
            .dict
            .insert("Length", PdfObject::int(stream.data.len() as i64));

        self.write_object(obj_num, PdfObject::Stream(stream))
    }

    /// Write the cross-reference table and trailer
    pub fn write_xref_and_trailer(&mut self, catalog_ref: u32, info_ref: Option<u32>) -> Result<()> {
        let xref_offset = self.position;

        self.offsets.sort_by_key(|&(obj_num, _)| obj_num);
        let entries = self.offsets.clone();
        let size = self.next_obj_num;

        self.write_str("xref\n")?;
        self.write_str(&format!("0 {size}\n"))?;
        self.write_str("0000000000 65535 f \n")?;
        for (_, offset) in entries {
            self.write_str(&format!("{offset:010} 00000 n \n"))?;
        }

        self.write_str("trailer\n")?;
        let mut trailer = PdfDictionary::new();
        trailer.insert("Size", PdfObject::int(size as i64));
        trailer.insert("Root", PdfObject::reference(catalog_ref));
        if let Some(info) = info_ref {
            trailer.insert("Info", PdfObject::reference(info));
        }

        let mut body = Vec::new();
        PdfObject::Dictionary(trailer).serialize(&mut body)?;
        self.write_bytes(&body)?;
        self.write_str("\n")?;

        self.write_str("startxref\n")?;
        self.write_str(&format!("{xref_offset}\n"))?;
        self.write_str("%%EOF\n")
    }

    /// Flush and return the inner writer
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Assemble a complete A4 document from page slices.
///
/// Every page carries a single full-width image drawn from the top edge
/// down; the partial last page leaves white space below its slice.
pub fn write_image_document(pages: &[PageSlice], info: &DocumentInfo) -> Result<Vec<u8>> {
    if pages.is_empty() {
        return Err(PdfError::InvalidDocument("no pages to write".to_string()));
    }

    let mut pdf = PdfWriter::new(Vec::new(), PdfVersion::V1_4);
    pdf.write_header()?;

    let catalog_ref = pdf.allocate_object();
    let pages_ref = pdf.allocate_object();
    let info_ref = pdf.allocate_object();

    let mut page_refs = Vec::with_capacity(pages.len());
    let mut content_refs = Vec::with_capacity(pages.len());
    let mut image_refs = Vec::with_capacity(pages.len());
    for _ in pages {
        page_refs.push(pdf.allocate_object());
        content_refs.push(pdf.allocate_object());
        image_refs.push(pdf.allocate_object());
    }

    pdf.write_object(catalog_ref, PdfObject::Dictionary(create_catalog(pages_ref)))?;
    pdf.write_object(pages_ref, PdfObject::Dictionary(create_pages(&page_refs)))?;
    pdf.write_object(info_ref, PdfObject::Dictionary(info.to_dictionary()))?;

    for (i, slice) in pages.iter().enumerate() {
        let image = PageImage::from_bitmap(&slice.image)?;
        pdf.write_stream_object(image_refs[i], image.to_xobject())?;

        let draw_height = slice.draw_height_pt();
        let top_offset = A4_HEIGHT_PT - draw_height;
        let content = format!(
            "q\n{A4_WIDTH_PT:.3} 0 0 {draw_height:.3} 0 {top_offset:.3} cm\n/Im{i} Do\nQ\n"
        );
        pdf.write_stream_object(content_refs[i], PdfStream::new(content.into_bytes()))?;

        let mut xobjects = PdfDictionary::new();
        xobjects.insert(format!("Im{i}"), PdfObject::reference(image_refs[i]));
        let mut resources = PdfDictionary::new();
        resources.insert("XObject", PdfObject::Dictionary(xobjects));
        resources.insert(
            "ProcSet",
            PdfObject::Array(vec![PdfObject::name("PDF"), PdfObject::name("ImageC")]),
        );

        let mut page_dict = PdfDictionary::of_type("Page");
        page_dict.insert("Parent", PdfObject::reference(pages_ref));
        page_dict.insert(
            "MediaBox",
            PdfObject::Array(vec![
                PdfObject::real(0.0),
                PdfObject::real(0.0),
                PdfObject::real(A4_WIDTH_PT as f64),
                PdfObject::real(A4_HEIGHT_PT as f64),
            ]),
        );
        page_dict.insert("Resources", PdfObject::Dictionary(resources));
        page_dict.insert("Contents", PdfObject::reference(content_refs[i]));
        pdf.write_object(page_refs[i], PdfObject::Dictionary(page_dict))?;
    }

    pdf.write_xref_and_trailer(catalog_ref, Some(info_ref))?;
    pdf.finish()
}
