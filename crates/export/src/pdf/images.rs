//! Image XObjects
//!
//! Page bitmaps are embedded as DeviceRGB image XObjects. Raw RGB rows are
//! flate-compressed; no external image codec is involved.

use super::objects::{PdfDictionary, PdfObject, PdfStream};
use super::writer::{PdfError, Result};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use rasterizer::Bitmap;
use std::io::Write;

/// A raw RGB image prepared for embedding
#[derive(Debug, Clone)]
pub struct PageImage {
    pub width: u32,
    pub height: u32,
    /// Flate-compressed RGB8 rows
    data: Vec<u8>,
}

impl PageImage {
    /// Compress a bitmap into an embeddable image
    pub fn from_bitmap(bitmap: &Bitmap) -> Result<Self> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(bitmap.pixels())?;
        let data = encoder
            .finish()
            .map_err(|e| PdfError::Compression(e.to_string()))?;

        Ok(Self {
            width: bitmap.width(),
            height: bitmap.height(),
            data,
        })
    }

    /// Build the image XObject stream
    pub fn to_xobject(&self) -> PdfStream {
        let mut dict = PdfDictionary::of_type("XObject");
        dict.insert("Subtype", PdfObject::name("Image"));
        dict.insert("Width", PdfObject::int(self.width as i64));
        dict.insert("Height", PdfObject::int(self.height as i64));
        dict.insert("BitsPerComponent", PdfObject::int(8));
        dict.insert("ColorSpace", PdfObject::name("DeviceRGB"));
        dict.insert("Filter", PdfObject::name("FlateDecode"));
        dict.insert("Length", PdfObject::int(self.data.len() as i64));

        PdfStream {
            dict,
            data: self.data.clone(),
            encoded: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xobject_dictionary_entries() {
        let image = PageImage::from_bitmap(&Bitmap::white(4, 2)).unwrap();
        let stream = image.to_xobject();

        let mut buf = Vec::new();
        PdfObject::Stream(stream).serialize(&mut buf).unwrap();
        let out = String::from_utf8_lossy(&buf);

        assert!(out.contains("/Subtype /Image"));
        assert!(out.contains("/Width 4"));
        assert!(out.contains("/Height 2"));
        assert!(out.contains("/ColorSpace /DeviceRGB"));
        assert!(out.contains("/Filter /FlateDecode"));
    }

    #[test]
    fn test_solid_bitmap_compresses_well() {
        let image = PageImage::from_bitmap(&Bitmap::white(100, 100)).unwrap();
        // 30000 raw bytes of a single value shrink dramatically.
        assert!(image.to_xobject().data.len() < 1000);
    }
}
