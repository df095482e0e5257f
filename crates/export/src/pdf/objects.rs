//! PDF object model
//!
//! The basic object types from the PDF Reference, restricted to what an
//! image-per-page document needs. Objects serialize themselves directly
//! into any writer.

use std::collections::BTreeMap;
use std::io::{self, Write};

/// PDF object types
#[derive(Debug, Clone)]
pub enum PdfObject {
    /// Integer number
    Integer(i64),
    /// Real (floating-point) number
    Real(f64),
    /// Name object (starts with /)
    Name(String),
    /// String (literal or hexadecimal)
    String(PdfString),
    /// Array of objects
    Array(Vec<PdfObject>),
    /// Dictionary (key-value pairs)
    Dictionary(PdfDictionary),
    /// Stream (dictionary + byte data)
    Stream(PdfStream),
    /// Indirect reference (object number, generation 0)
    Reference(u32),
}

impl PdfObject {
    pub fn name(s: impl Into<String>) -> Self {
        PdfObject::Name(s.into())
    }

    pub fn int(n: i64) -> Self {
        PdfObject::Integer(n)
    }

    pub fn real(n: f64) -> Self {
        PdfObject::Real(n)
    }

    /// A text string, hex-encoded as UTF-16BE when it leaves ASCII
    pub fn text(s: &str) -> Self {
        PdfObject::String(PdfString::text(s))
    }

    pub fn reference(obj_num: u32) -> Self {
        PdfObject::Reference(obj_num)
    }

    /// Serialize this object into a writer
    pub fn serialize<W: Write>(&self, w: &mut W) -> io::Result<()> {
        match self {
            PdfObject::Integer(n) => write!(w, "{n}"),
            PdfObject::Real(n) => write_real(w, *n),
            PdfObject::Name(name) => write_name(w, name),
            PdfObject::String(s) => s.serialize(w),
            PdfObject::Array(items) => {
                write!(w, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(w, " ")?;
                    }
                    item.serialize(w)?;
                }
                write!(w, "]")
            }
            PdfObject::Dictionary(dict) => dict.serialize(w),
            PdfObject::Stream(stream) => stream.serialize(w),
            PdfObject::Reference(obj_num) => write!(w, "{obj_num} 0 R"),
        }
    }
}

fn write_real<W: Write>(w: &mut W, n: f64) -> io::Result<()> {
    if n.fract() == 0.0 {
        write!(w, "{n:.1}")
    } else {
        let s = format!("{n:.4}");
        write!(w, "{}", s.trim_end_matches('0').trim_end_matches('.'))
    }
}

fn write_name<W: Write>(w: &mut W, name: &str) -> io::Result<()> {
    write!(w, "/")?;
    for byte in name.bytes() {
        match byte {
            b'#' | b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%' => {
                write!(w, "#{byte:02X}")?
            }
            0x21..=0x7E => write!(w, "{}", byte as char)?,
            _ => write!(w, "#{byte:02X}")?,
        }
    }
    Ok(())
}

/// PDF string encoding
#[derive(Debug, Clone)]
pub enum PdfString {
    /// Literal string enclosed in parentheses
    Literal(Vec<u8>),
    /// Hexadecimal string enclosed in angle brackets
    Hex(Vec<u8>),
}

impl PdfString {
    /// Encode a text string.
    ///
    /// ASCII text becomes a literal string; anything else is hex-encoded
    /// UTF-16BE with a byte order mark so viewers render accented
    /// characters in document metadata correctly.
    pub fn text(s: &str) -> Self {
        if s.is_ascii() {
            PdfString::Literal(s.as_bytes().to_vec())
        } else {
            let mut data = vec![0xFE, 0xFF];
            for unit in s.encode_utf16() {
                data.extend_from_slice(&unit.to_be_bytes());
            }
            PdfString::Hex(data)
        }
    }

    fn serialize<W: Write>(&self, w: &mut W) -> io::Result<()> {
        match self {
            PdfString::Literal(data) => {
                write!(w, "(")?;
                for &byte in data {
                    match byte {
                        b'(' | b')' | b'\\' => write!(w, "\\{}", byte as char)?,
                        0x0A => write!(w, "\\n")?,
                        0x0D => write!(w, "\\r")?,
                        0x09 => write!(w, "\\t")?,
                        0x20..=0x7E => write!(w, "{}", byte as char)?,
                        _ => write!(w, "\\{byte:03o}")?,
                    }
                }
                write!(w, ")")
            }
            PdfString::Hex(data) => {
                write!(w, "<")?;
                for byte in data {
                    write!(w, "{byte:02X}")?;
                }
                write!(w, ">")
            }
        }
    }
}

/// PDF dictionary with sorted keys
#[derive(Debug, Clone, Default)]
pub struct PdfDictionary {
    entries: BTreeMap<String, PdfObject>,
}

impl PdfDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// A dictionary carrying a Type entry
    pub fn of_type(type_name: &str) -> Self {
        let mut dict = Self::new();
        dict.insert("Type", PdfObject::name(type_name));
        dict
    }

    pub fn insert(&mut self, key: impl Into<String>, value: PdfObject) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&PdfObject> {
        self.entries.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn serialize<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "<<")?;
        for (key, value) in &self.entries {
            write!(w, " ")?;
            write_name(w, key)?;
            write!(w, " ")?;
            value.serialize(w)?;
        }
        write!(w, " >>")
    }
}

/// PDF stream (dictionary + data)
#[derive(Debug, Clone)]
pub struct PdfStream {
    pub dict: PdfDictionary,
    pub data: Vec<u8>,
    /// Whether a Filter entry already describes the data
    pub encoded: bool,
}

impl PdfStream {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            dict: PdfDictionary::new(),
            data,
            encoded: false,
        }
    }

    fn serialize<W: Write>(&self, w: &mut W) -> io::Result<()> {
        self.dict.serialize(w)?;
        write!(w, "\nstream\n")?;
        w.write_all(&self.data)?;
        write!(w, "\nendstream")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialize(obj: &PdfObject) -> String {
        let mut buf = Vec::new();
        obj.serialize(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_integer() {
        assert_eq!(serialize(&PdfObject::int(42)), "42");
    }

    #[test]
    fn test_real_trims_trailing_zeros() {
        assert_eq!(serialize(&PdfObject::real(595.276)), "595.276");
        assert_eq!(serialize(&PdfObject::real(297.0)), "297.0");
    }

    #[test]
    fn test_name_escapes_delimiters() {
        assert_eq!(serialize(&PdfObject::name("Type")), "/Type");
        assert_eq!(serialize(&PdfObject::name("A(B")), "/A#28B");
    }

    #[test]
    fn test_ascii_text_is_literal() {
        assert_eq!(serialize(&PdfObject::text("Hello (PDF)")), "(Hello \\(PDF\\))");
    }

    #[test]
    fn test_accented_text_is_utf16_hex() {
        let out = serialize(&PdfObject::text("Értékelés"));
        assert!(out.starts_with("<FEFF"));
        assert!(out.ends_with('>'));
    }

    #[test]
    fn test_reference() {
        assert_eq!(serialize(&PdfObject::reference(7)), "7 0 R");
    }

    #[test]
    fn test_array() {
        let arr = PdfObject::Array(vec![
            PdfObject::int(0),
            PdfObject::int(0),
            PdfObject::real(595.276),
            PdfObject::real(841.89),
        ]);
        assert_eq!(serialize(&arr), "[0 0 595.276 841.89]");
    }

    #[test]
    fn test_dictionary_with_type() {
        let dict = PdfDictionary::of_type("Page");
        let out = serialize(&PdfObject::Dictionary(dict));
        assert!(out.contains("/Type /Page"));
    }

    #[test]
    fn test_stream_framing() {
        let mut stream = PdfStream::new(b"q Q".to_vec());
        stream.dict.insert("Length", PdfObject::int(3));
        let out = serialize(&PdfObject::Stream(stream));
        assert!(out.contains("stream\nq Q\nendstream"));
    }
}
