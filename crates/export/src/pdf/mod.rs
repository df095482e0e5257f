//! Minimal PDF writer
//!
//! Just enough of the PDF object model and file structure to emit documents
//! whose pages are single full-width images: name/number/string/array/
//! dictionary/stream objects, FlateDecode image XObjects, and a classic
//! xref-table file layout.

mod document;
mod images;
mod objects;
mod writer;

pub use document::*;
pub use images::*;
pub use objects::*;
pub use writer::*;
