//! Rasterizer - Document layout and bitmap painting
//!
//! This crate turns a [`doc_template::RenderedDocument`] into a single RGB
//! bitmap: a layout pass places every block at a fixed logical width and
//! computes the natural content height, then a paint pass rasterizes the
//! positioned operations at a configurable scale factor.
//!
//! # Modules
//!
//! - `fonts`: system font discovery, shaping, and metrics
//! - `layout`: fixed-width block layout producing draw operations
//! - `paint`: tiny-skia painting of draw operations
//! - `bitmap`: the RGB bitmap and row-slicing used by the paginator

mod bitmap;
mod error;
mod fonts;
mod layout;
mod paint;
mod rasterize;

pub use bitmap::*;
pub use error::*;
pub use fonts::*;
pub use layout::*;
pub use paint::*;
pub use rasterize::*;
