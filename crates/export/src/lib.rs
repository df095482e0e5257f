//! Export - PDF export pipeline
//!
//! Turns a rasterized response document into a downloadable PDF file: the
//! page bitmap is split into A4-proportioned slices, each slice is embedded
//! as a full-width image on its own page, and the result is assembled into
//! a complete PDF file with a derived download filename.
//!
//! # Modules
//!
//! - `paginator`: geometric page splitting of the document bitmap
//! - `pdf`: low-level PDF object model, writer, and image embedding
//! - `filename`: download filename derivation
//! - `api`: end-to-end export entry points

mod api;
mod error;
mod filename;
mod paginator;
pub mod pdf;

pub use api::*;
pub use error::*;
pub use filename::*;
pub use paginator::*;
