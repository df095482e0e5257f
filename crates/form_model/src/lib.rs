//! Form Model - Survey response and listing domain model
//!
//! This crate provides the domain entities for the lead-generation app
//! (listings, submitted form responses, form categories) together with the
//! static lookup tables and the canonical field ordering policy shared by the
//! on-screen detail view and the PDF export pipeline.
//!
//! # Modules
//!
//! - `category`: the closed set of form categories
//! - `listing`: property listing records
//! - `response`: submitted responses with an open answer map
//! - `labels`: field-key to display-label lookup
//! - `answers`: answer-token normalization
//! - `ordering`: canonical per-category field ordering
//! - `store`: read/write store interfaces and an in-memory implementation

mod answers;
mod category;
mod error;
mod labels;
mod listing;
mod ordering;
mod response;
pub mod store;

pub use answers::*;
pub use category::*;
pub use error::*;
pub use labels::*;
pub use listing::*;
pub use ordering::*;
pub use response::*;
