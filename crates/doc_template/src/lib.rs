//! Doc Template - Rendered-document block tree
//!
//! This crate assembles the in-memory display document for a submitted
//! response: a flat sequence of typed blocks (header, title, listing info,
//! question/answer pairs, footer), each carrying an advisory pagination hint.
//! The tree is created fresh per export call, handed to the rasterizer, and
//! discarded; nothing here is persisted.

mod block;
mod builder;
mod format;

pub use block::*;
pub use builder::*;
pub use format::*;
