//! Export error types

use crate::pdf::PdfError;
use rasterizer::RasterError;
use thiserror::Error;

/// Error type for the export pipeline
#[derive(Debug, Error)]
pub enum ExportError {
    /// Rasterization failed
    #[error("rasterization failed: {0}")]
    Raster(#[from] RasterError),
    /// PDF assembly failed
    #[error("PDF assembly failed: {0}")]
    Pdf(#[from] PdfError),
    /// Bitmap could not be split into pages
    #[error("pagination failed: {0}")]
    Pagination(String),
    /// Filesystem error while writing the output file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The export did not finish within the allowed time
    #[error("export timed out")]
    Timeout,
    /// The background export task failed
    #[error("export task failed: {0}")]
    Task(String),
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
