//! Error types for rasterization

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Document produced no visible content")]
    EmptyDocument,

    #[error("Could not allocate a {width}x{height} pixel surface")]
    SurfaceAllocation { width: u32, height: u32 },

    #[error("Invalid raster configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, RasterError>;
