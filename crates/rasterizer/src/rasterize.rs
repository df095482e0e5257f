//! Document rasterization entry points

use crate::layout::layout_document;
use crate::paint::paint_document;
use crate::{Bitmap, FontLibrary, RasterError, Result};
use doc_template::RenderedDocument;
use tracing::debug;

/// Rasterization parameters.
///
/// Defaults mirror the capture settings the documents were designed for: an
/// 800 unit logical width rendered at 1.5 pixels per unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterConfig {
    /// Logical layout width in units
    pub logical_width: f32,
    /// Device pixels per logical unit
    pub scale: f32,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            logical_width: 800.0,
            scale: 1.5,
        }
    }
}

impl RasterConfig {
    fn validate(&self) -> Result<()> {
        if !self.logical_width.is_finite() || self.logical_width <= 0.0 {
            return Err(RasterError::InvalidConfig(format!(
                "logical width must be positive, got {}",
                self.logical_width
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(RasterError::InvalidConfig(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}

/// Rasterize a document with an explicit font library.
pub fn rasterize_with_fonts(
    doc: &RenderedDocument,
    fonts: &FontLibrary,
    config: &RasterConfig,
) -> Result<Bitmap> {
    config.validate()?;
    if doc.blocks.is_empty() {
        return Err(RasterError::EmptyDocument);
    }

    let layout = layout_document(doc, fonts, config.logical_width);
    debug!(
        blocks = doc.blocks.len(),
        ops = layout.ops.len(),
        height = layout.height,
        "document laid out"
    );
    paint_document(&layout, fonts, config.scale)
}

/// Rasterize a document using system-discovered fonts.
pub fn rasterize(doc: &RenderedDocument, config: &RasterConfig) -> Result<Bitmap> {
    let fonts = FontLibrary::discover();
    rasterize_with_fonts(doc, &fonts, config)
}
