//! Pixmap painting
//!
//! Replays positioned draw operations onto a `tiny_skia` pixmap at a given
//! device scale and converts the result into a tightly packed RGB bitmap.
//! Glyphs are filled from their TrueType outlines; when no usable face was
//! discovered, text operations are skipped and only the box geometry is
//! painted.

use crate::layout::{Color, DrawOp, LayoutDocument};
use crate::{Bitmap, FontLibrary, RasterError, Result};
use rustybuzz::ttf_parser::{GlyphId, OutlineBuilder};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Transform};

/// Paint a laid-out document into an RGB bitmap at `scale` pixels per
/// logical unit.
pub fn paint_document(
    layout: &LayoutDocument,
    fonts: &FontLibrary,
    scale: f32,
) -> Result<Bitmap> {
    let px_width = (layout.width * scale).round().max(1.0) as u32;
    let px_height = (layout.height * scale).ceil().max(1.0) as u32;

    let mut pixmap =
        Pixmap::new(px_width, px_height).ok_or(RasterError::SurfaceAllocation {
            width: px_width,
            height: px_height,
        })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    for op in &layout.ops {
        match op {
            DrawOp::Rect {
                x,
                y,
                width,
                height,
                color,
            } => fill_rect(&mut pixmap, x * scale, y * scale, width * scale, height * scale, *color),
            DrawOp::Text {
                x,
                baseline,
                text,
                size,
                bold,
                color,
            } => fill_text(
                &mut pixmap,
                fonts,
                text,
                x * scale,
                baseline * scale,
                size * scale,
                *bold,
                *color,
            ),
        }
    }

    let mut pixels = Vec::with_capacity((px_width * px_height * 3) as usize);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        pixels.push(c.red());
        pixels.push(c.green());
        pixels.push(c.blue());
    }
    Ok(Bitmap::from_rgb(px_width, px_height, pixels))
}

fn to_skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, 0xFF)
}

fn fill_rect(pixmap: &mut Pixmap, x: f32, y: f32, width: f32, height: f32, color: Color) {
    let Some(rect) = Rect::from_xywh(x, y, width, height) else {
        return;
    };
    let mut paint = Paint::default();
    paint.set_color(to_skia_color(color));
    paint.anti_alias = false;
    pixmap.fill_rect(rect, &paint, Transform::identity(), None);
}

#[allow(clippy::too_many_arguments)]
fn fill_text(
    pixmap: &mut Pixmap,
    fonts: &FontLibrary,
    text: &str,
    x: f32,
    baseline: f32,
    px_size: f32,
    bold: bool,
    color: Color,
) {
    let Some(face) = fonts.face(bold) else {
        return;
    };
    let upem = face.units_per_em() as f32;
    let glyph_scale = px_size / upem;

    // Shaped positions are in (unscaled) size units; request them at the
    // pixel size directly so offsets land on device coordinates.
    let line = fonts.shape(text, px_size, bold);

    let mut paint = Paint::default();
    paint.set_color(to_skia_color(color));
    paint.anti_alias = true;

    for glyph in &line.glyphs {
        let mut builder = GlyphPathBuilder::default();
        if face.outline_glyph(GlyphId(glyph.glyph_id), &mut builder).is_none() {
            continue;
        }
        let Some(path) = builder.inner.finish() else {
            continue;
        };
        // Font units are y-up; flip around the baseline.
        let transform = Transform::from_row(
            glyph_scale,
            0.0,
            0.0,
            -glyph_scale,
            x + glyph.x,
            baseline - glyph.y,
        );
        pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
    }
}

#[derive(Default)]
struct GlyphPathBuilder {
    inner: PathBuilder,
}

impl OutlineBuilder for GlyphPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.inner.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.inner.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.inner.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.inner.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.inner.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::DrawOp;

    fn rect_only_layout() -> LayoutDocument {
        LayoutDocument {
            ops: vec![DrawOp::Rect {
                x: 10.0,
                y: 10.0,
                width: 20.0,
                height: 20.0,
                color: Color::rgb(0xDC, 0x26, 0x63),
            }],
            width: 100.0,
            height: 50.0,
        }
    }

    #[test]
    fn test_paint_dimensions_follow_scale() {
        let fonts = FontLibrary::empty();
        let bitmap = paint_document(&rect_only_layout(), &fonts, 1.5).unwrap();
        assert_eq!(bitmap.width(), 150);
        assert_eq!(bitmap.height(), 75);
    }

    #[test]
    fn test_paint_background_is_white() {
        let fonts = FontLibrary::empty();
        let bitmap = paint_document(&rect_only_layout(), &fonts, 1.0).unwrap();
        assert_eq!(bitmap.pixel(0, 0), (0xFF, 0xFF, 0xFF));
        assert_eq!(bitmap.pixel(99, 49), (0xFF, 0xFF, 0xFF));
    }

    #[test]
    fn test_paint_fills_rect_pixels() {
        let fonts = FontLibrary::empty();
        let bitmap = paint_document(&rect_only_layout(), &fonts, 1.0).unwrap();
        assert_eq!(bitmap.pixel(15, 15), (0xDC, 0x26, 0x63));
    }

    #[test]
    fn test_text_without_face_paints_nothing() {
        let fonts = FontLibrary::empty();
        let layout = LayoutDocument {
            ops: vec![DrawOp::Text {
                x: 5.0,
                baseline: 20.0,
                text: "hello".to_string(),
                size: 14.0,
                bold: false,
                color: Color::rgb(0, 0, 0),
            }],
            width: 100.0,
            height: 40.0,
        };
        let bitmap = paint_document(&layout, &fonts, 1.0).unwrap();
        for y in 0..bitmap.height() {
            for x in 0..bitmap.width() {
                assert_eq!(bitmap.pixel(x, y), (0xFF, 0xFF, 0xFF));
            }
        }
    }

    #[test]
    fn test_minimum_surface_is_one_pixel() {
        let fonts = FontLibrary::empty();
        let layout = LayoutDocument {
            ops: Vec::new(),
            width: 0.1,
            height: 0.1,
        };
        let bitmap = paint_document(&layout, &fonts, 1.0).unwrap();
        assert_eq!(bitmap.width(), 1);
        assert_eq!(bitmap.height(), 1);
    }
}
