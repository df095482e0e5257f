//! Font discovery, shaping, and metrics
//!
//! Fonts come from the system via font-kit (sans-serif default, regular and
//! bold). Shaping runs through rustybuzz. When no usable system font exists
//! the library degrades to estimated per-character advances so layout stays
//! deterministic; painted output then contains boxes but no glyph shapes.

use font_kit::family_name::FamilyName;
use font_kit::properties::{Properties, Weight};
use font_kit::source::SystemSource;
use std::sync::Arc;

/// Vertical metrics for a line of text at a given size
#[derive(Debug, Clone, Copy)]
pub struct LineMetrics {
    /// Ascent above the baseline
    pub ascent: f32,
    /// Descent below the baseline (positive)
    pub descent: f32,
    /// Extra leading between lines
    pub line_gap: f32,
}

impl LineMetrics {
    /// Natural line height without any spacing multiplier
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }
}

/// A glyph positioned relative to the start of its line
#[derive(Debug, Clone, Copy)]
pub struct PlacedGlyph {
    /// Glyph ID in the face (zero in fallback mode)
    pub glyph_id: u16,
    /// Horizontal position of the glyph origin
    pub x: f32,
    /// Vertical offset from the baseline
    pub y: f32,
}

/// A shaped line of text
#[derive(Debug, Clone)]
pub struct ShapedLine {
    /// Positioned glyphs (empty in fallback mode)
    pub glyphs: Vec<PlacedGlyph>,
    /// Total advance width
    pub width: f32,
}

/// A font face kept alive together with its backing data
struct LoadedFace {
    /// The font data (kept alive for rustybuzz)
    #[allow(dead_code)]
    data: Arc<Vec<u8>>,
    /// The rustybuzz face
    face: rustybuzz::Face<'static>,
}

impl LoadedFace {
    fn from_data(data: Arc<Vec<u8>>, index: u32) -> Option<Self> {
        // SAFETY: the Arc lives in this struct for as long as the face does.
        let static_data: &'static [u8] =
            unsafe { std::mem::transmute::<&[u8], &'static [u8]>(data.as_slice()) };
        let face = rustybuzz::Face::from_slice(static_data, index)?;
        Some(Self { data, face })
    }
}

/// Fallback metrics used when no system font is available
const FALLBACK_UNITS_PER_EM: f32 = 1000.0;
const FALLBACK_ASCENT: f32 = 800.0;
const FALLBACK_DESCENT: f32 = 200.0;

/// Regular and bold sans-serif faces with a metric fallback
pub struct FontLibrary {
    regular: Option<LoadedFace>,
    bold: Option<LoadedFace>,
}

impl FontLibrary {
    /// Discover the system sans-serif family.
    ///
    /// Never fails: a machine without usable fonts gets an empty library and
    /// a warning, and layout falls back to estimated advances.
    pub fn discover() -> Self {
        let source = SystemSource::new();
        let regular = load_system_face(&source, Weight::NORMAL);
        let bold = load_system_face(&source, Weight::BOLD);

        if regular.is_none() {
            tracing::warn!("no usable system sans-serif font; using estimated text metrics");
        }

        Self { regular, bold }
    }

    /// An empty library that always uses estimated metrics
    pub fn empty() -> Self {
        Self {
            regular: None,
            bold: None,
        }
    }

    /// Whether a real face is loaded for the requested weight
    pub fn has_face(&self, bold: bool) -> bool {
        self.select(bold).is_some()
    }

    /// The rustybuzz face for the requested weight, if loaded
    pub fn face(&self, bold: bool) -> Option<&rustybuzz::Face<'static>> {
        self.select(bold).map(|f| &f.face)
    }

    fn select(&self, bold: bool) -> Option<&LoadedFace> {
        if bold {
            self.bold.as_ref().or(self.regular.as_ref())
        } else {
            self.regular.as_ref()
        }
    }

    /// Vertical metrics for a font size
    pub fn metrics(&self, size: f32, bold: bool) -> LineMetrics {
        match self.select(bold) {
            Some(loaded) => {
                let face = &loaded.face;
                let upem = face.units_per_em() as f32;
                LineMetrics {
                    ascent: face.ascender() as f32 * size / upem,
                    descent: face.descender().unsigned_abs() as f32 * size / upem,
                    line_gap: face.line_gap() as f32 * size / upem,
                }
            }
            None => LineMetrics {
                ascent: FALLBACK_ASCENT * size / FALLBACK_UNITS_PER_EM,
                descent: FALLBACK_DESCENT * size / FALLBACK_UNITS_PER_EM,
                line_gap: 0.0,
            },
        }
    }

    /// Advance width of a text run
    pub fn measure(&self, text: &str, size: f32, bold: bool) -> f32 {
        self.shape(text, size, bold).width
    }

    /// Shape a text run into positioned glyphs
    pub fn shape(&self, text: &str, size: f32, bold: bool) -> ShapedLine {
        match self.select(bold) {
            Some(loaded) => shape_with_face(&loaded.face, text, size),
            None => estimate_line(text, size),
        }
    }
}

fn load_system_face(source: &SystemSource, weight: Weight) -> Option<LoadedFace> {
    let properties = Properties {
        weight,
        ..Properties::new()
    };
    let handle = source
        .select_best_match(&[FamilyName::SansSerif], &properties)
        .ok()?;
    let font = handle.load().ok()?;
    let data = font.copy_font_data()?;
    LoadedFace::from_data(data, 0)
}

fn shape_with_face(face: &rustybuzz::Face<'_>, text: &str, size: f32) -> ShapedLine {
    let upem = face.units_per_em() as f32;
    let scale = size / upem;

    let mut buffer = rustybuzz::UnicodeBuffer::new();
    buffer.push_str(text);
    let output = rustybuzz::shape(face, &[], buffer);

    let infos = output.glyph_infos();
    let positions = output.glyph_positions();

    let mut glyphs = Vec::with_capacity(infos.len());
    let mut pen_x = 0.0f32;
    for (info, pos) in infos.iter().zip(positions.iter()) {
        glyphs.push(PlacedGlyph {
            glyph_id: info.glyph_id as u16,
            x: pen_x + pos.x_offset as f32 * scale,
            y: pos.y_offset as f32 * scale,
        });
        pen_x += pos.x_advance as f32 * scale;
    }

    ShapedLine {
        glyphs,
        width: pen_x,
    }
}

/// Advance estimation when no font is available.
///
/// Width classes follow common sans-serif proportions; good enough for
/// deterministic wrapping, not for rendering.
fn estimate_line(text: &str, size: f32) -> ShapedLine {
    let width: f32 = text.chars().map(|c| estimate_char_width(c) * size).sum();
    ShapedLine {
        glyphs: Vec::new(),
        width,
    }
}

fn estimate_char_width(c: char) -> f32 {
    match c {
        ' ' | 'i' | 'l' | 'j' | 't' | 'f' | 'r' | '!' | '|' | '\'' | '.' | ',' | ':' | ';' => 0.30,
        'I' | '1' => 0.35,
        'm' | 'w' | 'M' | 'W' | '@' | '%' => 0.90,
        'A'..='Z' | 'Á' | 'É' | 'Í' | 'Ó' | 'Ö' | 'Ő' | 'Ú' | 'Ü' | 'Ű' => 0.70,
        '0'..='9' => 0.55,
        _ => 0.55,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_library_estimates() {
        let lib = FontLibrary::empty();
        assert!(!lib.has_face(false));

        let line = lib.shape("Hello", 14.0, false);
        assert!(line.glyphs.is_empty());
        assert!(line.width > 0.0);
    }

    #[test]
    fn test_estimated_width_grows_with_text() {
        let lib = FontLibrary::empty();
        let short = lib.measure("ab", 14.0, false);
        let long = lib.measure("abcdef", 14.0, false);
        assert!(long > short);
    }

    #[test]
    fn test_estimated_width_scales_with_size() {
        let lib = FontLibrary::empty();
        let small = lib.measure("minta szöveg", 10.0, false);
        let large = lib.measure("minta szöveg", 20.0, false);
        assert!((large - small * 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_fallback_metrics() {
        let lib = FontLibrary::empty();
        let m = lib.metrics(10.0, false);
        assert!((m.ascent - 8.0).abs() < 1e-6);
        assert!((m.descent - 2.0).abs() < 1e-6);
        assert!(m.line_height() > 0.0);
    }

    #[test]
    fn test_measure_empty_is_zero() {
        let lib = FontLibrary::empty();
        assert_eq!(lib.measure("", 14.0, false), 0.0);
    }

    #[test]
    fn test_discover_does_not_panic() {
        // Works with or without system fonts installed.
        let lib = FontLibrary::discover();
        let m = lib.metrics(14.0, true);
        assert!(m.line_height() > 0.0);
    }
}
