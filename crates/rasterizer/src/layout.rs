//! Fixed-width block layout
//!
//! Lays the block tree out at a fixed logical width and produces positioned
//! draw operations plus the natural content height. Geometry follows the
//! app's document styling: a dark header bar, gold-accented section rules,
//! and bordered answer boxes. Pagination hints are not consumed here; page
//! splitting is geometric and happens after rasterization.

use crate::FontLibrary;
use doc_template::{BlockKind, RenderedDocument};
use unicode_linebreak::{linebreaks, BreakOpportunity};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
}

// Document palette
const HEADER_BG: Color = Color::rgb(0x0C, 0x4A, 0x6E);
const ACCENT_GOLD: Color = Color::rgb(0xB5, 0x94, 0x10);
const BADGE_PINK: Color = Color::rgb(0xDC, 0x26, 0x63);
const BADGE_GREEN: Color = Color::rgb(0x22, 0xC5, 0x5E);
const TITLE_BLUE: Color = Color::rgb(0x0C, 0x4A, 0x6E);
const TEXT_DARK: Color = Color::rgb(0x37, 0x41, 0x51);
const TEXT_BODY: Color = Color::rgb(0x4B, 0x55, 0x63);
const TEXT_MUTED: Color = Color::rgb(0x6B, 0x72, 0x80);
const BOX_BG: Color = Color::rgb(0xF9, 0xFA, 0xFB);
const BOX_BORDER: Color = Color::rgb(0xE5, 0xE7, 0xEB);
const LISTING_BG: Color = Color::rgb(0xF0, 0xF9, 0xFF);

/// Horizontal content padding
const SIDE_PAD: f32 = 30.0;
/// Body text line spacing
const BODY_SPACING: f32 = 1.6;
/// Heading line spacing
const HEADING_SPACING: f32 = 1.2;

/// A positioned drawing operation in logical units
#[derive(Debug, Clone)]
pub enum DrawOp {
    /// Axis-aligned filled rectangle
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    /// A single line of text, positioned at its baseline start
    Text {
        x: f32,
        baseline: f32,
        text: String,
        size: f32,
        bold: bool,
        color: Color,
    },
}

/// The laid-out document: draw operations plus natural dimensions
#[derive(Debug, Clone)]
pub struct LayoutDocument {
    pub ops: Vec<DrawOp>,
    pub width: f32,
    pub height: f32,
}

/// Greedy line wrapping at UAX #14 break opportunities.
///
/// Segments longer than `max_width` overflow on their own line rather than
/// being split mid-word.
pub fn wrap_text(
    fonts: &FontLibrary,
    text: &str,
    size: f32,
    bold: bool,
    max_width: f32,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0.0f32;
    let mut prev = 0;

    for (end, opportunity) in linebreaks(text) {
        let segment = &text[prev..end];
        prev = end;

        let visible_width = fonts.measure(segment.trim_end(), size, bold);
        if !line.is_empty() && line_width + visible_width > max_width {
            lines.push(std::mem::take(&mut line).trim_end().to_string());
            line_width = 0.0;
        }

        line.push_str(segment);
        line_width += fonts.measure(segment, size, bold);

        if opportunity == BreakOpportunity::Mandatory {
            lines.push(std::mem::take(&mut line).trim_end().to_string());
            line_width = 0.0;
        }
    }

    if !line.is_empty() {
        lines.push(line.trim_end().to_string());
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

struct LayoutCtx<'a> {
    fonts: &'a FontLibrary,
    width: f32,
    ops: Vec<DrawOp>,
    y: f32,
}

impl<'a> LayoutCtx<'a> {
    fn content_width(&self) -> f32 {
        self.width - 2.0 * SIDE_PAD
    }

    fn line_advance(&self, size: f32, bold: bool, spacing: f32) -> f32 {
        self.fonts.metrics(size, bold).line_height() * spacing
    }

    /// Height a wrapped run of text will occupy
    fn text_height(&self, lines: usize, size: f32, bold: bool, spacing: f32) -> f32 {
        lines as f32 * self.line_advance(size, bold, spacing)
    }

    /// Emit wrapped text at `x`, top-aligned at `top`; returns height used
    fn emit_lines(
        &mut self,
        lines: &[String],
        x: f32,
        top: f32,
        size: f32,
        bold: bool,
        spacing: f32,
        color: Color,
    ) -> f32 {
        let advance = self.line_advance(size, bold, spacing);
        let ascent = self.fonts.metrics(size, bold).ascent;
        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            self.ops.push(DrawOp::Text {
                x,
                baseline: top + i as f32 * advance + ascent,
                text: line.clone(),
                size,
                bold,
                color,
            });
        }
        lines.len() as f32 * advance
    }

    /// Wrap and emit a text run at the cursor; advances the cursor
    fn flow_text(&mut self, text: &str, x: f32, max_width: f32, size: f32, bold: bool, spacing: f32, color: Color) {
        let lines = wrap_text(self.fonts, text, size, bold, max_width);
        let used = self.emit_lines(&lines, x, self.y, size, bold, spacing, color);
        self.y += used;
    }

    fn header(&mut self, name: &str, contact: &str, badges: &[String]) {
        let name_h = self.line_advance(28.0, true, 1.0);
        let contact_h = self.line_advance(16.0, false, 1.0);
        let bar_h = SIDE_PAD + name_h + 8.0 + contact_h + SIDE_PAD;
        let top = self.y;

        self.ops.push(DrawOp::Rect {
            x: 0.0,
            y: top,
            width: self.width,
            height: bar_h,
            color: HEADER_BG,
        });

        let name_ascent = self.fonts.metrics(28.0, true).ascent;
        self.ops.push(DrawOp::Text {
            x: SIDE_PAD,
            baseline: top + SIDE_PAD + name_ascent,
            text: name.to_string(),
            size: 28.0,
            bold: true,
            color: Color::WHITE,
        });

        let contact_ascent = self.fonts.metrics(16.0, false).ascent;
        self.ops.push(DrawOp::Text {
            x: SIDE_PAD,
            baseline: top + SIDE_PAD + name_h + 8.0 + contact_ascent,
            text: contact.to_string(),
            size: 16.0,
            bold: false,
            color: Color::WHITE,
        });

        // Partner badges, right-aligned inside the bar.
        let badge_colors = [BADGE_PINK, BADGE_GREEN];
        let badge_text_h = self.line_advance(12.0, true, 1.0);
        let badge_h = badge_text_h + 16.0;
        let badge_ascent = self.fonts.metrics(12.0, true).ascent;
        let mut right_edge = self.width - SIDE_PAD;
        for (i, badge) in badges.iter().enumerate().rev() {
            let text_w = self.fonts.measure(badge, 12.0, true);
            let badge_w = text_w + 24.0;
            let bx = right_edge - badge_w;
            let by = top + (bar_h - badge_h) / 2.0;
            self.ops.push(DrawOp::Rect {
                x: bx,
                y: by,
                width: badge_w,
                height: badge_h,
                color: badge_colors[i % badge_colors.len()],
            });
            self.ops.push(DrawOp::Text {
                x: bx + 12.0,
                baseline: by + 8.0 + badge_ascent,
                text: badge.clone(),
                size: 12.0,
                bold: true,
                color: Color::WHITE,
            });
            right_edge = bx - 15.0;
        }

        self.y = top + bar_h + 30.0;
    }

    fn listing_info(&mut self, location: &str, price_text: &str) {
        let pad = 20.0;
        let inner_x = SIDE_PAD + 4.0 + pad;
        let inner_w = self.content_width() - 4.0 - 2.0 * pad;

        let heading = "Ingatlan információk";
        let line_location = format!("Helyszín: {location}");
        let line_price = format!("Ár: {price_text}");

        let heading_lines = wrap_text(self.fonts, heading, 18.0, true, inner_w);
        let location_lines = wrap_text(self.fonts, &line_location, 14.0, false, inner_w);
        let price_lines = wrap_text(self.fonts, &line_price, 14.0, false, inner_w);

        let heading_h = self.text_height(heading_lines.len(), 18.0, true, HEADING_SPACING);
        let body_h = self.text_height(location_lines.len() + price_lines.len(), 14.0, false, BODY_SPACING);
        let box_h = pad + heading_h + 10.0 + body_h + pad;
        let top = self.y;

        self.ops.push(DrawOp::Rect {
            x: SIDE_PAD,
            y: top,
            width: self.content_width(),
            height: box_h,
            color: LISTING_BG,
        });
        // Gold accent bar on the left edge.
        self.ops.push(DrawOp::Rect {
            x: SIDE_PAD,
            y: top,
            width: 4.0,
            height: box_h,
            color: ACCENT_GOLD,
        });

        let mut cursor = top + pad;
        cursor += self.emit_lines(&heading_lines, inner_x, cursor, 18.0, true, HEADING_SPACING, TITLE_BLUE);
        cursor += 10.0;
        cursor += self.emit_lines(&location_lines, inner_x, cursor, 14.0, false, BODY_SPACING, TEXT_BODY);
        self.emit_lines(&price_lines, inner_x, cursor, 14.0, false, BODY_SPACING, TEXT_BODY);

        self.y = top + box_h + 30.0;
    }

    fn section_title(&mut self, title: &str) {
        self.flow_text(title, SIDE_PAD, self.content_width(), 24.0, true, HEADING_SPACING, TITLE_BLUE);
        self.y += 10.0;
        self.ops.push(DrawOp::Rect {
            x: SIDE_PAD,
            y: self.y,
            width: self.content_width(),
            height: 2.0,
            color: ACCENT_GOLD,
        });
        self.y += 2.0 + 25.0;
    }

    fn answer(&mut self, label: &str, text: &str) {
        self.flow_text(label, SIDE_PAD, self.content_width(), 16.0, true, HEADING_SPACING, TEXT_DARK);
        self.y += 8.0;

        let box_x = SIDE_PAD + 20.0;
        let box_w = self.content_width() - 20.0;
        let pad = 15.0;
        let text_w = box_w - 2.0 * pad;

        let lines = wrap_text(self.fonts, text, 14.0, false, text_w);
        let text_h = self.text_height(lines.len(), 14.0, false, BODY_SPACING);
        let box_h = text_h + 2.0 * pad;
        let top = self.y;

        // One-unit border drawn as an underlying rect.
        self.ops.push(DrawOp::Rect {
            x: box_x,
            y: top,
            width: box_w,
            height: box_h,
            color: BOX_BORDER,
        });
        self.ops.push(DrawOp::Rect {
            x: box_x + 1.0,
            y: top + 1.0,
            width: box_w - 2.0,
            height: box_h - 2.0,
            color: BOX_BG,
        });

        self.emit_lines(&lines, box_x + pad, top + pad, 14.0, false, BODY_SPACING, TEXT_BODY);
        self.y = top + box_h + 25.0;
    }

    fn footer(&mut self, left: &str, right: &str) {
        self.y += 40.0;
        self.ops.push(DrawOp::Rect {
            x: 0.0,
            y: self.y,
            width: self.width,
            height: 2.0,
            color: ACCENT_GOLD,
        });
        self.y += 2.0 + 20.0;

        let ascent = self.fonts.metrics(12.0, false).ascent;
        let baseline = self.y + ascent;
        self.ops.push(DrawOp::Text {
            x: SIDE_PAD,
            baseline,
            text: left.to_string(),
            size: 12.0,
            bold: false,
            color: TEXT_MUTED,
        });
        let right_w = self.fonts.measure(right, 12.0, false);
        self.ops.push(DrawOp::Text {
            x: self.width - SIDE_PAD - right_w,
            baseline,
            text: right.to_string(),
            size: 12.0,
            bold: false,
            color: TEXT_MUTED,
        });
        self.y += self.line_advance(12.0, false, 1.0) + 20.0;
    }
}

/// Lay a document out at a fixed logical width
pub fn layout_document(
    doc: &RenderedDocument,
    fonts: &FontLibrary,
    width: f32,
) -> LayoutDocument {
    let mut ctx = LayoutCtx {
        fonts,
        width,
        ops: Vec::new(),
        y: 0.0,
    };

    for block in &doc.blocks {
        match &block.kind {
            BlockKind::Header {
                name,
                contact,
                badges,
            } => ctx.header(name, contact, badges),
            BlockKind::CategoryTitle(title) => {
                ctx.flow_text(title, SIDE_PAD, ctx.content_width(), 32.0, true, HEADING_SPACING, TITLE_BLUE);
                ctx.y += 15.0;
            }
            BlockKind::DateLine(text) => {
                ctx.flow_text(text, SIDE_PAD, ctx.content_width(), 14.0, false, 1.0, TEXT_MUTED);
                ctx.y += 30.0;
            }
            BlockKind::ListingInfo {
                location,
                price_text,
            } => ctx.listing_info(location, price_text),
            BlockKind::SectionTitle(title) => ctx.section_title(title),
            BlockKind::Answer { label, text } => ctx.answer(label, text),
            BlockKind::Footer { left, right } => ctx.footer(left, right),
        }
    }

    LayoutDocument {
        ops: ctx.ops,
        width,
        height: ctx.y,
    }
}
