//! Geometric paginator
//!
//! Splits the document bitmap into A4-proportioned page slices. The math
//! runs in layout units where the page is 210 wide and 297 tall; pixel rows
//! are cropped out of the source bitmap so that slice `k` holds exactly the
//! unit interval `[k*297, (k+1)*297)`. A trailing sliver shorter than the
//! minimum tail is dropped rather than emitted as a near-empty page.

use crate::{ExportError, Result};
use rasterizer::Bitmap;

/// Page width in layout units
pub const PAGE_WIDTH_UNITS: f32 = 210.0;
/// Page height in layout units
pub const PAGE_HEIGHT_UNITS: f32 = 297.0;
/// Minimum remaining height that still earns its own page
pub const MIN_TAIL_UNITS: f32 = 20.0;

/// A4 portrait width in PostScript points
pub const A4_WIDTH_PT: f32 = 595.276;
/// A4 portrait height in PostScript points
pub const A4_HEIGHT_PT: f32 = 841.89;

/// One page worth of bitmap rows
#[derive(Debug, Clone)]
pub struct PageSlice {
    /// The cropped pixel rows for this page
    pub image: Bitmap,
    /// Height the slice occupies on the page, in layout units
    pub draw_height_units: f32,
}

impl PageSlice {
    /// Height the slice occupies on the page, in points
    pub fn draw_height_pt(&self) -> f32 {
        self.draw_height_units * (A4_WIDTH_PT / PAGE_WIDTH_UNITS)
    }
}

/// Split a document bitmap into page slices.
///
/// The first page is always emitted, even for documents shorter than one
/// page. Further pages are emitted while at least [`MIN_TAIL_UNITS`] of
/// content remains.
pub fn paginate(bitmap: &Bitmap) -> Result<Vec<PageSlice>> {
    if bitmap.width() == 0 || bitmap.height() == 0 {
        return Err(ExportError::Pagination(format!(
            "bitmap has no pixels ({}x{})",
            bitmap.width(), bitmap.height()
        )));
    }

    let units_per_px = PAGE_WIDTH_UNITS / bitmap.width() as f32;
    let px_per_unit = bitmap.width() as f32 / PAGE_WIDTH_UNITS;
    let total_units = bitmap.height() as f32 * units_per_px;

    let mut page_count = 1usize;
    let mut remaining = total_units - PAGE_HEIGHT_UNITS;
    while remaining >= MIN_TAIL_UNITS {
        page_count += 1;
        remaining -= PAGE_HEIGHT_UNITS;
    }

    let mut pages = Vec::with_capacity(page_count);
    for k in 0..page_count {
        let top_px = (k as f32 * PAGE_HEIGHT_UNITS * px_per_unit).round() as u32;
        let bottom_px = ((k + 1) as f32 * PAGE_HEIGHT_UNITS * px_per_unit)
            .round()
            .min(bitmap.height() as f32) as u32;
        let image = bitmap.slice_rows(top_px, bottom_px);
        let draw_height_units = image.height() as f32 * units_per_px;
        pages.push(PageSlice {
            image,
            draw_height_units,
        });
    }

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitmap(width: u32, height: u32) -> Bitmap {
        Bitmap::white(width, height)
    }

    #[test]
    fn test_short_document_is_one_page() {
        // 1000 px at 800 wide is 262.5 units, under one page.
        let pages = paginate(&bitmap(800, 1000)).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].image.height(), 1000);
        assert!((pages[0].draw_height_units - 262.5).abs() < 1e-3);
    }

    #[test]
    fn test_two_page_document() {
        // 2000 px at 800 wide is 525 units: one full page plus 228 units.
        let pages = paginate(&bitmap(800, 2000)).unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages[0].draw_height_units > pages[1].draw_height_units);
    }

    #[test]
    fn test_trailing_sliver_is_dropped() {
        // 1143 px at 800 wide is just over 300 units; the 3-unit tail is
        // below the minimum and earns no page.
        let pages = paginate(&bitmap(800, 1143)).unwrap();
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn test_tail_at_threshold_earns_a_page() {
        // 297 + 20 units is 1207.6 px; round up so the tail is >= 20 units.
        let pages = paginate(&bitmap(800, 1208)).unwrap();
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn test_slices_tile_without_overlap() {
        let source = bitmap(800, 3000);
        let pages = paginate(&source).unwrap();
        let mut covered = 0u32;
        for page in &pages {
            assert_eq!(page.image.width(), source.width());
            covered += page.image.height();
        }
        assert!(covered <= source.height());
        // Anything uncovered is a below-threshold sliver.
        let sliver_units = (source.height() - covered) as f32 * (PAGE_WIDTH_UNITS / 800.0);
        assert!(sliver_units < MIN_TAIL_UNITS);
    }

    #[test]
    fn test_full_page_slice_height_in_points() {
        let pages = paginate(&bitmap(800, 2000)).unwrap();
        let full = pages[0].draw_height_pt();
        assert!((full - A4_HEIGHT_PT).abs() < 2.0);
    }

    #[test]
    fn test_empty_bitmap_is_rejected() {
        let err = paginate(&Bitmap::from_rgb(0, 0, Vec::new())).unwrap_err();
        assert!(matches!(err, ExportError::Pagination(_)));
    }
}
