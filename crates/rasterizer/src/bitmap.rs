//! RGB bitmap
//!
//! The rasterizer's terminal artifact: a tightly packed RGB8 pixel buffer.
//! The paginator slices it into page-height row bands, so row extraction is
//! part of the type's contract.

/// A tightly packed RGB8 bitmap
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Bytes per pixel (RGB8)
    pub const BYTES_PER_PIXEL: usize = 3;

    /// Create a bitmap from raw RGB8 data.
    ///
    /// Panics in debug builds if the buffer length does not match the
    /// dimensions; callers construct this from surfaces they sized themselves.
    pub fn from_rgb(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * Self::BYTES_PER_PIXEL
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a solid white bitmap
    pub fn white(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0xFF; width as usize * height as usize * Self::BYTES_PER_PIXEL],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGB8 pixel data, rows top to bottom
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the bitmap and return its pixel data
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// The pixel at (x, y) as (r, g, b)
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let i = (y as usize * self.width as usize + x as usize) * Self::BYTES_PER_PIXEL;
        (self.pixels[i], self.pixels[i + 1], self.pixels[i + 2])
    }

    /// Copy the row band `[top, bottom)` into a new bitmap.
    ///
    /// `bottom` is clamped to the bitmap height. This is the explicit
    /// crop step the paginator uses for each page slice.
    pub fn slice_rows(&self, top: u32, bottom: u32) -> Bitmap {
        let bottom = bottom.min(self.height);
        let top = top.min(bottom);
        let row_bytes = self.width as usize * Self::BYTES_PER_PIXEL;
        let start = top as usize * row_bytes;
        let end = bottom as usize * row_bytes;

        Bitmap {
            width: self.width,
            height: bottom - top,
            pixels: self.pixels[start..end].to_vec(),
        }
    }
}
