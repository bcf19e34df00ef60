//! Backend trait definitions.
//!
//! Every platform implements these traits. The page dispatches all drawing
//! and input through trait boundaries -- it never calls platform-specific
//! APIs.

use crate::error::Result;
use crate::input::InputEvent;

/// Width of one bitmap glyph cell (glyph plus spacing) at scale 1.
pub const BITMAP_GLYPH_WIDTH: u32 = 6;

/// Height of one bitmap glyph cell at scale 1.
pub const BITMAP_GLYPH_HEIGHT: u32 = 8;

/// A color in RGBA format (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Return the same color with a different alpha value.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
}

/// Glyph scale factor for a font size: one bitmap cell per 8 px of size.
pub fn glyph_scale(font_size: u16) -> u32 {
    (font_size / 8).max(1) as u32
}

/// Text metrics, shared by renderers and the layout engine.
pub trait TextMeasure {
    /// Width in pixels that `text` occupies at `font_size`.
    fn measure_text(&self, text: &str, font_size: u16) -> u32;

    /// Distance between the tops of two consecutive lines.
    fn line_height(&self, font_size: u16) -> u32 {
        font_size as u32 + font_size as u32 / 2
    }
}

/// Text metrics of the shared bitmap font, for headless layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapMeasure;

impl TextMeasure for BitmapMeasure {
    fn measure_text(&self, text: &str, font_size: u16) -> u32 {
        text.chars().count() as u32 * BITMAP_GLYPH_WIDTH * glyph_scale(font_size)
    }
}

/// Rendering backend.
///
/// Core methods are required; `stroke_rect` and `draw_line` have default
/// implementations built on `fill_rect` that backends may override.
pub trait RenderBackend: TextMeasure {
    /// Prepare the backend for a surface of the given size.
    fn init(&mut self, width: u32, height: u32) -> Result<()>;

    /// Clear the whole surface.
    fn clear(&mut self, color: Color) -> Result<()>;

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()>;

    /// Draw a single line of text with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: u16, color: Color)
    -> Result<()>;

    /// Restrict drawing to a rectangle.
    fn set_clip_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()>;

    /// Remove the clip rectangle.
    fn reset_clip_rect(&mut self) -> Result<()>;

    /// Present the finished frame.
    fn swap_buffers(&mut self) -> Result<()>;

    /// Read back RGBA pixels from the current frame.
    fn read_pixels(&self, x: i32, y: i32, w: u32, h: u32) -> Result<Vec<u8>>;

    /// Release backend resources.
    fn shutdown(&mut self) -> Result<()>;

    /// Outline a rectangle with a stroke of the given width.
    fn stroke_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        stroke: u16,
        color: Color,
    ) -> Result<()> {
        let s = (stroke as u32).min(w / 2).min(h / 2).max(1);
        self.fill_rect(x, y, w, s, color)?;
        self.fill_rect(x, y + h as i32 - s as i32, w, s, color)?;
        self.fill_rect(x, y, s, h, color)?;
        self.fill_rect(x + w as i32 - s as i32, y, s, h, color)
    }

    /// Draw a line of the given width (Bresenham, square pen).
    fn draw_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        width: u16,
        color: Color,
    ) -> Result<()> {
        let pen = width.max(1) as u32;
        let half = pen as i32 / 2;
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x1, y1);
        loop {
            self.fill_rect(x - half, y - half, pen, pen, color)?;
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
        Ok(())
    }
}

/// Input backend.
pub trait InputBackend {
    /// Poll for pending input events.
    fn poll_events(&mut self) -> Vec<InputEvent>;
}
