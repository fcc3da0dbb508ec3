//! Raster paint surface backed by an RGBA pixel buffer.

use super::color::Color;
use super::frame::Frame;
use image::{Rgba, RgbaImage};
use log::warn;

/// The paintable raster area.
///
/// Pixels start fully transparent and strokes paint fully opaque. All
/// coordinates are surface-local; out-of-bounds coordinates are accepted and
/// clip naturally (pixels outside the buffer are simply not written).
#[derive(Debug, Clone)]
pub struct Surface {
    buffer: RgbaImage,
}

impl Surface {
    /// Creates a new fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: RgbaImage::new(width, height),
        }
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Draws a thick line segment from (x1, y1) to (x2, y2).
    ///
    /// The segment is rendered by stamping a filled disc of diameter
    /// `thickness` at every step along the line, which produces connected
    /// strokes with round joins between consecutive segments.
    pub fn draw_segment(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color, thickness: u32) {
        let radius = thickness.max(1) as f64 / 2.0;
        let steps = (x2 - x1).abs().max((y2 - y1).abs());

        if steps == 0 {
            self.stamp_disc(x1 as f64, y1 as f64, radius, color);
            return;
        }

        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let x = x1 as f64 + (x2 - x1) as f64 * t;
            let y = y1 as f64 + (y2 - y1) as f64 * t;
            self.stamp_disc(x, y, radius, color);
        }
    }

    /// Stamps an opaque filled disc centered at (cx, cy).
    fn stamp_disc(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        let px = Rgba([color.r, color.g, color.b, 255]);
        let min_x = (cx - radius).floor() as i64;
        let max_x = (cx + radius).ceil() as i64;
        let min_y = (cy - radius).floor() as i64;
        let max_y = (cy + radius).ceil() as i64;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
                    continue;
                }
                let dx = x as f64 - cx;
                let dy = y as f64 - cy;
                if dx * dx + dy * dy <= radius * radius {
                    self.buffer.put_pixel(x as u32, y as u32, px);
                }
            }
        }
    }

    /// Resets every pixel to fully transparent.
    pub fn clear(&mut self) {
        for px in self.buffer.pixels_mut() {
            *px = Rgba([0, 0, 0, 0]);
        }
    }

    /// Captures an immutable snapshot of the current frame.
    pub fn snapshot(&self) -> Frame {
        Frame::from_raw(self.width(), self.height(), self.buffer.as_raw().clone())
    }

    /// Restores a previously captured frame onto the surface.
    ///
    /// Frames only ever originate from the surface they are restored onto;
    /// a dimension mismatch indicates a caller bug and is dropped with a
    /// warning rather than corrupting the buffer.
    pub fn restore(&mut self, frame: &Frame) {
        if frame.width() != self.width() || frame.height() != self.height() {
            warn!(
                "Dropping restore of {}x{} frame onto {}x{} surface",
                frame.width(),
                frame.height(),
                self.width(),
                self.height()
            );
            return;
        }
        if let Some(buffer) =
            RgbaImage::from_raw(frame.width(), frame.height(), frame.pixels().to_vec())
        {
            self.buffer = buffer;
        }
    }

    /// Composites the surface over an opaque background color.
    ///
    /// Unpainted (transparent) pixels become the background color; painted
    /// pixels are kept as-is. Strokes are always fully opaque so no alpha
    /// blending is required.
    pub fn composite_over(&self, background: Color) -> RgbaImage {
        let mut out = RgbaImage::from_pixel(
            self.width(),
            self.height(),
            Rgba([background.r, background.g, background.b, 255]),
        );
        for (x, y, px) in self.buffer.enumerate_pixels() {
            if px[3] != 0 {
                out.put_pixel(x, y, *px);
            }
        }
        out
    }

    /// Returns the RGBA value of a single pixel, or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.width() && y < self.height() {
            Some(self.buffer.get_pixel(x, y).0)
        } else {
            None
        }
    }
}
