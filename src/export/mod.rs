//! Image export: compositing, PNG encoding, and file delivery.
//!
//! The exporter produces a single still image of the current frame
//! composited over an opaque background (so transparent regions export as
//! the background color rather than transparency), encodes it as PNG, and
//! writes it to a downloadable file.

pub mod file;

pub use file::{ExportTarget, save_image};

use crate::draw::{Color, Surface};
use log::info;
use std::io::Cursor;
use std::path::PathBuf;
use thiserror::Error;

/// Default export filename.
pub const DEFAULT_FILENAME: &str = "picture.png";

/// Errors that can occur while exporting an image.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to save image: {0}")]
    Save(#[from] std::io::Error),
}

/// Encodes the surface as a PNG composited over an opaque background.
///
/// Returns the encoded bytes; nothing touches the filesystem here.
pub fn encode_png(surface: &Surface, background: Color) -> Result<Vec<u8>, ExportError> {
    let composited = surface.composite_over(background);
    let mut bytes = Vec::new();
    composited.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
    Ok(bytes)
}

/// Exports the surface to a PNG file.
///
/// Composites over `background`, encodes, and delivers the file per
/// `target` (directory creation, filename template). Returns the path the
/// image was written to.
pub fn export_to_file(
    surface: &Surface,
    background: Color,
    target: &ExportTarget,
) -> Result<PathBuf, ExportError> {
    let bytes = encode_png(surface, background)?;
    let path = save_image(&bytes, target)?;
    info!("Exported {}x{} canvas to {}", surface.width(), surface.height(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, WHITE};

    #[test]
    fn untouched_surface_exports_as_opaque_white() {
        let surface = Surface::new(6, 4);
        let bytes = encode_png(&surface, WHITE).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (6, 4));
        assert!(decoded.pixels().all(|px| px.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn painted_pixels_survive_the_composite() {
        let mut surface = Surface::new(4, 4);
        surface.draw_segment(1, 1, 1, 1, RED, 1);
        let bytes = encode_png(&surface, WHITE).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(1, 1).0, [255, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(3, 3).0, [255, 255, 255, 255]);
    }
}
