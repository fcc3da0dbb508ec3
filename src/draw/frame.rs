//! Immutable full-frame pixel snapshots.

/// A full-frame RGBA snapshot of the surface at one point in time.
///
/// Frames are captured when a stroke completes or the surface is cleared,
/// and are never mutated afterwards. Each frame is owned by exactly one
/// history stack at a time; undo/redo moves the frame between stacks rather
/// than copying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Box<[u8]>,
}

impl Frame {
    /// Wraps raw RGBA pixel data (row-major, 4 bytes per pixel).
    ///
    /// # Panics
    /// Panics if `pixels.len() != width * height * 4`; callers always hand
    /// over a buffer sized by the surface itself.
    pub(crate) fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        assert_eq!(pixels.len(), (width * height * 4) as usize);
        Self {
            width,
            height,
            pixels: pixels.into_boxed_slice(),
        }
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA pixel bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns true if every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.pixels.chunks_exact(4).all(|px| px[3] == 0)
    }
}
