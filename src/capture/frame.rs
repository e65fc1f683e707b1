//! Captured frame data structure
//!
//! Represents one captured monitor as a width/height/RGBA buffer.

use std::fmt;

/// A captured monitor image.
///
/// Pixels are row-major from the top-left corner, 4 bytes per pixel in
/// R, G, B, A order; alpha is always 255. The buffer holds exactly
/// `width * height * 4` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureResult {
    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// RGBA pixel data
    pub pixels: Vec<u8>,
}

impl fmt::Display for CaptureResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CaptureResult({}x{}, {} bytes)",
            self.width,
            self.height,
            self.pixels.len()
        )
    }
}
