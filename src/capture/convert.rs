//! Pixel format conversion
//!
//! X11 hands back ZPixmap data as 32-bit packed words, `0x00RRGGBB` stored
//! little-endian. The output is canonical RGBA with opaque alpha, regardless
//! of the platform-native storage order.

use super::{CaptureError, Result};

/// Bytes per packed source word and per output pixel
const BYTES_PER_PIXEL: usize = 4;

/// Convert packed pixels to RGBA.
///
/// Consumes `num_pixels` words from `src` and produces exactly
/// `num_pixels * 4` output bytes: R from bits 16-23, G from bits 8-15,
/// B from bits 0-7, alpha fixed at 255. The source alpha/padding byte is
/// ignored since the capture format carries no usable alpha channel.
pub fn packed_to_rgba(src: &[u8], num_pixels: usize) -> Result<Vec<u8>> {
    let needed = num_pixels * BYTES_PER_PIXEL;
    if src.len() < needed {
        return Err(CaptureError::CaptureFailed(format!(
            "short image data: got {} bytes, need {}",
            src.len(),
            needed
        )));
    }

    let mut rgba = Vec::new();
    rgba.try_reserve_exact(needed)
        .map_err(|_| CaptureError::OutOfMemory)?;

    for chunk in src.chunks_exact(BYTES_PER_PIXEL).take(num_pixels) {
        let p = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        rgba.push((p >> 16) as u8);
        rgba.push((p >> 8) as u8);
        rgba.push(p as u8);
        rgba.push(0xFF);
    }

    Ok(rgba)
}
