//! Monitor capture
//!
//! Grabs the pixels of the monitor currently under the mouse cursor from an
//! X11 display and converts them to canonical RGBA.

mod convert;
mod frame;
mod geometry;
mod x11;

pub use convert::packed_to_rgba;
pub use frame::CaptureResult;
pub use geometry::{select_capture_rect, MonitorRect};
pub use x11::X11Grabber;

use std::fmt;

/// Capture errors
#[derive(Debug)]
pub enum CaptureError {
    /// The X11 display connection could not be established
    NoDisplay(String),
    /// The pixel grab failed after a connection was established
    CaptureFailed(String),
    /// Allocation for the converted pixel buffer failed
    OutOfMemory,
}

impl CaptureError {
    /// Wire code surfaced through the method channel
    pub fn code(&self) -> &'static str {
        match self {
            CaptureError::NoDisplay(_) => "NO_DISPLAY",
            CaptureError::CaptureFailed(_) => "CAPTURE_FAILED",
            CaptureError::OutOfMemory => "OOM",
        }
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::NoDisplay(msg) => {
                write!(f, "Cannot open X display: {}", msg)
            }
            CaptureError::CaptureFailed(msg) => {
                write!(f, "Screen capture failed: {}", msg)
            }
            CaptureError::OutOfMemory => {
                write!(f, "Allocation for converted pixel buffer failed")
            }
        }
    }
}

impl std::error::Error for CaptureError {}

pub type Result<T> = std::result::Result<T, CaptureError>;
