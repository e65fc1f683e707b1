//! X11 screen grab
//!
//! One-shot capture of the monitor under the mouse cursor using XCB. Every
//! call opens its own connection and releases it on return, success or
//! failure.

use log::debug;
use std::ffi::CString;
use x11rb::connection::Connection;
use x11rb::protocol::randr::ConnectionExt as RandrConnectionExt;
use x11rb::protocol::xproto::{ConnectionExt, ImageFormat, Window};
use x11rb::xcb_ffi::XCBConnection;

use super::geometry::{select_capture_rect, MonitorRect};
use super::{packed_to_rgba, CaptureError, CaptureResult, Result};

/// Screen grabber bound to one X11 display name.
pub struct X11Grabber {
    /// Display to connect to (e.g. ":0"); `None` uses `$DISPLAY`
    display: Option<String>,
}

impl X11Grabber {
    pub fn new(display: Option<String>) -> Self {
        Self { display }
    }

    /// Capture the monitor currently containing the mouse cursor.
    ///
    /// Falls back to the first monitor when the cursor is inside none of
    /// them, and to the whole root window when RandR reports no monitors.
    pub fn capture_screen(&self) -> Result<CaptureResult> {
        let (conn, screen_num) = self.connect()?;
        let screen = &conn.setup().roots[screen_num];
        let root = screen.root;
        let root_rect = MonitorRect {
            x: 0,
            y: 0,
            width: screen.width_in_pixels as u32,
            height: screen.height_in_pixels as u32,
        };

        let cursor = query_cursor(&conn, root);
        let monitors = enumerate_monitors(&conn, root);
        let rect = select_capture_rect(&monitors, cursor, root_rect);
        debug!(
            "Capturing {}x{} at ({}, {}) for cursor at ({}, {})",
            rect.width, rect.height, rect.x, rect.y, cursor.0, cursor.1
        );

        grab_rect(&conn, root, rect)
    }

    fn connect(&self) -> Result<(XCBConnection, usize)> {
        let display_cstr = match &self.display {
            Some(name) => Some(CString::new(name.as_str()).map_err(|e| {
                CaptureError::NoDisplay(format!("invalid display string: {}", e))
            })?),
            None => None,
        };

        XCBConnection::connect(display_cstr.as_deref())
            .map_err(|e| CaptureError::NoDisplay(e.to_string()))
    }
}

/// Query the global cursor position relative to the root window.
///
/// The underlying query has no modeled failure path; a position that cannot
/// be determined defaults to the origin.
fn query_cursor(conn: &XCBConnection, root: Window) -> (i32, i32) {
    let reply = conn
        .query_pointer(root)
        .ok()
        .and_then(|cookie| cookie.reply().ok());

    match reply {
        Some(pointer) => (pointer.root_x as i32, pointer.root_y as i32),
        None => {
            debug!("Pointer query failed, defaulting cursor to origin");
            (0, 0)
        }
    }
}

/// Enumerate active monitors via RandR.
///
/// A missing extension or failed reply yields an empty list, which the
/// caller treats as "capture the whole root window".
fn enumerate_monitors(conn: &XCBConnection, root: Window) -> Vec<MonitorRect> {
    let version_ok = conn
        .randr_query_version(1, 5)
        .ok()
        .and_then(|cookie| cookie.reply().ok())
        .is_some();
    if !version_ok {
        debug!("RandR not available, falling back to root geometry");
        return Vec::new();
    }

    let reply = match conn
        .randr_get_monitors(root, true)
        .ok()
        .and_then(|cookie| cookie.reply().ok())
    {
        Some(reply) => reply,
        None => {
            debug!("RandR monitor query failed, falling back to root geometry");
            return Vec::new();
        }
    };

    reply
        .monitors
        .iter()
        .map(|monitor| MonitorRect {
            x: monitor.x as i32,
            y: monitor.y as i32,
            width: monitor.width as u32,
            height: monitor.height as u32,
        })
        .collect()
}

/// Grab raw pixels for `rect` from the root window and convert to RGBA.
fn grab_rect(conn: &XCBConnection, root: Window, rect: MonitorRect) -> Result<CaptureResult> {
    let image = conn
        .get_image(
            ImageFormat::Z_PIXMAP,
            root,
            rect.x as i16,
            rect.y as i16,
            rect.width as u16,
            rect.height as u16,
            u32::MAX,
        )
        .map_err(|e| CaptureError::CaptureFailed(e.to_string()))?
        .reply()
        .map_err(|e| CaptureError::CaptureFailed(e.to_string()))?;

    let num_pixels = rect.width as usize * rect.height as usize;
    let pixels = packed_to_rgba(&image.data, num_pixels)?;

    Ok(CaptureResult {
        width: rect.width,
        height: rect.height,
        pixels,
    })
}
