//! Capture region selection
//!
//! Pure geometry: which rectangle of the root window to grab, given the
//! cursor position and the monitor layout.

/// One physical monitor in global root-window coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorRect {
    /// Origin X in the virtual desktop
    pub x: i32,

    /// Origin Y in the virtual desktop
    pub y: i32,

    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,
}

impl MonitorRect {
    /// Half-open containment: `x in [mx, mx+mw)` and `y in [my, my+mh)`.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && x < self.x + self.width as i32
            && y >= self.y
            && y < self.y + self.height as i32
    }
}

/// Select the rectangle to capture.
///
/// The first monitor containing the cursor wins, in enumeration order. A
/// cursor inside no monitor (e.g. in a dead zone between offset monitors)
/// falls back to the first monitor; an empty monitor list falls back to the
/// whole root window.
pub fn select_capture_rect(
    monitors: &[MonitorRect],
    cursor: (i32, i32),
    root: MonitorRect,
) -> MonitorRect {
    if monitors.is_empty() {
        return root;
    }

    monitors
        .iter()
        .find(|monitor| monitor.contains(cursor.0, cursor.1))
        .copied()
        .unwrap_or(monitors[0])
}
