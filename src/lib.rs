//! cursorshot - monitor capture for a host runtime
//!
//! One-shot X11 capture of the monitor under the mouse cursor, exposed as a
//! typed API and as a method channel handler.

pub mod capture;
pub mod channel;
pub mod config;

// Re-exports
pub use capture::{CaptureError, CaptureResult, X11Grabber};
pub use channel::{Messenger, MethodCall, MethodResponse};
pub use config::Config;
