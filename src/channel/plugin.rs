//! Screenshot plugin handler
//!
//! Dispatches `captureScreen` to a screen source and encodes the result for
//! the host runtime. Binary pixel data travels base64-encoded inside the
//! structured success value.

use base64::Engine;
use log::debug;
use serde_json::json;

use crate::capture::{self, CaptureResult, X11Grabber};
use crate::channel::{Messenger, MethodCall, MethodHandler, MethodResponse};

/// Anything that can produce a one-shot monitor capture.
pub trait ScreenSource {
    fn capture_screen(&self) -> capture::Result<CaptureResult>;
}

impl ScreenSource for X11Grabber {
    fn capture_screen(&self) -> capture::Result<CaptureResult> {
        X11Grabber::capture_screen(self)
    }
}

/// Channel handler for the monitor capture plugin.
///
/// Success responses carry exactly three entries: `width`, `height` and
/// `pixels`. Failures map onto the three wire codes `NO_DISPLAY`,
/// `CAPTURE_FAILED` and `OOM` with no structured detail beyond the message.
pub struct ScreenshotPlugin<S> {
    source: S,
}

impl<S: ScreenSource> ScreenshotPlugin<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    fn capture(&self) -> MethodResponse {
        match self.source.capture_screen() {
            Ok(result) => {
                debug!("Captured {}", result);
                let encoded =
                    base64::engine::general_purpose::STANDARD.encode(&result.pixels);
                MethodResponse::Success(json!({
                    "width": result.width,
                    "height": result.height,
                    "pixels": encoded,
                }))
            }
            Err(e) => MethodResponse::Error {
                code: e.code().to_string(),
                message: e.to_string(),
            },
        }
    }
}

impl<S: ScreenSource> MethodHandler for ScreenshotPlugin<S> {
    fn handle(&self, call: &MethodCall) -> MethodResponse {
        match call.method.as_str() {
            "captureScreen" => self.capture(),
            _ => MethodResponse::NotImplemented,
        }
    }
}

/// Bind the screenshot plugin to the messenger.
///
/// Called once at startup; the binding lives as long as the messenger does.
pub fn register_screenshot_plugin<S>(messenger: &mut Messenger, channel: &str, source: S)
where
    S: ScreenSource + 'static,
{
    messenger.register(channel, Box::new(ScreenshotPlugin::new(source)));
}

#[cfg(test)]
mod tests {
    use super::{register_screenshot_plugin, ScreenSource};
    use crate::capture::{CaptureError, CaptureResult};
    use crate::channel::{Messenger, MethodResponse, SCREENSHOT_CHANNEL};
    use base64::Engine;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Produces a fixed-size frame with a recognizable pixel pattern.
    struct FixedSource {
        width: u32,
        height: u32,
    }

    impl ScreenSource for FixedSource {
        fn capture_screen(&self) -> crate::capture::Result<CaptureResult> {
            let len = (self.width * self.height * 4) as usize;
            let mut pixels = vec![0u8; len];
            for px in pixels.chunks_exact_mut(4) {
                px[0] = 0x11;
                px[1] = 0x22;
                px[2] = 0x33;
                px[3] = 0xFF;
            }
            Ok(CaptureResult {
                width: self.width,
                height: self.height,
                pixels,
            })
        }
    }

    /// Fails every capture with the given error, counting attempts.
    struct FailingSource {
        calls: Rc<Cell<u32>>,
        error: fn() -> CaptureError,
    }

    impl FailingSource {
        fn new(error: fn() -> CaptureError) -> Self {
            Self {
                calls: Rc::new(Cell::new(0)),
                error,
            }
        }
    }

    impl ScreenSource for FailingSource {
        fn capture_screen(&self) -> crate::capture::Result<CaptureResult> {
            self.calls.set(self.calls.get() + 1);
            Err((self.error)())
        }
    }

    fn messenger_with(source: impl ScreenSource + 'static) -> Messenger {
        let mut messenger = Messenger::new();
        register_screenshot_plugin(&mut messenger, SCREENSHOT_CHANNEL, source);
        messenger
    }

    #[test]
    fn success_map_has_width_height_and_pixels() {
        let messenger = messenger_with(FixedSource {
            width: 8,
            height: 4,
        });

        let value = match messenger.invoke(SCREENSHOT_CHANNEL, "captureScreen") {
            MethodResponse::Success(value) => value,
            other => panic!("unexpected response: {:?}", other),
        };

        assert_eq!(value["width"], 8);
        assert_eq!(value["height"], 4);
        let pixels = base64::engine::general_purpose::STANDARD
            .decode(value["pixels"].as_str().expect("pixels string"))
            .expect("base64");
        assert_eq!(pixels.len(), 8 * 4 * 4);
        assert!(pixels.chunks_exact(4).all(|px| px[3] == 0xFF));
        assert_eq!(value.as_object().map(|map| map.len()), Some(3));
    }

    #[test]
    fn repeated_calls_report_identical_dimensions() {
        let messenger = messenger_with(FixedSource {
            width: 16,
            height: 9,
        });

        let first = messenger.invoke(SCREENSHOT_CHANNEL, "captureScreen");
        let second = messenger.invoke(SCREENSHOT_CHANNEL, "captureScreen");
        match (first, second) {
            (MethodResponse::Success(a), MethodResponse::Success(b)) => {
                assert_eq!(a["width"], b["width"]);
                assert_eq!(a["height"], b["height"]);
            }
            other => panic!("unexpected responses: {:?}", other),
        }
    }

    #[test]
    fn connection_failure_yields_only_no_display() {
        let source =
            FailingSource::new(|| CaptureError::NoDisplay("connection refused".to_string()));
        let calls = Rc::clone(&source.calls);
        let mut messenger = Messenger::new();
        register_screenshot_plugin(&mut messenger, SCREENSHOT_CHANNEL, source);

        match messenger.invoke(SCREENSHOT_CHANNEL, "captureScreen") {
            MethodResponse::Error { code, message } => {
                assert_eq!(code, "NO_DISPLAY");
                assert!(message.contains("connection refused"));
            }
            other => panic!("unexpected response: {:?}", other),
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn grab_failure_maps_to_capture_failed() {
        let messenger = messenger_with(FailingSource::new(|| {
            CaptureError::CaptureFailed("image request returned null".to_string())
        }));

        match messenger.invoke(SCREENSHOT_CHANNEL, "captureScreen") {
            MethodResponse::Error { code, .. } => assert_eq!(code, "CAPTURE_FAILED"),
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn allocation_failure_maps_to_oom() {
        let messenger = messenger_with(FailingSource::new(|| CaptureError::OutOfMemory));

        match messenger.invoke(SCREENSHOT_CHANNEL, "captureScreen") {
            MethodResponse::Error { code, .. } => assert_eq!(code, "OOM"),
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn unknown_method_is_not_implemented() {
        let messenger = messenger_with(FixedSource {
            width: 2,
            height: 2,
        });

        let response = messenger.invoke(SCREENSHOT_CHANNEL, "captureWindow");
        assert_eq!(response, MethodResponse::NotImplemented);
    }

    #[test]
    fn unknown_channel_is_not_implemented() {
        let messenger = messenger_with(FixedSource {
            width: 2,
            height: 2,
        });

        let response = messenger.invoke("com.cursorshot/unknown", "captureScreen");
        assert_eq!(response, MethodResponse::NotImplemented);
    }
}
