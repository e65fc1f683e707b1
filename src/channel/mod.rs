//! Method channel plumbing
//!
//! Models the boundary with the host runtime: a handler registered against a
//! named channel, invoked with a method name and no-argument payload,
//! producing either a structured success value or a tagged error.

mod plugin;

pub use plugin::{register_screenshot_plugin, ScreenSource, ScreenshotPlugin};

use serde_json::Value;
use std::collections::HashMap;

/// Default channel name for the screenshot plugin
pub const SCREENSHOT_CHANNEL: &str = "com.cursorshot/screenshot";

/// An incoming method invocation. Methods on this channel take no arguments.
#[derive(Debug, Clone)]
pub struct MethodCall {
    /// Method name
    pub method: String,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
        }
    }
}

/// Handler outcome, mirrored back to the host runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResponse {
    /// Structured success value
    Success(Value),
    /// Tagged error with a wire code and a short human-readable message
    Error { code: String, message: String },
    /// The handler does not know the requested method
    NotImplemented,
}

/// A channel method handler
pub trait MethodHandler {
    fn handle(&self, call: &MethodCall) -> MethodResponse;
}

/// In-process message router.
///
/// Owned by the host for the process lifetime. Handlers are bound once at
/// startup; there is no deregistration path.
pub struct Messenger {
    handlers: HashMap<String, Box<dyn MethodHandler>>,
}

impl Messenger {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Bind a handler to a channel name. A later binding for the same name
    /// replaces the earlier one.
    pub fn register(&mut self, channel: impl Into<String>, handler: Box<dyn MethodHandler>) {
        self.handlers.insert(channel.into(), handler);
    }

    /// Route a call to the channel's handler. An unknown channel responds
    /// not-implemented, like an unknown method.
    pub fn invoke(&self, channel: &str, method: &str) -> MethodResponse {
        match self.handlers.get(channel) {
            Some(handler) => handler.handle(&MethodCall::new(method)),
            None => MethodResponse::NotImplemented,
        }
    }
}

impl Default for Messenger {
    fn default() -> Self {
        Self::new()
    }
}
