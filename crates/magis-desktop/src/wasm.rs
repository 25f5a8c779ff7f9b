//! WASM exports for the window manager
//!
//! This module provides wasm-bindgen exports around `WindowManager` and
//! `InputRouter`, so the browser shell can drive the desktop and redraw
//! from JSON frames.

use wasm_bindgen::prelude::*;

use crate::input::InputRouter;
use crate::manifest::Manifest;
use crate::math::Vec2;
use crate::notify::{NotificationSink, NotifyError, NullSink};
use crate::render::Frame;
use crate::window::{Command, Notification, WindowManager, WindowRegion};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);
}

/// `log` backend writing to the browser console
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            console_log(&format!("[{}] {}: {}", record.level(), record.target(), record.args()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Route `log` output to the console; call once at startup
#[wasm_bindgen]
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Sink forwarding each cue to a JS callback as JSON
struct JsSink {
    callback: js_sys::Function,
}

impl JsSink {
    fn emit(&self, notification: Notification) -> Result<(), NotifyError> {
        let payload = serde_json::to_string(&serde_json::json!({
            "notification": notification,
            "cue": notification.cue(),
        }))
        .map_err(|e| NotifyError::Failed(e.to_string()))?;

        self.callback
            .call1(&JsValue::null(), &JsValue::from_str(&payload))
            .map(|_| ())
            .map_err(|e| NotifyError::Failed(format!("{:?}", e)))
    }
}

impl NotificationSink for JsSink {
    fn notify_open(&mut self) -> Result<(), NotifyError> {
        self.emit(Notification::Open)
    }

    fn notify_close(&mut self) -> Result<(), NotifyError> {
        self.emit(Notification::Close)
    }

    fn notify_minimize(&mut self) -> Result<(), NotifyError> {
        self.emit(Notification::Minimize)
    }
}

fn parse_region(region: &str) -> Option<WindowRegion> {
    match region {
        "titlebar" => Some(WindowRegion::TitleBar),
        "close" => Some(WindowRegion::CloseButton),
        "minimize" => Some(WindowRegion::MinimizeButton),
        _ => serde_json::from_value(serde_json::Value::from(region)).ok(),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}

/// Desktop controller for WASM - wraps WindowManager with a JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    manifest: Manifest,
    windows: WindowManager,
    input: InputRouter,
    last_frame: Frame,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a controller from a JSON manifest, or the stock MAGIS
    /// manifest when none is given
    #[wasm_bindgen(constructor)]
    pub fn new(manifest_json: Option<String>) -> Result<DesktopController, JsValue> {
        let manifest = match manifest_json {
            Some(json) => Manifest::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Manifest::magis(),
        };
        let windows = WindowManager::new(&manifest, NullSink);
        let last_frame = Frame::build(windows.state(), &manifest);

        Ok(Self {
            manifest,
            windows,
            input: InputRouter::new(),
            last_frame,
        })
    }

    /// Register the JS callback receiving `{notification, cue}` JSON
    #[wasm_bindgen]
    pub fn set_notifier(&mut self, callback: js_sys::Function) {
        self.windows.set_sink(JsSink { callback });
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Open, minimize or restore a window (dock icons, launcher buttons)
    #[wasm_bindgen]
    pub fn toggle(&mut self, id: &str) {
        self.windows.toggle(id);
    }

    /// Bring a window to the front
    #[wasm_bindgen]
    pub fn focus(&mut self, id: &str) {
        self.windows.focus(id);
    }

    /// Close a window
    #[wasm_bindgen]
    pub fn close(&mut self, id: &str) {
        self.windows.close(id);
    }

    /// Minimize a window
    #[wasm_bindgen]
    pub fn minimize(&mut self, id: &str) {
        self.windows.minimize(id);
    }

    /// Move a window origin
    #[wasm_bindgen]
    pub fn set_position(&mut self, id: &str, x: f32, y: f32) {
        self.windows.set_position(id, x, y);
    }

    /// Apply a JSON command such as `{"type":"toggle","id":"matrix"}`
    #[wasm_bindgen]
    pub fn dispatch(&mut self, command_json: &str) -> Result<(), JsValue> {
        let command: Command =
            serde_json::from_str(command_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.windows.dispatch(command);
        Ok(())
    }

    /// Highest z-index currently assigned
    #[wasm_bindgen]
    pub fn max_z(&self) -> u32 {
        self.windows.max_z()
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Pointer pressed on a window region; returns the outcome as JSON
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, id: &str, region: &str, x: f32, y: f32) -> String {
        let Some(region) = parse_region(region) else {
            log::warn!("unknown window region {:?}", region);
            return to_json(&crate::input::PointerOutcome::Ignored);
        };
        to_json(&self.input.pointer_down(&mut self.windows, id, region, Vec2::new(x, y)))
    }

    /// Pointer moved; returns the outcome as JSON
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        to_json(&self.input.pointer_move(&mut self.windows, Vec2::new(x, y)))
    }

    /// Pointer released; returns the outcome as JSON
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        to_json(&self.input.pointer_up())
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Full frame as JSON
    #[wasm_bindgen]
    pub fn frame_json(&self) -> String {
        to_json(&Frame::build(self.windows.state(), &self.manifest))
    }

    /// Changes since the previous call as a JSON array
    #[wasm_bindgen]
    pub fn changes_json(&mut self) -> String {
        let frame = Frame::build(self.windows.state(), &self.manifest);
        let changes = frame.diff(&self.last_frame);
        self.last_frame = frame;
        to_json(&changes)
    }

    /// Raw window records as JSON
    #[wasm_bindgen]
    pub fn state_json(&self) -> String {
        to_json(self.windows.state())
    }
}
