// DOM wiring constants for the web frontend.

// Render target
pub const RENDER_TARGET_SELECTOR: &str = "#app"; // element the canvas is appended to
pub const CANVAS_ID: &str = "rings-canvas";

// Keyboard
pub const PAUSE_KEY_CODE: &str = "Space"; // KeyboardEvent.code toggling the animation

// Events listened for on window / document
pub const RESIZE_EVENT: &str = "resize";
pub const VISIBILITY_EVENT: &str = "visibilitychange";
pub const PAGEHIDE_EVENT: &str = "pagehide";
pub const PAGESHOW_EVENT: &str = "pageshow";
pub const KEYDOWN_EVENT: &str = "keydown";

#[inline]
pub fn is_pause_key(code: &str) -> bool {
    code == PAUSE_KEY_CODE
}
