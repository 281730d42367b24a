//! Small browser integrations: privacy-friendly analytics and haptics.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = umami, js_name = track)]
    fn umami_track(event: &str);
}

/// Track a custom event in Umami analytics.
/// Fails silently if Umami is not loaded (e.g., blocked by adblocker)
pub fn track_event(event: &str) {
    let result = js_sys::eval("typeof umami !== 'undefined'");
    if let Ok(val) = result {
        if val.as_bool().unwrap_or(false) {
            umami_track(event);
        }
    }
}

/// Trigger a short haptic feedback vibration (if supported)
pub fn vibrate_tick() {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().vibrate_with_duration(10);
    }
}
