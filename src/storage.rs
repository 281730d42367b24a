use crate::model::{CoolingMethod, AMBIENT_RANGE, LOAD_RANGE};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

const STORAGE_KEY: &str = "coolsim_settings";
const SCROLL_KEY: &str = "coolsim_scroll";

/// Dark/Light display theme.
///
/// Held as an explicit signal in the app shell and passed into the
/// rendering layer as a prop; never a process-wide global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn slug(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_slug(slug: &str) -> Theme {
        match slug {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// User inputs persisted across visits. Simulation results are never
/// stored — every run is recomputed from these inputs.
#[derive(Serialize, Deserialize)]
pub struct StoredSettings {
    pub cpu_load_pct: f64,
    pub gpu_load_pct: f64,
    pub ambient_temp_c: f64,
    pub method: String,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for StoredSettings {
    fn default() -> Self {
        // Matches the simulator's documented example scenario
        Self {
            cpu_load_pct: 50.0,
            gpu_load_pct: 40.0,
            ambient_temp_c: 25.0,
            method: CoolingMethod::Air.slug().to_string(),
            theme: default_theme(),
        }
    }
}

impl StoredSettings {
    pub fn method_enum(&self) -> CoolingMethod {
        CoolingMethod::from_slug(&self.method)
    }

    pub fn theme_enum(&self) -> Theme {
        Theme::from_slug(&self.theme)
    }

    /// Clamp numeric fields into their widget ranges.
    ///
    /// Stored JSON is user-editable, so clamping happens here, at the
    /// caller boundary — the model itself assumes pre-validated input.
    fn clamped(mut self) -> Self {
        self.cpu_load_pct = self.cpu_load_pct.clamp(LOAD_RANGE.0, LOAD_RANGE.1);
        self.gpu_load_pct = self.gpu_load_pct.clamp(LOAD_RANGE.0, LOAD_RANGE.1);
        self.ambient_temp_c = self.ambient_temp_c.clamp(AMBIENT_RANGE.0, AMBIENT_RANGE.1);
        self
    }
}

/// Attempts to get the browser's localStorage.
///
/// Returns `None` when running outside a browser, when storage is disabled
/// (private browsing), or when access is restricted (third-party iframe).
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Log a warning message to the browser console.
fn log_warning(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

/// Load user settings from localStorage.
///
/// Falls back to defaults when storage is unavailable, empty, or holds
/// JSON from an incompatible version — the app always starts.
pub fn load_settings() -> StoredSettings {
    let settings = match get_storage() {
        Some(storage) => match storage.get_item(STORAGE_KEY) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|e| {
                log_warning(&format!(
                    "CoolSim: Failed to parse stored settings (using defaults): {}",
                    e
                ));
                StoredSettings::default()
            }),
            Ok(None) => StoredSettings::default(),
            Err(_) => {
                log_warning("CoolSim: Could not read from localStorage (using defaults)");
                StoredSettings::default()
            }
        },
        // localStorage unavailable - likely private browsing mode.
        // Expected, so no warning.
        None => StoredSettings::default(),
    };
    settings.clamped()
}

/// Save user settings to localStorage.
///
/// Silently skips when storage is unavailable; warns on quota or
/// serialization failures. The app keeps working without persistence.
pub fn save_settings(settings: &StoredSettings) {
    let storage = match get_storage() {
        Some(s) => s,
        None => return,
    };

    let json = match serde_json::to_string(settings) {
        Ok(j) => j,
        Err(e) => {
            log_warning(&format!("CoolSim: Failed to serialize settings: {}", e));
            return;
        }
    };

    if storage.set_item(STORAGE_KEY, &json).is_err() {
        log_warning(
            "CoolSim: Could not save settings to localStorage. \
             You may be in private browsing mode or storage quota exceeded.",
        );
    }
}

/// Set up scroll restoration - call this once on app init
pub fn setup_scroll_restoration() {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.set_scroll_restoration(web_sys::ScrollRestoration::Manual);
        }
    }

    // Save scroll position before unload
    if let Some(window) = web_sys::window() {
        let closure = Closure::wrap(Box::new(move || {
            if let Some(win) = web_sys::window() {
                let scroll_y = win.scroll_y().unwrap_or(0.0);
                if let Some(storage) = win.session_storage().ok().flatten() {
                    let _ = storage.set_item(SCROLL_KEY, &scroll_y.to_string());
                }
            }
        }) as Box<dyn Fn()>);

        let _ = window
            .add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref());
        closure.forget(); // Keep the closure alive
    }
}

/// Restore scroll position - call this after app has rendered
pub fn restore_scroll_position() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.session_storage() {
            if let Ok(Some(scroll_str)) = storage.get_item(SCROLL_KEY) {
                if let Ok(scroll_y) = scroll_str.parse::<f64>() {
                    window.scroll_to_with_x_and_y(0.0, scroll_y);
                }
            }
        }
    }
}

/// Restore scroll position after a delay (in ms)
pub fn restore_scroll_after_delay(delay_ms: i32) {
    if let Some(window) = web_sys::window() {
        let closure = Closure::once(Box::new(|| {
            restore_scroll_position();
        }) as Box<dyn FnOnce()>);

        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        );
        closure.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_example_scenario() {
        let settings = StoredSettings::default();
        assert!((settings.cpu_load_pct - 50.0).abs() < 1e-12);
        assert!((settings.gpu_load_pct - 40.0).abs() < 1e-12);
        assert!((settings.ambient_temp_c - 25.0).abs() < 1e-12);
        assert_eq!(settings.method_enum(), CoolingMethod::Air);
        assert_eq!(settings.theme_enum(), Theme::Dark);
    }

    #[test]
    fn test_method_enum_conversion() {
        let settings = StoredSettings {
            method: "mineral-oil".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.method_enum(), CoolingMethod::MineralOil);

        // Unknown method defaults to air
        let settings = StoredSettings {
            method: "phase-change".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.method_enum(), CoolingMethod::Air);
    }

    #[test]
    fn test_clamped_pulls_fields_into_range() {
        let settings = StoredSettings {
            cpu_load_pct: 250.0,
            gpu_load_pct: -5.0,
            ambient_temp_c: 12.0,
            ..Default::default()
        }
        .clamped();
        assert!((settings.cpu_load_pct - 100.0).abs() < 1e-12);
        assert!((settings.gpu_load_pct - 0.0).abs() < 1e-12);
        assert!((settings.ambient_temp_c - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_theme_slug_roundtrip() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(Theme::from_slug(theme.slug()), theme);
        }
        // Unknown slug falls back to dark
        assert_eq!(Theme::from_slug("sepia"), Theme::Dark);
    }

    #[test]
    fn test_theme_toggle_alternates() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_settings_json_roundtrip() {
        let settings = StoredSettings {
            cpu_load_pct: 80.0,
            gpu_load_pct: 20.0,
            ambient_temp_c: 30.0,
            method: "liquid".to_string(),
            theme: "light".to_string(),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: StoredSettings = serde_json::from_str(&json).unwrap();
        assert!((back.cpu_load_pct - 80.0).abs() < 1e-12);
        assert_eq!(back.method_enum(), CoolingMethod::Liquid);
        assert_eq!(back.theme_enum(), Theme::Light);
    }

    #[test]
    fn test_missing_theme_field_defaults() {
        // Settings JSON from a version without the theme field still parses
        let json = r#"{"cpu_load_pct":40.0,"gpu_load_pct":30.0,"ambient_temp_c":22.0,"method":"air"}"#;
        let settings: StoredSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.theme_enum(), Theme::Dark);
    }
}
