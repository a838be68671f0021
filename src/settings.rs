//! View preferences
//!
//! Persisted separately from game state in LocalStorage. Game progress is
//! never saved; these only shape how the scene is drawn.

use serde::{Deserialize, Serialize};

/// View preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Draw the unit tick marks along the plank
    pub show_tick_marks: bool,
    /// Tilt the plank with the net torque
    pub tilt_animation: bool,
    /// Reduced motion (hold the plank level regardless of torque)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_tick_marks: true,
            tilt_animation: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "seesaw_settings";

    /// Tilt to actually draw, honoring the motion preferences
    pub fn effective_tilt(&self, tilt: f32) -> f32 {
        if self.tilt_animation && !self.reduced_motion {
            tilt
        } else {
            0.0
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_tilt_respects_motion_prefs() {
        let mut settings = Settings::default();
        assert_eq!(settings.effective_tilt(0.1), 0.1);

        settings.reduced_motion = true;
        assert_eq!(settings.effective_tilt(0.1), 0.0);

        settings.reduced_motion = false;
        settings.tilt_animation = false;
        assert_eq!(settings.effective_tilt(0.1), 0.0);
    }
}
