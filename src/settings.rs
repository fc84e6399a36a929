//! Animation settings
//!
//! Persisted in LocalStorage on the web; natively the defaults are used.

use serde::Deserialize;

use crate::consts::*;

/// Runtime tunables
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Radius of every new balloon (pixels)
    pub balloon_radius: f32,
    /// Live balloon cap; the oldest is evicted past this
    pub max_balloons: usize,
    /// Particles per burst
    pub burst_particles: usize,
    /// Launch point distance above the bottom edge (pixels)
    pub launch_offset: f32,
    /// Font family for balloon letters
    pub font_family: String,
    /// Fixed RNG seed for reproducible runs (None = seed from clock)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            balloon_radius: BALLOON_RADIUS,
            max_balloons: MAX_BALLOONS,
            burst_particles: BURST_PARTICLES,
            launch_offset: LAUNCH_OFFSET,
            font_family: LABEL_FONT_FAMILY.to_string(),
            seed: None,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "balloon_pop_settings";

    /// Parse stored settings; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let s = Settings::default();
        assert_eq!(s.balloon_radius, 30.0);
        assert_eq!(s.max_balloons, 5);
        assert_eq!(s.burst_particles, 30);
        assert_eq!(s.launch_offset, 100.0);
        assert_eq!(s.font_family, "Impact");
        assert_eq!(s.seed, None);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{"max_balloons": 3, "seed": 99}"#).unwrap();
        assert_eq!(s.max_balloons, 3);
        assert_eq!(s.seed, Some(99));
        assert_eq!(s.balloon_radius, BALLOON_RADIUS);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{not json").is_err());
        assert!(Settings::from_json(r#"{"max_balloons": -1}"#).is_err());
    }

    #[test]
    fn test_native_load_is_default() {
        assert_eq!(Settings::load(), Settings::default());
    }
}
