//! Game settings and preferences
//!
//! Persisted separately from the high score, as JSON.

use serde::{Deserialize, Serialize};

use crate::consts::SWIPE_THRESHOLD;
use crate::persistence::{self, KeyValueStore};
use crate::renderer::SceneOptions;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed (None = seed from the clock)
    pub seed: Option<u64>,
    /// Let the autopilot drive (demo/attract mode)
    pub autopilot: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Input ===
    /// Horizontal drag (px) needed for a swipe to change lanes
    pub swipe_threshold: f32,

    // === Accessibility ===
    /// Reduced motion (no scrolling lane markings)
    pub reduced_motion: bool,

    // === Headless runner ===
    /// Simulated frames per second
    pub frame_rate: u32,
    /// Stop a headless run after this many simulated seconds
    pub max_seconds: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            autopilot: false,
            show_fps: true,
            swipe_threshold: SWIPE_THRESHOLD,
            reduced_motion: false,
            frame_rate: 60,
            max_seconds: 120.0,
        }
    }
}

impl Settings {
    /// Storage key
    const STORAGE_KEY: &'static str = "streetRacerSettings";

    /// Renderer switches derived from these settings
    pub fn scene_options(&self) -> SceneOptions {
        SceneOptions {
            reduced_motion: self.reduced_motion,
        }
    }

    /// Frame length for the headless runner
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.frame_rate.max(1) as f32
    }

    /// Read settings, surfacing storage problems
    pub fn try_load(store: &dyn KeyValueStore) -> persistence::Result<Option<Self>> {
        match store.get(Self::STORAGE_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Load settings, falling back to defaults
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match Self::try_load(store) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings");
                settings
            }
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring stored settings: {}", e);
                Self::default()
            }
        }
    }

    /// Save settings. Failures are logged, never propagated.
    pub fn save(&self, store: &mut dyn KeyValueStore) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to encode settings: {}", e);
                return;
            }
        };
        match store.set(Self::STORAGE_KEY, &json) {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Failed to save settings: {}", e),
        }
    }
}
