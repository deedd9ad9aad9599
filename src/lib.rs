//! Street Racer - An endless top-down lane racer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (steering, spawning, collisions, game state)
//! - `renderer`: Backend-agnostic triangle generation from a frame view
//! - `hud`: Score readout and overlay messages
//! - `platform`: Browser/native platform abstraction (input, logging, time)
//! - `persistence`: Key/value storage backends
//! - `game`: Host session tying simulation, storage and HUD together
//! - `web`: `wasm-bindgen` wrapper for browser pages (wasm32 only)

pub mod game;
pub mod highscores;
pub mod hud;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use game::Game;
pub use highscores::HighScore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Largest frame delta the simulation will integrate in one step (seconds)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Road layout
    pub const LANE_COUNT: usize = 3;
    pub const ROAD_PADDING: f32 = 40.0;

    /// Player car
    pub const PLAYER_WIDTH: f32 = 48.0;
    pub const PLAYER_HEIGHT: f32 = 90.0;
    /// Gap between the car's rear bumper and the bottom of the field
    pub const PLAYER_BOTTOM_MARGIN: f32 = 30.0;
    /// Lane slide rate (per second) for the exponential approach
    pub const STEER_SPEED: f32 = 10.0;
    /// Hold-to-repeat window for discrete lane changes (seconds)
    pub const STEER_COOLDOWN: f32 = 0.14;

    /// Forward speed (units/s)
    pub const BASE_SPEED: f32 = 220.0;
    pub const MIN_SPEED: f32 = 200.0;
    pub const MAX_SPEED: f32 = 1200.0;
    /// Multiplier applied while braking
    pub const BRAKE_FACTOR: f32 = 0.6;
    /// Speed factor growth per elapsed second
    pub const SPEED_FACTOR_GROWTH: f32 = 0.02;

    /// Spawn pacing (seconds)
    pub const INITIAL_SPAWN_INTERVAL: f32 = 1.0;
    pub const MIN_SPAWN_INTERVAL: f32 = 0.45;
    pub const MAX_SPAWN_INTERVAL: f32 = 1.6;
    pub const SPAWN_TIGHTEN: f32 = 0.98;
    /// Extra distance above the field where obstacles appear
    pub const SPAWN_MARGIN: f32 = 20.0;
    /// Distance past the bottom of the field before an obstacle is dropped
    pub const CULL_MARGIN: f32 = 200.0;

    /// Score earned per unit of distance
    pub const SCORE_PER_DISTANCE: f32 = 0.02;

    /// Minimum horizontal drag (px) that counts as a swipe
    pub const SWIPE_THRESHOLD: f32 = 30.0;
    /// Delay before the crash overlay is shown (seconds)
    pub const CRASH_BANNER_DELAY: f32 = 0.25;
}

/// Clamp `v` into `[lo, hi]` without panicking on inverted bounds
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    lo.max(hi.min(v))
}
