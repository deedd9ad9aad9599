//! HUD and overlay state
//!
//! Holds everything the DOM (or any UI) shows around the play field: score,
//! high score, FPS, and the overlay panel. The crash panel appears after a
//! short delay so the final frame of the collision stays visible first. That
//! delay runs on host frame time, since the simulation is frozen by then.

use crate::consts::CRASH_BANNER_DELAY;
use crate::sim::GameStatus;

/// Which overlay panel is up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Hidden,
    /// Before the first run
    Title,
    Paused,
    Crashed { score: u64 },
}

impl Overlay {
    /// Headline text for the panel
    pub fn message(&self) -> Option<String> {
        match self {
            Overlay::Hidden => None,
            Overlay::Title => Some("Ready for another run?".to_string()),
            Overlay::Paused => Some("Paused".to_string()),
            Overlay::Crashed { score } => Some(format!("You crashed! Score: {}", score)),
        }
    }

    /// Start button visibility
    pub fn shows_start(&self) -> bool {
        matches!(self, Overlay::Title)
    }

    /// Resume button visibility
    pub fn shows_resume(&self) -> bool {
        matches!(self, Overlay::Paused)
    }
}

/// Number of frame timestamps kept for FPS averaging
const FPS_WINDOW: usize = 60;

#[derive(Debug, Clone)]
pub struct Hud {
    pub score: u64,
    pub high_score: u64,
    /// Seconds left before the crash panel shows
    crash_delay: Option<f32>,
    crash_score: u64,
    crash_visible: bool,
    // FPS tracking
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    pub fps: u32,
}

impl Hud {
    pub fn new(high_score: u64) -> Self {
        Self {
            score: 0,
            high_score,
            crash_delay: None,
            crash_score: 0,
            crash_visible: false,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Arm the delayed crash panel
    pub fn on_crash(&mut self, score: u64) {
        self.crash_score = score;
        self.crash_delay = Some(CRASH_BANNER_DELAY);
        self.crash_visible = false;
    }

    /// Clear any crash panel (new run)
    pub fn on_start(&mut self) {
        self.score = 0;
        self.crash_delay = None;
        self.crash_visible = false;
    }

    /// Advance HUD timers by a host frame of `frame_dt` seconds
    pub fn update(&mut self, frame_dt: f32, score: u64) {
        self.score = score;
        if let Some(remaining) = self.crash_delay {
            let remaining = remaining - frame_dt.max(0.0);
            if remaining <= 0.0 {
                self.crash_delay = None;
                self.crash_visible = true;
            } else {
                self.crash_delay = Some(remaining);
            }
        }
    }

    /// Record a frame timestamp (ms) and refresh the FPS estimate
    pub fn record_frame(&mut self, time_ms: f64) {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Oldest sample is the next slot to be overwritten
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let elapsed = time_ms - oldest;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW as f64 - 1.0) * 1000.0 / elapsed).round() as u32;
            }
        }
    }

    /// Panel to show for the current game status
    pub fn overlay(&self, status: GameStatus) -> Overlay {
        match status {
            GameStatus::NotStarted => Overlay::Title,
            GameStatus::Running => Overlay::Hidden,
            GameStatus::Paused => Overlay::Paused,
            GameStatus::Crashed if self.crash_visible => Overlay::Crashed {
                score: self.crash_score,
            },
            GameStatus::Crashed => Overlay::Hidden,
        }
    }
}
