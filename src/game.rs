//! Host session
//!
//! Owns the simulation plus everything around it: input mapping, HUD, high
//! score and storage. A frontend calls [`Game::frame`] once per display
//! refresh, then draws [`Game::vertices`] and the HUD.

use crate::highscores::HighScore;
use crate::hud::{Hud, Overlay};
use crate::persistence::KeyValueStore;
use crate::platform::{self, Command, InputMapper};
use crate::renderer::{Vertex, build_scene};
use crate::settings::Settings;
use crate::sim::{FrameView, GameEvent, GameState, GameStatus, PlayField, tick};

pub struct Game {
    pub state: GameState,
    pub hud: Hud,
    pub input: InputMapper,
    pub settings: Settings,
    high_score: HighScore,
    store: Box<dyn KeyValueStore>,
}

impl Game {
    /// Build a session; the high score is read from `store` once, here
    pub fn new(settings: Settings, store: Box<dyn KeyValueStore>, field: PlayField) -> Self {
        let seed = settings.seed.unwrap_or_else(platform::clock_seed);
        let high_score = HighScore::load(store.as_ref());
        log::info!("Game initialized with seed: {}", seed);

        Self {
            state: GameState::new(seed, field),
            hud: Hud::new(high_score.best()),
            input: InputMapper::new(settings.swipe_threshold),
            settings,
            high_score,
            store,
        }
    }

    pub fn start(&mut self) {
        self.state.start();
    }

    pub fn restart(&mut self) {
        self.state.restart();
    }

    pub fn pause(&mut self) {
        self.state.pause();
    }

    pub fn resume(&mut self) {
        self.state.resume();
    }

    /// Run a command produced by the input mapper
    pub fn run_command(&mut self, command: Command) {
        match command {
            Command::Restart => self.restart(),
            Command::TogglePause => self.state.toggle_pause(),
        }
    }

    /// Canvas resized
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(PlayField::new(width, height));
    }

    /// Window lost focus: drop held keys and pause a running game
    pub fn on_blur(&mut self) {
        self.input.release_all();
        if self.state.status == GameStatus::Running {
            self.state.pause();
            log::info!("Auto-paused (window blur)");
        }
    }

    /// Advance one display frame of `frame_dt` seconds.
    ///
    /// Returns the events the simulation produced, after the session has
    /// reacted to them.
    pub fn frame(&mut self, frame_dt: f32) -> Vec<GameEvent> {
        let mut input = self.input.snapshot();
        input.idle_mode = self.settings.autopilot;
        tick(&mut self.state, &input, frame_dt);

        let events = self.state.drain_events();
        for event in &events {
            match *event {
                GameEvent::Started => self.hud.on_start(),
                GameEvent::Crashed { score, .. } => self.on_crash(score),
                _ => {}
            }
        }

        self.hud.update(frame_dt, self.state.clock.whole_score());
        events
    }

    fn on_crash(&mut self, score: u64) {
        self.hud.on_crash(score);
        if self.high_score.record(score) {
            log::info!("New high score: {}", score);
            self.high_score.save(self.store.as_mut());
            self.hud.high_score = score;
        }
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best()
    }

    pub fn overlay(&self) -> Overlay {
        self.hud.overlay(self.state.status)
    }

    pub fn view(&self) -> FrameView {
        self.state.view()
    }

    /// Triangles for the current frame
    pub fn vertices(&self) -> Vec<Vertex> {
        build_scene(&self.view(), self.settings.scene_options())
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }
}
