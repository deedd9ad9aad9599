//! Browser bindings
//!
//! A thin `wasm-bindgen` wrapper around [`Game`]. The page owns the canvas,
//! the DOM overlay and the `requestAnimationFrame` loop; it forwards raw
//! events here and uploads [`WebGame::vertex_bytes`] each frame.

use wasm_bindgen::prelude::*;

use crate::persistence::{self, MemoryStore};
use crate::platform::{self, action_for_button};
use crate::sim::PlayField;
use crate::{Game, Settings, renderer};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    platform::init_logging();
    log::info!("Street Racer (web) starting...");
}

#[wasm_bindgen]
pub struct WebGame {
    game: Game,
    last_time: Option<f64>,
}

#[wasm_bindgen]
impl WebGame {
    /// Session for a canvas of `width` x `height` CSS pixels
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> WebGame {
        let store = persistence::default_store().unwrap_or_else(|e| {
            log::warn!("LocalStorage unavailable, scores will not persist: {}", e);
            Box::new(MemoryStore::new())
        });
        let settings = Settings::load(store.as_ref());
        WebGame {
            game: Game::new(settings, store, PlayField::new(width, height)),
            last_time: None,
        }
    }

    pub fn start(&mut self) {
        self.game.start();
    }

    pub fn restart(&mut self) {
        self.game.restart();
    }

    pub fn pause(&mut self) {
        self.game.pause();
    }

    pub fn resume(&mut self) {
        self.game.resume();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.game.resize(width, height);
    }

    /// Window blur or tab hidden
    pub fn blur(&mut self) {
        self.game.on_blur();
    }

    pub fn key_down(&mut self, key: &str) {
        if let Some(command) = self.game.input.key_down(key) {
            self.game.run_command(command);
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.game.input.key_up(key);
    }

    /// `name` is one of "left", "right", "brake"
    pub fn button_down(&mut self, name: &str) {
        if let Some(action) = action_for_button(name) {
            self.game.input.button_down(action);
        }
    }

    pub fn button_up(&mut self, name: &str) {
        if let Some(action) = action_for_button(name) {
            self.game.input.button_up(action);
        }
    }

    pub fn touch_start(&mut self, x: f32) {
        self.game.input.touch_start(x);
    }

    pub fn touch_end(&mut self, x: f32) {
        self.game.input.touch_end(x);
    }

    /// Advance to `time_ms` (the rAF timestamp)
    pub fn frame(&mut self, time_ms: f64) {
        let dt = match self.last_time {
            Some(last) => ((time_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_time = Some(time_ms);
        self.game.frame(dt);
        self.game.hud.record_frame(time_ms);
    }

    pub fn score(&self) -> u64 {
        self.game.hud.score
    }

    pub fn high_score(&self) -> u64 {
        self.game.hud.high_score
    }

    /// FPS readout, or 0 when the counter is turned off
    pub fn fps(&self) -> u32 {
        if self.game.settings.show_fps {
            self.game.hud.fps
        } else {
            0
        }
    }

    /// Overlay headline, `None` when the overlay is hidden
    pub fn overlay_message(&self) -> Option<String> {
        self.game.overlay().message()
    }

    pub fn shows_start(&self) -> bool {
        self.game.overlay().shows_start()
    }

    pub fn shows_resume(&self) -> bool {
        self.game.overlay().shows_resume()
    }

    /// Interleaved position/color triangles for this frame
    pub fn vertex_bytes(&self) -> Vec<u8> {
        renderer::vertex::as_bytes(&self.game.vertices()).to_vec()
    }

    pub fn vertex_stride() -> usize {
        renderer::Vertex::STRIDE
    }
}
