//! Street Racer entry point
//!
//! Natively this runs a headless autopilot session at a fixed frame rate and
//! reports the result. Browser pages load the library's `web` bindings instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use street_racer::persistence::{self, MemoryStore};
    use street_racer::sim::{GameEvent, PlayField};
    use street_racer::{Game, Settings, platform};

    platform::init_logging();
    log::info!("Street Racer (native) starting...");

    let store = persistence::default_store().unwrap_or_else(|e| {
        log::warn!("Storage unavailable, scores will not persist: {}", e);
        Box::new(MemoryStore::new())
    });

    let mut settings = Settings::load(store.as_ref());
    // No keyboard here, so the autopilot always drives
    settings.autopilot = true;
    let frame_dt = settings.frame_dt();
    let max_frames = (settings.max_seconds.max(0.0) / frame_dt).ceil() as u64;

    let mut game = Game::new(settings, store, PlayField::default());
    game.start();

    let started = std::time::Instant::now();
    let mut frames = 0u64;
    let mut lane_changes = 0u32;
    let mut spawned = 0u32;
    let mut crash = None;
    while frames < max_frames && crash.is_none() {
        for event in game.frame(frame_dt) {
            match event {
                GameEvent::LaneChanged { .. } => lane_changes += 1,
                GameEvent::ObstacleSpawned { .. } => spawned += 1,
                GameEvent::Crashed { score, distance } => crash = Some((score, distance)),
                _ => {}
            }
        }
        frames += 1;
        game.hud.record_frame(started.elapsed().as_secs_f64() * 1000.0);
    }

    match crash {
        Some((score, distance)) => log::info!(
            "Crashed after {:.1}s: score {}, distance {:.0}px",
            game.state.clock.elapsed,
            score,
            distance
        ),
        None => log::info!(
            "Survived {:.1}s: score {}, distance {:.0}px",
            game.state.clock.elapsed,
            game.state.clock.whole_score(),
            game.state.clock.distance
        ),
    }
    log::info!(
        "{} obstacles spawned, {} lane changes, high score {}",
        spawned,
        lane_changes,
        game.high_score()
    );
    if game.settings.show_fps {
        log::info!("Simulated {} frames at ~{} frames/s", frames, game.hud.fps);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is `street_racer::web::wasm_start`, this is just to satisfy the compiler
}
