//! Per-frame simulation step
//!
//! Advances a running game by one variable-length frame. Within a step the
//! order is fixed: difficulty, spawn, steering, obstacle motion and
//! collisions, then distance and score.

use super::autopilot;
use super::collision::intersects;
use super::state::{GameEvent, GameState, GameStatus};
use super::steering::{SteerDirection, approach_target, steer};
use crate::consts::*;

/// Input snapshot for a single step
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Steer-left key held (debounced by the controller)
    pub steer_left: bool,
    /// Steer-right key held (debounced by the controller)
    pub steer_right: bool,
    /// Brake key held
    pub brake: bool,
    /// One-shot left lane change (swipe), applied without debounce
    pub steer_left_triggered: bool,
    /// One-shot right lane change (swipe), applied without debounce
    pub steer_right_triggered: bool,
    /// Idle/demo mode - autopilot drives the car
    pub idle_mode: bool,
}

/// Frame delta actually integrated: never negative, never above MAX_FRAME_DT
#[inline]
pub fn effective_dt(dt: f32) -> f32 {
    if dt.is_nan() {
        return 0.0;
    }
    dt.clamp(0.0, MAX_FRAME_DT)
}

/// Advance the game state by one frame of `dt` seconds.
///
/// Does nothing unless the game is Running.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.status != GameStatus::Running {
        return;
    }
    let dt = effective_dt(dt);

    let mut input = input.clone();
    if input.idle_mode {
        autopilot::drive(state, &mut input);
    }
    let input = &input;

    // Difficulty ramps with time; braking is last step's flag
    state.clock.elapsed += dt;
    state.difficulty.advance(dt);
    let speed = state.difficulty.current_speed(state.player.braking);
    state.last_speed = speed;

    spawn_step(state, dt);
    steering_step(state, input, dt);
    state.player.braking = input.brake;
    approach_target(&mut state.player, dt);

    if obstacle_step(state, speed, dt) {
        state.status = GameStatus::Crashed;
        let score = state.clock.whole_score();
        let distance = state.clock.distance;
        log::info!("Crashed at distance {:.0} with score {}", distance, score);
        state.push_event(GameEvent::Crashed { score, distance });
        return;
    }

    state.clock.distance += speed * dt;
    state.clock.score += speed * dt * SCORE_PER_DISTANCE;
}

fn spawn_step(state: &mut GameState, dt: f32) {
    let player_size = (state.player.width, state.player.height);
    let spawned = state.spawner.try_spawn(
        dt,
        state.difficulty.spawn_interval,
        &state.field,
        player_size,
        &mut state.rng,
    );

    if let Some(obstacle) = spawned {
        state.difficulty.tighten_spawn_interval();
        let lane = obstacle.lane;
        let id = state.add_obstacle(obstacle);
        log::debug!(
            "Spawned obstacle {} in lane {} (next in {:.3}s)",
            id,
            lane,
            state.difficulty.spawn_interval
        );
        state.push_event(GameEvent::ObstacleSpawned { lane });
    }
}

fn steering_step(state: &mut GameState, input: &TickInput, dt: f32) {
    state.steering.tick_cooldowns(dt);

    if input.steer_left && state.steering.try_trigger(SteerDirection::Left) {
        change_lane(state, SteerDirection::Left);
    }
    if input.steer_right && state.steering.try_trigger(SteerDirection::Right) {
        change_lane(state, SteerDirection::Right);
    }
    if input.steer_left_triggered {
        change_lane(state, SteerDirection::Left);
    }
    if input.steer_right_triggered {
        change_lane(state, SteerDirection::Right);
    }
}

fn change_lane(state: &mut GameState, direction: SteerDirection) {
    if steer(&mut state.player, &state.field, direction) {
        let lane = state.player.lane;
        log::debug!("Lane change {:?} -> {}", direction, lane);
        state.push_event(GameEvent::LaneChanged { lane });
    }
}

/// Move every obstacle, test it against the car, and drop the ones that have
/// left the field. Returns true if the car was hit this step.
fn obstacle_step(state: &mut GameState, speed: f32, dt: f32) -> bool {
    let player_box = state.player.bounds();
    let mut crashed = false;

    for obstacle in &mut state.obstacles {
        obstacle.advance(speed, dt);
        if state.player.alive && intersects(&player_box, &obstacle.bounds()) {
            state.player.alive = false;
            crashed = true;
        }
    }

    let field = state.field;
    state.obstacles.retain(|o| !o.is_off_field(&field));
    crashed
}
