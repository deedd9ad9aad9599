//! Demo driver for idle mode and the headless runner
//!
//! Looks at what is coming down each lane and holds the steering key toward
//! the lane with the most room. Only ever moves one lane at a time.

use super::state::GameState;
use super::tick::TickInput;
use crate::consts::LANE_COUNT;

/// Headroom (units above the car) below which a lane counts as blocked
const SAFE_GAP: f32 = 260.0;

/// Gap between the car's nose and the nearest oncoming obstacle per lane.
///
/// Obstacles already past the car are ignored; an obstacle alongside the car
/// counts as zero gap.
pub fn lane_gaps(state: &GameState) -> [f32; LANE_COUNT] {
    let mut gaps = [f32::INFINITY; LANE_COUNT];
    let player_top = state.player.y;
    let player_bottom = state.player.y + state.player.height;

    for ob in &state.obstacles {
        if ob.y > player_bottom {
            continue;
        }
        let gap = (player_top - (ob.y + ob.height)).max(0.0);
        if let Some(slot) = gaps.get_mut(ob.lane) {
            *slot = slot.min(gap);
        }
    }
    gaps
}

/// Lane the autopilot wants to be in
pub fn choose_lane(state: &GameState) -> usize {
    let gaps = lane_gaps(state);
    let current = state.player.lane;
    if gaps[current] >= SAFE_GAP {
        return current;
    }

    let mut best = current;
    for lane in 0..LANE_COUNT {
        let better = gaps[lane] > gaps[best]
            || (gaps[lane] == gaps[best] && lane.abs_diff(current) < best.abs_diff(current));
        if better {
            best = lane;
        }
    }
    best
}

/// Overwrite the steering part of `input` with the autopilot's choice
pub fn drive(state: &GameState, input: &mut TickInput) {
    let target = choose_lane(state);
    let current = state.player.lane;

    input.steer_left = target < current;
    input.steer_right = target > current;
    input.steer_left_triggered = false;
    input.steer_right_triggered = false;
    input.brake = false;
}
