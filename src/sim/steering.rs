//! Lane steering: discrete lane selection plus smooth slide between lanes
//!
//! Held keys repeat through a per-direction cooldown counted in simulation
//! time, so replays with the same inputs always change lanes on the same step.

use serde::{Deserialize, Serialize};

use super::state::{PlayField, PlayerCar};
use crate::clamp;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SteerDirection {
    Left,
    Right,
}

impl SteerDirection {
    fn delta(self) -> isize {
        match self {
            SteerDirection::Left => -1,
            SteerDirection::Right => 1,
        }
    }
}

/// Move the car one lane in `direction` and retarget its slide.
///
/// Returns true if the lane actually changed (false at the road edge).
pub fn steer(player: &mut PlayerCar, field: &PlayField, direction: SteerDirection) -> bool {
    let max_lane = LANE_COUNT as isize - 1;
    let lane = (player.lane as isize + direction.delta()).clamp(0, max_lane) as usize;
    let changed = lane != player.lane;
    player.lane = lane;
    player.target_x = field.lane_x(lane, player.width);
    changed
}

/// Slide the car toward its target lane (exponential approach).
///
/// The blend factor is clamped to 1 so a long frame lands exactly on target
/// instead of overshooting.
pub fn approach_target(player: &mut PlayerCar, dt: f32) {
    let t = clamp(dt * STEER_SPEED, 0.0, 1.0);
    if t >= 1.0 {
        player.x = player.target_x;
    } else {
        player.x += (player.target_x - player.x) * t;
    }
}

/// Map a horizontal drag to a single lane change
pub fn swipe_direction(dx: f32, threshold: f32) -> Option<SteerDirection> {
    if dx < -threshold {
        Some(SteerDirection::Left)
    } else if dx > threshold {
        Some(SteerDirection::Right)
    } else {
        None
    }
}

/// Debounce state for held steering keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SteeringController {
    /// Seconds until a held left key may fire again
    pub left_cooldown: f32,
    /// Seconds until a held right key may fire again
    pub right_cooldown: f32,
}

impl SteeringController {
    /// Count both cooldowns down by `dt`
    pub fn tick_cooldowns(&mut self, dt: f32) {
        self.left_cooldown = (self.left_cooldown - dt).max(0.0);
        self.right_cooldown = (self.right_cooldown - dt).max(0.0);
    }

    /// Consume a held-key trigger for `direction`.
    ///
    /// Returns true and arms the cooldown if the direction is ready.
    pub fn try_trigger(&mut self, direction: SteerDirection) -> bool {
        let cooldown = match direction {
            SteerDirection::Left => &mut self.left_cooldown,
            SteerDirection::Right => &mut self.right_cooldown,
        };
        if *cooldown > 0.0 {
            return false;
        }
        *cooldown = STEER_COOLDOWN;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn car() -> (PlayerCar, PlayField) {
        let field = PlayField::new(400.0, 700.0);
        (PlayerCar::new(&field), field)
    }

    #[test]
    fn test_steer_changes_lane_and_target() {
        let (mut player, field) = car();
        let start_x = player.x;

        assert!(steer(&mut player, &field, SteerDirection::Left));
        assert_eq!(player.lane, 0);
        assert_eq!(player.target_x, field.lane_x(0, PLAYER_WIDTH));
        // Steering never moves the car directly
        assert_eq!(player.x, start_x);
    }

    #[test]
    fn test_steer_clamps_at_edges() {
        let (mut player, field) = car();
        steer(&mut player, &field, SteerDirection::Left);
        assert!(!steer(&mut player, &field, SteerDirection::Left));
        assert!(!steer(&mut player, &field, SteerDirection::Left));
        assert_eq!(player.lane, 0);

        steer(&mut player, &field, SteerDirection::Right);
        steer(&mut player, &field, SteerDirection::Right);
        assert!(!steer(&mut player, &field, SteerDirection::Right));
        assert_eq!(player.lane, LANE_COUNT - 1);
    }

    #[test]
    fn test_approach_is_partial_for_small_dt() {
        let (mut player, field) = car();
        steer(&mut player, &field, SteerDirection::Right);
        let gap = player.target_x - player.x;
        approach_target(&mut player, 0.05);
        // Half the gap closed at dt * 10 = 0.5
        assert!((player.target_x - player.x - gap * 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_approach_snaps_when_step_saturates() {
        let (mut player, field) = car();
        steer(&mut player, &field, SteerDirection::Left);
        approach_target(&mut player, 0.1);
        assert_eq!(player.x, player.target_x);
    }

    #[test]
    fn test_swipe_threshold() {
        assert_eq!(swipe_direction(-31.0, 30.0), Some(SteerDirection::Left));
        assert_eq!(swipe_direction(31.0, 30.0), Some(SteerDirection::Right));
        assert_eq!(swipe_direction(30.0, 30.0), None);
        assert_eq!(swipe_direction(-30.0, 30.0), None);
        assert_eq!(swipe_direction(300.0, 30.0), Some(SteerDirection::Right));
    }

    #[test]
    fn test_cooldown_blocks_until_expired() {
        let mut ctl = SteeringController::default();
        assert!(ctl.try_trigger(SteerDirection::Left));
        assert!(!ctl.try_trigger(SteerDirection::Left));
        // Directions are independent
        assert!(ctl.try_trigger(SteerDirection::Right));

        ctl.tick_cooldowns(0.1);
        assert!(!ctl.try_trigger(SteerDirection::Left));
        ctl.tick_cooldowns(0.05);
        assert!(ctl.try_trigger(SteerDirection::Left));
    }

    proptest! {
        #[test]
        fn prop_lane_stays_in_range(moves in prop::collection::vec(any::<bool>(), 0..50)) {
            let (mut player, field) = car();
            for right in moves {
                let dir = if right { SteerDirection::Right } else { SteerDirection::Left };
                steer(&mut player, &field, dir);
                prop_assert!(player.lane < LANE_COUNT);
            }
        }

        #[test]
        fn prop_approach_never_overshoots(dt in 0.0f32..1.0, right in any::<bool>()) {
            let (mut player, field) = car();
            let dir = if right { SteerDirection::Right } else { SteerDirection::Left };
            steer(&mut player, &field, dir);
            let before = (player.target_x - player.x).abs();
            approach_target(&mut player, dt);
            let after = (player.target_x - player.x).abs();
            prop_assert!(after <= before + 1e-4);
        }
    }
}
