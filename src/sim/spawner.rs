//! Time-driven obstacle generation

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Obstacle, ObstacleColor, PlayField};
use crate::consts::*;

/// Accumulates time between spawns
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    /// Seconds since the last spawn
    pub timer: f32,
}

impl Spawner {
    /// Advance the spawn timer by `dt` and emit an obstacle once `interval`
    /// has elapsed. The timer restarts from zero after each spawn.
    ///
    /// `player_size` is (width, height) of the player car; obstacle sizes are
    /// drawn relative to it.
    pub fn try_spawn<R: Rng>(
        &mut self,
        dt: f32,
        interval: f32,
        field: &PlayField,
        player_size: (f32, f32),
        rng: &mut R,
    ) -> Option<Obstacle> {
        self.timer += dt;
        if self.timer < interval {
            return None;
        }
        self.timer = 0.0;
        Some(random_obstacle(field, player_size, rng))
    }
}

/// Roll a new obstacle just above the top of `field`.
///
/// The returned obstacle has id 0; the game state assigns one when it is
/// added to the road.
pub fn random_obstacle<R: Rng>(
    field: &PlayField,
    (player_width, player_height): (f32, f32),
    rng: &mut R,
) -> Obstacle {
    let lane = rng.random_range(0..LANE_COUNT);
    let width = rng.random_range(player_width * 0.8..=player_width * 1.4);
    let height = rng.random_range(player_height * 0.6..=player_height * 1.6);
    let speed_multiplier = rng.random_range(0.8..=1.4);
    let hue = rng.random_range(0.0..=40.0);
    let lightness = rng.random_range(35.0..=55.0);

    Obstacle {
        id: 0,
        lane,
        x: field.lane_x(lane, width),
        y: -height - SPAWN_MARGIN,
        width,
        height,
        speed_multiplier,
        color: ObstacleColor::new(hue, lightness),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const PLAYER: (f32, f32) = (PLAYER_WIDTH, PLAYER_HEIGHT);

    #[test]
    fn test_fires_when_interval_reached() {
        let field = PlayField::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut spawner = Spawner::default();

        assert!(spawner.try_spawn(0.5, 1.0, &field, PLAYER, &mut rng).is_none());
        assert!(spawner.try_spawn(0.25, 1.0, &field, PLAYER, &mut rng).is_none());
        assert!(spawner.try_spawn(0.25, 1.0, &field, PLAYER, &mut rng).is_some());
        assert_eq!(spawner.timer, 0.0);
        assert!(spawner.try_spawn(0.5, 1.0, &field, PLAYER, &mut rng).is_none());
    }

    #[test]
    fn test_same_seed_same_obstacles() {
        let field = PlayField::default();
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        for _ in 0..20 {
            let oa = random_obstacle(&field, PLAYER, &mut a);
            let ob = random_obstacle(&field, PLAYER, &mut b);
            assert_eq!(oa.lane, ob.lane);
            assert_eq!(oa.x, ob.x);
            assert_eq!(oa.height, ob.height);
            assert_eq!(oa.color, ob.color);
        }
    }

    #[test]
    fn test_every_lane_eventually_used() {
        let field = PlayField::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut seen = [false; LANE_COUNT];
        for _ in 0..200 {
            seen[random_obstacle(&field, PLAYER, &mut rng).lane] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    proptest! {
        #[test]
        fn prop_obstacle_within_ranges(seed in any::<u64>()) {
            let field = PlayField::new(420.0, 760.0);
            let mut rng = Pcg32::seed_from_u64(seed);
            let ob = random_obstacle(&field, PLAYER, &mut rng);

            prop_assert!(ob.lane < LANE_COUNT);
            prop_assert!(ob.width >= PLAYER_WIDTH * 0.8 && ob.width <= PLAYER_WIDTH * 1.4);
            prop_assert!(ob.height >= PLAYER_HEIGHT * 0.6 && ob.height <= PLAYER_HEIGHT * 1.6);
            prop_assert!(ob.speed_multiplier >= 0.8 && ob.speed_multiplier <= 1.4);
            prop_assert!(ob.color.hue >= 0.0 && ob.color.hue <= 40.0);
            prop_assert!(ob.color.lightness >= 35.0 && ob.color.lightness <= 55.0);
            prop_assert_eq!(ob.color.saturation, ObstacleColor::SATURATION);
            // Starts fully above the field
            prop_assert!(ob.y + ob.height < 0.0);
            prop_assert!((ob.y + ob.height + SPAWN_MARGIN).abs() < 1e-3);
            prop_assert_eq!(ob.x, field.lane_x(ob.lane, ob.width));
        }
    }
}
