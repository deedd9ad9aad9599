//! Game state and core simulation types
//!
//! Everything a run mutates lives in [`GameState`]. Hosts drive it through the
//! lifecycle methods here and [`super::tick`], and read it back through
//! [`super::FrameView`].

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::difficulty::Difficulty;
use super::spawner::Spawner;
use super::steering::SteeringController;
use crate::consts::*;

/// Current lifecycle status of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting on the title overlay
    NotStarted,
    /// Active gameplay
    Running,
    /// Simulation halted until resumed
    Paused,
    /// Player hit an obstacle; terminal until restart
    Crashed,
}

/// Notable things that happened during a step or lifecycle change.
///
/// Queued on the state and drained by the host once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    ObstacleSpawned { lane: usize },
    LaneChanged { lane: usize },
    Crashed { score: u64, distance: f32 },
}

/// Visible play area and the lane layout derived from it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
}

impl Default for PlayField {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 700.0,
        }
    }
}

impl PlayField {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width of a single lane (road width split evenly)
    pub fn lane_width(&self) -> f32 {
        (self.width - ROAD_PADDING * 2.0) / LANE_COUNT as f32
    }

    /// Left edge of the road
    pub fn road_left(&self) -> f32 {
        ROAD_PADDING
    }

    /// Right edge of the road
    pub fn road_right(&self) -> f32 {
        self.width - ROAD_PADDING
    }

    /// X of the lane boundary line between `lane - 1` and `lane`
    pub fn lane_divider_x(&self, lane: usize) -> f32 {
        self.road_left() + lane as f32 * self.lane_width()
    }

    /// Left x that centers a box of `width` in `lane`
    pub fn lane_x(&self, lane: usize, width: f32) -> f32 {
        let lane_width = self.lane_width();
        self.road_left() + lane as f32 * lane_width + lane_width / 2.0 - width / 2.0
    }
}

/// HSL color descriptor carried by obstacles for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleColor {
    /// Hue in degrees (red through orange)
    pub hue: f32,
    /// Saturation percentage
    pub saturation: f32,
    /// Lightness percentage
    pub lightness: f32,
}

impl ObstacleColor {
    pub const SATURATION: f32 = 80.0;

    pub fn new(hue: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation: Self::SATURATION,
            lightness,
        }
    }

    /// RGBA in 0-1 range
    pub fn to_rgba(&self, alpha: f32) -> [f32; 4] {
        let s = self.saturation / 100.0;
        let l = self.lightness / 100.0;
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h = (self.hue.rem_euclid(360.0)) / 60.0;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        [r + m, g + m, b + m, alpha]
    }
}

/// The player's car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCar {
    /// Current lane index (always < LANE_COUNT)
    pub lane: usize,
    /// Current left edge
    pub x: f32,
    /// Left edge of the lane being steered toward
    pub target_x: f32,
    /// Top edge (fixed near the bottom of the field)
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub braking: bool,
    pub alive: bool,
}

impl PlayerCar {
    /// Starting lane for every run
    pub const START_LANE: usize = 1;

    /// Car parked in the starting lane of `field`
    pub fn new(field: &PlayField) -> Self {
        let x = field.lane_x(Self::START_LANE, PLAYER_WIDTH);
        Self {
            lane: Self::START_LANE,
            x,
            target_x: x,
            y: field.height - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            braking: false,
            alive: true,
        }
    }

    /// Collision box
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// An oncoming obstacle car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Lane it was spawned in
    pub lane: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Per-obstacle scale on forward speed
    pub speed_multiplier: f32,
    pub color: ObstacleColor,
}

impl Obstacle {
    /// Collision box
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Move down the field for one step
    pub fn advance(&mut self, speed: f32, dt: f32) {
        self.y += speed * self.speed_multiplier * dt;
    }

    /// True once the top edge is well past the bottom of the field
    pub fn is_off_field(&self, field: &PlayField) -> bool {
        self.y > field.height + CULL_MARGIN
    }
}

/// Accumulated run progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationClock {
    /// Simulated seconds in Running
    pub elapsed: f32,
    /// Forward distance travelled
    pub distance: f32,
    /// Fractional score (display with floor)
    pub score: f32,
}

impl SimulationClock {
    /// Whole points, as shown and persisted
    pub fn whole_score(&self) -> u64 {
        self.score.max(0.0).floor() as u64
    }
}

/// Complete state of one game session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Spawn randomness (continues across restarts)
    pub(crate) rng: Pcg32,
    pub status: GameStatus,
    pub field: PlayField,
    pub player: PlayerCar,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub clock: SimulationClock,
    pub difficulty: Difficulty,
    pub spawner: Spawner,
    pub steering: SteeringController,
    /// Forward speed used by the most recent step
    pub last_speed: f32,
    /// Field from a resize mid-run, applied at the next (re)start
    pending_field: Option<PlayField>,
    events: VecDeque<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a session on `field`, waiting to start
    pub fn new(seed: u64, field: PlayField) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            status: GameStatus::NotStarted,
            field,
            player: PlayerCar::new(&field),
            obstacles: Vec::new(),
            clock: SimulationClock::default(),
            difficulty: Difficulty::default(),
            spawner: Spawner::default(),
            steering: SteeringController::default(),
            last_speed: BASE_SPEED,
            pending_field: None,
            events: VecDeque::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Put an obstacle on the road, assigning it a fresh ID
    pub fn add_obstacle(&mut self, mut obstacle: Obstacle) -> u32 {
        obstacle.id = self.next_entity_id();
        let id = obstacle.id;
        self.obstacles.push(obstacle);
        id
    }

    /// Begin a run. No-op while already running.
    pub fn start(&mut self) {
        if self.status == GameStatus::Running {
            return;
        }
        self.restart();
    }

    /// Reset every piece of run state and enter Running
    pub fn restart(&mut self) {
        self.reset_run();
        self.status = GameStatus::Running;
        log::info!("Run started (seed {})", self.seed);
        self.push_event(GameEvent::Started);
    }

    /// Running -> Paused; ignored in any other status
    pub fn pause(&mut self) {
        if self.status == GameStatus::Running {
            self.status = GameStatus::Paused;
            self.push_event(GameEvent::Paused);
        }
    }

    /// Paused -> Running; ignored in any other status
    pub fn resume(&mut self) {
        if self.status == GameStatus::Paused {
            self.status = GameStatus::Running;
            self.push_event(GameEvent::Resumed);
        }
    }

    /// Pause button behavior: flips between Running and Paused only
    pub fn toggle_pause(&mut self) {
        match self.status {
            GameStatus::Running => self.pause(),
            GameStatus::Paused => self.resume(),
            _ => {}
        }
    }

    /// Change the play field. Applies immediately before the first run,
    /// otherwise at the next (re)start so a run never mixes two layouts.
    pub fn resize(&mut self, field: PlayField) {
        if self.status == GameStatus::NotStarted {
            self.field = field;
            self.player = PlayerCar::new(&field);
            self.pending_field = None;
        } else {
            self.pending_field = Some(field);
        }
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }

    fn reset_run(&mut self) {
        if let Some(field) = self.pending_field.take() {
            self.field = field;
        }
        self.player = PlayerCar::new(&self.field);
        self.obstacles.clear();
        self.clock = SimulationClock::default();
        self.difficulty = Difficulty::default();
        self.spawner = Spawner::default();
        self.steering = SteeringController::default();
        self.last_speed = BASE_SPEED;
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_layout() {
        let field = PlayField::new(400.0, 700.0);
        assert!((field.lane_width() - 320.0 / 3.0).abs() < 1e-4);
        // Lane 1 centered: 40 + 106.67 + 53.33 - 24
        let x = field.lane_x(1, PLAYER_WIDTH);
        assert!((x - (40.0 + 160.0 - 24.0)).abs() < 1e-3);
        // A box's center sits on the lane center regardless of its width
        let narrow = field.lane_x(2, 20.0) + 10.0;
        let wide = field.lane_x(2, 80.0) + 40.0;
        assert!((narrow - wide).abs() < 1e-4);
    }

    #[test]
    fn test_new_player_position() {
        let field = PlayField::new(400.0, 700.0);
        let player = PlayerCar::new(&field);
        assert_eq!(player.lane, 1);
        assert_eq!(player.x, player.target_x);
        assert_eq!(player.y, 700.0 - 90.0 - 30.0);
        assert!(player.alive);
    }

    #[test]
    fn test_lifecycle_transitions() {
        let mut state = GameState::new(1, PlayField::default());
        assert_eq!(state.status, GameStatus::NotStarted);

        // Pause/resume outside their states are no-ops
        state.pause();
        assert_eq!(state.status, GameStatus::NotStarted);
        state.resume();
        assert_eq!(state.status, GameStatus::NotStarted);

        state.start();
        assert_eq!(state.status, GameStatus::Running);
        state.resume();
        assert_eq!(state.status, GameStatus::Running);

        state.toggle_pause();
        assert_eq!(state.status, GameStatus::Paused);
        state.pause();
        assert_eq!(state.status, GameStatus::Paused);
        state.toggle_pause();
        assert_eq!(state.status, GameStatus::Running);

        let events = state.drain_events();
        assert_eq!(
            events,
            vec![GameEvent::Started, GameEvent::Paused, GameEvent::Resumed]
        );
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_start_while_running_keeps_progress() {
        let mut state = GameState::new(1, PlayField::default());
        state.start();
        state.clock.distance = 50.0;
        state.start();
        assert_eq!(state.clock.distance, 50.0);
    }

    #[test]
    fn test_toggle_pause_ignores_crashed() {
        let mut state = GameState::new(1, PlayField::default());
        state.start();
        state.status = GameStatus::Crashed;
        state.toggle_pause();
        assert_eq!(state.status, GameStatus::Crashed);
    }

    #[test]
    fn test_resize_relayouts_idle_player() {
        let mut state = GameState::new(1, PlayField::default());
        state.resize(PlayField::new(600.0, 900.0));
        assert_eq!(state.player.y, 900.0 - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN);
        assert_eq!(state.player.x, state.field.lane_x(1, PLAYER_WIDTH));
    }

    #[test]
    fn test_resize_while_paused_waits_for_restart() {
        use crate::sim::steering::{SteerDirection, steer};

        let old = PlayField::new(400.0, 700.0);
        let mut state = GameState::new(1, old);
        state.start();
        state.pause();
        state.resize(PlayField::new(800.0, 700.0));
        state.resume();
        assert_eq!(state.field, old);

        steer(&mut state.player, &state.field, SteerDirection::Right);
        assert_eq!(state.player.lane, 2);
        assert_eq!(state.player.target_x, old.lane_x(2, PLAYER_WIDTH));

        state.restart();
        assert_eq!(state.field.width, 800.0);
        assert_eq!(state.player.x, state.field.lane_x(1, PLAYER_WIDTH));
    }

    #[test]
    fn test_resize_keeps_wreck_on_crash_screen() {
        let mut state = GameState::new(1, PlayField::default());
        state.start();
        state.status = GameStatus::Crashed;
        state.player.alive = false;
        let wreck_x = state.player.x;

        state.resize(PlayField::new(600.0, 900.0));
        assert_eq!(state.status, GameStatus::Crashed);
        assert!(!state.player.alive);
        assert_eq!(state.player.x, wreck_x);
        assert!(!state.view().player_alive);

        state.restart();
        assert!(state.player.alive);
        assert_eq!(state.field, PlayField::new(600.0, 900.0));
        assert_eq!(state.player.y, 900.0 - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN);
    }

    #[test]
    fn test_obstacle_color_conversion() {
        // Pure red at 50% lightness, full saturation
        let red = ObstacleColor {
            hue: 0.0,
            saturation: 100.0,
            lightness: 50.0,
        };
        let rgba = red.to_rgba(1.0);
        assert!((rgba[0] - 1.0).abs() < 1e-5);
        assert!(rgba[1].abs() < 1e-5);
        assert!(rgba[2].abs() < 1e-5);

        let c = ObstacleColor::new(20.0, 40.0);
        let rgba = c.to_rgba(0.5);
        assert!(rgba[0] > rgba[1] && rgba[1] > rgba[2]);
        assert_eq!(rgba[3], 0.5);
    }

    #[test]
    fn test_obstacle_culling_threshold() {
        let field = PlayField::new(400.0, 700.0);
        let mut ob = Obstacle {
            id: 1,
            lane: 0,
            x: 0.0,
            y: 900.0,
            width: 40.0,
            height: 60.0,
            speed_multiplier: 1.0,
            color: ObstacleColor::new(10.0, 40.0),
        };
        assert!(!ob.is_off_field(&field));
        ob.y = 900.5;
        assert!(ob.is_off_field(&field));
    }

    #[test]
    fn test_whole_score_floors() {
        let clock = SimulationClock {
            score: 12.99,
            ..Default::default()
        };
        assert_eq!(clock.whole_score(), 12);
    }
}
