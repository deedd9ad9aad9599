//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame delta clamped before use
//! - Seeded RNG only
//! - Debounce timers counted in simulation time
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod spawner;
pub mod state;
pub mod steering;
pub mod tick;
pub mod view;

pub use collision::{Rect, intersects};
pub use difficulty::Difficulty;
pub use spawner::Spawner;
pub use state::{
    GameEvent, GameState, GameStatus, Obstacle, ObstacleColor, PlayField, PlayerCar,
    SimulationClock,
};
pub use steering::{SteerDirection, SteeringController, swipe_direction};
pub use tick::{TickInput, effective_dt, tick};
pub use view::{FrameView, ObstacleView};
