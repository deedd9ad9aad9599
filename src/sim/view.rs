//! Read-only per-frame snapshot for renderers and UI

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::{GameState, GameStatus, ObstacleColor, PlayField};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleView {
    pub rect: Rect,
    pub color: ObstacleColor,
}

/// Everything a presentation layer needs to draw one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameView {
    pub status: GameStatus,
    pub field: PlayField,
    /// Forward speed of the last step (drives motion effects)
    pub speed: f32,
    /// Distance travelled (drives lane-marking scroll)
    pub distance: f32,
    pub score: u64,
    pub player: Rect,
    pub player_alive: bool,
    pub braking: bool,
    /// Obstacles in spawn order
    pub obstacles: Vec<ObstacleView>,
}

impl GameState {
    /// Snapshot the state for drawing
    pub fn view(&self) -> FrameView {
        FrameView {
            status: self.status,
            field: self.field,
            speed: self.last_speed,
            distance: self.clock.distance,
            score: self.clock.whole_score(),
            player: self.player.bounds(),
            player_alive: self.player.alive,
            braking: self.player.braking,
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    rect: o.bounds(),
                    color: o.color,
                })
                .collect(),
        }
    }
}
