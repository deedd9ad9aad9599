//! Frame view -> triangle list
//!
//! Draw order, back to front: background, road and verges, lane markings,
//! obstacles, player. Coordinates are play-field units with y down; the
//! backend maps them to its own clip space.

use super::shapes::{inset, quad, vertical_gradient, vertical_line};
use super::vertex::{Vertex, colors};
use crate::consts::LANE_COUNT;
use crate::sim::{FrameView, Rect};

/// Dash length of a lane marking
pub const MARKING_LENGTH: f32 = 40.0;
/// Gap between dashes
pub const MARKING_GAP: f32 = 30.0;
pub const MARKING_WIDTH: f32 = 6.0;
/// Drop shadow offset for cars
const SHADOW_OFFSET: f32 = 6.0;

/// Presentation switches that do not affect gameplay
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneOptions {
    /// Freeze lane-marking scroll
    pub reduced_motion: bool,
}

/// Scroll offset of the dashed lane markings for a travelled distance
pub fn marking_offset(distance: f32) -> f32 {
    (distance / 10.0).rem_euclid(MARKING_LENGTH + MARKING_GAP)
}

/// Build every triangle for one frame
pub fn build_scene(view: &FrameView, options: SceneOptions) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(64 + view.obstacles.len() * 18);
    let field = &view.field;

    // Background, road, verges
    out.extend(quad(
        &Rect::new(0.0, 0.0, field.width, field.height),
        colors::BACKGROUND,
    ));
    out.extend(quad(
        &Rect::new(
            field.road_left(),
            0.0,
            field.road_right() - field.road_left(),
            field.height,
        ),
        colors::ROAD,
    ));
    out.extend(quad(
        &Rect::new(0.0, 0.0, field.road_left(), field.height),
        colors::GRASS,
    ));
    out.extend(quad(
        &Rect::new(
            field.road_right(),
            0.0,
            field.width - field.road_right(),
            field.height,
        ),
        colors::GRASS,
    ));

    // Dashed dividers between lanes
    let period = MARKING_LENGTH + MARKING_GAP;
    let offset = if options.reduced_motion {
        0.0
    } else {
        marking_offset(view.distance)
    };
    for lane in 1..LANE_COUNT {
        let x = field.lane_divider_x(lane);
        let mut y = -period;
        while y < field.height + MARKING_LENGTH {
            out.extend(vertical_line(
                x,
                y + offset,
                y + offset + MARKING_LENGTH,
                MARKING_WIDTH,
                colors::LANE_MARKING,
            ));
            y += period;
        }
    }

    for ob in &view.obstacles {
        out.extend(quad(
            &ob.rect.translated(glam::Vec2::splat(SHADOW_OFFSET)),
            colors::OBSTACLE_SHADOW,
        ));
        out.extend(quad(&ob.rect, ob.color.to_rgba(1.0)));
        out.extend(quad(
            &inset(&ob.rect, 0.15, 0.15, 0.7, 0.35),
            colors::WINDOW_HIGHLIGHT,
        ));
    }

    player_car(&mut out, view);
    out
}

fn player_car(out: &mut Vec<Vertex>, view: &FrameView) {
    let car = view.player;
    let (x, y) = (car.left(), car.top());
    let (w, h) = (car.size.x, car.size.y);

    out.extend(quad(
        &Rect::new(x + SHADOW_OFFSET, y + h - SHADOW_OFFSET, w, 10.0),
        colors::PLAYER_SHADOW,
    ));
    if view.player_alive {
        out.extend(vertical_gradient(
            &car,
            colors::PLAYER_TOP,
            colors::PLAYER_BOTTOM,
        ));
    } else {
        out.extend(quad(&car, colors::PLAYER_WRECKED));
    }
    out.extend(quad(&inset(&car, 0.15, 0.12, 0.7, 0.28), colors::WINDSHIELD));

    let light = if view.braking {
        colors::BRAKE_LIGHT
    } else {
        colors::HEADLIGHT
    };
    out.extend(quad(&Rect::new(x + 6.0, y + h - 22.0, 8.0, 12.0), light));
    out.extend(quad(&Rect::new(x + w - 14.0, y + h - 22.0, 8.0, 12.0), light));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, PlayField};

    #[test]
    fn test_marking_offset_wraps() {
        assert_eq!(marking_offset(0.0), 0.0);
        assert!((marking_offset(350.0) - 35.0).abs() < 1e-4);
        assert!((marking_offset(700.0)).abs() < 1e-4);
        assert!((marking_offset(1050.0) - 35.0).abs() < 1e-3);
    }

    #[test]
    fn test_scene_has_triangles_and_obstacles() {
        let mut state = GameState::new(4, PlayField::new(400.0, 700.0));
        state.start();
        let empty = build_scene(&state.view(), SceneOptions::default());
        assert_eq!(empty.len() % 3, 0);

        let ob = crate::sim::spawner::random_obstacle(
            &state.field,
            (state.player.width, state.player.height),
            &mut rand_pcg::Pcg32::new(1, 1),
        );
        state.add_obstacle(ob);
        let with_obstacle = build_scene(&state.view(), SceneOptions::default());
        // shadow + body + window, two triangles each
        assert_eq!(with_obstacle.len(), empty.len() + 18);
    }

    #[test]
    fn test_reduced_motion_freezes_markings() {
        let mut state = GameState::new(4, PlayField::new(400.0, 700.0));
        state.start();
        state.clock.distance = 350.0;
        let still = SceneOptions {
            reduced_motion: true,
        };
        let moving = build_scene(&state.view(), SceneOptions::default());
        let frozen = build_scene(&state.view(), still);
        assert_eq!(moving.len(), frozen.len());
        assert_ne!(moving, frozen);

        state.clock.distance = 0.0;
        assert_eq!(build_scene(&state.view(), still), frozen);
    }
}
