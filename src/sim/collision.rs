//! Collision tests and the bounce policy
//!
//! Contacts never compute a true surface normal. The axis to flip is chosen
//! by a horizontal-span test: a contact flips vertical velocity when the
//! ball's horizontal center lies within the target's span, horizontal
//! otherwise. Near-corner hits therefore bounce like face hits; that is the
//! behavior this game ships with.

use glam::Vec2;

use super::rect::Rect;
use crate::consts::CONTACT_EPS;

/// Velocity component to flip on a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Outcome of the wall tests for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Ball crossed the left or right edge
    pub flip_x: bool,
    /// Ball crossed the top edge
    pub flip_y: bool,
    /// Ball's bottom edge passed the bottom of the canvas (terminal)
    pub out_bottom: bool,
}

/// Test the ball against the canvas edges
pub fn ball_wall_collision(pos: Vec2, radius: f32, bounds: Vec2) -> WallContact {
    WallContact {
        flip_x: pos.x + radius > bounds.x || pos.x - radius < 0.0,
        flip_y: pos.y - radius < 0.0,
        out_bottom: pos.y + radius > bounds.y,
    }
}

/// Axis to flip for a contact with `rect`
pub fn bounce_axis(center_x: f32, rect: &Rect) -> Axis {
    if rect.spans_x(center_x) {
        Axis::Vertical
    } else {
        Axis::Horizontal
    }
}

/// Test the ball center against a block
///
/// The test is center-in-rectangle, not circle overlap: a graze that never
/// brings the center inside leaves the block standing.
pub fn ball_block_collision(pos: Vec2, block: &Rect) -> Option<Axis> {
    if block.contains_point(pos) {
        Some(bounce_axis(pos.x, block))
    } else {
        None
    }
}

/// Test the ball against the paddle
///
/// Face contact: center over the paddle, center height within the contact
/// band of the top or bottom face. Side contact: the ball's horizontal
/// extremity within the band of a side while the ball reaches below the
/// paddle top. The axis follows from the horizontal-span policy either way.
pub fn ball_paddle_collision(pos: Vec2, radius: f32, paddle: &Rect) -> Option<Axis> {
    let on_face = paddle.spans_x(pos.x)
        && ((pos.y - paddle.top()).abs() <= CONTACT_EPS
            || (pos.y - paddle.bottom()).abs() <= CONTACT_EPS);
    if on_face {
        return Some(bounce_axis(pos.x, paddle));
    }

    let on_side = ((pos.x + radius - paddle.left()).abs() <= CONTACT_EPS
        || (pos.x - radius - paddle.right()).abs() <= CONTACT_EPS)
        && pos.y + radius > paddle.top();
    if on_side {
        return Some(Axis::Horizontal);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_left_right() {
        let bounds = Vec2::new(480.0, 320.0);
        let hit = ball_wall_collision(Vec2::new(475.0, 100.0), 10.0, bounds);
        assert!(hit.flip_x && !hit.flip_y && !hit.out_bottom);

        let hit = ball_wall_collision(Vec2::new(5.0, 100.0), 10.0, bounds);
        assert!(hit.flip_x);

        let hit = ball_wall_collision(Vec2::new(240.0, 100.0), 10.0, bounds);
        assert_eq!(hit, WallContact::default());
    }

    #[test]
    fn test_wall_top_and_bottom() {
        let bounds = Vec2::new(480.0, 320.0);
        let hit = ball_wall_collision(Vec2::new(240.0, 5.0), 10.0, bounds);
        assert!(hit.flip_y && !hit.out_bottom);

        let hit = ball_wall_collision(Vec2::new(240.0, 315.0), 10.0, bounds);
        assert!(hit.out_bottom && !hit.flip_y);
    }

    #[test]
    fn test_wall_touching_edge_is_no_contact() {
        // Strict inequalities: resting exactly on an edge does not flip
        let bounds = Vec2::new(480.0, 320.0);
        let hit = ball_wall_collision(Vec2::new(470.0, 10.0), 10.0, bounds);
        assert_eq!(hit, WallContact::default());
    }

    #[test]
    fn test_block_hit_flips_vertical() {
        let block = Rect::new(40.0, 16.0, 40.0, 16.0);
        // Center inside the block; center x always lies within the span, so
        // the flip is vertical
        let axis = ball_block_collision(Vec2::new(60.0, 24.0), &block);
        assert_eq!(axis, Some(Axis::Vertical));
    }

    #[test]
    fn test_block_miss() {
        let block = Rect::new(40.0, 16.0, 40.0, 16.0);
        assert_eq!(ball_block_collision(Vec2::new(100.0, 24.0), &block), None);
        // On the edge is a miss too
        assert_eq!(ball_block_collision(Vec2::new(40.0, 24.0), &block), None);
    }

    #[test]
    fn test_paddle_face_flips_vertical() {
        let paddle = Rect::new(210.0, 288.0, 60.0, 8.0);
        // Ball center directly on the top face, inside the span
        let axis = ball_paddle_collision(Vec2::new(240.0, 288.0), 10.0, &paddle);
        assert_eq!(axis, Some(Axis::Vertical));

        // Within the contact band still counts
        let axis = ball_paddle_collision(Vec2::new(240.0, 288.0 + CONTACT_EPS), 10.0, &paddle);
        assert_eq!(axis, Some(Axis::Vertical));
    }

    #[test]
    fn test_paddle_face_outside_span_is_miss() {
        let paddle = Rect::new(210.0, 288.0, 60.0, 8.0);
        let axis = ball_paddle_collision(Vec2::new(300.0, 288.0), 10.0, &paddle);
        assert_eq!(axis, None);
    }

    #[test]
    fn test_paddle_side_flips_horizontal() {
        let paddle = Rect::new(210.0, 288.0, 60.0, 8.0);
        // Ball's right extremity at the paddle's left side, dipping below
        // the paddle top
        let axis = ball_paddle_collision(Vec2::new(200.0, 290.0), 10.0, &paddle);
        assert_eq!(axis, Some(Axis::Horizontal));

        // Same extremity but entirely above the paddle: miss
        let axis = ball_paddle_collision(Vec2::new(200.0, 250.0), 10.0, &paddle);
        assert_eq!(axis, None);
    }

    #[test]
    fn test_paddle_far_away_is_miss() {
        let paddle = Rect::new(210.0, 288.0, 60.0, 8.0);
        assert_eq!(ball_paddle_collision(Vec2::new(50.0, 50.0), 10.0, &paddle), None);
    }
}
