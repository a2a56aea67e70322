//! Fixed-step simulation tick

use super::collision::{Axis, ball_block_collision, ball_paddle_collision, ball_wall_collision};
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer x in canvas space; the paddle tracks it
    pub pointer_x: Option<f32>,
}

/// Advance the game state by one step
///
/// Velocity is resolved against the current ball position first, then the
/// position advances by exactly the (possibly flipped) velocity. Returned
/// events are for the driver to log; the sim itself stays silent.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.time_ticks += 1;

    // Paddle tracks the pointer, centered under it, clamped to the canvas
    if let Some(x) = input.pointer_x {
        state.paddle.x = state
            .layout
            .clamp_paddle_x(x - state.layout.paddle_size.x / 2.0);
    }

    // Walls
    let wall = ball_wall_collision(state.ball.pos, state.ball.radius, state.layout.bounds);
    if wall.flip_x {
        state.ball.vel.x = -state.ball.vel.x;
        events.push(GameEvent::WallBounce);
    }
    if wall.flip_y {
        state.ball.vel.y = -state.ball.vel.y;
        events.push(GameEvent::WallBounce);
    }

    // Blocks: first match in creation order wins, at most one per tick
    let hit = state.blocks.iter().enumerate().find_map(|(i, block)| {
        ball_block_collision(state.ball.pos, &state.layout.block_rect(block))
            .map(|axis| (i, block.id, axis))
    });
    if let Some((i, id, axis)) = hit {
        flip(state, axis);
        state.blocks.remove(i);
        events.push(GameEvent::BlockDestroyed { id });
    }

    // Paddle
    let paddle_rect = state.layout.paddle_rect(&state.paddle);
    if let Some(axis) = ball_paddle_collision(state.ball.pos, state.ball.radius, &paddle_rect) {
        flip(state, axis);
        events.push(GameEvent::PaddleBounce);
    }

    // Advance by exactly the current velocity, once per tick. The terminal
    // tick still advances; every later tick returns at the top.
    state.ball.pos += state.ball.vel;

    if wall.out_bottom {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver);
    }

    events
}

fn flip(state: &mut GameState, axis: Axis) {
    match axis {
        Axis::Horizontal => state.ball.vel.x = -state.ball.vel.x,
        Axis::Vertical => state.ball.vel.y = -state.ball.vel.y,
    }
}
