//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Ball left through the bottom edge; the clock stays cancelled
    GameOver,
}

/// Canvas bounds and the dimensions shared by every entity
///
/// Everything derives from the canvas size: 12 columns of blocks across the
/// full width, 8 rows covering the top 40% of the canvas, paddle 1.5 blocks
/// wide and half a block tall, its top edge two block heights above the
/// bottom.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Layout {
    /// Canvas width/height
    pub bounds: Vec2,
    /// Size shared by all blocks
    pub block_size: Vec2,
    pub paddle_size: Vec2,
    /// Fixed y of the paddle's top edge
    pub paddle_top: f32,
}

impl Layout {
    pub fn new(width: f32, height: f32) -> Self {
        let block_size = Vec2::new(
            width / GRID_COLS as f32,
            height * GRID_HEIGHT_FRAC / GRID_ROWS as f32,
        );
        let paddle_size = Vec2::new(
            block_size.x * PADDLE_WIDTH_BLOCKS,
            block_size.y * PADDLE_HEIGHT_BLOCKS,
        );
        Self {
            bounds: Vec2::new(width, height),
            block_size,
            paddle_size,
            paddle_top: height - 2.0 * block_size.y,
        }
    }

    /// Clamp a paddle x so the paddle never leaves the canvas
    pub fn clamp_paddle_x(&self, x: f32) -> f32 {
        x.clamp(0.0, self.bounds.x - self.paddle_size.x)
    }

    /// Rectangle occupied by a block
    pub fn block_rect(&self, block: &Block) -> Rect {
        Rect {
            origin: block.origin,
            size: self.block_size,
        }
    }

    /// Rectangle occupied by the paddle
    pub fn paddle_rect(&self, paddle: &Paddle) -> Rect {
        Rect {
            origin: Vec2::new(paddle.x, self.paddle_top),
            size: self.paddle_size,
        }
    }
}

/// A block entity. Immutable once created; removed from the set when hit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Block {
    pub id: u32,
    /// Top-left corner
    pub origin: Vec2,
    /// Grid row, counted from the top; determines color
    pub row: u8,
}

/// The player's paddle. Only x moves; input drives it, clamped to the canvas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
}

/// The ball
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Observable outcomes of a single tick, for the driver to log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallBounce,
    PaddleBounce,
    BlockDestroyed { id: u32 },
    GameOver,
}

/// Complete game state
///
/// Exactly one ball and one paddle exist, by construction; the block set
/// only shrinks over a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub layout: Layout,
    /// Active blocks, in creation order (row-major from the top-left)
    pub blocks: Vec<Block>,
    pub paddle: Paddle,
    pub ball: Ball,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a fresh game for a canvas of the given size: full block grid,
    /// paddle centered, ball resting on the paddle and already moving up
    /// and to the right.
    pub fn new(width: f32, height: f32) -> Self {
        let layout = Layout::new(width, height);

        let mut blocks = Vec::with_capacity((GRID_ROWS * GRID_COLS) as usize);
        let mut next_id = 1;
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                blocks.push(Block {
                    id: next_id,
                    origin: Vec2::new(
                        col as f32 * layout.block_size.x,
                        row as f32 * layout.block_size.y,
                    ),
                    row: row as u8,
                });
                next_id += 1;
            }
        }

        let paddle = Paddle {
            x: (width - layout.paddle_size.x) / 2.0,
        };
        let ball = Ball {
            pos: Vec2::new(width / 2.0, layout.paddle_top - BALL_RADIUS),
            vel: Vec2::new(BALL_STEP, -BALL_STEP),
            radius: BALL_RADIUS,
        };

        Self {
            layout,
            blocks,
            paddle,
            ball,
            phase: GamePhase::Playing,
            time_ticks: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_grid() {
        let state = GameState::new(480.0, 320.0);
        assert_eq!(state.blocks.len(), (GRID_ROWS * GRID_COLS) as usize);

        // Row-major creation order with ids from 1
        assert_eq!(state.blocks[0].id, 1);
        assert_eq!(state.blocks[0].origin, Vec2::ZERO);
        assert_eq!(state.blocks[0].row, 0);
        let last = state.blocks.last().unwrap();
        assert_eq!(last.id, 96);
        assert_eq!(last.row, (GRID_ROWS - 1) as u8);

        // The grid band covers the top 40% of the canvas
        let band_bottom = last.origin.y + state.layout.block_size.y;
        assert!((band_bottom - 320.0 * GRID_HEIGHT_FRAC).abs() < 1e-3);
    }

    #[test]
    fn test_new_game_layout() {
        let state = GameState::new(480.0, 320.0);
        let layout = &state.layout;
        assert_eq!(layout.block_size, Vec2::new(40.0, 16.0));
        assert_eq!(layout.paddle_size, Vec2::new(60.0, 8.0));
        assert_eq!(layout.paddle_top, 288.0);

        // Paddle centered, ball resting just above it at mid-canvas
        assert_eq!(state.paddle.x, 210.0);
        assert_eq!(state.ball.pos, Vec2::new(240.0, 278.0));
        assert_eq!(state.ball.vel, Vec2::new(BALL_STEP, -BALL_STEP));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_clamp_paddle_x() {
        let layout = Layout::new(480.0, 320.0);
        assert_eq!(layout.clamp_paddle_x(-50.0), 0.0);
        assert_eq!(layout.clamp_paddle_x(1000.0), 480.0 - 60.0);
        assert_eq!(layout.clamp_paddle_x(200.0), 200.0);
    }

    #[test]
    fn test_block_rect_uses_shared_size() {
        let state = GameState::new(480.0, 320.0);
        let rect = state.layout.block_rect(&state.blocks[13]);
        assert_eq!(rect.size, state.layout.block_size);
        // Block 13 (id 14) is row 1, col 1
        assert_eq!(rect.origin, Vec2::new(40.0, 16.0));
    }
}
