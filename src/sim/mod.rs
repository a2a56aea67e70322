//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per tick
//! - Stable iteration order (creation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{
    Axis, WallContact, ball_block_collision, ball_paddle_collision, ball_wall_collision,
};
pub use rect::Rect;
pub use state::{Ball, Block, GameEvent, GamePhase, GameState, Layout, Paddle};
pub use tick::{TickInput, tick};
