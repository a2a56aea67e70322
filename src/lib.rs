//! Canvas Breakout - a block-breaking arcade game for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `render`: 2D canvas painting (a pure read of the game state)
//! - `settings`: Render configuration supplied by the host page
//!
//! Build for the web with `trunk serve`; the native binary runs a headless
//! autoplay of the simulation.

pub mod render;
pub mod settings;
pub mod sim;

pub use settings::RenderSettings;

/// Game configuration constants
pub mod consts {
    /// Game clock period in milliseconds
    pub const TICK_INTERVAL_MS: i32 = 5;

    /// Block grid dimensions
    pub const GRID_COLS: u32 = 12;
    pub const GRID_ROWS: u32 = 8;
    /// Fraction of canvas height covered by the block band
    pub const GRID_HEIGHT_FRAC: f32 = 0.4;

    /// Ball radius in canvas pixels
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-tick displacement of the ball along each axis
    pub const BALL_STEP: f32 = BALL_RADIUS / 2.0;

    /// Paddle dimensions in block units
    pub const PADDLE_WIDTH_BLOCKS: f32 = 1.5;
    pub const PADDLE_HEIGHT_BLOCKS: f32 = 0.5;

    /// Contact band for paddle face/side tests. Half a tick step, so each
    /// lattice crossing registers exactly once.
    pub const CONTACT_EPS: f32 = BALL_STEP / 2.0;

    /// Shading strips per block (drawn as mirrored pairs)
    pub const SHADE_STRIPS: u32 = 20;
}
