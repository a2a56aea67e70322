//! Canvas rendering
//!
//! Painting is a pure read of the game state; nothing here feeds back into
//! the simulation.

pub mod palette;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
