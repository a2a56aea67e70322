//! Render configuration from the host page
//!
//! Read once at startup from the canvas element's `data-settings` JSON
//! attribute. Nothing is written back anywhere.

use serde::{Deserialize, Serialize};

/// Renderer toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Alpha-strip shading on blocks; off means flat fills
    pub shading: bool,
    /// Red paddle-edge and ball-position overlay
    pub debug_overlay: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            shading: true,
            debug_overlay: false,
        }
    }
}

impl RenderSettings {
    /// Parse an attribute payload, falling back to defaults on bad input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Bad settings payload ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Settings from a canvas element's `data-settings` attribute
    #[cfg(target_arch = "wasm32")]
    pub fn from_canvas(canvas: &web_sys::HtmlCanvasElement) -> Self {
        match canvas.get_attribute("data-settings") {
            Some(json) => Self::from_json(&json),
            None => {
                log::info!("No settings attribute, using defaults");
                Self::default()
            }
        }
    }
}
