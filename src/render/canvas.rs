//! 2D-context renderer
//!
//! Repaints the whole canvas every tick: background, blocks, paddle, ball,
//! and optionally the debug overlay. No dirty-rectangle tracking.

use web_sys::CanvasRenderingContext2d;

use super::palette::{BASE_COLOR, CANVAS_COLOR, DEBUG_COLOR, PADDLE_COLOR, row_color};
use crate::consts::SHADE_STRIPS;
use crate::settings::RenderSettings;
use crate::sim::{Ball, GameState, Rect};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    settings: RenderSettings,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, settings: RenderSettings) -> Self {
        Self { ctx, settings }
    }

    /// Paint one frame from the current state
    pub fn draw(&self, state: &GameState) {
        self.clear(state);
        self.draw_blocks(state);
        self.draw_paddle(state);
        self.draw_ball(&state.ball);
        if self.settings.debug_overlay {
            self.draw_overlay(state);
        }
    }

    fn clear(&self, state: &GameState) {
        let bounds = state.layout.bounds;
        self.ctx.set_fill_style_str(CANVAS_COLOR);
        self.ctx.set_stroke_style_str("black");
        self.ctx.fill_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);
        self.ctx.stroke_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);
    }

    fn draw_blocks(&self, state: &GameState) {
        self.ctx.set_line_width(2.0);
        for block in &state.blocks {
            let rect = state.layout.block_rect(block);
            self.draw_block(&rect, row_color(block.row));
        }
        self.ctx.set_line_width(1.0);
    }

    /// One block, either flat or with the mirrored alpha-strip shading
    fn draw_block(&self, rect: &Rect, color: &str) {
        let (x, y) = (rect.left() as f64, rect.top() as f64);
        let (w, h) = (rect.size.x as f64, rect.size.y as f64);

        if !self.settings.shading {
            self.ctx.set_fill_style_str(color);
            self.ctx.fill_rect(x, y, w, h);
            self.ctx.set_stroke_style_str(CANVAS_COLOR);
            self.ctx.stroke_rect(x, y, w, h);
            return;
        }

        // White base coat, then translucent strips of the row color laid
        // symmetrically from both edges toward the center
        self.ctx.set_fill_style_str(BASE_COLOR);
        self.ctx.fill_rect(x, y, w, h);

        self.ctx.set_fill_style_str(color);
        let strips = SHADE_STRIPS as f64;
        let strip_w = w / strips;
        for j in (0..SHADE_STRIPS / 2).rev() {
            let j = j as f64;
            self.ctx.set_global_alpha(0.65 + (j + 1.0) / (2.0 * strips));
            self.ctx.fill_rect(x + j * strip_w, y, strip_w, h);
            self.ctx.fill_rect(x + (strips - 1.0 - j) * strip_w, y, strip_w, h);
        }
        self.ctx.set_global_alpha(1.0);

        self.ctx.set_stroke_style_str(color);
        self.ctx.stroke_rect(x, y, w, h);
    }

    fn draw_paddle(&self, state: &GameState) {
        let rect = state.layout.paddle_rect(&state.paddle);
        self.ctx.set_fill_style_str(PADDLE_COLOR);
        self.ctx.set_stroke_style_str(CANVAS_COLOR);
        self.ctx.fill_rect(
            rect.left() as f64,
            rect.top() as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
        self.ctx.stroke_rect(
            rect.left() as f64,
            rect.top() as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn draw_ball(&self, ball: &Ball) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(BASE_COLOR);
        self.ctx.set_stroke_style_str(PADDLE_COLOR);
        self.ctx
            .arc(
                ball.pos.x as f64,
                ball.pos.y as f64,
                ball.radius as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .ok();
        self.ctx.stroke();
        self.ctx.fill();
        self.ctx.close_path();
    }

    /// Paddle edges and the ball's center, in red
    fn draw_overlay(&self, state: &GameState) {
        let rect = state.layout.paddle_rect(&state.paddle);
        let (l, r) = (rect.left() as f64, rect.right() as f64);
        let (t, b) = (rect.top() as f64, rect.bottom() as f64);

        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(DEBUG_COLOR);
        self.ctx.set_line_width(1.0);
        self.ctx.move_to(l, t);
        self.ctx.line_to(r, t);
        self.ctx.line_to(r, b);
        self.ctx.line_to(l, b);
        self.ctx.line_to(l, t);
        self.ctx.stroke();

        self.ctx.begin_path();
        self.ctx
            .stroke_rect(state.ball.pos.x as f64, state.ball.pos.y as f64, 1.0, 1.0);
        self.ctx.stroke();
    }
}
