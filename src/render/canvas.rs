//! 2D canvas painter
//!
//! Paints the seesaw scene onto a `CanvasRenderingContext2d`. All geometry
//! comes from [`layout`](super::layout); this module only issues drawing
//! calls, so it stays wasm-only and untested.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::layout;
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::Weight;

const PLANK_COLOR: &str = "#888";
const PIVOT_COLOR: &str = "#666";
const MARKER_COLOR: &str = "#c0392b";
const TICK_COLOR: &str = "#000";

/// Owns the 2D context for the game canvas
pub struct CanvasScene {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasScene {
    /// Acquire the 2D context. Returns `None` when the context is
    /// unavailable; the driver logs and keeps the game logic running.
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Redraw the whole scene for the given weights
    pub fn draw(&self, weights: &[Weight], net_torque: f32, settings: &Settings) {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, self.width, self.height);
        ctx.save();

        // Pivot-centered frame, tilted by the net torque
        let _ = ctx.translate(self.width / 2.0, self.height / 2.0);
        let _ = ctx.rotate(settings.effective_tilt(layout::tilt_angle(net_torque)) as f64);

        // Plank and pivot post
        ctx.set_fill_style_str(PLANK_COLOR);
        ctx.fill_rect(
            -PLANK_HALF_LENGTH as f64,
            -(PLANK_THICKNESS / 2.0) as f64,
            (PLANK_HALF_LENGTH * 2.0) as f64,
            PLANK_THICKNESS as f64,
        );
        ctx.set_fill_style_str(PIVOT_COLOR);
        ctx.fill_rect(
            -(PIVOT_WIDTH / 2.0) as f64,
            PLANK_THICKNESS as f64,
            PIVOT_WIDTH as f64,
            PIVOT_HEIGHT as f64,
        );

        if settings.show_tick_marks {
            self.draw_ticks();
        }

        // Weight markers resting on the plank
        ctx.set_fill_style_str(MARKER_COLOR);
        for marker in layout::markers(weights) {
            let radius = (marker.size / 2.0) as f64;
            let cy = -(PLANK_THICKNESS / 2.0) as f64 - radius;
            ctx.begin_path();
            let _ = ctx.arc(
                marker.x as f64,
                cy,
                radius,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.fill();
        }

        ctx.restore();
    }

    fn draw_ticks(&self) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(TICK_COLOR);
        ctx.set_line_width(2.0);
        for x in layout::tick_positions() {
            for side in [x as f64, -(x as f64)] {
                ctx.begin_path();
                ctx.move_to(side, -TICK_HALF_HEIGHT as f64);
                ctx.line_to(side, TICK_HALF_HEIGHT as f64);
                ctx.stroke();
            }
        }
    }
}
